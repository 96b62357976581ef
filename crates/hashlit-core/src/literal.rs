/// Render a hex digest as a C++ `hash_t` aggregate initializer.
///
/// Rules:
/// - byte tokens are the non-overlapping left-to-right character pairs of
///   `digest`, each emitted as `0x` + the pair
/// - a trailing unpaired character is dropped
/// - characters are copied verbatim; this path performs no hex validation
///
/// Notes:
/// - Pairing is by `char`, not by byte, so arbitrary input cannot panic.
/// - The empty digest renders as `hash_t <name>{};`.
pub fn hash_literal(digest: &str, name: &str) -> String {
    let chars: Vec<char> = digest.chars().collect();

    // "0xNN, " per pair plus the fixed wrapper
    let mut out = String::with_capacity(chars.len() * 3 + name.len() + 10);
    out.push_str("hash_t ");
    out.push_str(name);
    out.push('{');

    for (i, pair) in chars.chunks_exact(2).enumerate() {
        if i != 0 {
            out.push_str(", ");
        }
        out.push_str("0x");
        out.push(pair[0]);
        out.push(pair[1]);
    }

    out.push_str("};");
    out
}
