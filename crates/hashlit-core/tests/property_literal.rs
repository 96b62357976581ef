use proptest::prelude::*;

use hashlit_core::literal::hash_literal;

fn byte_tokens(literal: &str) -> Vec<String> {
    let body = literal
        .strip_prefix("hash_t FIXME{")
        .expect("literal prefix")
        .strip_suffix("};")
        .expect("literal suffix");

    if body.is_empty() {
        return Vec::new();
    }
    body.split(", ").map(str::to_string).collect()
}

proptest! {
    #[test]
    fn full_digest_yields_32_tokens_in_order(digest in "[0-9a-fA-F]{64}") {
        let tokens = byte_tokens(&hash_literal(&digest, "FIXME"));

        prop_assert_eq!(tokens.len(), 32);
        for (i, token) in tokens.iter().enumerate() {
            prop_assert_eq!(token, &format!("0x{}", &digest[i * 2..i * 2 + 2]));
        }
    }

    #[test]
    fn token_count_is_floor_of_half_length(digest in "[0-9a-f]{0,129}") {
        let tokens = byte_tokens(&hash_literal(&digest, "FIXME"));
        prop_assert_eq!(tokens.len(), digest.len() / 2);
    }

    #[test]
    fn formatting_is_pure(digest in ".{0,80}", name in "[A-Za-z_][A-Za-z0-9_]{0,20}") {
        let first = hash_literal(&digest, &name);
        let second = hash_literal(&digest, &name);
        prop_assert_eq!(first, second);
    }
}
