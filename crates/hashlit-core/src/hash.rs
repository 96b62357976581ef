/// Size of a hash value in bytes (`std::array<uint8_t, 32>` on the C++ side).
pub const HASH_SIZE: usize = 32;

/// Length of a full hash digest in hex characters.
pub const HASH_HEX_LEN: usize = HASH_SIZE * 2;

/// Decode a full-length hex digest into its raw bytes. Strict and fail-fast.
///
/// Rules:
/// - input must be exactly `HASH_HEX_LEN` characters
/// - every character must be a hex digit
///
/// Error strings are exact and stable for CI / integrations.
pub fn parse_digest(s: &str) -> Result<[u8; HASH_SIZE], String> {
    if s.len() != HASH_HEX_LEN {
        return Err(format!(
            "expected {HASH_HEX_LEN} hex characters, got {}",
            s.len()
        ));
    }

    let bytes = hex::decode(s).map_err(|err| match err {
        hex::FromHexError::InvalidHexCharacter { c, index } => {
            format!("invalid hex character '{c}' at index {index}")
        }
        _ => "invalid hex input".to_string(),
    })?;

    let mut hash = [0u8; HASH_SIZE];
    hash.copy_from_slice(&bytes);
    Ok(hash)
}
