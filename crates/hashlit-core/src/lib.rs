//! Formatting of hex hash digests as C++ `hash_t` initializer literals.
//!
//! The consuming C++ code declares `typedef std::array<uint8_t, 32> hash_t;`
//! and embeds precomputed hash constants (block hashes, merkle roots) as
//! aggregate initializers. This crate produces those initializers from the
//! hex form of a digest.

pub mod hash;
pub mod literal;

pub use hash::{HASH_HEX_LEN, HASH_SIZE, parse_digest};
pub use literal::hash_literal;
