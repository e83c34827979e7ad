use super::*;

/// Tests that token hashing yields the lowercase hex SHA-256 digest.
///
/// Expected: Known digest of "abc"
#[test]
fn produces_hex_sha256_digest() {
    assert_eq!(
        hash_token("abc"),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}
