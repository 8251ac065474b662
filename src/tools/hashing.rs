//! Hash calculator: digests of UTF-8 text, hex-encoded.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256, Sha512};

/// Supported digest algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    Md5,
    Sha256,
    Sha512,
}

impl HashAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
        }
    }
}

/// Compute the lowercase hex digest of `input` under the given algorithm.
pub fn digest_hex(algorithm: HashAlgorithm, input: &str) -> String {
    match algorithm {
        HashAlgorithm::Md5 => format!("{:x}", md5::compute(input.as_bytes())),
        HashAlgorithm::Sha256 => hex::encode(Sha256::digest(input.as_bytes())),
        HashAlgorithm::Sha512 => hex::encode(Sha512::digest(input.as_bytes())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_md5_vector() {
        assert_eq!(
            digest_hex(HashAlgorithm::Md5, "abc"),
            "900150983cd24fb0d6963f7d28e17f72"
        );
    }

    #[test]
    fn known_sha256_vector() {
        assert_eq!(
            digest_hex(HashAlgorithm::Sha256, "abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn known_sha512_vector() {
        assert_eq!(
            digest_hex(HashAlgorithm::Sha512, ""),
            "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce\
             47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e"
        );
    }

    #[test]
    fn algorithm_name_round_trip() {
        let algo: HashAlgorithm = serde_json::from_str("\"sha256\"").unwrap();
        assert_eq!(algo, HashAlgorithm::Sha256);
        assert_eq!(algo.as_str(), "sha256");
    }
}
