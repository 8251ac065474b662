//! Generators: UUIDs and random strings.

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;
use uuid::Uuid;

/// Upper bound on a single generation request.
pub const MAX_BATCH: usize = 500;
pub const MAX_STRING_LENGTH: usize = 1024;

const LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()-_=+[]{};:,.<>?";

#[derive(Debug, Error, PartialEq)]
pub enum GenerateError {
    #[error("count must be between 1 and {MAX_BATCH}")]
    BadCount,
    #[error("length must be between 1 and {MAX_STRING_LENGTH}")]
    BadLength,
    #[error("at least one character class must be enabled")]
    EmptyAlphabet,
}

/// Generate a batch of version 4 UUIDs.
pub fn uuids(count: usize) -> Result<Vec<String>, GenerateError> {
    if count == 0 || count > MAX_BATCH {
        return Err(GenerateError::BadCount);
    }
    Ok((0..count).map(|_| Uuid::new_v4().to_string()).collect())
}

/// Character classes available to the random string generator.
#[derive(Debug, Clone, Copy)]
pub struct CharClasses {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Default for CharClasses {
    fn default() -> Self {
        Self {
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: false,
        }
    }
}

impl CharClasses {
    fn alphabet(&self) -> Vec<u8> {
        let mut alphabet = Vec::new();
        if self.lowercase {
            alphabet.extend_from_slice(LOWER);
        }
        if self.uppercase {
            alphabet.extend_from_slice(UPPER);
        }
        if self.digits {
            alphabet.extend_from_slice(DIGITS);
        }
        if self.symbols {
            alphabet.extend_from_slice(SYMBOLS);
        }
        alphabet
    }
}

/// Generate a random string drawn uniformly from the enabled classes.
///
/// Every enabled class is guaranteed to appear at least once when the
/// length allows it.
pub fn random_string(length: usize, classes: CharClasses) -> Result<String, GenerateError> {
    if length == 0 || length > MAX_STRING_LENGTH {
        return Err(GenerateError::BadLength);
    }
    let alphabet = classes.alphabet();
    if alphabet.is_empty() {
        return Err(GenerateError::EmptyAlphabet);
    }

    let mut rng = rand::thread_rng();
    let mut bytes: Vec<u8> = (0..length)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect();

    // Guarantee one character from each enabled class, then reshuffle.
    let mut required: Vec<&[u8]> = Vec::new();
    if classes.lowercase {
        required.push(LOWER);
    }
    if classes.uppercase {
        required.push(UPPER);
    }
    if classes.digits {
        required.push(DIGITS);
    }
    if classes.symbols {
        required.push(SYMBOLS);
    }
    if required.len() <= length {
        for (i, class) in required.iter().enumerate() {
            bytes[i] = class[rng.gen_range(0..class.len())];
        }
        bytes.shuffle(&mut rng);
    }

    Ok(String::from_utf8(bytes).expect("alphabet is ASCII"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_batch_size_and_format() {
        let batch = uuids(5).unwrap();
        assert_eq!(batch.len(), 5);
        for id in &batch {
            let parsed = Uuid::parse_str(id).unwrap();
            assert_eq!(parsed.get_version_num(), 4);
        }
    }

    #[test]
    fn uuid_count_bounds() {
        assert_eq!(uuids(0), Err(GenerateError::BadCount));
        assert_eq!(uuids(MAX_BATCH + 1), Err(GenerateError::BadCount));
    }

    #[test]
    fn random_string_respects_classes() {
        let s = random_string(
            64,
            CharClasses {
                lowercase: false,
                uppercase: false,
                digits: true,
                symbols: false,
            },
        )
        .unwrap();
        assert_eq!(s.len(), 64);
        assert!(s.bytes().all(|b| b.is_ascii_digit()));
    }

    #[test]
    fn every_enabled_class_appears() {
        let classes = CharClasses {
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: true,
        };
        let s = random_string(8, classes).unwrap();
        assert!(s.bytes().any(|b| b.is_ascii_lowercase()));
        assert!(s.bytes().any(|b| b.is_ascii_uppercase()));
        assert!(s.bytes().any(|b| b.is_ascii_digit()));
        assert!(s.bytes().any(|b| SYMBOLS.contains(&b)));
    }

    #[test]
    fn empty_alphabet_is_rejected() {
        let none = CharClasses {
            lowercase: false,
            uppercase: false,
            digits: false,
            symbols: false,
        };
        assert_eq!(random_string(8, none), Err(GenerateError::EmptyAlphabet));
    }
}
