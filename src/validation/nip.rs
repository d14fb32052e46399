use crate::utils::IdentifierError;
use crate::validation::digits::{parse_digits, weighted_sum};
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;

pub const NIP_LENGTH: usize = 10;

const NIP_WEIGHTS: [u32; 9] = [6, 5, 7, 2, 3, 4, 5, 6, 7];

lazy_static! {
    // Separators people type between digit groups, e.g. 123-456-32-18
    static ref NIP_SEPARATORS: Regex = Regex::new(r"[ \-]").unwrap();
}

/// Remove spaces and hyphens.
pub fn normalize_nip(input: &str) -> Cow<'_, str> {
    NIP_SEPARATORS.replace_all(input, "")
}

/// A NIP whose control digit has been verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Nip {
    digits: [u32; NIP_LENGTH],
}

impl Nip {
    pub fn parse(input: &str) -> Result<Self, IdentifierError> {
        let normalized = normalize_nip(input);
        let digits = parse_digits::<NIP_LENGTH>(&normalized)?;

        let expected = checksum(&digits[..NIP_LENGTH - 1]);
        let found = digits[NIP_LENGTH - 1];
        if expected != found {
            return Err(IdentifierError::ChecksumMismatch { expected, found });
        }

        Ok(Nip { digits })
    }

    /// Canonical `XXX-XXX-XX-XX` grouping.
    pub fn formatted(&self) -> String {
        let bare = self.to_string();
        format!("{}-{}-{}-{}", &bare[0..3], &bare[3..6], &bare[6..8], &bare[8..10])
    }

    pub fn control_digit(&self) -> u32 {
        self.digits[NIP_LENGTH - 1]
    }
}

impl fmt::Display for Nip {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for digit in self.digits {
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}

/// Σ mod 11 over the nine payload digits. A result of 10 matches no control
/// digit, so such numbers are never valid.
pub fn checksum(payload: &[u32]) -> u32 {
    weighted_sum(payload, &NIP_WEIGHTS) % 11
}

pub fn is_valid_nip(input: &str) -> bool {
    Nip::parse(input).is_ok()
}

pub fn is_valid_nip_value(value: &Value) -> bool {
    match value {
        Value::String(text) => is_valid_nip(text),
        _ => false,
    }
}
