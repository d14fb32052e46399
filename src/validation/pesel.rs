use crate::utils::IdentifierError;
use crate::validation::digits::{parse_digits, weighted_sum};
use chrono::NaiveDate;
use serde_json::Value;
use std::fmt;

pub const PESEL_LENGTH: usize = 11;

const PESEL_WEIGHTS: [u32; 10] = [1, 3, 7, 9, 1, 3, 7, 9, 1, 3];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Female,
    Male,
}

/// A PESEL whose control digit has been verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pesel {
    digits: [u32; PESEL_LENGTH],
}

impl Pesel {
    pub fn parse(input: &str) -> Result<Self, IdentifierError> {
        let digits = parse_digits::<PESEL_LENGTH>(input)?;

        let expected = control_digit(&digits[..PESEL_LENGTH - 1]);
        let found = digits[PESEL_LENGTH - 1];
        if expected != found {
            return Err(IdentifierError::ChecksumMismatch { expected, found });
        }

        Ok(Pesel { digits })
    }

    /// Date of birth encoded in the first six digits.
    ///
    /// The century is carried in the month: +80 for the 1800s, +0 for the
    /// 1900s, +20 for the 2000s, +40 for the 2100s and +60 for the 2200s.
    /// Returns `None` when the digits do not form a calendar date.
    pub fn birth_date(&self) -> Option<NaiveDate> {
        let d = &self.digits;
        let year = (d[0] * 10 + d[1]) as i32;
        let month_code = d[2] * 10 + d[3];
        let day = d[4] * 10 + d[5];

        let (century, month) = match month_code {
            81..=92 => (1800, month_code - 80),
            1..=12 => (1900, month_code),
            21..=32 => (2000, month_code - 20),
            41..=52 => (2100, month_code - 40),
            61..=72 => (2200, month_code - 60),
            _ => return None,
        };

        NaiveDate::from_ymd_opt(century + year, month, day)
    }

    pub fn sex(&self) -> Sex {
        if self.digits[9] % 2 == 1 {
            Sex::Male
        } else {
            Sex::Female
        }
    }

    pub fn control_digit(&self) -> u32 {
        self.digits[PESEL_LENGTH - 1]
    }
}

impl fmt::Display for Pesel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for digit in self.digits {
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}

/// Control digit for the ten payload digits: (10 - Σ mod 10) mod 10.
pub fn control_digit(payload: &[u32]) -> u32 {
    let sum = weighted_sum(payload, &PESEL_WEIGHTS);
    (10 - sum % 10) % 10
}

pub fn is_valid_pesel(input: &str) -> bool {
    Pesel::parse(input).is_ok()
}

/// Same as [`is_valid_pesel`] for loosely typed input; anything that is not
/// a JSON string is invalid.
pub fn is_valid_pesel_value(value: &Value) -> bool {
    match value {
        Value::String(text) => is_valid_pesel(text),
        _ => false,
    }
}
