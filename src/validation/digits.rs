use crate::utils::IdentifierError;

/// Split an identifier into exactly `N` ASCII digits.
pub(crate) fn parse_digits<const N: usize>(input: &str) -> Result<[u32; N], IdentifierError> {
    let actual = input.chars().count();
    if actual != N {
        return Err(IdentifierError::InvalidLength { expected: N, actual });
    }

    let mut digits = [0u32; N];
    for (position, (slot, c)) in digits.iter_mut().zip(input.chars()).enumerate() {
        *slot = c
            .to_digit(10)
            .ok_or(IdentifierError::NonDigit { position, found: c })?;
    }
    Ok(digits)
}

/// Σ digit × weight over the payload digits.
pub(crate) fn weighted_sum(payload: &[u32], weights: &[u32]) -> u32 {
    payload.iter().zip(weights).map(|(digit, weight)| digit * weight).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_digits() {
        assert_eq!(parse_digits::<3>("042"), Ok([0, 4, 2]));
        assert_eq!(
            parse_digits::<3>("04"),
            Err(IdentifierError::InvalidLength { expected: 3, actual: 2 })
        );
        assert_eq!(
            parse_digits::<3>("0x2"),
            Err(IdentifierError::NonDigit { position: 1, found: 'x' })
        );
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        // Arabic-Indic digits are numeric in Unicode but not identifier digits
        assert!(matches!(
            parse_digits::<2>("٤٤"),
            Err(IdentifierError::NonDigit { position: 0, .. })
        ));
    }
}
