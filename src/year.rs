use crate::error::YearError;

/// Parses a proleptic year number. Surrounding whitespace is ignored and a
/// leading sign is allowed, so "-44" is 45 BC. Every `i64` is accepted.
pub fn parse_year(input: &str) -> Result<i64, YearError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(YearError::Empty);
    }
    trimmed.parse().map_err(|source| YearError::NotAnInteger {
        input: trimmed.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year("2024"), Ok(2024));
        assert_eq!(parse_year("  1582\n"), Ok(1582));
        assert_eq!(parse_year("-44"), Ok(-44));
        assert_eq!(parse_year("+33"), Ok(33));
        assert_eq!(parse_year("0"), Ok(0));
    }

    #[test]
    fn test_parse_year_empty() {
        assert_eq!(parse_year(""), Err(YearError::Empty));
        assert_eq!(parse_year("   "), Err(YearError::Empty));
    }

    #[test]
    fn test_parse_year_not_an_integer() {
        let err = parse_year("twenty").unwrap_err();
        assert!(matches!(err, YearError::NotAnInteger { ref input, .. } if input == "twenty"));
        assert_eq!(err.to_string(), "'twenty' is not an integer year");
        assert!(parse_year("2024.5").is_err());
    }

    #[test]
    fn test_parse_year_accepts_integer_extremes() {
        assert_eq!(parse_year(&i64::MAX.to_string()), Ok(i64::MAX));
        assert_eq!(parse_year(&i64::MIN.to_string()), Ok(i64::MIN));
        assert!(matches!(
            parse_year("9223372036854775808"),
            Err(YearError::NotAnInteger { .. })
        ));
    }
}
