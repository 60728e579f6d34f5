use std::str::FromStr;

/// Parse a user-supplied enum value, naming the field in the error.
pub fn parse_choice<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse::<T>()
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

#[cfg(test)]
mod tests {
    use tbn_core::enums::{EditionType, ReadingStatus};

    use super::parse_choice;

    #[test]
    fn parses_status_case_insensitively() {
        let status: ReadingStatus = parse_choice("Completed", "status").unwrap();
        assert_eq!(status, ReadingStatus::Completed);
    }

    #[test]
    fn parses_edition() {
        let edition: EditionType = parse_choice("deluxe", "edition").unwrap();
        assert_eq!(edition, EditionType::Deluxe);
    }

    #[test]
    fn errors_name_the_field() {
        let err = parse_choice::<ReadingStatus>("done", "status").unwrap_err();
        assert!(err.to_string().contains("invalid status 'done'"));
    }
}
