use archive_core::{ArchiveError, ArchiveResult};

/// Split a canonical entity string on its first colon only, so values
/// may themselves contain colons. Fails if there is no colon, or either
/// side is empty.
pub fn parse(entity: &str) -> ArchiveResult<(&str, &str)> {
    match entity.split_once(':') {
        Some((ty, value)) if !ty.is_empty() && !value.is_empty() => Ok((ty, value)),
        _ => Err(ArchiveError::InvalidEntityFormat(entity.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_first_colon_only() {
        let (ty, value) = parse("Url:https://example.com:8080/a").unwrap();
        assert_eq!(ty, "Url");
        assert_eq!(value, "https://example.com:8080/a");
    }

    #[test]
    fn rejects_missing_colon() {
        assert!(parse("NoColon").is_err());
    }

    #[test]
    fn rejects_empty_type_or_value() {
        assert!(parse(":value").is_err());
        assert!(parse("type:").is_err());
    }
}
