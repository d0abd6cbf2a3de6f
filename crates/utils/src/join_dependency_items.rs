/// Join dependency coordinates with semicolons for transport as a single
/// nested-build property.
///
/// Semicolon is the delimiter because coordinates never contain one, while
/// commas and colons collide with coordinate and build-path syntax.
pub fn join_dependency_items(dependencies: &[String]) -> Option<String> {
    if dependencies.is_empty() {
        None
    } else {
        Some(dependencies.join(";"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_empty_is_none() {
        assert_eq!(join_dependency_items(&[]), None);
    }

    #[test]
    fn test_join_single_item() {
        let items = vec!["org.example:extra-lib:1.0.0".to_string()];
        assert_eq!(
            join_dependency_items(&items),
            Some("org.example:extra-lib:1.0.0".to_string())
        );
    }

    #[test]
    fn test_join_multiple_items() {
        let items = vec![
            "org.example:extra-lib:1.0.0".to_string(),
            "org.example:other-lib:2.0.0".to_string(),
        ];
        assert_eq!(
            join_dependency_items(&items),
            Some("org.example:extra-lib:1.0.0;org.example:other-lib:2.0.0".to_string())
        );
    }
}
