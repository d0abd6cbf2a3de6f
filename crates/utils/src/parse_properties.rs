use std::collections::HashMap;

/// Parse `gradle.properties`-style content into a key/value map.
///
/// Lines starting with `#` or `!` are comments; the first `=` splits key and
/// value; keys and values are trimmed. Lines without `=` are ignored.
pub fn parse_properties(content: &str) -> HashMap<String, String> {
    let mut properties = HashMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            if !key.is_empty() {
                properties.insert(key.to_string(), value.trim().to_string());
            }
        }
    }
    properties
}
