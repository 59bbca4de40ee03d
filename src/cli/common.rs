pub(super) fn parse_non_empty(s: &str) -> Result<String, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("value cannot be empty".to_string());
    }
    Ok(s.to_string())
}
