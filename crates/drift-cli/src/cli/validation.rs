/// Parse `--min-drift-count`, which must be a positive integer.
///
/// A threshold of zero would list every file, drifted or not.
pub fn parse_min_drift_count(s: &str) -> Result<usize, String> {
    let count: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("expected a positive integer, got '{}'", s))?;

    if count == 0 {
        return Err("minimum drift count must be at least 1".to_string());
    }

    Ok(count)
}
