use heft::Framework;

/// Parse one framework id for `--only`.
pub fn parse_framework(s: &str) -> Result<Framework, String> {
    s.trim().parse::<Framework>().map_err(|e| match e {
        heft::Error::Config(message) => message,
        other => other.to_string(),
    })
}
