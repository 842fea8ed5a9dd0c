/// Strips the variable part of a log message: everything from the first `{`
/// placeholder on, with surrounding whitespace trimmed.
pub fn template_of(message: &str) -> &str {
    message.split('{').next().unwrap_or_default().trim()
}
