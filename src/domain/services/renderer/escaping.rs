//! Value escaping for the generated documents
//!
//! Compose files are YAML that docker compose interpolates, so literal `$`
//! must be doubled. Env files are read by both `env_file` and `--env-file`.

/// Quote a YAML scalar when plain style would change its meaning
pub fn escape_yaml(s: &str) -> String {
    let needs_quoting = s.is_empty()
        || s.contains(':')
        || s.contains('#')
        || s.contains('[')
        || s.contains(']')
        || s.contains('{')
        || s.contains('}')
        || s.contains(',')
        || s.contains('&')
        || s.contains('*')
        || s.contains('!')
        || s.contains('|')
        || s.contains('>')
        || s.contains('\'')
        || s.contains('"')
        || s.contains('\n')
        || s.contains('\t')
        || s.starts_with(' ')
        || s.ends_with(' ')
        || s.starts_with('-')
        || s.starts_with('?')
        || s.starts_with('%')
        || s.starts_with('@')
        || s.starts_with('`');

    if needs_quoting {
        let escaped = s
            .replace('\\', "\\\\")
            .replace('"', "\\\"")
            .replace('\n', "\\n")
            .replace('\t', "\\t");
        format!("\"{}\"", escaped)
    } else {
        s.to_string()
    }
}

/// A literal compose value: `$` doubled so compose does not interpolate it
pub fn escape_compose(s: &str) -> String {
    escape_yaml(&s.replace('$', "$$"))
}

/// Right-hand side of a dotenv assignment
///
/// Double-quoted when the value contains whitespace, `#`, quotes or `$`.
pub fn escape_env(s: &str) -> String {
    let needs_quoting = s
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '#' | '"' | '\'' | '$' | '\\'));

    if needs_quoting {
        let escaped = s
            .replace('\\', "\\\\")
            .replace('"', "\\\"")
            .replace('$', "\\$")
            .replace('\n', "\\n");
        format!("\"{}\"", escaped)
    } else {
        s.to_string()
    }
}
