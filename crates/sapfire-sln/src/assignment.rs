//! `key = value` line splitting.

/// A parsed `key = value` line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    /// Left-hand side, whitespace-trimmed.
    pub key: String,
    /// Right-hand side, whitespace-trimmed. Quotes are left in place.
    pub value: String,
}

impl Assignment {
    /// Split `line` on `=` and keep the first two parts as key and value.
    ///
    /// A line without `=` yields an empty key and value. Anything after a
    /// second `=` is dropped, so values containing `=` come back truncated.
    pub fn parse(line: &str) -> Self {
        let mut parts = line.split('=');
        match (parts.next(), parts.next()) {
            (Some(key), Some(value)) => Self {
                key: key.trim().to_string(),
                value: value.trim().to_string(),
            },
            _ => Self::default(),
        }
    }
}

/// Trim whitespace and surrounding double quotes.
pub(crate) fn unquote(s: &str) -> &str {
    s.trim().trim_matches('"').trim()
}

/// Trim whitespace, quotes and braces, e.g. `"{ABC}"` becomes `ABC`.
pub(crate) fn unbrace(s: &str) -> &str {
    unquote(s).trim_matches(|c| c == '{' || c == '}')
}
