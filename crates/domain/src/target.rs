use std::fmt;
use std::sync::Arc;

/// An address handed to the reverse lookup providers.
///
/// The value is opaque: no syntax validation is performed, and duplicates in
/// the input are looked up again rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetIp(Arc<str>);

impl TargetIp {
    pub fn new(ip: impl Into<Arc<str>>) -> Self {
        Self(ip.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TargetIp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TargetIp {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TargetIp {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Parses a newline-delimited target list, one address per non-empty line.
pub fn parse_target_list(text: &str) -> Vec<TargetIp> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(TargetIp::from)
        .collect()
}
