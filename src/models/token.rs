use serde::{Deserialize, Serialize};

const MASK_PREFIX_LEN: usize = 6;
const MASK_SUFFIX_LEN: usize = 4;

/// An opaque bearer credential.
///
/// The client never inspects or validates the token contents; expiry is the
/// server's business. `Debug` and `Display` are masked so the raw value
/// cannot leak into logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    pub fn new(raw: impl Into<String>) -> Self {
        Token(raw.into())
    }

    /// The raw credential, for the Authorization header and the store.
    pub fn reveal(&self) -> &str {
        &self.0
    }

    fn masked(&self) -> String {
        let raw = self.0.trim();
        let len = raw.len();
        if len <= MASK_PREFIX_LEN + MASK_SUFFIX_LEN {
            return "*".repeat(len.min(8));
        }
        format!(
            "{}...{}",
            &raw[..MASK_PREFIX_LEN],
            &raw[len - MASK_SUFFIX_LEN..]
        )
    }
}

impl From<String> for Token {
    fn from(raw: String) -> Self {
        Token(raw)
    }
}

impl From<&str> for Token {
    fn from(raw: &str) -> Self {
        Token(raw.to_string())
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.masked())
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token({})", self.masked())
    }
}

#[cfg(test)]
mod tests {
    use super::Token;

    #[test]
    fn display_keeps_prefix_and_suffix() {
        let token = Token::new("abcdef1234567890");
        assert_eq!(token.to_string(), "abcdef...7890");
    }

    #[test]
    fn short_values_are_redacted_fully() {
        assert_eq!(Token::new("abcd").to_string(), "****");
    }

    #[test]
    fn reveal_returns_raw_value() {
        assert_eq!(Token::new("abc").reveal(), "abc");
    }
}
