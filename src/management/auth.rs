/// Caller context taken from an `Authorization: Bearer <token>` header.
///
/// The bearer token keys the caller's collection and is also forwarded to
/// Spotify as the upstream credential. Both uses go through explicit
/// accessors so the two roles can be split later without touching callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenContext {
    token: String,
}

impl TokenContext {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Resolves the raw header value. Returns `None` unless it has the form
    /// `Bearer <token>` with a non-empty token.
    pub fn from_header(header: Option<&str>) -> Option<Self> {
        let token = header?.strip_prefix("Bearer ")?.trim();
        if token.is_empty() {
            return None;
        }
        Some(Self::new(token))
    }

    /// Key of the caller's collection.
    pub fn identity(&self) -> &str {
        &self.token
    }

    /// Credential forwarded to the catalog.
    pub fn credential(&self) -> &str {
        &self.token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_header_accepts_bearer() {
        let ctx = TokenContext::from_header(Some("Bearer abc123")).unwrap();
        assert_eq!(ctx.identity(), "abc123");
        assert_eq!(ctx.credential(), "abc123");
    }

    #[test]
    fn test_from_header_rejects_missing_or_malformed() {
        assert_eq!(TokenContext::from_header(None), None);
        assert_eq!(TokenContext::from_header(Some("")), None);
        assert_eq!(TokenContext::from_header(Some("Bearer ")), None);
        assert_eq!(TokenContext::from_header(Some("Bearer    ")), None);
        assert_eq!(TokenContext::from_header(Some("Basic abc")), None);
        assert_eq!(TokenContext::from_header(Some("bearer abc")), None);
        assert_eq!(TokenContext::from_header(Some("abc")), None);
    }
}
