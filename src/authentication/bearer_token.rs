use secrecy::{ExposeSecret, Secret};

/// Credential sent as `Authorization: Bearer <token>`.
///
/// The raw value never shows up in `Debug` output or in logs.
#[derive(Clone)]
pub struct BearerToken(Secret<String>);

impl BearerToken {
    /// Returns an instance of `BearerToken` if the input can be used as an
    /// HTTP header value, i.e. it is non-empty visible ASCII without spaces.
    pub fn parse(s: impl Into<String>) -> Result<BearerToken, String> {
        let s = s.into();
        if s.is_empty() {
            return Err("Bearer token must not be empty.".to_string());
        }
        if !s.chars().all(|c| c.is_ascii_graphic()) {
            return Err("Bearer token contains characters that are not allowed in an HTTP header.".to_string());
        }
        Ok(Self(Secret::new(s)))
    }
}

impl ExposeSecret<String> for BearerToken {
    fn expose_secret(&self) -> &String {
        self.0.expose_secret()
    }
}

impl TryFrom<Secret<String>> for BearerToken {
    type Error = String;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        Self::parse(value.expose_secret().as_str())
    }
}

impl PartialEq for BearerToken {
    fn eq(&self, other: &Self) -> bool {
        self.expose_secret() == other.expose_secret()
    }
}

impl Eq for BearerToken {}

impl std::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BearerToken([REDACTED])")
    }
}
