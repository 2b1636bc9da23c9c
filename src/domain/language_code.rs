use serde::Serialize;

/// An ISO 639 language code with an optional ISO 3166 region, e.g. `en`,
/// `deu` or `pt-BR`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn parse(s: String) -> Result<LanguageCode, String> {
        let (language, region) = match s.split_once('-') {
            Some((language, region)) => (language, Some(region)),
            None => (s.as_str(), None),
        };
        let language_is_valid =
            (2..=3).contains(&language.len()) && language.chars().all(|c| c.is_ascii_lowercase());
        let region_is_valid = region
            .map(|r| r.len() == 2 && r.chars().all(|c| c.is_ascii_uppercase()))
            .unwrap_or(true);

        if language_is_valid && region_is_valid {
            Ok(Self(s))
        } else {
            Err(format!("{} is not a valid language code.", s))
        }
    }
}

impl AsRef<str> for LanguageCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
