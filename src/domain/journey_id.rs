use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneyId(String);

impl JourneyId {
    /// Returns an instance of `JourneyId` if the input can be used as a
    /// single path segment of `/journeys/{id}/settings`.
    pub fn parse(s: String) -> Result<JourneyId, String> {
        let is_empty_or_whitespace = s.trim().is_empty();

        // A grapheme is defined by the Unicode standard as a "user-perceived"
        // character: `å` is a single grapheme, but it is composed of two characters
        // (`a` and `̊`).
        let is_too_long = s.graphemes(true).count() > 256;

        let contains_whitespace = s.chars().any(char::is_whitespace);

        // These would change the meaning of the URL we build around the id.
        let forbidden_characters = ['/', '?', '#', '%', '\\'];
        let contains_forbidden_characters = s.chars().any(|g| forbidden_characters.contains(&g));

        // `.` and `..` are dot segments, collapsed away when the URL is parsed.
        let is_dot_segment = s.chars().all(|c| c == '.');

        if is_empty_or_whitespace
            || is_too_long
            || contains_whitespace
            || contains_forbidden_characters
            || is_dot_segment
        {
            Err(format!("{} is not a valid journey id.", s))
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for JourneyId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JourneyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
