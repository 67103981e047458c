use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Tamil,
    English,
    Hindi,
    Malayalam,
    Telugu,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::Tamil,
        Language::English,
        Language::Hindi,
        Language::Malayalam,
        Language::Telugu,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Tamil => "tamil",
            Language::English => "english",
            Language::Hindi => "hindi",
            Language::Malayalam => "malayalam",
            Language::Telugu => "telugu",
        }
    }

    /// Two-letter hint sent to the transcription service.
    ///
    /// Every language uses the first two letters of its canonical name except
    /// Malayalam, whose ISO 639-1 code is `ml` rather than `ma`. Revisit this
    /// if the language set grows: the prefix rule only happens to hold for the
    /// current members.
    pub fn transcription_hint(&self) -> &'static str {
        match self {
            Language::Malayalam => "ml",
            other => &other.as_str()[..2],
        }
    }

    pub fn supported_names() -> Vec<&'static str> {
        Self::ALL.iter().map(Language::as_str).collect()
    }
}

impl FromStr for Language {
    type Err = String;

    /// Case-insensitive; surrounding whitespace is not trimmed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|language| language.as_str() == lowered)
            .ok_or_else(|| format!("Unsupported language: {}", s))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
