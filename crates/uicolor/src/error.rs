use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error(
        "invalid color value '{0}', expected hex color of format #RRGGBB or #AARRGGBB or named text color"
    )]
    UnknownName(String),

    #[error(
        "invalid color value '{0}', expected hex color of format #RRGGBB or #AARRGGBB or named text color"
    )]
    MalformedHex(String),
}

impl ColorParseError {
    /// The trimmed text that failed to parse.
    pub fn value(&self) -> &str {
        match self {
            Self::UnknownName(value) | Self::MalformedHex(value) => value,
        }
    }
}
