use serde::{Deserialize, Serialize};
use serde_json::json;
use uicolor::Color;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// `#RRGGBB`
    #[default]
    Hex,
    /// `#AARRGGBB`
    HexAlpha,
    /// Packed ARGB as a decimal integer.
    Argb,
    /// `hue saturation value alpha`, four decimals each.
    Hsv,
    Json,
}

impl OutputFormat {
    pub fn render(self, color: &Color) -> String {
        match self {
            Self::Hex => color.to_hex_string(false),
            Self::HexAlpha => color.to_hex_string(true),
            Self::Argb => color.argb().to_string(),
            Self::Hsv => {
                let [hue, saturation, value, alpha] = color.hsv();
                format!("{hue:.4} {saturation:.4} {value:.4} {alpha:.4}")
            }
            Self::Json => {
                let [hue, saturation, value, alpha] = color.hsv();
                json!({
                    "red": color.red(),
                    "green": color.green(),
                    "blue": color.blue(),
                    "alpha": color.alpha(),
                    "hex": color.to_hex_string(true),
                    "hsv": [hue, saturation, value, alpha],
                })
                .to_string()
            }
        }
    }
}
