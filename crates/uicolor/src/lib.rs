//! Immutable RGBA colors for the UI layer.
//!
//! `Color` stores four `f32` channels and converts to and from packed
//! `0xRRGGBB` / `0xAARRGGBB` integers, HSV, and text (`#RRGGBB`, `#AARRGGBB`,
//! or a named text color such as `gold` or `dark-purple`).
//!
//! ```text
//!   "#80FF0000" ─┐
//!   "dark-aqua" ─┼─▶ Color::parse ─▶ Color ─┬─▶ rgb() / argb()
//!   0xFF5555   ──┘                          ├─▶ hsv()
//!                                           └─▶ interpolate(next, delta)
//! ```
mod animate;
mod color;
mod error;
mod named;

pub use animate::Animatable;
pub use color::Color;
pub use error::ColorParseError;
pub use named::{named_colors, DyeColor, TextFormatting};
