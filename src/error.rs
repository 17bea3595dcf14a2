use crate::units::Px;
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum FitError {
    /// An orientation name was neither `horizontal` nor `vertical`
    #[error("unsupported orientation `{0}`, expected `horizontal` or `vertical`")]
    UnknownOrientation(String),

    /// The minimum font size is larger than the base font size
    #[error("minimum font size {min}px exceeds base font size {base}px")]
    InvalidFontSizeRange { min: u32, base: u32 },

    /// The minimum font size must be at least one pixel
    #[error("minimum font size must be greater than zero")]
    ZeroMinFontSize,

    /// Pixel to inch conversion needs a canvas with a positive width
    #[error("print area reference width must be positive, got {0}")]
    InvalidReferenceWidth(Px),

    /// The font size search would never advance
    #[error("font size scale step must be greater than zero")]
    ZeroScaleStep,

    #[error(transparent)]
    /// [toml] failed to parse the configuration
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    /// [serde_json] failed to serialize an export
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),
}
