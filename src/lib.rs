//! Adaptive fitting of short text into print areas.
//!
//! Given a string, an orientation, a font family, and a way to measure strings, a
//! [`TextFitter`] searches downwards from a base font size for the largest size at which
//! the text fits its configured area, breaking horizontal text over at most two balanced
//! lines or setting vertical text as a single column. The result is a [`Layout`] of
//! positioned lines or characters, which can be converted to physical units with
//! [`export_for_printful`].
//!
//! ```
//! use text_fit::{Configuration, Orientation, Px, TextFitter};
//!
//! let fitter = TextFitter::new(Configuration::default()).expect("valid configuration");
//! let measurer = |text: &str, _family: &str, size: Px| size * 0.55 * text.chars().count() as f32;
//!
//! let layout = fitter.fit_text("Hello there, world", Orientation::Horizontal, "Noto Sans", &measurer);
//! assert!(layout.lines.len() <= 2);
//! assert!(!layout.metadata.was_truncated);
//! ```

mod config;
pub use config::*;

mod engine;
pub use engine::*;

mod error;
pub use error::*;

mod export;
pub use export::*;

mod font;
pub use font::*;

/// Line breaking, normalisation, fit checks, and positioning of candidate layouts
pub mod layout;
pub use layout::{Layout, LayoutMetadata, Position};

mod measure;
pub use measure::{FontSpec, TextMeasurer};

mod rect;
pub use rect::*;

mod units;
pub use units::*;
