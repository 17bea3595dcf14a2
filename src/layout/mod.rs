//! Building blocks of a fitted layout.
//!
//! A [`Layout`] is produced for every candidate font size the fitting search tries; the
//! pieces here are what it is assembled from:
//!
//! - [`break_lines`](crate::layout::break_lines) splits horizontal text into at most two
//!   balanced lines
//! - [`normalize_vertical`](crate::layout::normalize_vertical) prepares text for a single
//!   top-to-bottom column
//! - [`fits`](crate::layout::fits) decides whether a candidate layout fits its text area
//! - [`horizontal_positions`](crate::layout::horizontal_positions) and
//!   [`vertical_positions`](crate::layout::vertical_positions) place the lines or characters
//!
//! # Example
//!
//! ```
//! use text_fit::layout::{break_lines, normalize_vertical};
//! use text_fit::{Configuration, FontSpec, Orientation, Px};
//!
//! let measurer = |text: &str, _family: &str, size: Px| size * 0.5 * text.chars().count() as f32;
//! let area = Configuration::default().text_area(Orientation::Horizontal);
//!
//! let lines = break_lines("GOOD MORNING TOKYO", &FontSpec::new("serif", 40), &area, false, &measurer);
//! assert_eq!(lines, vec!["GOOD MORNING", "TOKYO"]);
//!
//! assert_eq!(normalize_vertical("ラーメン 2-3"), "ラ｜メン2｜3");
//! ```

mod breaker;
mod fit;
mod margins;
mod positions;
mod vertical;

pub use breaker::*;
pub use fit::*;
pub use margins::*;
pub use positions::*;
pub use vertical::*;

use crate::config::{Orientation, TextArea};
use crate::rect::Rect;
use crate::units::Px;
use serde::Serialize;

/// One unit of rendering: a whole line in horizontal mode, a single character in
/// vertical mode.
///
/// Horizontal positions are anchored at the left end of the line's baseline. Vertical
/// positions are anchored at the horizontal centre of the character.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct Position {
    pub x: Px,
    pub y: Px,
    pub content: String,
    pub width: Px,
    pub height: Px,
    /// The renderer should draw the characters one at a time, see [`glyph_advances`]
    pub use_reduced_spacing: bool,
    pub letter_spacing_reduction: Option<Px>,
}

/// Bookkeeping about how a layout was arrived at
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct LayoutMetadata {
    pub orientation: Orientation,
    /// How many candidate sizes were tried
    pub attempts: u32,
    /// The layout does not satisfy the fit check for its area
    pub was_truncated: bool,
    /// The layout satisfies the fit check for its area
    pub fits: bool,
    /// There was no text to lay out
    pub empty: bool,
    /// The base font size the search started from; only set on the final result
    pub original_font_size: Option<u32>,
}

/// Lines of text at a chosen font size, positioned within a text area
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct Layout {
    pub lines: Vec<String>,
    pub positions: Vec<Position>,
    pub font_family: String,
    pub font_size: u32,
    pub line_height: Px,
    pub total_height: Px,
    pub text_area: TextArea,
    /// The area mapping the text area was derived from
    pub area_mapping: Rect,
    pub metadata: LayoutMetadata,
}

impl Layout {
    /// A layout with nothing in it, still carrying the text area so guides can be drawn
    pub fn empty(
        text_area: TextArea,
        area_mapping: Rect,
        font_family: &str,
        font_size: u32,
        line_height: Px,
    ) -> Layout {
        Layout {
            lines: Vec::new(),
            positions: Vec::new(),
            font_family: font_family.to_string(),
            font_size,
            line_height,
            total_height: Px(0.0),
            text_area,
            area_mapping,
            metadata: LayoutMetadata {
                orientation: text_area.orientation,
                attempts: 0,
                was_truncated: false,
                fits: true,
                empty: true,
                original_font_size: Some(font_size),
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.metadata.empty
    }

    pub fn orientation(&self) -> Orientation {
        self.text_area.orientation
    }

    /// The number of characters in a vertical column, or of lines in horizontal text
    pub fn unit_count(&self) -> usize {
        match self.orientation() {
            Orientation::Horizontal => self.lines.len(),
            Orientation::Vertical => self.lines.iter().map(|line| line.chars().count()).sum(),
        }
    }
}
