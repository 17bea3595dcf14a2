//! Engine configuration: print-area geometry, margins, and the font-size search bounds.
//!
//! A [`Configuration`] is built once (usually from [`Configuration::default`] or a TOML
//! document) and then handed to a [`TextFitter`](crate::TextFitter), which never mutates it.
//!
//! ```
//! use text_fit::{Configuration, Orientation, Px};
//!
//! let config = Configuration::from_toml_str(r#"
//!     base_font_size = 60
//!     min_font_size = 20
//!
//!     [area_mapping.horizontal]
//!     x = 100.0
//!     y = 100.0
//!     width = 400.0
//!     height = 200.0
//! "#).expect("valid configuration");
//!
//! let area = config.text_area(Orientation::Horizontal);
//! assert_eq!(area.rect.width, Px(380.0));
//! ```

use crate::layout::Margins;
use crate::rect::Rect;
use crate::units::*;
use crate::FitError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The direction text runs in within its area
#[derive(Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Left-to-right lines stacked top to bottom, at most two of them
    Horizontal,
    /// A single top-to-bottom column of characters
    Vertical,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Orientation {
    type Err = FitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horizontal" => Ok(Orientation::Horizontal),
            "vertical" => Ok(Orientation::Vertical),
            _ => Err(FitError::UnknownOrientation(s.to_string())),
        }
    }
}

impl Orientation {
    pub fn name(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }

    pub fn all() -> &'static [Orientation] {
        &[Orientation::Horizontal, Orientation::Vertical]
    }
}

/// The physical print area the canvas maps onto
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrintArea {
    pub width: In,
    pub height: In,
    pub dpi: u32,
    /// Width of the canvas, in pixels, that spans `width` inches
    pub reference_width: Px,
}

impl Default for PrintArea {
    fn default() -> Self {
        PrintArea {
            width: In(12.0),
            height: In(16.0),
            dpi: 150,
            reference_width: Px(600.0),
        }
    }
}

/// The raw pixel rectangles text is placed into, one per orientation
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AreaMapping {
    pub horizontal: Rect,
    pub vertical: Rect,
}

impl Default for AreaMapping {
    fn default() -> Self {
        AreaMapping {
            horizontal: Rect::new(Px(150.0), Px(180.0), Px(300.0), Px(140.0)),
            vertical: Rect::new(Px(200.0), Px(120.0), Px(200.0), Px(360.0)),
        }
    }
}

impl AreaMapping {
    pub fn for_orientation(&self, orientation: Orientation) -> Rect {
        match orientation {
            Orientation::Horizontal => self.horizontal,
            Orientation::Vertical => self.vertical,
        }
    }
}

/// The effective region text is measured against: an area mapping shrunk by the margins
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct TextArea {
    pub rect: Rect,
    pub orientation: Orientation,
}

/// Engine configuration.
///
/// Font sizes are whole pixels. The search tries `base_font_size`, then steps down by
/// `scale_step` until `min_font_size`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(default)]
    pub print_area: PrintArea,
    #[serde(default)]
    pub area_mapping: AreaMapping,
    #[serde(default = "default_margins")]
    pub margins: Margins,
    #[serde(default = "default_base_font_size")]
    pub base_font_size: u32,
    #[serde(default = "default_min_font_size")]
    pub min_font_size: u32,
    #[serde(default = "default_scale_step")]
    pub scale_step: u32,
    /// Multiplier from font size to line height
    #[serde(default = "default_line_spacing")]
    pub line_spacing: f32,
    /// Extra vertical advance between characters of a vertical column, as a multiple of
    /// the line height
    #[serde(default = "default_char_spacing_multiplier")]
    pub char_spacing_multiplier: f32,
    /// Horizontal breathing room around a vertical column, as a fraction of the font size
    #[serde(default = "default_column_margin_factor")]
    pub column_margin_factor: f32,
}

fn default_margins() -> Margins {
    Margins::all(Px(10.0))
}
fn default_base_font_size() -> u32 {
    48
}
fn default_min_font_size() -> u32 {
    12
}
fn default_scale_step() -> u32 {
    2
}
fn default_line_spacing() -> f32 {
    1.2
}
fn default_char_spacing_multiplier() -> f32 {
    1.1
}
fn default_column_margin_factor() -> f32 {
    0.2
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            print_area: PrintArea::default(),
            area_mapping: AreaMapping::default(),
            margins: default_margins(),
            base_font_size: default_base_font_size(),
            min_font_size: default_min_font_size(),
            scale_step: default_scale_step(),
            line_spacing: default_line_spacing(),
            char_spacing_multiplier: default_char_spacing_multiplier(),
            column_margin_factor: default_column_margin_factor(),
        }
    }
}

impl Configuration {
    /// Parse a configuration from a TOML document. Missing fields take their defaults, and
    /// the result is validated before being returned.
    pub fn from_toml_str(source: &str) -> Result<Configuration, FitError> {
        let config: Configuration = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the font-size search bounds and the print area's reference width
    pub fn validate(&self) -> Result<(), FitError> {
        if self.scale_step == 0 {
            return Err(FitError::ZeroScaleStep);
        }
        if self.min_font_size == 0 {
            return Err(FitError::ZeroMinFontSize);
        }
        if self.min_font_size > self.base_font_size {
            return Err(FitError::InvalidFontSizeRange {
                min: self.min_font_size,
                base: self.base_font_size,
            });
        }
        // negated so that NaN is rejected too
        if !(self.print_area.reference_width > Px(0.0)) {
            return Err(FitError::InvalidReferenceWidth(
                self.print_area.reference_width,
            ));
        }
        Ok(())
    }

    /// Derive the region text may occupy for the given orientation
    pub fn text_area(&self, orientation: Orientation) -> TextArea {
        let mapping = self.area_mapping.for_orientation(orientation);
        TextArea {
            rect: self.margins.shrink(&mapping),
            orientation,
        }
    }

    /// The upper bound on fitting attempts: the arithmetic step count plus a slack of five
    pub fn max_attempts(&self) -> u32 {
        self.base_font_size
            .saturating_sub(self.min_font_size)
            .div_ceil(self.scale_step.max(1))
            + 5
    }

    /// Line height for a given font size
    pub fn line_height(&self, font_size: u32) -> Px {
        Px::from_size(font_size) * self.line_spacing
    }

    pub fn unit_converter(&self) -> UnitConverter {
        UnitConverter::new(self.print_area.width, self.print_area.reference_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_derive_text_areas() {
        let config = Configuration::default();
        let area = config.text_area(Orientation::Horizontal);
        assert_eq!(area.orientation, Orientation::Horizontal);
        assert_eq!(
            area.rect,
            Rect::new(Px(160.0), Px(190.0), Px(280.0), Px(120.0))
        );

        let area = config.text_area(Orientation::Vertical);
        assert_eq!(area.orientation, Orientation::Vertical);
        assert_eq!(
            area.rect,
            Rect::new(Px(210.0), Px(130.0), Px(180.0), Px(340.0))
        );
    }

    #[test]
    fn can_parse_orientations() {
        assert_eq!(
            "horizontal".parse::<Orientation>().expect("parses"),
            Orientation::Horizontal
        );
        assert_eq!(
            " Vertical ".parse::<Orientation>().expect("parses"),
            Orientation::Vertical
        );
        let err = "diagonal".parse::<Orientation>().expect_err("unknown orientation");
        assert!(matches!(err, FitError::UnknownOrientation(name) if name == "diagonal"));
        for orientation in Orientation::all() {
            assert_eq!(
                orientation.to_string().parse::<Orientation>().expect("round trips"),
                *orientation
            );
        }
    }

    #[test]
    fn can_compute_max_attempts() {
        let config = Configuration {
            base_font_size: 40,
            min_font_size: 12,
            scale_step: 3,
            ..Configuration::default()
        };
        // ceil(28 / 3) = 10
        assert_eq!(config.max_attempts(), 15);

        let config = Configuration {
            base_font_size: 20,
            min_font_size: 20,
            scale_step: 2,
            ..Configuration::default()
        };
        assert_eq!(config.max_attempts(), 5);
    }

    #[test]
    fn rejects_invalid_search_bounds() {
        let config = Configuration {
            scale_step: 0,
            ..Configuration::default()
        };
        assert!(matches!(config.validate(), Err(FitError::ZeroScaleStep)));

        let config = Configuration {
            min_font_size: 50,
            base_font_size: 40,
            ..Configuration::default()
        };
        assert!(matches!(
            config.validate(),
            Err(FitError::InvalidFontSizeRange { min: 50, base: 40 })
        ));

        let config = Configuration {
            min_font_size: 0,
            ..Configuration::default()
        };
        assert!(matches!(config.validate(), Err(FitError::ZeroMinFontSize)));

        for width in [0.0, -600.0, f32::NAN] {
            let config = Configuration {
                print_area: PrintArea {
                    reference_width: Px(width),
                    ..PrintArea::default()
                },
                ..Configuration::default()
            };
            assert!(matches!(
                config.validate(),
                Err(FitError::InvalidReferenceWidth(_))
            ));
        }

        assert!(Configuration::default().validate().is_ok());
    }

    #[test]
    fn can_load_from_toml() {
        let config = Configuration::from_toml_str(
            r#"
            base_font_size = 40
            scale_step = 4
            line_spacing = 1.5

            [margins]
            top = 5.0
            right = 5.0
            bottom = 5.0
            left = 5.0

            [area_mapping.vertical]
            x = 0
            y = 0
            width = 100
            height = 400
            "#,
        )
        .expect("can parse configuration");
        assert_eq!(config.base_font_size, 40);
        assert_eq!(config.min_font_size, 12);
        assert_eq!(config.scale_step, 4);
        assert_eq!(config.line_spacing, 1.5);
        assert_eq!(config.print_area, PrintArea::default());
        assert_eq!(config.area_mapping.horizontal, AreaMapping::default().horizontal);
        assert_eq!(
            config.text_area(Orientation::Vertical).rect,
            Rect::new(Px(5.0), Px(5.0), Px(90.0), Px(390.0))
        );
    }

    #[test]
    fn toml_loading_validates() {
        let err = Configuration::from_toml_str("scale_step = 0").expect_err("invalid step");
        assert!(matches!(err, FitError::ZeroScaleStep));

        let err = Configuration::from_toml_str("[print_area]\nreference_width = 0.0")
            .expect_err("zero reference width");
        assert!(matches!(err, FitError::InvalidReferenceWidth(_)));

        let err = Configuration::from_toml_str("base_font_size = \"big\"").expect_err("bad type");
        assert!(matches!(err, FitError::Toml(_)));
    }

    #[test]
    fn can_serialize_configuration() {
        let config = Configuration::default();
        let source = toml::to_string(&config).expect("can serialize configuration to TOML");
        let parsed = Configuration::from_toml_str(&source).expect("can parse it back");
        assert_eq!(parsed, config);
    }
}
