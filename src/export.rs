//! Conversion of fitted layouts into physical units for print fulfilment.
//!
//! Geometry is converted from canvas pixels to inches relative to the origin of the
//! orientation's area mapping, and font sizes to points.

use crate::config::{Configuration, Orientation};
use crate::layout::Layout;
use crate::units::*;
use crate::FitError;
use serde::Serialize;

/// The physical print area an export targets
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct ExportPrintArea {
    pub width: In,
    pub height: In,
    pub dpi: u32,
}

/// One positioned run of text, in print units
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextElement {
    pub text: String,
    pub x: In,
    pub y: In,
    pub width: In,
    pub height: In,
    pub font_family: String,
    pub font_size: Pt,
    pub orientation: Orientation,
    /// Per-character tightening for lines drawn with reduced spacing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing_reduction: Option<Pt>,
}

/// A layout expressed in the units a print-on-demand service expects
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrintfulExport {
    pub print_area: ExportPrintArea,
    pub text_elements: Vec<TextElement>,
}

impl PrintfulExport {
    pub fn to_json(&self) -> Result<String, FitError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Convert a layout for export. Empty layouts have nothing to print and produce `None`.
pub fn export_for_printful(layout: &Layout, config: &Configuration) -> Option<PrintfulExport> {
    if layout.is_empty() {
        return None;
    }

    let converter = config.unit_converter();
    let origin = &layout.area_mapping;
    let font_size = converter.to_points(Px::from_size(layout.font_size));

    let text_elements = layout
        .positions
        .iter()
        .map(|position| TextElement {
            text: position.content.clone(),
            x: converter.to_inches(position.x - origin.x),
            y: converter.to_inches(position.y - origin.y),
            width: converter.to_inches(position.width),
            height: converter.to_inches(position.height),
            font_family: layout.font_family.clone(),
            font_size,
            orientation: layout.orientation(),
            letter_spacing_reduction: position
                .letter_spacing_reduction
                .map(|reduction| converter.to_points(reduction)),
        })
        .collect();

    Some(PrintfulExport {
        print_area: ExportPrintArea {
            width: config.print_area.width,
            height: config.print_area.height,
            dpi: config.print_area.dpi,
        },
        text_elements,
    })
}
