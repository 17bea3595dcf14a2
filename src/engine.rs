//! The adaptive fitting search.
//!
//! Starting at the configured base font size, candidate layouts are built at ever smaller
//! sizes until one fits its text area. The search is bounded; if nothing fits, the best
//! effort is returned rather than an error.

use crate::config::{Configuration, Orientation, TextArea};
use crate::layout::*;
use crate::measure::{FontSpec, MemoMeasurer, TextMeasurer};
use crate::rect::Rect;
use crate::FitError;

/// The sequence of candidate font sizes a fitting call tried, in order
#[derive(Clone, PartialEq, Debug, Default)]
pub struct FitTrace {
    pub candidates: Vec<u32>,
}

/// Chooses a font size and line arrangement for text within a configured print area
#[derive(Debug, Clone)]
pub struct TextFitter {
    config: Configuration,
}

impl TextFitter {
    /// Create a fitter, validating the configuration's font-size bounds
    pub fn new(config: Configuration) -> Result<TextFitter, FitError> {
        config.validate()?;
        Ok(TextFitter { config })
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Lay out `text` in the area for `orientation`.
    ///
    /// Empty or whitespace-only text yields an empty layout. Otherwise a layout is always
    /// returned: the first candidate size that fits, or, if none does, the largest one tried
    /// with `metadata.was_truncated` set.
    pub fn fit_text<M: TextMeasurer + ?Sized>(
        &self,
        text: &str,
        orientation: Orientation,
        family: &str,
        measurer: &M,
    ) -> Layout {
        self.fit_text_traced(text, orientation, family, measurer).0
    }

    /// As [`fit_text`](TextFitter::fit_text), also reporting the candidate sizes tried
    pub fn fit_text_traced<M: TextMeasurer + ?Sized>(
        &self,
        text: &str,
        orientation: Orientation,
        family: &str,
        measurer: &M,
    ) -> (Layout, FitTrace) {
        let config = &self.config;
        let text_area = config.text_area(orientation);
        let area_mapping = config.area_mapping.for_orientation(orientation);
        let mut trace = FitTrace::default();

        let text = text.trim();
        if text.is_empty() {
            log::debug!("no text to fit in the {orientation} area");
            return (
                Layout::empty(
                    text_area,
                    area_mapping,
                    family,
                    config.base_font_size,
                    config.line_height(config.base_font_size),
                ),
                trace,
            );
        }

        let measurer = MemoMeasurer::new(measurer);
        let content = match orientation {
            Orientation::Horizontal => text.to_string(),
            Orientation::Vertical => normalize_vertical(text),
        };
        let force_two_lines = needs_two_lines(
            &content,
            &FontSpec::new(family, config.base_font_size),
            &text_area,
            &measurer,
        );

        let max_attempts = config.max_attempts();
        let mut attempts = 0;
        let mut size = Some(config.base_font_size);
        let mut best: Option<Layout> = None;
        let mut fitted: Option<Layout> = None;

        while let Some(font_size) = size.filter(|&s| s >= config.min_font_size) {
            if attempts >= max_attempts {
                break;
            }
            attempts += 1;
            trace.candidates.push(font_size);

            let candidate = self.build_layout(
                &content,
                &FontSpec::new(family, font_size),
                &text_area,
                area_mapping,
                force_two_lines,
                &measurer,
            );

            if fits(&candidate, config, &measurer) {
                log::trace!("{font_size}px fits the {orientation} area");
                fitted = Some(candidate);
                break;
            }
            log::trace!("{font_size}px overflows the {orientation} area");

            if best
                .as_ref()
                .map(|b| candidate.font_size > b.font_size)
                .unwrap_or(true)
            {
                best = Some(candidate);
            }

            size = font_size.checked_sub(config.scale_step);
        }

        let (mut layout, fit_found) = match (fitted, best) {
            (Some(layout), _) => (layout, true),
            (None, Some(layout)) => (layout, false),
            (None, None) => {
                log::debug!(
                    "no candidate sizes were tried, falling back to {}px",
                    config.min_font_size
                );
                trace.candidates.push(config.min_font_size);
                let layout = self.build_layout(
                    &content,
                    &FontSpec::new(family, config.min_font_size),
                    &text_area,
                    area_mapping,
                    force_two_lines,
                    &measurer,
                );
                let fit_found = fits(&layout, config, &measurer);
                (layout, fit_found)
            }
        };

        layout.metadata.attempts = attempts;
        layout.metadata.fits = fit_found;
        layout.metadata.was_truncated = !fit_found;
        layout.metadata.orientation = orientation;
        layout.metadata.original_font_size = Some(config.base_font_size);

        if fit_found {
            log::debug!(
                "fitted {} line(s) at {}px after {} attempt(s)",
                layout.lines.len(),
                layout.font_size,
                attempts
            );
        } else {
            log::debug!(
                "nothing fit the {orientation} area after {attempts} attempt(s), using {}px",
                layout.font_size
            );
        }

        (layout, trace)
    }

    /// Build the layout of one candidate font size
    fn build_layout<M: TextMeasurer + ?Sized>(
        &self,
        content: &str,
        font: &FontSpec,
        text_area: &TextArea,
        area_mapping: Rect,
        force_two_lines: bool,
        measurer: &M,
    ) -> Layout {
        let config = &self.config;
        let line_height = config.line_height(font.size);

        let (lines, positions, total_height) = match text_area.orientation {
            Orientation::Horizontal => {
                let lines = break_lines(content, font, text_area, force_two_lines, measurer);
                let positions =
                    horizontal_positions(&lines, font, line_height, text_area, measurer);
                let total_height = line_height * lines.len() as f32;
                (lines, positions, total_height)
            }
            Orientation::Vertical => {
                let positions =
                    vertical_positions(content, font.size, line_height, text_area, config);
                let total_height = line_height
                    * (content.chars().count() as f32 * config.char_spacing_multiplier);
                (vec![content.to_string()], positions, total_height)
            }
        };

        Layout {
            lines,
            positions,
            font_family: font.family.to_string(),
            font_size: font.size,
            line_height,
            total_height,
            text_area: *text_area,
            area_mapping,
            metadata: LayoutMetadata {
                orientation: text_area.orientation,
                attempts: 0,
                was_truncated: false,
                fits: false,
                empty: false,
                original_font_size: None,
            },
        }
    }
}

/// Convenience for one-off fitting with a configuration that is known to be valid.
///
/// Returns an error only if the configuration's font-size bounds are invalid.
pub fn fit_text<M: TextMeasurer + ?Sized>(
    config: &Configuration,
    text: &str,
    orientation: Orientation,
    family: &str,
    measurer: &M,
) -> Result<Layout, FitError> {
    let fitter = TextFitter::new(config.clone())?;
    Ok(fitter.fit_text(text, orientation, family, measurer))
}
