use super::Position;
use crate::config::{Configuration, TextArea};
use crate::measure::{FontSpec, TextMeasurer};
use crate::units::Px;

/// Offset of the first horizontal baseline below the top of the area, in font sizes
const HORIZONTAL_BASELINE_FACTOR: f32 = 1.6;
/// Offset of the first vertical character below the top of the area, in font sizes
const VERTICAL_START_FACTOR: f32 = 0.85;
/// How far right of the area's centre line a vertical column sits
const VERTICAL_COLUMN_BIAS: Px = Px(45.0);
/// Per-character tightening applied by the renderer, in font sizes
const LETTER_SPACING_REDUCTION_FACTOR: f32 = 0.10;
/// Per-character spacing added back after the reduction, in font sizes
const LETTER_SPACING_FACTOR: f32 = 0.12;

/// Stacks lines top to bottom, each one centred across the text area.
///
/// Every line is flagged for reduced spacing: the renderer draws its characters one at a
/// time using [`glyph_advances`].
pub fn horizontal_positions<M: TextMeasurer + ?Sized>(
    lines: &[String],
    font: &FontSpec,
    line_height: Px,
    text_area: &TextArea,
    measurer: &M,
) -> Vec<Position> {
    let area = &text_area.rect;
    let size = font.size_px();
    let start_y = area.y + size * HORIZONTAL_BASELINE_FACTOR;

    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let width = font.width_of(measurer, line);
            Position {
                x: area.x + (area.width - width) / 2.0,
                y: start_y + line_height * i as f32,
                content: line.clone(),
                width,
                height: line_height,
                use_reduced_spacing: true,
                letter_spacing_reduction: Some(size * LETTER_SPACING_REDUCTION_FACTOR),
            }
        })
        .collect()
}

/// Places one character per position down a single column, centred (with a rightward
/// bias) across the text area.
pub fn vertical_positions(
    column: &str,
    font_size: u32,
    line_height: Px,
    text_area: &TextArea,
    config: &Configuration,
) -> Vec<Position> {
    let area = &text_area.rect;
    let size = Px::from_size(font_size);
    let x = area.centre_x() + VERTICAL_COLUMN_BIAS;
    let start_y = area.y + size * VERTICAL_START_FACTOR;
    let advance = line_height * config.char_spacing_multiplier;
    let width = size * (1.0 + config.column_margin_factor);

    column
        .chars()
        .enumerate()
        .map(|(i, ch)| Position {
            x,
            y: start_y + advance * i as f32,
            content: ch.to_string(),
            width,
            height: advance,
            use_reduced_spacing: false,
            letter_spacing_reduction: None,
        })
        .collect()
}

/// The x-coordinate of every character of a reduced-spacing line.
///
/// Each character advances by its own measured width, minus the line's letter spacing
/// reduction, plus a fixed fraction of the font size. Positions that are not flagged for
/// reduced spacing are drawn as a unit, so only their first character is reported, at the
/// position's own x.
pub fn glyph_advances<M: TextMeasurer + ?Sized>(
    position: &Position,
    font: &FontSpec,
    measurer: &M,
) -> Vec<(char, Px)> {
    let reduction = match (position.use_reduced_spacing, position.letter_spacing_reduction) {
        (true, Some(reduction)) => reduction,
        _ => {
            return position
                .content
                .chars()
                .next()
                .map(|ch| vec![(ch, position.x)])
                .unwrap_or_default();
        }
    };

    let spacing = font.size_px() * LETTER_SPACING_FACTOR;
    let mut x = position.x;
    let mut advances = Vec::with_capacity(position.content.len());
    let mut buf = [0u8; 4];
    for ch in position.content.chars() {
        advances.push((ch, x));
        let char_width = font.width_of(measurer, ch.encode_utf8(&mut buf));
        x += char_width - reduction + spacing;
    }
    advances
}
