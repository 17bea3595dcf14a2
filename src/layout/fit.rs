use super::Layout;
use crate::config::{Configuration, Orientation};
use crate::measure::{FontSpec, TextMeasurer};

/// Whether a candidate layout fits its text area.
///
/// Horizontal text fits when the stacked lines are no taller than the area and no line is
/// wider than it. A vertical column fits when it is no taller than the area; its width is
/// not checked, a centred column is assumed to always fit across.
pub fn fits<M: TextMeasurer + ?Sized>(
    layout: &Layout,
    config: &Configuration,
    measurer: &M,
) -> bool {
    let area = &layout.text_area.rect;
    match layout.orientation() {
        Orientation::Vertical => {
            let chars = layout.unit_count() as f32;
            layout.line_height * (chars * config.char_spacing_multiplier) <= area.height
        }
        Orientation::Horizontal => {
            let font = FontSpec::new(&layout.font_family, layout.font_size);
            layout.line_height * layout.lines.len() as f32 <= area.height
                && layout
                    .lines
                    .iter()
                    .all(|line| font.width_of(measurer, line) <= area.width)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TextArea;
    use crate::layout::LayoutMetadata;
    use crate::rect::Rect;
    use crate::units::Px;

    fn per_char(text: &str, _family: &str, size: Px) -> Px {
        size * 0.5 * text.chars().count() as f32
    }

    fn layout(orientation: Orientation, lines: &[&str], font_size: u32) -> Layout {
        let rect = Rect::new(Px(0.0), Px(0.0), Px(100.0), Px(100.0));
        Layout {
            lines: lines.iter().map(|l| l.to_string()).collect(),
            positions: Vec::new(),
            font_family: "sans".to_string(),
            font_size,
            line_height: Px::from_size(font_size),
            total_height: Px(0.0),
            text_area: TextArea { rect, orientation },
            area_mapping: rect,
            metadata: LayoutMetadata {
                orientation,
                attempts: 1,
                was_truncated: false,
                fits: false,
                empty: false,
                original_font_size: None,
            },
        }
    }

    #[test]
    fn horizontal_checks_height_and_width() {
        let config = Configuration::default();

        // two 50px lines, each 5 chars * 25px = 125px wide
        let l = layout(Orientation::Horizontal, &["HELLO", "WORLD"], 50);
        assert!(!fits(&l, &config, &per_char));

        // two 40px lines, each 100px wide
        let l = layout(Orientation::Horizontal, &["HELLO", "WORLD"], 40);
        assert!(fits(&l, &config, &per_char));

        // three 40px lines are too tall even though they are narrow
        let l = layout(Orientation::Horizontal, &["A", "B", "C"], 40);
        assert!(!fits(&l, &config, &per_char));
    }

    #[test]
    fn vertical_checks_only_height() {
        let config = Configuration {
            char_spacing_multiplier: 1.0,
            ..Configuration::default()
        };

        // 4 characters * 25px = 100px tall
        let l = layout(Orientation::Vertical, &["さくらさ"], 25);
        assert!(fits(&l, &config, &per_char));

        let l = layout(Orientation::Vertical, &["さくらさく"], 25);
        assert!(!fits(&l, &config, &per_char));

        // a single character far wider than the area still fits
        let l = layout(Orientation::Vertical, &["W"], 90);
        assert!(fits(&l, &config, &|_: &str, _: &str, _: Px| Px(10_000.0)));

        let spaced = Configuration {
            char_spacing_multiplier: 1.25,
            ..Configuration::default()
        };
        let l = layout(Orientation::Vertical, &["さくらさ"], 25);
        assert!(!fits(&l, &spaced, &per_char));
    }
}
