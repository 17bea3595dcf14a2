use crate::config::{Orientation, TextArea};
use crate::measure::{FontSpec, TextMeasurer};

/// Splits text into one or two lines by word boundaries so that it fits the width of the
/// text area at the given font.
///
/// # Breaking behaviour
///
/// 1. If the whole (trimmed) text fits and two lines are not being forced, it is returned
///    as a single line.
/// 2. When `force_two_lines` is set, the first word alone on the first line is tried
///    before anything else.
/// 3. Otherwise every split between two words is considered; splits where either half
///    overflows are discarded and the one whose halves are closest in width wins. Ties go
///    to the earliest split.
/// 4. If no split works (including text with a single word), the text is returned as one
///    line, possibly overflowing. Shrinking the font is the caller's job.
pub fn break_lines<M: TextMeasurer + ?Sized>(
    text: &str,
    font: &FontSpec,
    text_area: &TextArea,
    force_two_lines: bool,
    measurer: &M,
) -> Vec<String> {
    let text = text.trim();
    let max_width = text_area.rect.width;

    if !force_two_lines && font.width_of(measurer, text) <= max_width {
        return vec![text.to_string()];
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() < 2 {
        return vec![text.to_string()];
    }

    if force_two_lines {
        let first = words[0].to_string();
        let rest = words[1..].join(" ");
        if font.width_of(measurer, &first) <= max_width
            && font.width_of(measurer, &rest) <= max_width
        {
            return vec![first, rest];
        }
    }

    // <split index, score>
    let mut best: Option<(usize, f32)> = None;
    for i in 1..words.len() {
        let left = font.width_of(measurer, &words[..i].join(" "));
        let right = font.width_of(measurer, &words[i..].join(" "));
        if left > max_width || right > max_width {
            continue;
        }

        let score = (left - right).abs().0;
        match best {
            Some((_, best_score)) if score >= best_score => {}
            _ => best = Some((i, score)),
        }
    }

    match best {
        Some((i, _)) => vec![words[..i].join(" "), words[i..].join(" ")],
        None => vec![text.to_string()],
    }
}

/// Whether the text has to be broken over two lines at the base font size. Only
/// horizontal text that contains whitespace and overflows as a single line qualifies.
pub fn needs_two_lines<M: TextMeasurer + ?Sized>(
    text: &str,
    base_font: &FontSpec,
    text_area: &TextArea,
    measurer: &M,
) -> bool {
    match text_area.orientation {
        Orientation::Vertical => false,
        Orientation::Horizontal => {
            let text = text.trim();
            text.contains(char::is_whitespace)
                && base_font.width_of(measurer, text) > text_area.rect.width
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rect::Rect;
    use crate::units::Px;
    use std::collections::HashMap;

    fn area(width: f32) -> TextArea {
        TextArea {
            rect: Rect::new(Px(0.0), Px(0.0), Px(width), Px(100.0)),
            orientation: Orientation::Horizontal,
        }
    }

    /// Ten pixels per character regardless of font size
    fn per_char(text: &str, _family: &str, _size: Px) -> Px {
        Px(10.0 * text.chars().count() as f32)
    }

    #[test]
    fn keeps_short_text_on_one_line() {
        let font = FontSpec::new("sans", 20);
        let lines = break_lines("  HI THERE  ", &font, &area(100.0), false, &per_char);
        assert_eq!(lines, vec!["HI THERE"]);
    }

    #[test]
    fn picks_most_balanced_split() {
        let font = FontSpec::new("sans", 20);
        // "ONE TWO THREE FOUR" is 180px wide
        let lines = break_lines("ONE TWO THREE FOUR", &font, &area(100.0), false, &per_char);
        // ONE TWO | THREE FOUR = 70 vs 100, ONE TWO THREE | FOUR = 130 overflows,
        // ONE | TWO THREE FOUR = 30 vs 140 overflows
        assert_eq!(lines, vec!["ONE TWO", "THREE FOUR"]);
    }

    #[test]
    fn ties_go_to_the_earliest_split() {
        let widths: HashMap<&str, f32> = [
            ("AA B CC", 120.0),
            ("AA", 30.0),
            ("B CC", 45.0),
            ("AA B", 45.0),
            ("CC", 30.0),
        ]
        .into_iter()
        .collect();
        let measurer = |text: &str, _family: &str, _size: Px| Px(widths[text]);

        let font = FontSpec::new("sans", 20);
        let lines = break_lines("AA B CC", &font, &area(100.0), false, &measurer);
        assert_eq!(lines, vec!["AA", "B CC"]);
    }

    #[test]
    fn forcing_tries_first_word_split() {
        let font = FontSpec::new("sans", 20);
        // fits on one line, but two are forced; the first-word split is taken even though
        // AB CD | EF would be more balanced
        let lines = break_lines("AB CD EF", &font, &area(100.0), true, &per_char);
        assert_eq!(lines, vec!["AB", "CD EF"]);
    }

    #[test]
    fn forcing_falls_back_to_balanced_split() {
        let font = FontSpec::new("sans", 20);
        // "A" | "BBBB CCCC DDDD" overflows the 100px area on the right
        let lines = break_lines("A BBBB CCCC DDDD", &font, &area(100.0), true, &per_char);
        assert_eq!(lines, vec!["A BBBB", "CCCC DDDD"]);
    }

    #[test]
    fn unbreakable_text_stays_on_one_line() {
        let font = FontSpec::new("sans", 20);
        let lines = break_lines("SUPERCALIFRAGILISTIC", &font, &area(100.0), false, &per_char);
        assert_eq!(lines, vec!["SUPERCALIFRAGILISTIC"]);

        let lines = break_lines("SUPERCALIFRAGILISTIC", &font, &area(100.0), true, &per_char);
        assert_eq!(lines, vec!["SUPERCALIFRAGILISTIC"]);

        // both halves of every split overflow
        let lines = break_lines(
            "ABCDEFGHIJKL MNOPQRSTUVWX",
            &font,
            &area(100.0),
            false,
            &per_char,
        );
        assert_eq!(lines, vec!["ABCDEFGHIJKL MNOPQRSTUVWX"]);
    }

    #[test]
    fn collapses_whitespace_runs_between_words() {
        let font = FontSpec::new("sans", 20);
        let lines = break_lines("ONE \t TWO\nTHREE", &font, &area(80.0), false, &per_char);
        assert_eq!(lines, vec!["ONE TWO", "THREE"]);
    }

    #[test]
    fn decides_when_two_lines_are_needed() {
        let font = FontSpec::new("sans", 20);
        assert!(needs_two_lines("HELLO WORLD", &font, &area(100.0), &per_char));
        assert!(!needs_two_lines("HELLO WORLD", &font, &area(200.0), &per_char));
        assert!(!needs_two_lines("HELLOWORLDHELLOWORLD", &font, &area(100.0), &per_char));

        let vertical = TextArea {
            orientation: Orientation::Vertical,
            ..area(100.0)
        };
        assert!(!needs_two_lines("HELLO WORLD", &font, &vertical, &per_char));
    }
}
