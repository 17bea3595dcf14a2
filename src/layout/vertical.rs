/// The glyph every dash-like character becomes in a vertical column: a full-width vertical
/// line, which reads as a prolonged-sound mark when set top to bottom
pub const VERTICAL_SEPARATOR: char = '\u{FF5C}';

/// Characters that are drawn as horizontal strokes and would lie on their side in a
/// vertical column
const DASHES: &[char] = &[
    '\u{002D}', // hyphen-minus
    '\u{058A}', // armenian hyphen
    '\u{05BE}', // hebrew punctuation maqaf
    '\u{1400}', // canadian syllabics hyphen
    '\u{1806}', // mongolian todo soft hyphen
    '\u{2010}', // hyphen
    '\u{2011}', // non-breaking hyphen
    '\u{2012}', // figure dash
    '\u{2013}', // en dash
    '\u{2014}', // em dash
    '\u{2015}', // horizontal bar
    '\u{2212}', // minus sign
    '\u{2E3A}', // two-em dash
    '\u{2E3B}', // three-em dash
    '\u{2E17}', // double oblique hyphen
    '\u{2E1A}', // hyphen with diaeresis
    '\u{2E40}', // double hyphen
    '\u{2E5D}', // oblique hyphen
    '\u{301C}', // wave dash
    '\u{3030}', // wavy dash
    '\u{30A0}', // katakana-hiragana double hyphen
    '\u{FE31}', // presentation form for vertical em dash
    '\u{FE32}', // presentation form for vertical en dash
    '\u{FE58}', // small em dash
    '\u{FE63}', // small hyphen-minus
    '\u{FF0D}', // fullwidth hyphen-minus
    '\u{30FC}', // katakana-hiragana prolonged sound mark
    '\u{FF70}', // halfwidth prolonged sound mark
];

pub fn is_dash(ch: char) -> bool {
    DASHES.contains(&ch)
}

/// Prepares text for a single top-to-bottom column: all whitespace is dropped and every
/// dash variant is replaced by [`VERTICAL_SEPARATOR`].
pub fn normalize_vertical(text: &str) -> String {
    let column: String = text
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .map(|ch| if is_dash(ch) { VERTICAL_SEPARATOR } else { ch })
        .collect();
    column.trim().to_string()
}
