use crate::measure::TextMeasurer;
use crate::units::Px;
use crate::FitError;
use owned_ttf_parser::{AsFaceRef, OwnedFace};

/// A parsed TrueType or OpenType font, usable directly as a [`TextMeasurer`].
///
/// Widths are the sum of the horizontal glyph advances scaled to the requested pixel
/// size; there is no shaping or kerning. Characters missing from the font fall back to
/// the replacement glyph, then `?`, and are otherwise skipped.
pub struct Font {
    pub face: OwnedFace,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, FitError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face })
    }

    /// Obtain the family name of the font, if it declares one
    pub fn family(&self) -> Option<String> {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FAMILY && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        let face = self.face.as_face_ref();
        face.glyph_index(ch)
            .or_else(|| face.glyph_index('\u{FFFD}'))
            .or_else(|| face.glyph_index('?'))
            .map(|i| i.0)
    }

    /// Calculate the width of a given string of text at the given pixel size
    pub fn width_of_text(&self, text: &str, size: Px) -> Px {
        let face = self.face.as_face_ref();
        let scaling = size / face.units_per_em() as f32;
        text.chars()
            .filter_map(|ch| self.glyph_id(ch))
            .map(|gid| {
                scaling
                    * face
                        .glyph_hor_advance(owned_ttf_parser::GlyphId(gid))
                        .unwrap_or_default() as f32
            })
            .sum()
    }
}

/// The font is already a specific family, so the requested family is ignored.
impl TextMeasurer for Font {
    fn measure(&self, text: &str, _family: &str, size: Px) -> Px {
        self.width_of_text(text, size)
    }
}
