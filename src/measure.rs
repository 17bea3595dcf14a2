//! The text measuring capability the fitting engine is built on.
//!
//! The engine never shapes glyphs; all it needs is the rendered width of a string at a
//! given font family and pixel size. Any `Fn(&str, &str, Px) -> Px` closure is a measurer,
//! as is a parsed [`Font`](crate::Font).

use crate::units::Px;
use std::cell::RefCell;
use std::collections::HashMap;

/// Measures the rendered width of a string.
///
/// Implementations must be deterministic: the same text, family, and size must always
/// produce the same width. The returned width is in the same unit as the configured area
/// mappings (canvas pixels).
pub trait TextMeasurer {
    fn measure(&self, text: &str, family: &str, size: Px) -> Px;
}

impl<F> TextMeasurer for F
where
    F: Fn(&str, &str, Px) -> Px,
{
    fn measure(&self, text: &str, family: &str, size: Px) -> Px {
        self(text, family, size)
    }
}

/// A font family at a specific pixel size
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec<'a> {
    pub family: &'a str,
    pub size: u32,
}

impl<'a> FontSpec<'a> {
    pub fn new(family: &'a str, size: u32) -> FontSpec<'a> {
        FontSpec { family, size }
    }

    pub fn size_px(&self) -> Px {
        Px::from_size(self.size)
    }

    /// Measure `text` at this font
    pub fn width_of<M: TextMeasurer + ?Sized>(&self, measurer: &M, text: &str) -> Px {
        measurer.measure(text, self.family, self.size_px())
    }
}

/// Caches widths for the lifetime of one fitting call.
///
/// The fitting loop measures the same halves of a split repeatedly (once while breaking,
/// once while checking the fit, once while positioning); measurement is assumed pure, so
/// remembering the answers cannot change the outcome.
pub(crate) struct MemoMeasurer<'m, M: TextMeasurer + ?Sized> {
    inner: &'m M,
    // <(text, family, size bits), width>
    cache: RefCell<HashMap<(String, String, u32), Px>>,
}

impl<'m, M: TextMeasurer + ?Sized> MemoMeasurer<'m, M> {
    pub(crate) fn new(inner: &'m M) -> Self {
        MemoMeasurer {
            inner,
            cache: RefCell::new(HashMap::new()),
        }
    }
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for MemoMeasurer<'_, M> {
    fn measure(&self, text: &str, family: &str, size: Px) -> Px {
        let key = (text.to_string(), family.to_string(), size.0.to_bits());
        if let Some(width) = self.cache.borrow().get(&key) {
            return *width;
        }
        let width = self.inner.measure(text, family, size);
        self.cache.borrow_mut().insert(key, width);
        width
    }
}
