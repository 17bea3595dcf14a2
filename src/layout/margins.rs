use crate::rect::Rect;
use crate::units::Px;
use serde::{Deserialize, Serialize};

/// Margins are inset from an area mapping to obtain the region text may occupy.
/// There is no control preventing positioned text from overflowing the margins; they
/// only define the rectangle the fitting search measures against.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: Px,
    pub right: Px,
    pub bottom: Px,
    pub left: Px,
}

impl Margins {
    /// Create margins by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS margins)
    pub fn trbl(top: Px, right: Px, bottom: Px, left: Px) -> Margins {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create margins where all values are equal
    pub fn all<D: Into<Px>>(value: D) -> Margins {
        let value: Px = value.into();
        Margins {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Shrink a rectangle by these margins on every side
    pub fn shrink(&self, rect: &Rect) -> Rect {
        Rect {
            x: rect.x + self.left,
            y: rect.y + self.top,
            width: rect.width - self.left - self.right,
            height: rect.height - self.top - self.bottom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_shrink_rect() {
        let area = Rect::new(Px(100.0), Px(50.0), Px(200.0), Px(120.0));
        let inner = Margins::all(Px(10.0)).shrink(&area);
        assert_eq!(inner, Rect::new(Px(110.0), Px(60.0), Px(180.0), Px(100.0)));

        let inner = Margins::trbl(Px(1.0), Px(2.0), Px(3.0), Px(4.0)).shrink(&area);
        assert_eq!(inner, Rect::new(Px(104.0), Px(51.0), Px(194.0), Px(116.0)));
    }
}
