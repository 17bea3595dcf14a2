use crate::units::*;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in canvas pixel space, specified by its top-left corner and size.
/// The y axis grows downwards.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// The x-coordinate of the left edge.
    pub x: Px,
    /// The y-coordinate of the top edge.
    pub y: Px,
    pub width: Px,
    pub height: Px,
}

impl Rect {
    pub fn new(x: Px, y: Px, width: Px, height: Px) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// The x-coordinate of the right edge
    pub fn right(&self) -> Px {
        self.x + self.width
    }

    /// The y-coordinate of the bottom edge
    pub fn bottom(&self) -> Px {
        self.y + self.height
    }

    /// The horizontal centre line
    pub fn centre_x(&self) -> Px {
        self.x + self.width / 2.0
    }
}
