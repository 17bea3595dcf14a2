//! Length units and the conversions between them.
//!
//! Layout happens in canvas pixels ([`Px`]); exports to print services are expressed in
//! inches ([`In`]) for geometry and points ([`Pt`]) for font sizes.

use derive_more::{Add, AddAssign, Display, From, Into, Sub, SubAssign, Sum};
use serde::{Deserialize, Serialize};
use std::ops::{Div, Mul, Neg};

/// CSS reference pixels per inch
pub const PIXELS_PER_INCH: f32 = 96.0;

/// Typographic points per inch
pub const POINTS_PER_INCH: f32 = 72.0;

/// A length in canvas pixels
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Sum,
    Display,
    From,
    Into,
    Serialize,
    Deserialize,
)]
#[display("{_0}px")]
pub struct Px(pub f32);

/// A length in typographic points (1/72 of an inch)
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Sum,
    Display,
    From,
    Into,
    Serialize,
    Deserialize,
)]
#[display("{_0}pt")]
pub struct Pt(pub f32);

/// A length in inches
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Sum,
    Display,
    From,
    Into,
    Serialize,
    Deserialize,
)]
#[display("{_0}in")]
pub struct In(pub f32);

macro_rules! scalar_ops {
    ($unit:ident) => {
        impl Mul<f32> for $unit {
            type Output = $unit;

            fn mul(self, rhs: f32) -> $unit {
                $unit(self.0 * rhs)
            }
        }

        impl Div<f32> for $unit {
            type Output = $unit;

            fn div(self, rhs: f32) -> $unit {
                $unit(self.0 / rhs)
            }
        }

        /// The ratio between two lengths of the same unit
        impl Div<$unit> for $unit {
            type Output = f32;

            fn div(self, rhs: $unit) -> f32 {
                self.0 / rhs.0
            }
        }

        impl Neg for $unit {
            type Output = $unit;

            fn neg(self) -> $unit {
                $unit(-self.0)
            }
        }

        impl $unit {
            /// The absolute value of the length
            pub fn abs(self) -> $unit {
                $unit(self.0.abs())
            }
        }
    };
}

scalar_ops!(Px);
scalar_ops!(Pt);
scalar_ops!(In);

impl Px {
    /// A whole-pixel font size as a length
    pub fn from_size(size: u32) -> Px {
        Px(size as f32)
    }
}

impl From<In> for Pt {
    fn from(value: In) -> Self {
        Pt(value.0 * POINTS_PER_INCH)
    }
}

impl From<Pt> for In {
    fn from(value: Pt) -> Self {
        In(value.0 / POINTS_PER_INCH)
    }
}

/// Converts pixels to points at the CSS reference density (72 / 96)
pub fn pixels_to_points(p: Px) -> Pt {
    Pt(p.0 * POINTS_PER_INCH / PIXELS_PER_INCH)
}

/// Converts pixels to inches, given the physical width of the print area and the pixel
/// width of the canvas that print area was laid out on
pub fn pixels_to_inches(p: Px, print_width: In, reference_width: Px) -> In {
    In(p.0 * (print_width.0 / reference_width.0))
}

/// Pixel-to-physical conversion bound to one print area
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct UnitConverter {
    pub print_width: In,
    pub reference_width: Px,
}

impl UnitConverter {
    pub fn new(print_width: In, reference_width: Px) -> UnitConverter {
        UnitConverter {
            print_width,
            reference_width,
        }
    }

    pub fn to_inches(&self, p: Px) -> In {
        pixels_to_inches(p, self.print_width, self.reference_width)
    }

    pub fn to_points(&self, p: Px) -> Pt {
        pixels_to_points(p)
    }
}
