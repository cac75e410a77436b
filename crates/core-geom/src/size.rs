//! Width × height pair used by dimension-based viewport construction.

use std::fmt;

use crate::{Coord, GeometryError, Point, Result};

/// Dimensions of a rectangular region in cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: Coord,
    pub height: Coord,
}

impl Size {
    pub const fn new(width: Coord, height: Coord) -> Self {
        Self { width, height }
    }

    /// True when the size spans at least one cell on both axes.
    pub const fn has_area(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Total cell count as the raw `width * height` product. Widened to
    /// `i64` so the multiply is total over the whole `Coord` range.
    pub fn area(&self) -> i64 {
        i64::from(self.width) * i64::from(self.height)
    }

    /// Grow both axes; fails instead of wrapping.
    pub fn checked_add(self, rhs: Size) -> Result<Size> {
        let width = self
            .width
            .checked_add(rhs.width)
            .ok_or(GeometryError::ArithmeticOverflow)?;
        let height = self
            .height
            .checked_add(rhs.height)
            .ok_or(GeometryError::ArithmeticOverflow)?;
        Ok(Size { width, height })
    }

    /// Shrink both axes; fails instead of wrapping.
    pub fn checked_sub(self, rhs: Size) -> Result<Size> {
        let width = self
            .width
            .checked_sub(rhs.width)
            .ok_or(GeometryError::ArithmeticOverflow)?;
        let height = self
            .height
            .checked_sub(rhs.height)
            .ok_or(GeometryError::ArithmeticOverflow)?;
        Ok(Size { width, height })
    }

    /// Scale both axes by an integer factor; fails instead of wrapping.
    pub fn checked_mul(self, factor: Coord) -> Result<Size> {
        let width = self
            .width
            .checked_mul(factor)
            .ok_or(GeometryError::ArithmeticOverflow)?;
        let height = self
            .height
            .checked_mul(factor)
            .ok_or(GeometryError::ArithmeticOverflow)?;
        Ok(Size { width, height })
    }

    /// Divide both axes by an integer factor; zero divisor is an error.
    pub fn checked_div(self, divisor: Coord) -> Result<Size> {
        let width = self
            .width
            .checked_div(divisor)
            .ok_or(GeometryError::ArithmeticOverflow)?;
        let height = self
            .height
            .checked_div(divisor)
            .ok_or(GeometryError::ArithmeticOverflow)?;
        Ok(Size { width, height })
    }
}

// Some construction seams speak "dimensions as a pair"; conversion keeps the
// two spellings interchangeable without duplicating arithmetic.
impl From<Point> for Size {
    fn from(p: Point) -> Self {
        Size::new(p.x, p.y)
    }
}

impl From<Size> for Point {
    fn from(s: Size) -> Self {
        Point::new(s.width, s.height)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
