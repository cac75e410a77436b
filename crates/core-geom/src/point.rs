//! 2-D integer coordinate with row-major ordering and checked arithmetic.

use std::cmp::Ordering;
use std::fmt;

use crate::{Coord, GeometryError, Result};

/// A cell position: column `x`, row `y`.
///
/// Comparison is row-major (the order cells are visited when reading a screen
/// buffer): a point on an earlier row sorts before every point on a later
/// row, and `x` breaks ties within a row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: Coord,
    pub y: Coord,
}

impl Point {
    pub const fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }

    pub const fn origin() -> Self {
        Self { x: 0, y: 0 }
    }

    /// Component-wise addition; fails instead of wrapping.
    pub fn checked_add(self, rhs: Point) -> Result<Point> {
        let x = self
            .x
            .checked_add(rhs.x)
            .ok_or(GeometryError::ArithmeticOverflow)?;
        let y = self
            .y
            .checked_add(rhs.y)
            .ok_or(GeometryError::ArithmeticOverflow)?;
        Ok(Point { x, y })
    }

    /// Component-wise subtraction; fails instead of wrapping.
    pub fn checked_sub(self, rhs: Point) -> Result<Point> {
        let x = self
            .x
            .checked_sub(rhs.x)
            .ok_or(GeometryError::ArithmeticOverflow)?;
        let y = self
            .y
            .checked_sub(rhs.y)
            .ok_or(GeometryError::ArithmeticOverflow)?;
        Ok(Point { x, y })
    }

    /// Component-wise multiplication; fails instead of wrapping.
    pub fn checked_mul(self, rhs: Point) -> Result<Point> {
        let x = self
            .x
            .checked_mul(rhs.x)
            .ok_or(GeometryError::ArithmeticOverflow)?;
        let y = self
            .y
            .checked_mul(rhs.y)
            .ok_or(GeometryError::ArithmeticOverflow)?;
        Ok(Point { x, y })
    }

    /// Component-wise division. Division by zero reports the same overflow
    /// error as range escape: both mean "this arithmetic has no representable
    /// answer".
    pub fn checked_div(self, rhs: Point) -> Result<Point> {
        let x = self
            .x
            .checked_div(rhs.x)
            .ok_or(GeometryError::ArithmeticOverflow)?;
        let y = self
            .y
            .checked_div(rhs.y)
            .ok_or(GeometryError::ArithmeticOverflow)?;
        Ok(Point { x, y })
    }

    /// Negate both components; fails for `Coord::MIN`.
    pub fn checked_neg(self) -> Result<Point> {
        let x = self.x.checked_neg().ok_or(GeometryError::ArithmeticOverflow)?;
        let y = self.y.checked_neg().ok_or(GeometryError::ArithmeticOverflow)?;
        Ok(Point { x, y })
    }

    /// Scale both components by a float factor, rounding to nearest, failing
    /// when the result cannot be represented as a [`Coord`].
    pub fn scale(self, factor: f64) -> Result<Point> {
        let x = (f64::from(self.x) * factor).round();
        let y = (f64::from(self.y) * factor).round();
        let in_range = |v: f64| v.is_finite() && v >= f64::from(Coord::MIN) && v <= f64::from(Coord::MAX);
        if !in_range(x) || !in_range(y) {
            return Err(GeometryError::ArithmeticOverflow);
        }
        Ok(Point {
            x: x as Coord,
            y: y as Coord,
        })
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        // Rows order before columns.
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
