//! Viewport set algebra: translation, bounding-box union, intersection, and
//! subtraction into disjoint strips.

use arrayvec::ArrayVec;
use core_geom::{GeometryError, Point, Rect, Result};

use crate::Viewport;

/// Result of [`Viewport::subtract`]: removing one rectangle from another
/// never yields more than four disjoint pieces, so the set lives on the
/// stack with no heap allocation.
pub type ViewportSet = ArrayVec<Viewport, 4>;

impl Viewport {
    /// Translate all four edges by `delta`. Fails with
    /// [`GeometryError::ArithmeticOverflow`] when any edge addition leaves
    /// the coordinate range.
    pub fn offset(&self, delta: Point) -> Result<Viewport> {
        let left = self
            .left()
            .checked_add(delta.x)
            .ok_or(GeometryError::ArithmeticOverflow)?;
        let right = self
            .right_inclusive()
            .checked_add(delta.x)
            .ok_or(GeometryError::ArithmeticOverflow)?;
        let top = self
            .top()
            .checked_add(delta.y)
            .ok_or(GeometryError::ArithmeticOverflow)?;
        let bottom = self
            .bottom_inclusive()
            .checked_add(delta.y)
            .ok_or(GeometryError::ArithmeticOverflow)?;
        Ok(Viewport::from_inclusive(Rect::new(left, top, right, bottom)))
    }

    /// Smallest viewport covering both regions: a bounding box, not a shape
    /// union, so disjoint inputs produce cells in neither. An invalid side
    /// acts as the identity element; two invalid sides yield empty.
    pub fn union(&self, other: &Viewport) -> Viewport {
        match (self.is_valid(), other.is_valid()) {
            (false, false) => Viewport::empty(),
            (false, true) => *other,
            (true, false) => *self,
            (true, true) => Viewport::from_inclusive(Rect::new(
                self.left().min(other.left()),
                self.top().min(other.top()),
                self.right_inclusive().max(other.right_inclusive()),
                self.bottom_inclusive().max(other.bottom_inclusive()),
            )),
        }
    }

    /// Overlap region: max of lefts/tops, min of rights/bottoms. Disjoint
    /// inputs produce an *invalid* result which is deliberately not
    /// normalized to [`Viewport::empty`]; callers branch on
    /// [`is_valid`](Viewport::is_valid).
    pub fn intersect(&self, other: &Viewport) -> Viewport {
        Viewport::from_inclusive(Rect::new(
            self.left().max(other.left()),
            self.top().max(other.top()),
            self.right_inclusive().min(other.right_inclusive()),
            self.bottom_inclusive().min(other.bottom_inclusive()),
        ))
    }

    /// The area of this region not covered by `remove`, as up to four
    /// disjoint inclusive strips emitted in fixed order: top, bottom, left,
    /// right.
    ///
    /// Top and bottom strips span the full width of this region; left and
    /// right strips are trimmed to the overlap's vertical extent so the
    /// pieces never overlap each other. No overlap returns `{self}`
    /// unchanged; `remove` covering this region (including `remove ==
    /// self`) returns the empty set.
    pub fn subtract(&self, remove: &Viewport) -> ViewportSet {
        let mut result = ViewportSet::new();

        // Only the part of `remove` that actually covers cells of this
        // region participates.
        let shared = self.intersect(remove);
        if !shared.is_valid() {
            result.push(*self);
            return result;
        }
        if shared == *self {
            return result;
        }

        // Wide strips first so row-oriented consumers see full rows.
        if self.top() < shared.top() {
            result.push(Viewport::from_inclusive(Rect::new(
                self.left(),
                self.top(),
                self.right_inclusive(),
                shared.top() - 1,
            )));
        }
        if self.bottom_inclusive() > shared.bottom_inclusive() {
            result.push(Viewport::from_inclusive(Rect::new(
                self.left(),
                shared.bottom_inclusive() + 1,
                self.right_inclusive(),
                self.bottom_inclusive(),
            )));
        }
        if self.left() < shared.left() {
            result.push(Viewport::from_inclusive(Rect::new(
                self.left(),
                shared.top(),
                shared.left() - 1,
                shared.bottom_inclusive(),
            )));
        }
        if self.right_inclusive() > shared.right_inclusive() {
            result.push(Viewport::from_inclusive(Rect::new(
                shared.right_inclusive() + 1,
                shared.top(),
                self.right_inclusive(),
                shared.bottom_inclusive(),
            )));
        }
        result
    }
}
