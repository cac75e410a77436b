//! Bounded and circular row-major traversal over a viewport.
//!
//! All traversal functions mutate a caller-supplied position and report
//! progress through their return value, so a scan loop is
//! `while v.increment_in_bounds(&mut pos, false) { .. }` with no hidden
//! state. Positions handed in must already be in bounds; that precondition
//! is debug-asserted and release builds stay total.
//!
//! Invariants:
//! * A non-circular step that would leave the region returns `false` and
//!   leaves the position unchanged.
//! * A circular step at the terminal corner wraps to the walk origin of the
//!   same direction and returns `false` ("wrapped", not "error").
//! * `move_in_bounds` and `compare_in_bounds` agree with repeated
//!   single-stepping; they are computed on linear cell offsets, not loops.

use core_geom::{Coord, Point};

use crate::Viewport;

/// Horizontal scan direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XWalk {
    LeftToRight,
    RightToLeft,
}

/// Vertical scan direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YWalk {
    TopToBottom,
    BottomToTop,
}

/// One of the four traversal orders over a 2-D region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkDir {
    pub x: XWalk,
    pub y: YWalk,
}

impl WalkDir {
    /// Reading order: left-to-right, top-to-bottom.
    pub const FORWARD: WalkDir = WalkDir {
        x: XWalk::LeftToRight,
        y: YWalk::TopToBottom,
    };
    /// Reverse reading order: right-to-left, bottom-to-top.
    pub const REVERSE: WalkDir = WalkDir {
        x: XWalk::RightToLeft,
        y: YWalk::BottomToTop,
    };
}

impl Viewport {
    /// Step one cell forward in reading order, wrapping to the next row at
    /// the right edge. Returns `false` (position unchanged) from the
    /// bottom-right corner. With `allow_end_exclusive`, the walk may stop on
    /// the [`end_exclusive`](Viewport::end_exclusive) sentinel instead.
    pub fn increment_in_bounds(&self, pos: &mut Point, allow_end_exclusive: bool) -> bool {
        self.walk_in_bounds(pos, WalkDir::FORWARD, allow_end_exclusive)
    }

    /// Like [`increment_in_bounds`](Viewport::increment_in_bounds), but the
    /// bottom-right corner wraps to the top-left corner; `false` then means
    /// "wrapped", and the position is still updated.
    pub fn increment_in_bounds_circular(&self, pos: &mut Point) -> bool {
        self.walk_in_bounds_circular(pos, WalkDir::FORWARD, false)
    }

    /// Step one cell backward in reading order, wrapping to the previous row
    /// at the left edge. Returns `false` (position unchanged) from the
    /// top-left corner.
    pub fn decrement_in_bounds(&self, pos: &mut Point, allow_end_exclusive: bool) -> bool {
        self.walk_in_bounds(pos, WalkDir::REVERSE, allow_end_exclusive)
    }

    /// Like [`decrement_in_bounds`](Viewport::decrement_in_bounds), but the
    /// top-left corner wraps to the bottom-right corner; `false` then means
    /// "wrapped", and the position is still updated.
    pub fn decrement_in_bounds_circular(&self, pos: &mut Point) -> bool {
        self.walk_in_bounds_circular(pos, WalkDir::REVERSE, false)
    }

    /// Step one cell in an arbitrary walk direction. Returns `false` and
    /// leaves the position unchanged when the step would leave the region.
    pub fn walk_in_bounds(&self, pos: &mut Point, dir: WalkDir, allow_end_exclusive: bool) -> bool {
        let mut probe = *pos;
        if self.walk_in_bounds_circular(&mut probe, dir, allow_end_exclusive) {
            *pos = probe;
            true
        } else {
            false
        }
    }

    /// Step one cell in an arbitrary walk direction, wrapping from the
    /// terminal corner back to [`walk_origin`](Viewport::walk_origin) for
    /// that direction. Returns `false` exactly on the wrap step.
    pub fn walk_in_bounds_circular(
        &self,
        pos: &mut Point,
        dir: WalkDir,
        allow_end_exclusive: bool,
    ) -> bool {
        debug_assert!(
            self.is_in_bounds(*pos, allow_end_exclusive),
            "walk position must start in bounds"
        );
        match dir.x {
            XWalk::LeftToRight => {
                if allow_end_exclusive && *pos == self.end_exclusive() {
                    // Stepping off the sentinel restarts the walk.
                    pos.y = self.top();
                    return false;
                }
                if pos.x == self.right_inclusive() {
                    pos.x = self.left();
                    match dir.y {
                        YWalk::TopToBottom => {
                            pos.y += 1;
                            if allow_end_exclusive && pos.y == self.bottom_exclusive() {
                                // Legal stop one past the last cell.
                                return true;
                            }
                        }
                        YWalk::BottomToTop => pos.y -= 1,
                    }
                } else {
                    pos.x += 1;
                }
            }
            XWalk::RightToLeft => {
                if pos.x == self.left() {
                    pos.x = self.right_inclusive();
                    match dir.y {
                        YWalk::TopToBottom => pos.y += 1,
                        YWalk::BottomToTop => pos.y -= 1,
                    }
                } else {
                    pos.x -= 1;
                }
            }
        }
        // Row exhausted: wrap to the opposite side and report it.
        if pos.y > self.bottom_inclusive() {
            pos.y = self.top();
            false
        } else if pos.y < self.top() {
            pos.y = self.bottom_inclusive();
            false
        } else {
            true
        }
    }

    /// The corner a walk in `dir` starts from.
    pub fn walk_origin(&self, dir: WalkDir) -> Point {
        Point::new(
            match dir.x {
                XWalk::LeftToRight => self.left(),
                XWalk::RightToLeft => self.right_inclusive(),
            },
            match dir.y {
                YWalk::TopToBottom => self.top(),
                YWalk::BottomToTop => self.bottom_inclusive(),
            },
        )
    }

    /// Pick the walk direction that lets `source`'s content be copied onto
    /// `target` in place without overwriting cells that have not been read
    /// yet: when the target origin precedes the source origin on an axis,
    /// walk toward increasing coordinates on that axis, otherwise walk
    /// toward decreasing ones.
    pub fn determine_walk_direction(source: &Viewport, target: &Viewport) -> WalkDir {
        let source_origin = source.origin();
        let target_origin = target.origin();
        WalkDir {
            x: if target_origin.x < source_origin.x {
                XWalk::LeftToRight
            } else {
                XWalk::RightToLeft
            },
            y: if target_origin.y < source_origin.y {
                YWalk::TopToBottom
            } else {
                YWalk::BottomToTop
            },
        }
    }

    /// Advance `pos` by `delta` cells in reading order (negative walks
    /// backward), wrapping across rows. Returns `false` and restores the
    /// original position when the target cell falls outside the region.
    pub fn move_in_bounds(&self, delta: i64, pos: &mut Point) -> bool {
        debug_assert!(
            self.is_in_bounds(*pos, false),
            "move position must start in bounds"
        );
        let width = i128::from(self.width());
        let height = i128::from(self.height());
        if width <= 0 || height <= 0 {
            return false;
        }
        let col = i128::from(pos.x) - i128::from(self.left());
        let row = i128::from(pos.y) - i128::from(self.top());
        let target = row * width + col + i128::from(delta);
        if target < 0 || target >= width * height {
            return false;
        }
        pos.x = self.left() + (target % width) as Coord;
        pos.y = self.top() + (target / width) as Coord;
        true
    }

    /// Signed distance between two in-bounds positions in reading order:
    /// negative when `first` precedes `second`, zero when equal. The
    /// [`end_exclusive`](Viewport::end_exclusive) sentinel compares one past
    /// the last cell when the flag is set.
    pub fn compare_in_bounds(&self, first: Point, second: Point, allow_end_exclusive: bool) -> i64 {
        debug_assert!(
            self.is_in_bounds(first, allow_end_exclusive),
            "first position must be in bounds"
        );
        debug_assert!(
            self.is_in_bounds(second, allow_end_exclusive),
            "second position must be in bounds"
        );
        let width = i128::from(self.width());
        let offset = |p: Point| {
            (i128::from(p.y) - i128::from(self.top())) * width
                + (i128::from(p.x) - i128::from(self.left()))
        };
        let diff = offset(first) - offset(second);
        // Saturate past ±2^63 cells; no addressable viewport gets there.
        diff.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
    }

    /// Iterate every cell position in walk order. Yields nothing for an
    /// invalid region.
    pub fn cells(&self, dir: WalkDir) -> Cells {
        Cells {
            view: *self,
            dir,
            next: self.is_valid().then(|| self.walk_origin(dir)),
        }
    }
}

/// Iterator over the cell positions of a viewport in a fixed walk order.
#[derive(Debug, Clone)]
pub struct Cells {
    view: Viewport,
    dir: WalkDir,
    next: Option<Point>,
}

impl Iterator for Cells {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let current = self.next?;
        let mut probe = current;
        self.next = self
            .view
            .walk_in_bounds_circular(&mut probe, self.dir, false)
            .then_some(probe);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            // Remaining count is bounded by the area; exact tracking is not
            // worth carrying a counter for.
            Some(_) => (1, self.view.dimensions().area().try_into().ok()),
            None => (0, Some(0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_geom::Rect;

    fn region() -> Viewport {
        // 10x10 box
        Viewport::from_inclusive(Rect::new(10, 20, 19, 29))
    }

    #[test]
    fn increment_steps_within_row() {
        let v = region();
        let mut pos = Point::new(15, 25);
        assert!(v.increment_in_bounds(&mut pos, false));
        assert_eq!(pos, Point::new(16, 25));
    }

    #[test]
    fn increment_wraps_to_next_row() {
        let v = region();
        let mut pos = Point::new(19, 25);
        assert!(v.increment_in_bounds(&mut pos, false));
        assert_eq!(pos, Point::new(10, 26));
    }

    #[test]
    fn increment_stops_at_bottom_right() {
        let v = region();
        let mut pos = Point::new(19, 29);
        assert!(!v.increment_in_bounds(&mut pos, false));
        assert_eq!(pos, Point::new(19, 29), "failed step leaves pos unchanged");
    }

    #[test]
    fn increment_circular_wraps_to_top_left() {
        let v = region();
        let mut pos = Point::new(19, 29);
        assert!(!v.increment_in_bounds_circular(&mut pos));
        assert_eq!(pos, Point::new(10, 20), "wrap lands on walk origin");
    }

    #[test]
    fn decrement_steps_and_wraps() {
        let v = region();
        let mut pos = Point::new(15, 25);
        assert!(v.decrement_in_bounds(&mut pos, false));
        assert_eq!(pos, Point::new(14, 25));

        pos = Point::new(10, 25);
        assert!(v.decrement_in_bounds(&mut pos, false));
        assert_eq!(pos, Point::new(19, 24));
    }

    #[test]
    fn decrement_stops_at_top_left() {
        let v = region();
        let mut pos = Point::new(10, 20);
        assert!(!v.decrement_in_bounds(&mut pos, false));
        assert_eq!(pos, Point::new(10, 20));
    }

    #[test]
    fn decrement_circular_wraps_to_bottom_right() {
        let v = region();
        let mut pos = Point::new(10, 20);
        assert!(!v.decrement_in_bounds_circular(&mut pos));
        assert_eq!(pos, Point::new(19, 29));
    }

    #[test]
    fn increment_then_decrement_restores_interior_position() {
        let v = region();
        let original = Point::new(14, 23);
        let mut pos = original;
        assert!(v.increment_in_bounds(&mut pos, false));
        assert!(v.decrement_in_bounds(&mut pos, false));
        assert_eq!(pos, original);
    }

    #[test]
    fn end_exclusive_walk_stop_and_restart() {
        let v = region();
        // Stepping off the last cell with the flag lands on the sentinel and
        // still counts as progress.
        let mut pos = Point::new(19, 29);
        assert!(v.increment_in_bounds(&mut pos, true));
        assert_eq!(pos, v.end_exclusive());

        // Stepping off the sentinel is the wrap.
        assert!(!v.walk_in_bounds_circular(&mut pos, WalkDir::FORWARD, true));
        assert_eq!(pos, Point::new(10, 20));

        // Backing off the sentinel returns to the last cell.
        let mut back = v.end_exclusive();
        assert!(v.decrement_in_bounds(&mut back, true));
        assert_eq!(back, Point::new(19, 29));
    }

    #[test]
    fn walk_origin_per_direction() {
        let v = region();
        let cases = [
            (XWalk::LeftToRight, YWalk::TopToBottom, Point::new(10, 20)),
            (XWalk::RightToLeft, YWalk::TopToBottom, Point::new(19, 20)),
            (XWalk::LeftToRight, YWalk::BottomToTop, Point::new(10, 29)),
            (XWalk::RightToLeft, YWalk::BottomToTop, Point::new(19, 29)),
        ];
        for (x, y, expected) in cases {
            assert_eq!(v.walk_origin(WalkDir { x, y }), expected);
        }
    }

    #[test]
    fn generic_walk_wraps_to_its_own_origin() {
        let v = region();
        let dir = WalkDir {
            x: XWalk::RightToLeft,
            y: YWalk::TopToBottom,
        };
        // Terminal corner for this direction is the left edge of the last
        // row; one more circular step wraps to (right, top).
        let mut pos = Point::new(10, 29);
        assert!(!v.walk_in_bounds_circular(&mut pos, dir, false));
        assert_eq!(pos, v.walk_origin(dir));
    }

    #[test]
    fn determine_walk_direction_avoids_overwrite() {
        let src = Viewport::from_inclusive(Rect::new(5, 5, 10, 10));
        // Target up-left of source: read in reading order so the cells ahead
        // of the write cursor are untouched.
        let target = Viewport::from_inclusive(Rect::new(2, 2, 7, 7));
        assert_eq!(
            Viewport::determine_walk_direction(&src, &target),
            WalkDir::FORWARD
        );
        // Target down-right: read in reverse order.
        let target = Viewport::from_inclusive(Rect::new(7, 7, 12, 12));
        assert_eq!(
            Viewport::determine_walk_direction(&src, &target),
            WalkDir::REVERSE
        );
        // Same origin degenerates to reverse (either order is safe).
        assert_eq!(
            Viewport::determine_walk_direction(&src, &src),
            WalkDir::REVERSE
        );
    }

    #[test]
    fn move_in_bounds_matches_row_major_arithmetic() {
        // 20x20 box at the origin, the shape buffer writers use.
        let v = Viewport::from_inclusive(Rect::new(0, 0, 19, 19));
        let mut pos = Point::new(3, 2);
        assert!(v.move_in_bounds(45, &mut pos));
        // (3 + 45) = 48 -> col 8, two rows down
        assert_eq!(pos, Point::new(8, 4));

        assert!(v.move_in_bounds(-45, &mut pos));
        assert_eq!(pos, Point::new(3, 2));
    }

    #[test]
    fn move_in_bounds_restores_on_overflow_past_last_row() {
        let v = Viewport::from_inclusive(Rect::new(0, 0, 19, 19));
        let mut pos = Point::new(10, 19);
        assert!(!v.move_in_bounds(400, &mut pos));
        assert_eq!(pos, Point::new(10, 19));

        // Walking backward past the first cell fails the same way.
        let mut pos = Point::new(2, 0);
        assert!(!v.move_in_bounds(-3, &mut pos));
        assert_eq!(pos, Point::new(2, 0));

        // Exactly onto the last cell is fine.
        let mut pos = Point::new(10, 19);
        assert!(v.move_in_bounds(9, &mut pos));
        assert_eq!(pos, Point::new(19, 19));
    }

    #[test]
    fn move_in_bounds_agrees_with_stepping() {
        let v = region();
        let mut jumped = Point::new(12, 24);
        assert!(v.move_in_bounds(17, &mut jumped));

        let mut stepped = Point::new(12, 24);
        for _ in 0..17 {
            assert!(v.increment_in_bounds(&mut stepped, false));
        }
        assert_eq!(jumped, stepped);
    }

    #[test]
    fn compare_orders_same_row_by_column() {
        let v = region();
        let first = Point::new(12, 24);
        let second = Point::new(14, 24);
        assert_eq!(v.compare_in_bounds(first, second, false), -2);
        assert_eq!(v.compare_in_bounds(second, first, false), 2);
    }

    #[test]
    fn compare_orders_across_rows() {
        let v = region();
        // Right edge of one row immediately precedes the left edge of the
        // next.
        let below_left = Point::new(10, 24);
        let above_right = Point::new(19, 23);
        assert_eq!(v.compare_in_bounds(below_left, above_right, false), 1);
        assert_eq!(v.compare_in_bounds(above_right, below_left, false), -1);
        assert_eq!(v.compare_in_bounds(below_left, below_left, false), 0);
    }

    #[test]
    fn compare_treats_sentinel_as_one_past_last() {
        let v = region();
        let last = Point::new(19, 29);
        assert_eq!(v.compare_in_bounds(v.end_exclusive(), last, true), 1);
    }

    #[test]
    fn cells_visit_every_position_once_in_order() {
        let v = Viewport::from_inclusive(Rect::new(1, 1, 3, 2));
        let forward: Vec<Point> = v.cells(WalkDir::FORWARD).collect();
        assert_eq!(
            forward,
            vec![
                Point::new(1, 1),
                Point::new(2, 1),
                Point::new(3, 1),
                Point::new(1, 2),
                Point::new(2, 2),
                Point::new(3, 2),
            ]
        );

        let reverse: Vec<Point> = v.cells(WalkDir::REVERSE).collect();
        let mut expected = forward.clone();
        expected.reverse();
        assert_eq!(reverse, expected);

        assert_eq!(Viewport::empty().cells(WalkDir::FORWARD).count(), 0);
    }

    #[test]
    fn single_cell_region_walks() {
        let v = Viewport::from_point(Point::new(7, 7));
        let mut pos = Point::new(7, 7);
        assert!(!v.increment_in_bounds(&mut pos, false));
        assert!(!v.decrement_in_bounds(&mut pos, false));
        assert!(!v.increment_in_bounds_circular(&mut pos));
        assert_eq!(pos, Point::new(7, 7));
        assert_eq!(v.cells(WalkDir::FORWARD).count(), 1);
    }
}
