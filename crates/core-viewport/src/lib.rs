//! Viewport: a validated rectangle with a bounds/traversal/algebra API.
//!
//! Every higher layer of a terminal host (buffer writes, rendering,
//! selection, scrolling, popup placement) needs the same handful of
//! questions answered about a rectangular region of cells, and every one of
//! those questions hides an off-by-one if callers work on raw edges. This
//! crate centralizes them behind [`Viewport`], which normalizes all input
//! conventions to inclusive storage and exposes:
//!
//! * construction from inclusive rects, exclusive rects, origin+dimensions,
//!   or a single cell;
//! * bounds tests, clamping, origin-relative conversion, and trimming;
//! * bounded and circular row-major traversal in all four walk directions,
//!   linear-offset movement, and traversal-order comparison;
//! * bounding-box union, intersection, translation, and subtraction into at
//!   most four disjoint strips.
//!
//! Invariants:
//! * A viewport stores inclusive edges; `is_valid()` means
//!   `left <= right && top <= bottom`. The canonical empty value is
//!   `{0, 0, -1, -1}`.
//! * Every operation is a pure value computation: no allocation (subtract
//!   returns a fixed-capacity [`ViewportSet`]), no locks, no I/O, O(1) time.
//! * Only two operations can fail: clamping a point against an invalid
//!   region, and edge arithmetic leaving `Coord`'s range. Everything else is
//!   total because bounds queries sit on hot paths.

mod algebra;
mod viewport;
mod walk;

pub use algebra::ViewportSet;
pub use viewport::Viewport;
pub use walk::{Cells, WalkDir, XWalk, YWalk};

// Re-export the leaf value types so downstream crates can depend on this
// crate alone.
pub use core_geom::{Coord, GeometryError, Point, Rect, Result, Size};
