//! Leaf geometry value types shared by every viewport consumer.
//!
//! This crate owns the three plain-value building blocks (`Point`, `Size`,
//! `Rect`) plus the typed error surface. Everything here is `Copy`,
//! allocation-free, and free of I/O or logging so it can sit underneath hot
//! render/selection paths without pulling runtime machinery along.
//!
//! Design constraints:
//! * Arithmetic that can leave `Coord`'s range never wraps or saturates
//!   silently; it fails with `GeometryError::ArithmeticOverflow` through the
//!   `checked_*` methods. Plain field math is reserved for boundary
//!   conversions whose inputs are representable by contract.
//! * `Rect` carries no inclusive/exclusive interpretation of its own. The
//!   viewport constructors that accept one decide how `right`/`bottom` are
//!   read; keeping the wire type dumb keeps the off-by-one policy in exactly
//!   one place.
//!
//! Invariants:
//! * `Point` ordering is row-major: `y` decides first, then `x`.
//! * `GeometryError` values are comparable so tests can assert on the exact
//!   failure kind.

use thiserror::Error;

mod point;
mod rect;
mod size;

pub use point::Point;
pub use rect::Rect;
pub use size::Size;

/// Integer type for every coordinate component.
pub type Coord = i32;

/// Failure surface of the geometry core.
///
/// Only two things can go wrong: arithmetic left the representable range, or
/// an operation that requires a real region was handed an empty/inverted one.
/// Every other query is total and reports "no" through its return value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// A coordinate or edge computation does not fit in [`Coord`].
    #[error("arithmetic overflow in grid coordinate math")]
    ArithmeticOverflow,
    /// The operation requires a valid, non-empty viewport.
    #[error("viewport is empty or inverted; operation requires a valid region")]
    InvalidViewport,
}

pub type Result<T> = std::result::Result<T, GeometryError>;
