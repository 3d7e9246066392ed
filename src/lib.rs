#![deny(bare_trait_objects)]

//! Approximation of quadratic and cubic bézier curves with polylines, for
//! CAD-style integer or floating point coordinate spaces.
//!
//! # Crates
//!
//! This meta-crate (`polyflat`) reexports the following sub-crates for convenience:
//!
//! * **polyflat_flatten** - Adaptive subdivision of bézier curves into polylines.
//! * **polyflat_geom** - Bézier segments, midpoint geometry and coordinate conversions.
//!
//! Each `polyflat_<name>` crate is reexported as a `<name>` module in `polyflat`,
//! and the flattening entry points are also available at the root.
//!
//! # Example
//!
//! ```
//! use polyflat::math::point;
//! use polyflat::{flatten_quadratic, FlattenOptions};
//!
//! let polyline = flatten_quadratic(
//!     point(0, 0),
//!     point(500, 1000),
//!     point(1000, 0),
//!     &FlattenOptions::DEFAULT,
//! );
//!
//! assert_eq!(polyline[0], point(0, 0));
//! assert_eq!(polyline[polyline.len() - 1], point(1000, 0));
//! ```
//!
//! # Precision
//!
//! The maximum distance between a curve and its approximation is
//! `0.5 / approximation_scale`, see [`FlattenOptions`]. Turning on the angle
//! tolerance additionally refines the sharp turns of the curves, which matters
//! when the polylines are later offset or stroked with a large width.

pub extern crate polyflat_flatten;
pub extern crate polyflat_geom;

pub use polyflat_flatten as flatten;
pub use polyflat_geom as geom;

/// Points, vectors and their shorthand constructors.
pub mod math {
    pub use crate::geom::{point, vector, Point, Vector};
}

pub use crate::flatten::{
    flatten_cubic, flatten_cubic_into, flatten_quadratic, flatten_quadratic_into,
    try_flatten_cubic, try_flatten_quadratic, FlattenError, FlattenOptions, Polyline,
};
