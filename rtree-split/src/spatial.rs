//! Geometry primitives over axis-aligned boxes of any dimensionality.
//!
//! Everything the split strategies need from a spatial object is captured by
//! [`SpatialComparable`]: the number of dimensions and the lower and upper
//! bound per dimension. The free functions in this module compute the
//! quantities the strategies optimize (volume, overlap, perimeter) directly
//! from those bounds, so they work on any mix of entry types and
//! [`BoundingBox`] accumulators without allocating.
//!
//! Dimensions are zero-indexed. Functions taking two objects expect them to
//! have the same dimensionality; the strategies validate this once per split
//! before calling in here.

use crate::adapter::ArrayAdapter;
use crate::bounding_box::BoundingBox;
use crate::errors::{SplitError, SplitResult};

/// An object with an axis-aligned extent in every dimension.
///
/// Implementors must return `min(d) <= max(d)` for every `d` below
/// `dimensionality()`. A point is represented with `min(d) == max(d)`.
pub trait SpatialComparable {
    /// Returns the number of dimensions.
    fn dimensionality(&self) -> usize;

    /// Returns the lower bound in dimension `d`.
    fn min(&self, d: usize) -> f64;

    /// Returns the upper bound in dimension `d`.
    fn max(&self, d: usize) -> f64;
}

impl<T: SpatialComparable + ?Sized> SpatialComparable for &T {
    fn dimensionality(&self) -> usize {
        (**self).dimensionality()
    }

    fn min(&self, d: usize) -> f64 {
        (**self).min(d)
    }

    fn max(&self, d: usize) -> f64 {
        (**self).max(d)
    }
}

#[inline]
fn same_dimensionality<A, B>(a: &A, b: &B) -> usize
where
    A: SpatialComparable + ?Sized,
    B: SpatialComparable + ?Sized,
{
    let dim = a.dimensionality();
    debug_assert_eq!(
        dim,
        b.dimensionality(),
        "spatial objects must have the same dimensionality"
    );
    dim
}

/// Computes the volume of a box.
///
/// Returns `0.0` as soon as one dimension has zero extent, so points and
/// degenerate boxes never produce `NaN` from `0 * inf`.
pub fn volume<A: SpatialComparable + ?Sized>(a: &A) -> f64 {
    let mut vol = 1.0;
    for d in 0..a.dimensionality() {
        let delta = a.max(d) - a.min(d);
        if delta == 0.0 {
            return 0.0;
        }
        vol *= delta;
    }
    vol
}

/// Computes the volume of the union box of `a` and `b`.
///
/// Like [`volume`], a zero extent in any dimension yields `0.0`.
pub fn volume_union<A, B>(a: &A, b: &B) -> f64
where
    A: SpatialComparable + ?Sized,
    B: SpatialComparable + ?Sized,
{
    let dim = same_dimensionality(a, b);
    let mut vol = 1.0;
    for d in 0..dim {
        let lo = a.min(d).min(b.min(d));
        let hi = a.max(d).max(b.max(d));
        let delta = hi - lo;
        if delta == 0.0 {
            return 0.0;
        }
        vol *= delta;
    }
    vol
}

/// Computes how much the volume of `existing` grows when it is extended to
/// cover `addition`.
pub fn enlargement<A, B>(existing: &A, addition: &B) -> f64
where
    A: SpatialComparable + ?Sized,
    B: SpatialComparable + ?Sized,
{
    volume_union(existing, addition) - volume(existing)
}

/// Computes the volume of the intersection of `a` and `b`.
///
/// Boxes that only touch have zero overlap.
pub fn overlap<A, B>(a: &A, b: &B) -> f64
where
    A: SpatialComparable + ?Sized,
    B: SpatialComparable + ?Sized,
{
    let dim = same_dimensionality(a, b);
    let mut vol = 1.0;
    for d in 0..dim {
        let omax = a.max(d).min(b.max(d));
        let omin = a.min(d).max(b.min(d));
        if omax <= omin {
            return 0.0;
        }
        vol *= omax - omin;
    }
    vol
}

/// Computes the overlap of `a` and `b` relative to their summed volumes.
pub fn relative_overlap<A, B>(a: &A, b: &B) -> f64
where
    A: SpatialComparable + ?Sized,
    B: SpatialComparable + ?Sized,
{
    let dim = same_dimensionality(a, b);
    let mut vol = 1.0;
    let mut vol_a = 1.0;
    let mut vol_b = 1.0;
    for d in 0..dim {
        let omax = a.max(d).min(b.max(d));
        let omin = a.min(d).max(b.min(d));
        if omax <= omin {
            return 0.0;
        }
        vol *= omax - omin;
        vol_a *= a.max(d) - a.min(d);
        vol_b *= b.max(d) - b.min(d);
    }
    vol / (vol_a + vol_b)
}

/// Computes the margin of a box: the sum of its extents over all dimensions.
pub fn perimeter<A: SpatialComparable + ?Sized>(a: &A) -> f64 {
    (0..a.dimensionality()).map(|d| a.max(d) - a.min(d)).sum()
}

/// Returns the union box of `a` and `b`.
pub fn union<A, B>(a: &A, b: &B) -> BoundingBox
where
    A: SpatialComparable + ?Sized,
    B: SpatialComparable + ?Sized,
{
    let mut mbr = BoundingBox::from_spatial(a);
    mbr.extend(b);
    mbr
}

/// Returns the bounding box of every entry in `entries`.
///
/// # Errors
///
/// Returns [`SplitError::InvalidSplitState`] when the container is empty.
pub fn union_of<A, G>(entries: &A, getter: &G) -> SplitResult<BoundingBox>
where
    A: ?Sized,
    G: ArrayAdapter<A>,
{
    let num = getter.size(entries);
    if num == 0 {
        return Err(SplitError::InvalidSplitState(
            "cannot compute the bounding box of an empty set".into(),
        ));
    }
    let mut mbr = BoundingBox::from_spatial(getter.get(entries, 0));
    for i in 1..num {
        mbr.extend(getter.get(entries, i));
    }
    Ok(mbr)
}

/// Checks whether `a` and `b` share at least one point. Touching counts.
pub fn intersects<A, B>(a: &A, b: &B) -> bool
where
    A: SpatialComparable + ?Sized,
    B: SpatialComparable + ?Sized,
{
    let dim = same_dimensionality(a, b);
    (0..dim).all(|d| b.max(d) >= a.min(d) && a.max(d) >= b.min(d))
}

/// Checks whether `outer` fully contains `inner`.
pub fn contains<A, B>(outer: &A, inner: &B) -> bool
where
    A: SpatialComparable + ?Sized,
    B: SpatialComparable + ?Sized,
{
    let dim = same_dimensionality(outer, inner);
    (0..dim).all(|d| inner.min(d) >= outer.min(d) && inner.max(d) <= outer.max(d))
}

/// Checks whether two objects have exactly the same bounds.
pub fn equals<A, B>(a: &A, b: &B) -> bool
where
    A: SpatialComparable + ?Sized,
    B: SpatialComparable + ?Sized,
{
    a.dimensionality() == b.dimensionality()
        && (0..a.dimensionality()).all(|d| a.min(d) == b.min(d) && a.max(d) == b.max(d))
}
