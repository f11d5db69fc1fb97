use crate::errors::{SplitError, SplitResult};
use crate::spatial::SpatialComparable;
use smallvec::SmallVec;

/// Inline capacity for coordinates; boxes up to this many dimensions do not
/// allocate.
const INLINE_DIMS: usize = 4;

type Coords = SmallVec<[f64; INLINE_DIMS]>;

/// A mutable axis-aligned bounding box of arbitrary dimensionality.
///
/// `BoundingBox` is the accumulator the split strategies grow while they
/// distribute entries: it starts as a copy of one entry's extent and is
/// enlarged with [`BoundingBox::extend`] to cover more entries.
///
/// # Examples
///
/// ```rust
/// use rtree_split::{BoundingBox, spatial};
///
/// let mut mbr = BoundingBox::new_2d(0.0, 0.0, 1.0, 1.0);
/// mbr.extend(&BoundingBox::new_2d(4.0, 2.0, 5.0, 3.0));
///
/// assert_eq!(mbr, BoundingBox::new_2d(0.0, 0.0, 5.0, 3.0));
/// assert_eq!(spatial::volume(&mbr), 15.0);
/// ```
#[derive(Clone, PartialEq, Default, Debug, serde::Deserialize, serde::Serialize)]
#[serde(try_from = "RawBoundingBox")]
pub struct BoundingBox {
    min: Coords,
    max: Coords,
}

/// Unchecked wire form of [`BoundingBox`]; deserialization goes through
/// [`BoundingBox::new`].
#[derive(serde::Deserialize)]
struct RawBoundingBox {
    min: Vec<f64>,
    max: Vec<f64>,
}

impl TryFrom<RawBoundingBox> for BoundingBox {
    type Error = SplitError;

    fn try_from(raw: RawBoundingBox) -> SplitResult<BoundingBox> {
        BoundingBox::new(&raw.min, &raw.max)
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BoundingBox({:?}, {:?})", self.min.as_slice(), self.max.as_slice())
    }
}

impl BoundingBox {
    /// Creates a bounding box from its lower and upper corners.
    ///
    /// # Errors
    ///
    /// Returns [`SplitError::DimensionalityMismatch`] when the corners have
    /// different lengths, and [`SplitError::InvalidSplitState`] when a lower
    /// bound exceeds its upper bound or is `NaN`.
    pub fn new(min: &[f64], max: &[f64]) -> SplitResult<BoundingBox> {
        if min.len() != max.len() {
            return Err(SplitError::DimensionalityMismatch {
                expected: min.len(),
                found: max.len(),
                index: 0,
            });
        }
        // `!(lo <= hi)` also rejects NaN
        if let Some(d) = (0..min.len()).find(|&d| !(min[d] <= max[d])) {
            return Err(SplitError::InvalidSplitState(format!(
                "lower bound {} exceeds upper bound {} in dimension {}",
                min[d], max[d], d
            )));
        }
        Ok(BoundingBox {
            min: Coords::from_slice(min),
            max: Coords::from_slice(max),
        })
    }

    /// Creates a two-dimensional bounding box.
    pub fn new_2d(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> BoundingBox {
        debug_assert!(min_x <= max_x && min_y <= max_y, "inverted bounding box");
        BoundingBox {
            min: smallvec::smallvec![min_x, min_y],
            max: smallvec::smallvec![max_x, max_y],
        }
    }

    /// Creates a zero-extent box at `point`.
    pub fn from_point(point: &[f64]) -> BoundingBox {
        BoundingBox {
            min: Coords::from_slice(point),
            max: Coords::from_slice(point),
        }
    }

    /// Creates a box with the same bounds as `other`.
    pub fn from_spatial<T: SpatialComparable + ?Sized>(other: &T) -> BoundingBox {
        let dim = other.dimensionality();
        BoundingBox {
            min: (0..dim).map(|d| other.min(d)).collect(),
            max: (0..dim).map(|d| other.max(d)).collect(),
        }
    }

    /// Grows this box so that it also covers `other`.
    pub fn extend<T: SpatialComparable + ?Sized>(&mut self, other: &T) {
        debug_assert_eq!(
            self.dimensionality(),
            other.dimensionality(),
            "cannot extend a box with an object of another dimensionality"
        );
        for d in 0..self.min.len() {
            let lo = other.min(d);
            let hi = other.max(d);
            if lo < self.min[d] {
                self.min[d] = lo;
            }
            if hi > self.max[d] {
                self.max[d] = hi;
            }
        }
    }

    /// Returns the lower corner.
    pub fn min_corner(&self) -> &[f64] {
        &self.min
    }

    /// Returns the upper corner.
    pub fn max_corner(&self) -> &[f64] {
        &self.max
    }

    /// Returns the extent in dimension `d`.
    pub fn extent(&self, d: usize) -> f64 {
        self.max[d] - self.min[d]
    }

    /// Returns the center point of the box.
    pub fn center(&self) -> Vec<f64> {
        self.min
            .iter()
            .zip(self.max.iter())
            .map(|(lo, hi)| (lo + hi) / 2.0)
            .collect()
    }

    /// Checks if this bounding box is a point (zero extent everywhere).
    pub fn is_point(&self) -> bool {
        self.min == self.max
    }
}

impl SpatialComparable for BoundingBox {
    fn dimensionality(&self) -> usize {
        self.min.len()
    }

    fn min(&self, d: usize) -> f64 {
        self.min[d]
    }

    fn max(&self, d: usize) -> f64 {
        self.max[d]
    }
}
