use super::{check_preconditions, dead_space_seeds, debug_check_assignment, sorted_by_bound, Bound};
use crate::adapter::ArrayAdapter;
use crate::assignment::Assignment;
use crate::bounding_box::BoundingBox;
use crate::errors::SplitResult;
use crate::spatial::{self, SpatialComparable};
use crate::strategy::SplitStrategy;

/// Greene's split.
///
/// Uses the quadratic seeds only to pick an axis: the one along which the
/// seeds are separated most relative to the node's extent. The entries are
/// then sorted along that axis and cut in half. With an odd number of
/// entries, the middle entry joins the half whose box grows less.
///
/// Reference: D. Greene, "An Implementation and Performance Analysis of
/// Spatial Data Access Methods", ICDE 1989.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GreeneSplit;

impl GreeneSplit {
    /// Returns the axis along which the two seeds are best separated.
    fn choose_axis<S1, S2>(seed1: &S1, seed2: &S2, total: &BoundingBox) -> usize
    where
        S1: SpatialComparable + ?Sized,
        S2: SpatialComparable + ?Sized,
    {
        let mut axis = 0;
        let mut best_sep = f64::NEG_INFINITY;
        let mut best_gap = f64::NEG_INFINITY;
        for d in 0..total.dimensionality() {
            let extent = total.extent(d);
            if !(extent > 0.0) {
                continue;
            }
            let gap = (seed2.min(d) - seed1.max(d)).max(seed1.min(d) - seed2.max(d));
            let sep = gap / extent;
            if sep > best_sep || (sep == best_sep && gap > best_gap) {
                axis = d;
                best_sep = sep;
                best_gap = gap;
            }
        }
        axis
    }
}

impl SplitStrategy for GreeneSplit {
    fn split<A, G>(&self, entries: &A, getter: &G, min_entries: usize) -> SplitResult<Assignment>
    where
        A: ?Sized,
        G: ArrayAdapter<A>,
    {
        let (num, _) = check_preconditions(entries, getter, min_entries)?;
        let half = num / 2;

        let (w1, w2, dead) = dead_space_seeds(entries, getter, num);
        if !(dead > 0.0) {
            log::warn!(
                "No seed pair of {} entries wastes any space, splitting in index order",
                num
            );
            let assignment = Assignment::from_fn(num, |i| i >= half);
            debug_check_assignment(&assignment, num, min_entries);
            return Ok(assignment);
        }

        let total = spatial::union_of(entries, getter)?;
        let axis = Self::choose_axis(getter.get(entries, w1), getter.get(entries, w2), &total);
        log::debug!(
            "Greene split of {} entries, seeds {} and {}, axis {}",
            num,
            w1,
            w2,
            axis
        );

        let order = sorted_by_bound(entries, getter, num, axis, Bound::Lower);
        let mut assignment = Assignment::new(num);
        for &i in &order[num - half..] {
            assignment.set(i);
        }

        if num % 2 == 1 {
            // The middle entry is the only one left to decide
            let middle = getter.get(entries, order[half]);
            let lower = group_bounds_of(entries, getter, &order[..half]);
            let upper = group_bounds_of(entries, getter, &order[half + 1..]);
            let inc_lower = spatial::enlargement(&lower, middle);
            let inc_upper = spatial::enlargement(&upper, middle);
            if !(inc_lower < inc_upper) {
                assignment.set(order[half]);
            }
        }

        debug_check_assignment(&assignment, num, min_entries);
        Ok(assignment)
    }

    fn name(&self) -> &'static str {
        "greene"
    }
}

/// Bounding box of the entries at `indices`, which must not be empty.
fn group_bounds_of<A, G>(entries: &A, getter: &G, indices: &[usize]) -> BoundingBox
where
    A: ?Sized,
    G: ArrayAdapter<A>,
{
    let mut mbr = BoundingBox::from_spatial(getter.get(entries, indices[0]));
    for &i in &indices[1..] {
        mbr.extend(getter.get(entries, i));
    }
    mbr
}
