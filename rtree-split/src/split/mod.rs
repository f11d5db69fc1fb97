//! The node split strategies.
//!
//! Every strategy is a zero-sized type implementing
//! [`SplitStrategy`](crate::SplitStrategy):
//!
//! | Strategy | Seeds | Distribution | Cost |
//! |---|---|---|---|
//! | [`RTreeLinearSplit`] | greatest normalized separation | index order, least enlargement | `O(n * d)` |
//! | [`RTreeQuadraticSplit`] | greatest dead space | greatest preference first | `O(n^2 * d)` |
//! | [`GreeneSplit`] | greatest dead space | halves along the best separated axis | `O(n^2 * d)` |
//! | [`AngTanLinearSplit`] | none | nearest edge of the node box | `O(n * d)` |
//! | [`TopologicalSplitter`] | none | R*-tree margin then overlap | `O(d * n log n)` |
//!
//! The helpers below are shared between the strategies: precondition checks,
//! the seed search by dead space, and the enlargement tie-breaking chain.

mod ang_tan;
mod greene;
mod linear;
mod quadratic;
mod topological;

pub use ang_tan::AngTanLinearSplit;
pub use greene::GreeneSplit;
pub use linear::RTreeLinearSplit;
pub use quadratic::RTreeQuadraticSplit;
pub use topological::TopologicalSplitter;

use crate::adapter::ArrayAdapter;
use crate::assignment::Assignment;
use crate::errors::{SplitError, SplitResult};
use crate::spatial::{self, SpatialComparable};

/// Validates the split preconditions and returns `(num, dimensionality)`.
pub(crate) fn check_preconditions<A, G>(
    entries: &A,
    getter: &G,
    min_entries: usize,
) -> SplitResult<(usize, usize)>
where
    A: ?Sized,
    G: ArrayAdapter<A>,
{
    let num = getter.size(entries);
    if num < 2 {
        log::error!("Cannot split a node with {} entries", num);
        return Err(SplitError::TooFewEntries { num });
    }
    if min_entries == 0 || num < 2 * min_entries {
        log::error!(
            "Cannot split {} entries with a minimum of {} per node",
            num,
            min_entries
        );
        return Err(SplitError::InfeasibleMinEntries { num, min_entries });
    }

    let dim = getter.get(entries, 0).dimensionality();
    for index in 1..num {
        let found = getter.get(entries, index).dimensionality();
        if found != dim {
            log::error!(
                "Entry {} has dimensionality {}, expected {}",
                index,
                found,
                dim
            );
            return Err(SplitError::DimensionalityMismatch {
                expected: dim,
                found,
                index,
            });
        }
    }
    Ok((num, dim))
}

/// Asserts the postconditions of a split in debug builds.
pub(crate) fn debug_check_assignment(assignment: &Assignment, num: usize, min_entries: usize) {
    debug_assert_eq!(assignment.len(), num, "assignment must cover every entry");
    debug_assert!(
        assignment.count_first() >= min_entries && assignment.count_second() >= min_entries,
        "split {}/{} violates the minimum of {}",
        assignment.count_first(),
        assignment.count_second(),
        min_entries
    );
}

/// Decides whether an entry goes to the second group.
///
/// Prefers the smaller increase, then the smaller area, then the smaller
/// group; remaining ties go to the first group.
pub(crate) fn prefer_second(
    inc1: f64,
    inc2: f64,
    area1: f64,
    area2: f64,
    num1: usize,
    num2: usize,
) -> bool {
    if inc1 != inc2 {
        return inc2 < inc1;
    }
    if area1 != area2 {
        return area2 < area1;
    }
    num2 < num1
}

/// Finds the pair of entries wasting the most volume when covered by one box.
///
/// Returns the two indices (lower index first) and their dead space. The
/// first maximal pair in index order wins.
pub(crate) fn dead_space_seeds<A, G>(entries: &A, getter: &G, num: usize) -> (usize, usize, f64)
where
    A: ?Sized,
    G: ArrayAdapter<A>,
{
    let volumes: Vec<f64> = (0..num)
        .map(|i| spatial::volume(getter.get(entries, i)))
        .collect();

    let mut best = (0, 1, f64::NEG_INFINITY);
    for i in 0..num {
        let ei = getter.get(entries, i);
        for j in (i + 1)..num {
            let ej = getter.get(entries, j);
            let dead = spatial::volume_union(ei, ej) - volumes[i] - volumes[j];
            if dead > best.2 {
                best = (i, j, dead);
            }
        }
    }
    best
}

/// Which bound of an entry a sort order is keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Bound {
    Lower,
    Upper,
}

/// Returns the entry indices sorted ascending by the given bound in
/// dimension `d`; ties fall back to the other bound, then to the index.
pub(crate) fn sorted_by_bound<A, G>(entries: &A, getter: &G, num: usize, d: usize, bound: Bound) -> Vec<usize>
where
    A: ?Sized,
    G: ArrayAdapter<A>,
{
    let mut keyed: Vec<(f64, f64, usize)> = (0..num)
        .map(|i| {
            let e = getter.get(entries, i);
            match bound {
                Bound::Lower => (e.min(d), e.max(d), i),
                Bound::Upper => (e.max(d), e.min(d), i),
            }
        })
        .collect();
    keyed.sort_by(|a, b| {
        a.0.total_cmp(&b.0)
            .then_with(|| a.1.total_cmp(&b.1))
            .then_with(|| a.2.cmp(&b.2))
    });
    keyed.into_iter().map(|(_, _, i)| i).collect()
}
