use super::{check_preconditions, debug_check_assignment};
use crate::adapter::ArrayAdapter;
use crate::assignment::Assignment;
use crate::bounding_box::BoundingBox;
use crate::errors::SplitResult;
use crate::spatial::{self, SpatialComparable};
use crate::strategy::SplitStrategy;
use rand::seq::SliceRandom;
use rand::Rng;

/// Ang and Tan's linear split.
///
/// Every axis proposes a partition: each entry goes to the side of the node
/// box whose edge it is closer to. The most balanced proposal wins, with ties
/// broken by the overlap of the two resulting boxes and then by the extent of
/// the axis.
///
/// Axes where every entry is nearest the same edge are rejected. If the
/// winning proposal leaves a side below `min_entries`, the entries closest to
/// the middle of the axis move over until it does not.
///
/// If every axis is rejected, which happens when all entries are
/// geometrically identical, the entries are split in half at random. That
/// fallback is the only nondeterministic path of the crate; use
/// [`AngTanLinearSplit::split_with_rng`] to control it.
///
/// Reference: C. H. Ang and T. C. Tan, "New Linear Node Splitting Algorithm
/// for R-trees", SSD 1997.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AngTanLinearSplit;

/// A surviving per-axis proposal.
#[derive(Debug)]
struct Candidate {
    axis: usize,
    assignment: Assignment,
    imbalance: usize,
    overlap: f64,
    extent: f64,
}

impl Candidate {
    fn beats(&self, other: &Candidate) -> bool {
        if self.imbalance != other.imbalance {
            return self.imbalance < other.imbalance;
        }
        if self.overlap != other.overlap {
            return self.overlap < other.overlap;
        }
        self.extent < other.extent
    }
}

impl AngTanLinearSplit {
    /// Splits like [`SplitStrategy::split`], drawing the random fallback from
    /// `rng`.
    pub fn split_with_rng<A, G, R>(
        &self,
        entries: &A,
        getter: &G,
        min_entries: usize,
        rng: &mut R,
    ) -> SplitResult<Assignment>
    where
        A: ?Sized,
        G: ArrayAdapter<A>,
        R: Rng + ?Sized,
    {
        let (num, dim) = check_preconditions(entries, getter, min_entries)?;
        let total = spatial::union_of(entries, getter)?;

        let mut best: Option<Candidate> = None;
        for d in 0..dim {
            let assignment = Self::nearest_edge(entries, getter, num, d, &total);
            let count = assignment.count_second();
            if count == 0 || count == num {
                log::trace!("Axis {} rejected, all {} entries near one edge", d, num);
                continue;
            }

            let (first, second) = assignment.group_bounds(entries, getter)?;
            let candidate = Candidate {
                axis: d,
                imbalance: count.max(num - count),
                overlap: spatial::overlap(&first, &second),
                extent: total.extent(d),
                assignment,
            };
            if best.as_ref().map_or(true, |b| candidate.beats(b)) {
                best = Some(candidate);
            }
        }

        let assignment = match best {
            Some(candidate) => {
                log::debug!(
                    "Ang-Tan split of {} entries along axis {}, {}/{}",
                    num,
                    candidate.axis,
                    candidate.assignment.count_first(),
                    candidate.assignment.count_second()
                );
                Self::top_up(entries, getter, candidate.assignment, candidate.axis, &total, min_entries)
            }
            None => {
                log::warn!(
                    "All {} entries are nearest one edge on every axis, splitting at random",
                    num
                );
                let mut permutation: Vec<usize> = (0..num).collect();
                permutation.shuffle(rng);
                let mut assignment = Assignment::new(num);
                for &i in &permutation[num / 2..] {
                    assignment.set(i);
                }
                assignment
            }
        };

        debug_check_assignment(&assignment, num, min_entries);
        Ok(assignment)
    }

    /// Assigns every entry to the edge of `total` it is closer to along `d`.
    /// Ties go to the lower edge.
    fn nearest_edge<A, G>(entries: &A, getter: &G, num: usize, d: usize, total: &BoundingBox) -> Assignment
    where
        A: ?Sized,
        G: ArrayAdapter<A>,
    {
        let (lo, hi) = (total.min(d), total.max(d));
        Assignment::from_fn(num, |i| {
            let e = getter.get(entries, i);
            hi - e.max(d) < e.min(d) - lo
        })
    }

    /// Moves entries from the larger side of `assignment` until both sides
    /// hold `min_entries`. Entries whose distances to the two edges of `total`
    /// along `d` are closest move first, ties in index order.
    fn top_up<A, G>(
        entries: &A,
        getter: &G,
        mut assignment: Assignment,
        d: usize,
        total: &BoundingBox,
        min_entries: usize,
    ) -> Assignment
    where
        A: ?Sized,
        G: ArrayAdapter<A>,
    {
        let num = assignment.len();
        let second = assignment.count_second();
        let (missing, to_second) = if second < min_entries {
            (min_entries - second, true)
        } else if num - second < min_entries {
            (min_entries - (num - second), false)
        } else {
            return assignment;
        };

        let (lo, hi) = (total.min(d), total.max(d));
        let mut movable: Vec<(usize, f64)> = (0..num)
            .filter(|&i| assignment.get(i) != to_second)
            .map(|i| {
                let e = getter.get(entries, i);
                (i, ((e.min(d) - lo) - (hi - e.max(d))).abs())
            })
            .collect();
        movable.sort_by(|a, b| a.1.total_cmp(&b.1));

        log::debug!(
            "Moving {} entries along axis {} to reach {} per side",
            missing,
            d,
            min_entries
        );
        for &(i, _) in movable.iter().take(missing) {
            if to_second {
                assignment.set(i);
            } else {
                assignment.clear(i);
            }
        }
        assignment
    }
}

impl SplitStrategy for AngTanLinearSplit {
    fn split<A, G>(&self, entries: &A, getter: &G, min_entries: usize) -> SplitResult<Assignment>
    where
        A: ?Sized,
        G: ArrayAdapter<A>,
    {
        self.split_with_rng(entries, getter, min_entries, &mut rand::thread_rng())
    }

    fn name(&self) -> &'static str {
        "ang-tan"
    }
}
