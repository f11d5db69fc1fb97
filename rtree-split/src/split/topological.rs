use super::{check_preconditions, debug_check_assignment, sorted_by_bound, Bound};
use crate::adapter::ArrayAdapter;
use crate::assignment::Assignment;
use crate::bounding_box::BoundingBox;
use crate::errors::SplitResult;
use crate::spatial;
use crate::strategy::SplitStrategy;

/// The R*-tree topological split.
///
/// First the split axis is chosen: for every axis the entries are sorted by
/// their lower and by their upper bound, and the margins of all valid
/// distributions are summed up. The axis with the smallest sum wins.
///
/// Along that axis, the distribution with the least overlap between the two
/// groups is chosen, with ties broken by the smaller total volume.
///
/// Reference: N. Beckmann, H.-P. Kriegel, R. Schneider, B. Seeger, "The
/// R*-tree: An Efficient and Robust Access Method for Points and
/// Rectangles", SIGMOD 1990.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TopologicalSplitter;

/// Bounding boxes of every prefix and suffix of one sort order.
///
/// `prefix[i]` covers `order[..=i]`, `suffix[i]` covers `order[i..]`.
struct Sweep {
    order: Vec<usize>,
    prefix: Vec<BoundingBox>,
    suffix: Vec<BoundingBox>,
}

impl Sweep {
    fn new<A, G>(entries: &A, getter: &G, order: Vec<usize>) -> Sweep
    where
        A: ?Sized,
        G: ArrayAdapter<A>,
    {
        let prefix = running_bounds(entries, getter, order.iter().copied());
        let mut suffix = running_bounds(entries, getter, order.iter().rev().copied());
        suffix.reverse();
        Sweep {
            order,
            prefix,
            suffix,
        }
    }

    /// Boxes of the two groups when the first `k` entries go left.
    fn groups(&self, k: usize) -> (&BoundingBox, &BoundingBox) {
        (&self.prefix[k - 1], &self.suffix[k])
    }

    /// Sum of the margins of every distribution with at least `min_entries`
    /// on each side.
    fn margin_sum(&self, min_entries: usize) -> f64 {
        let num = self.order.len();
        (min_entries..=num - min_entries)
            .map(|k| {
                let (left, right) = self.groups(k);
                spatial::perimeter(left) + spatial::perimeter(right)
            })
            .sum()
    }
}

fn running_bounds<A, G>(entries: &A, getter: &G, indices: impl Iterator<Item = usize>) -> Vec<BoundingBox>
where
    A: ?Sized,
    G: ArrayAdapter<A>,
{
    let mut boxes: Vec<BoundingBox> = Vec::new();
    for i in indices {
        let entry = getter.get(entries, i);
        let next = match boxes.last() {
            Some(last) => {
                let mut mbr = last.clone();
                mbr.extend(entry);
                mbr
            }
            None => BoundingBox::from_spatial(entry),
        };
        boxes.push(next);
    }
    boxes
}

impl TopologicalSplitter {
    fn sweeps<A, G>(entries: &A, getter: &G, num: usize, d: usize) -> [Sweep; 2]
    where
        A: ?Sized,
        G: ArrayAdapter<A>,
    {
        [Bound::Lower, Bound::Upper]
            .map(|bound| Sweep::new(entries, getter, sorted_by_bound(entries, getter, num, d, bound)))
    }

    /// Returns the axis with the smallest margin sum; the first one on ties.
    fn choose_axis<A, G>(entries: &A, getter: &G, num: usize, dim: usize, min_entries: usize) -> usize
    where
        A: ?Sized,
        G: ArrayAdapter<A>,
    {
        let mut axis = 0;
        let mut best = f64::INFINITY;
        for d in 0..dim {
            let margin: f64 = Self::sweeps(entries, getter, num, d)
                .iter()
                .map(|sweep| sweep.margin_sum(min_entries))
                .sum();
            log::trace!("Axis {} has margin sum {}", d, margin);
            if margin < best {
                axis = d;
                best = margin;
            }
        }
        axis
    }

    /// Returns the winning sort order along `axis` and the size of its left
    /// group.
    fn choose_split_point<A, G>(
        entries: &A,
        getter: &G,
        num: usize,
        axis: usize,
        min_entries: usize,
    ) -> (Vec<usize>, usize)
    where
        A: ?Sized,
        G: ArrayAdapter<A>,
    {
        // (sweep, k, overlap, volume)
        let mut best: Option<(usize, usize, f64, f64)> = None;
        let sweeps = Self::sweeps(entries, getter, num, axis);
        for (s, sweep) in sweeps.iter().enumerate() {
            for k in min_entries..=num - min_entries {
                let (left, right) = sweep.groups(k);
                let overlap = spatial::overlap(left, right);
                let volume = spatial::volume(left) + spatial::volume(right);
                let better = match best {
                    None => true,
                    Some((_, _, best_overlap, best_volume)) => {
                        overlap < best_overlap || (overlap == best_overlap && volume < best_volume)
                    }
                };
                if better {
                    best = Some((s, k, overlap, volume));
                }
            }
        }

        // num >= 2 * min_entries, so at least one distribution was visited
        let (s, k) = best.map_or((0, min_entries), |(s, k, _, _)| (s, k));
        let [lower, upper] = sweeps;
        let order = if s == 0 { lower.order } else { upper.order };
        (order, k)
    }
}

impl SplitStrategy for TopologicalSplitter {
    fn split<A, G>(&self, entries: &A, getter: &G, min_entries: usize) -> SplitResult<Assignment>
    where
        A: ?Sized,
        G: ArrayAdapter<A>,
    {
        let (num, dim) = check_preconditions(entries, getter, min_entries)?;
        let axis = Self::choose_axis(entries, getter, num, dim, min_entries);
        let (order, k) = Self::choose_split_point(entries, getter, num, axis, min_entries);
        log::debug!(
            "Topological split of {} entries along axis {} at {}",
            num,
            axis,
            k
        );

        let mut assignment = Assignment::new(num);
        for &i in &order[k..] {
            assignment.set(i);
        }
        debug_check_assignment(&assignment, num, min_entries);
        Ok(assignment)
    }

    fn name(&self) -> &'static str {
        "topological"
    }
}
