use super::{check_preconditions, dead_space_seeds, debug_check_assignment, prefer_second};
use crate::adapter::ArrayAdapter;
use crate::assignment::Assignment;
use crate::bounding_box::BoundingBox;
use crate::errors::SplitResult;
use crate::spatial;
use crate::strategy::SplitStrategy;

/// Guttman's quadratic split.
///
/// The seeds are the pair that would waste the most volume if put in the same
/// node. Then, one entry at a time, the entry with the strongest preference
/// for one of the two groups is assigned to it, until every entry is placed
/// or one group needs all remaining entries to reach the minimum fill.
///
/// Reference: A. Guttman, "R-Trees: A Dynamic Index Structure for Spatial
/// Searching", SIGMOD 1984.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RTreeQuadraticSplit;

impl SplitStrategy for RTreeQuadraticSplit {
    fn split<A, G>(&self, entries: &A, getter: &G, min_entries: usize) -> SplitResult<Assignment>
    where
        A: ?Sized,
        G: ArrayAdapter<A>,
    {
        let (num, _) = check_preconditions(entries, getter, min_entries)?;
        let (w1, w2, dead) = dead_space_seeds(entries, getter, num);
        log::debug!(
            "Quadratic split of {} entries, seeds {} and {} (dead space {})",
            num,
            w1,
            w2,
            dead
        );

        let mut assignment = Assignment::new(num);
        let mut assigned = vec![false; num];
        assigned[w1] = true;
        assigned[w2] = true;
        assignment.set(w2);

        let mut mbr1 = BoundingBox::from_spatial(getter.get(entries, w1));
        let mut mbr2 = BoundingBox::from_spatial(getter.get(entries, w2));
        let (mut num1, mut num2) = (1, 1);
        let mut remaining = num - 2;

        while remaining > 0 {
            if num1 + remaining <= min_entries || num2 + remaining <= min_entries {
                // One group needs everything that is left
                let to_second = num2 + remaining <= min_entries;
                for i in 0..num {
                    if assigned[i] {
                        continue;
                    }
                    assigned[i] = true;
                    if to_second {
                        assignment.set(i);
                    }
                }
                if to_second {
                    num2 += remaining;
                } else {
                    num1 += remaining;
                }
                break;
            }

            // PickNext: the entry with the greatest preference for one group
            let vol1 = spatial::volume(&mbr1);
            let vol2 = spatial::volume(&mbr2);
            let mut best: Option<(usize, f64, bool)> = None;
            for i in (0..num).filter(|&i| !assigned[i]) {
                let e = getter.get(entries, i);
                let inc1 = spatial::volume_union(&mbr1, e) - vol1;
                let inc2 = spatial::volume_union(&mbr2, e) - vol2;
                let preference = (inc1 - inc2).abs();
                if best.map_or(true, |(_, p, _)| preference > p) {
                    let second = prefer_second(inc1, inc2, vol1 + inc1, vol2 + inc2, num1, num2);
                    best = Some((i, preference, second));
                }
            }

            let Some((i, _, second)) = best else {
                break;
            };
            let e = getter.get(entries, i);
            assigned[i] = true;
            if second {
                assignment.set(i);
                mbr2.extend(e);
                num2 += 1;
            } else {
                mbr1.extend(e);
                num1 += 1;
            }
            remaining -= 1;
        }

        log::trace!("Quadratic split result {}/{}", num1, num2);
        debug_check_assignment(&assignment, num, min_entries);
        Ok(assignment)
    }

    fn name(&self) -> &'static str {
        "quadratic"
    }
}
