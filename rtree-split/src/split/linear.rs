use super::{check_preconditions, debug_check_assignment, prefer_second};
use crate::adapter::ArrayAdapter;
use crate::assignment::Assignment;
use crate::bounding_box::BoundingBox;
use crate::errors::SplitResult;
use crate::spatial::{self, SpatialComparable};
use crate::strategy::SplitStrategy;

/// Guttman's linear split.
///
/// Every axis nominates a seed pair: the entry with the highest lower bound
/// and the entry with the lowest upper bound. The pair of the axis with the
/// largest normalized separation `(lowest upper - highest lower) / extent`
/// wins. The remaining entries are then visited in index order and each one
/// joins the group whose box grows least.
///
/// Reference: A. Guttman, "R-Trees: A Dynamic Index Structure for Spatial
/// Searching", SIGMOD 1984.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RTreeLinearSplit;

/// Best and runner-up entry for one extreme of one axis.
#[derive(Debug, Clone, Copy)]
struct TopTwo {
    best: (usize, f64),
    second: Option<(usize, f64)>,
}

impl TopTwo {
    fn new(index: usize, value: f64) -> Self {
        TopTwo {
            best: (index, value),
            second: None,
        }
    }

    /// Offers a candidate; `better(a, b)` tells whether `a` beats `b`.
    fn offer(&mut self, index: usize, value: f64, better: impl Fn(f64, f64) -> bool) {
        if better(value, self.best.1) {
            self.second = Some(self.best);
            self.best = (index, value);
        } else if self.second.map_or(true, |(_, v)| better(value, v)) {
            self.second = Some((index, value));
        }
    }
}

impl RTreeLinearSplit {
    /// Picks the pair of seeds with the greatest normalized separation.
    fn pick_seeds<A, G>(entries: &A, getter: &G, num: usize, dim: usize) -> (usize, usize)
    where
        A: ?Sized,
        G: ArrayAdapter<A>,
    {
        let mut best_sep = f64::NEG_INFINITY;
        let mut seeds = (0, 1);

        for d in 0..dim {
            let first = getter.get(entries, 0);
            let mut lowest = first.min(d);
            let mut highest = first.max(d);
            let mut high_lower = TopTwo::new(0, first.min(d));
            let mut low_upper = TopTwo::new(0, first.max(d));

            for i in 1..num {
                let e = getter.get(entries, i);
                let (lo, hi) = (e.min(d), e.max(d));
                lowest = lowest.min(lo);
                highest = highest.max(hi);
                high_lower.offer(i, lo, |a, b| a > b);
                low_upper.offer(i, hi, |a, b| a < b);
            }

            let width = highest - lowest;
            if !(width > 0.0) {
                continue;
            }

            let (el, lo) = high_lower.best;
            let (eh, hi) = low_upper.best;
            let (pair, sep) = if el != eh {
                ((el, eh), (hi - lo) / width)
            } else {
                // The same entry holds both extremes; swap one role to the
                // runner-up, whichever pairing separates more. num >= 2, so
                // both runner-ups exist.
                let mut pair = (el, eh);
                let mut sep = f64::NEG_INFINITY;
                if let Some((el2, lo2)) = high_lower.second {
                    pair = (el2, eh);
                    sep = (hi - lo2) / width;
                }
                if let Some((eh2, hi2)) = low_upper.second {
                    let alt = (hi2 - lo) / width;
                    if alt > sep {
                        pair = (el, eh2);
                        sep = alt;
                    }
                }
                (pair, sep)
            };

            if sep > best_sep && pair.0 != pair.1 {
                best_sep = sep;
                seeds = pair;
            }
        }
        seeds
    }
}

impl SplitStrategy for RTreeLinearSplit {
    fn split<A, G>(&self, entries: &A, getter: &G, min_entries: usize) -> SplitResult<Assignment>
    where
        A: ?Sized,
        G: ArrayAdapter<A>,
    {
        let (num, dim) = check_preconditions(entries, getter, min_entries)?;
        let (w1, w2) = Self::pick_seeds(entries, getter, num, dim);
        log::debug!("Linear split of {} entries, seeds {} and {}", num, w1, w2);

        let mut assignment = Assignment::new(num);
        assignment.set(w2);
        let mut mbr1 = BoundingBox::from_spatial(getter.get(entries, w1));
        let mut mbr2 = BoundingBox::from_spatial(getter.get(entries, w2));
        let (mut num1, mut num2) = (1, 1);
        let mut remaining = num - 2;

        // Entries are distributed in the order they appear, not by preference
        for i in (0..num).filter(|&i| i != w1 && i != w2) {
            let e = getter.get(entries, i);
            let second = if num1 + remaining <= min_entries {
                false
            } else if num2 + remaining <= min_entries {
                true
            } else {
                let vol1 = spatial::volume(&mbr1);
                let vol2 = spatial::volume(&mbr2);
                let inc1 = spatial::volume_union(&mbr1, e) - vol1;
                let inc2 = spatial::volume_union(&mbr2, e) - vol2;
                prefer_second(inc1, inc2, vol1, vol2, num1, num2)
            };

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

        debug_check_assignment(&assignment, num, min_entries);
        Ok(assignment)
    }

    fn name(&self) -> &'static str {
        "linear"
    }
}
