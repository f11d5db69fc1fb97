//! The result of a split: one membership bit per entry.

use crate::adapter::ArrayAdapter;
use crate::bounding_box::BoundingBox;
use crate::errors::{SplitError, SplitResult};

const WORD_BITS: usize = u64::BITS as usize;

/// Assignment of `len` entries to the two nodes produced by a split.
///
/// Bit `i` set means entry `i` goes to the second node, clear means the
/// first node. The bitset is sized once and never grows, so every index in
/// `[0, len)` has exactly one membership.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Assignment {
    words: Vec<u64>,
    len: usize,
}

impl Assignment {
    /// Creates an assignment of `len` entries, all in the first node.
    pub fn new(len: usize) -> Assignment {
        Assignment {
            words: vec![0; len.div_ceil(WORD_BITS)],
            len,
        }
    }

    /// Creates an assignment from a per-entry predicate.
    pub fn from_fn(len: usize, mut second: impl FnMut(usize) -> bool) -> Assignment {
        let mut assignment = Assignment::new(len);
        for i in 0..len {
            if second(i) {
                assignment.set(i);
            }
        }
        assignment
    }

    /// Returns the number of entries covered.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when the assignment covers no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if entry `index` belongs to the second node.
    pub fn get(&self, index: usize) -> bool {
        debug_assert!(index < self.len, "index {} out of {}", index, self.len);
        self.words[index / WORD_BITS] & (1u64 << (index % WORD_BITS)) != 0
    }

    /// Moves entry `index` to the second node.
    pub fn set(&mut self, index: usize) {
        debug_assert!(index < self.len, "index {} out of {}", index, self.len);
        self.words[index / WORD_BITS] |= 1u64 << (index % WORD_BITS);
    }

    /// Moves entry `index` back to the first node.
    pub fn clear(&mut self, index: usize) {
        debug_assert!(index < self.len, "index {} out of {}", index, self.len);
        self.words[index / WORD_BITS] &= !(1u64 << (index % WORD_BITS));
    }

    /// Returns the number of entries in the second node.
    pub fn count_second(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns the number of entries in the first node.
    pub fn count_first(&self) -> usize {
        self.len - self.count_second()
    }

    /// Iterates over the membership of every entry, in index order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |i| self.get(i))
    }

    /// Returns the indices assigned to the first node.
    pub fn first_indices(&self) -> Vec<usize> {
        (0..self.len).filter(|&i| !self.get(i)).collect()
    }

    /// Returns the indices assigned to the second node.
    pub fn second_indices(&self) -> Vec<usize> {
        (0..self.len).filter(|&i| self.get(i)).collect()
    }

    /// Splits owned entries into the two groups, preserving relative order.
    ///
    /// # Errors
    ///
    /// Returns [`SplitError::InvalidSplitState`] if `items` does not have one
    /// element per assigned entry.
    pub fn partition<T>(&self, items: Vec<T>) -> SplitResult<(Vec<T>, Vec<T>)> {
        if items.len() != self.len {
            return Err(SplitError::InvalidSplitState(format!(
                "assignment covers {} entries but {} were given",
                self.len,
                items.len()
            )));
        }
        let mut first = Vec::with_capacity(self.count_first());
        let mut second = Vec::with_capacity(self.count_second());
        for (i, item) in items.into_iter().enumerate() {
            if self.get(i) {
                second.push(item);
            } else {
                first.push(item);
            }
        }
        Ok((first, second))
    }

    /// Computes the bounding boxes of both groups.
    ///
    /// # Errors
    ///
    /// Returns [`SplitError::InvalidSplitState`] if either group is empty, or
    /// if the container size does not match the assignment.
    pub fn group_bounds<A, G>(&self, entries: &A, getter: &G) -> SplitResult<(BoundingBox, BoundingBox)>
    where
        A: ?Sized,
        G: ArrayAdapter<A>,
    {
        let num = getter.size(entries);
        if num != self.len {
            return Err(SplitError::InvalidSplitState(format!(
                "assignment covers {} entries but the node holds {}",
                self.len, num
            )));
        }
        let first = self.group_bounds_of(entries, getter, false)?;
        let second = self.group_bounds_of(entries, getter, true)?;
        Ok((first, second))
    }

    fn group_bounds_of<A, G>(&self, entries: &A, getter: &G, side: bool) -> SplitResult<BoundingBox>
    where
        A: ?Sized,
        G: ArrayAdapter<A>,
    {
        let mut mbr: Option<BoundingBox> = None;
        for i in (0..self.len).filter(|&i| self.get(i) == side) {
            let entry = getter.get(entries, i);
            if let Some(mbr) = mbr.as_mut() {
                mbr.extend(entry);
                continue;
            }
            mbr = Some(BoundingBox::from_spatial(entry));
        }
        mbr.ok_or_else(|| {
            SplitError::InvalidSplitState(format!(
                "{} group of the split is empty",
                if side { "second" } else { "first" }
            ))
        })
    }
}

impl std::fmt::Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}
