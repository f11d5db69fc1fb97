//! Random access to the entries of an arbitrary container.
//!
//! The split strategies never see the tree's node type. They read "how many
//! entries" and "the i-th entry" through an [`ArrayAdapter`], so the same
//! strategy can split a plain slice of boxes, the child list of a directory
//! node, or the entry list of a leaf that pairs boxes with record ids.

use crate::spatial::SpatialComparable;
use std::marker::PhantomData;

/// Read-only, index-based view over a container of spatial entries.
pub trait ArrayAdapter<A: ?Sized> {
    /// The entry type handed to the split strategies.
    type Item: SpatialComparable + ?Sized;

    /// Returns the number of entries in `array`.
    fn size(&self, array: &A) -> usize;

    /// Returns the entry at `index`.
    ///
    /// Callers guarantee `index < self.size(array)`.
    fn get<'a>(&self, array: &'a A, index: usize) -> &'a Self::Item;
}

/// Adapter for slices whose elements are spatial objects themselves.
///
/// ```rust
/// use rtree_split::{ArrayAdapter, BoundingBox, SliceAdapter};
///
/// let boxes = vec![BoundingBox::from_point(&[0.0]), BoundingBox::from_point(&[1.0])];
/// assert_eq!(SliceAdapter.size(boxes.as_slice()), 2);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SliceAdapter;

impl<E: SpatialComparable> ArrayAdapter<[E]> for SliceAdapter {
    type Item = E;

    fn size(&self, array: &[E]) -> usize {
        array.len()
    }

    fn get<'a>(&self, array: &'a [E], index: usize) -> &'a E {
        &array[index]
    }
}

impl<E: SpatialComparable> ArrayAdapter<Vec<E>> for SliceAdapter {
    type Item = E;

    fn size(&self, array: &Vec<E>) -> usize {
        array.len()
    }

    fn get<'a>(&self, array: &'a Vec<E>, index: usize) -> &'a E {
        &array[index]
    }
}

/// Adapter for slices whose elements carry a spatial object, such as node
/// entries pairing a bounding box with a child page or record id.
///
/// ```rust
/// use rtree_split::{ArrayAdapter, BoundingBox, MappedAdapter};
///
/// struct LeafEntry {
///     bbox: BoundingBox,
///     id: u64,
/// }
///
/// let entries = vec![LeafEntry { bbox: BoundingBox::from_point(&[0.0, 0.0]), id: 7 }];
/// let adapter = MappedAdapter::new(|e: &LeafEntry| &e.bbox);
/// assert_eq!(adapter.size(entries.as_slice()), 1);
/// assert_eq!(entries[0].id, 7);
/// ```
pub struct MappedAdapter<T, E, F> {
    project: F,
    _marker: PhantomData<fn(&T) -> &E>,
}

impl<T, E, F> MappedAdapter<T, E, F>
where
    E: SpatialComparable,
    F: Fn(&T) -> &E,
{
    /// Creates an adapter that projects every element through `project`.
    pub fn new(project: F) -> Self {
        MappedAdapter {
            project,
            _marker: PhantomData,
        }
    }
}

impl<T, E, F: Clone> Clone for MappedAdapter<T, E, F> {
    fn clone(&self) -> Self {
        MappedAdapter {
            project: self.project.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T, E, F> std::fmt::Debug for MappedAdapter<T, E, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MappedAdapter").finish_non_exhaustive()
    }
}

impl<T, E, F> ArrayAdapter<[T]> for MappedAdapter<T, E, F>
where
    E: SpatialComparable,
    F: Fn(&T) -> &E,
{
    type Item = E;

    fn size(&self, array: &[T]) -> usize {
        array.len()
    }

    fn get<'a>(&self, array: &'a [T], index: usize) -> &'a E {
        (self.project)(&array[index])
    }
}

impl<T, E, F> ArrayAdapter<Vec<T>> for MappedAdapter<T, E, F>
where
    E: SpatialComparable,
    F: Fn(&T) -> &E,
{
    type Item = E;

    fn size(&self, array: &Vec<T>) -> usize {
        array.len()
    }

    fn get<'a>(&self, array: &'a Vec<T>, index: usize) -> &'a E {
        (self.project)(&array[index])
    }
}
