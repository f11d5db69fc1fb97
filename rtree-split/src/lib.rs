//! # R-Tree Split - Node Splitting Strategies for R-Trees
//!
//! When an R-tree node overflows, its entries have to be distributed over two
//! nodes. This crate decides *how*: given the entries of the overflowing node
//! and the minimum number of entries each resulting node must hold, a split
//! strategy returns an [`Assignment`] telling which entries move to the new
//! node.
//!
//! The crate does not own a tree. It reads the node's entries through an
//! [`ArrayAdapter`], never mutates them, and keeps all scratch state local to
//! one call, so one strategy value can be shared by every node of every tree.
//!
//! ## Strategies
//!
//! - [`RTreeLinearSplit`]: Guttman's linear split
//! - [`RTreeQuadraticSplit`]: Guttman's quadratic split
//! - [`GreeneSplit`]: Greene's split along the best separated axis
//! - [`AngTanLinearSplit`]: Ang and Tan's nearest-edge split
//! - [`TopologicalSplitter`]: the R*-tree split (the default)
//!
//! ## Quick Start
//!
//! ```rust
//! use rtree_split::{BoundingBox, SliceAdapter, SplitStrategy, TopologicalSplitter};
//!
//! let entries = vec![
//!     BoundingBox::new_2d(0.0, 0.0, 1.0, 1.0),
//!     BoundingBox::new_2d(1.0, 0.0, 2.0, 1.0),
//!     BoundingBox::new_2d(10.0, 0.0, 11.0, 1.0),
//!     BoundingBox::new_2d(11.0, 0.0, 12.0, 1.0),
//! ];
//!
//! let assignment = TopologicalSplitter.split(&entries, &SliceAdapter, 2)?;
//! assert_eq!(assignment.first_indices(), vec![0, 1]);
//! assert_eq!(assignment.second_indices(), vec![2, 3]);
//!
//! let (left, right) = assignment.partition(entries)?;
//! assert_eq!(left.len(), 2);
//! assert_eq!(right.len(), 2);
//! # Ok::<(), rtree_split::SplitError>(())
//! ```
//!
//! ## Configured Splits
//!
//! A tree usually picks its strategy from configuration and derives the
//! minimum fill from its node capacity:
//!
//! ```rust
//! use rtree_split::{BoundingBox, SliceAdapter, SplitSettings, SplitStrategyKind};
//!
//! let settings = SplitSettings::new("quadratic".parse::<SplitStrategyKind>()?);
//! let entries: Vec<BoundingBox> = (0..11)
//!     .map(|i| BoundingBox::from_point(&[i as f64, (i * i) as f64]))
//!     .collect();
//!
//! let assignment = settings.split(&entries, &SliceAdapter)?;
//! assert!(assignment.count_first() >= 4 && assignment.count_second() >= 4);
//! # Ok::<(), rtree_split::SplitError>(())
//! ```

// Geometry
pub mod bounding_box;
pub mod spatial;

// Split contract and result
pub mod adapter;
pub mod assignment;
pub mod errors;
pub mod strategy;

// Strategies and configuration
pub mod config;
pub mod split;

pub use adapter::{ArrayAdapter, MappedAdapter, SliceAdapter};
pub use assignment::Assignment;
pub use bounding_box::BoundingBox;
pub use config::{SplitSettings, DEFAULT_MIN_FILL};
pub use errors::{SplitError, SplitResult};
pub use spatial::SpatialComparable;
pub use split::{
    AngTanLinearSplit, GreeneSplit, RTreeLinearSplit, RTreeQuadraticSplit, TopologicalSplitter,
};
pub use strategy::{SplitStrategy, SplitStrategyKind};
