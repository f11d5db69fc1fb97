//! The split strategy contract and the registry of available strategies.

use crate::adapter::ArrayAdapter;
use crate::assignment::Assignment;
use crate::errors::{SplitError, SplitResult};
use crate::split::{
    AngTanLinearSplit, GreeneSplit, RTreeLinearSplit, RTreeQuadraticSplit, TopologicalSplitter,
};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Partitions the entries of an overflowing node into two groups.
///
/// Implementations are stateless: calling `split` twice with the same input
/// yields the same assignment (the Ang-Tan random fallback being the one
/// documented exception), and a single value can be shared across threads.
pub trait SplitStrategy {
    /// Splits `entries` into two groups of at least `min_entries` each.
    ///
    /// Bit `i` of the returned [`Assignment`] is set when entry `i` belongs to
    /// the second group.
    ///
    /// # Errors
    ///
    /// - [`SplitError::TooFewEntries`] when fewer than two entries are given.
    /// - [`SplitError::InfeasibleMinEntries`] when `min_entries` is zero or
    ///   more than half of the entries.
    /// - [`SplitError::DimensionalityMismatch`] when entries disagree on
    ///   their dimensionality.
    /// - [`SplitError::InvalidSplitState`] when a candidate partition leaves a
    ///   side without entries where a bounding box is required.
    fn split<A, G>(&self, entries: &A, getter: &G, min_entries: usize) -> SplitResult<Assignment>
    where
        A: ?Sized,
        G: ArrayAdapter<A>;

    /// Returns the canonical name of the strategy.
    fn name(&self) -> &'static str;
}

/// The available split strategies, selectable by name.
///
/// `SplitStrategyKind` is what configuration binds to: it parses from and
/// prints to the strategy names, serializes in kebab-case, and dispatches
/// [`SplitStrategy::split`] to the matching zero-sized strategy.
///
/// ```rust
/// use rtree_split::{SplitStrategyKind, SplitStrategy};
///
/// let kind: SplitStrategyKind = "quadratic".parse().unwrap();
/// assert_eq!(kind, SplitStrategyKind::Quadratic);
/// assert_eq!(kind.name(), "quadratic");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SplitStrategyKind {
    /// Guttman's linear split.
    Linear,
    /// Guttman's quadratic split.
    Quadratic,
    /// Greene's split along the axis of greatest seed separation.
    Greene,
    /// Ang and Tan's linear split towards the nearest edge.
    AngTan,
    /// The R*-tree topological split.
    #[default]
    Topological,
}

impl SplitStrategyKind {
    /// All strategies, in declaration order.
    pub const ALL: [SplitStrategyKind; 5] = [
        SplitStrategyKind::Linear,
        SplitStrategyKind::Quadratic,
        SplitStrategyKind::Greene,
        SplitStrategyKind::AngTan,
        SplitStrategyKind::Topological,
    ];

    /// Returns `true` if the strategy always returns the same assignment for
    /// the same input.
    pub fn is_deterministic(&self) -> bool {
        !matches!(self, SplitStrategyKind::AngTan)
    }
}

impl SplitStrategy for SplitStrategyKind {
    fn split<A, G>(&self, entries: &A, getter: &G, min_entries: usize) -> SplitResult<Assignment>
    where
        A: ?Sized,
        G: ArrayAdapter<A>,
    {
        match self {
            SplitStrategyKind::Linear => RTreeLinearSplit.split(entries, getter, min_entries),
            SplitStrategyKind::Quadratic => RTreeQuadraticSplit.split(entries, getter, min_entries),
            SplitStrategyKind::Greene => GreeneSplit.split(entries, getter, min_entries),
            SplitStrategyKind::AngTan => AngTanLinearSplit.split(entries, getter, min_entries),
            SplitStrategyKind::Topological => {
                TopologicalSplitter.split(entries, getter, min_entries)
            }
        }
    }

    fn name(&self) -> &'static str {
        match self {
            SplitStrategyKind::Linear => RTreeLinearSplit.name(),
            SplitStrategyKind::Quadratic => RTreeQuadraticSplit.name(),
            SplitStrategyKind::Greene => GreeneSplit.name(),
            SplitStrategyKind::AngTan => AngTanLinearSplit.name(),
            SplitStrategyKind::Topological => TopologicalSplitter.name(),
        }
    }
}

impl Display for SplitStrategyKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SplitStrategyKind {
    type Err = SplitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "linear" | "rtreelinear" | "rtreelinearsplit" => Ok(SplitStrategyKind::Linear),
            "quadratic" | "rtreequadratic" | "rtreequadraticsplit" => {
                Ok(SplitStrategyKind::Quadratic)
            }
            "greene" | "greenesplit" => Ok(SplitStrategyKind::Greene),
            "angtan" | "angtanlinear" | "angtanlinearsplit" => Ok(SplitStrategyKind::AngTan),
            "topological" | "topologicalsplitter" | "rstar" => Ok(SplitStrategyKind::Topological),
            _ => {
                log::error!("Unknown split strategy {:?}", s);
                Err(SplitError::UnknownStrategy(s.to_string()))
            }
        }
    }
}
