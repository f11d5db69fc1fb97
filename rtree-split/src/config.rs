//! Split settings a tree binds to once and reuses for every overflow.

use crate::adapter::ArrayAdapter;
use crate::assignment::Assignment;
use crate::errors::{SplitError, SplitResult};
use crate::strategy::{SplitStrategy, SplitStrategyKind};
use serde::{Deserialize, Serialize};

/// Minimum fill used by [`SplitSettings::default`], the R*-tree recommendation.
pub const DEFAULT_MIN_FILL: f64 = 0.4;

/// Which strategy splits an overflowing node, and how full each resulting
/// node must be.
///
/// `min_fill` is the minimum fraction of the node capacity each side of a
/// split must receive. It must lie in `(0, 0.5]`; anything above one half
/// cannot be satisfied by both sides at once.
///
/// Settings deserialize from any serde format; missing fields take their
/// default values:
///
/// ```rust
/// use rtree_split::{SplitSettings, SplitStrategyKind};
///
/// let settings: SplitSettings = serde_json::from_str(r#"{"strategy": "quadratic"}"#).unwrap();
/// assert_eq!(settings.strategy, SplitStrategyKind::Quadratic);
/// assert_eq!(settings.min_entries(10), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitSettings {
    /// The split strategy.
    pub strategy: SplitStrategyKind,
    /// Minimum fraction of the capacity per node.
    pub min_fill: f64,
}

impl Default for SplitSettings {
    fn default() -> Self {
        SplitSettings {
            strategy: SplitStrategyKind::default(),
            min_fill: DEFAULT_MIN_FILL,
        }
    }
}

impl SplitSettings {
    /// Creates settings for `strategy` with the default minimum fill.
    #[inline]
    pub fn new(strategy: SplitStrategyKind) -> SplitSettings {
        SplitSettings {
            strategy,
            ..SplitSettings::default()
        }
    }

    /// Sets the minimum fill. Checked by [`SplitSettings::validate`].
    #[inline]
    pub fn with_min_fill(mut self, min_fill: f64) -> SplitSettings {
        self.min_fill = min_fill;
        self
    }

    /// Checks that `min_fill` lies in `(0, 0.5]`.
    ///
    /// # Errors
    ///
    /// Returns [`SplitError::InvalidSettings`] otherwise, `NaN` included.
    pub fn validate(&self) -> SplitResult<()> {
        if self.min_fill > 0.0 && self.min_fill <= 0.5 {
            Ok(())
        } else {
            log::error!("Split settings have min_fill {}", self.min_fill);
            Err(SplitError::InvalidSettings(format!(
                "min_fill must be in (0, 0.5], got {}",
                self.min_fill
            )))
        }
    }

    /// Returns the minimum number of entries per node for a node that holds
    /// at most `capacity` entries.
    ///
    /// This is `floor(capacity * min_fill)`, at least 1 and at most
    /// `(capacity + 1) / 2`, so that an overflowing node of `capacity + 1`
    /// entries can always be split.
    pub fn min_entries(&self, capacity: usize) -> usize {
        let wanted = (capacity as f64 * self.min_fill).floor() as usize;
        wanted.max(1).min((capacity + 1) / 2)
    }

    /// Splits an overflowing node with the configured strategy.
    ///
    /// The node is assumed to hold one entry more than its capacity, so the
    /// minimum is derived from `size - 1`.
    ///
    /// # Errors
    ///
    /// Returns [`SplitError::InvalidSettings`] for out-of-range settings, and
    /// otherwise whatever the strategy returns.
    pub fn split<A, G>(&self, entries: &A, getter: &G) -> SplitResult<Assignment>
    where
        A: ?Sized,
        G: ArrayAdapter<A>,
    {
        self.validate()?;
        let capacity = getter.size(entries).saturating_sub(1);
        let min_entries = self.min_entries(capacity);
        log::trace!(
            "Splitting with {} for capacity {}, min {}",
            self.strategy,
            capacity,
            min_entries
        );
        self.strategy.split(entries, getter, min_entries)
    }
}
