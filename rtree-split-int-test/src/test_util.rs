use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rtree_split::{
    spatial, Assignment, BoundingBox, SliceAdapter, SplitError, SplitResult, SplitStrategy,
    SplitStrategyKind,
};

/// Runs a test against a freshly built context.
///
/// Failures report the seed the context was generated from, so a failing
/// random node can be rebuilt with [`create_test_context`].
pub fn run_test<B, T>(before: B, test: T)
where
    B: Fn() -> SplitResult<TestContext>,
    T: Fn(&TestContext) -> SplitResult<()>,
{
    let ctx = match before() {
        Ok(ctx) => ctx,
        Err(e) => panic!("Before run failed: {:?}", e),
    };
    log::debug!(
        "Running with seed {}, {} entries, min {}",
        ctx.seed(),
        ctx.num(),
        ctx.min_entries()
    );
    if let Err(e) = test(&ctx) {
        panic!(
            "Test failed for seed {} ({} entries, min {}): {:?}",
            ctx.seed(),
            ctx.num(),
            ctx.min_entries(),
            e
        );
    }
}

/// The entries of one overflowing node and the minimum fill to split it with.
#[derive(Debug, Clone)]
pub struct TestContext {
    seed: u64,
    entries: Vec<BoundingBox>,
    min_entries: usize,
}

impl TestContext {
    pub fn new(seed: u64, entries: Vec<BoundingBox>, min_entries: usize) -> Self {
        Self {
            seed,
            entries,
            min_entries,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn entries(&self) -> &[BoundingBox] {
        &self.entries
    }

    pub fn num(&self) -> usize {
        self.entries.len()
    }

    pub fn min_entries(&self) -> usize {
        self.min_entries
    }

    /// Splits the node with `kind` and checks the result.
    pub fn split_checked(&self, kind: SplitStrategyKind) -> SplitResult<Assignment> {
        let assignment = kind.split(self.entries(), &SliceAdapter, self.min_entries)?;
        check_split(&assignment, self.entries(), self.min_entries)?;
        Ok(assignment)
    }
}

/// Builds a node of `num` random boxes in `dim` dimensions, with the R*-tree
/// minimum fill of 40%.
pub fn create_test_context(seed: u64, num: usize, dim: usize) -> SplitResult<TestContext> {
    let mut rng = StdRng::seed_from_u64(seed);
    let entries = random_boxes(&mut rng, num, dim)?;
    let min_entries = (num * 2 / 5).max(1);
    Ok(TestContext::new(seed, entries, min_entries))
}

/// Builds a node of `clusters` tight, far apart groups of boxes.
pub fn create_clustered_context(
    seed: u64,
    clusters: usize,
    per_cluster: usize,
    dim: usize,
) -> SplitResult<TestContext> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut entries = Vec::with_capacity(clusters * per_cluster);
    for c in 0..clusters {
        let origin = c as f64 * 1000.0;
        for _ in 0..per_cluster {
            let min: Vec<f64> = (0..dim).map(|_| origin + rng.gen_range(0.0..10.0)).collect();
            let max: Vec<f64> = min.iter().map(|lo| lo + rng.gen_range(0.0..2.0)).collect();
            entries.push(BoundingBox::new(&min, &max)?);
        }
    }
    // Interleave the clusters so index order says nothing about position
    let mut shuffled = Vec::with_capacity(entries.len());
    for i in 0..per_cluster {
        for c in 0..clusters {
            shuffled.push(entries[c * per_cluster + i].clone());
        }
    }
    let min_entries = (shuffled.len() * 2 / 5).max(1);
    Ok(TestContext::new(seed, shuffled, min_entries))
}

/// Returns `num` random boxes with corners in `[0, 100)` and extents below 10.
pub fn random_boxes<R: Rng>(rng: &mut R, num: usize, dim: usize) -> SplitResult<Vec<BoundingBox>> {
    (0..num)
        .map(|_| {
            let min: Vec<f64> = (0..dim).map(|_| rng.gen_range(0.0..100.0)).collect();
            let max: Vec<f64> = min.iter().map(|lo| lo + rng.gen_range(0.0..10.0)).collect();
            BoundingBox::new(&min, &max)
        })
        .collect()
}

/// Returns `num` copies of the same point.
pub fn identical_points(num: usize, dim: usize) -> Vec<BoundingBox> {
    vec![BoundingBox::from_point(&vec![1.5; dim]); num]
}

/// Four unit boxes at the corners of a 10 by 10 square.
pub fn corner_boxes() -> Vec<BoundingBox> {
    vec![
        BoundingBox::new_2d(0.0, 0.0, 1.0, 1.0),
        BoundingBox::new_2d(0.0, 10.0, 1.0, 11.0),
        BoundingBox::new_2d(10.0, 0.0, 11.0, 1.0),
        BoundingBox::new_2d(10.0, 10.0, 11.0, 11.0),
    ]
}

/// Checks that `assignment` is a valid split of `entries`.
///
/// Every entry must have a side, both sides must hold at least `min_entries`
/// entries, and the union of the two group boxes must be the box of all
/// entries.
pub fn check_split(
    assignment: &Assignment,
    entries: &[BoundingBox],
    min_entries: usize,
) -> SplitResult<()> {
    if assignment.len() != entries.len() {
        return Err(SplitError::InvalidSplitState(format!(
            "assignment of {} for {} entries",
            assignment.len(),
            entries.len()
        )));
    }
    if assignment.count_first() + assignment.count_second() != entries.len() {
        return Err(SplitError::InvalidSplitState(
            "sides do not add up to the entry count".into(),
        ));
    }
    if assignment.count_first() < min_entries || assignment.count_second() < min_entries {
        return Err(SplitError::InvalidSplitState(format!(
            "split {}/{} is below the minimum of {}",
            assignment.count_first(),
            assignment.count_second(),
            min_entries
        )));
    }

    let (first, second) = assignment.group_bounds(entries, &SliceAdapter)?;
    let merged = spatial::union(&first, &second);
    let total = spatial::union_of(entries, &SliceAdapter)?;
    if merged != total {
        return Err(SplitError::InvalidSplitState(format!(
            "groups cover {} but the node covers {}",
            merged, total
        )));
    }
    Ok(())
}

/// Checks whether two assignments put the same entries together, regardless
/// of which group is called first.
pub fn same_grouping(a: &Assignment, b: &Assignment) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let same = a.iter().zip(b.iter()).all(|(x, y)| x == y);
    let mirrored = a.iter().zip(b.iter()).all(|(x, y)| x != y);
    same || mirrored
}
