use rtree_split::{SliceAdapter, SplitStrategy, SplitStrategyKind};
use rtree_split_int_test::test_util::{
    check_split, create_clustered_context, create_test_context, run_test, TestContext,
};

#[test]
fn test_min_fill_on_random_nodes() {
    for seed in 0..40 {
        for dim in [1, 2, 3, 5] {
            run_test(
                || create_test_context(seed, 11 + seed as usize, dim),
                |ctx| {
                    for kind in SplitStrategyKind::ALL {
                        ctx.split_checked(kind)?;
                    }
                    Ok(())
                },
            )
        }
    }
}

#[test]
fn test_tightest_min_fill() {
    // min_entries = num / 2 leaves no freedom in the group sizes
    for seed in 0..20 {
        run_test(
            || create_test_context(seed, 20, 2),
            |ctx| {
                for kind in SplitStrategyKind::ALL {
                    let assignment = kind.split(ctx.entries(), &SliceAdapter, 10)?;
                    check_split(&assignment, ctx.entries(), 10)?;
                    assert_eq!(assignment.count_first(), 10, "{}", kind);
                }
                Ok(())
            },
        )
    }
}

#[test]
fn test_unbalanced_clusters_are_filled_up() {
    // Two far apart clusters of 3 and 12 entries; the small cluster cannot
    // form a node on its own with a minimum of 6.
    for seed in 0..10 {
        run_test(
            || {
                let big = create_clustered_context(seed, 1, 12, 2)?;
                let small = create_clustered_context(seed + 100, 2, 3, 2)?;
                let mut entries = big.entries().to_vec();
                entries.extend(small.entries().iter().skip(1).step_by(2).cloned());
                Ok(TestContext::new(seed, entries, 6))
            },
            |ctx| {
                for kind in SplitStrategyKind::ALL {
                    ctx.split_checked(kind)?;
                }
                Ok(())
            },
        )
    }
}
