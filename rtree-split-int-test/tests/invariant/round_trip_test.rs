use rtree_split::{spatial, SliceAdapter, SplitStrategy, SplitStrategyKind};
use rtree_split_int_test::test_util::{create_clustered_context, create_test_context, run_test};

#[test]
fn test_group_boxes_merge_back_to_node_box() {
    for seed in 0..30 {
        run_test(
            || create_test_context(seed, 25, 2 + (seed % 3) as usize),
            |ctx| {
                let total = spatial::union_of(ctx.entries(), &SliceAdapter)?;
                for kind in SplitStrategyKind::ALL {
                    let assignment = kind.split(ctx.entries(), &SliceAdapter, ctx.min_entries())?;
                    let (first, second) = assignment.group_bounds(ctx.entries(), &SliceAdapter)?;
                    assert_eq!(spatial::union(&first, &second), total, "{}", kind);
                    assert!(spatial::contains(&total, &first));
                    assert!(spatial::contains(&total, &second));
                }
                Ok(())
            },
        )
    }
}

#[test]
fn test_far_clusters_are_not_mixed() {
    // Every strategy should keep two clusters 1000 units apart separate
    for seed in 0..15 {
        run_test(
            || create_clustered_context(seed, 2, 8, 2),
            |ctx| {
                for kind in SplitStrategyKind::ALL {
                    let assignment = kind.split(ctx.entries(), &SliceAdapter, ctx.min_entries())?;
                    let (first, second) = assignment.group_bounds(ctx.entries(), &SliceAdapter)?;
                    assert_eq!(spatial::overlap(&first, &second), 0.0, "{}", kind);
                    assert!(!spatial::intersects(&first, &second), "{}", kind);
                }
                Ok(())
            },
        )
    }
}
