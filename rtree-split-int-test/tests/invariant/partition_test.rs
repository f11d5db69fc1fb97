use rtree_split::{SliceAdapter, SplitStrategy, SplitStrategyKind};
use rtree_split_int_test::test_util::{create_test_context, run_test};

#[test]
fn test_every_entry_has_exactly_one_side() {
    for seed in 0..50 {
        run_test(
            || create_test_context(seed, 33, 2),
            |ctx| {
                for kind in SplitStrategyKind::ALL {
                    let assignment = kind.split(ctx.entries(), &SliceAdapter, ctx.min_entries())?;
                    assert_eq!(assignment.len(), ctx.num());

                    let mut first = assignment.first_indices();
                    first.extend(assignment.second_indices());
                    first.sort_unstable();
                    assert_eq!(first, (0..ctx.num()).collect::<Vec<_>>(), "{}", kind);
                }
                Ok(())
            },
        )
    }
}

#[test]
fn test_partition_moves_entries_to_their_side() {
    run_test(
        || create_test_context(3, 21, 3),
        |ctx| {
            for kind in SplitStrategyKind::ALL {
                let assignment = kind.split(ctx.entries(), &SliceAdapter, ctx.min_entries())?;
                let (first, second) = assignment.partition(ctx.entries().to_vec())?;
                assert_eq!(first.len(), assignment.count_first());
                assert_eq!(second.len(), assignment.count_second());
                for (i, entry) in assignment.second_indices().into_iter().zip(&second) {
                    assert_eq!(&ctx.entries()[i], entry);
                }
                for (i, entry) in assignment.first_indices().into_iter().zip(&first) {
                    assert_eq!(&ctx.entries()[i], entry);
                }
            }
            Ok(())
        },
    )
}

#[test]
fn test_minimal_node_of_two() {
    run_test(
        || create_test_context(11, 2, 2),
        |ctx| {
            for kind in SplitStrategyKind::ALL {
                let assignment = ctx.split_checked(kind)?;
                assert_eq!(assignment.count_first(), 1);
                assert_eq!(assignment.count_second(), 1);
            }
            Ok(())
        },
    )
}
