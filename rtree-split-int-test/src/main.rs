use rtree_split::{SplitResult, SplitStrategy, SplitStrategyKind};
use rtree_split_int_test::test_util::create_test_context;
use std::time::Instant;

const NODES: u64 = 2_000;

fn main() -> SplitResult<()> {
    colog::init();
    println!("Starting split stress test...");

    for kind in SplitStrategyKind::ALL {
        let start = Instant::now();
        let mut imbalance = 0usize;
        for seed in 0..NODES {
            let num = 9 + (seed % 5) as usize * 20;
            let dim = 2 + (seed % 3) as usize;
            let ctx = create_test_context(seed, num, dim)?;
            let assignment = ctx.split_checked(kind)?;
            imbalance += assignment.count_first().abs_diff(assignment.count_second());
        }
        println!(
            "{:>12}: {} nodes in {:?}, mean imbalance {:.2}",
            kind.name(),
            NODES,
            start.elapsed(),
            imbalance as f64 / NODES as f64
        );
    }

    println!("Stress test completed");
    Ok(())
}
