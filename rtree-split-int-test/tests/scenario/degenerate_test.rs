use rand::rngs::StdRng;
use rand::SeedableRng;
use rtree_split::{
    AngTanLinearSplit, BoundingBox, GreeneSplit, SliceAdapter, SplitStrategy, SplitStrategyKind,
};
use rtree_split_int_test::test_util::{check_split, identical_points};

#[test]
fn test_greene_identical_points_split_in_half() {
    for num in 2..20 {
        let points = identical_points(num, 2);
        let assignment = GreeneSplit.split(&points, &SliceAdapter, num / 2).unwrap();
        check_split(&assignment, &points, num / 2).unwrap();
        assert!(assignment.count_first().abs_diff(assignment.count_second()) <= 1);
        // The fallback keeps index order
        assert_eq!(assignment.first_indices(), (0..num / 2).collect::<Vec<_>>());
    }
}

#[test]
fn test_ang_tan_identical_points_split_in_half() {
    for num in 2..20 {
        let points = identical_points(num, 3);
        let mut rng = StdRng::seed_from_u64(num as u64);
        let assignment = AngTanLinearSplit
            .split_with_rng(&points, &SliceAdapter, 1, &mut rng)
            .unwrap();
        check_split(&assignment, &points, 1).unwrap();
        assert!(assignment.count_first().abs_diff(assignment.count_second()) <= 1);
    }
}

#[test]
fn test_every_strategy_handles_identical_boxes() {
    let boxes = vec![BoundingBox::new_2d(1.0, 1.0, 3.0, 2.0); 12];
    for kind in SplitStrategyKind::ALL {
        for min_entries in [1, 4, 6] {
            let assignment = kind.split(&boxes, &SliceAdapter, min_entries).unwrap();
            check_split(&assignment, &boxes, min_entries).unwrap();
        }
    }
}

#[test]
fn test_every_strategy_handles_points() {
    let points: Vec<BoundingBox> = (0..10)
        .map(|i| BoundingBox::from_point(&[(i * 3 % 10) as f64, (i * 7 % 10) as f64]))
        .collect();
    for kind in SplitStrategyKind::ALL {
        let assignment = kind.split(&points, &SliceAdapter, 4).unwrap();
        check_split(&assignment, &points, 4).unwrap();
    }
}

#[test]
fn test_every_strategy_handles_one_dimension() {
    let segments: Vec<BoundingBox> = (0..9)
        .map(|i| BoundingBox::new(&[i as f64], &[i as f64 + 0.5]).unwrap())
        .collect();
    for kind in SplitStrategyKind::ALL {
        let assignment = kind.split(&segments, &SliceAdapter, 3).unwrap();
        check_split(&assignment, &segments, 3).unwrap();
    }
}
