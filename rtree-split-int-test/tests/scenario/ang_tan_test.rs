use rtree_split::{AngTanLinearSplit, BoundingBox, SliceAdapter, SplitStrategy};
use rtree_split_int_test::test_util::check_split;

#[test]
fn test_identical_y_extent_is_rejected() {
    // All entries span y in [2, 5]; along y every entry is nearest the lower
    // edge, so only x can split the node.
    let boxes: Vec<BoundingBox> = [0.0, 9.0, 1.0, 8.0, 2.0, 7.0, 3.0, 10.0]
        .iter()
        .map(|&x| BoundingBox::new_2d(x, 2.0, x + 1.0, 5.0))
        .collect();
    let assignment = AngTanLinearSplit.split(&boxes, &SliceAdapter, 2).unwrap();
    check_split(&assignment, &boxes, 2).unwrap();
    assert_eq!(assignment.first_indices(), vec![0, 2, 4, 6]);
    assert_eq!(assignment.second_indices(), vec![1, 3, 5, 7]);
}

#[test]
fn test_only_varying_axis_wins_in_three_dimensions() {
    let boxes: Vec<BoundingBox> = (0..6)
        .map(|i| {
            let z = if i < 3 { i as f64 } else { 20.0 + i as f64 };
            BoundingBox::new(&[0.0, -1.0, z], &[4.0, 1.0, z + 1.0]).unwrap()
        })
        .collect();
    let assignment = AngTanLinearSplit.split(&boxes, &SliceAdapter, 2).unwrap();
    assert_eq!(assignment.second_indices(), vec![3, 4, 5]);
}

#[test]
fn test_short_side_is_topped_up_deterministically() {
    // Along x only the last entry is near the upper edge, one short of the
    // minimum of 3; y puts every entry on one side. The two entries nearest
    // the middle of x join it.
    let boxes: Vec<BoundingBox> = [0.0, 0.5, 1.0, 1.5, 2.0, 20.0]
        .iter()
        .map(|&x| BoundingBox::new_2d(x, 0.0, x + 1.0, 1.0))
        .collect();
    let assignment = AngTanLinearSplit.split(&boxes, &SliceAdapter, 3).unwrap();
    check_split(&assignment, &boxes, 3).unwrap();
    assert_eq!(assignment.second_indices(), vec![3, 4, 5]);
    for _ in 0..20 {
        assert_eq!(AngTanLinearSplit.split(&boxes, &SliceAdapter, 3).unwrap(), assignment);
    }
}
