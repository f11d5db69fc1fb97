use rtree_split::{
    spatial, BoundingBox, SliceAdapter, SpatialComparable, SplitStrategy, TopologicalSplitter,
};
use rtree_split_int_test::test_util::check_split;

/// Ten boxes spread along x in a narrow band along y. Neighbors overlap
/// along x, except for a gap between entries 4 and 5.
fn band_with_gap() -> Vec<BoundingBox> {
    (0..10)
        .map(|i| {
            let x = i as f64 * 10.0 + if i >= 5 { 5.0 } else { 0.0 };
            let y = ((i * 7) % 10) as f64 * 0.05;
            BoundingBox::new_2d(x, y, x + 12.0, y + 1.0)
        })
        .collect()
}

#[test]
fn test_spread_along_x_splits_along_x() {
    let boxes = band_with_gap();
    let assignment = TopologicalSplitter.split(&boxes, &SliceAdapter, 2).unwrap();
    check_split(&assignment, &boxes, 2).unwrap();

    // Split along x: one group lies entirely left of the other
    let (first, second) = assignment.group_bounds(&boxes, &SliceAdapter).unwrap();
    assert!(first.max(0) < second.min(0) || second.max(0) < first.min(0));
}

#[test]
fn test_split_offset_minimizes_overlap() {
    let boxes = band_with_gap();
    let assignment = TopologicalSplitter.split(&boxes, &SliceAdapter, 2).unwrap();
    assert_eq!(assignment.first_indices(), vec![0, 1, 2, 3, 4]);
    assert_eq!(assignment.second_indices(), vec![5, 6, 7, 8, 9]);

    let (first, second) = assignment.group_bounds(&boxes, &SliceAdapter).unwrap();
    assert_eq!(spatial::overlap(&first, &second), 0.0);

    // Every other offset along x overlaps
    for k in 2..=8 {
        if k == 5 {
            continue;
        }
        let left = spatial::union_of(&boxes[..k], &SliceAdapter).unwrap();
        let right = spatial::union_of(&boxes[k..], &SliceAdapter).unwrap();
        assert!(spatial::overlap(&left, &right) > 0.0, "offset {}", k);
    }
}

#[test]
fn test_transposed_band_splits_along_y() {
    let boxes: Vec<BoundingBox> = band_with_gap()
        .iter()
        .map(|b| BoundingBox::new_2d(b.min(1), b.min(0), b.max(1), b.max(0)))
        .collect();
    let assignment = TopologicalSplitter.split(&boxes, &SliceAdapter, 2).unwrap();
    assert_eq!(assignment.first_indices(), vec![0, 1, 2, 3, 4]);
}
