use rtree_split::{
    ArrayAdapter, BoundingBox, MappedAdapter, SliceAdapter, SplitSettings, SplitStrategy,
    SplitStrategyKind,
};
use rtree_split_int_test::test_util::create_test_context;

/// A leaf entry the way a tree stores it: a box and the id of a record.
#[derive(Debug, Clone, PartialEq)]
struct LeafEntry {
    bbox: BoundingBox,
    record_id: u64,
}

fn leaf_entries(boxes: &[BoundingBox]) -> Vec<LeafEntry> {
    boxes
        .iter()
        .enumerate()
        .map(|(i, bbox)| LeafEntry {
            bbox: bbox.clone(),
            record_id: 1000 + i as u64,
        })
        .collect()
}

#[test]
fn test_mapped_adapter_matches_slice_adapter() {
    let ctx = create_test_context(5, 30, 2).unwrap();
    let leaves = leaf_entries(ctx.entries());
    let adapter = MappedAdapter::new(|e: &LeafEntry| &e.bbox);

    assert_eq!(adapter.size(&leaves), 30);
    assert_eq!(adapter.get(&leaves, 4), &ctx.entries()[4]);

    for kind in SplitStrategyKind::ALL
        .into_iter()
        .filter(|kind| kind.is_deterministic())
    {
        let mapped = kind.split(&leaves, &adapter, ctx.min_entries()).unwrap();
        let plain = kind.split(ctx.entries(), &SliceAdapter, ctx.min_entries()).unwrap();
        assert_eq!(mapped, plain, "{}", kind);
    }
}

#[test]
fn test_partition_keeps_record_ids() {
    let ctx = create_test_context(8, 16, 2).unwrap();
    let leaves = leaf_entries(ctx.entries());
    let adapter = MappedAdapter::new(|e: &LeafEntry| &e.bbox);

    let assignment = SplitSettings::default().split(&leaves, &adapter).unwrap();
    let (first, second) = assignment.partition(leaves.clone()).unwrap();

    let mut ids: Vec<u64> = first.iter().chain(&second).map(|e| e.record_id).collect();
    ids.sort_unstable();
    assert_eq!(ids, (1000..1016).collect::<Vec<_>>());

    for entry in &second {
        assert!(assignment.get((entry.record_id - 1000) as usize));
    }
}

#[test]
fn test_group_bounds_through_mapped_adapter() {
    let ctx = create_test_context(9, 12, 3).unwrap();
    let leaves = leaf_entries(ctx.entries());
    let adapter = MappedAdapter::new(|e: &LeafEntry| &e.bbox);

    let assignment = SplitStrategyKind::Greene
        .split(&leaves, &adapter, ctx.min_entries())
        .unwrap();
    assert_eq!(
        assignment.group_bounds(&leaves, &adapter).unwrap(),
        assignment
            .group_bounds(ctx.entries(), &SliceAdapter)
            .unwrap()
    );
}

#[test]
fn test_slice_of_a_larger_buffer() {
    // A node may live in a reused buffer; only the filled prefix is split
    let ctx = create_test_context(2, 20, 2).unwrap();
    let node = &ctx.entries()[..10];
    let assignment = SplitStrategyKind::Topological
        .split(node, &SliceAdapter, 4)
        .unwrap();
    assert_eq!(assignment.len(), 10);
}
