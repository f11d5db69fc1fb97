use rtree_split::{BoundingBox, SliceAdapter, SplitError, SplitStrategy, SplitStrategyKind};

#[test]
fn test_too_few_entries() {
    let empty: Vec<BoundingBox> = Vec::new();
    let single = vec![BoundingBox::new_2d(0.0, 0.0, 1.0, 1.0)];
    for kind in SplitStrategyKind::ALL {
        assert_eq!(
            kind.split(&empty, &SliceAdapter, 1),
            Err(SplitError::TooFewEntries { num: 0 })
        );
        assert_eq!(
            kind.split(&single, &SliceAdapter, 1),
            Err(SplitError::TooFewEntries { num: 1 })
        );
    }
}

#[test]
fn test_infeasible_min_entries() {
    let boxes = vec![BoundingBox::new_2d(0.0, 0.0, 1.0, 1.0); 7];
    for kind in SplitStrategyKind::ALL {
        assert_eq!(
            kind.split(&boxes, &SliceAdapter, 4),
            Err(SplitError::InfeasibleMinEntries {
                num: 7,
                min_entries: 4
            })
        );
        assert_eq!(
            kind.split(&boxes, &SliceAdapter, 0),
            Err(SplitError::InfeasibleMinEntries {
                num: 7,
                min_entries: 0
            })
        );
    }
}

#[test]
fn test_dimensionality_mismatch() {
    let boxes = vec![
        BoundingBox::new_2d(0.0, 0.0, 1.0, 1.0),
        BoundingBox::new_2d(2.0, 2.0, 3.0, 3.0),
        BoundingBox::from_point(&[1.0, 2.0, 3.0]),
        BoundingBox::new_2d(4.0, 4.0, 5.0, 5.0),
    ];
    for kind in SplitStrategyKind::ALL {
        assert_eq!(
            kind.split(&boxes, &SliceAdapter, 1),
            Err(SplitError::DimensionalityMismatch {
                expected: 2,
                found: 3,
                index: 2
            })
        );
    }
}

#[test]
fn test_invalid_bounding_box() {
    assert!(matches!(
        BoundingBox::new(&[0.0, 5.0], &[1.0, 4.0]),
        Err(SplitError::InvalidSplitState(_))
    ));
    assert!(matches!(
        BoundingBox::new(&[f64::NAN], &[1.0]),
        Err(SplitError::InvalidSplitState(_))
    ));
    assert!(matches!(
        BoundingBox::new(&[0.0, 0.0], &[1.0]),
        Err(SplitError::DimensionalityMismatch { .. })
    ));
}

#[test]
fn test_unknown_strategy_name() {
    let err = "bulk-load".parse::<SplitStrategyKind>().unwrap_err();
    assert_eq!(err, SplitError::UnknownStrategy("bulk-load".into()));
}

#[test]
fn test_malformed_node_is_rejected_when_read() {
    let json = r#"[
        {"min": [0.0, 0.0], "max": [1.0]},
        {"min": [2.0, 2.0], "max": [3.0, 3.0]},
        {"min": [4.0, 4.0], "max": [5.0, 5.0]}
    ]"#;
    assert!(serde_json::from_str::<Vec<BoundingBox>>(json).is_err());

    let json = r#"[{"min": [5.0], "max": [1.0]}, {"min": [2.0], "max": [3.0]}]"#;
    assert!(serde_json::from_str::<Vec<BoundingBox>>(json).is_err());

    let json = r#"[{"min": [0.0], "max": [1.0]}, {"min": [2.0], "max": [3.0]}]"#;
    let boxes: Vec<BoundingBox> = serde_json::from_str(json).unwrap();
    for kind in SplitStrategyKind::ALL {
        let assignment = kind.split(&boxes, &SliceAdapter, 1).unwrap();
        assert_eq!(assignment.count_first(), 1);
        assert_eq!(assignment.count_second(), 1);
    }
}
