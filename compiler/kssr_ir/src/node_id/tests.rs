use super::*;

#[test]
fn invalid_is_absent() {
    assert!(!NodeId::INVALID.is_present());
    assert_eq!(NodeId::INVALID.present(), None);
    assert_eq!(NodeId::default(), NodeId::INVALID);
}

#[test]
fn present_ids_round_trip_through_option() {
    let id = NodeId::new(12);
    assert!(id.is_present());
    assert_eq!(id.present(), Some(id));
    assert_eq!(NodeId::from(Some(id)), id);
    assert_eq!(NodeId::from(None), NodeId::INVALID);
}

#[test]
fn range_covers_len_ids() {
    let range = NodeRange::new(4, 3);
    assert_eq!(range.len(), 3);
    assert!(!range.is_empty());
    assert_eq!(range.as_range(), 4..7);
    assert!(NodeRange::EMPTY.is_empty());
}

#[test]
fn debug_formats() {
    assert_eq!(format!("{:?}", NodeId::new(3)), "NodeId(3)");
    assert_eq!(format!("{:?}", NodeId::INVALID), "NodeId::INVALID");
    assert_eq!(format!("{:?}", NodeRange::new(2, 2)), "NodeRange(2..4)");
}
