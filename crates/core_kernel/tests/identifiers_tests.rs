//! Tests for strongly-typed identifiers

use std::collections::HashSet;
use std::str::FromStr;

use core_kernel::{ReviewId, ReviewedObjectId, ReviewerId};
use uuid::Uuid;

#[test]
fn test_identifiers_are_unique() {
    let ids: HashSet<_> = (0..100).map(|_| ReviewerId::new()).collect();
    assert_eq!(ids.len(), 100);
}

#[test]
fn test_display_includes_prefix() {
    assert!(ReviewerId::new().to_string().starts_with("RVR-"));
    assert!(ReviewedObjectId::new().to_string().starts_with("OBJ-"));
    assert!(ReviewId::new().to_string().starts_with("REV-"));
}

#[test]
fn test_from_str_round_trip() {
    let id = ReviewerId::new();
    let parsed = ReviewerId::from_str(&id.to_string()).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn test_from_str_accepts_bare_uuid() {
    let uuid = Uuid::new_v4();
    let parsed = ReviewId::from_str(&uuid.to_string()).unwrap();
    assert_eq!(Uuid::from(parsed), uuid);
}

#[test]
fn test_from_str_rejects_garbage() {
    assert!(ReviewedObjectId::from_str("not-a-uuid").is_err());
}

#[test]
fn test_uuid_conversions() {
    let uuid = Uuid::new_v4();
    let id = ReviewerId::from_uuid(uuid);
    assert_eq!(id.as_uuid(), &uuid);
    assert_eq!(Uuid::from(id), uuid);
}

#[test]
fn test_v7_ids_are_time_ordered() {
    let a = ReviewId::new_v7();
    let b = ReviewId::new_v7();
    assert!(a.as_uuid() <= b.as_uuid());
}

#[test]
fn test_serde_transparent() {
    let id = ReviewerId::new();
    let json = serde_json::to_string(&id).unwrap();
    // Serializes as the bare UUID string, no struct wrapper
    assert_eq!(json, format!("\"{}\"", id.as_uuid()));
    let back: ReviewerId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}
