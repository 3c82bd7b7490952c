use proptest::prelude::*;

use super::*;

fn kitchen() -> Zone {
    Zone::new("Kitchen", "#ff0000", Some(ZoneId::from("kitchen")))
}

// =============================================================
// ZoneId
// =============================================================

#[test]
fn zone_id_generate_is_unique() {
    assert_ne!(ZoneId::generate(), ZoneId::generate());
}

#[test]
fn zone_id_generate_is_uuid_string() {
    let id = ZoneId::generate();
    assert!(Uuid::parse_str(id.as_str()).is_ok());
}

#[test]
fn zone_id_display_matches_inner() {
    assert_eq!(ZoneId::from("abc").to_string(), "abc");
}

#[test]
fn zone_id_serializes_transparently() {
    let json = serde_json::to_value(ZoneId::from("abc")).unwrap();
    assert_eq!(json, serde_json::json!("abc"));
}

// =============================================================
// Construction and accessors
// =============================================================

#[test]
fn zone_new_keeps_supplied_id() {
    let z = kitchen();
    assert_eq!(z.id().as_str(), "kitchen");
    assert_eq!(z.name(), "Kitchen");
    assert_eq!(z.color(), "#ff0000");
    assert!(z.is_empty());
}

#[test]
fn zone_new_generates_id_when_absent() {
    let a = Zone::new("A", "#000000", None);
    let b = Zone::new("A", "#000000", None);
    assert_ne!(a.id(), b.id());
}

#[test]
fn zone_rename_accepts_empty() {
    let mut z = kitchen();
    z.rename("");
    assert_eq!(z.name(), "");
}

// =============================================================
// toggle_tile
// =============================================================

#[test]
fn toggle_adds_missing_tile() {
    let mut z = kitchen();
    z.toggle_tile(Tile::new(0, 1));
    assert!(z.contains(Tile::new(0, 1)));
    assert_eq!(z.len(), 1);
}

#[test]
fn toggle_removes_present_tile() {
    let mut z = kitchen();
    z.toggle_tile(Tile::new(0, 1));
    z.toggle_tile(Tile::new(0, 1));
    assert!(!z.contains(Tile::new(0, 1)));
    assert!(z.is_empty());
}

#[test]
fn toggle_never_duplicates() {
    let mut z = kitchen();
    z.toggle_tile(Tile::new(2, 2));
    z.toggle_tile(Tile::new(2, 3));
    z.toggle_tile(Tile::new(2, 2));
    z.toggle_tile(Tile::new(2, 2));
    assert_eq!(z.len(), 2);
}

// =============================================================
// Serde
// =============================================================

#[test]
fn zone_json_shape() {
    let mut z = kitchen();
    z.toggle_tile(Tile::new(0, 1));
    let json = serde_json::to_value(&z).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "id": "kitchen",
            "name": "Kitchen",
            "color": "#ff0000",
            "tiles": [{ "row": 0, "col": 1 }],
        })
    );
}

#[test]
fn zone_deserialize_without_tiles_is_empty() {
    let z: Zone = serde_json::from_str(r##"{"id":"x","name":"Hall","color":"#00ff00"}"##).unwrap();
    assert!(z.is_empty());
    assert_eq!(z.id().as_str(), "x");
}

proptest! {
    #[test]
    fn toggle_twice_restores_tile_set(
        seed in proptest::collection::vec((-20i64..20, -20i64..20), 0..30),
        row in -20i64..20,
        col in -20i64..20,
    ) {
        let mut z = Zone::new("Z", "#123456", None);
        for (r, c) in seed {
            z.toggle_tile(Tile::new(r, c));
        }
        let before = z.tiles().clone();
        z.toggle_tile(Tile::new(row, col));
        z.toggle_tile(Tile::new(row, col));
        prop_assert_eq!(z.tiles(), &before);
    }
}
