use std::collections::HashSet;

use super::*;

#[test]
fn tile_new_stores_indices() {
    let t = Tile::new(3, 7);
    assert_eq!(t.row(), 3);
    assert_eq!(t.col(), 7);
}

#[test]
fn tile_equality_requires_both_indices() {
    assert_eq!(Tile::new(1, 2), Tile::new(1, 2));
    assert_ne!(Tile::new(1, 2), Tile::new(2, 1));
    assert_ne!(Tile::new(1, 2), Tile::new(1, 3));
}

#[test]
fn tile_negative_indices_allowed() {
    let t = Tile::new(-1, -4);
    assert_eq!(t.row(), -1);
    assert_eq!(t.col(), -4);
}

#[test]
fn tile_hash_dedupes_equal_tiles() {
    let set: HashSet<Tile> = [Tile::new(0, 1), Tile::new(0, 1), Tile::new(1, 0)].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn tile_orders_row_major() {
    let mut tiles = vec![Tile::new(1, 0), Tile::new(0, 5), Tile::new(0, 1)];
    tiles.sort();
    assert_eq!(tiles, vec![Tile::new(0, 1), Tile::new(0, 5), Tile::new(1, 0)]);
}

#[test]
fn tile_serializes_as_row_col_object() {
    let json = serde_json::to_value(Tile::new(2, 9)).unwrap();
    assert_eq!(json, serde_json::json!({ "row": 2, "col": 9 }));
}
