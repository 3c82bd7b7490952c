use zones::config::EditorConfig;
use zones::floorplan::FloorplanDoc;
use zones::tile::Tile;

use super::*;

fn editor() -> EditorCore {
    EditorCore::new(FloorplanDoc::new(), EditorConfig { color_seed: Some(2), ..EditorConfig::default() })
}

#[test]
fn parse_mixed_steps() {
    let steps = parse(
        r#"[
            { "type": "press", "x": 50, "y": 10 },
            { "type": "release", "x": 50, "y": 10 },
            { "type": "save", "name": "Kitchen" },
            { "type": "remove_named", "name": "Kitchen" },
            { "type": "remove", "id": "abc" },
            { "type": "resize", "width": 800, "height": 600 }
        ]"#,
    )
    .unwrap();
    assert_eq!(steps.len(), 6);
    assert_eq!(steps[0], Step::Pointer(PointerEvent::Press { x: 50.0, y: 10.0 }));
    assert_eq!(steps[2], Step::Zone(ZoneStep::Save { name: "Kitchen".into() }));
    assert_eq!(steps[4], Step::Zone(ZoneStep::Remove { id: ZoneId::from("abc") }));
    assert_eq!(steps[5], Step::Zone(ZoneStep::Resize { width: 800.0, height: 600.0 }));
}

#[test]
fn parse_rejects_unknown_step() {
    assert!(parse(r#"[{ "type": "zoom", "factor": 2 }]"#).is_err());
}

#[test]
fn replay_click_save_click_again() {
    let steps = parse(
        r#"[
            { "type": "press", "x": 50, "y": 10 },
            { "type": "release", "x": 50, "y": 10 },
            { "type": "save", "name": "Kitchen" },
            { "type": "press", "x": 50, "y": 10 },
            { "type": "release", "x": 50, "y": 10 }
        ]"#,
    )
    .unwrap();
    let mut core = editor();
    let summary = replay(&mut core, &steps);

    assert_eq!(summary.steps, 5);
    assert_eq!(summary.toggles, 1);
    assert_eq!(summary.saves, 1);
    assert_eq!(core.floor_zones()[0].name(), "Kitchen");
    assert!(core.floor_zones()[0].contains(Tile::new(0, 1)));
    assert!(core.current_zone().is_empty());
}

#[test]
fn replay_remove_named_frees_tile() {
    let steps = parse(
        r#"[
            { "type": "press", "x": 50, "y": 10 },
            { "type": "release", "x": 50, "y": 10 },
            { "type": "save", "name": "Kitchen" },
            { "type": "remove_named", "name": "Kitchen" },
            { "type": "press", "x": 50, "y": 10 },
            { "type": "release", "x": 50, "y": 10 }
        ]"#,
    )
    .unwrap();
    let mut core = editor();
    let summary = replay(&mut core, &steps);

    assert_eq!(summary.removals, 1);
    assert_eq!(summary.toggles, 2);
    assert!(core.floor_zones().is_empty());
    assert!(core.current_zone().contains(Tile::new(0, 1)));
}

#[test]
fn replay_remove_unknown_is_silent() {
    let steps = parse(r#"[{ "type": "remove_named", "name": "Nope" }, { "type": "remove", "id": "x" }]"#).unwrap();
    let mut core = editor();
    let summary = replay(&mut core, &steps);
    assert_eq!(summary.steps, 2);
    assert_eq!(summary.removals, 0);
}

#[test]
fn replay_drag_counts_renders_only() {
    let steps = parse(
        r#"[
            { "type": "press", "x": 50, "y": 10 },
            { "type": "move", "x": 60, "y": 10 },
            { "type": "release", "x": 60, "y": 10 }
        ]"#,
    )
    .unwrap();
    let mut core = editor();
    let summary = replay(&mut core, &steps);
    assert_eq!(summary.toggles, 0);
    assert!(summary.renders >= 1);
    assert!(core.current_zone().is_empty());
}
