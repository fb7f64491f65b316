//! Integration tests for the editor crate

use weave_editor::{
    Editor, EditorConfig, EditorError, ElementPatch, HistoryError, MutationError, Target,
};
use weave_model::{ElementKind, StyleKey, StyleValue, Theme};

#[test]
fn test_end_to_end_scenario() -> anyhow::Result<()> {
    let mut editor = Editor::new("landing-page");

    // Create, style, move
    let button = editor.create_element(ElementKind::Button, 100.0, 80.0)?;
    editor.update_element(
        &button,
        &ElementPatch::new()
            .style(StyleKey::BackgroundColor, "#3366FF")
            .style(StyleKey::Rotate, 45),
    )?;
    editor.update_element(&button, &ElementPatch::new().position(200.0, 160.0))?;

    // Duplicate and lock the copy
    let copy = editor.duplicate_element(&button)?;
    editor.update_element(&copy, &ElementPatch::new().locked(true))?;

    let err = editor
        .update_element(&copy, &ElementPatch::new().x(0.0))
        .unwrap_err();
    assert!(matches!(err, EditorError::Mutation(MutationError::Locked(_))));

    let html = editor.generate_code(Target::Html)?;
    assert!(html.contains(&format!("class=\"el-{}\"", button)));
    assert!(html.contains("transform: rotate(45deg);"));
    assert!(html.contains("left: 220px;"));

    // Walk back to the empty canvas and forward again
    let levels = editor.history().undo_levels();
    assert_eq!(levels, 5);
    for _ in 0..levels {
        editor.undo()?;
    }
    assert!(editor.elements().is_empty());
    assert!(matches!(
        editor.undo(),
        Err(EditorError::History(HistoryError::NothingToUndo))
    ));

    for _ in 0..levels {
        editor.redo()?;
    }
    assert_eq!(editor.elements().len(), 2);
    assert!(editor.element(&copy).map(|el| el.locked).unwrap_or(false));
    assert!(!editor.can_redo());

    Ok(())
}

#[test]
fn test_undo_redo_background_color() -> anyhow::Result<()> {
    let config = EditorConfig {
        snap_to_grid: false,
        ..Default::default()
    };
    let mut editor = Editor::with_config("test", config);
    let button = editor.create_element(ElementKind::Button, 50.0, 50.0)?;
    let created = editor.element(&button).expect("button").clone();
    assert_eq!((created.x, created.y), (50.0, 50.0));
    assert!(!created.styles.contains(StyleKey::BackgroundColor));

    editor.update_element(
        &button,
        &ElementPatch::new().style(StyleKey::BackgroundColor, "#ff0000"),
    )?;

    editor.undo()?;
    let el = editor.element(&button).expect("button");
    assert!(!el.styles.contains(StyleKey::BackgroundColor));
    assert_eq!(el, &created);

    editor.redo()?;
    let el = editor.element(&button).expect("button");
    assert_eq!(
        el.styles.get(StyleKey::BackgroundColor),
        Some(&StyleValue::from("#ff0000"))
    );

    Ok(())
}

#[test]
fn test_new_commit_discards_redo_branch() -> anyhow::Result<()> {
    let mut editor = Editor::new("test");
    let a = editor.create_element(ElementKind::Text, 0.0, 0.0)?;
    editor.update_element(&a, &ElementPatch::new().content(Some("one".to_string())))?;
    editor.undo()?;
    assert!(editor.can_redo());

    editor.update_element(&a, &ElementPatch::new().content(Some("two".to_string())))?;
    assert!(!editor.can_redo());
    assert_eq!(editor.history().len(), 3);
    assert_eq!(
        editor.element(&a).and_then(|el| el.content.as_deref()),
        Some("two")
    );

    Ok(())
}

#[test]
fn test_rejected_request_leaves_state_alone() -> anyhow::Result<()> {
    let mut editor = Editor::new("test");
    let a = editor.create_element(ElementKind::Text, 0.0, 0.0)?;
    let before = editor.elements().clone();
    let len = editor.history().len();

    let batch = vec![
        (a.clone(), ElementPatch::new().x(40.0)),
        ("missing".into(), ElementPatch::new().x(40.0)),
    ];
    assert!(editor.update_elements(&batch).is_err());
    assert!(editor
        .update_element(&a, &ElementPatch::new().height(f64::INFINITY))
        .is_err());
    assert!(editor.delete_element(&"missing".into()).is_err());

    assert!(editor.elements().ptr_eq(&before));
    assert_eq!(editor.history().len(), len);

    Ok(())
}

#[test]
fn test_codegen_ignores_names_and_is_deterministic() -> anyhow::Result<()> {
    let mut editor = Editor::new("test");
    editor.apply_theme(Theme::named("Ocean Blue").expect("preset"));
    let id = editor.create_element(ElementKind::Card, 40.0, 40.0)?;

    let before: Vec<String> = Target::ALL
        .iter()
        .map(|target| editor.generate_code(*target))
        .collect::<Result<_, _>>()?;

    editor.update_element(&id, &ElementPatch::new().name("Renamed card"))?;

    for (target, expected) in Target::ALL.iter().zip(&before) {
        assert_eq!(&editor.generate_code(*target)?, expected, "{} output changed", target);
    }

    Ok(())
}

#[test]
fn test_props_merge_and_remove() -> anyhow::Result<()> {
    let mut editor = Editor::new("test");
    let img = editor.create_element(ElementKind::Image, 0.0, 0.0)?;

    editor.update_element(&img, &ElementPatch::new().prop("alt", "Logo").prop("loading", "lazy"))?;
    editor.update_element(&img, &ElementPatch::new().remove_prop("loading"))?;

    let el = editor.element(&img).expect("image");
    assert_eq!(el.prop_str("alt"), Some("Logo"));
    assert!(!el.props.contains_key("loading"));
    assert_eq!(el.content.as_deref(), Some("https://placehold.co/300x200"));

    Ok(())
}

#[test]
fn test_style_removal_through_patch() -> anyhow::Result<()> {
    let mut editor = Editor::new("test");
    let button = editor.create_element(ElementKind::Button, 0.0, 0.0)?;

    editor.update_element(&button, &ElementPatch::new().remove_style(StyleKey::Padding))?;

    let el = editor.element(&button).expect("button");
    assert!(!el.styles.contains(StyleKey::Padding));
    assert_eq!(
        el.styles.get(StyleKey::FontSize),
        Some(&StyleValue::Number(16.0))
    );

    Ok(())
}

#[test]
fn test_max_history_keeps_cursor_valid() -> anyhow::Result<()> {
    let config = EditorConfig {
        max_history: 3,
        ..Default::default()
    };
    let mut editor = Editor::with_config("test", config);
    let a = editor.create_element(ElementKind::Text, 0.0, 0.0)?;
    for x in 1..=6 {
        editor.update_element(&a, &ElementPatch::new().x(x as f64 * 20.0))?;
    }

    assert_eq!(editor.history().len(), 4);
    for _ in 0..3 {
        editor.undo()?;
    }
    assert!(!editor.can_undo());
    assert_eq!(editor.element(&a).map(|el| el.x), Some(60.0));

    Ok(())
}

#[test]
fn test_save_and_load_round_trip() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("site.weave.json");

    let mut editor = Editor::new("site");
    editor.apply_theme(Theme::named("Forest Green").expect("preset"));
    let about = editor.add_page("About", "/about")?;
    editor.select_page(&about)?;
    let heading = editor.create_element(ElementKind::Heading, 0.0, 0.0)?;
    editor.save(&path)?;

    let mut loaded = Editor::load(&path, EditorConfig::default())?;
    assert_eq!(loaded.elements(), editor.elements());
    assert_eq!(loaded.pages(), editor.pages());
    assert_eq!(loaded.theme().map(|t| t.name.as_str()), Some("Forest Green"));
    assert!(!loaded.can_undo());

    let next = loaded.create_element(ElementKind::Text, 0.0, 0.0)?;
    assert_ne!(next, heading);
    let page = loaded.add_page("Blog", "/blog")?;
    assert_ne!(page, about);

    let saved: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
    assert!(saved["savedAt"].is_string());

    Ok(())
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = Editor::load(dir.path().join("nope.json"), EditorConfig::default()).unwrap_err();
    assert!(matches!(err, EditorError::Io(_)));
}
