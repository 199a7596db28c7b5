//! Integration tests for the composed workspace

use content_registry::StaticContentRegistry;
use core_types::{IconKind, MenuItemId};
use editor_core::{BlockType, CaretState, EditOutcome, EditorKey, Mark};
use services_session::{MemoryStore, SESSION_KEY, VALID_EMAIL, VALID_PASSWORD};
use services_session::KeyValueStore;
use services_workspace::{Workspace, WorkspaceError};

fn signed_in() -> Workspace<StaticContentRegistry, MemoryStore> {
    let mut ws = Workspace::new(StaticContentRegistry::new(), MemoryStore::new());
    ws.sign_in(VALID_EMAIL, VALID_PASSWORD).unwrap();
    ws
}

#[test]
fn test_numbered_list_end_to_end() {
    let mut ws = signed_in();
    let b1 = ws.document().blocks()[0].id;

    // "1." plus space turns the block into an empty numbered list
    ws.type_text(&b1, "1.").unwrap();
    let outcome = ws.apply_key(&b1, EditorKey::Space, CaretState::collapsed(2)).unwrap();
    assert_eq!(
        outcome,
        EditOutcome::Converted {
            kind: BlockType::NumberedList
        }
    );
    assert_eq!(ws.document().get(&b1).unwrap().kind, BlockType::NumberedList);
    assert_eq!(ws.document().get(&b1).unwrap().content(), "");

    // Enter inserts an empty paragraph below and focuses it
    let outcome = ws.apply_key(&b1, EditorKey::Enter, CaretState::start()).unwrap();
    let b2 = match outcome {
        EditOutcome::Inserted { block } => block,
        other => panic!("Expected Inserted, got {:?}", other),
    };
    assert_eq!(ws.document().len(), 2);
    assert_eq!(ws.focused(), Some(&b2));
    assert_eq!(ws.view().nodes().len(), 2);

    // Backspace at the start of the empty paragraph removes it
    let outcome = ws.apply_key(&b2, EditorKey::Backspace, CaretState::start()).unwrap();
    assert_eq!(outcome, EditOutcome::Removed { focus: b1 });
    assert_eq!(ws.document().len(), 1);
    assert_eq!(ws.focused(), Some(&b1));
    assert_eq!(ws.view().nodes().len(), 1);
}

#[test]
fn test_sign_in_gate_and_restore() {
    let mut ws = Workspace::new(StaticContentRegistry::new(), MemoryStore::new());
    assert_eq!(
        ws.select_menu(&MenuItemId::new("flow")).unwrap_err(),
        WorkspaceError::NotSignedIn
    );
    assert!(ws.restore_session().unwrap().is_none());

    ws.sign_in(VALID_EMAIL, VALID_PASSWORD).unwrap();
    assert_eq!(ws.current_user().unwrap().name, "Designer User");
    ws.select_menu(&MenuItemId::new("flow")).unwrap();
    assert_eq!(ws.header().title, "Flow");
}

#[test]
fn test_restore_after_stored_session() {
    let mut store = MemoryStore::new();
    store
        .set(
            SESSION_KEY,
            "{\"email\":\"designer@callourstudio.com\",\"name\":\"Designer User\"}",
        )
        .unwrap();

    let mut ws = Workspace::new(StaticContentRegistry::new(), store);
    let user = ws.restore_session().unwrap().unwrap();
    assert_eq!(user.email, VALID_EMAIL);

    // The editor is live without an explicit sign-in
    ws.select_menu(&MenuItemId::new("git-workflow")).unwrap();
    assert_eq!(ws.header().title, "Git Workflow");
}

#[test]
fn test_navigation_discards_draft() {
    let mut ws = signed_in();
    ws.select_menu(&MenuItemId::new("brand-voice")).unwrap();
    let block = ws.document().blocks()[0].id;

    ws.type_text(&block, "half-finished thought").unwrap();
    ws.select_menu(&MenuItemId::new("design-bank")).unwrap();
    ws.select_menu(&MenuItemId::new("brand-voice")).unwrap();

    // Reloaded from the provider: fresh ids, empty content
    assert_eq!(ws.document().len(), 1);
    assert!(ws.document().blocks()[0].is_empty());
    assert_ne!(ws.document().blocks()[0].id, block);
}

#[test]
fn test_inline_slash_converts_and_strips_query() {
    let mut ws = signed_in();
    let block = ws.document().blocks()[0].id;

    ws.type_text(&block, "agenda /").unwrap();
    ws.type_text(&block, "agenda /hea").unwrap();

    let entries = ws.slash_entries();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].label, "Heading 1");

    let converted = ws.confirm_slash(BlockType::Heading1).unwrap();
    assert_eq!(converted, block);
    assert_eq!(ws.document().get(&block).unwrap().kind, BlockType::Heading1);
    assert_eq!(ws.document().get(&block).unwrap().content(), "agenda ");
    assert!(ws.document().slash_state().is_none());
    assert_eq!(ws.document().len(), 1);
}

#[test]
fn test_button_slash_inserts_after_anchor() {
    let mut ws = signed_in();
    let anchor = ws.document().blocks()[0].id;
    ws.type_text(&anchor, "intro").unwrap();

    ws.open_slash_button(&anchor).unwrap();
    let inserted = ws.confirm_slash(BlockType::TodoList).unwrap();

    assert_eq!(ws.document().len(), 2);
    assert_eq!(ws.document().blocks()[1].id, inserted);
    assert_eq!(ws.document().get(&inserted).unwrap().kind, BlockType::TodoList);
    // The anchor's text was not touched
    assert_eq!(ws.document().get(&anchor).unwrap().content(), "intro");

    ws.toggle_checked(&inserted).unwrap();
    assert_eq!(ws.document().get(&inserted).unwrap().checked, Some(true));
}

#[test]
fn test_marks_survive_view_rebuild() {
    let mut ws = signed_in();
    let block = ws.document().blocks()[0].id;

    ws.type_text(&block, "bold words here").unwrap();
    ws.apply_mark(&block, 0..4, &Mark::Bold).unwrap();

    // Force focus churn and a resync; the runs must come back intact
    ws.set_focus(None);
    ws.set_focus(Some(block));

    let node = ws.view().get(&block).unwrap();
    assert_eq!(node.runs.len(), 2);
    assert!(node.runs[0].marks.bold);
    assert_eq!(node.runs[0].text, "bold");
    assert_eq!(node.text, "bold words here");
}

#[test]
fn test_tab_and_sidebar_flow() {
    let mut ws = signed_in();

    // Duplicate an item, then open its page: unknown id resolves Untitled
    let copy = ws.duplicate_menu_item(&MenuItemId::new("design-bank")).unwrap();
    ws.select_menu(&copy).unwrap();
    assert_eq!(ws.header().title, "Untitled");

    // Rename works through the workspace layer
    ws.rename_menu_item(&copy, "Design Bank Archive").unwrap();
    assert_eq!(
        ws.sidebar().item(&copy).unwrap().title,
        "Design Bank Archive"
    );

    // New tab starts with an empty sidebar
    let tab = ws.add_tab("Playbooks").unwrap();
    assert_eq!(ws.tabs().last().unwrap().id, tab);
    assert!(ws.sidebar().sections().is_empty());

    let section = ws.add_section().unwrap();
    let item = ws
        .add_menu_item(&section, "Launch Checklist", IconKind::Calendar)
        .unwrap();
    ws.select_menu(&item).unwrap();
    assert_eq!(ws.header().title, "Untitled");
}

#[test]
fn test_tab_delete_round_trip() {
    let mut ws = signed_in();
    let help = ws.tabs()[4].id.clone();

    ws.request_delete_tab(&help).unwrap();
    ws.cancel_delete_tab();
    assert_eq!(ws.tabs().len(), 5);

    ws.request_delete_tab(&help).unwrap();
    assert_eq!(ws.confirm_delete_tab().unwrap(), help);
    assert_eq!(ws.tabs().len(), 4);
}

#[test]
fn test_reorder_through_workspace_keeps_view_aligned() {
    let mut ws = signed_in();
    let a = ws.document().blocks()[0].id;
    ws.type_text(&a, "first").unwrap();

    ws.apply_key(&a, EditorKey::Enter, CaretState::collapsed(5)).unwrap();
    let b = ws.document().blocks()[1].id;
    ws.type_text(&b, "second").unwrap();

    ws.reorder_blocks(&b, &a).unwrap();
    assert_eq!(ws.view().nodes()[0].text, "second");
    assert_eq!(ws.view().nodes()[1].text, "first");
}
