//! End-to-end routing: host events in, ordered commands applied to a store.

mod common;

use common::{center_focus, center_tabs, current_doc, focus, state_with_open_tabs, RecordingStore};
use serde_json::json;
use switchyard_core::bridge::HostBridge;
use switchyard_core::router::{RouteError, Router};
use switchyard_types::{AppState, Command, EventKind, HostEvent, HostRequest, Location};

fn router() -> Router {
    Router::standard().expect("standard registry is total")
}

#[test]
fn closing_tabs_walks_focus_until_pane_is_empty() {
    let router = router();
    let close = HostEvent::bare("SHOULD_CLOSE_TAB");
    let mut state = state_with_open_tabs(&["a", "b", "c"]);
    focus(&mut state, "b");
    let mut store = RecordingStore::new(state);

    router.route(&close, &mut store).unwrap();
    assert_eq!(store.applied_names(), vec!["closeTab", "openFile"]);
    assert_eq!(center_tabs(&store.state), vec!["a", "c"]);
    assert_eq!(center_focus(&store.state), Some("c"));
    assert_eq!(current_doc(&store.state), Some("c"));

    store.clear_record();
    router.route(&close, &mut store).unwrap();
    assert_eq!(center_tabs(&store.state), vec!["a"]);
    assert_eq!(center_focus(&store.state), Some("a"));

    store.clear_record();
    store.state.editor.selections.push("L1:4".into());
    router.route(&close, &mut store).unwrap();
    assert_eq!(
        store.applied_names(),
        vec!["closeTab", "clearFocusedTab", "clearCurrentDoc", "clearSelections"]
    );
    assert!(center_tabs(&store.state).is_empty());
    assert_eq!(center_focus(&store.state), None);
    assert_eq!(store.state.editor.current_doc, None);
    assert!(store.state.editor.selections.is_empty());

    // Nothing left to close.
    store.clear_record();
    router.route(&close, &mut store).unwrap();
    assert!(store.applied.is_empty());
}

#[test]
fn close_tab_with_unregistered_neighbour_leaves_state_alone() {
    let router = router();
    let mut state = state_with_open_tabs(&["a", "b"]);
    focus(&mut state, "a");
    state.directory.files_by_id.clear();
    let before = state.clone();
    let mut store = RecordingStore::new(state);

    let err = router
        .route(&HostEvent::bare("SHOULD_CLOSE_TAB"), &mut store)
        .unwrap_err();
    assert!(err.is_invariant_violation());
    assert!(store.applied.is_empty());
    assert_eq!(store.state, before);
}

#[test]
fn temp_project_round_trip_saves_as_then_in_place() {
    let router = router();
    let save = HostEvent::bare("SHOULD_SAVE_PROJECT");
    let mut store = RecordingStore::new(state_with_open_tabs(&["old"]));

    let scratch = json!({"absolutePath": "/tmp/scratch", "isTemp": true});
    router
        .route(&HostEvent::new("SET_PROJECT_DIR", scratch), &mut store)
        .unwrap();
    assert_eq!(
        store.applied_names(),
        vec!["clearFileState", "clearEditorState", "closeAllTabs", "routePush"]
    );
    assert!(store.state.directory.is_empty());
    assert!(center_tabs(&store.state).is_empty());

    router.route(&save, &mut store).unwrap();

    let app = json!({"absolutePath": "/srv/app"});
    router
        .route(&HostEvent::new("SET_PROJECT_DIR", app), &mut store)
        .unwrap();
    assert_eq!(
        store.state.routing.location,
        Location::workspace("/srv/app")
    );
    router.route(&save, &mut store).unwrap();
    router
        .route(&HostEvent::bare("SHOULD_SAVE_PROJECT_AS"), &mut store)
        .unwrap();

    assert_eq!(
        store.state.application.host_requests,
        vec![
            HostRequest::SaveAs,
            HostRequest::Save {
                project_root: Some("/srv/app".into()),
            },
            HostRequest::SaveAs,
        ]
    );
}

#[test]
fn numeric_temp_flag_still_switches_and_saves_as() {
    let router = router();
    let mut store = RecordingStore::new(state_with_open_tabs(&["old"]));

    let scratch = json!({"absolutePath": "/tmp/scratch", "isTemp": 1});
    router
        .route(&HostEvent::new("SET_PROJECT_DIR", scratch), &mut store)
        .unwrap();
    router
        .route(&HostEvent::bare("SHOULD_SAVE_PROJECT"), &mut store)
        .unwrap();

    assert!(center_tabs(&store.state).is_empty());
    let requests = &store.state.application.host_requests;
    assert_eq!(requests, &vec![HostRequest::SaveAs]);
    let location = &store.state.routing.location;
    assert_eq!(location.project_root(), Some("/tmp/scratch"));
}

#[test]
fn progress_bar_ends_even_without_a_final_value() {
    let router = router();
    let mut store = RecordingStore::default();

    let start = json!({"payload": {"name": "npm", "progress": 0}});
    router
        .route(&HostEvent::new("PROGRESS_START", start), &mut store)
        .unwrap();
    assert_eq!(store.state.ui.progress_bars.get("npm"), Some(&0.0));

    let end = json!({"payload": {"name": "npm", "progress": null}});
    router
        .route(&HostEvent::new("PROGRESS_END", end), &mut store)
        .unwrap();
    assert!(store.state.ui.progress_bars.is_empty());
}

#[test]
fn remove_batch_example_yields_single_command() {
    let router = router();
    let mut store = RecordingStore::new(AppState::new());
    let event = HostEvent::new("REMOVE_SUB_PATH_BATCH", json!(["a.txt", "b.txt"]));
    let report = router.route(&event, &mut store).unwrap();
    assert_eq!(report.kind, EventKind::RemoveSubPathBatch);
    let paths = vec!["a.txt".to_string(), "b.txt".to_string()];
    assert_eq!(store.applied, vec![Command::RemoveSubPathBatch(paths)]);
}

#[test]
fn save_successful_twice_is_same_as_once() {
    let router = router();
    let mut store = RecordingStore::new(state_with_open_tabs(&["doc"]));
    let event = HostEvent::new("SAVE_SUCCESSFUL", json!({"id": "doc"}));

    router.route(&event, &mut store).unwrap();
    let once = store.state.clone();
    router.route(&event, &mut store).unwrap();
    assert_eq!(store.state, once);

    let line = HostEvent::new("PACKAGER_OUTPUT", json!("Loading dependency graph"));
    router.route(&line, &mut store).unwrap();
    router.route(&line, &mut store).unwrap();
    assert_eq!(store.state.application.packager_output.len(), 2);
}

#[test]
fn every_kind_routes_with_a_well_formed_payload() {
    let router = router();
    let payload_for = |kind: EventKind| match kind {
        EventKind::SetProjectDir => json!({"absolutePath": "/p"}),
        EventKind::AddSubPath => json!({"id": "x", "absolutePath": "/p/x"}),
        EventKind::AddSubPathBatch => json!([{"id": "x", "absolutePath": "/p/x"}]),
        EventKind::RemoveSubPath => json!("/p/x"),
        EventKind::RemoveSubPathBatch => json!(["/p/x"]),
        EventKind::FileData => json!({"id": "x", "filePath": "/p/x", "data": ""}),
        EventKind::SaveSuccessful => json!({"id": "x"}),
        EventKind::PackagerOutput => json!("line"),
        EventKind::SimulatorStatus => json!({"simulatorIsOpen": false}),
        EventKind::ProgressStart | EventKind::ProgressUpdate | EventKind::ProgressEnd => {
            json!({"payload": {"name": "bar", "progress": 1}})
        }
        EventKind::UpgradeStatus => json!({"payload": {"status": "ok"}}),
        _ => serde_json::Value::Null,
    };

    let mut store = RecordingStore::new(state_with_open_tabs(&["x"]));
    for kind in EventKind::ALL {
        let event = HostEvent::new(kind.name(), payload_for(kind));
        let report = router
            .route(&event, &mut store)
            .unwrap_or_else(|e| panic!("{} failed: {}", kind, e));
        assert_eq!(report.kind, kind);
    }
}

#[test]
fn bridge_keeps_events_whole_and_survives_bad_ones() {
    let mut bridge = HostBridge::new(router());
    let (tx, rx) = HostBridge::channel(16);

    let producer = std::thread::spawn(move || {
        let scratch = json!({"absolutePath": "/p", "isTemp": true});
        let files = json!([
            {"id": "a", "absolutePath": "/p/a"},
            {"id": "b", "absolutePath": "/p/b"},
        ]);
        let events = [
            HostEvent::new("SET_PROJECT_DIR", scratch),
            HostEvent::bare("SHOULD_OPEN_THE_POD_BAY_DOORS"),
            HostEvent::new("ADD_SUB_PATH_BATCH", json!({"not": "a list"})),
            HostEvent::new("ADD_SUB_PATH_BATCH", files),
            HostEvent::bare("SHOULD_SAVE_PROJECT"),
        ];
        for event in events {
            tx.send(event).unwrap();
        }
    });

    let mut store = RecordingStore::new(state_with_open_tabs(&["stale"]));
    let stats = bridge.run(&rx, &mut store);
    producer.join().unwrap();

    assert_eq!(stats.routed, 3);
    assert_eq!(stats.unregistered, 1);
    assert_eq!(stats.failed, 1);
    assert_eq!(
        store.applied_names(),
        vec![
            "clearFileState",
            "clearEditorState",
            "closeAllTabs",
            "routePush",
            "batchAddSubPaths",
            "saveAs"
        ]
    );
    assert_eq!(store.state.directory.len(), 2);
}

#[test]
fn unregistered_error_is_reported_by_name() {
    let err = router()
        .route(&HostEvent::bare("ON_FILE_DATUM"), &mut RecordingStore::default())
        .unwrap_err();
    assert!(matches!(err, RouteError::Unregistered(_)));
    assert!(err.to_string().contains("ON_FILE_DATUM"));
}
