//! Project lifecycle: switching roots, new/open, save vs save-as.

use switchyard_types::{Command, Location, Payload, ProjectDir, Snapshot};

use super::{HandlerError, Plan};

/// Query key that marks a project as temporary (never saved to a chosen path).
pub const TEMP_QUERY_KEY: &str = "temp";

/// Drop every trace of the old project before navigating, so nothing keyed on
/// the route sees stale files, documents or tabs.
pub(super) fn set_project_dir(payload: &Payload, _: &Snapshot<'_>) -> Plan {
    let dir: ProjectDir = payload.parse()?;
    let mut location = Location::workspace(&dir.absolute_path);
    if dir.is_temp() {
        location = location.with_query(TEMP_QUERY_KEY, "true");
    }
    Ok(vec![
        Command::ClearFileState,
        Command::ClearEditorState,
        Command::CloseAllTabs,
        Command::RoutePush(location),
    ])
}

pub(super) fn create_new_project(_: &Payload, _: &Snapshot<'_>) -> Plan {
    Ok(vec![Command::CreateProject])
}

pub(super) fn open_project_dialog(_: &Payload, _: &Snapshot<'_>) -> Plan {
    Ok(vec![Command::OpenProject])
}

/// Temporary projects have no destination yet, so saving one means save-as.
pub(super) fn save_project(_: &Payload, snapshot: &Snapshot<'_>) -> Plan {
    if snapshot.location().query_value(TEMP_QUERY_KEY) == Some("true") {
        Ok(vec![Command::SaveAs])
    } else {
        Ok(vec![Command::Save])
    }
}

pub(super) fn save_project_as(_: &Payload, _: &Snapshot<'_>) -> Plan {
    Ok(vec![Command::SaveAs])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{names, run};
    use serde_json::{json, Value};
    use switchyard_types::AppState;

    fn at(location: Location) -> AppState {
        let mut state = AppState::new();
        state.routing.location = location;
        state
    }

    #[test]
    fn project_switch_clears_before_navigating() {
        for is_temp in [json!(true), json!(false), Value::Null] {
            let commands = run(
                set_project_dir,
                json!({"absolutePath": "/Users/me/app", "isTemp": is_temp}),
                &AppState::new(),
            )
            .unwrap();
            assert_eq!(
                names(&commands),
                vec!["clearFileState", "clearEditorState", "closeAllTabs", "routePush"]
            );
        }
    }

    #[test]
    fn project_switch_carries_temp_flag() {
        let payload = json!({"absolutePath": "/tmp/x", "isTemp": true});
        let commands = run(set_project_dir, payload, &AppState::new()).unwrap();
        let Command::RoutePush(location) = &commands[3] else {
            panic!("expected navigation last, got {:?}", commands[3]);
        };
        assert_eq!(location.pathname, "/workspace//tmp/x");
        assert_eq!(location.query_value("temp"), Some("true"));
    }

    fn temp_query(is_temp: Value) -> Option<String> {
        let payload = json!({"absolutePath": "/tmp/x", "isTemp": is_temp});
        let commands = run(set_project_dir, payload, &AppState::new()).unwrap();
        match &commands[..] {
            [.., Command::RoutePush(location)] => location.query_value("temp").map(str::to_owned),
            other => panic!("expected navigation last, got {:?}", other),
        }
    }

    #[test]
    fn any_truthy_temp_flag_marks_the_route() {
        assert_eq!(temp_query(json!(1)).as_deref(), Some("true"));
        assert_eq!(temp_query(json!("true")).as_deref(), Some("true"));
        assert_eq!(temp_query(json!("yes")).as_deref(), Some("true"));
        assert_eq!(temp_query(json!(0)), None);
        assert_eq!(temp_query(json!("")), None);
    }

    #[test]
    fn project_switch_without_temp_has_empty_query() {
        let commands =
            run(set_project_dir, json!({"absolutePath": "/srv/app"}), &AppState::new()).unwrap();
        let Command::RoutePush(location) = &commands[3] else {
            panic!("expected navigation last");
        };
        assert!(location.query.is_empty());
    }

    #[test]
    fn project_switch_rejects_missing_root() {
        let err = run(set_project_dir, json!({"isTemp": true}), &AppState::new()).unwrap_err();
        assert!(matches!(err, HandlerError::MalformedPayload(_)));
    }

    #[test]
    fn temp_project_saves_as() {
        let state = at(Location::workspace("/tmp/x").with_query("temp", "true"));
        assert_eq!(run(save_project, Value::Null, &state).unwrap(), vec![Command::SaveAs]);
    }

    #[test]
    fn known_project_saves_in_place() {
        let cases = [
            Location::workspace("/srv/app"),
            Location::workspace("/srv/app").with_query("temp", "false"),
            Location::workspace("/srv/app").with_query("temp", "1"),
        ];
        for location in cases {
            assert_eq!(run(save_project, Value::Null, &at(location)).unwrap(), vec![Command::Save]);
        }
    }

    #[test]
    fn explicit_save_as_ignores_route() {
        let state = at(Location::workspace("/srv/app"));
        assert_eq!(run(save_project_as, Value::Null, &state).unwrap(), vec![Command::SaveAs]);
    }
}
