//! Closing the active tab and handing focus to a neighbour.

use switchyard_types::{Command, ContentPane, Payload, Snapshot};

use super::{HandlerError, Plan};
use crate::focus::resolve_focus;

/// Pane the close-tab accelerator acts on.
const ACTIVE_PANE: ContentPane = ContentPane::Center;

pub(super) fn close_tab(_: &Payload, snapshot: &Snapshot<'_>) -> Plan {
    let layout = snapshot.tabs(ACTIVE_PANE);
    let Some(closing) = layout.focused_tab_id.as_ref() else {
        log::debug!(target: "router::tabs", "close tab with nothing focused in {}", ACTIVE_PANE);
        return Ok(Vec::new());
    };

    let next = resolve_focus(&layout.tab_ids, Some(closing), closing)?;

    let mut commands = vec![Command::CloseTab {
        pane: ACTIVE_PANE,
        id: closing.clone(),
    }];
    match next {
        // Opening the file moves focus to it.
        Some(id) => {
            let file = snapshot.file(id).ok_or_else(|| HandlerError::MissingFile(id.clone()))?;
            commands.push(Command::OpenFile(file.clone()));
        }
        None => commands.extend([
            Command::ClearFocusedTab(ACTIVE_PANE),
            Command::ClearCurrentDoc,
            Command::ClearSelections,
        ]),
    }
    Ok(commands)
}
