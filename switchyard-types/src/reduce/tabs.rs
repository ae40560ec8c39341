use crate::{AppState, Command, ContentPane};

/// Pane that `OpenFile` targets.
const OPEN_PANE: ContentPane = ContentPane::Center;

pub(super) fn reduce(command: &Command, state: &mut AppState) {
    match command {
        Command::CloseTab { pane, id } => state.tabs.layout_mut(*pane).close(id),
        Command::CloseAllTabs => state.tabs.close_all(),
        Command::ClearFocusedTab(pane) => state.tabs.layout_mut(*pane).focused_tab_id = None,
        Command::OpenFile(file) => {
            // Composite: register, open + focus the tab, show the document.
            if state.directory.file(&file.id).is_none() {
                state.directory.insert(file.clone());
            }
            state.tabs.layout_mut(OPEN_PANE).open(file.id.clone());
            state.editor.current_doc = Some(file.id.clone());
        }
        _ => {}
    }
}
