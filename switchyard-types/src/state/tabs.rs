//! Tab layout state, one ordered tab list per content pane.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{ContentPane, FileId};

static EMPTY_LAYOUT: TabLayout = TabLayout {
    tab_ids: Vec::new(),
    focused_tab_id: None,
};

/// Ordered tabs of one pane. Order is insertion order and defines adjacency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabLayout {
    pub tab_ids: Vec<FileId>,
    pub focused_tab_id: Option<FileId>,
}

impl TabLayout {
    pub fn contains(&self, id: &FileId) -> bool {
        self.tab_ids.contains(id)
    }

    /// Append a tab if it is not already open, then focus it.
    pub fn open(&mut self, id: FileId) {
        if !self.contains(&id) {
            self.tab_ids.push(id.clone());
        }
        self.focused_tab_id = Some(id);
    }

    /// Remove a tab. Closing the focused tab leaves the pane without focus.
    pub fn close(&mut self, id: &FileId) {
        self.tab_ids.retain(|t| t != id);
        if self.focused_tab_id.as_ref() == Some(id) {
            self.focused_tab_id = None;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tab_ids.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TabState {
    pub panes: BTreeMap<ContentPane, TabLayout>,
}

impl TabState {
    /// Layout for a pane; panes that never held a tab read as empty.
    pub fn layout(&self, pane: ContentPane) -> &TabLayout {
        self.panes.get(&pane).unwrap_or(&EMPTY_LAYOUT)
    }

    pub fn layout_mut(&mut self, pane: ContentPane) -> &mut TabLayout {
        self.panes.entry(pane).or_default()
    }

    pub fn close_all(&mut self) {
        self.panes.clear();
    }
}
