pub mod application;
pub mod directory;
pub mod editor;
pub mod routing;
pub mod tabs;
pub mod ui;

pub use application::*;
pub use directory::*;
pub use editor::*;
pub use routing::*;
pub use tabs::*;
pub use ui::*;

use serde::{Deserialize, Serialize};

/// The single shared state tree. Mutated only by applying commands through
/// [`crate::reduce::reduce`]; everything else reads it through a [`crate::Snapshot`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub directory: DirectoryState,
    pub editor: EditorState,
    pub tabs: TabState,
    pub routing: RoutingState,
    pub ui: UiState,
    pub application: ApplicationState,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
