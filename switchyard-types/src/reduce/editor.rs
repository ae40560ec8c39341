use crate::{Command, EditorState};

pub(super) fn reduce(command: &Command, editor: &mut EditorState) {
    match command {
        Command::CacheDoc(doc) => {
            editor.dirty.remove(&doc.id);
            editor.docs_by_id.insert(doc.id.clone(), doc.clone());
        }
        Command::MarkClean(id) => {
            editor.dirty.remove(id);
        }
        Command::ClearCurrentDoc => editor.current_doc = None,
        Command::ClearSelections => editor.selections.clear(),
        Command::ClearEditorState => editor.clear(),
        _ => {}
    }
}
