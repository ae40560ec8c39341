use crate::{Command, DirectoryState};

pub(super) fn reduce(command: &Command, directory: &mut DirectoryState) {
    match command {
        Command::BatchAddSubPaths(files) => {
            for file in files {
                directory.insert(file.clone());
            }
        }
        Command::AddSubPath(file) => directory.insert(file.clone()),
        Command::RemoveSubPath(path) => {
            directory.remove_path(path);
        }
        Command::RemoveSubPathBatch(paths) => {
            for path in paths {
                directory.remove_path(path);
            }
        }
        Command::MarkSaved(id) => {
            directory.saved.insert(id.clone());
        }
        Command::ClearFileState => directory.clear(),
        _ => {}
    }
}
