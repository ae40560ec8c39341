//! File registry and document events. All pass-through.

use switchyard_types::{Command, Document, FileDescriptor, Payload, SavedFile, Snapshot};

use super::Plan;

pub(super) fn add_sub_path(payload: &Payload, _: &Snapshot<'_>) -> Plan {
    let file: FileDescriptor = payload.parse()?;
    Ok(vec![Command::AddSubPath(file)])
}

pub(super) fn add_sub_path_batch(payload: &Payload, _: &Snapshot<'_>) -> Plan {
    let files: Vec<FileDescriptor> = payload.parse()?;
    Ok(vec![Command::BatchAddSubPaths(files)])
}

pub(super) fn remove_sub_path(payload: &Payload, _: &Snapshot<'_>) -> Plan {
    let path: String = payload.parse()?;
    Ok(vec![Command::RemoveSubPath(path)])
}

pub(super) fn remove_sub_path_batch(payload: &Payload, _: &Snapshot<'_>) -> Plan {
    let paths: Vec<String> = payload.parse()?;
    Ok(vec![Command::RemoveSubPathBatch(paths)])
}

pub(super) fn file_data(payload: &Payload, _: &Snapshot<'_>) -> Plan {
    let doc: Document = payload.parse()?;
    Ok(vec![Command::CacheDoc(doc)])
}

/// A completed save means the document matches disk and the file is saved.
pub(super) fn save_successful(payload: &Payload, _: &Snapshot<'_>) -> Plan {
    let saved: SavedFile = payload.parse()?;
    Ok(vec![Command::MarkClean(saved.id.clone()), Command::MarkSaved(saved.id)])
}
