//! UI chrome: console toggle, dialogs, progress bars, upgrade notices.

use switchyard_types::{Command, Envelope, Payload, ProgressReport, Snapshot, UpgradeNotice};

use super::{HandlerError, Plan};

/// The one pass-through that reads state: it flips the current visibility.
pub(super) fn toggle_console(_: &Payload, snapshot: &Snapshot<'_>) -> Plan {
    Ok(vec![Command::SetConsoleVisibility(!snapshot.console_visible())])
}

pub(super) fn open_install_module_dialog(_: &Payload, _: &Snapshot<'_>) -> Plan {
    Ok(vec![Command::OpenInstallModuleDialog])
}

pub(super) fn open_import_template_dialog(_: &Payload, _: &Snapshot<'_>) -> Plan {
    Ok(vec![Command::OpenImportTemplateDialog])
}

fn progress(payload: &Payload) -> Result<ProgressReport, HandlerError> {
    let envelope: Envelope<ProgressReport> = payload.parse()?;
    Ok(envelope.payload)
}

pub(super) fn progress_start(payload: &Payload, _: &Snapshot<'_>) -> Plan {
    Ok(vec![Command::StartProgressBar(progress(payload)?)])
}

pub(super) fn progress_update(payload: &Payload, _: &Snapshot<'_>) -> Plan {
    Ok(vec![Command::UpdateProgressBar(progress(payload)?)])
}

pub(super) fn progress_end(payload: &Payload, _: &Snapshot<'_>) -> Plan {
    Ok(vec![Command::EndProgressBar(progress(payload)?)])
}

pub(super) fn upgrade_status(payload: &Payload, _: &Snapshot<'_>) -> Plan {
    let envelope: Envelope<UpgradeNotice> = payload.parse()?;
    Ok(vec![Command::UpgradeStatus(envelope.payload.status)])
}
