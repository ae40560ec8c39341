use crate::{Command, Dialog, UiState};

pub(super) fn reduce(command: &Command, ui: &mut UiState) {
    match command {
        Command::SetConsoleVisibility(visible) => ui.console_visible = *visible,
        Command::OpenInstallModuleDialog => ui.open_dialog = Some(Dialog::InstallModule),
        Command::OpenImportTemplateDialog => ui.open_dialog = Some(Dialog::ImportTemplate),
        Command::StartProgressBar(report) | Command::UpdateProgressBar(report) => {
            ui.progress_bars.insert(report.name.clone(), report.progress);
        }
        Command::EndProgressBar(report) => {
            ui.progress_bars.remove(&report.name);
        }
        Command::UpgradeStatus(status) => ui.upgrade_status = Some(status.clone()),
        _ => {}
    }
}
