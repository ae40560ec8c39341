use crate::{AppState, Command, HostRequest};

pub(super) fn reduce(command: &Command, state: &mut AppState) {
    let app = &mut state.application;
    match command {
        Command::AppendPackagerOutput(line) => app.packager_output.push(line.clone()),
        Command::SetSimulatorStatus(open) => app.simulator_open = *open,
        Command::CreateProject => app.host_requests.push(HostRequest::CreateProject),
        Command::OpenProject => app.host_requests.push(HostRequest::OpenProject),
        Command::Save => {
            let project_root = state.routing.location.project_root().map(str::to_string);
            app.host_requests.push(HostRequest::Save { project_root });
        }
        Command::SaveAs => app.host_requests.push(HostRequest::SaveAs),
        _ => {}
    }
}
