//! Packager and simulator process status.

use switchyard_types::{Command, Payload, SimulatorStatus, Snapshot};

use super::Plan;

pub(super) fn packager_output(payload: &Payload, _: &Snapshot<'_>) -> Plan {
    let line: String = payload.parse()?;
    Ok(vec![Command::AppendPackagerOutput(line)])
}

pub(super) fn simulator_status(payload: &Payload, _: &Snapshot<'_>) -> Plan {
    let status: SimulatorStatus = payload.parse()?;
    Ok(vec![Command::SetSimulatorStatus(status.simulator_is_open)])
}
