//! Post-parse pruning of hosts and ports.

use crate::run::{Host, Port, Run};
use log::debug;
use std::sync::Arc;

pub type HostFilter = Arc<dyn Fn(&Host) -> bool + Send + Sync>;
pub type PortFilter = Arc<dyn Fn(&Port) -> bool + Send + Sync>;

/// Keeps the hosts every host filter accepts, then the ports of those
/// hosts every port filter accepts. Relative order is preserved and run
/// metadata is left alone.
pub fn apply(run: &mut Run, host_filters: &[HostFilter], port_filters: &[PortFilter]) {
    if host_filters.is_empty() && port_filters.is_empty() {
        return;
    }

    let hosts_before = run.hosts.len();
    run.hosts
        .retain(|host| host_filters.iter().all(|keep| keep(host)));

    if !port_filters.is_empty() {
        for host in &mut run.hosts {
            host.ports
                .retain(|port| port_filters.iter().all(|keep| keep(port)));
        }
    }

    debug!(
        "Filtered hosts: {} of {} kept",
        run.hosts.len(),
        hosts_before
    );
}

pub fn host_is_up(host: &Host) -> bool {
    host.is_up()
}

pub fn host_has_open_ports(host: &Host) -> bool {
    host.ports.iter().any(Port::is_open)
}

pub fn port_is_open(port: &Port) -> bool {
    port.is_open()
}
