//! Host discovery.
//!
//! The probe options take an optional port or protocol list; an empty
//! string leaves nmap's defaults in place (`-PS` rather than `-PS443`).

use super::{exclusive, flag, pair, ScanOption};
use crate::args::Exclusive;

/// Lists targets without sending packets (`-sL`).
pub fn with_list_scan() -> ScanOption {
    flag("-sL")
}

/// Host discovery only, no port scan (`-sn`).
pub fn with_ping_scan() -> ScanOption {
    flag("-sn")
}

/// Treats every host as online (`-Pn`).
pub fn with_skip_host_discovery() -> ScanOption {
    flag("-Pn")
}

fn probe(prefix: &'static str, list: &str) -> ScanOption {
    let token = format!("{}{}", prefix, list);
    ScanOption::new(move |s| {
        s.args.push(token);
        Ok(())
    })
}

pub fn with_syn_discovery(ports: &str) -> ScanOption {
    probe("-PS", ports)
}

pub fn with_ack_discovery(ports: &str) -> ScanOption {
    probe("-PA", ports)
}

pub fn with_udp_discovery(ports: &str) -> ScanOption {
    probe("-PU", ports)
}

pub fn with_sctp_discovery(ports: &str) -> ScanOption {
    probe("-PY", ports)
}

pub fn with_icmp_echo_discovery() -> ScanOption {
    flag("-PE")
}

pub fn with_icmp_timestamp_discovery() -> ScanOption {
    flag("-PP")
}

pub fn with_icmp_netmask_discovery() -> ScanOption {
    flag("-PM")
}

/// IP protocol ping, e.g. `"1,2,4"` (`-PO`).
pub fn with_ip_protocol_ping_discovery(protocols: &str) -> ScanOption {
    probe("-PO", protocols)
}

/// Never do DNS resolution (`-n`).
pub fn with_disabled_dns_resolution() -> ScanOption {
    exclusive(
        Exclusive::DnsResolution,
        "with_disabled_dns_resolution",
        vec!["-n".to_string()],
    )
}

/// Always resolve, even hosts that are down (`-R`).
pub fn with_forced_dns_resolution() -> ScanOption {
    exclusive(
        Exclusive::DnsResolution,
        "with_forced_dns_resolution",
        vec!["-R".to_string()],
    )
}

pub fn with_custom_dns_servers(servers: impl Into<String>) -> ScanOption {
    pair("--dns-servers", servers)
}

pub fn with_system_dns() -> ScanOption {
    flag("--system-dns")
}

pub fn with_traceroute() -> ScanOption {
    flag("--traceroute")
}
