//! Port specification and scan order.

use super::{exclusive, flag, out_of_range, pair, ScanOption};
use crate::args::Exclusive;

/// Ports to scan, e.g. `"22,80,8000-8100"` or `"U:53,T:443"` (`-p`).
pub fn with_ports(ports: impl Into<String>) -> ScanOption {
    exclusive(
        Exclusive::PortSelection,
        "with_ports",
        vec!["-p".to_string(), ports.into()],
    )
}

pub fn with_port_exclusions(ports: impl Into<String>) -> ScanOption {
    pair("--exclude-ports", ports)
}

/// Scans fewer ports than the default (`-F`).
pub fn with_fast_mode() -> ScanOption {
    exclusive(Exclusive::PortSelection, "with_fast_mode", vec!["-F".to_string()])
}

/// Scans ports in order instead of randomizing (`-r`).
pub fn with_consecutive_port_scanning() -> ScanOption {
    flag("-r")
}

/// Scans the `count` most common ports.
pub fn with_most_common_ports(count: u32) -> ScanOption {
    pair("--top-ports", count.to_string())
}

/// Scans ports more common than `ratio`, which must lie in `[0, 1]`.
/// The ratio is passed with one decimal.
pub fn with_port_ratio(ratio: f32) -> ScanOption {
    if !(0.0..=1.0).contains(&ratio) {
        return out_of_range("with_port_ratio", "0 and 1");
    }
    pair("--port-ratio", format!("{:.1}", ratio))
}
