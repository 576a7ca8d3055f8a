//! Verbosity and report related flags. The XML report itself always goes
//! to stdout; the scanner adds `-oX -` on its own.

use super::{flag, out_of_range, pair, path_arg, ScanOption};
use std::path::Path;
use std::time::Duration;

/// Verbosity level 0 to 9 (`-v<level>`).
pub fn with_verbosity(level: u8) -> ScanOption {
    if level > 9 {
        return out_of_range("with_verbosity", "0 and 9");
    }
    let token = format!("-v{}", level);
    ScanOption::new(move |s| {
        s.args.push(token);
        Ok(())
    })
}

/// Debugging level 0 to 9 (`-d<level>`).
pub fn with_debugging(level: u8) -> ScanOption {
    if level > 9 {
        return out_of_range("with_debugging", "0 and 9");
    }
    let token = format!("-d{}", level);
    ScanOption::new(move |s| {
        s.args.push(token);
        Ok(())
    })
}

/// Reports why each port is in its state.
pub fn with_reason() -> ScanOption {
    flag("--reason")
}

/// Only shows open (or possibly open) ports.
pub fn with_open_only() -> ScanOption {
    flag("--open")
}

pub fn with_packet_trace() -> ScanOption {
    flag("--packet-trace")
}

pub fn with_append_output() -> ScanOption {
    flag("--append-output")
}

pub fn with_stylesheet(path: impl AsRef<Path>) -> ScanOption {
    pair("--stylesheet", path_arg(path))
}

pub fn with_webxml() -> ScanOption {
    flag("--webxml")
}

pub fn with_no_stylesheet() -> ScanOption {
    flag("--no-stylesheet")
}

/// Emits `<taskprogress>` entries at this interval.
pub fn with_stats_every(interval: Duration) -> ScanOption {
    pair("--stats-every", format!("{}s", interval.as_secs().max(1)))
}
