//! Timing and performance.

use super::{duration_arg, exclusive, out_of_range, pair, ScanOption};
use crate::args::Exclusive;
use std::time::Duration;

/// nmap timing templates, `-T0` through `-T5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Timing {
    Paranoid = 0,
    Sneaky = 1,
    Polite = 2,
    Normal = 3,
    Aggressive = 4,
    Insane = 5,
}

impl Timing {
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            0 => Some(Timing::Paranoid),
            1 => Some(Timing::Sneaky),
            2 => Some(Timing::Polite),
            3 => Some(Timing::Normal),
            4 => Some(Timing::Aggressive),
            5 => Some(Timing::Insane),
            _ => None,
        }
    }

    pub fn level(self) -> u8 {
        self as u8
    }
}

pub fn with_timing_template(timing: Timing) -> ScanOption {
    exclusive(
        Exclusive::TimingTemplate,
        "with_timing_template",
        vec![format!("-T{}", timing.level())],
    )
}

/// Like [`with_timing_template`] for a numeric level, e.g. one read from
/// a config file.
pub fn with_timing_level(level: u8) -> ScanOption {
    match Timing::from_level(level) {
        Some(timing) => with_timing_template(timing),
        None => out_of_range("with_timing_level", "0 and 5"),
    }
}

pub fn with_min_hostgroup(size: u32) -> ScanOption {
    pair("--min-hostgroup", size.to_string())
}

pub fn with_max_hostgroup(size: u32) -> ScanOption {
    pair("--max-hostgroup", size.to_string())
}

pub fn with_min_parallelism(probes: u32) -> ScanOption {
    pair("--min-parallelism", probes.to_string())
}

pub fn with_max_parallelism(probes: u32) -> ScanOption {
    pair("--max-parallelism", probes.to_string())
}

pub fn with_min_rtt_timeout(timeout: Duration) -> ScanOption {
    pair("--min-rtt-timeout", duration_arg(timeout))
}

pub fn with_max_rtt_timeout(timeout: Duration) -> ScanOption {
    pair("--max-rtt-timeout", duration_arg(timeout))
}

pub fn with_initial_rtt_timeout(timeout: Duration) -> ScanOption {
    pair("--initial-rtt-timeout", duration_arg(timeout))
}

pub fn with_max_retries(tries: u32) -> ScanOption {
    pair("--max-retries", tries.to_string())
}

/// Gives up on a host after this long. Unrelated to the deadline of the
/// whole run, see [`with_timeout`](super::with_timeout).
pub fn with_host_timeout(timeout: Duration) -> ScanOption {
    pair("--host-timeout", duration_arg(timeout))
}

pub fn with_scan_delay(delay: Duration) -> ScanOption {
    pair("--scan-delay", duration_arg(delay))
}

pub fn with_max_scan_delay(delay: Duration) -> ScanOption {
    pair("--max-scan-delay", duration_arg(delay))
}

/// Packets per second.
pub fn with_min_rate(rate: u32) -> ScanOption {
    pair("--min-rate", rate.to_string())
}

pub fn with_max_rate(rate: u32) -> ScanOption {
    pair("--max-rate", rate.to_string())
}
