//! Scan techniques. nmap runs one technique per invocation, so every
//! option here except [`with_tcp_scan_flags`] claims the same category.

use super::{exclusive, pair, ScanOption};
use crate::args::Exclusive;

fn technique(option: &'static str, tokens: &[&str]) -> ScanOption {
    exclusive(
        Exclusive::ScanTechnique,
        option,
        tokens.iter().map(|t| t.to_string()).collect(),
    )
}

pub fn with_syn_scan() -> ScanOption {
    technique("with_syn_scan", &["-sS"])
}

pub fn with_connect_scan() -> ScanOption {
    technique("with_connect_scan", &["-sT"])
}

pub fn with_ack_scan() -> ScanOption {
    technique("with_ack_scan", &["-sA"])
}

pub fn with_window_scan() -> ScanOption {
    technique("with_window_scan", &["-sW"])
}

pub fn with_maimon_scan() -> ScanOption {
    technique("with_maimon_scan", &["-sM"])
}

pub fn with_udp_scan() -> ScanOption {
    technique("with_udp_scan", &["-sU"])
}

pub fn with_tcp_null_scan() -> ScanOption {
    technique("with_tcp_null_scan", &["-sN"])
}

pub fn with_tcp_fin_scan() -> ScanOption {
    technique("with_tcp_fin_scan", &["-sF"])
}

pub fn with_tcp_xmas_scan() -> ScanOption {
    technique("with_tcp_xmas_scan", &["-sX"])
}

pub fn with_sctp_init_scan() -> ScanOption {
    technique("with_sctp_init_scan", &["-sY"])
}

pub fn with_sctp_cookie_echo_scan() -> ScanOption {
    technique("with_sctp_cookie_echo_scan", &["-sZ"])
}

pub fn with_ip_protocol_scan() -> ScanOption {
    technique("with_ip_protocol_scan", &["-sO"])
}

/// Idle scan through `zombie`. A probe port of 0 lets nmap pick one.
pub fn with_idle_scan(zombie: &str, probe_port: u16) -> ScanOption {
    let host = if probe_port == 0 {
        zombie.to_string()
    } else {
        format!("{}:{}", zombie, probe_port)
    };
    technique("with_idle_scan", &["-sI", host.as_str()])
}

/// FTP bounce scan through `relay` (`-b`).
pub fn with_ftp_bounce_scan(relay: &str) -> ScanOption {
    technique("with_ftp_bounce_scan", &["-b", relay])
}

/// TCP header flags for `--scanflags`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum TcpFlag {
    Null = 0,
    Fin = 1,
    Syn = 2,
    Rst = 4,
    Psh = 8,
    Ack = 16,
    Urg = 32,
    Ece = 64,
    Cwr = 128,
    Ns = 256,
}

impl TcpFlag {
    pub fn bit(self) -> u16 {
        self as u16
    }
}

/// Custom TCP scan flags, rendered as a decimal bitmask.
pub fn with_tcp_scan_flags(flags: &[TcpFlag]) -> ScanOption {
    let mask = flags.iter().fold(0u16, |acc, f| acc | f.bit());
    pair("--scanflags", mask.to_string())
}
