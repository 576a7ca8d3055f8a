//! Firewall/IDS evasion and spoofing.
//!
//! # Warning
//! Only use these against networks you are authorized to test.

use super::{flag, pair, rejected, ScanOption};
use crate::ScanError;
use std::net::IpAddr;

/// Fragments packets (`-f`).
pub fn with_fragment_packets() -> ScanOption {
    flag("-f")
}

/// Custom fragment size; nmap requires a positive multiple of 8.
pub fn with_mtu(offset: u16) -> ScanOption {
    if offset == 0 || offset % 8 != 0 {
        return rejected(ScanError::InvalidInput(format!(
            "with_mtu() expects a positive multiple of 8, got {}",
            offset
        )));
    }
    pair("--mtu", offset.to_string())
}

/// Cloaks the scan with decoys (`-D`). `ME` marks the real address.
pub fn with_decoys<I, S>(decoys: I) -> ScanOption
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let list = decoys
        .into_iter()
        .map(Into::into)
        .collect::<Vec<String>>()
        .join(",");
    pair("-D", list)
}

pub fn with_spoof_ip_address(ip: IpAddr) -> ScanOption {
    pair("-S", ip.to_string())
}

pub fn with_interface(interface: impl Into<String>) -> ScanOption {
    pair("-e", interface)
}

pub fn with_source_port(port: u16) -> ScanOption {
    pair("-g", port.to_string())
}

/// Relays connections through HTTP/SOCKS4 proxies.
pub fn with_proxies<I, S>(proxies: I) -> ScanOption
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let list = proxies
        .into_iter()
        .map(Into::into)
        .collect::<Vec<String>>()
        .join(",");
    pair("--proxies", list)
}

/// Appends a custom hex payload to sent packets.
pub fn with_hex_data(hex: impl Into<String>) -> ScanOption {
    pair("--data", hex)
}

pub fn with_ascii_data(data: impl Into<String>) -> ScanOption {
    pair("--data-string", data)
}

pub fn with_data_length(length: u32) -> ScanOption {
    pair("--data-length", length.to_string())
}

pub fn with_ip_options(options: impl Into<String>) -> ScanOption {
    pair("--ip-options", options)
}

pub fn with_ip_ttl(ttl: u8) -> ScanOption {
    pair("--ttl", ttl.to_string())
}

/// MAC address, prefix or vendor name; `0` picks a random one.
pub fn with_spoof_mac(mac: impl Into<String>) -> ScanOption {
    pair("--spoof-mac", mac)
}

pub fn with_bad_sum() -> ScanOption {
    flag("--badsum")
}
