use super::{flag, ScanOption};

/// Enables OS detection (`-O`).
pub fn with_os_detection() -> ScanOption {
    flag("-O")
}

/// Only attempts OS detection against promising targets.
pub fn with_os_scan_limit() -> ScanOption {
    flag("--osscan-limit")
}

pub fn with_os_scan_guess() -> ScanOption {
    flag("--osscan-guess")
}
