//! Service and version detection.

use super::{exclusive, flag, out_of_range, ScanOption};
use crate::args::Exclusive;

/// Probes open ports for service and version info (`-sV`).
pub fn with_service_info() -> ScanOption {
    flag("-sV")
}

/// Version scan intensity from 0 (light) to 9 (try all probes).
pub fn with_version_intensity(intensity: u8) -> ScanOption {
    if intensity > 9 {
        return out_of_range("with_version_intensity", "0 and 9");
    }
    exclusive(
        Exclusive::VersionIntensity,
        "with_version_intensity",
        vec!["--version-intensity".to_string(), intensity.to_string()],
    )
}

/// Intensity 2.
pub fn with_version_light() -> ScanOption {
    exclusive(
        Exclusive::VersionIntensity,
        "with_version_light",
        vec!["--version-light".to_string()],
    )
}

/// Intensity 9.
pub fn with_version_all() -> ScanOption {
    exclusive(
        Exclusive::VersionIntensity,
        "with_version_all",
        vec!["--version-all".to_string()],
    )
}

pub fn with_version_trace() -> ScanOption {
    flag("--version-trace")
}
