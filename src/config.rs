use crate::options::{self, ScanOption};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Prefix of environment variables that override profile fields,
/// e.g. `RNMAP_TIMEOUT_SECS=60`.
pub const ENV_PREFIX: &str = "RNMAP";

/// Reusable scan settings, usually kept in a TOML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanProfile {
    pub binary_path: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
    pub timing: Option<u8>, // 0-5 (0=paranoid, 5=insane)
    pub ports: Option<String>,
    pub service_detection: bool,
    pub skip_host_discovery: bool,
    pub open_only: bool,
    pub extra_arguments: Vec<String>,
}

impl ScanProfile {
    pub fn load_from_file(path: &str) -> crate::Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn save_to_file(&self, path: &str) -> crate::Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| crate::ScanError::InvalidInput(format!("Failed to serialize profile: {}", e)))?;

        std::fs::write(path, toml_string)?;
        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Turns the profile into scan options. Validation happens when the
    /// options are applied, exactly as for hand-written ones.
    pub fn into_options(self) -> Vec<ScanOption> {
        let mut opts = Vec::new();

        if let Some(path) = self.binary_path {
            opts.push(options::with_binary_path(path));
        }
        if let Some(secs) = self.timeout_secs {
            opts.push(options::with_timeout(Duration::from_secs(secs)));
        }
        if let Some(level) = self.timing {
            opts.push(options::with_timing_level(level));
        }
        if let Some(ports) = self.ports {
            opts.push(options::with_ports(ports));
        }
        if self.service_detection {
            opts.push(options::with_service_info());
        }
        if self.skip_host_discovery {
            opts.push(options::with_skip_host_discovery());
        }
        if self.open_only {
            opts.push(options::with_open_only());
        }
        if !self.extra_arguments.is_empty() {
            opts.push(options::with_custom_arguments(self.extra_arguments));
        }

        opts
    }
}
