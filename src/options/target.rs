//! Target specification.

use super::{exclusive, path_arg, ScanOption};
use crate::args::Exclusive;
use std::path::Path;

/// Adds a host name, address, network or range to scan.
pub fn with_target(target: impl Into<String>) -> ScanOption {
    let target = target.into();
    ScanOption::new(move |s| {
        s.args.push(target);
        Ok(())
    })
}

pub fn with_targets<I, S>(targets: I) -> ScanOption
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let targets: Vec<String> = targets.into_iter().map(Into::into).collect();
    ScanOption::new(move |s| {
        s.args.extend(targets);
        Ok(())
    })
}

/// Reads targets from a file (`-iL`).
pub fn with_target_input(path: impl AsRef<Path>) -> ScanOption {
    exclusive(
        Exclusive::TargetInput,
        "with_target_input",
        vec!["-iL".to_string(), path_arg(path)],
    )
}

/// Scans `count` random hosts (`-iR`).
pub fn with_random_targets(count: u32) -> ScanOption {
    exclusive(
        Exclusive::RandomTargets,
        "with_random_targets",
        vec!["-iR".to_string(), count.to_string()],
    )
}

/// Excludes a comma separated list of hosts or networks.
pub fn with_target_exclusion(spec: impl Into<String>) -> ScanOption {
    exclusive(
        Exclusive::TargetExclusion,
        "with_target_exclusion",
        vec!["--exclude".to_string(), spec.into()],
    )
}

pub fn with_target_exclusion_input(path: impl AsRef<Path>) -> ScanOption {
    exclusive(
        Exclusive::TargetExclusion,
        "with_target_exclusion_input",
        vec!["--excludefile".to_string(), path_arg(path)],
    )
}
