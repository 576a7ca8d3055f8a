use super::{flag, pair, path_arg, ScanOption};
use std::path::Path;

pub fn with_ipv6_scanning() -> ScanOption {
    flag("-6")
}

/// OS detection, version detection, script scanning and traceroute (`-A`).
pub fn with_aggressive_scan() -> ScanOption {
    flag("-A")
}

pub fn with_data_dir(dir: impl AsRef<Path>) -> ScanOption {
    pair("--datadir", path_arg(dir))
}

pub fn with_send_ethernet() -> ScanOption {
    flag("--send-eth")
}

pub fn with_send_ip() -> ScanOption {
    flag("--send-ip")
}

pub fn with_privileged() -> ScanOption {
    flag("--privileged")
}

pub fn with_unprivileged() -> ScanOption {
    flag("--unprivileged")
}

/// Appends raw arguments verbatim, for flags not covered elsewhere.
pub fn with_custom_arguments<I, S>(args: I) -> ScanOption
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(Into::into).collect();
    ScanOption::new(move |s| {
        s.args.extend(args);
        Ok(())
    })
}
