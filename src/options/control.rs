//! Options that configure how the scan runs rather than what nmap is told.

use super::ScanOption;
use crate::exec::OutputSink;
use crate::parser::OutputParser;
use crate::run::{Host, Port};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Runs this binary instead of the `nmap` found on `PATH`.
pub fn with_binary_path(path: impl Into<PathBuf>) -> ScanOption {
    let path = path.into();
    ScanOption::new(move |s| {
        s.binary_path = Some(path);
        Ok(())
    })
}

/// Cancelling `token` kills the running scan.
pub fn with_cancellation(token: CancellationToken) -> ScanOption {
    ScanOption::new(move |s| {
        s.cancel = token;
        Ok(())
    })
}

/// Kills the scan if it has not finished after `timeout`.
pub fn with_timeout(timeout: Duration) -> ScanOption {
    ScanOption::new(move |s| {
        s.timeout = Some(timeout);
        Ok(())
    })
}

/// Drops hosts for which `keep` returns false from the result.
pub fn with_filter_host<F>(keep: F) -> ScanOption
where
    F: Fn(&Host) -> bool + Send + Sync + 'static,
{
    ScanOption::new(move |s| {
        s.host_filters.push(Arc::new(keep));
        Ok(())
    })
}

/// Drops ports for which `keep` returns false from every host.
pub fn with_filter_port<F>(keep: F) -> ScanOption
where
    F: Fn(&Port) -> bool + Send + Sync + 'static,
{
    ScanOption::new(move |s| {
        s.port_filters.push(Arc::new(keep));
        Ok(())
    })
}

/// Streams nmap's stdout as it arrives. The full output is still parsed.
pub fn with_stdout_sink(sink: OutputSink) -> ScanOption {
    ScanOption::new(move |s| {
        s.stdout_sink = Some(sink);
        Ok(())
    })
}

pub fn with_stderr_sink(sink: OutputSink) -> ScanOption {
    ScanOption::new(move |s| {
        s.stderr_sink = Some(sink);
        Ok(())
    })
}

/// Replaces the XML parser.
pub fn with_output_parser<P>(parser: P) -> ScanOption
where
    P: OutputParser + 'static,
{
    ScanOption::new(move |s| {
        s.parser = Arc::new(parser);
        Ok(())
    })
}
