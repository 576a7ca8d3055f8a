use crate::args::ArgumentSet;
use crate::exec::{Execution, OutputSink};
use crate::filter::{self, HostFilter, PortFilter};
use crate::options::ScanOption;
use crate::parser::{OutputParser, XmlOutputParser};
use crate::platform;
use crate::run::Run;
use crate::{Result, ScanError};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Arguments that make nmap write its XML report to stdout.
pub const XML_TO_STDOUT: [&str; 2] = ["-oX", "-"];

/// What nmap prints to stderr when it was given no target.
pub const NO_TARGETS_WARNING: &str = "WARNING: No targets were specified, so 0 hosts scanned.";

/// A configured, not yet executed nmap invocation.
///
/// Built once from a list of options and consumed by [`Scanner::run`].
pub struct Scanner {
    pub(crate) args: ArgumentSet,
    pub(crate) binary_path: Option<PathBuf>,
    pub(crate) cancel: CancellationToken,
    pub(crate) timeout: Option<Duration>,
    pub(crate) host_filters: Vec<HostFilter>,
    pub(crate) port_filters: Vec<PortFilter>,
    pub(crate) stdout_sink: Option<OutputSink>,
    pub(crate) stderr_sink: Option<OutputSink>,
    pub(crate) parser: Arc<dyn OutputParser>,
}

impl Scanner {
    /// Applies `options` in order; the first failing option aborts
    /// construction.
    pub fn new<I>(options: I) -> Result<Self>
    where
        I: IntoIterator<Item = ScanOption>,
    {
        let mut scanner = Self {
            args: ArgumentSet::new(),
            binary_path: None,
            cancel: CancellationToken::new(),
            timeout: None,
            host_filters: Vec::new(),
            port_filters: Vec::new(),
            stdout_sink: None,
            stderr_sink: None,
            parser: Arc::new(XmlOutputParser),
        };

        for option in options {
            option.apply(&mut scanner)?;
        }

        debug!("Scanner configured with arguments {:?}", scanner.args.as_slice());
        Ok(scanner)
    }

    /// Arguments accumulated from the options, without the binary and the
    /// output flags.
    pub fn args(&self) -> &[String] {
        self.args.as_slice()
    }

    pub fn binary_path(&self) -> Option<&Path> {
        self.binary_path.as_deref()
    }

    /// Full argv that [`Scanner::run`] will execute.
    pub fn command_line(&self) -> Vec<String> {
        let binary = platform::resolve_binary(self.binary_path.as_deref());
        let mut argv = vec![binary.to_string_lossy().into_owned()];
        argv.extend(self.process_args());
        argv
    }

    fn process_args(&self) -> Vec<String> {
        XML_TO_STDOUT
            .iter()
            .map(|s| s.to_string())
            .chain(self.args.as_slice().iter().cloned())
            .collect()
    }

    /// Runs nmap and returns its parsed, filtered report.
    ///
    /// A non-zero exit status is not an error as long as stdout parses.
    pub async fn run(self) -> Result<Run> {
        let binary = platform::resolve_binary(self.binary_path.as_deref());
        let args = self.process_args();
        info!("Running {} {}", binary.display(), args.join(" "));

        let mut execution = Execution::new(binary, args)
            .cancellation(self.cancel)
            .deadline(self.timeout)
            .stdout_sink(self.stdout_sink)
            .stderr_sink(self.stderr_sink);
        let output = execution.execute().await?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if stderr.contains(NO_TARGETS_WARNING) {
            return Err(ScanError::NoTargets(stderr.into_owned()));
        }
        if !stderr.trim().is_empty() {
            warn!("nmap stderr: {}", stderr.trim());
        }

        let mut run = self.parser.parse(&output.stdout)?;
        filter::apply(&mut run, &self.host_filters, &self.port_filters);

        info!(
            "Scan finished: {} hosts, {} ports",
            run.hosts.len(),
            run.port_count()
        );
        Ok(run)
    }
}

impl std::fmt::Debug for Scanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scanner")
            .field("args", &self.args.as_slice())
            .field("binary_path", &self.binary_path)
            .field("timeout", &self.timeout)
            .field("host_filters", &self.host_filters.len())
            .field("port_filters", &self.port_filters.len())
            .finish()
    }
}
