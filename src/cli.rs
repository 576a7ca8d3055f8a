use crate::options::{self, ScanOption};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "rnmap")]
#[command(about = "Run nmap with validated options and print the parsed report")]
#[command(long_about = r#"
rnmap assembles an nmap command line from validated options, runs nmap
with a deadline and prints the parsed XML report.

WARNING: This tool should only be used on networks and systems you own or
have explicit permission to test. Unauthorized scanning may be illegal.

Simple Usage Examples:
  rnmap 192.168.1.0/24 -p 22,80,443             # Port scan a subnet
  rnmap 192.168.1.100 --technique syn -s        # SYN scan with version detection
  rnmap 10.0.0.1 --timeout 60 --open            # Give up after a minute, open ports only
  rnmap 10.0.0.1 -- --script vuln               # Pass raw nmap arguments
"#)]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Targets: host names, addresses, CIDR networks or ranges
    #[arg(value_name = "TARGET")]
    pub targets: Vec<String>,

    /// Ports to scan (e.g., 80,443 or 1-1000)
    #[arg(short, long, value_name = "PORTS")]
    pub ports: Option<String>,

    /// Scan technique
    #[arg(long, value_enum)]
    pub technique: Option<Technique>,

    /// Probe open ports for service and version info
    #[arg(short, long)]
    pub service_info: bool,

    /// Timing template 0-5 (paranoid to insane)
    #[arg(short = 'T', long, value_name = "LEVEL")]
    pub timing: Option<u8>,

    /// Skip host discovery (assume targets are alive)
    #[arg(long)]
    pub no_ping: bool,

    /// Kill the scan after this many seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Path to the nmap binary
    #[arg(long, value_name = "FILE", env = "RNMAP_BINARY")]
    pub binary: Option<PathBuf>,

    /// Scan profile (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Only keep open ports in the results
    #[arg(long)]
    pub open: bool,

    /// Only keep hosts that are up
    #[arg(long)]
    pub up: bool,

    /// Verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Extra arguments passed to nmap unchanged
    #[arg(last = true, value_name = "NMAP_ARGS")]
    pub nmap_args: Vec<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Technique {
    Syn,
    Connect,
    Ack,
    Window,
    Maimon,
    Udp,
    Null,
    Fin,
    Xmas,
    SctpInit,
    SctpCookieEcho,
    IpProtocol,
}

impl Technique {
    pub fn option(self) -> ScanOption {
        match self {
            Technique::Syn => options::with_syn_scan(),
            Technique::Connect => options::with_connect_scan(),
            Technique::Ack => options::with_ack_scan(),
            Technique::Window => options::with_window_scan(),
            Technique::Maimon => options::with_maimon_scan(),
            Technique::Udp => options::with_udp_scan(),
            Technique::Null => options::with_tcp_null_scan(),
            Technique::Fin => options::with_tcp_fin_scan(),
            Technique::Xmas => options::with_tcp_xmas_scan(),
            Technique::SctpInit => options::with_sctp_init_scan(),
            Technique::SctpCookieEcho => options::with_sctp_cookie_echo_scan(),
            Technique::IpProtocol => options::with_ip_protocol_scan(),
        }
    }
}

impl Cli {
    /// Scan options for everything given on the command line. Targets
    /// come last.
    pub fn scan_options(&self) -> Vec<ScanOption> {
        let mut opts = Vec::new();

        if let Some(binary) = &self.binary {
            opts.push(options::with_binary_path(binary.clone()));
        }
        if let Some(secs) = self.timeout {
            opts.push(options::with_timeout(Duration::from_secs(secs)));
        }
        if let Some(technique) = self.technique {
            opts.push(technique.option());
        }
        if let Some(ports) = &self.ports {
            opts.push(options::with_ports(ports.clone()));
        }
        if self.service_info {
            opts.push(options::with_service_info());
        }
        if let Some(level) = self.timing {
            opts.push(options::with_timing_level(level));
        }
        if self.no_ping {
            opts.push(options::with_skip_host_discovery());
        }
        if self.up {
            opts.push(options::with_filter_host(crate::filter::host_is_up));
        }
        if self.open {
            opts.push(options::with_filter_port(crate::filter::port_is_open));
        }
        if !self.nmap_args.is_empty() {
            opts.push(options::with_custom_arguments(self.nmap_args.clone()));
        }
        opts.push(options::with_targets(self.targets.clone()));

        opts
    }
}
