//! rnmap - drive the nmap network scanner from Rust
//!
//! Options are assembled into a validated argument list, nmap is run as a
//! child process that can be cancelled or timed out, and its XML report is
//! parsed into typed results that can be filtered before they are returned.
//!
//! ```no_run
//! use rnmap::options::{with_ports, with_service_info, with_target};
//! use rnmap::Scanner;
//!
//! # async fn scan() -> rnmap::Result<()> {
//! let scanner = Scanner::new([
//!     with_target("scanme.nmap.org"),
//!     with_ports("22,80,443"),
//!     with_service_info(),
//! ])?;
//! let run = scanner.run().await?;
//! for host in &run.hosts {
//!     println!("{:?}: {} ports", host.primary_address(), host.ports.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Warning
//! Only scan networks and systems you are authorized to test.

pub mod args;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod exec;
pub mod filter;
pub mod options;
pub mod parser;
pub mod platform;
pub mod run;
pub mod scanner;

pub use error::{Result, ScanError};
pub use options::ScanOption;
pub use parser::{parse_xml, OutputParser, XmlOutputParser};
pub use run::{Host, Port, Run};
pub use scanner::Scanner;
pub use tokio_util::sync::CancellationToken;
