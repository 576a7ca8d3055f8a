//! Composable scan options.
//!
//! Every `with_*` function returns a [`ScanOption`] that [`Scanner::new`]
//! applies in order. Options that take numeric input validate it when the
//! function is called; the resulting error is reported when the option is
//! applied, so a whole option list is rejected by the first bad entry.
//!
//! [`Scanner::new`]: crate::scanner::Scanner::new

use crate::args::Exclusive;
use crate::scanner::Scanner;
use crate::{Result, ScanError};
use std::path::Path;
use std::time::Duration;

pub mod control;
pub mod discovery;
pub mod evasion;
pub mod misc;
pub mod os;
pub mod output;
pub mod ports;
pub mod scripts;
pub mod service;
pub mod target;
pub mod techniques;
pub mod timing;

pub use control::*;
pub use discovery::*;
pub use evasion::*;
pub use misc::*;
pub use os::*;
pub use output::*;
pub use ports::*;
pub use scripts::*;
pub use service::*;
pub use target::*;
pub use techniques::*;
pub use timing::*;

type ApplyFn = Box<dyn FnOnce(&mut Scanner) -> Result<()> + Send>;

/// A single configuration step for a [`Scanner`].
pub struct ScanOption(ApplyFn);

impl ScanOption {
    pub fn new<F>(apply: F) -> Self
    where
        F: FnOnce(&mut Scanner) -> Result<()> + Send + 'static,
    {
        Self(Box::new(apply))
    }

    pub(crate) fn apply(self, scanner: &mut Scanner) -> Result<()> {
        (self.0)(scanner)
    }
}

impl std::fmt::Debug for ScanOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ScanOption")
    }
}

/// Appends one fixed token.
pub(crate) fn flag(token: &'static str) -> ScanOption {
    ScanOption::new(move |s| {
        s.args.push(token);
        Ok(())
    })
}

/// Appends a flag followed by its value.
pub(crate) fn pair(flag: &'static str, value: impl Into<String>) -> ScanOption {
    let value = value.into();
    ScanOption::new(move |s| {
        s.args.push_pair(flag, value);
        Ok(())
    })
}

/// Appends `tokens` after claiming `category` on behalf of `option`.
pub(crate) fn exclusive(category: Exclusive, option: &'static str, tokens: Vec<String>) -> ScanOption {
    ScanOption::new(move |s| {
        s.args.claim(category, option)?;
        s.args.extend(tokens);
        Ok(())
    })
}

/// An option that always fails with `err` when applied.
pub(crate) fn rejected(err: ScanError) -> ScanOption {
    ScanOption::new(move |_| Err(err))
}

pub(crate) fn out_of_range(option: &'static str, range: &'static str) -> ScanOption {
    rejected(ScanError::InvalidOption { option, range })
}

pub(crate) fn path_arg(path: impl AsRef<Path>) -> String {
    path.as_ref().to_string_lossy().into_owned()
}

/// nmap accepts times with unit suffixes; milliseconds keep full precision.
pub(crate) fn duration_arg(duration: Duration) -> String {
    format!("{}ms", duration.as_millis())
}
