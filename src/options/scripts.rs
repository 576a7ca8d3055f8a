//! NSE script scanning.

use super::{exclusive, flag, path_arg, ScanOption};
use crate::args::Exclusive;
use std::path::Path;

/// Runs the default script set (`-sC`).
pub fn with_default_script() -> ScanOption {
    flag("-sC")
}

/// Comma separated scripts, directories or categories.
pub fn with_scripts(scripts: &str) -> ScanOption {
    let token = format!("--script={}", scripts);
    ScanOption::new(move |s| {
        s.args.push(token);
        Ok(())
    })
}

/// Passes arguments to scripts as one `--script-args=k=v,...` token.
///
/// Pairs are joined in iteration order, so a `HashMap` gives no ordering
/// guarantee. Several maps can be merged with `Iterator::chain`.
pub fn with_script_arguments<I, K, V>(arguments: I) -> ScanOption
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let joined = arguments
        .into_iter()
        .map(|(k, v)| format!("{}={}", k.as_ref(), v.as_ref()))
        .collect::<Vec<_>>()
        .join(",");
    exclusive(
        Exclusive::ScriptArguments,
        "with_script_arguments",
        vec![format!("--script-args={}", joined)],
    )
}

pub fn with_script_arguments_file(path: impl AsRef<Path>) -> ScanOption {
    let token = format!("--script-args-file={}", path_arg(path));
    ScanOption::new(move |s| {
        s.args.push(token);
        Ok(())
    })
}

pub fn with_script_trace() -> ScanOption {
    flag("--script-trace")
}

pub fn with_script_update_db() -> ScanOption {
    flag("--script-updatedb")
}
