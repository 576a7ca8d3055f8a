/// 平台兼容性模块
/// Locating the nmap executable on Windows and Unix-like systems.

use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Name nmap is installed under.
#[cfg(windows)]
pub const DEFAULT_BINARY: &str = "nmap.exe";
#[cfg(not(windows))]
pub const DEFAULT_BINARY: &str = "nmap";

/// Searches `PATH` for nmap.
pub fn find_nmap() -> Option<PathBuf> {
    find_executable(DEFAULT_BINARY)
}

/// Searches `PATH` for an executable called `name`.
pub fn find_executable(name: impl AsRef<OsStr>) -> Option<PathBuf> {
    let name = name.as_ref();
    let path = env::var_os("PATH")?;
    env::split_paths(&path)
        .map(|dir| dir.join(name))
        .find(|candidate| is_executable(candidate))
}

/// Resolves the binary a scan should launch: an explicit path wins,
/// otherwise `PATH` is searched. When nothing is found the bare name is
/// returned so the spawn itself reports the OS error.
pub fn resolve_binary(custom: Option<&Path>) -> PathBuf {
    match custom {
        Some(path) => path.to_path_buf(),
        None => find_nmap().unwrap_or_else(|| PathBuf::from(DEFAULT_BINARY)),
    }
}

pub fn is_executable(path: &Path) -> bool {
    #[cfg(unix)]
    return unix::is_executable(path);

    #[cfg(windows)]
    return windows::is_executable(path);

    #[cfg(not(any(windows, unix)))]
    {
        path.is_file()
    }
}

/// Unix特定功能模块（Linux、macOS等）
#[cfg(unix)]
mod unix {
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;

    pub fn is_executable(path: &Path) -> bool {
        match path.metadata() {
            Ok(meta) => meta.is_file() && meta.permissions().mode() & 0o111 != 0,
            Err(_) => false,
        }
    }
}

/// Windows特定功能模块
#[cfg(windows)]
mod windows {
    use std::path::Path;

    pub fn is_executable(path: &Path) -> bool {
        path.is_file()
    }
}
