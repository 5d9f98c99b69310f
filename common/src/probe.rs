use std::{
    env,
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

use crate::error::ShimError;

/// Resolve `tool` on the current search path.
///
/// This is a pure path lookup, no process is spawned. Candidates that
/// canonicalize to the shim's own executable are skipped, so a wrapper
/// installed under the tool's own name never forwards to itself.
pub fn resolve(tool: &str) -> Result<PathBuf, ShimError> {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("/"));
    resolve_in(tool, env::var_os("PATH"), cwd, env::current_exe().ok())
}

/// Lookup against an explicit search list, working directory and own
/// executable. Split out from [resolve] so callers and tests can probe
/// without touching the process environment.
///
/// A lookup that cannot run at all is treated as "not found" rather than
/// a distinct failure.
pub fn resolve_in<T, P>(tool: &str, paths: Option<T>, cwd: P, own_exe: Option<PathBuf>) -> Result<PathBuf, ShimError>
where
    T: AsRef<OsStr>,
    P: AsRef<Path>,
{
    let own = own_exe.and_then(|exe| fs::canonicalize(exe).ok());
    which::which_in_all(tool, paths, cwd)
        .ok()
        .and_then(|mut candidates| candidates.find(|candidate| !is_self(candidate, own.as_deref())))
        .ok_or_else(|| ShimError::ToolMissing(tool.to_owned()))
}

fn is_self(candidate: &Path, own: Option<&Path>) -> bool {
    match own {
        Some(own) => fs::canonicalize(candidate).map(|resolved| resolved == own).unwrap_or(false),
        None => false,
    }
}
