//! Method file descriptors.
//!
//! A method file names the implementation it binds to. The first line that is
//! neither blank nor a `#` comment is the entry symbol:
//!
//! ```text
//! # v1/users/create.method
//! users.create
//! ```
//!
//! A file without such a line binds to the implementation registered under
//! its own relative name (`users/create` for the file above).

use verso_core::{LoadError, MethodFile};

/// Extract the explicit entry symbol from descriptor text.
///
/// Returns `Ok(None)` when the descriptor has no symbol line, and an error
/// message when the symbol line is not a single token.
pub fn entry_symbol(source: &str) -> Result<Option<&str>, String> {
    for line in source.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line.chars().any(char::is_whitespace) {
            return Err(format!("entry symbol `{line}` contains whitespace"));
        }
        return Ok(Some(line));
    }
    Ok(None)
}

/// Read `file` and resolve the symbol it binds to.
pub(crate) async fn read_symbol(file: &MethodFile) -> Result<String, LoadError> {
    let source = tokio::fs::read_to_string(file.path())
        .await
        .map_err(|source| LoadError::Read {
            path: file.path().to_path_buf(),
            source,
        })?;

    match entry_symbol(&source) {
        Ok(Some(symbol)) => Ok(symbol.to_string()),
        Ok(None) => Ok(file.relative_name()),
        Err(reason) => Err(LoadError::Malformed {
            path: file.path().to_path_buf(),
            reason,
        }),
    }
}
