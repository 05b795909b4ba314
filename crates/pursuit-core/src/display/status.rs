//! Status and confirmation message types for operation feedback.

use std::fmt;

use crate::tracker::SyncWarning;

/// Wrapper type for displaying operation confirmation messages.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", if self.success { "Success:" } else { "Error:" }, self.message)
    }
}

/// Banner listing remote failures of an otherwise applied mutation.
///
/// Renders nothing when every remote call succeeded.
///
/// ```rust
/// use pursuit_core::{
///     display::SyncWarnings,
///     error::RemoteError,
///     remote::Table,
///     tracker::SyncWarning,
/// };
///
/// let warnings = vec![SyncWarning {
///     operation: "delete company",
///     table: Table::Companies,
///     error: RemoteError::Unavailable("timeout".to_string()),
/// }];
/// let output = SyncWarnings(&warnings).to_string();
/// assert!(output.contains("saved locally"));
/// assert!(SyncWarnings(&[]).to_string().is_empty());
/// ```
pub struct SyncWarnings<'a>(pub &'a [SyncWarning]);

impl fmt::Display for SyncWarnings<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return Ok(());
        }
        writeln!(f, "> **Warning**: saved locally, but not every change reached the store.")?;
        for warning in self.0 {
            writeln!(f, "> - {warning}")?;
        }
        writeln!(f)
    }
}
