//! Script source port: fetch the lines of a command script.

use homedex_domain::error::HomeDexError;

/// Resolves script names to their lines.
pub trait ScriptSource {
    /// Read every line of the script `name`, or `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`HomeDexError::Storage`] when the script exists but cannot be
    /// read.
    fn read_script(&self, name: &str) -> Result<Option<Vec<String>>, HomeDexError>;

    /// Stable identity of `name`, used to detect a script running itself.
    fn canonical_name(&self, name: &str) -> String {
        name.to_string()
    }
}
