//! Environment store port.

/// Key-value view of a process environment.
///
/// Production code binds this to the real process environment; tests bind it
/// to an in-memory map so that reads and override write-backs stay local.
pub trait EnvStore: Send + Sync {
    /// Value of a variable, if set.
    fn get(&self, key: &str) -> Option<String>;

    /// Set a variable.
    ///
    /// Writes are a global side effect for the process-backed store;
    /// concurrent callers must serialize them.
    fn set(&self, key: &str, value: &str);

    /// Snapshot of every variable.
    fn vars(&self) -> Vec<(String, String)>;

    /// Whether a variable is set.
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}
