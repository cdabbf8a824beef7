use crate::engine::WalkConfig;
use crate::entry::Entry;
use crate::error::RenameError;

/// A source of entries to rename.
///
/// The engine drains the whole iterator before touching anything, so a
/// source never observes the renames it feeds.
///
/// # Error Handling
///
/// Any `Err` yielded aborts the run before a single rename is applied.
///
/// # Example
///
/// ```rust
/// use rename::{Source, Entry, EntryKind, RenameError};
/// use rename::engine::WalkConfig;
///
/// struct VecSource(Vec<String>);
///
/// impl Source for VecSource {
///     fn walk(&self, _config: &WalkConfig) -> Box<dyn Iterator<Item = Result<Entry, RenameError>> + '_> {
///         Box::new(self.0.iter().map(|name| Ok(Entry {
///             path:  name.into(),
///             name:  name.clone(),
///             kind:  EntryKind::File,
///             depth: 1,
///         })))
///     }
/// }
/// ```
pub trait Source {
    /// Enumerate entries below the source's root.
    ///
    /// `config.recursive` decides whether subdirectories are descended.
    fn walk(&self, config: &WalkConfig) -> Box<dyn Iterator<Item = Result<Entry, RenameError>> + '_>;
}

/// Computes the new filename for an entry.
///
/// Returning a name equal to the input means "leave this entry alone".
///
/// # Example
///
/// ```rust
/// use rename::{Transform, RenameError};
///
/// struct Lowercase;
///
/// impl Transform for Lowercase {
///     fn apply(&self, name: &str) -> Result<String, RenameError> {
///         Ok(name.to_lowercase())
///     }
/// }
/// ```
pub trait Transform {
    /// Map `name` to its new filename.
    ///
    /// Errors here abort the whole run, so reserve them for conditions that
    /// say something is wrong with the transform itself.
    fn apply(&self, name: &str) -> Result<String, RenameError>;
}
