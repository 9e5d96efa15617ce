use std::fmt;
use std::hash::{Hash, Hasher};

use uuid::Uuid;

/* ----- LOCAL IDS (shared by search/, profile/, news/) ----- */

/// Identifier generated when a record is constructed, so a UI list can key its rows.
///
/// It is never serialized and is invisible to the owning record's `PartialEq`
/// and `Hash`: every `LocalId` compares equal to every other and hashes to
/// nothing. Compare [`LocalId::as_uuid`] to tell two instances apart.
#[derive(Clone, Copy)]
pub struct LocalId(Uuid);

impl LocalId {
    /// A fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The underlying value, for use as a row key.
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for LocalId {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for LocalId {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for LocalId {}

impl Hash for LocalId {
    fn hash<H: Hasher>(&self, _state: &mut H) {}
}

impl fmt::Debug for LocalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LocalId({})", self.0)
    }
}

impl fmt::Display for LocalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
