//! Entity trait: records the server assigns an identifier to.

/// Implemented by catalog items and committed sales. Two entities with the
/// same id are the same record even if their other fields differ between
/// fetches.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;

    /// True when `other` is the same server record, possibly re-fetched.
    fn same_record(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
