use crate::error::StoreError;

/// A stored record exposing named string fields.
///
/// Only the generated-id field is ever touched through this trait. An empty
/// string is treated the same as an absent value.
pub trait Record {
    /// Current value of the named field, if any.
    fn field(&self, name: &str) -> Option<String>;

    /// Overwrite the named field on the in-memory record.
    fn set_field(&mut self, name: &str, value: &str);
}

/// The persistence collaborator used for collision checks and backfill.
///
/// `collection` is always the topmost shared collection of the entity type's
/// hierarchy; implementations must not narrow queries to a subtype
/// discriminator.
pub trait Store {
    type Record: Record;

    /// True if any record in `collection` has `field == value`.
    fn exists(&self, collection: &str, field: &str, value: &str) -> Result<bool, StoreError>;

    /// Load up to `limit` records of `collection` starting at `offset`.
    /// An empty batch ends iteration.
    fn load_batch(
        &self,
        collection: &str,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<Self::Record>, StoreError>;

    /// Write `field = value` on the stored record directly, bypassing any
    /// validation or lifecycle hooks the embedding application runs on a
    /// normal save.
    fn persist_field(
        &self,
        record: &Self::Record,
        field: &str,
        value: &str,
    ) -> Result<(), StoreError>;
}
