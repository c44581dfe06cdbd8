/// Opaque error produced by the persistence collaborator.
///
/// Stores return whatever error type their backend uses; the crate boxes it
/// and propagates it unchanged.
pub type StoreError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum RidError {
    /// The effective configuration names a generation strategy this crate
    /// does not know. Raised at population time, never at declaration time.
    #[error("unknown id generation strategy: {strategy}")]
    UnknownStrategy { strategy: String },

    /// An existence check or direct field write failed in the storage layer.
    #[error("storage error during id generation: {0}")]
    Store(#[from] StoreError),

    /// An entity type was referenced before being declared in the registry.
    #[error("entity type not declared: {entity}")]
    UndeclaredEntity { entity: String },
}

pub type Result<T> = std::result::Result<T, RidError>;
