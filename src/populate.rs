use crate::config::{EffectiveConfig, Strategy};
use crate::error::{Result, StoreError};
use crate::generate;
use crate::registry::EntityDef;
use crate::store::{Record, Store};

/// What happened when population ran on a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The field was empty; this value was generated and assigned.
    Assigned(String),
    /// The field already had a value; nothing was touched.
    AlreadyPopulated,
}

impl Outcome {
    pub const fn was_assigned(&self) -> bool {
        matches!(self, Self::Assigned(_))
    }
}

/// Populate a record's generated-id field, if it is empty.
///
/// `short` strategy: generate a candidate at `config.min_length`, ask
/// `exists` whether any record in the topmost shared collection already has
/// it, grow the length by one character per collision, and assign the first
/// absent candidate. The loop has no upper bound; at the default length the
/// id space (36^5) dwarfs table sizes, and each extra character shrinks the
/// repeat-collision probability geometrically.
///
/// `uuid` strategy: generate once and assign; `exists` is never called.
///
/// The generate-check-assign sequence is not atomic with concurrent record
/// creation. Two in-flight creations can both pass the check for one
/// candidate; a unique index on the field turns that race into a persistence
/// error, and re-running population yields a fresh candidate.
///
/// # Errors
///
/// [`RidError::UnknownStrategy`](crate::RidError::UnknownStrategy) if the
/// configured strategy name is unrecognized (the field is left unset), or
/// [`RidError::Store`](crate::RidError::Store) if the existence check fails.
pub fn populate<R, F>(record: &mut R, config: &EffectiveConfig, exists: F) -> Result<Outcome>
where
    R: Record + ?Sized,
    F: FnMut(&str) -> std::result::Result<bool, StoreError>,
{
    populate_with(record, config, exists, generate::random_id)
}

/// [`populate`] with an injected short-id generator.
///
/// `generate_short` is called with the length for each attempt. Exists so
/// callers (and tests) can script candidates; [`populate`] passes
/// [`generate::random_id`].
pub fn populate_with<R, F, G>(
    record: &mut R,
    config: &EffectiveConfig,
    mut exists: F,
    mut generate_short: G,
) -> Result<Outcome>
where
    R: Record + ?Sized,
    F: FnMut(&str) -> std::result::Result<bool, StoreError>,
    G: FnMut(usize) -> String,
{
    if record
        .field(&config.field)
        .is_some_and(|current| !current.is_empty())
    {
        return Ok(Outcome::AlreadyPopulated);
    }

    match config.strategy.parse::<Strategy>()? {
        Strategy::Uuid => {
            let id = generate::uuid_id();
            record.set_field(&config.field, &id);
            Ok(Outcome::Assigned(id))
        }
        Strategy::Short => {
            let mut length = config.min_length;
            loop {
                let candidate = generate_short(length);
                if !exists(&candidate)? {
                    record.set_field(&config.field, &candidate);
                    return Ok(Outcome::Assigned(candidate));
                }
                tracing::debug!(length, field = %config.field, "id candidate collided, growing length");
                length += 1;
            }
        }
    }
}

/// The pre-persist hook: populate `record`'s id before its first save.
///
/// Call this from the embedding application's persistence pipeline, before a
/// new record is first written. Existence checks run against the entity's
/// declared root collection, unscoped from any subtype discriminator.
/// Idempotent: a record whose field is already set is left untouched.
pub fn ensure_id<S: Store>(store: &S, entity: &EntityDef, record: &mut S::Record) -> Result<Outcome> {
    let config = entity.config();
    populate(record, config, |candidate| {
        store.exists(entity.collection(), &config.field, candidate)
    })
}
