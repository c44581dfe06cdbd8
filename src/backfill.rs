use crate::error::Result;
use crate::populate::{Outcome, populate};
use crate::registry::EntityDef;
use crate::store::Store;

/// Batch size used by [`populate_all`] callers that have no reason to pick
/// their own.
pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// Counts from one backfill run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BackfillReport {
    /// Records visited, populated or not.
    pub visited: usize,
    /// Records whose field was empty and got a freshly generated id.
    pub populated: usize,
}

/// Populate the generated-id field for every record of `entity` that lacks
/// one. For adding ids to a collection that already has data in it.
///
/// Iterates the collection in batches of `batch_size` to bound memory on
/// large tables. New values are written with
/// [`Store::persist_field`], bypassing validation re-entry (validation would
/// just re-run the same empty-field check). `on_each` is invoked for every
/// record with `true` when an id was just assigned.
///
/// Already-populated fields are never touched, so the operation is
/// idempotent and interrupt-safe: a partial run leaves no inconsistent
/// state, re-running picks up where it left off. There is no transactional
/// wrapping around the emptiness check and the write; a concurrent writer
/// populating the same records can race it.
///
/// # Errors
///
/// A persistence failure on one record aborts the run with the error;
/// records populated before it keep their new ids.
pub fn populate_all<S, F>(
    store: &S,
    entity: &EntityDef,
    batch_size: usize,
    mut on_each: F,
) -> Result<BackfillReport>
where
    S: Store,
    F: FnMut(&S::Record, bool),
{
    let config = entity.config();
    let mut report = BackfillReport::default();
    let mut offset = 0;
    loop {
        let batch = store.load_batch(entity.collection(), offset, batch_size)?;
        if batch.is_empty() {
            break;
        }
        offset += batch.len();
        for mut record in batch {
            let outcome = populate(&mut record, config, |candidate| {
                store.exists(entity.collection(), &config.field, candidate)
            })?;
            report.visited += 1;
            if let Outcome::Assigned(value) = &outcome {
                store.persist_field(&record, &config.field, value)?;
                report.populated += 1;
            }
            on_each(&record, outcome.was_assigned());
        }
    }
    tracing::info!(
        collection = entity.collection(),
        visited = report.visited,
        populated = report.populated,
        "id backfill complete"
    );
    Ok(report)
}
