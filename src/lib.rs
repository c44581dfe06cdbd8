//! Short, URL-safe, collision-checked random unique ids ("rids") for
//! persisted records, as an alternative to exposing sequential primary keys
//! in URLs.
//!
//! Declare each entity type in a [`Registry`] (subtypes sharing one physical
//! table all declare the shared root collection), then call
//! [`ensure_id`] from your persistence pipeline before a new record's first
//! save. Ids come from the `short` strategy (random `[a-z0-9]` string,
//! existence-checked, grown one character per collision) or the `uuid`
//! strategy (random UUID v4, no check). [`populate_all`] backfills existing
//! data.
//!
//! ```
//! let id = ridgen::random_id(5);
//! assert_eq!(id.len(), 5);
//! assert!(id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
//! ```

pub mod backfill;
pub mod config;
pub mod error;
pub mod generate;
pub mod populate;
pub mod registry;
pub mod relation;
pub mod store;

pub use backfill::{BackfillReport, DEFAULT_BATCH_SIZE, populate_all};
pub use config::{Defaults, EffectiveConfig, IdOptions, Strategy};
pub use error::{Result, RidError, StoreError};
pub use generate::{random_id, uuid_id};
pub use populate::{Outcome, ensure_id, populate, populate_with};
pub use registry::{EntityDef, Registry};
pub use relation::{Relation, RidLookup, RidRelation};
pub use store::{Record, Store};
