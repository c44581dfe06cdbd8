use std::collections::HashMap;

use crate::config::{Defaults, EffectiveConfig, IdOptions};
use crate::error::{Result, RidError};
use crate::store::Record;

/// One declared entity type: its name, the topmost shared collection its
/// uniqueness checks run against, and its resolved id configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityDef {
    name: String,
    collection: String,
    config: EffectiveConfig,
}

impl EntityDef {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The root collection for uniqueness checks. For a single-table
    /// hierarchy this is the shared physical table, never a subtype view.
    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub const fn config(&self) -> &EffectiveConfig {
        &self.config
    }

    /// The record's generated id, suitable for use as its external key
    /// (e.g. in a URL path segment). `None` until populated.
    pub fn external_id<R: Record + ?Sized>(&self, record: &R) -> Option<String> {
        record.field(&self.config.field).filter(|v| !v.is_empty())
    }
}

/// Registry of entity types that carry generated ids.
///
/// Built once at application start from an explicit [`Defaults`] value.
/// Each declaration snapshots the defaults in effect at that moment, so
/// changing the defaults later only affects later declarations.
#[derive(Debug, Default)]
pub struct Registry {
    defaults: Defaults,
    entities: HashMap<String, EntityDef>,
}

impl Registry {
    pub fn new(defaults: Defaults) -> Self {
        Self {
            defaults,
            entities: HashMap::new(),
        }
    }

    /// Replace the defaults used by subsequent declarations. Already-declared
    /// entity types keep their snapshot.
    pub fn set_defaults(&mut self, defaults: Defaults) {
        self.defaults = defaults;
    }

    pub const fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    /// Declare that `name` carries a generated id, checked for uniqueness
    /// against `collection`.
    ///
    /// Subtypes sharing one physical table must all be declared with the
    /// root collection, so sibling subtypes cannot independently hand out
    /// colliding ids. The strategy name in `options` is not validated here;
    /// an unknown name surfaces when a record is first populated.
    pub fn declare(
        &mut self,
        name: impl Into<String>,
        collection: impl Into<String>,
        options: &IdOptions,
    ) -> EntityDef {
        let name = name.into();
        let def = EntityDef {
            name: name.clone(),
            collection: collection.into(),
            config: options.resolve(&self.defaults),
        };
        self.entities.insert(name, def.clone());
        def
    }

    /// Look up a declared entity type.
    ///
    /// # Errors
    ///
    /// Returns [`RidError::UndeclaredEntity`] if `name` was never declared.
    pub fn entity(&self, name: &str) -> Result<&EntityDef> {
        self.entities
            .get(name)
            .ok_or_else(|| RidError::UndeclaredEntity {
                entity: name.to_string(),
            })
    }
}
