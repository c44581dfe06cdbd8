use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RidError;

/// How an id value is produced for a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Random `[a-z0-9]` string at a minimum length, existence-checked
    /// against the collection, grown one character per collision.
    Short,
    /// Random UUID v4, assigned without any existence check.
    Uuid,
}

impl Strategy {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Uuid => "uuid",
        }
    }
}

impl FromStr for Strategy {
    type Err = RidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "short" => Ok(Self::Short),
            "uuid" => Ok(Self::Uuid),
            other => Err(RidError::UnknownStrategy {
                strategy: other.to_string(),
            }),
        }
    }
}

/// Crate-wide default id settings, constructed once at application start and
/// passed into each entity-type declaration.
///
/// Strategy names are kept as strings because they typically arrive from
/// application configuration; they are validated when a record is populated,
/// not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub field: String,
    pub strategy: String,
    pub min_length: usize,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            field: "rid".to_string(),
            strategy: Strategy::Short.as_str().to_string(),
            min_length: 5,
        }
    }
}

impl Defaults {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    #[must_use]
    pub fn strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = strategy.into();
        self
    }

    #[must_use]
    pub const fn min_length(mut self, len: usize) -> Self {
        self.min_length = len;
        self
    }
}

/// Per-entity-type overrides. Unset keys inherit from the [`Defaults`] in
/// effect at declaration time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdOptions {
    pub field: Option<String>,
    pub strategy: Option<String>,
    pub min_length: Option<usize>,
}

impl IdOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    #[must_use]
    pub fn strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = Some(strategy.into());
        self
    }

    #[must_use]
    pub const fn min_length(mut self, len: usize) -> Self {
        self.min_length = Some(len);
        self
    }

    /// Merge these options over `defaults`, key by key.
    pub fn resolve(&self, defaults: &Defaults) -> EffectiveConfig {
        EffectiveConfig {
            field: self.field.clone().unwrap_or_else(|| defaults.field.clone()),
            strategy: self
                .strategy
                .clone()
                .unwrap_or_else(|| defaults.strategy.clone()),
            min_length: self.min_length.unwrap_or(defaults.min_length),
        }
    }
}

/// Settings resolved for one entity type at declaration time. Immutable for
/// the lifetime of the declaration; later changes to the defaults never
/// affect it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveConfig {
    /// Name of the record field holding the generated id.
    pub field: String,
    /// Strategy name, validated via [`Strategy::from_str`] at population time.
    pub strategy: String,
    /// Starting length for `short` ids; ignored by `uuid`.
    pub min_length: usize,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        IdOptions::default().resolve(&Defaults::default())
    }
}
