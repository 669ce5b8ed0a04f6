//! Static model catalog
//!
//! The model list is bundled into the binary at build time and parsed once
//! at startup. Descriptors are opaque JSON records served through
//! unmodified; there is no runtime file I/O per request.

use serde_json::Value;

use crate::error::{AppError, Result};

static MODELS_JSON: &str = include_str!("../../data/models.json");

/// Immutable in-memory model listing
pub struct ModelCatalog {
    models: Vec<Value>,
}

impl ModelCatalog {
    /// Parse the bundled model list. Fatal at startup if the data is bad.
    pub fn load() -> Result<Self> {
        Self::from_json(MODELS_JSON)
    }

    fn from_json(raw: &str) -> Result<Self> {
        let models: Vec<Value> = serde_json::from_str(raw)
            .map_err(|e| AppError::Catalog(format!("Failed to parse bundled model list: {}", e)))?;
        Ok(Self { models })
    }

    /// All model descriptors, in bundled order
    pub fn models(&self) -> &[Value] {
        &self.models
    }

    /// Number of bundled descriptors
    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
