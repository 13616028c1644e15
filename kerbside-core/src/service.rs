//! High-level service facade combining all sources.

use std::sync::Arc;

use crate::model::{Collection, CouncilId, Premises};
use crate::plugin::CouncilRegistry;
use crate::ports::SourceError;

/// Public entry point for listing councils and fetching schedules.
pub struct KerbsideService {
    registry: Arc<CouncilRegistry>,
}

impl KerbsideService {
    /// Create a new service bound to the provided registry.
    #[must_use]
    pub fn new(registry: Arc<CouncilRegistry>) -> Self {
        Self { registry }
    }

    /// List all available councils and their display names.
    #[must_use]
    pub fn councils(&self) -> Vec<(CouncilId, String)> {
        self.registry
            .councils()
            .into_iter()
            .map(|meta| (meta.id, meta.name))
            .collect()
    }

    /// Load the upcoming collections for a property served by the given council.
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] if the council is unsupported or the source
    /// request fails.
    pub async fn collections_for(
        &self,
        council: CouncilId,
        premises: &Premises,
    ) -> Result<Vec<Collection>, SourceError> {
        let plugin = self.registry.plugin(&council)?;
        plugin.schedule_port.collections(premises).await
    }
}
