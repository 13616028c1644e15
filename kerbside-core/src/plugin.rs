//! Registry for all council plugins and their ports.

use std::collections::HashMap;
use std::sync::Arc;

use crate::model::{CouncilId, CouncilMeta};
use crate::ports::{SchedulePort, SourceError};

/// Ports implementing a source for a single council.
pub struct CouncilPlugin {
    /// Static metadata describing the council.
    pub meta: CouncilMeta,
    /// Implementation for fetching collection schedules.
    pub schedule_port: Arc<dyn SchedulePort>,
}

/// Registry that resolves plugins by council identifier.
pub struct CouncilRegistry {
    plugins: HashMap<CouncilId, CouncilPlugin>,
}

impl CouncilRegistry {
    /// Build a registry from the provided plugin list.
    #[must_use]
    pub fn new(plugins: Vec<CouncilPlugin>) -> Self {
        let plugins_map = plugins
            .into_iter()
            .map(|plugin| (plugin.meta.id.clone(), plugin))
            .collect();
        Self {
            plugins: plugins_map,
        }
    }

    /// Return metadata for all registered councils.
    #[must_use]
    pub fn councils(&self) -> Vec<CouncilMeta> {
        self.plugins
            .values()
            .map(|plugin| plugin.meta.clone())
            .collect()
    }

    /// Iterator over council metadata.
    pub fn councils_iter(&self) -> impl Iterator<Item = &CouncilMeta> {
        self.plugins.values().map(|plugin| &plugin.meta)
    }

    /// Look up a plugin for the given council.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::UnsupportedCouncil`] when no plugin is registered.
    pub fn plugin(&self, council: &CouncilId) -> Result<&CouncilPlugin, SourceError> {
        self.plugins
            .get(council)
            .ok_or(SourceError::UnsupportedCouncil)
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::model::{Collection, Premises};

    struct StubPort {
        meta: CouncilMeta,
    }

    #[async_trait]
    impl SchedulePort for StubPort {
        fn council(&self) -> &CouncilMeta {
            &self.meta
        }

        async fn collections(
            &self,
            _premises: &Premises,
        ) -> Result<Vec<Collection>, SourceError> {
            Ok(Vec::new())
        }
    }

    fn stub_plugin(slug: &str) -> CouncilPlugin {
        let meta = CouncilMeta {
            id: CouncilId(slug.to_owned()),
            name: format!("{slug} council"),
            description: String::from("stub"),
            url: String::from("https://example.org/"),
        };
        CouncilPlugin {
            meta: meta.clone(),
            schedule_port: Arc::new(StubPort { meta }),
        }
    }

    #[test]
    fn resolves_registered_councils() {
        let registry = CouncilRegistry::new(vec![stub_plugin("renfrewshire")]);

        let plugin = registry
            .plugin(&CouncilId(String::from("renfrewshire")))
            .expect("plugin should be registered");
        assert_eq!(plugin.meta.name, "renfrewshire council");
        assert_eq!(registry.councils().len(), 1);
    }

    #[test]
    fn unknown_council_is_rejected() {
        let registry = CouncilRegistry::new(vec![stub_plugin("renfrewshire")]);

        let missing = registry.plugin(&CouncilId(String::from("gotham")));
        assert!(matches!(missing, Err(SourceError::UnsupportedCouncil)));
    }
}
