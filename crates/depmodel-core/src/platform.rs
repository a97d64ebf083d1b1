use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::artifact::Artifact;

/// Platform descriptors imported by the application and the properties they
/// contribute.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlatformImports {
    #[serde(default)]
    pub boms: Vec<Artifact>,
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

impl PlatformImports {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_bom(&mut self, bom: Artifact) {
        if !self.boms.contains(&bom) {
            self.boms.push(bom);
        }
    }

    /// Record a platform property. An existing value for the same name is
    /// kept and the conflict is logged.
    pub fn add_property(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.properties.get(&name) {
            Some(existing) if *existing != value => {
                tracing::warn!(
                    "Platform property {name} already set to '{existing}', ignoring '{value}'"
                );
            }
            Some(_) => {}
            None => {
                self.properties.insert(name, value);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.boms.is_empty() && self.properties.is_empty()
    }
}
