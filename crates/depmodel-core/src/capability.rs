use serde::{Deserialize, Serialize};

/// Capabilities advertised by one extension.
///
/// The model only carries these; their meaning belongs to whoever consumes
/// the model.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CapabilityContract {
    /// Coordinate of the extension providing the capabilities.
    pub extension: String,
    #[serde(default)]
    pub provides: Vec<String>,
}

impl CapabilityContract {
    pub fn new<I, S>(extension: impl Into<String>, provides: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extension: extension.into(),
            provides: provides.into_iter().map(Into::into).collect(),
        }
    }

    pub fn provides(&self, capability: &str) -> bool {
        self.provides.iter().any(|c| c == capability)
    }
}
