use std::path::PathBuf;

/// Where a model comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSource {
    /// Tree ensemble serialized as JSON.
    TreeEnsembleJson(PathBuf),
}

impl ModelSource {
    pub fn json(path: impl Into<PathBuf>) -> Self {
        Self::TreeEnsembleJson(path.into())
    }
}
