//! Outline documents stored as JSON files.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::ApplicationError;
use crate::domain::{validate_forest, OutlineDocument};
use crate::infrastructure::error::{InfraError, InfraResult};
use crate::infrastructure::traits::FileSystem;

/// Loads and saves `{ "location": ..., "outline": [...] }` documents.
pub struct OutlineRepository {
    fs: Arc<dyn FileSystem>,
}

impl OutlineRepository {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Parse and validate a document. Malformed forests are rejected here,
    /// before any edit sees them.
    #[instrument(level = "debug", skip(self))]
    pub fn load(&self, path: &Path) -> InfraResult<OutlineDocument> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|e| InfraError::io(format!("read {}", path.display()), e))?;
        let doc: OutlineDocument = serde_json::from_str(&content)
            .map_err(|e| InfraError::json(path.display().to_string(), e))?;
        validate_forest(&doc.outline).map_err(ApplicationError::from)?;
        debug!(location = %doc.location, sections = doc.outline.len(), "outline loaded");
        Ok(doc)
    }

    #[instrument(level = "debug", skip(self, doc))]
    pub fn save(&self, path: &Path, doc: &OutlineDocument) -> InfraResult<()> {
        let mut content = serde_json::to_string_pretty(doc)
            .map_err(|e| InfraError::json(path.display().to_string(), e))?;
        content.push('\n');
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !self.fs.exists(parent) {
                self.fs
                    .create_dir_all(parent)
                    .map_err(|e| InfraError::io(format!("create {}", parent.display()), e))?;
            }
        }
        self.fs
            .write(path, &content)
            .map_err(|e| InfraError::io(format!("write {}", path.display()), e))?;
        debug!(path = %path.display(), "outline saved");
        Ok(())
    }
}
