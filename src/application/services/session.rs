//! Outline editing session
//!
//! Owns the single current forest for one location and swaps it for the
//! store's result after every edit.

use tracing::{debug, info, instrument, warn};

use crate::application::services::guide::{GuideDocument, GuideService, RenderedSection};
use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::resolver::{contains, find_node};
use crate::domain::{
    collect_ids, validate_forest, Forest, OutlineDocument, OutlineRequest, OutlineStore,
};
use crate::infrastructure::traits::OutlineProvider;

/// One structural edit, addressed by node id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutlineEdit {
    Rename { id: String, title: String },
    InsertChild { parent_id: String },
    InsertSibling { anchor_id: String },
    Delete { id: String },
    AppendTopLevel,
}

impl OutlineEdit {
    /// Id the edit resolves against, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            OutlineEdit::Rename { id, .. } | OutlineEdit::Delete { id } => Some(id),
            OutlineEdit::InsertChild { parent_id } => Some(parent_id),
            OutlineEdit::InsertSibling { anchor_id } => Some(anchor_id),
            OutlineEdit::AppendTopLevel => None,
        }
    }
}

#[derive(Debug)]
pub struct OutlineSession {
    location: String,
    forest: Forest,
    store: OutlineStore,
}

impl OutlineSession {
    /// Fetch a fresh outline. Provider failures and empty outlines are
    /// generation failures; nothing partial is kept.
    #[instrument(level = "debug", skip(provider, store))]
    pub fn start(
        provider: &dyn OutlineProvider,
        request: &OutlineRequest,
        store: OutlineStore,
    ) -> ApplicationResult<Self> {
        request.validate()?;
        let forest = provider
            .generate_outline(request)
            .map_err(|e| ApplicationError::generation(format!("outline for {}", request.location), e))?;
        if forest.is_empty() {
            return Err(ApplicationError::EmptyOutline(request.location.clone()));
        }
        validate_forest(&forest)?;
        info!(location = %request.location, sections = forest.len(), "outline ready");
        Ok(Self {
            location: request.location.clone(),
            forest,
            store,
        })
    }

    pub fn from_document(doc: OutlineDocument, store: OutlineStore) -> ApplicationResult<Self> {
        validate_forest(&doc.outline)?;
        Ok(Self {
            location: doc.location,
            forest: doc.outline,
            store,
        })
    }

    pub fn to_document(&self) -> OutlineDocument {
        OutlineDocument {
            location: self.location.clone(),
            outline: self.forest.clone(),
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn forest(&self) -> &Forest {
        &self.forest
    }

    /// Apply one edit and replace the current forest with the result.
    /// Returns whether anything changed; unknown ids leave the forest as is.
    #[instrument(level = "debug", skip(self))]
    pub fn apply(&mut self, edit: &OutlineEdit) -> bool {
        let next = match edit {
            OutlineEdit::Rename { id, title } => self.store.rename(&self.forest, id, title),
            OutlineEdit::InsertChild { parent_id } => {
                self.store.insert_child(&self.forest, parent_id)
            }
            OutlineEdit::InsertSibling { anchor_id } => {
                self.store.insert_sibling(&self.forest, anchor_id)
            }
            OutlineEdit::Delete { id } => self.store.delete_subtree(&self.forest, id),
            OutlineEdit::AppendTopLevel => self.store.append_top_level(&self.forest),
        };
        if !self.resolves(edit) {
            warn!(target_id = ?edit.target(), "edit target not in outline");
        }
        let changed = next != self.forest;
        self.forest = next;
        changed
    }

    /// Whether the edit's target id exists in the current forest.
    pub fn resolves(&self, edit: &OutlineEdit) -> bool {
        edit.target()
            .map_or(true, |id| contains(&self.forest, id))
    }

    /// Hand the current forest to content generation. The forest is only
    /// borrowed, so a failed render leaves the session as it was.
    #[instrument(level = "debug", skip(self, guide), fields(location = %self.location))]
    pub fn render(&self, guide: &GuideService) -> ApplicationResult<GuideDocument> {
        guide.render(&self.location, &self.forest)
    }

    /// Regenerate the single section `id`. `None` when the id does not resolve.
    #[instrument(level = "debug", skip(self, guide), fields(location = %self.location))]
    pub fn render_section(
        &self,
        guide: &GuideService,
        id: &str,
    ) -> ApplicationResult<Option<RenderedSection>> {
        match find_node(&self.forest, id) {
            Some(node) => guide.render_section(&self.location, node).map(Some),
            None => {
                warn!(id, "section not in outline");
                Ok(None)
            }
        }
    }

    /// Current ids in document order.
    pub fn ids(&self) -> Vec<String> {
        let ids = collect_ids(&self.forest);
        debug!(count = ids.len(), "listing ids");
        ids
    }
}
