//! Guide generation
//!
//! Plans one article file per outline section and assembles the generated
//! HTML. Writing docx files and zipping them is left to the packaging backend;
//! this service only decides names and collects content.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{walk, OutlineNode};
use crate::infrastructure::traits::ContentGenerator;

const DOWNLOAD_PREFIX: &str = "/outputs";

/// One outline section scheduled for generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedSection {
    pub node_id: String,
    pub title: String,
    pub level: u32,
    pub filename: String,
}

/// Per-section file names in document order plus the archive name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuidePlan {
    pub location: String,
    pub sections: Vec<PlannedSection>,
    pub archive_name: String,
}

impl GuidePlan {
    #[instrument(level = "debug", skip(forest))]
    pub fn build(location: &str, forest: &[OutlineNode]) -> Self {
        let mut names = FileNamer::new(location);
        let mut sections = Vec::new();
        walk(forest, &mut |node| {
            sections.push(PlannedSection {
                node_id: node.id.clone(),
                title: node.title.clone(),
                level: node.level,
                filename: names.next(&node.title),
            });
        });
        debug!(sections = sections.len(), "guide planned");
        Self {
            location: location.to_string(),
            sections,
            archive_name: format!("{location}_guide.zip"),
        }
    }

    /// Download path per node id.
    pub fn downloads(&self) -> BTreeMap<String, String> {
        self.sections
            .iter()
            .map(|s| (s.node_id.clone(), download_url(&s.filename)))
            .collect()
    }

    pub fn archive_url(&self) -> String {
        download_url(&self.archive_name)
    }
}

fn download_url(filename: &str) -> String {
    format!("{DOWNLOAD_PREFIX}/{filename}")
}

/// Keep alphanumerics and ` ._-`, trimmed.
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '.' | '_' | '-'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Hands out `{location}_{title}.docx` names, suffixing `_1`, `_2`, ... on repeats.
struct FileNamer {
    location: String,
    used: HashSet<String>,
}

impl FileNamer {
    fn new(location: &str) -> Self {
        Self {
            location: location.to_string(),
            used: HashSet::new(),
        }
    }

    fn next(&mut self, title: &str) -> String {
        let mut base = sanitize_title(title);
        if base.is_empty() {
            base = "article".to_string();
        }
        let mut name = format!("{}_{}.docx", self.location, base);
        let mut counter = 1;
        while self.used.contains(&name) {
            name = format!("{}_{}_{}.docx", self.location, base, counter);
            counter += 1;
        }
        self.used.insert(name.clone());
        name
    }
}

/// Generated HTML for one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSection {
    pub node_id: String,
    pub filename: String,
    pub html: String,
}

impl RenderedSection {
    /// Article body wrapped in the `node-{id}` anchor div.
    pub fn anchored_html(&self) -> String {
        format!(
            "<div id=\"node-{}\" class=\"mb-8 scroll-mt-4\">\n{}\n</div>\n",
            self.node_id, self.html
        )
    }

    pub fn download_url(&self) -> String {
        download_url(&self.filename)
    }
}

/// `{location}_{title}.docx` for a section rendered on its own. The whole name
/// is sanitized, so no repeat suffix and no fallback title apply.
pub fn single_section_filename(location: &str, title: &str) -> String {
    sanitize_title(&format!("{location}_{title}.docx"))
}

/// File stem for guide-level artifacts; never contains path separators.
pub fn location_stem(location: &str) -> String {
    let stem = sanitize_title(location);
    if stem.is_empty() {
        "outline".to_string()
    } else {
        stem
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideDocument {
    pub location: String,
    pub sections: Vec<RenderedSection>,
    pub archive_name: String,
}

impl GuideDocument {
    /// Download path per node id.
    pub fn downloads(&self) -> BTreeMap<String, String> {
        self.sections
            .iter()
            .map(|s| (s.node_id.clone(), download_url(&s.filename)))
            .collect()
    }

    pub fn archive_url(&self) -> String {
        download_url(&self.archive_name)
    }

    /// All sections concatenated, each wrapped in an anchor div.
    pub fn html_content(&self) -> String {
        self.sections.iter().map(RenderedSection::anchored_html).collect()
    }
}

pub struct GuideService {
    generator: Arc<dyn ContentGenerator>,
}

impl GuideService {
    pub fn new(generator: Arc<dyn ContentGenerator>) -> Self {
        Self { generator }
    }

    /// Generate every section in document order. The first generator error
    /// aborts the render; the caller's forest is only borrowed.
    #[instrument(level = "debug", skip(self, forest))]
    pub fn render(&self, location: &str, forest: &[OutlineNode]) -> ApplicationResult<GuideDocument> {
        let plan = GuidePlan::build(location, forest);
        let mut nodes = Vec::new();
        walk(forest, &mut |node| nodes.push(node));

        let mut sections = Vec::with_capacity(plan.sections.len());
        for (planned, node) in plan.sections.iter().zip(nodes) {
            let html = self
                .generator
                .generate_article(location, node)
                .map_err(|e| ApplicationError::generation(format!("section {}", planned.node_id), e))?;
            sections.push(RenderedSection {
                node_id: planned.node_id.clone(),
                filename: planned.filename.clone(),
                html,
            });
        }
        info!(location, sections = sections.len(), "guide rendered");
        Ok(GuideDocument {
            location: location.to_string(),
            sections,
            archive_name: plan.archive_name,
        })
    }

    /// Regenerate one section on its own, outside any guide plan.
    #[instrument(level = "debug", skip(self, node), fields(node_id = %node.id))]
    pub fn render_section(&self, location: &str, node: &OutlineNode) -> ApplicationResult<RenderedSection> {
        let html = self
            .generator
            .generate_article(location, node)
            .map_err(|e| ApplicationError::generation(format!("section {}", node.id), e))?;
        let section = RenderedSection {
            node_id: node.id.clone(),
            filename: single_section_filename(location, &node.title),
            html,
        };
        debug!(filename = %section.filename, "section rendered");
        Ok(section)
    }
}
