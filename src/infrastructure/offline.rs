//! Offline collaborators
//!
//! Used when no generation backend is configured: a fixed demo outline and
//! placeholder article bodies.

use html_escape::encode_text;
use tracing::{debug, instrument};

use crate::domain::{Forest, OutlineNode, OutlineRequest};
use crate::infrastructure::traits::{ContentGenerator, OutlineProvider, ProviderError};

/// Returns the same three-chapter demo outline for every location.
#[derive(Debug, Default, Clone)]
pub struct OfflineOutlineProvider;

impl OutlineProvider for OfflineOutlineProvider {
    #[instrument(level = "debug", skip(self))]
    fn generate_outline(&self, request: &OutlineRequest) -> Result<Forest, ProviderError> {
        debug!(location = %request.location, "generating demo outline");
        Ok(demo_outline())
    }
}

fn chapter(id: &str, title: &str, sections: &[(&str, &str)]) -> OutlineNode {
    OutlineNode::new(id, title, 1).with_children(
        sections
            .iter()
            .map(|(id, title)| OutlineNode::new(*id, *title, 2))
            .collect(),
    )
}

pub fn demo_outline() -> Forest {
    vec![
        chapter(
            "1",
            "Destination Overview & Highlights",
            &[
                ("1-1", "Geography & Climate"),
                ("1-2", "History & Culture"),
                ("1-3", "Top 3 Must-Do Experiences"),
            ],
        ),
        chapter(
            "2",
            "Food & Restaurant Tips",
            &[
                ("2-1", "Local Specialties to Try"),
                ("2-2", "Good-Value Restaurants"),
            ],
        ),
        chapter(
            "3",
            "Where to Stay",
            &[
                ("3-1", "Choosing a Neighbourhood"),
                ("3-2", "Popular Hotels & Guesthouses"),
            ],
        ),
    ]
}

/// Placeholder article naming the location and section.
#[derive(Debug, Default, Clone)]
pub struct OfflineContentGenerator;

impl ContentGenerator for OfflineContentGenerator {
    fn generate_article(&self, location: &str, node: &OutlineNode) -> Result<String, ProviderError> {
        let location = encode_text(location);
        let title = encode_text(&node.title);
        Ok(format!(
            r#"<div class="article-container">
<h{level}>{title}</h{level}>
<p>Demo mode: content about <strong>{location}</strong> - <strong>{title}</strong> will appear here once a generation backend is configured.</p>
</div>"#,
            level = node.level.clamp(1, 6),
        ))
    }
}
