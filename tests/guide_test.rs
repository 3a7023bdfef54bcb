//! Tests for guide planning and rendering

use std::sync::{Arc, Mutex};

use rstest::{fixture, rstest};

use tripguide::application::services::{GuidePlan, GuideService};
use tripguide::application::ApplicationError;
use tripguide::domain::{Forest, OutlineNode};
use tripguide::infrastructure::traits::{ContentGenerator, ProviderError};
use tripguide::infrastructure::OfflineContentGenerator;
use tripguide::util::testing;

/// Echoes the node title and records call order.
#[derive(Default)]
struct EchoGenerator {
    calls: Mutex<Vec<String>>,
}

impl ContentGenerator for EchoGenerator {
    fn generate_article(&self, location: &str, node: &OutlineNode) -> Result<String, ProviderError> {
        self.calls.lock().unwrap().push(node.id.clone());
        Ok(format!("<p>{location}: {}</p>", node.title))
    }
}

/// Fails on one node id.
struct FailOn(&'static str);

impl ContentGenerator for FailOn {
    fn generate_article(&self, _location: &str, node: &OutlineNode) -> Result<String, ProviderError> {
        if node.id == self.0 {
            Err(ProviderError::new("model unavailable"))
        } else {
            Ok(String::from("<p>ok</p>"))
        }
    }
}

#[fixture]
fn forest() -> Forest {
    testing::init_test_setup();
    vec![
        OutlineNode::new("1", "Food & Drink", 1).with_children(vec![
            OutlineNode::new("1-1", "Markets", 2),
            OutlineNode::new("1-2", "Markets", 2),
        ]),
        OutlineNode::new("2", "???", 1),
    ]
}

#[rstest]
fn given_forest_when_planning_then_sections_in_document_order(forest: Forest) {
    let plan = GuidePlan::build("Hanoi", &forest);

    let ids: Vec<_> = plan.sections.iter().map(|s| s.node_id.as_str()).collect();
    assert_eq!(ids, vec!["1", "1-1", "1-2", "2"]);
    let files: Vec<_> = plan.sections.iter().map(|s| s.filename.as_str()).collect();
    assert_eq!(
        files,
        vec![
            "Hanoi_Food  Drink.docx",
            "Hanoi_Markets.docx",
            "Hanoi_Markets_1.docx",
            "Hanoi_article.docx",
        ]
    );
    assert_eq!(plan.archive_name, "Hanoi_guide.zip");
    assert_eq!(plan.archive_url(), "/outputs/Hanoi_guide.zip");
}

#[rstest]
fn given_plan_when_listing_downloads_then_keyed_by_node_id(forest: Forest) {
    let plan = GuidePlan::build("Hanoi", &forest);
    let downloads = plan.downloads();
    assert_eq!(downloads.len(), 4);
    assert_eq!(downloads["1-2"], "/outputs/Hanoi_Markets_1.docx");
}

#[test]
fn given_empty_forest_when_planning_then_no_sections() {
    let plan = GuidePlan::build("Nowhere", &[]);
    assert!(plan.sections.is_empty());
    assert_eq!(plan.archive_name, "Nowhere_guide.zip");
}

#[rstest]
fn given_generator_when_rendering_then_every_section_in_order(forest: Forest) {
    let generator = Arc::new(EchoGenerator::default());
    let service = GuideService::new(generator.clone());

    let guide = service.render("Hanoi", &forest).unwrap();

    assert_eq!(*generator.calls.lock().unwrap(), vec!["1", "1-1", "1-2", "2"]);
    assert_eq!(guide.sections.len(), 4);
    assert_eq!(guide.sections[1].html, "<p>Hanoi: Markets</p>");
    assert_eq!(guide.sections[2].filename, "Hanoi_Markets_1.docx");
}

#[rstest]
fn given_rendered_guide_when_joining_html_then_each_section_anchored(forest: Forest) {
    let service = GuideService::new(Arc::new(EchoGenerator::default()));
    let html = service.render("Hanoi", &forest).unwrap().html_content();

    assert!(html.starts_with("<div id=\"node-1\" class=\"mb-8 scroll-mt-4\">\n"));
    for id in ["1", "1-1", "1-2", "2"] {
        assert_eq!(html.matches(&format!("id=\"node-{id}\"")).count(), 1);
    }
    let first = html.find("node-1-1").unwrap();
    let second = html.find("node-1-2").unwrap();
    assert!(first < second);
}

#[rstest]
fn given_failing_section_when_rendering_then_error_names_section(forest: Forest) {
    let service = GuideService::new(Arc::new(FailOn("1-2")));
    let err = service.render("Hanoi", &forest).unwrap_err();
    match err {
        ApplicationError::Generation { context, source } => {
            assert_eq!(context, "section 1-2");
            assert_eq!(source.message, "model unavailable");
        }
        other => panic!("expected generation error, got {other:?}"),
    }
}

#[rstest]
fn given_offline_generator_when_rendering_then_titles_escaped(forest: Forest) {
    let service = GuideService::new(Arc::new(OfflineContentGenerator));
    let guide = service.render("Hanoi", &forest).unwrap();
    assert!(guide.sections[0].html.contains("Food &amp; Drink"));
    assert!(guide.sections[1].html.contains("<h2>"));
}

// ============================================================
// render_section
// ============================================================

#[rstest]
fn given_single_node_when_rendering_section_then_only_that_node_generated(forest: Forest) {
    let generator = Arc::new(EchoGenerator::default());
    let service = GuideService::new(generator.clone());

    let section = service.render_section("Hanoi", &forest[0].children[1]).unwrap();

    assert_eq!(*generator.calls.lock().unwrap(), vec!["1-2"]);
    assert_eq!(section.node_id, "1-2");
    assert_eq!(section.filename, "Hanoi_Markets.docx");
    assert_eq!(section.download_url(), "/outputs/Hanoi_Markets.docx");
    assert_eq!(
        section.anchored_html(),
        "<div id=\"node-1-2\" class=\"mb-8 scroll-mt-4\">\n<p>Hanoi: Markets</p>\n</div>\n"
    );
}

#[rstest]
fn given_title_with_symbols_when_rendering_section_then_filename_sanitized(forest: Forest) {
    let service = GuideService::new(Arc::new(EchoGenerator::default()));
    let section = service.render_section("Hanoi", &forest[0]).unwrap();
    assert_eq!(section.filename, "Hanoi_Food  Drink.docx");
}

#[rstest]
fn given_failing_node_when_rendering_section_then_generation_error(forest: Forest) {
    let service = GuideService::new(Arc::new(FailOn("2")));
    let err = service.render_section("Hanoi", &forest[1]).unwrap_err();
    assert!(matches!(err, ApplicationError::Generation { context, .. } if context == "section 2"));
}
