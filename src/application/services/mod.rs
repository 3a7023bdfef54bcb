//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (OutlineProvider, ContentGenerator)
//! but are themselves concrete structs, not traits.

mod guide;
mod session;

pub use guide::{
    location_stem, sanitize_title, single_section_filename, GuideDocument, GuidePlan,
    GuideService, PlannedSection, RenderedSection,
};
pub use session::{OutlineEdit, OutlineSession};
