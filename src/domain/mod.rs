//! Domain layer: outline model and tree edits
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod entities;
pub mod error;
pub mod ids;
pub mod resolver;
pub mod store;
pub mod validate;

pub use arena::{OutlineIndex, SectionData};
pub use entities::*;
pub use error::{DomainError, DomainResult};
pub use ids::{IdGenerator, IdScheme, SequentialIds, UuidIds};
pub use resolver::{find_and_transform_sibling_list, find_node, transform_node};
pub use store::{OutlineStore, DEFAULT_TITLE};
pub use validate::validate_forest;
