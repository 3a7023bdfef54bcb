//! Infrastructure layer: collaborator implementations and outline storage
//!
//! This layer implements I/O boundary traits and wires up services.

pub mod di;
pub mod error;
pub mod offline;
pub mod repository;
pub mod traits;

pub use error::{InfraError, InfraResult};
pub use offline::{OfflineContentGenerator, OfflineOutlineProvider};
pub use repository::OutlineRepository;
