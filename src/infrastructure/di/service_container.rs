//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::GuideService;
use crate::config::Settings;
use crate::domain::OutlineStore;
use crate::infrastructure::offline::{OfflineContentGenerator, OfflineOutlineProvider};
use crate::infrastructure::repository::OutlineRepository;
use crate::infrastructure::traits::{ContentGenerator, FileSystem, OutlineProvider, RealFileSystem};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Initial outline source
    pub provider: Arc<dyn OutlineProvider>,

    /// Article source for rendering
    pub generator: Arc<dyn ContentGenerator>,
}

impl ServiceContainer {
    /// Create a new service container with real filesystem and offline collaborators.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(
            settings,
            Arc::new(RealFileSystem),
            Arc::new(OfflineOutlineProvider),
            Arc::new(OfflineContentGenerator),
        )
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        fs: Arc<dyn FileSystem>,
        provider: Arc<dyn OutlineProvider>,
        generator: Arc<dyn ContentGenerator>,
    ) -> Self {
        Self {
            settings: Arc::new(settings),
            fs,
            provider,
            generator,
        }
    }

    pub fn repository(&self) -> OutlineRepository {
        OutlineRepository::new(Arc::clone(&self.fs))
    }

    pub fn store(&self) -> OutlineStore {
        self.settings.outline_store()
    }

    pub fn guide_service(&self) -> GuideService {
        GuideService::new(Arc::clone(&self.generator))
    }
}
