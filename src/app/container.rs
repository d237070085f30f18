//! Dependency injection container for the guessing game.
//!
//! The container owns the shared, immutable catalog and hands it to every
//! session it starts.

use std::{path::Path, sync::Arc};

use super::config::SessionConfig;
use crate::{Result, catalog::Catalog, session::Session};

/// Application with dependency injection.
///
/// # Examples
///
/// ## Production usage
///
/// ```
/// use akinator::app::{App, SessionConfig};
/// use akinator::StrategyKind;
///
/// let app = App::new();
/// let session = app.start_session(SessionConfig::new(StrategyKind::Entropy))?;
/// assert_eq!(session.questions_asked(), 0);
/// # Ok::<(), akinator::Error>(())
/// ```
///
/// ## Testing with a custom catalog
///
/// ```
/// use akinator::app::App;
/// use akinator::{Catalog, Item};
///
/// let catalog = Catalog::new(
///     vec![Item::new("tea", [("Hot", true)]), Item::new("lemonade", [("Hot", false)])],
///     vec!["Hot".into()],
/// )?;
/// let app = App::for_testing()
///     .with_catalog(catalog)
///     .with_default_seed(42)
///     .build();
/// assert_eq!(app.catalog().len(), 2);
/// # Ok::<(), akinator::Error>(())
/// ```
pub struct App {
    /// Catalog shared read-only by every session
    catalog: Arc<Catalog>,
    /// Default random seed (None = non-deterministic)
    default_seed: Option<u64>,
}

impl App {
    /// Create a new app over the built-in food catalog.
    pub fn new() -> Self {
        Self {
            catalog: Arc::new(Catalog::food()),
            default_seed: None,
        }
    }

    /// Create an app over a catalog file.
    pub fn from_catalog_path(path: &Path) -> Result<Self> {
        Ok(Self {
            catalog: Arc::new(Catalog::from_json_path(path)?),
            default_seed: None,
        })
    }

    /// Create a builder for constructing app with custom dependencies.
    pub fn for_testing() -> AppBuilder {
        AppBuilder::new()
    }

    /// Get the shared catalog.
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    /// Start a fresh session with the given configuration.
    ///
    /// The container's default seed applies when the configuration has none.
    pub fn start_session(&self, mut config: SessionConfig) -> Result<Session> {
        if config.seed.is_none() {
            config.seed = self.default_seed;
        }
        Session::start(self.catalog(), config)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing app with custom dependencies.
///
/// Primarily used for testing to inject small catalogs and control randomness.
pub struct AppBuilder {
    catalog: Option<Catalog>,
    default_seed: Option<u64>,
}

impl AppBuilder {
    fn new() -> Self {
        Self {
            catalog: None,
            default_seed: None,
        }
    }

    /// Use a custom catalog instead of the built-in food catalog.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Set a default seed used by sessions that do not set their own.
    pub fn with_default_seed(mut self, seed: u64) -> Self {
        self.default_seed = Some(seed);
        self
    }

    /// Build the app.
    pub fn build(self) -> App {
        App {
            catalog: Arc::new(self.catalog.unwrap_or_default()),
            default_seed: self.default_seed,
        }
    }
}
