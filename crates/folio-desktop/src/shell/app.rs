//! Declarative application registration

use serde::{Deserialize, Serialize};

use crate::math::{Size, Vec2};

fn default_resizable() -> bool {
    true
}

/// One application the shell can open
///
/// The content renderer is referenced by `id`; the shell never looks
/// inside a panel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub id: String,
    /// Display name for the dock tooltip and the title bar
    pub name: String,
    /// Icon reference resolved by the front end
    pub icon: String,
    pub default_size: Size,
    /// Position passed to `open` when launched from the dock
    #[serde(default)]
    pub default_position: Option<Vec2>,
    #[serde(default)]
    pub min_size: Option<Size>,
    #[serde(default = "default_resizable")]
    pub resizable: bool,
}

impl AppConfig {
    /// Resizable app without a preferred position
    pub fn new(id: &str, name: &str, icon: &str, default_size: Size) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            default_size,
            default_position: None,
            min_size: None,
            resizable: true,
        }
    }

    /// Declare a minimum that replaces the window default
    pub fn with_min_size(mut self, min_size: Size) -> Self {
        self.min_size = Some(min_size);
        self
    }

    /// Hide the resize handles
    pub fn fixed_size(mut self) -> Self {
        self.resizable = false;
        self
    }
}

/// Registered applications in declaration (dock) order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppRegistry {
    apps: Vec<AppConfig>,
}

impl AppRegistry {
    pub fn new(apps: Vec<AppConfig>) -> Self {
        let mut registry = Self::default();
        for app in apps {
            registry.register(app);
        }
        registry
    }

    /// The portfolio desktop's applications
    pub fn portfolio() -> Self {
        Self::new(vec![
            AppConfig::new("finder", "Finder", "folder", Size::new(700.0, 500.0))
                .with_min_size(Size::new(600.0, 450.0)),
            AppConfig::new("about", "About Me", "user-circle", Size::new(800.0, 650.0))
                .with_min_size(Size::new(600.0, 500.0)),
            AppConfig::new("projects", "Projects", "folder", Size::new(900.0, 600.0))
                .with_min_size(Size::new(700.0, 500.0)),
            AppConfig::new("terminal", "Terminal", "command-line", Size::new(700.0, 500.0))
                .with_min_size(Size::new(600.0, 400.0)),
            AppConfig::new("certificates", "Certificates", "academic-cap", Size::new(800.0, 600.0))
                .with_min_size(Size::new(700.0, 500.0)),
            AppConfig::new("contact", "Contact", "envelope", Size::new(600.0, 650.0)),
            AppConfig::new("music", "Music", "speaker-wave", Size::new(380.0, 550.0))
                .with_min_size(Size::new(350.0, 500.0))
                .fixed_size(),
            AppConfig::new("safari", "Safari", "arrow-path", Size::new(1000.0, 700.0))
                .with_min_size(Size::new(800.0, 600.0)),
        ])
    }

    /// Add an app; a later registration with the same id replaces the
    /// earlier one in place.
    pub fn register(&mut self, app: AppConfig) {
        match self.apps.iter_mut().find(|a| a.id == app.id) {
            Some(existing) => *existing = app,
            None => self.apps.push(app),
        }
    }

    pub fn get(&self, id: &str) -> Option<&AppConfig> {
        self.apps.iter().find(|a| a.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AppConfig> {
        self.apps.iter()
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }
}
