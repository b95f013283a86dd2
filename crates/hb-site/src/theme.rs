//! Theme extension point.
//!
//! The generator's default theme is used as-is. A site may layer custom
//! stylesheets on top of it and hook into app setup through [`Theme`];
//! the default hook does nothing.

use serde::{Deserialize, Serialize};

/// Name of the generator's built-in theme.
pub const DEFAULT_THEME: &str = "default";

/// Declarative part of the theme: what it extends and which stylesheets it adds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeExtension {
    /// Base theme the site extends.
    pub extends: String,
    /// Stylesheets loaded after the base theme, in order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub stylesheets: Vec<String>,
}

impl Default for ThemeExtension {
    fn default() -> Self {
        Self {
            extends: DEFAULT_THEME.to_owned(),
            stylesheets: Vec::new(),
        }
    }
}

/// App setup state exposed to [`Theme::enhance_app`].
#[derive(Debug, Default)]
pub struct AppContext {
    components: Vec<String>,
}

impl AppContext {
    /// Register a global component by name. Registering twice is a no-op.
    pub fn register_component(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.components.contains(&name) {
            self.components.push(name);
        }
    }

    /// Registered global components, in registration order.
    #[must_use]
    pub fn components(&self) -> &[String] {
        &self.components
    }
}

/// Theme hooks run once during app setup.
pub trait Theme {
    /// Register global components or plugins.
    fn enhance_app(&self, _app: &mut AppContext) {}
}

/// Passthrough to the generator's default theme.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultTheme;

impl Theme for DefaultTheme {}

/// Run a theme's setup hook against a fresh context.
pub fn setup_app(theme: &dyn Theme) -> AppContext {
    let mut app = AppContext::default();
    theme.enhance_app(&mut app);
    app
}
