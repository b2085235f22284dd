use argyle_content::ContentSource;
use argyle_domain::config::WindowConfig;
use argyle_ui::App;
use dioxus::desktop::{Config, WindowBuilder};
use dioxus::prelude::*;
use tracing::info;

#[derive(Debug)]
pub struct DesktopApp {
    title: String,
    width: f64,
    height: f64,
}

impl Default for DesktopApp {
    fn default() -> Self {
        Self::from_config(&WindowConfig::default())
    }
}

impl DesktopApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_config(window: &WindowConfig) -> Self {
        Self { title: window.title.clone(), width: window.width, height: window.height }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Opens the window and mounts [`App`] with `source` in context. Blocks until it closes.
    pub fn launch(self, source: ContentSource) {
        info!(title = %self.title, %source, "Opening desktop window");

        let window = WindowBuilder::new().with_title(&self.title).with_inner_size(
            dioxus::desktop::LogicalSize { width: self.width, height: self.height },
        );

        let cfg = Config::default().with_window(window).with_custom_head(
            r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#.into(),
        );

        LaunchBuilder::desktop()
            .with_cfg(cfg)
            .with_context_provider(move || Box::new(source.clone()))
            .launch(App);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_follows_config() {
        let window = WindowConfig { title: "Drops".to_owned(), width: 640.0, height: 480.0 };
        let app = DesktopApp::from_config(&window);
        assert_eq!(app.title, "Drops");
        assert!((app.width - 640.0).abs() < f64::EPSILON);
        assert!((app.height - 480.0).abs() < f64::EPSILON);
    }

    #[test]
    fn builders_override_config() {
        let app = DesktopApp::new().with_title("Argyle").with_size(800.0, 600.0);
        assert_eq!(app.title, "Argyle");
        assert!((app.width - 800.0).abs() < f64::EPSILON);
        assert!((app.height - 600.0).abs() < f64::EPSILON);
    }

    #[test]
    fn default_window_is_branded() {
        assert_eq!(DesktopApp::default().title, "Argyle Collectibles");
    }
}
