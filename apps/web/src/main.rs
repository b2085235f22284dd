use argyle_content::ContentSource;
use argyle_domain::config::DEFAULT_CONTENT_PATH;
use argyle_ui::App;
use dioxus::prelude::*;

// `en.json` is served from `public/` next to the bundle and fetched relative to the page.
fn main() {
    LaunchBuilder::web().with_context(ContentSource::http(DEFAULT_CONTENT_PATH)).launch(App);
}
