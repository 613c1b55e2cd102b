use rust_embed::Embed;

/// Dashboard static assets baked into the binary.
///
/// The dashboard build pipeline copies its output into `web/` before
/// `cargo build`; at runtime no asset directory needs to exist next to the
/// binary.
#[derive(Embed)]
#[folder = "web/"]
#[include = "*"]
#[include = "**/*"]
pub struct WebAssets;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_entry_document_is_embedded() {
        assert!(WebAssets::get("index.html").is_some());
    }

    #[test]
    fn test_dashboard_assets_are_embedded() {
        assert!(WebAssets::get("css/style.css").is_some());
        assert!(WebAssets::get("js/app.js").is_some());
    }
}
