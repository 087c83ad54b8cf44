// ============================================================================
// Image URL Resolution
// ============================================================================

/// Turn a stored image path into something a browser can load.
///
/// Local previews (`blob:`) and absolute URLs pass through; relative upload
/// paths such as `/uploads/cover.jpg` are prefixed with the backend origin.
pub fn resolve_image_url(base_url: &str, image_path: &str) -> String {
    if image_path.is_empty() {
        return String::new();
    }

    if is_local_preview(image_path)
        || image_path.starts_with("http://")
        || image_path.starts_with("https://")
    {
        return image_path.to_string();
    }

    format!("{}{}", base_url.trim_end_matches('/'), image_path)
}

/// `blob:` URLs only exist in the browser session that created them
pub fn is_local_preview(image_path: &str) -> bool {
    image_path.starts_with("blob:")
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://localhost:5007";

    #[test]
    fn test_empty_path_resolves_to_empty() {
        assert_eq!(resolve_image_url(BASE, ""), "");
    }

    #[test]
    fn test_absolute_urls_pass_through() {
        assert_eq!(
            resolve_image_url(BASE, "https://cdn.example.com/a.jpg"),
            "https://cdn.example.com/a.jpg"
        );
        assert_eq!(
            resolve_image_url(BASE, "http://cdn.example.com/a.jpg"),
            "http://cdn.example.com/a.jpg"
        );
    }

    #[test]
    fn test_blob_preview_passes_through() {
        let preview = "blob:http://localhost:5173/7f1c";
        assert_eq!(resolve_image_url(BASE, preview), preview);
        assert!(is_local_preview(preview));
    }

    #[test]
    fn test_relative_path_gets_backend_prefix() {
        assert_eq!(
            resolve_image_url(BASE, "/uploads/logo.png"),
            "http://localhost:5007/uploads/logo.png"
        );
        assert_eq!(
            resolve_image_url("http://localhost:5007/", "/uploads/logo.png"),
            "http://localhost:5007/uploads/logo.png"
        );
    }
}
