//! URL helper functions

/// Site-relative path of a post page
///
/// # Examples
/// ```ignore
/// post_path("hello") // -> "/blog/hello/"
/// ```
pub fn post_path(slug: &str) -> String {
    format!("/blog/{}/", slug)
}

/// Generate a full URL including the domain
///
/// # Examples
/// ```ignore
/// full_url_for("https://example.com/", "/about/") // -> "https://example.com/about/"
/// ```
pub fn full_url_for(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{}/{}", base, path)
}
