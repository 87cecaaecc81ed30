//! Mount-path joining and normalization.

/// Joins path segments with `/`, collapsing any run of slashes into one.
///
/// Segments may carry their own leading or trailing slashes; the result
/// never contains `//`.
pub fn url_join(parts: &[&str]) -> String {
    let joined = parts.join("/");
    let mut out = String::with_capacity(joined.len());
    let mut prev_slash = false;

    for c in joined.chars() {
        if c == '/' {
            if prev_slash {
                continue;
            }
            prev_slash = true;
        } else {
            prev_slash = false;
        }
        out.push(c);
    }

    out
}

/// Normalizes a mount or base path: a leading slash is enforced, duplicate
/// slashes are collapsed and any trailing slash is stripped.
///
/// Both `""` and `"/"` normalize to `"/"`. Stripping the trailing slash
/// matters for the description's server url: resource paths always start
/// with a slash, so `server.url + path` would otherwise produce `//`.
pub fn normalize_mount_path(path: &str) -> String {
    let mut out = url_join(&["/", path.trim()]);
    while out.len() > 1 && out.ends_with('/') {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_join_plain_segments() {
        assert_eq!(url_join(&["/explorer", "swagger.json"]), "/explorer/swagger.json");
    }

    #[test]
    fn test_url_join_collapses_duplicate_slashes() {
        assert_eq!(url_join(&["/explorer/", "/swagger.json"]), "/explorer/swagger.json");
        assert_eq!(url_join(&["//a//", "//b"]), "/a/b");
    }

    #[test]
    fn test_url_join_single_segment() {
        assert_eq!(url_join(&["/explorer"]), "/explorer");
    }

    #[test]
    fn test_normalize_adds_leading_slash() {
        assert_eq!(normalize_mount_path("explorer"), "/explorer");
    }

    #[test]
    fn test_normalize_strips_trailing_slash() {
        assert_eq!(normalize_mount_path("/apis/"), "/apis");
        assert_eq!(normalize_mount_path("/a/b///"), "/a/b");
    }

    #[test]
    fn test_normalize_root() {
        assert_eq!(normalize_mount_path(""), "/");
        assert_eq!(normalize_mount_path("/"), "/");
    }

    #[test]
    fn test_normalize_collapses_inner_slashes() {
        assert_eq!(normalize_mount_path("/api//v1"), "/api/v1");
    }
}
