/// Sanitize a `next` redirect target taken from a query string.
///
/// Only same-origin paths are allowed, and never the auth pages themselves
/// (a `next` of `/login` would bounce login back to login forever). Any
/// value that fails a check collapses to `/`.
pub fn safe_next(next: Option<&str>) -> &str {
    let next = match next {
        Some(n) if !n.is_empty() => n,
        _ => return "/",
    };

    if !next.starts_with('/') {
        return "/";
    }
    if next.starts_with("//") {
        return "/";
    }
    if next.starts_with("/login") || next.starts_with("/register") {
        return "/";
    }

    next
}
