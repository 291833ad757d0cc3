use crate::types::session::Session;

pub const PUBLIC_PAGES: &[&str] = &[
    "/",
    "/login",
    "/register",
    "/reset-password",
    "/privacy",
    "/terms",
    "/docs",
];

// `/api/v1/users` is open here; its delete handler does its own ownership check.
pub const PUBLIC_API_PREFIXES: &[&str] = &["/api/auth", "/api/v1/users"];

const STATIC_PREFIXES: &[&str] = &["/static/", "/_next/static/", "/_next/image", "/favicon.ico"];
const IMAGE_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg", ".gif", ".svg", ".webp", ".ico"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    RedirectToLogin,
}

/// Static assets never go through [`evaluate`].
pub fn is_static_asset(path: &str) -> bool {
    let lower = path.to_ascii_lowercase();
    STATIC_PREFIXES.iter().any(|p| lower.starts_with(p))
        || IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

pub fn is_public(path: &str) -> bool {
    PUBLIC_PAGES.contains(&path) || PUBLIC_API_PREFIXES.iter().any(|p| path.starts_with(p))
}

pub fn evaluate(path: &str, session: Option<&Session>) -> Decision {
    if is_public(path) || session.is_some() {
        Decision::Allow
    } else {
        Decision::RedirectToLogin
    }
}
