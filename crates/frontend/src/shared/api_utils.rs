//! API utilities for frontend-backend communication
//!
//! The backend listens on the same host as the page, on `BACKEND_PORT`.

/// Port of the backend HTTP server
pub const BACKEND_PORT: u16 = 3000;

/// Get the base URL for API requests
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available (relative URLs are used then)
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    base_from_parts(&protocol, &hostname, BACKEND_PORT)
}

fn base_from_parts(protocol: &str, hostname: &str, port: u16) -> String {
    let protocol = protocol.trim_end_matches(':');
    let hostname = if hostname.is_empty() {
        "127.0.0.1"
    } else {
        hostname
    };
    format!("{}://{}:{}", protocol, hostname, port)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/support_contact/12");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_from_location_parts() {
        assert_eq!(
            base_from_parts("https:", "admin.example.com", 3000),
            "https://admin.example.com:3000"
        );
        assert_eq!(base_from_parts("http", "", 8080), "http://127.0.0.1:8080");
    }
}
