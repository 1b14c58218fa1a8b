//! Collaborator endpoint configuration.
//!
//! Both values are resolved at compile time. With neither set, requests go
//! to the same origin (relative URLs), which is how the app is served behind
//! a reverse proxy in front of the backend-as-a-service.

pub fn base_url() -> &'static str {
    option_env!("SALESDESK_API_URL").unwrap_or("")
}

/// The publishable (anon) API key sent with every collaborator request.
pub fn publishable_key() -> &'static str {
    option_env!("SALESDESK_API_KEY").unwrap_or("")
}
