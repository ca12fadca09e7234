//! Compile-time configuration for the remote commerce backend.
//!
//! `COMMERCE_API_BASE` and `COMMERCE_PUBLIC_KEY` are read at compile time so
//! deployments can point at a staging backend or rotate the publishable key
//! without touching source. Local builds fall back to the hosted default.

/// Base URL of the commerce REST API, without a trailing slash.
#[must_use]
pub fn api_base() -> String {
    api_base_from(option_env!("COMMERCE_API_BASE").unwrap_or(""))
}

/// Publishable API key sent as the `X-Authorization` header.
#[must_use]
pub fn public_key() -> String {
    option_env!("COMMERCE_PUBLIC_KEY").unwrap_or_default().to_string()
}

const DEFAULT_API_BASE: &str = "https://api.chec.io/v1";

fn api_base_from(configured: &str) -> String {
    let configured = configured.trim().trim_end_matches('/');
    if configured.is_empty() {
        DEFAULT_API_BASE.to_string()
    } else {
        configured.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_hosted_backend() {
        assert_eq!(api_base_from(""), "https://api.chec.io/v1");
        assert_eq!(api_base_from("   "), "https://api.chec.io/v1");
    }

    #[test]
    fn strips_trailing_slashes_from_configured_base() {
        assert_eq!(
            api_base_from("https://commerce.example/v1/"),
            "https://commerce.example/v1"
        );
    }
}
