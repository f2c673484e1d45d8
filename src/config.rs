//! Client-side configuration.
//!
//! Mirrors the backend's model defaults so the binary can present a
//! sensible roster before `GET /api/models` has been called.

/// Default backend address when `COUNCIL_BASE_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8001";

/// Default council roster, matching the backend configuration.
pub const DEFAULT_COUNCIL_MODELS: &[&str] = &[
    "openai/gpt-4o",
    "google/gemini-2.5-flash",
    "anthropic/claude-sonnet-4-20250514",
];

/// Default chairman model, matching the backend configuration.
pub const DEFAULT_CHAIRMAN_MODEL: &str = "google/gemini-2.5-flash";

/// Resolve the backend base URL from the environment.
pub fn base_url() -> String {
    std::env::var("COUNCIL_BASE_URL")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(|v| v.trim_end_matches('/').to_string())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_chairman_is_council_member() {
        assert!(DEFAULT_COUNCIL_MODELS.contains(&DEFAULT_CHAIRMAN_MODEL));
    }
}
