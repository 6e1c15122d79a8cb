use std::env;

use serde::{Deserialize, Serialize};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

/// Read a profiled env var: tries {PROFILE}_{KEY} first, falls back to {KEY}.
fn profiled_env_opt(profile: &str, key: &str) -> Option<String> {
    if !profile.is_empty() {
        let prefixed = format!("{}_{}", profile, key);
        if let Some(v) = env_opt(&prefixed) {
            return Some(v);
        }
    }
    env_opt(key)
}

fn profiled_env_usize(profile: &str, key: &str, default: usize) -> usize {
    profiled_env_opt(profile, key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn profiled_env_bool(profile: &str, key: &str, default: bool) -> bool {
    match profiled_env_opt(profile, key).map(|v| v.to_ascii_lowercase()) {
        Some(v) if matches!(v.as_str(), "1" | "true" | "yes" | "on") => true,
        Some(v) if matches!(v.as_str(), "0" | "false" | "no" | "off") => false,
        _ => default,
    }
}

/// Default cap on a seller's best-sellers list.
pub const DEFAULT_TOP_PRODUCTS_LIMIT: usize = 10;

/// Default minimum number of receipts per rayon task.
pub const DEFAULT_PARALLEL_CHUNK_SIZE: usize = 1024;

// ── Runtime settings ──────────────────────────────────────────

/// Tunables for a report run. Strategies are configured separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Active profile name (empty = default).
    pub profile: String,
    pub top_products_limit: usize,
    /// Aggregate receipts on the rayon pool instead of the calling thread.
    pub parallel: bool,
    pub parallel_chunk_size: usize,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            profile: String::new(),
            top_products_limit: DEFAULT_TOP_PRODUCTS_LIMIT,
            parallel: false,
            parallel_chunk_size: DEFAULT_PARALLEL_CHUNK_SIZE,
        }
    }
}

impl ReportSettings {
    /// Build settings from environment variables (call `load_dotenv()` first).
    /// Profile is read from `SELLERBOARD_PROFILE`. When set (e.g. `PROD`),
    /// every key is first looked up as `{PROFILE}_{KEY}`, falling back to `{KEY}`.
    pub fn from_env() -> Self {
        let profile = env_or("SELLERBOARD_PROFILE", "").to_uppercase();
        Self::for_profile(&profile)
    }

    /// Build settings for a specific named profile (empty string = default).
    pub fn for_profile(profile: &str) -> Self {
        let p = profile.to_uppercase();
        let p = p.as_str();
        Self {
            profile: p.to_string(),
            top_products_limit: profiled_env_usize(
                p,
                "SELLERBOARD_TOP_PRODUCTS",
                DEFAULT_TOP_PRODUCTS_LIMIT,
            ),
            parallel: profiled_env_bool(p, "SELLERBOARD_PARALLEL", false),
            parallel_chunk_size: profiled_env_usize(
                p,
                "SELLERBOARD_CHUNK_SIZE",
                DEFAULT_PARALLEL_CHUNK_SIZE,
            ),
        }
    }

    pub fn profile_label(&self) -> &str {
        if self.profile.is_empty() { "default" } else { &self.profile }
    }

    /// Print a summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Report settings loaded (profile: {}):", self.profile_label());
        tracing::info!("  top_products_limit:  {}", self.top_products_limit);
        tracing::info!(
            "  aggregation:         {}",
            if self.parallel { "parallel" } else { "sequential" }
        );
        tracing::info!("  parallel_chunk_size: {}", self.parallel_chunk_size);
    }
}
