use dioxus_logger::tracing;

/// Connection settings for the hosted Supabase backend.
///
/// The base URL and the public (anon) API key are baked in at build time from the
/// `SUPABASE_URL` and `SUPABASE_KEY` environment variables, mirroring how the web
/// bundle is produced. Missing values are logged rather than treated as fatal so
/// the shell still renders; every subsequent request will fail with a backend error.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub url: String,
    pub anon_key: String,
}

impl Config {
    /// Reads the backend configuration captured at build time.
    pub fn from_build_env() -> Self {
        let url = option_env!("SUPABASE_URL").unwrap_or_default();
        let anon_key = option_env!("SUPABASE_KEY").unwrap_or_default();

        if url.is_empty() {
            tracing::error!("SUPABASE_URL is not set, backend requests will fail");
        }
        if anon_key.is_empty() {
            tracing::error!("SUPABASE_KEY is not set, backend requests will fail");
        }

        Self {
            url: url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        }
    }
}
