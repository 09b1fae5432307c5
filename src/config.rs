use clap::Parser;

pub const DEFAULT_GOOGLE_MAPS_BASE_URL: &str = "https://maps.googleapis.com";

/// Process configuration, read once from the environment (and `.env`) at startup.
#[derive(Parser, Clone, Debug)]
pub struct Config {
    /// Credential sent as `key` on every upstream call. An empty value counts as unset.
    #[clap(env, long)]
    pub google_maps_api_key: Option<String>,

    #[clap(env, long, default_value_t = 3000)]
    pub port: u16,

    /// Radius in metres used when a caller does not supply one.
    #[clap(env, long, default_value_t = 1000)]
    pub default_radius: u32,

    /// Upper bound for search radii. Reported at startup, not enforced.
    #[clap(env, long, default_value_t = 50000)]
    pub max_radius: u32,

    #[clap(env, long, default_value = DEFAULT_GOOGLE_MAPS_BASE_URL)]
    pub google_maps_base_url: String,

    /// Comma-separated CORS allow-list.
    #[clap(env, long, default_value = "")]
    pub origin_urls: String,
}

impl Config {
    pub fn api_key(&self) -> Option<&str> {
        self.google_maps_api_key
            .as_deref()
            .filter(|key| !key.is_empty())
    }
}
