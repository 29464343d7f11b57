use clap::Parser;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "kwento", about = "The data core of a personal blog")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to data directory
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Show a single post (and its comment thread) instead of the homepage
    #[arg(short, long)]
    pub post: Option<String>,

    /// Fix the RNG seed used for the random picks section
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub feed: FeedConfig,
    pub auth: AuthConfig,
    pub session: SessionConfig,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct FeedConfig {
    /// Trailing window for the "recent posts" rail, in days.
    pub recent_window_days: i64,
    /// How many posts the "popular" rail shows.
    pub popular_limit: usize,
    /// How many posts the "discover" rail samples.
    pub random_count: usize,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AuthConfig {
    pub admin_email: String,
    pub admin_password: String,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct SessionConfig {
    pub cache_path: Option<PathBuf>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            recent_window_days: 7,
            popular_limit: 5,
            random_count: 3,
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            admin_email: "admin@example.com".to_string(),
            admin_password: "password".to_string(),
        }
    }
}

impl Config {
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let data_dir = Self::data_dir(cli);
        let config_path = cli
            .config
            .clone()
            .unwrap_or_else(|| data_dir.join("config.toml"));

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content)?
        } else {
            Config::default()
        };

        // Resolve paths relative to data dir
        if config.session.cache_path.is_none() {
            config.session.cache_path = Some(data_dir.join("session.json"));
        }

        Ok(config)
    }

    pub fn data_dir(cli: &Cli) -> PathBuf {
        cli.data_dir.clone().unwrap_or_else(|| {
            dirs::home_dir()
                .expect("Could not determine home directory")
                .join(".kwento")
        })
    }

    pub fn cache_path(&self) -> &PathBuf {
        self.session.cache_path.as_ref().unwrap()
    }
}
