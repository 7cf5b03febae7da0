use clap::Parser;
use std::env;

/// Command-line flags. Each one overrides the matching environment variable.
#[derive(Debug, Default, Parser)]
#[command(name = "cinematheque", version, about = "Movie, director and genre CRUD API")]
pub struct Cli {
    /// Verbose diagnostics: debug-level logs and SQL statement logging
    #[arg(long)]
    pub debug: bool,

    /// Port to listen on
    #[arg(long)]
    pub port: Option<u16>,

    /// SQLite connection URL
    #[arg(long)]
    pub database_url: Option<String>,

    /// Insert demo directors, genres and movies into an empty database
    #[arg(long)]
    pub seed: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub seed_demo: bool,
    pub debug: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| "sqlite://cinematheque.db?mode=rwc".to_string()),
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            seed_demo: lookup("SEED_DEMO").is_some(),
            debug: false,
        }
    }

    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(url) = &cli.database_url {
            self.database_url = url.clone();
        }
        if let Some(port) = cli.port {
            self.port = port;
        }
        self.seed_demo |= cli.seed;
        self.debug = cli.debug;
        self
    }

    /// Default `tracing` filter when `RUST_LOG` is unset
    pub fn log_filter(&self) -> &'static str {
        if self.debug {
            "cinematheque=debug,tower_http=debug,sea_orm=debug,sqlx=info"
        } else {
            "cinematheque=info,tower_http=info"
        }
    }
}
