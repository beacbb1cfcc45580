//! reelseek - Entry Point

use clap::Parser;
use reelseek::catalog::TmdbClient;
use reelseek::config::{CliOverrides, ResolvedConfig, TrendingBackend};
use reelseek::effects::EffectRunner;
use reelseek::model::{AppError, TrendingStoreError};
use reelseek::state::AppState;
use reelseek::trending::{AppwriteStore, DisabledStore, LocalStore, TrendingStore};
use reelseek::view::{ColorConfig, ViewOptions};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// How long detached trending writes get to finish after quitting.
const SHUTDOWN_GRACE: Duration = Duration::from_millis(500);

/// reelseek - search and browse movies from the terminal
#[derive(Parser, Debug)]
#[command(name = "reelseek")]
#[command(version)]
#[command(about = "Terminal movie search with debounced input and trending searches")]
pub struct Args {
    /// Start with this query instead of popular movies
    #[arg(short, long)]
    pub search: Option<String>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Quiet period after the last keystroke before searching, in milliseconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub debounce_ms: Option<u64>,

    /// Catalog language tag (e.g. en-US, fr-FR)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Do not record or show trending searches
    #[arg(long)]
    pub no_trending: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            initial_query: self.search.clone(),
            debounce_ms: self.debounce_ms,
            language: self.language.clone(),
            disable_trending: self.no_trending,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    run(args)?;
    Ok(())
}

fn run(args: Args) -> Result<(), AppError> {
    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = reelseek::config::load_config_with_precedence(args.config.clone())?;
        let merged = reelseek::config::merge_config(config_file);
        let with_env = reelseek::config::apply_env_overrides(merged)?;
        reelseek::config::apply_cli_overrides(with_env, args.overrides())
    };

    // The terminal belongs to the TUI, so tracing goes to a file
    reelseek::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("reelseek-io")
        .build()
        .map_err(AppError::Runtime)?;

    let (trending, trending_limit) = open_trending_store(&config)?;
    let catalog = TmdbClient::new(config.catalog.clone()).map_err(AppError::HttpClient)?;
    let (runner, outcomes) = EffectRunner::new(runtime.handle().clone(), Arc::new(catalog), trending);

    let app_state = AppState::new(config.debounce, trending_limit);
    let options = ViewOptions {
        image_base_url: config.image_base_url.clone(),
        colors: ColorConfig::from_env_and_args(args.no_color),
    };

    let result = reelseek::view::run_app(app_state, runner, outcomes, options, &config.initial_query);

    runtime.shutdown_timeout(SHUTDOWN_GRACE);
    info!("Exited");

    result.map_err(AppError::from)
}

/// Build the configured trending store and the number of records to show.
///
/// A store that cannot be opened (another instance holding the database
/// lock, an unwritable data directory) disables trending instead of aborting
/// startup. Only an incomplete backend configuration is an error.
fn open_trending_store(config: &ResolvedConfig) -> Result<(Arc<dyn TrendingStore>, usize), AppError> {
    let opened: Result<Arc<dyn TrendingStore>, TrendingStoreError> =
        match config.trending.backend(&config.image_base_url)? {
            TrendingBackend::Appwrite(appwrite) => {
                info!(endpoint = %appwrite.endpoint, "Using Appwrite trending store");
                AppwriteStore::new(appwrite).map(|store| Arc::new(store) as Arc<dyn TrendingStore>)
            }
            TrendingBackend::Local { path } => {
                info!(path = %path.display(), "Using local trending store");
                LocalStore::open(&path, config.image_base_url.clone())
                    .map(|store| Arc::new(store) as Arc<dyn TrendingStore>)
            }
            TrendingBackend::Disabled => {
                info!("Trending searches disabled");
                return Ok((Arc::new(DisabledStore), 0));
            }
        };

    match opened {
        Ok(store) => Ok((store, config.trending.limit)),
        Err(err) => {
            warn!(error = %err, "Trending store unavailable");
            Ok((Arc::new(DisabledStore), 0))
        }
    }
}
