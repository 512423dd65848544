//! No-Restrictions binary.
//!
//! Patches a database export in place (or into `OUTPUT_DIR`) using the bundled
//! rules or the file named by `MOD_CONFIG`.
//!
//! # Examples
//!
//! ```bash
//! # Patch in place with bundled rules
//! DATABASE_DIR=./database cargo run -p no-restrictions-client
//!
//! # Custom rules, write elsewhere
//! MOD_CONFIG=rules.toml OUTPUT_DIR=./patched cargo run -p no-restrictions-client -- ./database
//! ```

use anyhow::Result;
use no_restrictions_client::{Client, ClientConfig, logging};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // 1. Load configuration from environment; a positional argument wins
    let mut config = ClientConfig::from_env();
    if let Some(database_dir) = std::env::args_os().nth(1) {
        config.database_dir = Some(database_dir.into());
    }

    // 2. Setup logging
    let _guard = logging::setup_logging(&config)?;

    tracing::info!("Starting No-Restrictions");
    tracing::info!("Database: {:?}", config.database_dir);
    tracing::info!("Rules: {:?}", config.mod_config);
    tracing::info!("Dry run: {}", config.dry_run);

    // 3. Run
    let summary = Client::new(config).run()?;

    tracing::info!("Mods loaded: {:?}", summary.mods_loaded);
    tracing::info!("Done");
    Ok(())
}
