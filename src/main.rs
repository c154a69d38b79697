//! Runs a paged member search described by configuration and prints the page
//! as JSON.

use std::env;

use config::Config;
use dotenvy::dotenv;

use member_search::db::{establish_connection_pool, run_pending_migrations};
use member_search::models::config::AppConfig;
use member_search::repository::DieselRepository;
use member_search::services::member_search::load_member_page;

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        // Add `./config/default.yaml`
        .add_source(config::File::with_name("config/default"))
        // Add environment-specific overrides
        .add_source(config::File::with_name(&format!("config/{}", app_env)).required(false))
        // Add settings from the environment, e.g. `APP_SEARCH__CONDITION__TEAM_NAME=teamB`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build();

    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Error loading settings: {}", err);
            std::process::exit(1);
        }
    };

    let app_config = match settings.try_deserialize::<AppConfig>() {
        Ok(app_config) => app_config,
        Err(err) => {
            log::error!("Error loading app config: {}", err);
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&app_config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    if app_config.run_migrations {
        if let Err(e) = run_pending_migrations(&pool) {
            log::error!("Failed to run migrations: {e}");
            std::process::exit(1);
        }
    }

    let repo = DieselRepository::new(pool);

    let page = match load_member_page(&repo, &app_config.search, &app_config) {
        Ok(page) => page,
        Err(e) => {
            log::error!("Member search failed: {e}");
            std::process::exit(1);
        }
    };

    match serde_json::to_string_pretty(&page) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            log::error!("Failed to serialize search results: {e}");
            std::process::exit(1);
        }
    }
}
