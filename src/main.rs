mod commands;
mod config;
mod constants;
mod db;
mod models;
mod schedule;
mod utils;

use std::sync::Arc;

use teloxide::dispatching::UpdateHandler;
use teloxide::filter_command;
use teloxide::prelude::*;
use tracing::{error, info};

use crate::commands::{Command, add_birthday, list_birthdays, start};
use crate::config::Config;
use crate::constants::LOG_DIRECTIVE;
use crate::db::Database;
use crate::models::{Data, Error};
use crate::schedule::start_schedule_manager;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    initialize_logging();

    // Load configuration from environment
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Connect to database
    let db = match Database::new(&config.database_url).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    let bot = Bot::new(config.telegram_token.clone());
    let data = Arc::new(Data::new(db, config));

    // Start the daily birthday check
    start_schedule_manager(bot.clone(), Arc::clone(&data));
    info!("Schedule manager task started");

    info!("Bot is running...");

    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![data])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}

/// Initialize the logging system
fn initialize_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(LOG_DIRECTIVE.parse().expect("valid log directive")),
        )
        .init();
}

/// Routing for inbound updates: the three commands, nothing else
fn schema() -> UpdateHandler<Error> {
    use dptree::case;

    let command_handler = filter_command::<Command, _>()
        .branch(case![Command::Start].endpoint(start))
        .branch(case![Command::Add].endpoint(add_birthday))
        .branch(case![Command::List].endpoint(list_birthdays));

    let message_handler = Update::filter_message().branch(command_handler);

    dptree::entry().branch(message_handler)
}
