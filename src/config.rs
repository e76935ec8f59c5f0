use crate::constants::{DEFAULT_ADMIN_ID, DEFAULT_BIRTHDAY_CRON, DEFAULT_DATABASE_URL};
use crate::models::Error;

/// Configuration loaded from environment variables
#[derive(Clone, Debug)]
pub struct Config {
    /// Telegram Bot API token
    pub telegram_token: String,
    /// User ID allowed to add birthday entries
    pub admin_id: u64,
    /// SQLite database location
    pub database_url: String,
    /// Cron expression for the daily birthday check, host-local time
    pub birthday_cron: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, Error> {
        let telegram_token = std::env::var("TELEGRAM_BOT_TOKEN").map_err(|_| {
            "TELEGRAM_BOT_TOKEN environment variable not set. \
             Set it with: export TELEGRAM_BOT_TOKEN=your_bot_token"
        })?;

        let admin_id = match std::env::var("ADMIN_ID") {
            Ok(raw) => raw
                .parse::<u64>()
                .map_err(|_| format!("ADMIN_ID must be a numeric Telegram user ID, got '{raw}'"))?,
            Err(_) => DEFAULT_ADMIN_ID,
        };

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let birthday_cron =
            std::env::var("BIRTHDAY_CRON").unwrap_or_else(|_| DEFAULT_BIRTHDAY_CRON.to_string());

        Ok(Self {
            telegram_token,
            admin_id,
            database_url,
            birthday_cron,
        })
    }
}
