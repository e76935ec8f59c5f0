use std::sync::Arc;

use teloxide::prelude::*;
use tracing::{error, info};

use crate::constants::{
    BAD_FORMAT_MESSAGE, DATABASE_ERROR_MESSAGE, HELP_MESSAGE, NOT_ADMIN_MESSAGE,
};
use crate::db::Database;
use crate::models::{Data, HandlerResult};
use crate::utils::datetime::current_year;
use crate::utils::message_formatter::{build_added_confirmation, build_list_message};
use crate::utils::parsing::{AddArgs, parse_add_command};
use crate::utils::permissions::is_admin;

/// Outcome of an /add attempt, decided before any reply is sent
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AddOutcome {
    /// Entry was written to the store
    Saved(AddArgs),
    /// Sender is not the configured administrator; nothing was written
    NotAuthorized,
    /// Text did not match `/add <name> <day> <month> <year>`; nothing was written
    BadFormat,
}

/// Decide and execute an /add attempt
///
/// Authorization is checked before the text is parsed, and parsing before any
/// write, so a rejected attempt never touches the store. `Err` means a
/// storage fault, never bad input.
pub async fn run_add(
    db: &Database,
    admin_id: u64,
    user_id: Option<u64>,
    chat_id: i64,
    text: &str,
) -> Result<AddOutcome, sqlx::Error> {
    if !is_admin(user_id, admin_id) {
        return Ok(AddOutcome::NotAuthorized);
    }

    let Ok(args) = parse_add_command(text) else {
        return Ok(AddOutcome::BadFormat);
    };

    db.insert_birthday(chat_id, &args.name, args.day, args.month, Some(args.year))
        .await?;

    Ok(AddOutcome::Saved(args))
}

/// Handle /start: reply with the fixed help text
pub async fn start(bot: Bot, msg: Message) -> HandlerResult {
    bot.send_message(msg.chat.id, HELP_MESSAGE).await?;
    Ok(())
}

/// Handle /add: admin-gated insert of a new birthday entry
pub async fn add_birthday(bot: Bot, msg: Message, data: Arc<Data>) -> HandlerResult {
    let user_id = msg.from.as_ref().map(|user| user.id.0);
    let text = msg.text().unwrap_or_default();

    let reply = match run_add(
        &data.db,
        data.config.admin_id,
        user_id,
        msg.chat.id.0,
        text,
    )
    .await
    {
        Ok(AddOutcome::Saved(args)) => {
            info!(
                "Stored birthday for chat {}: {} — {}.{}.{}",
                msg.chat.id.0, args.name, args.day, args.month, args.year
            );
            build_added_confirmation(&args.name, args.day, args.month, args.year)
        }
        Ok(AddOutcome::NotAuthorized) => NOT_ADMIN_MESSAGE.to_string(),
        Ok(AddOutcome::BadFormat) => BAD_FORMAT_MESSAGE.to_string(),
        Err(e) => {
            error!("Failed to store birthday for chat {}: {}", msg.chat.id.0, e);
            DATABASE_ERROR_MESSAGE.to_string()
        }
    };

    bot.send_message(msg.chat.id, reply).await?;
    Ok(())
}

/// Handle /list: all entries stored for the calling chat
pub async fn list_birthdays(bot: Bot, msg: Message, data: Arc<Data>) -> HandlerResult {
    let reply = match data.db.get_birthdays_for_chat(msg.chat.id.0).await {
        Ok(entries) => build_list_message(&entries, current_year()),
        Err(e) => {
            error!("Failed to load birthdays for chat {}: {}", msg.chat.id.0, e);
            DATABASE_ERROR_MESSAGE.to_string()
        }
    };

    bot.send_message(msg.chat.id, reply).await?;
    Ok(())
}
