use teloxide::prelude::*;
use teloxide::types::ChatId;
use tracing::{info, warn};

use crate::models::{Data, Error};
use crate::utils::datetime::{calculate_age, current_year, get_current_month_day};
use crate::utils::message_formatter::build_congratulation;

/// Check for birthdays today and send one congratulation per matching entry
///
/// A failed send is isolated to its chat; the remaining entries are still
/// attempted. A storage fault aborts the whole run.
pub async fn run_birthday_check(bot: &Bot, data: &Data) -> Result<(), Error> {
    let (month, day) = get_current_month_day();

    info!("Checking birthdays for {}/{}", day, month);

    let birthdays = data.db.get_birthdays_on_date(month, day).await?;

    if birthdays.is_empty() {
        info!("No birthdays found for today");
        return Ok(());
    }

    info!("Found {} birthday(s) today", birthdays.len());

    let year_now = current_year();

    for (chat_id, name, birth_year) in birthdays {
        let age = birth_year.map(|year| calculate_age(year, year_now));
        let message = build_congratulation(&name, age);

        if let Err(e) = bot.send_message(ChatId(chat_id), message).await {
            warn!("Failed to send birthday message to chat {}: {}", chat_id, e);
        }
    }

    Ok(())
}
