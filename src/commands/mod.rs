// Command modules
mod birthday;

// Re-export all command endpoints
pub use birthday::{add_birthday, list_birthdays, start};

use teloxide::utils::command::BotCommands;

/// Text commands understood by the bot
#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Поддерживаемые команды")]
pub enum Command {
    #[command(description = "Запуск бота")]
    Start,
    #[command(description = "Добавить день рождения (только админ)")]
    Add,
    #[command(description = "Показать все дни рождения")]
    List,
}
