/// Help text sent in reply to /start
pub const HELP_MESSAGE: &str = "🎂 Бот для уведомлений о днях рождения!\n\
    Доступные команды:\n\
    /list — Показать все дни рождения\n\
    /add Имя День Месяц Год — Добавить день рождения (только админ)\n\
    Пример: /add Анна 15 7 1990";

/// Reply to /add from anyone other than the configured administrator
pub const NOT_ADMIN_MESSAGE: &str = "❌ Только администратор может добавлять дни рождения!";

/// Reply to /add with the wrong number of fields or non-numeric fields
pub const BAD_FORMAT_MESSAGE: &str = "❌ Ошибка. Формат: /add Имя День Месяц Год";

/// Reply to /list when the chat has no stored entries
pub const EMPTY_LIST_MESSAGE: &str = "📌 Список дней рождения пуст.";

/// First line of a non-empty /list reply
pub const LIST_HEADER: &str = "📅 Список дней рождения:";

/// Generic reply when a storage operation fails
pub const DATABASE_ERROR_MESSAGE: &str = "⚠️ Ошибка базы данных. Попробуйте позже.";

/// Administrator user ID unless ADMIN_ID overrides it
pub const DEFAULT_ADMIN_ID: u64 = 385919505;

/// Database location unless DATABASE_URL overrides it
pub const DEFAULT_DATABASE_URL: &str = "sqlite:birthdays.db";

/// Daily check schedule unless BIRTHDAY_CRON overrides it (09:00 local time)
pub const DEFAULT_BIRTHDAY_CRON: &str = "0 0 9 * * *";

/// Log directive for the application
pub const LOG_DIRECTIVE: &str = "bdaybot_rs=info";
