/// Pure functions for building reply and notification texts (transport-agnostic)
use crate::constants::{EMPTY_LIST_MESSAGE, LIST_HEADER};
use crate::models::BirthdayEntry;
use crate::utils::datetime::calculate_age;

/// Format the age shown in a list line, "?" when the birth year is unknown
pub fn format_age(year: Option<i32>, current_year: i32) -> String {
    match year {
        Some(birth_year) => calculate_age(birth_year, current_year).to_string(),
        None => "?".to_string(),
    }
}

/// Build a single /list line
pub fn build_list_line(entry: &BirthdayEntry, current_year: i32) -> String {
    format!(
        "• {} — {}.{} ({} лет)",
        entry.name,
        entry.day,
        entry.month,
        format_age(entry.year, current_year)
    )
}

/// Build the full /list reply
pub fn build_list_message(entries: &[BirthdayEntry], current_year: i32) -> String {
    if entries.is_empty() {
        return EMPTY_LIST_MESSAGE.to_string();
    }

    let lines: Vec<String> = entries
        .iter()
        .map(|entry| build_list_line(entry, current_year))
        .collect();

    format!("{}\n{}", LIST_HEADER, lines.join("\n"))
}

/// Build the /add confirmation reply
pub fn build_added_confirmation(name: &str, day: i32, month: i32, year: i32) -> String {
    format!("✅ Добавлено: {} — {}.{}.{}", name, day, month, year)
}

/// Build the daily congratulation, with the age clause only when the year is known
pub fn build_congratulation(name: &str, age: Option<i32>) -> String {
    let mut message = format!("🎉 Сегодня день рождения у {}!", name);
    if let Some(age) = age {
        message.push_str(&format!(" Исполняется {} лет!", age));
    }
    message
}
