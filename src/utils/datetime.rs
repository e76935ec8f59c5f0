/// Pure date/time helpers for birthday matching (transport-agnostic)
use chrono::{Datelike, Local};

/// Calculate age from birth year
///
/// This is the age being turned on the birthday itself, not the age at an
/// arbitrary point of the year.
pub fn calculate_age(birth_year: i32, current_year: i32) -> i32 {
    current_year - birth_year
}

/// Get the current month and day from the host-local clock
pub fn get_current_month_day() -> (i32, i32) {
    let now = Local::now();
    (now.month() as i32, now.day() as i32)
}

/// Get the current year from the host-local clock
pub fn current_year() -> i32 {
    Local::now().year()
}
