use std::str::FromStr;
use std::sync::Arc;

use chrono::Local;
use teloxide::Bot;
use tokio::time::{Duration, sleep};
use tracing::{error, info};

use super::birthday_tasks::run_birthday_check;
use crate::models::Data;

/// Start the schedule manager that runs the daily birthday check
pub fn start_schedule_manager(bot: Bot, data: Arc<Data>) {
    tokio::spawn(async move {
        info!("Schedule manager started");

        loop {
            let wait_duration = match next_run_delay(&data.config.birthday_cron) {
                Some(duration) => duration,
                None => {
                    error!(
                        "Invalid cron expression '{}', schedule manager stopped",
                        data.config.birthday_cron
                    );
                    break;
                }
            };

            info!(
                "Next birthday check (cron: '{}') will run in {} minutes",
                data.config.birthday_cron,
                wait_duration.as_secs() / 60
            );

            sleep(wait_duration).await;

            if let Err(e) = run_birthday_check(&bot, &data).await {
                error!("Failed to run birthday check: {}", e);
            }
        }
    });
}

/// Compute how long to sleep until the next occurrence of the cron
/// expression, evaluated against the host-local clock
fn next_run_delay(cron_expression: &str) -> Option<Duration> {
    let schedule = cron::Schedule::from_str(cron_expression).ok()?;
    let next_time = schedule.upcoming(Local).next()?;

    let wait_duration = (next_time - Local::now())
        .to_std()
        .unwrap_or(Duration::from_secs(60));

    Some(wait_duration)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_BIRTHDAY_CRON;

    #[test]
    fn default_cron_expression_is_schedulable() {
        let delay = next_run_delay(DEFAULT_BIRTHDAY_CRON).expect("default cron must parse");
        // Daily schedule: the next run is always within 24 hours
        assert!(delay <= Duration::from_secs(24 * 60 * 60));
    }

    #[test]
    fn invalid_cron_expression_is_rejected() {
        assert!(next_run_delay("definitely not cron").is_none());
        assert!(next_run_delay("").is_none());
    }
}
