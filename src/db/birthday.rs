use super::Database;
use sqlx::Error as SqlxError;

use crate::models::BirthdayEntry;

impl Database {
    /// Store a new birthday entry for a chat
    ///
    /// Entries are append-only; duplicate content is allowed.
    pub async fn insert_birthday(
        &self,
        chat_id: i64,
        name: &str,
        day: i32,
        month: i32,
        year: Option<i32>,
    ) -> Result<(), SqlxError> {
        sqlx::query(
            "INSERT INTO birthdays (chat_id, name, day, month, year) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(chat_id)
        .bind(name)
        .bind(day)
        .bind(month)
        .bind(year)
        .execute(self.pool())
        .await?;
        Ok(())
    }

    /// Get all birthday entries stored for a chat, in insertion order
    pub async fn get_birthdays_for_chat(
        &self,
        chat_id: i64,
    ) -> Result<Vec<BirthdayEntry>, SqlxError> {
        sqlx::query_as("SELECT name, day, month, year FROM birthdays WHERE chat_id = ? ORDER BY id")
            .bind(chat_id)
            .fetch_all(self.pool())
            .await
    }

    /// Get all entries across all chats whose stored day and month equal the given date
    pub async fn get_birthdays_on_date(
        &self,
        month: i32,
        day: i32,
    ) -> Result<Vec<(i64, String, Option<i32>)>, SqlxError> {
        sqlx::query_as("SELECT chat_id, name, year FROM birthdays WHERE month = ? AND day = ?")
            .bind(month)
            .bind(day)
            .fetch_all(self.pool())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_db() -> (Database, tempfile::TempDir) {
        let dir = tempfile::tempdir().expect("create temp dir");
        let url = format!("sqlite:{}/birthdays.db", dir.path().display());
        let db = Database::new(&url).await.expect("open test database");
        (db, dir)
    }

    #[tokio::test]
    async fn insert_then_list_returns_entry_once() {
        let (db, _dir) = test_db().await;

        db.insert_birthday(1, "Анна", 15, 7, Some(1990))
            .await
            .expect("insert");

        let entries = db.get_birthdays_for_chat(1).await.expect("list");
        assert_eq!(
            entries,
            vec![BirthdayEntry {
                name: "Анна".to_string(),
                day: 15,
                month: 7,
                year: Some(1990),
            }]
        );
    }

    #[tokio::test]
    async fn list_is_scoped_to_chat() {
        let (db, _dir) = test_db().await;

        db.insert_birthday(1, "Анна", 15, 7, Some(1990))
            .await
            .expect("insert");
        db.insert_birthday(2, "Борис", 3, 12, None)
            .await
            .expect("insert");

        let entries = db.get_birthdays_for_chat(1).await.expect("list");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Анна");

        let entries = db.get_birthdays_for_chat(3).await.expect("list");
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn list_preserves_insertion_order_and_duplicates() {
        let (db, _dir) = test_db().await;

        db.insert_birthday(1, "Анна", 15, 7, Some(1990))
            .await
            .expect("insert");
        db.insert_birthday(1, "Борис", 3, 12, None)
            .await
            .expect("insert");
        db.insert_birthday(1, "Анна", 15, 7, Some(1990))
            .await
            .expect("insert");

        let names: Vec<String> = db
            .get_birthdays_for_chat(1)
            .await
            .expect("list")
            .into_iter()
            .map(|entry| entry.name)
            .collect();
        assert_eq!(names, vec!["Анна", "Борис", "Анна"]);
    }

    #[tokio::test]
    async fn on_date_matches_exactly_across_chats() {
        let (db, _dir) = test_db().await;

        db.insert_birthday(1, "Анна", 15, 7, Some(1990))
            .await
            .expect("insert");
        db.insert_birthday(2, "Борис", 15, 7, None)
            .await
            .expect("insert");
        db.insert_birthday(3, "Вера", 16, 7, Some(2000))
            .await
            .expect("insert");
        db.insert_birthday(4, "Глеб", 15, 8, Some(2000))
            .await
            .expect("insert");

        let mut matched = db.get_birthdays_on_date(7, 15).await.expect("on date");
        matched.sort();
        assert_eq!(
            matched,
            vec![
                (1, "Анна".to_string(), Some(1990)),
                (2, "Борис".to_string(), None),
            ]
        );

        let matched = db.get_birthdays_on_date(2, 30).await.expect("on date");
        assert!(matched.is_empty());
    }

    #[tokio::test]
    async fn reopening_database_keeps_entries() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let url = format!("sqlite:{}/birthdays.db", dir.path().display());

        let db = Database::new(&url).await.expect("open test database");
        db.insert_birthday(1, "Анна", 15, 7, Some(1990))
            .await
            .expect("insert");
        drop(db);

        // Second open runs migrations again; the table and its rows survive
        let db = Database::new(&url).await.expect("reopen test database");
        let entries = db.get_birthdays_for_chat(1).await.expect("list");
        assert_eq!(entries.len(), 1);
    }
}
