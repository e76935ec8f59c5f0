use crate::config::Config;
use crate::db::Database;

/// One stored birthday record as seen by the /list command
#[derive(Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct BirthdayEntry {
    pub name: String,
    pub day: i32,
    pub month: i32,
    pub year: Option<i32>,
}

/// Bot state shared across all handlers
pub struct Data {
    /// Database connection
    pub db: Database,
    /// Configuration loaded once at startup
    pub config: Config,
}

impl Data {
    /// Create a new Data instance with the given database connection
    pub fn new(db: Database, config: Config) -> Self {
        Self { db, config }
    }
}

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type HandlerResult = Result<(), Error>;
