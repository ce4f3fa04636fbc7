use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::info;

use crate::config::DbConfig;

/// The prompt-library schema. Every statement is create-if-absent, so the
/// whole batch can be re-run safely at any time.
const SCHEMA_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS professions (
    id SERIAL PRIMARY KEY,
    key VARCHAR(50) UNIQUE NOT NULL,
    title VARCHAR(100) NOT NULL,
    total_available INTEGER DEFAULT 0,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);

CREATE TABLE IF NOT EXISTS prompts (
    id SERIAL PRIMARY KEY,
    prompt_id VARCHAR(50) UNIQUE NOT NULL,
    profession_id INTEGER REFERENCES professions(id),
    title VARCHAR(200) NOT NULL,
    category VARCHAR(100),
    difficulty VARCHAR(20),
    description TEXT,
    safe_template TEXT NOT NULL,
    ultra_safe_template TEXT,
    prompt_text TEXT NOT NULL,
    use_case TEXT,
    time_saved VARCHAR(100),
    outcome TEXT,
    downloads INTEGER DEFAULT 0,
    rating DECIMAL(2,1) DEFAULT 4.5,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);

CREATE TABLE IF NOT EXISTS tags (
    id SERIAL PRIMARY KEY,
    name VARCHAR(50) UNIQUE NOT NULL
);

CREATE TABLE IF NOT EXISTS prompt_tags (
    prompt_id INTEGER REFERENCES prompts(id),
    tag_id INTEGER REFERENCES tags(id),
    PRIMARY KEY (prompt_id, tag_id)
);

CREATE INDEX IF NOT EXISTS idx_prompts_profession ON prompts(profession_id);
CREATE INDEX IF NOT EXISTS idx_prompts_difficulty ON prompts(difficulty);
CREATE INDEX IF NOT EXISTS idx_prompts_category ON prompts(category);
"#;

/// Reference rows for `professions`: key, display title, total available.
pub const PROFESSION_SEED: [(&str, &str, i32); 8] = [
    ("legal", "Legal Professionals", 52),
    ("financial", "Financial Professionals", 48),
    ("insurance", "Insurance Professionals", 45),
    ("healthcare", "Healthcare Administrators", 42),
    ("data_analysis", "Data Analysts", 40),
    ("tech_support", "Tech Support Professionals", 35),
    ("education", "Educators", 38),
    ("social_work", "Social Workers", 37),
];

#[derive(Clone, Debug)]
pub struct DbManager {
    db: PgPool,
}

impl DbManager {
    /// The pool connects lazily: the process may boot before its store is
    /// reachable, and nothing touches the database until provisioning is
    /// requested.
    pub fn init(config: &DbConfig) -> Self {
        info!("{:<20} - Initializing the DB pool", "init_db");

        let con_opts = config.connection_options();

        let db = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(5))
            .connect_lazy_with(con_opts);

        Self { db }
    }

    pub fn db(&self) -> &PgPool {
        &self.db
    }

    /// Creates the prompt-library tables and indexes, then seeds the
    /// `professions` reference rows. Idempotent: tables are created only if
    /// absent and seeding skips rows whose `key` already exists, so
    /// re-invocation (or a retry after a failed run) is always safe.
    pub async fn provision_schema(&self) -> Result<()> {
        sqlx::raw_sql(SCHEMA_DDL).execute(&self.db).await?;

        for (key, title, total_available) in PROFESSION_SEED {
            sqlx::query(
                r#"
                INSERT INTO professions (key, title, total_available)
                VALUES ($1, $2, $3)
                ON CONFLICT (key) DO NOTHING
            "#,
            )
            .bind(key)
            .bind(title)
            .bind(total_available)
            .execute(&self.db)
            .await?;
        }

        Ok(())
    }
}

// ###################################
// ->   ERROR
// ###################################
pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
}
