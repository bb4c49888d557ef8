use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{SqliteConnection, SqlitePool};
use std::str::FromStr;
use tracing::{debug, info};

/// The database URL used when nothing else is configured
pub const DEFAULT_DATABASE_URL: &str = "sqlite:people.db";

/// Tables that make up the person hierarchy, in creation order.
/// The reset operation drops them in reverse order and recreates them from here.
const PEOPLE_TABLES: [&str; 4] = [
    r#"
    CREATE TABLE IF NOT EXISTS families (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS persons (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        parent INTEGER NULL,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        date_of_birth TEXT NULL,
        FOREIGN KEY (parent) REFERENCES persons (id)
    );
    "#,
    r#"
    CREATE INDEX IF NOT EXISTS idx_persons_parent
    ON persons(parent);
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS family_members (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        family_id INTEGER NOT NULL,
        person_id INTEGER NOT NULL,
        FOREIGN KEY (family_id) REFERENCES families (id),
        FOREIGN KEY (person_id) REFERENCES persons (id) ON DELETE CASCADE ON UPDATE CASCADE
    );
    "#,
];

/// Drop order for the hierarchy tables (dependents first)
pub(crate) const PEOPLE_TABLE_NAMES: [&str; 3] = ["family_members", "persons", "families"];

const EXERCISE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS exercises (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        date TEXT NOT NULL,
        exercise_type TEXT NOT NULL,
        distance TEXT NOT NULL,
        duration TEXT NOT NULL,
        comments TEXT NOT NULL
    );
"#;

/// DbConnection owns the SQLite pool shared by all repositories
#[derive(Clone)]
pub struct DbConnection {
    pool: SqlitePool,
}

impl DbConnection {
    /// Open (creating if needed) the database at `url` and make sure the schema exists.
    ///
    /// In-memory databases live only as long as a connection is open, so they are
    /// pinned to a single connection that is never recycled.
    pub async fn new(url: &str, max_connections: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .with_context(|| format!("Invalid database URL: {}", url))?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool_options = if is_in_memory(url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(max_connections.max(1))
        };

        info!("Connecting to database {}", url);
        let pool = pool_options
            .connect_with(options)
            .await
            .with_context(|| format!("Failed to open database {}", url))?;

        Self::setup_schema(&pool).await?;

        Ok(Self { pool })
    }

    /// Initialize a private in-memory database for a test
    #[cfg(test)]
    pub async fn init_test() -> Result<Self> {
        Self::new("sqlite::memory:", 1).await
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Set up the required database schema
    async fn setup_schema(pool: &SqlitePool) -> Result<()> {
        let mut conn = pool.acquire().await?;
        create_people_tables(&mut conn).await?;

        sqlx::query(EXERCISE_TABLE).execute(&mut *conn).await?;

        debug!("Database schema ready");
        Ok(())
    }
}

/// Create the person hierarchy tables on an open connection or transaction
pub(crate) async fn create_people_tables(conn: &mut SqliteConnection) -> Result<()> {
    for statement in PEOPLE_TABLES {
        sqlx::query(statement).execute(&mut *conn).await?;
    }
    Ok(())
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::Row;

    async fn table_names(db: &DbConnection) -> Vec<String> {
        sqlx::query("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
            .fetch_all(db.pool())
            .await
            .expect("Failed to list tables")
            .iter()
            .map(|row| row.get::<String, _>("name"))
            .collect()
    }

    #[tokio::test]
    async fn test_schema_is_created() {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        let tables = table_names(&db).await;

        for expected in ["exercises", "families", "family_members", "persons"] {
            assert!(tables.contains(&expected.to_string()), "missing table {}", expected);
        }
    }

    #[tokio::test]
    async fn test_foreign_keys_are_enforced() {
        let db = DbConnection::init_test().await.expect("Failed to create test database");

        let result = sqlx::query(
            "INSERT INTO persons (parent, first_name, last_name) VALUES (999, 'Orphan', 'Person')",
        )
        .execute(db.pool())
        .await;

        assert!(result.is_err(), "Insert with a dangling parent should fail");
    }

    #[tokio::test]
    async fn test_file_database_persists_between_connections() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let url = format!("sqlite:{}", dir.path().join("people.db").display());

        {
            let db = DbConnection::new(&url, 2).await.expect("Failed to open database");
            sqlx::query("INSERT INTO families (id, name) VALUES (7, 'Stikova')")
                .execute(db.pool())
                .await
                .expect("Failed to insert family");
            db.pool().close().await;
        }

        let reopened = DbConnection::new(&url, 2).await.expect("Failed to reopen database");
        let name: String = sqlx::query("SELECT name FROM families WHERE id = 7")
            .fetch_one(reopened.pool())
            .await
            .expect("Family should survive reconnect")
            .get("name");
        assert_eq!(name, "Stikova");
    }

    #[test]
    fn test_in_memory_detection() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite:file:memdb_1?mode=memory&cache=shared"));
        assert!(!is_in_memory(DEFAULT_DATABASE_URL));
    }
}
