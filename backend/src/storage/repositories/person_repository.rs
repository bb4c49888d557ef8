use anyhow::Result;
use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::domain::models::Person;
use crate::storage::connection::DbConnection;

/// Column list with `has_children` derived from the parent links at query time
const SELECT_WITH_CHILD_FLAG: &str = r#"
    SELECT p.id, p.parent, p.first_name, p.last_name, p.date_of_birth,
           EXISTS (SELECT 1 FROM persons c WHERE c.parent = p.id) AS has_children
    FROM persons p
"#;

/// Repository for person operations
#[derive(Clone)]
pub struct PersonRepository {
    db: DbConnection,
}

impl PersonRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// Insert a person and return the identifier assigned by the store.
    /// Any `id` or `has_children` on the input is ignored.
    pub async fn insert_person(&self, person: &Person) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO persons (parent, first_name, last_name, date_of_birth)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(person.parent)
        .bind(&person.first_name)
        .bind(&person.last_name)
        .bind(person.date_of_birth)
        .execute(self.db.pool())
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Get a person by ID
    pub async fn get_person(&self, id: i64) -> Result<Option<Person>> {
        let query = format!("{} WHERE p.id = ?", SELECT_WITH_CHILD_FLAG);
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?;

        row.as_ref().map(person_from_row).transpose()
    }

    /// List every person ordered by ID
    pub async fn list_persons(&self) -> Result<Vec<Person>> {
        let query = format!("{} ORDER BY p.id ASC", SELECT_WITH_CHILD_FLAG);
        let rows = sqlx::query(&query).fetch_all(self.db.pool()).await?;

        rows.iter().map(person_from_row).collect()
    }

    /// Direct children of `parent` ordered by ID; `None` selects the roots.
    ///
    /// The returned records carry `has_children = false`; callers that need the
    /// flag ask [`count_children`](Self::count_children) per child.
    pub async fn list_children(&self, parent: Option<i64>) -> Result<Vec<Person>> {
        let rows = match parent {
            Some(parent_id) => {
                sqlx::query(
                    r#"
                    SELECT id, parent, first_name, last_name, date_of_birth
                    FROM persons
                    WHERE parent = ?
                    ORDER BY id ASC
                    "#,
                )
                .bind(parent_id)
                .fetch_all(self.db.pool())
                .await?
            }
            None => {
                sqlx::query(
                    r#"
                    SELECT id, parent, first_name, last_name, date_of_birth
                    FROM persons
                    WHERE parent IS NULL
                    ORDER BY id ASC
                    "#,
                )
                .fetch_all(self.db.pool())
                .await?
            }
        };

        rows.iter().map(person_from_row).collect()
    }

    /// Number of persons whose parent is `id`
    pub async fn count_children(&self, id: i64) -> Result<i64> {
        let count: i64 = sqlx::query("SELECT COUNT(*) AS child_count FROM persons WHERE parent = ?")
            .bind(id)
            .fetch_one(self.db.pool())
            .await?
            .get("child_count");
        Ok(count)
    }

    /// Replace every stored field of the person with the given ID.
    /// Returns false when no such person exists.
    pub async fn update_person(&self, person: &Person) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE persons
            SET parent = ?, first_name = ?, last_name = ?, date_of_birth = ?
            WHERE id = ?
            "#,
        )
        .bind(person.parent)
        .bind(&person.first_name)
        .bind(&person.last_name)
        .bind(person.date_of_birth)
        .bind(person.id)
        .execute(self.db.pool())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a person. Returns false when no such person exists.
    pub async fn delete_person(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM persons WHERE id = ?")
            .bind(id)
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn person_exists(&self, id: i64) -> Result<bool> {
        let row = sqlx::query("SELECT 1 FROM persons WHERE id = ?")
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?;
        Ok(row.is_some())
    }

    /// Parent of the given person, `None` for roots and unknown IDs
    pub async fn parent_of(&self, id: i64) -> Result<Option<i64>> {
        let row = sqlx::query("SELECT parent FROM persons WHERE id = ?")
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?;
        Ok(row.and_then(|r| r.get::<Option<i64>, _>("parent")))
    }
}

pub(crate) fn person_from_row(row: &SqliteRow) -> Result<Person> {
    let has_children = match row.try_get::<bool, _>("has_children") {
        Ok(flag) => flag,
        Err(sqlx::Error::ColumnNotFound(_)) => false,
        Err(e) => return Err(e.into()),
    };

    Ok(Person {
        id: row.try_get("id")?,
        parent: row.try_get("parent")?,
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        date_of_birth: row.try_get::<Option<NaiveDate>, _>("date_of_birth")?,
        has_children,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn setup_test() -> PersonRepository {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        PersonRepository::new(db)
    }

    fn new_person(parent: Option<i64>, first: &str, last: &str) -> Person {
        Person {
            id: 0,
            parent,
            first_name: first.to_string(),
            last_name: last.to_string(),
            date_of_birth: None,
            has_children: false,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let repo = setup_test().await;

        let first = repo.insert_person(&new_person(None, "Lenka", "Stikova")).await.unwrap();
        let second = repo.insert_person(&new_person(None, "Gary", "MacDonald")).await.unwrap();

        assert!(second > first);
    }

    #[tokio::test]
    async fn test_get_person_round_trip() {
        let repo = setup_test().await;
        let mut person = new_person(None, "Michaela", "MacDonald");
        person.date_of_birth = NaiveDate::from_ymd_opt(1985, 7, 23);

        let id = repo.insert_person(&person).await.unwrap();
        let stored = repo.get_person(id).await.unwrap().expect("Person should exist");

        assert_eq!(stored.id, id);
        assert_eq!(stored.first_name, "Michaela");
        assert_eq!(stored.date_of_birth, person.date_of_birth);
        assert!(!stored.has_children);
    }

    #[tokio::test]
    async fn test_get_missing_person() {
        let repo = setup_test().await;
        assert!(repo.get_person(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_child_flag_is_derived() {
        let repo = setup_test().await;
        let root = repo.insert_person(&new_person(None, "Root", "Person")).await.unwrap();
        let child = repo.insert_person(&new_person(Some(root), "Child", "Person")).await.unwrap();

        assert!(repo.get_person(root).await.unwrap().unwrap().has_children);
        assert!(!repo.get_person(child).await.unwrap().unwrap().has_children);

        repo.delete_person(child).await.unwrap();
        assert!(!repo.get_person(root).await.unwrap().unwrap().has_children);
    }

    #[tokio::test]
    async fn test_list_children_and_roots() {
        let repo = setup_test().await;
        let root = repo.insert_person(&new_person(None, "Root", "A")).await.unwrap();
        let other_root = repo.insert_person(&new_person(None, "Root", "B")).await.unwrap();
        let c1 = repo.insert_person(&new_person(Some(root), "Child", "One")).await.unwrap();
        let c2 = repo.insert_person(&new_person(Some(root), "Child", "Two")).await.unwrap();
        repo.insert_person(&new_person(Some(c1), "Grand", "Child")).await.unwrap();

        let roots: Vec<i64> = repo.list_children(None).await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(roots, vec![root, other_root]);

        let children: Vec<i64> = repo.list_children(Some(root)).await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(children, vec![c1, c2]);

        assert_eq!(repo.count_children(root).await.unwrap(), 2);
        assert_eq!(repo.count_children(c1).await.unwrap(), 1);
        assert_eq!(repo.count_children(c2).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let repo = setup_test().await;
        let id = repo.insert_person(&new_person(None, "Gary", "MacDonald")).await.unwrap();

        let mut changed = new_person(None, "Garry", "McDonald");
        changed.id = id;
        changed.date_of_birth = NaiveDate::from_ymd_opt(1967, 5, 27);
        assert!(repo.update_person(&changed).await.unwrap());

        let stored = repo.get_person(id).await.unwrap().unwrap();
        assert_eq!(stored.first_name, "Garry");
        assert_eq!(stored.last_name, "McDonald");
        assert_eq!(stored.date_of_birth, changed.date_of_birth);

        changed.id = 999;
        assert!(!repo.update_person(&changed).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_parent_is_rejected_by_store() {
        let repo = setup_test().await;
        let root = repo.insert_person(&new_person(None, "Root", "Person")).await.unwrap();
        repo.insert_person(&new_person(Some(root), "Child", "Person")).await.unwrap();

        assert!(repo.delete_person(root).await.is_err());
        assert!(repo.person_exists(root).await.unwrap());
    }

    #[tokio::test]
    async fn test_parent_of() {
        let repo = setup_test().await;
        let root = repo.insert_person(&new_person(None, "Root", "Person")).await.unwrap();
        let child = repo.insert_person(&new_person(Some(root), "Child", "Person")).await.unwrap();

        assert_eq!(repo.parent_of(child).await.unwrap(), Some(root));
        assert_eq!(repo.parent_of(root).await.unwrap(), None);
        assert_eq!(repo.parent_of(12345).await.unwrap(), None);
    }
}
