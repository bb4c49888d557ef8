use anyhow::Result;
use sqlx::Row;

use crate::domain::models::{Family, Person};
use crate::storage::connection::DbConnection;
use crate::storage::repositories::person_repository::person_from_row;

/// Read access to families and their members
#[derive(Clone)]
pub struct FamilyRepository {
    db: DbConnection,
}

impl FamilyRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    pub async fn list_families(&self) -> Result<Vec<Family>> {
        let rows = sqlx::query("SELECT id, name FROM families ORDER BY id ASC")
            .fetch_all(self.db.pool())
            .await?;

        let families = rows
            .iter()
            .map(|row| Family {
                id: row.get("id"),
                name: row.get("name"),
            })
            .collect();

        Ok(families)
    }

    pub async fn get_family(&self, id: i64) -> Result<Option<Family>> {
        let row = sqlx::query("SELECT id, name FROM families WHERE id = ?")
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?;

        Ok(row.map(|r| Family {
            id: r.get("id"),
            name: r.get("name"),
        }))
    }

    /// Persons belonging to a family, ordered by person ID
    pub async fn list_members(&self, family_id: i64) -> Result<Vec<Person>> {
        let rows = sqlx::query(
            r#"
            SELECT p.id, p.parent, p.first_name, p.last_name, p.date_of_birth,
                   EXISTS (SELECT 1 FROM persons c WHERE c.parent = p.id) AS has_children
            FROM family_members fm
            JOIN persons p ON p.id = fm.person_id
            WHERE fm.family_id = ?
            ORDER BY p.id ASC
            "#,
        )
        .bind(family_id)
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(person_from_row).collect()
    }

    #[cfg(test)]
    pub async fn add_member(&self, family_id: i64, person_id: i64) -> Result<()> {
        sqlx::query("INSERT INTO family_members (family_id, person_id) VALUES (?, ?)")
            .bind(family_id)
            .bind(person_id)
            .execute(self.db.pool())
            .await?;
        Ok(())
    }
}
