use anyhow::Result;
use tracing::{debug, info};

use crate::domain::models::SeedData;
use crate::storage::connection::{create_people_tables, DbConnection, PEOPLE_TABLE_NAMES};

/// Rebuilds the person hierarchy tables from a seed dataset
#[derive(Clone)]
pub struct SeedRepository {
    db: DbConnection,
}

impl SeedRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// Drop and recreate the family, person and membership tables, then load `seed`.
    ///
    /// Everything runs in one transaction: either the new dataset is fully in place
    /// or the previous tables are left untouched.
    pub async fn reset_people(&self, seed: &SeedData) -> Result<()> {
        let mut tx = self.db.pool().begin().await?;

        for table in PEOPLE_TABLE_NAMES {
            let statement = format!("DROP TABLE IF EXISTS {}", table);
            sqlx::query(&statement).execute(&mut *tx).await?;
        }
        create_people_tables(&mut tx).await?;
        debug!("Recreated hierarchy tables");

        for family in &seed.families {
            sqlx::query("INSERT INTO families (id, name) VALUES (?, ?)")
                .bind(family.id)
                .bind(&family.name)
                .execute(&mut *tx)
                .await?;
        }

        for person in &seed.persons {
            sqlx::query(
                r#"
                INSERT INTO persons (id, parent, first_name, last_name, date_of_birth)
                VALUES (?, ?, ?, ?, ?)
                "#,
            )
            .bind(person.id)
            .bind(person.parent)
            .bind(&person.first_name)
            .bind(&person.last_name)
            .bind(person.date_of_birth)
            .execute(&mut *tx)
            .await?;
        }

        for member in &seed.members {
            sqlx::query("INSERT INTO family_members (family_id, person_id) VALUES (?, ?)")
                .bind(member.family_id)
                .bind(member.person_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        info!(
            "Loaded seed data: {} families, {} persons, {} memberships",
            seed.families.len(),
            seed.persons.len(),
            seed.members.len()
        );
        Ok(())
    }
}
