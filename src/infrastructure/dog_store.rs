use crate::domain::{Dog, DogId, DogName, InsertDog};
use crate::error::{Error, Result};
use chrono::NaiveDate;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

/// Postgres-backed dog lookup and persistence.
#[derive(Clone)]
pub struct DogStore {
    pool: PgPool,
}

impl DogStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: DogId) -> Result<Option<Dog>> {
        let row = sqlx::query("SELECT id, name, birthday FROM dogs WHERE id = $1")
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await?;
        row.map(dog_from_row).transpose()
    }

    pub async fn find_by_name_and_birthday(
        &self,
        name: &DogName,
        birthday: NaiveDate,
    ) -> Result<Option<Dog>> {
        let row =
            sqlx::query("SELECT id, name, birthday FROM dogs WHERE name = $1 AND birthday = $2")
                .bind(name.as_ref())
                .bind(birthday)
                .fetch_optional(&self.pool)
                .await?;
        row.map(dog_from_row).transpose()
    }

    /// Resolve names to known dogs. Names with no match are simply absent
    /// from the result; the registry computes the difference.
    pub async fn find_all_by_names(&self, names: &[String]) -> Result<Vec<Dog>> {
        let rows = sqlx::query("SELECT id, name, birthday FROM dogs WHERE name = ANY($1)")
            .bind(names)
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(dog_from_row).collect()
    }

    /// Execute a pending dog insert. Writes exactly one row and returns
    /// the identity the store assigned to it.
    pub async fn insert(&self, command: &InsertDog) -> Result<DogId> {
        let row = sqlx::query("INSERT INTO dogs (name, birthday) VALUES ($1, $2) RETURNING id")
            .bind(command.dog().name.as_ref())
            .bind(command.dog().birthday)
            .fetch_one(&self.pool)
            .await?;
        Ok(DogId::new(row.try_get::<i64, _>("id")?))
    }
}

pub(crate) fn dog_from_row(row: PgRow) -> Result<Dog> {
    let name: String = row.try_get("name")?;
    let name = DogName::try_new(name).map_err(|error| Error::invalid_dog_name(error.to_string()))?;
    Ok(Dog {
        id: DogId::new(row.try_get::<i64, _>("id")?),
        name,
        birthday: row.try_get("birthday")?,
    })
}
