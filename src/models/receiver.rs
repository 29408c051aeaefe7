use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use super::{require_nonempty, trim_in_place};
use crate::constants::ReceiverType;
use crate::error::Result;
use crate::logging::log_database_operation;
use crate::query_builder::{FilterSet, FilteredQuery};

const RECEIVER_COLUMNS: &str = "receiver_id, name, type AS receiver_type, city, contact";

/// Maps to the `receivers` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Receiver {
    pub receiver_id: i32,
    pub name: String,
    pub receiver_type: String,
    pub city: String,
    pub contact: Option<String>,
}

/// Field set for creating a receiver; the id is assigned at insert time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReceiver {
    pub name: String,
    pub receiver_type: ReceiverType,
    pub city: String,
    pub contact: String,
}

impl NewReceiver {
    fn validated(mut self) -> Result<Self> {
        trim_in_place(&mut self.name);
        trim_in_place(&mut self.city);
        trim_in_place(&mut self.contact);
        require_nonempty("receiver name", &self.name)?;
        require_nonempty("receiver city", &self.city)?;
        Ok(self)
    }
}

/// Partial update; `None` keeps the stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReceiverChanges {
    pub name: Option<String>,
    pub receiver_type: Option<ReceiverType>,
    pub city: Option<String>,
    pub contact: Option<String>,
}

impl ReceiverChanges {
    fn validated(mut self) -> Result<Self> {
        for field in [&mut self.name, &mut self.city, &mut self.contact] {
            if let Some(value) = field {
                trim_in_place(value);
            }
        }
        if let Some(name) = &self.name {
            require_nonempty("receiver name", name)?;
        }
        if let Some(city) = &self.city {
            require_nonempty("receiver city", city)?;
        }
        Ok(self)
    }
}

impl Receiver {
    /// Insert with an id one greater than the current maximum, assigned
    /// atomically inside the statement.
    pub async fn create(pool: &PgPool, new_receiver: NewReceiver) -> Result<Receiver> {
        let new_receiver = new_receiver.validated()?;

        let receiver = sqlx::query_as::<_, Receiver>(
            r#"
            INSERT INTO receivers (receiver_id, name, type, city, contact)
            VALUES ((SELECT COALESCE(MAX(receiver_id), 0) + 1 FROM receivers), $1, $2, $3, $4)
            RETURNING receiver_id, name, type AS receiver_type, city, contact
            "#,
        )
        .bind(&new_receiver.name)
        .bind(new_receiver.receiver_type.as_str())
        .bind(&new_receiver.city)
        .bind(&new_receiver.contact)
        .fetch_one(pool)
        .await?;

        log_database_operation(
            "create",
            "receivers",
            Some(i64::from(receiver.receiver_id)),
            "ok",
            None,
        );
        Ok(receiver)
    }

    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Receiver>, sqlx::Error> {
        sqlx::query_as::<_, Receiver>(&format!(
            "SELECT {RECEIVER_COLUMNS} FROM receivers WHERE receiver_id = $1"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn exists(pool: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM receivers WHERE receiver_id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Receiver list for the explore view, narrowed by the city dimension.
    pub async fn list(pool: &PgPool, filters: &FilterSet) -> Result<Vec<Receiver>, sqlx::Error> {
        let mut query =
            FilteredQuery::new(&format!("SELECT {RECEIVER_COLUMNS} FROM receivers"));
        query.push_in("city", &filters.cities);
        query.push_sql(" ORDER BY city, name");
        query.fetch_all(pool).await
    }

    pub async fn update(pool: &PgPool, id: i32, changes: ReceiverChanges) -> Result<u64> {
        let changes = changes.validated()?;

        let result = sqlx::query(
            r#"
            UPDATE receivers
            SET name = COALESCE($2, name),
                type = COALESCE($3, type),
                city = COALESCE($4, city),
                contact = COALESCE($5, contact)
            WHERE receiver_id = $1
            "#,
        )
        .bind(id)
        .bind(changes.name)
        .bind(changes.receiver_type.map(|t| t.as_str().to_string()))
        .bind(changes.city)
        .bind(changes.contact)
        .execute(pool)
        .await?;

        log_database_operation("update", "receivers", Some(i64::from(id)), "ok", None);
        Ok(result.rows_affected())
    }

    /// Delete by id; claims referencing the receiver make the store reject or
    /// cascade depending on its foreign-key policy.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<u64> {
        let result = sqlx::query("DELETE FROM receivers WHERE receiver_id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        log_database_operation("delete", "receivers", Some(i64::from(id)), "ok", None);
        Ok(result.rows_affected())
    }
}
