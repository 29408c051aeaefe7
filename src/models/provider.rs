use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use super::{require_nonempty, trim_in_place};
use crate::constants::ProviderType;
use crate::error::Result;
use crate::logging::log_database_operation;
use crate::query_builder::{FilterSet, FilteredQuery};

const PROVIDER_COLUMNS: &str = "provider_id, name, type AS provider_type, address, city, contact";

/// Maps to the `providers` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Provider {
    pub provider_id: i32,
    pub name: String,
    pub provider_type: String,
    pub address: Option<String>,
    pub city: String,
    pub contact: Option<String>,
}

/// Field set for creating a provider; the id is assigned at insert time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProvider {
    pub name: String,
    pub provider_type: ProviderType,
    pub address: String,
    pub city: String,
    pub contact: String,
}

impl NewProvider {
    fn validated(mut self) -> Result<Self> {
        trim_in_place(&mut self.name);
        trim_in_place(&mut self.address);
        trim_in_place(&mut self.city);
        trim_in_place(&mut self.contact);
        require_nonempty("provider name", &self.name)?;
        require_nonempty("provider city", &self.city)?;
        Ok(self)
    }
}

/// Partial update; `None` keeps the stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderChanges {
    pub name: Option<String>,
    pub provider_type: Option<ProviderType>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub contact: Option<String>,
}

impl ProviderChanges {
    fn validated(mut self) -> Result<Self> {
        for field in [&mut self.name, &mut self.address, &mut self.city, &mut self.contact] {
            if let Some(value) = field {
                trim_in_place(value);
            }
        }
        if let Some(name) = &self.name {
            require_nonempty("provider name", name)?;
        }
        if let Some(city) = &self.city {
            require_nonempty("provider city", city)?;
        }
        Ok(self)
    }
}

impl Provider {
    /// Insert with an id one greater than the current maximum. The subselect
    /// runs inside the insert statement, so sequential creates never collide.
    pub async fn create(pool: &PgPool, new_provider: NewProvider) -> Result<Provider> {
        let new_provider = new_provider.validated()?;

        let provider = sqlx::query_as::<_, Provider>(
            r#"
            INSERT INTO providers (provider_id, name, type, address, city, contact)
            VALUES ((SELECT COALESCE(MAX(provider_id), 0) + 1 FROM providers), $1, $2, $3, $4, $5)
            RETURNING provider_id, name, type AS provider_type, address, city, contact
            "#,
        )
        .bind(&new_provider.name)
        .bind(new_provider.provider_type.as_str())
        .bind(&new_provider.address)
        .bind(&new_provider.city)
        .bind(&new_provider.contact)
        .fetch_one(pool)
        .await?;

        log_database_operation(
            "create",
            "providers",
            Some(i64::from(provider.provider_id)),
            "ok",
            None,
        );
        Ok(provider)
    }

    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Provider>, sqlx::Error> {
        sqlx::query_as::<_, Provider>(&format!(
            "SELECT {PROVIDER_COLUMNS} FROM providers WHERE provider_id = $1"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn exists(pool: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM providers WHERE provider_id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Contact-ready provider list for the explore view, narrowed by the city
    /// and provider-type dimensions.
    pub async fn list(pool: &PgPool, filters: &FilterSet) -> Result<Vec<Provider>, sqlx::Error> {
        let mut query =
            FilteredQuery::new(&format!("SELECT {PROVIDER_COLUMNS} FROM providers"));
        query.push_in("city", &filters.cities);
        query.push_in("type", &filters.provider_types);
        query.push_sql(" ORDER BY city, name");
        query.fetch_all(pool).await
    }

    /// Update in place; unset fields keep their stored values. Updating a
    /// missing id succeeds with zero rows affected.
    pub async fn update(pool: &PgPool, id: i32, changes: ProviderChanges) -> Result<u64> {
        let changes = changes.validated()?;

        let result = sqlx::query(
            r#"
            UPDATE providers
            SET name = COALESCE($2, name),
                type = COALESCE($3, type),
                address = COALESCE($4, address),
                city = COALESCE($5, city),
                contact = COALESCE($6, contact)
            WHERE provider_id = $1
            "#,
        )
        .bind(id)
        .bind(changes.name)
        .bind(changes.provider_type.map(|t| t.as_str().to_string()))
        .bind(changes.address)
        .bind(changes.city)
        .bind(changes.contact)
        .execute(pool)
        .await?;

        log_database_operation("update", "providers", Some(i64::from(id)), "ok", None);
        Ok(result.rows_affected())
    }

    /// Delete by id. The store's foreign-key policy decides whether dependent
    /// food listings block or cascade; a missing id affects zero rows.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<u64> {
        let result = sqlx::query("DELETE FROM providers WHERE provider_id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        log_database_operation("delete", "providers", Some(i64::from(id)), "ok", None);
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FoodShareError;

    fn new_provider() -> NewProvider {
        NewProvider {
            name: "  Annapurna Kitchen  ".to_string(),
            provider_type: ProviderType::Restaurant,
            address: " 12 MG Road ".to_string(),
            city: " Delhi ".to_string(),
            contact: " 98765 ".to_string(),
        }
    }

    #[test]
    fn create_fields_are_trimmed() {
        let validated = new_provider().validated().unwrap();
        assert_eq!(validated.name, "Annapurna Kitchen");
        assert_eq!(validated.address, "12 MG Road");
        assert_eq!(validated.city, "Delhi");
        assert_eq!(validated.contact, "98765");
    }

    #[test]
    fn empty_name_or_city_is_rejected() {
        let mut p = new_provider();
        p.name = "   ".to_string();
        assert!(matches!(
            p.validated(),
            Err(FoodShareError::Validation(_))
        ));

        let mut p = new_provider();
        p.city = String::new();
        assert!(p.validated().is_err());
    }

    #[test]
    fn changes_reject_explicitly_empty_required_fields() {
        let changes = ProviderChanges {
            city: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(changes.validated().is_err());

        let changes = ProviderChanges {
            name: Some(" Fresh Mart ".to_string()),
            ..Default::default()
        };
        let validated = changes.validated().unwrap();
        assert_eq!(validated.name.as_deref(), Some("Fresh Mart"));
        assert!(validated.city.is_none());
    }
}
