use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use super::provider::Provider;
use super::{require_nonempty, trim_in_place};
use crate::constants::{FoodType, MealType, ProviderType};
use crate::error::{FoodShareError, Result};
use crate::logging::log_database_operation;
use crate::query_builder::{FilterSet, FilteredQuery};

const FOOD_COLUMNS: &str = "food_id, food_name, quantity, expiry_date, provider_id, \
                            provider_type, location, food_type, meal_type";

/// Maps to the `food_listings` table. `provider_type` is a denormalized
/// snapshot taken at creation, not re-validated against the live provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct FoodListing {
    pub food_id: i32,
    pub food_name: String,
    pub quantity: i32,
    pub expiry_date: NaiveDate,
    pub provider_id: i32,
    pub provider_type: String,
    pub location: String,
    pub food_type: String,
    pub meal_type: String,
}

/// Field set for creating a listing; the id is assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFoodListing {
    pub food_name: String,
    pub quantity: i32,
    pub expiry_date: NaiveDate,
    pub provider_id: i32,
    pub provider_type: ProviderType,
    pub location: String,
    pub food_type: FoodType,
    pub meal_type: MealType,
}

impl NewFoodListing {
    fn validated(mut self) -> Result<Self> {
        trim_in_place(&mut self.food_name);
        trim_in_place(&mut self.location);
        require_nonempty("food name", &self.food_name)?;
        require_nonempty("location", &self.location)?;
        Ok(self)
    }
}

/// The updatable subset of a listing; `None` keeps the stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FoodListingChanges {
    pub quantity: Option<i32>,
    pub expiry_date: Option<NaiveDate>,
    pub location: Option<String>,
    pub meal_type: Option<MealType>,
}

impl FoodListingChanges {
    fn validated(mut self) -> Result<Self> {
        if let Some(location) = &mut self.location {
            trim_in_place(location);
            require_nonempty("location", location)?;
        }
        Ok(self)
    }
}

impl FoodListing {
    /// Insert a listing. The referenced provider must exist at validation
    /// time; the check goes straight to the store, so a provider created a
    /// moment earlier is already visible.
    pub async fn create(pool: &PgPool, new_listing: NewFoodListing) -> Result<FoodListing> {
        let new_listing = new_listing.validated()?;

        if !Provider::exists(pool, new_listing.provider_id).await? {
            return Err(FoodShareError::Validation(format!(
                "provider {} does not exist",
                new_listing.provider_id
            )));
        }

        let listing = sqlx::query_as::<_, FoodListing>(
            r#"
            INSERT INTO food_listings
                (food_name, quantity, expiry_date, provider_id, provider_type,
                 location, food_type, meal_type)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING food_id, food_name, quantity, expiry_date, provider_id,
                      provider_type, location, food_type, meal_type
            "#,
        )
        .bind(&new_listing.food_name)
        .bind(new_listing.quantity)
        .bind(new_listing.expiry_date)
        .bind(new_listing.provider_id)
        .bind(new_listing.provider_type.as_str())
        .bind(&new_listing.location)
        .bind(new_listing.food_type.as_str())
        .bind(new_listing.meal_type.as_str())
        .fetch_one(pool)
        .await?;

        log_database_operation(
            "create",
            "food_listings",
            Some(i64::from(listing.food_id)),
            "ok",
            None,
        );
        Ok(listing)
    }

    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<FoodListing>, sqlx::Error> {
        sqlx::query_as::<_, FoodListing>(&format!(
            "SELECT {FOOD_COLUMNS} FROM food_listings WHERE food_id = $1"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn exists(pool: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM food_listings WHERE food_id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Listing view, narrowed by location, provider type, food type and meal
    /// type, ordered by location then soonest expiry.
    pub async fn list(pool: &PgPool, filters: &FilterSet) -> Result<Vec<FoodListing>, sqlx::Error> {
        let mut query =
            FilteredQuery::new(&format!("SELECT {FOOD_COLUMNS} FROM food_listings"));
        query.push_in("location", &filters.cities);
        query.push_in("provider_type", &filters.provider_types);
        query.push_in("food_type", &filters.food_types);
        query.push_in("meal_type", &filters.meal_types);
        query.push_sql(" ORDER BY location, expiry_date");
        query.fetch_all(pool).await
    }

    pub async fn update(pool: &PgPool, id: i32, changes: FoodListingChanges) -> Result<u64> {
        let changes = changes.validated()?;

        let result = sqlx::query(
            r#"
            UPDATE food_listings
            SET quantity = COALESCE($2, quantity),
                expiry_date = COALESCE($3, expiry_date),
                location = COALESCE($4, location),
                meal_type = COALESCE($5, meal_type)
            WHERE food_id = $1
            "#,
        )
        .bind(id)
        .bind(changes.quantity)
        .bind(changes.expiry_date)
        .bind(changes.location)
        .bind(changes.meal_type.map(|t| t.as_str().to_string()))
        .execute(pool)
        .await?;

        log_database_operation("update", "food_listings", Some(i64::from(id)), "ok", None);
        Ok(result.rows_affected())
    }

    pub async fn delete(pool: &PgPool, id: i32) -> Result<u64> {
        let result = sqlx::query("DELETE FROM food_listings WHERE food_id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        log_database_operation("delete", "food_listings", Some(i64::from(id)), "ok", None);
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_listing() -> NewFoodListing {
        NewFoodListing {
            food_name: " Rice ".to_string(),
            quantity: 10,
            expiry_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            provider_id: 1,
            provider_type: ProviderType::Restaurant,
            location: " Delhi ".to_string(),
            food_type: FoodType::Vegetarian,
            meal_type: MealType::Lunch,
        }
    }

    #[test]
    fn create_trims_and_requires_name_and_location() {
        let validated = new_listing().validated().unwrap();
        assert_eq!(validated.food_name, "Rice");
        assert_eq!(validated.location, "Delhi");

        let mut bad = new_listing();
        bad.food_name = "   ".to_string();
        assert!(bad.validated().is_err());
    }

    #[test]
    fn changes_reject_blank_location_but_allow_unset() {
        let changes = FoodListingChanges {
            location: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(changes.validated().is_err());

        let changes = FoodListingChanges {
            quantity: Some(0),
            ..Default::default()
        };
        assert!(changes.validated().is_ok());
    }
}
