//! Discovery of the selectable filter values, for populating the dashboard's
//! sidebar. Cities are the union of provider cities and listing locations.

use serde::Serialize;
use sqlx::PgPool;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub cities: Vec<String>,
    pub provider_types: Vec<String>,
    pub food_types: Vec<String>,
    pub meal_types: Vec<String>,
    pub claim_statuses: Vec<String>,
}

impl FilterOptions {
    pub async fn load(pool: &PgPool) -> Result<Self, sqlx::Error> {
        let cities = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT city FROM providers WHERE city IS NOT NULL \
             UNION \
             SELECT DISTINCT location FROM food_listings WHERE location IS NOT NULL \
             ORDER BY 1",
        )
        .fetch_all(pool)
        .await?;

        let provider_types = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT type FROM providers WHERE type IS NOT NULL ORDER BY type",
        )
        .fetch_all(pool)
        .await?;

        let food_types = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT food_type FROM food_listings WHERE food_type IS NOT NULL \
             ORDER BY food_type",
        )
        .fetch_all(pool)
        .await?;

        let meal_types = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT meal_type FROM food_listings WHERE meal_type IS NOT NULL \
             ORDER BY meal_type",
        )
        .fetch_all(pool)
        .await?;

        let claim_statuses = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT status FROM claims WHERE status IS NOT NULL ORDER BY status",
        )
        .fetch_all(pool)
        .await?;

        Ok(Self {
            cities,
            provider_types,
            food_types,
            meal_types,
            claim_statuses,
        })
    }
}
