//! Reports anchored on food listings.

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use super::catalog::Report;
use super::push_city_filter;
use crate::query_builder::{FilterSet, FilteredQuery};

/// Row of [`city_highest_listings`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct CityListingCount {
    pub city: Option<String>,
    pub listings: i64,
}

fn city_highest_listings_query(filters: &FilterSet) -> FilteredQuery {
    let mut query = FilteredQuery::new(
        "SELECT location AS city, COUNT(*) AS listings FROM food_listings",
    );
    push_city_filter(&mut query, Report::CityHighestListings, &filters.cities);
    query.push_in("provider_type", &filters.provider_types);
    query.push_in("food_type", &filters.food_types);
    query.push_in("meal_type", &filters.meal_types);
    query.push_sql(" GROUP BY location ORDER BY listings DESC");
    query
}

/// Listing counts per location, highest first. Accepts all four listing
/// dimensions.
pub async fn city_highest_listings(
    pool: &PgPool,
    filters: &FilterSet,
) -> Result<Vec<CityListingCount>, sqlx::Error> {
    city_highest_listings_query(filters).fetch_all(pool).await
}

/// Row of [`common_food_types`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct FoodTypeCount {
    pub food_type: Option<String>,
    pub count: i64,
}

fn common_food_types_query(filters: &FilterSet) -> FilteredQuery {
    let mut query =
        FilteredQuery::new("SELECT food_type, COUNT(*) AS count FROM food_listings");
    push_city_filter(&mut query, Report::CommonFoodTypes, &filters.cities);
    query.push_sql(" GROUP BY food_type ORDER BY count DESC");
    query
}

/// Food types by listing volume, most common first.
pub async fn common_food_types(
    pool: &PgPool,
    filters: &FilterSet,
) -> Result<Vec<FoodTypeCount>, sqlx::Error> {
    common_food_types_query(filters).fetch_all(pool).await
}

/// Grand total of listed quantity, unfiltered. Kept alongside the filtered
/// KPI for callers that want the global figure.
pub async fn total_food_quantity_unfiltered(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COALESCE(SUM(quantity), 0) FROM food_listings")
        .fetch_one(pool)
        .await
}
