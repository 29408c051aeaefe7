//! Reports anchored on claims.

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use super::catalog::Report;
use super::push_city_filter;
use crate::query_builder::{FilterSet, FilteredQuery};

/// Row of [`claims_per_food`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct FoodClaimCount {
    pub food_name: Option<String>,
    pub claim_count: i64,
}

fn claims_per_food_query(filters: &FilterSet) -> FilteredQuery {
    let mut query = FilteredQuery::new(
        "SELECT f.food_name, COUNT(c.claim_id) AS claim_count \
         FROM food_listings f \
         JOIN claims c ON f.food_id = c.food_id \
         JOIN receivers r ON c.receiver_id = r.receiver_id",
    );
    push_city_filter(&mut query, Report::ClaimsPerFood, &filters.cities);
    query.push_in("c.status", &filters.claim_statuses);
    query.push_sql(" GROUP BY f.food_name ORDER BY claim_count DESC");
    query
}

/// Claim volume per food item, most claimed first. The city filter narrows by
/// the claiming receiver's city.
pub async fn claims_per_food(
    pool: &PgPool,
    filters: &FilterSet,
) -> Result<Vec<FoodClaimCount>, sqlx::Error> {
    claims_per_food_query(filters).fetch_all(pool).await
}

/// Row of [`claim_status_distribution`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ClaimStatusCount {
    pub status: Option<String>,
    pub count: i64,
}

fn claim_status_distribution_query(filters: &FilterSet) -> FilteredQuery {
    let mut query = FilteredQuery::new("SELECT c.status, COUNT(*) AS count FROM claims c");
    push_city_filter(&mut query, Report::ClaimStatusDistribution, &filters.cities);
    query.push_sql(" GROUP BY c.status");
    query
}

/// Claims per lifecycle status. Unfiltered, this is a plain scan of the
/// claims table; the receiver join appears only with a city filter.
pub async fn claim_status_distribution(
    pool: &PgPool,
    filters: &FilterSet,
) -> Result<Vec<ClaimStatusCount>, sqlx::Error> {
    claim_status_distribution_query(filters).fetch_all(pool).await
}

/// Row of [`most_claimed_meal_type`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct MealTypeClaimCount {
    pub meal_type: Option<String>,
    pub claim_count: i64,
}

fn most_claimed_meal_type_query(filters: &FilterSet) -> FilteredQuery {
    let mut query = FilteredQuery::new(
        "SELECT f.meal_type, COUNT(c.claim_id) AS claim_count \
         FROM food_listings f \
         JOIN claims c ON f.food_id = c.food_id \
         JOIN receivers r ON c.receiver_id = r.receiver_id",
    );
    push_city_filter(&mut query, Report::MostClaimedMealType, &filters.cities);
    query.push_sql(" GROUP BY f.meal_type ORDER BY claim_count DESC");
    query
}

/// Meal types ranked by claim volume.
pub async fn most_claimed_meal_type(
    pool: &PgPool,
    filters: &FilterSet,
) -> Result<Vec<MealTypeClaimCount>, sqlx::Error> {
    most_claimed_meal_type_query(filters).fetch_all(pool).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claims_per_food_composes_city_and_status() {
        let filters = FilterSet::none()
            .with_cities(["Delhi"])
            .with_claim_statuses(["Completed", "Pending"]);
        let sql = claims_per_food_query(&filters).sql().to_string();
        assert!(sql.contains("WHERE r.city = ANY($1) AND c.status = ANY($2)"));
        assert!(sql.ends_with("GROUP BY f.food_name ORDER BY claim_count DESC"));
    }

    #[test]
    fn status_distribution_has_no_join_without_city_filter() {
        assert_eq!(
            claim_status_distribution_query(&FilterSet::none()).sql(),
            "SELECT c.status, COUNT(*) AS count FROM claims c GROUP BY c.status"
        );

        let filtered = FilterSet::none().with_cities(["Delhi"]);
        assert_eq!(
            claim_status_distribution_query(&filtered).sql(),
            "SELECT c.status, COUNT(*) AS count FROM claims c \
             JOIN receivers r ON c.receiver_id = r.receiver_id \
             WHERE r.city = ANY($1) GROUP BY c.status"
        );
    }

    #[test]
    fn meal_type_report_binds_receiver_city() {
        let filters = FilterSet::none().with_cities(["Pune"]);
        let sql = most_claimed_meal_type_query(&filters).sql().to_string();
        assert!(sql.contains("WHERE r.city = ANY($1)"));
    }
}
