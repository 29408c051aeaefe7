//! Scalar KPIs for the dashboard header. Each reuses the shared filter
//! composition and returns 0 when nothing matches, never null.

use serde::Serialize;
use sqlx::PgPool;

use super::catalog::Report;
use super::push_city_filter;
use crate::query_builder::{FilterSet, FilteredQuery};

fn count_providers_query(filters: &FilterSet) -> FilteredQuery {
    let mut query = FilteredQuery::new("SELECT COUNT(*) FROM providers");
    push_city_filter(&mut query, Report::CountProviders, &filters.cities);
    query.push_in("type", &filters.provider_types);
    query
}

/// Total providers, optionally narrowed by city and provider type.
pub async fn count_providers(pool: &PgPool, filters: &FilterSet) -> Result<i64, sqlx::Error> {
    count_providers_query(filters).fetch_scalar(pool).await
}

fn count_receivers_query(filters: &FilterSet) -> FilteredQuery {
    let mut query = FilteredQuery::new("SELECT COUNT(*) FROM receivers");
    push_city_filter(&mut query, Report::CountReceivers, &filters.cities);
    query
}

/// Total receivers, optionally narrowed by city.
pub async fn count_receivers(pool: &PgPool, filters: &FilterSet) -> Result<i64, sqlx::Error> {
    count_receivers_query(filters).fetch_scalar(pool).await
}

fn count_claims_query(filters: &FilterSet) -> FilteredQuery {
    let mut query = FilteredQuery::new("SELECT COUNT(*) FROM claims c");
    push_city_filter(&mut query, Report::CountClaims, &filters.cities);
    query.push_in("c.status", &filters.claim_statuses);
    query
}

/// Total claims. The city dimension reaches the receiver through a join that
/// is added only when that filter is active.
pub async fn count_claims(pool: &PgPool, filters: &FilterSet) -> Result<i64, sqlx::Error> {
    count_claims_query(filters).fetch_scalar(pool).await
}

fn total_food_quantity_query(filters: &FilterSet) -> FilteredQuery {
    let mut query = FilteredQuery::new("SELECT COALESCE(SUM(quantity), 0) FROM food_listings");
    push_city_filter(&mut query, Report::TotalFoodQuantity, &filters.cities);
    query.push_in("provider_type", &filters.provider_types);
    query.push_in("food_type", &filters.food_types);
    query.push_in("meal_type", &filters.meal_types);
    query
}

/// Total quantity across listings, narrowed by location, provider type, food
/// type and meal type.
pub async fn total_food_quantity(pool: &PgPool, filters: &FilterSet) -> Result<i64, sqlx::Error> {
    total_food_quantity_query(filters).fetch_scalar(pool).await
}

/// The four header KPIs for one filter selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardKpis {
    pub total_providers: i64,
    pub total_receivers: i64,
    pub total_claims: i64,
    pub total_food_quantity: i64,
}

impl DashboardKpis {
    pub async fn load(pool: &PgPool, filters: &FilterSet) -> Result<Self, sqlx::Error> {
        tracing::debug!(filters = %filters.describe(), "loading dashboard KPIs");
        Ok(Self {
            total_providers: count_providers(pool, filters).await?,
            total_receivers: count_receivers(pool, filters).await?,
            total_claims: count_claims(pool, filters).await?,
            total_food_quantity: total_food_quantity(pool, filters).await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unfiltered_kpis_have_no_where_clause() {
        assert_eq!(
            count_providers_query(&FilterSet::none()).sql(),
            "SELECT COUNT(*) FROM providers"
        );
        assert_eq!(
            total_food_quantity_query(&FilterSet::none()).sql(),
            "SELECT COALESCE(SUM(quantity), 0) FROM food_listings"
        );
    }

    #[test]
    fn claim_count_joins_receivers_only_for_city_filter() {
        let status_only = FilterSet::none().with_claim_statuses(["Pending"]);
        assert_eq!(
            count_claims_query(&status_only).sql(),
            "SELECT COUNT(*) FROM claims c WHERE c.status = ANY($1)"
        );

        let with_city = FilterSet::none()
            .with_cities(["Delhi"])
            .with_claim_statuses(["Pending"]);
        assert_eq!(
            count_claims_query(&with_city).sql(),
            "SELECT COUNT(*) FROM claims c JOIN receivers r ON c.receiver_id = r.receiver_id \
             WHERE r.city = ANY($1) AND c.status = ANY($2)"
        );
    }

    #[test]
    fn quantity_kpi_binds_all_four_listing_dimensions() {
        let filters = FilterSet::none()
            .with_cities(["Delhi"])
            .with_provider_types(["Restaurant"])
            .with_food_types(["Vegan"])
            .with_meal_types(["Lunch"]);
        let sql = total_food_quantity_query(&filters).sql().to_string();
        assert!(sql.contains("location = ANY($1)"));
        assert!(sql.contains("provider_type = ANY($2)"));
        assert!(sql.contains("food_type = ANY($3)"));
        assert!(sql.contains("meal_type = ANY($4)"));
    }
}
