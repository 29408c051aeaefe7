//! Reports anchored on providers.

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use super::catalog::Report;
use super::push_city_filter;
use crate::constants::ClaimStatus;
use crate::query_builder::{FilterSet, FilteredQuery};

/// Row of [`providers_per_city`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct CityProviderCount {
    pub city: Option<String>,
    pub provider_count: i64,
}

fn providers_per_city_query(filters: &FilterSet) -> FilteredQuery {
    let mut query =
        FilteredQuery::new("SELECT city, COUNT(*) AS provider_count FROM providers");
    push_city_filter(&mut query, Report::ProvidersPerCity, &filters.cities);
    query.push_in("type", &filters.provider_types);
    query.push_sql(" GROUP BY city");
    query
}

/// Providers grouped by their own city.
pub async fn providers_per_city(
    pool: &PgPool,
    filters: &FilterSet,
) -> Result<Vec<CityProviderCount>, sqlx::Error> {
    providers_per_city_query(filters).fetch_all(pool).await
}

/// Row of [`top_provider_types`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ProviderTypeContribution {
    pub provider_type: Option<String>,
    pub contribution_count: i64,
}

fn top_provider_types_query(filters: &FilterSet) -> FilteredQuery {
    let mut query = FilteredQuery::new(
        "SELECT type AS provider_type, COUNT(*) AS contribution_count FROM providers",
    );
    push_city_filter(&mut query, Report::TopProviderTypes, &filters.cities);
    query.push_sql(" GROUP BY type ORDER BY contribution_count DESC");
    query
}

/// Provider types by number of providers, most common first.
pub async fn top_provider_types(
    pool: &PgPool,
    filters: &FilterSet,
) -> Result<Vec<ProviderTypeContribution>, sqlx::Error> {
    top_provider_types_query(filters).fetch_all(pool).await
}

/// Row of [`provider_contacts`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ProviderContact {
    pub name: Option<String>,
    pub city: Option<String>,
    pub contact: Option<String>,
}

fn provider_contacts_query(filters: &FilterSet) -> FilteredQuery {
    let mut query = FilteredQuery::new("SELECT name, city, contact FROM providers");
    push_city_filter(&mut query, Report::ProviderContacts, &filters.cities);
    query
}

/// Contact directory of providers, optionally narrowed by city.
pub async fn provider_contacts(
    pool: &PgPool,
    filters: &FilterSet,
) -> Result<Vec<ProviderContact>, sqlx::Error> {
    provider_contacts_query(filters).fetch_all(pool).await
}

/// Row of [`top_providers_by_successful_claims`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ProviderSuccessfulClaims {
    pub name: Option<String>,
    pub successful_claims: i64,
}

fn top_providers_by_successful_claims_query(filters: &FilterSet) -> FilteredQuery {
    let mut query = FilteredQuery::new(
        "SELECT p.name, COUNT(c.claim_id) AS successful_claims \
         FROM providers p \
         JOIN food_listings f ON p.provider_id = f.provider_id \
         JOIN claims c ON f.food_id = c.food_id",
    );
    query.push_eq("c.status", ClaimStatus::Completed.as_str());
    push_city_filter(
        &mut query,
        Report::TopProvidersBySuccessfulClaims,
        &filters.cities,
    );
    query.push_sql(" GROUP BY p.name ORDER BY successful_claims DESC");
    query
}

/// Providers ranked by completed claims against their listings. The city
/// filter narrows by provider geography, not receiver geography.
pub async fn top_providers_by_successful_claims(
    pool: &PgPool,
    filters: &FilterSet,
) -> Result<Vec<ProviderSuccessfulClaims>, sqlx::Error> {
    top_providers_by_successful_claims_query(filters)
        .fetch_all(pool)
        .await
}

/// Row of [`total_quantity_per_provider`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ProviderQuantity {
    pub name: Option<String>,
    pub total_quantity: i64,
}

fn total_quantity_per_provider_query(filters: &FilterSet) -> FilteredQuery {
    let mut query = FilteredQuery::new(
        "SELECT p.name, SUM(f.quantity) AS total_quantity \
         FROM providers p \
         JOIN food_listings f ON p.provider_id = f.provider_id",
    );
    push_city_filter(&mut query, Report::TotalQuantityPerProvider, &filters.cities);
    query.push_sql(" GROUP BY p.name ORDER BY total_quantity DESC");
    query
}

/// Quantity donated by each provider, largest first.
pub async fn total_quantity_per_provider(
    pool: &PgPool,
    filters: &FilterSet,
) -> Result<Vec<ProviderQuantity>, sqlx::Error> {
    total_quantity_per_provider_query(filters).fetch_all(pool).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn providers_per_city_composes_both_dimensions() {
        assert_eq!(
            providers_per_city_query(&FilterSet::none()).sql(),
            "SELECT city, COUNT(*) AS provider_count FROM providers GROUP BY city"
        );

        let filters = FilterSet::none()
            .with_cities(["Delhi"])
            .with_provider_types(["Restaurant", "Supermarket"]);
        assert_eq!(
            providers_per_city_query(&filters).sql(),
            "SELECT city, COUNT(*) AS provider_count FROM providers \
             WHERE city = ANY($1) AND type = ANY($2) GROUP BY city"
        );
    }

    #[test]
    fn top_provider_types_orders_descending() {
        let sql = top_provider_types_query(&FilterSet::none()).sql().to_string();
        assert!(sql.ends_with("GROUP BY type ORDER BY contribution_count DESC"));
    }

    #[test]
    fn successful_claims_prefilters_completed_and_binds_provider_city() {
        let filters = FilterSet::none().with_cities(["Delhi"]);
        let sql = top_providers_by_successful_claims_query(&filters)
            .sql()
            .to_string();
        assert!(sql.contains("WHERE c.status = $1"));
        assert!(sql.contains("AND p.city = ANY($2)"));
        assert!(sql.ends_with("GROUP BY p.name ORDER BY successful_claims DESC"));
    }

    #[test]
    fn quantity_per_provider_binds_provider_city() {
        let filters = FilterSet::none().with_cities(["Delhi"]);
        let sql = total_quantity_per_provider_query(&filters).sql().to_string();
        assert!(sql.contains("WHERE p.city = ANY($1)"));
    }
}
