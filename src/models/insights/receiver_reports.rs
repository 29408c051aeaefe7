//! Reports anchored on receivers and their claims.

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use super::catalog::Report;
use super::push_city_filter;
use crate::query_builder::{FilterSet, FilteredQuery};

/// Row of [`receivers_per_city`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct CityReceiverCount {
    pub city: Option<String>,
    pub receiver_count: i64,
}

fn receivers_per_city_query(filters: &FilterSet) -> FilteredQuery {
    let mut query =
        FilteredQuery::new("SELECT city, COUNT(*) AS receiver_count FROM receivers");
    push_city_filter(&mut query, Report::ReceiversPerCity, &filters.cities);
    query.push_sql(" GROUP BY city");
    query
}

/// Receivers grouped by their own city.
pub async fn receivers_per_city(
    pool: &PgPool,
    filters: &FilterSet,
) -> Result<Vec<CityReceiverCount>, sqlx::Error> {
    receivers_per_city_query(filters).fetch_all(pool).await
}

/// Row of [`top_receivers`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct TopReceiver {
    pub name: Option<String>,
    pub city: Option<String>,
    pub total_claims: i64,
}

fn top_receivers_query(filters: &FilterSet) -> FilteredQuery {
    let mut query = FilteredQuery::new(
        "SELECT r.name, r.city, COUNT(c.claim_id) AS total_claims \
         FROM receivers r \
         JOIN claims c ON r.receiver_id = c.receiver_id",
    );
    push_city_filter(&mut query, Report::TopReceivers, &filters.cities);
    query.push_in("c.status", &filters.claim_statuses);
    query.push_sql(" GROUP BY r.name, r.city ORDER BY total_claims DESC");
    query
}

/// Receivers ranked by number of claims, optionally narrowed by receiver city
/// and claim status.
pub async fn top_receivers(
    pool: &PgPool,
    filters: &FilterSet,
) -> Result<Vec<TopReceiver>, sqlx::Error> {
    top_receivers_query(filters).fetch_all(pool).await
}

/// Row of [`avg_quantity_per_receiver`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ReceiverAvgQuantity {
    pub name: Option<String>,
    pub avg_quantity: f64,
}

fn avg_quantity_per_receiver_query(filters: &FilterSet) -> FilteredQuery {
    let mut query = FilteredQuery::new(
        "SELECT r.name, AVG(f.quantity)::FLOAT8 AS avg_quantity \
         FROM receivers r \
         JOIN claims c ON r.receiver_id = c.receiver_id \
         JOIN food_listings f ON c.food_id = f.food_id",
    );
    push_city_filter(&mut query, Report::AvgQuantityPerReceiver, &filters.cities);
    query.push_sql(" GROUP BY r.name ORDER BY avg_quantity DESC");
    query
}

/// Average listed quantity of the food each receiver claims, largest first.
pub async fn avg_quantity_per_receiver(
    pool: &PgPool,
    filters: &FilterSet,
) -> Result<Vec<ReceiverAvgQuantity>, sqlx::Error> {
    avg_quantity_per_receiver_query(filters).fetch_all(pool).await
}

/// Row of [`cities_with_most_claims`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct CityClaimCount {
    pub city: Option<String>,
    pub claim_count: i64,
}

fn cities_with_most_claims_query(filters: &FilterSet) -> FilteredQuery {
    let mut query = FilteredQuery::new(
        "SELECT r.city, COUNT(c.claim_id) AS claim_count \
         FROM receivers r \
         JOIN claims c ON r.receiver_id = c.receiver_id",
    );
    // Self-narrowing: the filter limits which grouped cities appear.
    push_city_filter(&mut query, Report::CitiesWithMostClaims, &filters.cities);
    query.push_sql(" GROUP BY r.city ORDER BY claim_count DESC");
    query
}

/// Receiver cities ranked by claim volume.
pub async fn cities_with_most_claims(
    pool: &PgPool,
    filters: &FilterSet,
) -> Result<Vec<CityClaimCount>, sqlx::Error> {
    cities_with_most_claims_query(filters).fetch_all(pool).await
}
