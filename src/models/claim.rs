use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use super::food_listing::FoodListing;
use super::receiver::Receiver;
use crate::constants::ClaimStatus;
use crate::error::{FoodShareError, Result};
use crate::logging::log_database_operation;
use crate::query_builder::{FilterSet, FilteredQuery};

const CLAIM_COLUMNS: &str = r#"claim_id, food_id, receiver_id, status, "timestamp""#;

/// Maps to the `claims` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Claim {
    pub claim_id: i32,
    pub food_id: i32,
    pub receiver_id: i32,
    pub status: String,
    pub timestamp: NaiveDateTime,
}

/// Field set for creating a claim; the id is assigned at insert time and the
/// timestamp defaults to the store's local time when not supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewClaim {
    pub food_id: i32,
    pub receiver_id: i32,
    pub status: ClaimStatus,
    pub timestamp: Option<NaiveDateTime>,
}

impl Claim {
    /// Insert a claim. Both referenced rows must exist at validation time;
    /// the checks go straight to the store.
    pub async fn create(pool: &PgPool, new_claim: NewClaim) -> Result<Claim> {
        if !FoodListing::exists(pool, new_claim.food_id).await? {
            return Err(FoodShareError::Validation(format!(
                "food listing {} does not exist",
                new_claim.food_id
            )));
        }
        if !Receiver::exists(pool, new_claim.receiver_id).await? {
            return Err(FoodShareError::Validation(format!(
                "receiver {} does not exist",
                new_claim.receiver_id
            )));
        }

        let claim = sqlx::query_as::<_, Claim>(
            r#"
            INSERT INTO claims (claim_id, food_id, receiver_id, status, "timestamp")
            VALUES ((SELECT COALESCE(MAX(claim_id), 0) + 1 FROM claims), $1, $2, $3,
                    COALESCE($4, LOCALTIMESTAMP))
            RETURNING claim_id, food_id, receiver_id, status, "timestamp"
            "#,
        )
        .bind(new_claim.food_id)
        .bind(new_claim.receiver_id)
        .bind(new_claim.status.as_str())
        .bind(new_claim.timestamp)
        .fetch_one(pool)
        .await?;

        log_database_operation(
            "create",
            "claims",
            Some(i64::from(claim.claim_id)),
            "ok",
            None,
        );
        Ok(claim)
    }

    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Claim>, sqlx::Error> {
        sqlx::query_as::<_, Claim>(&format!(
            "SELECT {CLAIM_COLUMNS} FROM claims WHERE claim_id = $1"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Claim list for the explore view, newest first, narrowed by the claim
    /// status dimension.
    pub async fn list(pool: &PgPool, filters: &FilterSet) -> Result<Vec<Claim>, sqlx::Error> {
        let mut query = FilteredQuery::new(&format!("SELECT {CLAIM_COLUMNS} FROM claims"));
        query.push_in("status", &filters.claim_statuses);
        query.push_sql(r#" ORDER BY "timestamp" DESC"#);
        query.fetch_all(pool).await
    }

    /// Status is the only field a claim update touches.
    pub async fn update_status(pool: &PgPool, id: i32, status: ClaimStatus) -> Result<u64> {
        let result = sqlx::query("UPDATE claims SET status = $2 WHERE claim_id = $1")
            .bind(id)
            .bind(status.as_str())
            .execute(pool)
            .await?;

        log_database_operation("update", "claims", Some(i64::from(id)), "ok", None);
        Ok(result.rows_affected())
    }

    pub async fn delete(pool: &PgPool, id: i32) -> Result<u64> {
        let result = sqlx::query("DELETE FROM claims WHERE claim_id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        log_database_operation("delete", "claims", Some(i64::from(id)), "ok", None);
        Ok(result.rows_affected())
    }
}
