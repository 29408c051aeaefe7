#![allow(clippy::doc_markdown)] // Allow technical terms like PostgreSQL, SQLx in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # FoodShare Core
//!
//! Rust data core for the FoodShare surplus-food platform: the query and
//! mutation layer between the dashboard and PostgreSQL.
//!
//! ## Overview
//!
//! Providers (restaurants, grocery stores, supermarkets, caterers) list
//! surplus food; receivers (NGOs, shelters, charities, individuals) claim it.
//! The dashboard narrows everything through five optional multi-valued filter
//! dimensions — city, provider type, food type, meal type, claim status —
//! and this crate turns those selections into parameter-bound SQL: aggregate
//! reports, scalar KPIs, explore-tab lists, and validated CRUD.
//!
//! ## Module Organization
//!
//! - [`query_builder`] - filter composition ([`FilterSet`] → bound SQL)
//! - [`models`] - per-table row structs and mutations
//! - [`models::insights`] - the report catalog and KPIs (computed, never stored)
//! - [`database`] - connection pool wrapper
//! - [`constants`] - typed domain vocabularies
//! - [`config`] / [`logging`] / [`error`] - ambient concerns
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use foodshare_core::models::insights::{claim_reports, kpis::DashboardKpis};
//! use foodshare_core::{DatabaseConnection, FilterSet};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = DatabaseConnection::new().await?;
//! let filters = FilterSet::none()
//!     .with_cities(["Delhi"])
//!     .with_claim_statuses(["Pending"]);
//!
//! let kpis = DashboardKpis::load(db.pool(), &filters).await?;
//! let per_food = claim_reports::claims_per_food(db.pool(), &filters).await?;
//!
//! println!("{} claims over {} food items", kpis.total_claims, per_food.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Testing
//!
//! ```bash
//! cargo test                 # unit + property tests, no database needed
//! cargo test -- --ignored    # integration suites, require DATABASE_URL
//! ```

pub mod config;
pub mod constants;
pub mod database;
pub mod error;
pub mod logging;
pub mod models;
pub mod query_builder;

pub use config::FoodShareConfig;
pub use constants::{ClaimStatus, FoodType, MealType, ProviderType, ReceiverType};
pub use database::DatabaseConnection;
pub use error::{FoodShareError, Result};
pub use models::insights::{DashboardKpis, FilterOptions, Report};
pub use models::{
    Claim, FoodListing, FoodListingChanges, NewClaim, NewFoodListing, NewProvider, NewReceiver,
    Provider, ProviderChanges, Receiver, ReceiverChanges,
};
pub use query_builder::{FilterSet, FilteredQuery};
