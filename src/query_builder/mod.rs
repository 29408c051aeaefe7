//! # Filtered Query Composition
//!
//! The dashboard exposes five optional multi-valued filter dimensions (city,
//! provider type, food type, meal type, claim status). This module turns a
//! [`FilterSet`] into safe SQL: one `column = ANY($n)` clause per non-empty
//! dimension, AND-ed together, with every value bound as a parameter — never
//! concatenated into the query text. An all-empty filter set produces no
//! `WHERE` keyword at all.
//!
//! Values within one dimension are a disjunction; dimensions combine as a
//! conjunction. `cities = {Delhi, Pune}` and `food_types = {Vegan}` reads as
//! `(city IN (Delhi, Pune)) AND (food_type IN (Vegan))`.
//!
//! ## JOIN ordering
//!
//! [`FilteredQuery`] builds SQL sequentially on top of sqlx's `QueryBuilder`,
//! so joins must be pushed before the first condition. Every report in this
//! crate follows that order.

pub mod builder;
pub mod filters;

pub use builder::FilteredQuery;
pub use filters::FilterSet;
