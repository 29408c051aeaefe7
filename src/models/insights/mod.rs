//! # Computed Insights
//!
//! Report and KPI rows are computed views over the four tables — they are
//! never stored, so there are no create/update/delete operations here, only
//! reads parameterized by a [`FilterSet`](crate::query_builder::FilterSet).
//!
//! The schema carries three different "city" columns (`providers.city`,
//! `receivers.city`, `food_listings.location`), and which one a report's city
//! filter binds to is a per-report design choice, not something derived from
//! the join path. [`catalog`] pins every binding explicitly; the report
//! functions consult it rather than hard-coding the column twice.

pub mod catalog;
pub mod claim_reports;
pub mod filter_options;
pub mod kpis;
pub mod listing_reports;
pub mod provider_reports;
pub mod receiver_reports;

pub use catalog::{CityBinding, Report};
pub use filter_options::FilterOptions;
pub use kpis::DashboardKpis;

use crate::query_builder::FilteredQuery;

/// Apply the city dimension to a query according to the report's catalog
/// entry. Adds the binding's join first when one is required, so this must
/// run before any other condition is pushed.
pub(crate) fn push_city_filter(query: &mut FilteredQuery, report: Report, cities: &[String]) {
    if cities.is_empty() {
        return;
    }
    let binding = report.city_binding();
    if let Some(join) = binding.join {
        query.join(join);
    }
    query.push_in(binding.column, cities);
}
