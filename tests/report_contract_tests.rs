//! The presentation layer addresses report columns by name for chart
//! encodings, so the serialized field names are a contract.

use foodshare_core::models::insights::claim_reports::ClaimStatusCount;
use foodshare_core::models::insights::kpis::DashboardKpis;
use foodshare_core::models::insights::listing_reports::CityListingCount;
use foodshare_core::models::insights::provider_reports::CityProviderCount;
use foodshare_core::models::insights::receiver_reports::TopReceiver;
use serde_json::json;

#[test]
fn provider_count_row_serializes_with_contract_names() {
    let row = CityProviderCount {
        city: Some("Delhi".to_string()),
        provider_count: 3,
    };
    assert_eq!(
        serde_json::to_value(&row).unwrap(),
        json!({"city": "Delhi", "provider_count": 3})
    );
}

#[test]
fn null_grouping_keys_survive_serialization() {
    let row = CityListingCount {
        city: None,
        listings: 2,
    };
    assert_eq!(
        serde_json::to_value(&row).unwrap(),
        json!({"city": null, "listings": 2})
    );
}

#[test]
fn top_receiver_row_carries_name_city_and_count() {
    let row = TopReceiver {
        name: Some("Hope Shelter".to_string()),
        city: Some("Pune".to_string()),
        total_claims: 7,
    };
    let value = serde_json::to_value(&row).unwrap();
    assert_eq!(value["name"], "Hope Shelter");
    assert_eq!(value["total_claims"], 7);
}

#[test]
fn status_count_and_kpi_names() {
    let row = ClaimStatusCount {
        status: Some("Completed".to_string()),
        count: 1,
    };
    assert_eq!(
        serde_json::to_value(&row).unwrap(),
        json!({"status": "Completed", "count": 1})
    );

    let kpis = DashboardKpis {
        total_providers: 1,
        total_receivers: 2,
        total_claims: 3,
        total_food_quantity: 40,
    };
    let value = serde_json::to_value(kpis).unwrap();
    assert_eq!(value["total_food_quantity"], 40);
}
