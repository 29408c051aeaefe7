//! Explicit city-column bindings, one per report and KPI.
//!
//! "City" exists independently on providers, receivers, and food listings
//! (as `location`). Changing a binding silently changes report semantics, so
//! the mapping lives in this one table and is pinned by tests.

/// Every report and KPI that accepts the city dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Report {
    ProvidersPerCity,
    ReceiversPerCity,
    TopProviderTypes,
    ProviderContacts,
    TopReceivers,
    CityHighestListings,
    CommonFoodTypes,
    ClaimsPerFood,
    TopProvidersBySuccessfulClaims,
    ClaimStatusDistribution,
    AvgQuantityPerReceiver,
    MostClaimedMealType,
    TotalQuantityPerProvider,
    CitiesWithMostClaims,
    CountProviders,
    CountReceivers,
    CountClaims,
    TotalFoodQuantity,
}

/// How a report reaches its city column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CityBinding {
    /// Column the `cities` dimension binds to, qualified with the alias the
    /// report's FROM clause uses.
    pub column: &'static str,
    /// Join required only when the city filter is active. Reports whose base
    /// FROM clause already reaches the city column carry `None`.
    pub join: Option<&'static str>,
}

const RECEIVERS_VIA_CLAIM: &str = "JOIN receivers r ON c.receiver_id = r.receiver_id";

impl Report {
    pub const fn city_binding(self) -> CityBinding {
        match self {
            // Reports over a single table bind its own city column.
            Report::ProvidersPerCity
            | Report::TopProviderTypes
            | Report::ProviderContacts
            | Report::CountProviders => CityBinding { column: "city", join: None },
            Report::ReceiversPerCity | Report::CountReceivers => {
                CityBinding { column: "city", join: None }
            }
            Report::CityHighestListings
            | Report::CommonFoodTypes
            | Report::TotalFoodQuantity => CityBinding { column: "location", join: None },

            // Claim-path reports bind the receiver's city: a claim's
            // geography is where the food goes, not where it came from.
            Report::TopReceivers
            | Report::ClaimsPerFood
            | Report::AvgQuantityPerReceiver
            | Report::MostClaimedMealType
            | Report::CitiesWithMostClaims => CityBinding { column: "r.city", join: None },
            Report::ClaimStatusDistribution | Report::CountClaims => CityBinding {
                column: "r.city",
                join: Some(RECEIVERS_VIA_CLAIM),
            },

            // Provider-anchored aggregates keep provider geography, including
            // the successful-claims leaderboard (unlike the other claim-path
            // reports above).
            Report::TopProvidersBySuccessfulClaims | Report::TotalQuantityPerProvider => {
                CityBinding { column: "p.city", join: None }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_table_reports_bind_their_own_city() {
        assert_eq!(Report::ProvidersPerCity.city_binding().column, "city");
        assert_eq!(Report::ReceiversPerCity.city_binding().column, "city");
        assert_eq!(Report::CityHighestListings.city_binding().column, "location");
        assert_eq!(Report::CommonFoodTypes.city_binding().column, "location");
        assert_eq!(Report::TotalFoodQuantity.city_binding().column, "location");
    }

    #[test]
    fn claim_path_reports_bind_receiver_city() {
        for report in [
            Report::TopReceivers,
            Report::ClaimsPerFood,
            Report::ClaimStatusDistribution,
            Report::AvgQuantityPerReceiver,
            Report::MostClaimedMealType,
            Report::CitiesWithMostClaims,
            Report::CountClaims,
        ] {
            assert_eq!(report.city_binding().column, "r.city", "{report:?}");
        }
    }

    #[test]
    fn only_reports_without_a_base_join_carry_a_conditional_join() {
        assert!(Report::ClaimStatusDistribution.city_binding().join.is_some());
        assert!(Report::CountClaims.city_binding().join.is_some());
        assert!(Report::TopReceivers.city_binding().join.is_none());
        assert!(Report::ClaimsPerFood.city_binding().join.is_none());
    }

    /// The successful-claims leaderboard deliberately uses provider geography
    /// while the other claim-path reports use receiver geography. Flagged for
    /// product review; change this binding only on purpose.
    #[test]
    fn successful_claims_leaderboard_binds_provider_city() {
        assert_eq!(
            Report::TopProvidersBySuccessfulClaims.city_binding().column,
            "p.city"
        );
        assert_eq!(Report::TotalQuantityPerProvider.city_binding().column, "p.city");
    }
}
