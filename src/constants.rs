//! # Domain Vocabularies
//!
//! Closed category sets used on the write path. Each serializes to the exact
//! string the store holds ("Grocery Store", "Non-Vegetarian", ...), so a typed
//! value can be bound directly into a statement. Reads stay plain strings:
//! stored rows are never re-validated against these sets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FoodShareError;

/// Category of a surplus-food provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderType {
    Restaurant,
    #[serde(rename = "Grocery Store")]
    GroceryStore,
    Supermarket,
    #[serde(rename = "Catering Service")]
    CateringService,
}

impl ProviderType {
    pub const ALL: [ProviderType; 4] = [
        ProviderType::Restaurant,
        ProviderType::GroceryStore,
        ProviderType::Supermarket,
        ProviderType::CateringService,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderType::Restaurant => "Restaurant",
            ProviderType::GroceryStore => "Grocery Store",
            ProviderType::Supermarket => "Supermarket",
            ProviderType::CateringService => "Catering Service",
        }
    }
}

impl fmt::Display for ProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderType {
    type Err = FoodShareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| FoodShareError::Validation(format!("unknown provider type: {s}")))
    }
}

/// Category of a receiving organization or person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReceiverType {
    #[serde(rename = "NGO")]
    Ngo,
    Shelter,
    Charity,
    Individual,
}

impl ReceiverType {
    pub const ALL: [ReceiverType; 4] = [
        ReceiverType::Ngo,
        ReceiverType::Shelter,
        ReceiverType::Charity,
        ReceiverType::Individual,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReceiverType::Ngo => "NGO",
            ReceiverType::Shelter => "Shelter",
            ReceiverType::Charity => "Charity",
            ReceiverType::Individual => "Individual",
        }
    }
}

impl fmt::Display for ReceiverType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReceiverType {
    type Err = FoodShareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| FoodShareError::Validation(format!("unknown receiver type: {s}")))
    }
}

/// Dietary category of a food listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FoodType {
    Vegetarian,
    #[serde(rename = "Non-Vegetarian")]
    NonVegetarian,
    Vegan,
}

impl FoodType {
    pub const ALL: [FoodType; 3] = [FoodType::Vegetarian, FoodType::NonVegetarian, FoodType::Vegan];

    pub fn as_str(&self) -> &'static str {
        match self {
            FoodType::Vegetarian => "Vegetarian",
            FoodType::NonVegetarian => "Non-Vegetarian",
            FoodType::Vegan => "Vegan",
        }
    }
}

impl fmt::Display for FoodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FoodType {
    type Err = FoodShareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| FoodShareError::Validation(format!("unknown food type: {s}")))
    }
}

/// Meal slot a listing is intended for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snacks,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snacks => "Snacks",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = FoodShareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| FoodShareError::Validation(format!("unknown meal type: {s}")))
    }
}

/// Lifecycle state of a claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClaimStatus {
    Pending,
    Completed,
    Cancelled,
}

impl ClaimStatus {
    pub const ALL: [ClaimStatus; 3] = [
        ClaimStatus::Pending,
        ClaimStatus::Completed,
        ClaimStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Pending => "Pending",
            ClaimStatus::Completed => "Completed",
            ClaimStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClaimStatus {
    type Err = FoodShareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| FoodShareError::Validation(format!("unknown claim status: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_type_round_trips() {
        for t in ProviderType::ALL {
            assert_eq!(t.as_str().parse::<ProviderType>().unwrap(), t);
        }
        assert!("Food Truck".parse::<ProviderType>().is_err());
    }

    #[test]
    fn multi_word_variants_serialize_to_store_strings() {
        assert_eq!(
            serde_json::to_string(&ProviderType::GroceryStore).unwrap(),
            "\"Grocery Store\""
        );
        assert_eq!(
            serde_json::to_string(&FoodType::NonVegetarian).unwrap(),
            "\"Non-Vegetarian\""
        );
        assert_eq!(serde_json::to_string(&ReceiverType::Ngo).unwrap(), "\"NGO\"");
    }

    #[test]
    fn claim_status_round_trips() {
        for s in ClaimStatus::ALL {
            assert_eq!(s.as_str().parse::<ClaimStatus>().unwrap(), s);
        }
        assert!("Rejected".parse::<ClaimStatus>().is_err());
    }
}
