use serde::{Deserialize, Serialize};

/// The five optional filter dimensions, passed explicitly into every report,
/// KPI, and list call. An empty `Vec` means "dimension not filtered".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet {
    pub cities: Vec<String>,
    pub provider_types: Vec<String>,
    pub food_types: Vec<String>,
    pub meal_types: Vec<String>,
    pub claim_statuses: Vec<String>,
}

impl FilterSet {
    /// No filtering on any dimension.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_cities<I, S>(mut self, cities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cities = cities.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_provider_types<I, S>(mut self, provider_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.provider_types = provider_types.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_food_types<I, S>(mut self, food_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.food_types = food_types.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_meal_types<I, S>(mut self, meal_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.meal_types = meal_types.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_claim_statuses<I, S>(mut self, claim_statuses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.claim_statuses = claim_statuses.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
            && self.provider_types.is_empty()
            && self.food_types.is_empty()
            && self.meal_types.is_empty()
            && self.claim_statuses.is_empty()
    }

    /// One-line summary of the active dimensions, for log lines.
    pub fn describe(&self) -> String {
        let mut active = Vec::new();
        for (name, values) in [
            ("cities", &self.cities),
            ("provider_types", &self.provider_types),
            ("food_types", &self.food_types),
            ("meal_types", &self.meal_types),
            ("claim_statuses", &self.claim_statuses),
        ] {
            if !values.is_empty() {
                active.push(format!("{name}=[{}]", values.join(", ")));
            }
        }
        if active.is_empty() {
            "unfiltered".to_string()
        } else {
            active.join(" | ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        assert!(FilterSet::none().is_empty());
    }

    #[test]
    fn builder_methods_fill_dimensions() {
        let filters = FilterSet::none()
            .with_cities(["Delhi", "Pune"])
            .with_claim_statuses(["Pending"]);
        assert_eq!(filters.cities, vec!["Delhi", "Pune"]);
        assert_eq!(filters.claim_statuses, vec!["Pending"]);
        assert!(filters.food_types.is_empty());
        assert!(!filters.is_empty());
    }

    #[test]
    fn describe_lists_only_active_dimensions() {
        assert_eq!(FilterSet::none().describe(), "unfiltered");

        let filters = FilterSet::none().with_cities(["Delhi"]).with_meal_types(["Lunch"]);
        assert_eq!(filters.describe(), "cities=[Delhi] | meal_types=[Lunch]");
    }
}
