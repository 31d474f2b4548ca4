//! Restaurant onboarding data models.

use serde::{Deserialize, Serialize};

/// Answers collected while a restaurant owner walks through the onboarding
/// screens.
///
/// Every field is always present; "not answered yet" is the empty string (or
/// empty vec for categories). The record lives only for the duration of one
/// onboarding session and is never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingRecord {
    /// Display name of the restaurant.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Street address.
    pub address: String,
    /// City name.
    pub city: String,
    /// Category labels in insertion order. Duplicates are allowed.
    pub categories: Vec<String>,
    /// National tax/identity reference.
    pub tax_id: String,
}

/// A partial update to an [`OnboardingRecord`].
///
/// `None` fields are left untouched when the update is applied; `Some`
/// fields replace the stored value wholesale. No validation is performed —
/// empty strings and empty category lists are accepted as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OnboardingUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
}

impl OnboardingUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn categories(mut self, categories: Vec<String>) -> Self {
        self.categories = Some(categories);
        self
    }

    pub fn tax_id(mut self, tax_id: impl Into<String>) -> Self {
        self.tax_id = Some(tax_id.into());
        self
    }

    /// Whether this update names no fields at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.address.is_none()
            && self.city.is_none()
            && self.categories.is_none()
            && self.tax_id.is_none()
    }

    /// Shallow-merge this update over `current`, producing a new record.
    ///
    /// The input record is not mutated, so observers holding the previous
    /// value still see the pre-update state.
    pub fn apply(&self, current: &OnboardingRecord) -> OnboardingRecord {
        OnboardingRecord {
            name: self.name.clone().unwrap_or_else(|| current.name.clone()),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| current.description.clone()),
            address: self
                .address
                .clone()
                .unwrap_or_else(|| current.address.clone()),
            city: self.city.clone().unwrap_or_else(|| current.city.clone()),
            categories: self
                .categories
                .clone()
                .unwrap_or_else(|| current.categories.clone()),
            tax_id: self
                .tax_id
                .clone()
                .unwrap_or_else(|| current.tax_id.clone()),
        }
    }

    /// Combine two updates; fields named in `other` win over `self`.
    pub fn merge(mut self, other: OnboardingUpdate) -> Self {
        if other.name.is_some() {
            self.name = other.name;
        }
        if other.description.is_some() {
            self.description = other.description;
        }
        if other.address.is_some() {
            self.address = other.address;
        }
        if other.city.is_some() {
            self.city = other.city;
        }
        if other.categories.is_some() {
            self.categories = other.categories;
        }
        if other.tax_id.is_some() {
            self.tax_id = other.tax_id;
        }
        self
    }
}
