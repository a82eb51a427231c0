use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fixed set of service categories a provider can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceType {
    #[serde(rename = "Dog Training")]
    DogTraining,
    #[serde(rename = "Grooming")]
    Grooming,
    #[serde(rename = "Dog Walking")]
    DogWalking,
    #[serde(rename = "Behavioral Specialist")]
    BehavioralSpecialist,
    #[serde(rename = "Daycare & Boarding")]
    DaycareBoarding,
}

impl ServiceType {
    pub const ALL: [ServiceType; 5] = [
        ServiceType::DogTraining,
        ServiceType::Grooming,
        ServiceType::DogWalking,
        ServiceType::BehavioralSpecialist,
        ServiceType::DaycareBoarding,
    ];

    /// Display label, also the value matched by free-text search
    pub fn label(&self) -> &'static str {
        match self {
            ServiceType::DogTraining => "Dog Training",
            ServiceType::Grooming => "Grooming",
            ServiceType::DogWalking => "Dog Walking",
            ServiceType::BehavioralSpecialist => "Behavioral Specialist",
            ServiceType::DaycareBoarding => "Daycare & Boarding",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let needle = label.trim();
        Self::ALL.into_iter().find(|t| t.label().eq_ignore_ascii_case(needle))
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PriceRange {
    #[serde(rename = "$")]
    Budget,
    #[serde(rename = "$$")]
    Moderate,
    #[serde(rename = "$$$")]
    Premium,
}

impl PriceRange {
    pub fn symbol(&self) -> &'static str {
        match self {
            PriceRange::Budget => "$",
            PriceRange::Moderate => "$$",
            PriceRange::Premium => "$$$",
        }
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub user_name: String,
    /// Star rating, 1 through 5
    pub rating: u8,
    pub comment: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceProvider {
    pub id: String,
    pub name: String,
    pub service_type: ServiceType,
    pub description: String,
    pub location: String,
    /// Distance from the user in miles
    pub distance: f64,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub website: Option<String>,
    /// Average rating in [0, 5]
    pub rating: f64,
    pub review_count: u32,
    pub price_range: PriceRange,
    pub certifications: Vec<String>,
    pub availability: String,
    pub specialties: Vec<String>,
    pub years_experience: u32,
    pub reviews: Vec<Review>,
}

/// Category restriction applied to the provider directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ServiceType),
}

impl CategoryFilter {
    /// "All" followed by every service type, in the order shown as filter chips
    pub fn choices() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(ServiceType::ALL.into_iter().map(CategoryFilter::Only))
            .collect()
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(service_type) => service_type.label(),
        }
    }

    pub fn matches(&self, service_type: ServiceType) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == service_type,
        }
    }

    /// Next choice in chip order, wrapping around
    pub fn next(&self) -> CategoryFilter {
        let choices = Self::choices();
        let idx = choices.iter().position(|c| c == self).unwrap_or(0);
        choices[(idx + 1) % choices.len()]
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        ServiceType::from_label(s).map(CategoryFilter::Only).ok_or_else(|| {
            let labels: Vec<&str> = Self::choices().iter().map(|c| c.label()).collect();
            format!("unknown category '{}' (expected one of: {})", s, labels.join(", "))
        })
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Distance,
    Rating,
}

impl SortKey {
    pub fn toggle(&self) -> SortKey {
        match self {
            SortKey::Distance => SortKey::Rating,
            SortKey::Rating => SortKey::Distance,
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "distance" => Ok(SortKey::Distance),
            "rating" => Ok(SortKey::Rating),
            other => Err(format!("unknown sort key '{}' (expected distance or rating)", other)),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Distance => f.write_str("distance"),
            SortKey::Rating => f.write_str("rating"),
        }
    }
}
