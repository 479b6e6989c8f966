// Party package catalog.
//
// Purpose
// - Describe the bookable party packages and the session length each one reserves.
//
// Notes
// - Package durations come from configuration; the availability engine never assumes one.

use crate::shared::core::primitives::SessionLength;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartyPackage {
    pub id: String,
    pub name: String,
    pub price_per_person_pence: u64,
    #[serde(rename = "duration_hours")]
    pub duration: SessionLength,
    pub max_guests: u32,
    pub description: String,
    pub includes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PackageCatalog {
    packages: Vec<PartyPackage>,
}

impl PackageCatalog {
    pub fn new(packages: Vec<PartyPackage>) -> Self {
        Self { packages }
    }

    /// Silver, gold and platinum, all reserving `duration`.
    pub fn standard(duration: SessionLength) -> Self {
        let package = |id: &str, price: u64, description: &str, includes: &[&str]| PartyPackage {
            id: id.to_string(),
            name: id.to_string(),
            price_per_person_pence: price,
            duration,
            max_guests: 10,
            description: description.to_string(),
            includes: includes.iter().map(|line| line.to_string()).collect(),
        };
        Self::new(vec![
            package(
                "silver",
                1500,
                "Perfect for small groups and birthday parties",
                &[
                    "Up to 10 guests",
                    "Basic refreshments",
                    "Party decorations",
                    "Game selection assistance",
                ],
            ),
            package(
                "gold",
                2000,
                "Enhanced experience with premium features",
                &[
                    "Up to 10 guests",
                    "Premium refreshments",
                    "Enhanced party decorations",
                    "Dedicated game master",
                    "Priority game selection",
                ],
            ),
            package(
                "platinum",
                2500,
                "Ultimate VR party experience",
                &[
                    "Up to 10 guests",
                    "Premium refreshments & snacks",
                    "Full party decorations",
                    "Dedicated game master",
                    "Priority game selection",
                    "Party photos & videos",
                    "Custom party playlist",
                ],
            ),
        ])
    }

    pub fn find(&self, id: &str) -> Option<&PartyPackage> {
        self.packages.iter().find(|package| package.id == id)
    }

    pub fn all(&self) -> &[PartyPackage] {
        &self.packages
    }
}

#[cfg(test)]
mod packages_tests {
    use super::*;
    use crate::tests::fixtures::reservations::hours;
    use rstest::rstest;

    #[rstest]
    fn it_should_carry_the_configured_duration_on_every_package() {
        let catalog = PackageCatalog::standard(hours(3.0));
        assert_eq!(catalog.all().len(), 3);
        assert!(catalog.all().iter().all(|p| p.duration == hours(3.0)));
    }

    #[rstest]
    #[case("silver", 1500)]
    #[case("gold", 2000)]
    #[case("platinum", 2500)]
    fn it_should_find_packages_by_id(#[case] id: &str, #[case] price: u64) {
        let catalog = PackageCatalog::standard(hours(2.5));
        assert_eq!(catalog.find(id).map(|p| p.price_per_person_pence), Some(price));
    }

    #[rstest]
    fn it_should_not_find_unknown_packages() {
        assert!(PackageCatalog::standard(hours(2.5)).find("diamond").is_none());
        assert!(PackageCatalog::default().find("silver").is_none());
    }
}
