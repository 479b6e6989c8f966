// Price calculation in whole pence.

use crate::modules::bookings::core::packages::PartyPackage;
use crate::shared::core::primitives::SessionLength;

pub const ADULT_PENCE_PER_HOUR: u64 = 1500;
pub const CHILD_PENCE_PER_HOUR: u64 = 1000;

/// Hourly rate per guest, pro rata by the minute.
pub fn session_price_pence(adults: u32, children: u32, duration: SessionLength) -> u64 {
    let per_hour =
        u64::from(adults) * ADULT_PENCE_PER_HOUR + u64::from(children) * CHILD_PENCE_PER_HOUR;
    per_hour * u64::from(duration.minutes()) / 60
}

pub fn package_price_pence(package: &PartyPackage, guests: u32) -> u64 {
    package.price_per_person_pence * u64::from(guests)
}

#[cfg(test)]
mod pricing_tests {
    use super::*;
    use crate::modules::bookings::core::packages::PackageCatalog;
    use crate::tests::fixtures::reservations::hours;
    use rstest::rstest;

    #[rstest]
    #[case(2, 0, 1.0, 3000)]
    #[case(2, 1, 2.0, 8000)]
    #[case(1, 1, 1.5, 3750)]
    #[case(0, 3, 0.5, 1500)]
    fn it_should_price_sessions_by_the_hour(
        #[case] adults: u32,
        #[case] children: u32,
        #[case] length: f64,
        #[case] expected: u64,
    ) {
        assert_eq!(session_price_pence(adults, children, hours(length)), expected);
    }

    #[rstest]
    fn it_should_price_packages_per_person() {
        let catalog = PackageCatalog::standard(hours(2.5));
        let gold = catalog.find("gold").unwrap();
        assert_eq!(package_price_pence(gold, 8), 16_000);
    }
}
