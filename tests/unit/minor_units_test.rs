// Property-based tests for minor-unit conversion and order numbers

use clinic_pay::core::Currency;
use clinic_pay::payments::OrderNumberGenerator;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

proptest! {
    #[test]
    fn prop_kopeck_amounts_convert_exactly(kopecks in 1i64..1_000_000_000_000) {
        let rubles = Decimal::new(kopecks, 2);
        prop_assert_eq!(Currency::RUB.to_minor_units(rubles), Ok(kopecks));
    }

    #[test]
    fn prop_whole_rubles_multiply_by_100(rubles in 1i64..10_000_000_000) {
        prop_assert_eq!(Currency::RUB.to_minor_units(Decimal::from(rubles)), Ok(rubles * 100));
    }

    #[test]
    fn prop_sub_kopeck_precision_is_rejected(
        kopecks in 0i64..1_000_000_000,
        extra in 1i64..10,
    ) {
        // kopecks.extra -> three significant fractional digits
        let amount = Decimal::new(kopecks * 10 + extra, 3);
        prop_assert!(Currency::RUB.to_minor_units(amount).is_err());
    }

    #[test]
    fn prop_non_positive_amounts_are_rejected(kopecks in -1_000_000i64..=0) {
        prop_assert!(Currency::RUB.to_minor_units(Decimal::new(kopecks, 2)).is_err());
    }

    #[test]
    fn prop_generated_order_numbers_match_format(prefix in "[a-z]{1,8}_") {
        let generator = OrderNumberGenerator::new(prefix.clone());
        let number = generator.generate();
        prop_assert!(number.starts_with(&prefix));
        prop_assert!(generator.matches_format(&number));
    }
}

#[test]
fn test_150_rubles_is_15000_kopecks() {
    assert_eq!(Currency::RUB.to_minor_units(dec!(150.00)), Ok(15000));
}
