// Tests for TDS withholding
//
// Covers the statutory default slabs (individual 1% from 50k, company 2%
// from 30k) and the custom-rate override, including the zero-rate case
// that bypasses the slabs entirely.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use billkhata::clients::ClientType;
use billkhata::taxes::TdsCalculator;

#[test]
fn test_individual_slab_thresholds() {
    let calculator = TdsCalculator::new();

    // Below 50k: no withholding
    assert_eq!(
        calculator.calculate(dec!(49999.99), ClientType::Individual, None),
        Decimal::ZERO
    );
    // At the threshold: 1%
    assert_eq!(
        calculator.calculate(dec!(50000), ClientType::Individual, None),
        dec!(500)
    );
    assert_eq!(
        calculator.calculate(dec!(75000), ClientType::Individual, None),
        dec!(750)
    );
}

#[test]
fn test_company_slab_thresholds() {
    let calculator = TdsCalculator::new();

    assert_eq!(
        calculator.calculate(dec!(29999.99), ClientType::Company, None),
        Decimal::ZERO
    );
    // At the threshold: 2%
    assert_eq!(
        calculator.calculate(dec!(30000), ClientType::Company, None),
        dec!(600)
    );
    assert_eq!(
        calculator.calculate(dec!(100000), ClientType::Company, None),
        dec!(2000)
    );
}

#[test]
fn test_custom_rate_ignores_thresholds() {
    let calculator = TdsCalculator::new();

    // 10% on an amount far below every slab threshold
    assert_eq!(
        calculator.calculate(dec!(1000), ClientType::Individual, Some(dec!(10))),
        dec!(100)
    );
    // Custom rate of zero beats the slab even above the threshold
    assert_eq!(
        calculator.calculate(dec!(500000), ClientType::Individual, Some(Decimal::ZERO)),
        Decimal::ZERO
    );
    assert_eq!(
        calculator.calculate(dec!(500000), ClientType::Company, Some(Decimal::ZERO)),
        Decimal::ZERO
    );
}

proptest! {
    #[test]
    fn test_custom_rate_is_plain_percentage(
        amount in 0u64..1_000_000_000u64,
        rate in 0u8..=100u8,
    ) {
        let calculator = TdsCalculator::new();
        let amount = Decimal::from(amount);
        let rate = Decimal::from(rate);

        let tds_individual =
            calculator.calculate(amount, ClientType::Individual, Some(rate));
        let tds_company = calculator.calculate(amount, ClientType::Company, Some(rate));

        // With an explicit rate the client type is irrelevant
        prop_assert_eq!(tds_individual, tds_company);
        prop_assert_eq!(tds_individual, amount * rate / dec!(100));
    }

    #[test]
    fn test_default_slab_never_exceeds_two_percent(
        amount in 0u64..1_000_000_000u64,
    ) {
        let calculator = TdsCalculator::new();
        let amount = Decimal::from(amount);

        for client_type in [ClientType::Individual, ClientType::Company] {
            let tds = calculator.calculate(amount, client_type, None);
            prop_assert!(tds >= Decimal::ZERO);
            prop_assert!(tds <= amount * dec!(0.02));
        }
    }
}
