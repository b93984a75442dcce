//! Property tests for period normalization.

use proptest::prelude::*;
use trade_model::{MONTH_ORDINALS, PeriodMode, month_ordinal};
use trade_transform::{normalize_period, resolve_period};

fn calendar_month() -> impl Strategy<Value = &'static str> {
    prop::sample::select(
        MONTH_ORDINALS[..12]
            .iter()
            .map(|(month, _)| *month)
            .collect::<Vec<_>>(),
    )
}

proptest! {
    #[test]
    fn monthly_labels_resolve_to_first_of_month(month in calendar_month(), year in 1000u32..=9999) {
        let label = format!("{month} {year}");
        let key = normalize_period(&label);
        let ordinal = month_ordinal(month).unwrap();

        prop_assert_eq!(&key.year, &year.to_string());
        prop_assert_eq!(&key.month, month);
        prop_assert_eq!(key.month_ordinal.as_str(), ordinal);
        prop_assert_eq!(key.date, format!("{year}-{ordinal}-01"));
    }

    #[test]
    fn bare_years_are_annual(year in 1000u32..=9999) {
        let key = normalize_period(&year.to_string());
        prop_assert!(key.is_annual());
        prop_assert_eq!(key.month_ordinal.as_str(), "00");
        prop_assert_eq!(&key.date, &key.year);
    }

    #[test]
    fn strict_and_lenient_agree_on_well_formed_labels(month in calendar_month(), year in 1000u32..=9999) {
        let label = format!("{month} {year}");
        let strict = resolve_period(&label, PeriodMode::Strict).unwrap();
        let lenient = resolve_period(&label, PeriodMode::Lenient).unwrap();
        prop_assert_eq!(strict, lenient);
    }

    #[test]
    fn case_only_changes_month_spelling(month in calendar_month(), year in 1000u32..=9999) {
        let upper = normalize_period(&format!("{} {year}", month.to_uppercase()));
        let exact = normalize_period(&format!("{month} {year}"));
        prop_assert_eq!(upper, exact);
    }
}
