#[cfg(test)]
mod tests {
    use crate::recurrence::{ensure_recurrence_is_consistent, next_payment_date, Frequency};
    use chrono::{DateTime, Duration, TimeZone, Timelike, Utc};
    use proptest::prelude::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    // ==================== Frequency ====================

    #[test]
    fn test_frequency_serialization() {
        assert_eq!(serde_json::to_string(&Frequency::Weekly).unwrap(), "\"weekly\"");
        assert_eq!(
            serde_json::from_str::<Frequency>("\"yearly\"").unwrap(),
            Frequency::Yearly
        );
        assert!(serde_json::from_str::<Frequency>("\"daily\"").is_err());
    }

    #[test]
    fn test_frequency_from_str() {
        assert_eq!("monthly".parse::<Frequency>().unwrap(), Frequency::Monthly);
        assert!("Monthly".parse::<Frequency>().is_err());
        assert_eq!(Frequency::default(), Frequency::Once);
    }

    // ==================== next_payment_date ====================

    #[test]
    fn test_not_recurring_has_no_date() {
        let now = at(2026, 3, 15, 10, 30);
        for frequency in Frequency::ALL {
            assert_eq!(next_payment_date(frequency, false, now).unwrap(), None);
        }
    }

    #[test]
    fn test_recurring_once_is_rejected() {
        let now = at(2026, 3, 15, 10, 30);
        let err = next_payment_date(Frequency::Once, true, now).unwrap_err();
        assert!(err.is_validation());
        assert!(ensure_recurrence_is_consistent(Frequency::Once, true).is_err());
        assert!(ensure_recurrence_is_consistent(Frequency::Once, false).is_ok());
        assert!(ensure_recurrence_is_consistent(Frequency::Weekly, true).is_ok());
    }

    #[test]
    fn test_weekly_is_seven_days_at_utc_midnight() {
        let now = at(2026, 3, 15, 22, 45);
        let next = next_payment_date(Frequency::Weekly, true, now).unwrap();
        assert_eq!(next, Some(at(2026, 3, 22, 0, 0)));
    }

    #[test]
    fn test_monthly_keeps_day_of_month() {
        let now = at(2026, 3, 15, 8, 0);
        let next = next_payment_date(Frequency::Monthly, true, now).unwrap();
        assert_eq!(next, Some(at(2026, 4, 15, 0, 0)));
    }

    #[test]
    fn test_monthly_clamps_to_last_day_of_shorter_month() {
        let next = next_payment_date(Frequency::Monthly, true, at(2026, 1, 31, 12, 0)).unwrap();
        assert_eq!(next, Some(at(2026, 2, 28, 0, 0)));

        let leap = next_payment_date(Frequency::Monthly, true, at(2028, 1, 31, 12, 0)).unwrap();
        assert_eq!(leap, Some(at(2028, 2, 29, 0, 0)));
    }

    #[test]
    fn test_monthly_rolls_over_year_end() {
        let next = next_payment_date(Frequency::Monthly, true, at(2026, 12, 10, 9, 0)).unwrap();
        assert_eq!(next, Some(at(2027, 1, 10, 0, 0)));
    }

    #[test]
    fn test_yearly_is_same_date_next_year() {
        let next = next_payment_date(Frequency::Yearly, true, at(2026, 10, 17, 14, 5)).unwrap();
        assert_eq!(next, Some(at(2027, 10, 17, 0, 0)));

        let from_leap_day =
            next_payment_date(Frequency::Yearly, true, at(2028, 2, 29, 14, 5)).unwrap();
        assert_eq!(from_leap_day, Some(at(2029, 2, 28, 0, 0)));
    }

    proptest! {
        #[test]
        fn prop_weekly_is_midnight_seven_days_later(offset_secs in 0i64..(50 * 365 * 86_400)) {
            let now = at(2000, 1, 1, 0, 0) + Duration::seconds(offset_secs);
            let next = next_payment_date(Frequency::Weekly, true, now).unwrap().unwrap();

            prop_assert_eq!(next.date_naive(), (now + Duration::days(7)).date_naive());
            prop_assert_eq!(next.hour(), 0);
            prop_assert_eq!(next.minute(), 0);
            prop_assert_eq!(next.second(), 0);
            prop_assert_eq!(next.nanosecond(), 0);
        }
    }
}
