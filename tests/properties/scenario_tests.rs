use chrono::NaiveDate;
use proptest::prelude::*;

use hms_smoke::config::Config;
use hms_smoke::workflow::{RunTag, Scenario};

proptest! {
    #[test]
    fn distinct_tags_never_share_emails(a in "[0-9]{14,17}", b in "[0-9]{14,17}") {
        prop_assume!(a != b);
        let (a, b) = (RunTag::new(a), RunTag::new(b));
        prop_assert_ne!(a.patient_email(), b.patient_email());
        prop_assert_ne!(a.doctor_email(), b.doctor_email());
        prop_assert_ne!(a.license_number(), b.license_number());
        prop_assert_ne!(a.patient_email(), a.doctor_email());
    }

    #[test]
    fn appointment_is_always_in_the_future(
        days_since_epoch in 0i64..40_000,
        days_ahead in 1u32..400,
    ) {
        let today = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()
            + chrono::Duration::days(days_since_epoch);
        let mut config = Config::default();
        config.appointment.days_ahead = days_ahead;

        let scenario = Scenario::from_config(&config, RunTag::new("p"), today).unwrap();
        prop_assert!(scenario.appointment_date > today);
        prop_assert_eq!(
            (scenario.appointment_date - today).num_days(),
            i64::from(days_ahead)
        );
    }
}
