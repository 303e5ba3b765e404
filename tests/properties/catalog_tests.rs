use proptest::prelude::*;

use hms_smoke::specialty::{Disease, Specialty, matches, specialty_for};

fn arb_disease() -> impl Strategy<Value = Disease> {
    proptest::sample::select(Disease::ALL.to_vec())
}

fn arb_specialty() -> impl Strategy<Value = Specialty> {
    proptest::sample::select(Specialty::ALL.to_vec())
}

proptest! {
    #[test]
    fn mapped_specialty_always_matches(disease in arb_disease()) {
        prop_assert!(matches(disease, specialty_for(disease)));
        prop_assert!(matches(disease, Specialty::GeneralMedicine));
    }

    #[test]
    fn only_mapped_or_general_specialties_match(
        disease in arb_disease(),
        specialty in arb_specialty(),
    ) {
        let expected =
            specialty == specialty_for(disease) || specialty == Specialty::GeneralMedicine;
        prop_assert_eq!(matches(disease, specialty), expected);
    }

    #[test]
    fn names_parse_back_in_any_case(disease in arb_disease(), lower in any::<bool>()) {
        let name = if lower {
            disease.as_str().to_lowercase().replace('_', "-")
        } else {
            disease.as_str().to_string()
        };
        prop_assert_eq!(name.parse::<Disease>().unwrap(), disease);
    }

    #[test]
    fn parsing_arbitrary_text_never_panics(input in ".*") {
        let _ = input.parse::<Disease>();
        let _ = input.parse::<Specialty>();
    }
}
