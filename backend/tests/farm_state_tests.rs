//! Tests for farm profile merge semantics and summaries

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use shared::{summarize_farm_state, FarmProfileUpdate, FarmState, DEFAULT_CROP_LABEL};

fn profile(name: Option<&str>, location: Option<&str>) -> FarmProfileUpdate {
    FarmProfileUpdate {
        name: name.map(String::from),
        location: location.map(String::from),
        ..Default::default()
    }
}

mod merge {
    use super::*;

    #[test]
    fn later_fields_replace_earlier_ones() {
        let mut state = FarmState::empty("s1");
        state.apply(profile(Some("A"), Some("X")), Utc::now());
        state.apply(profile(None, Some("Y")), Utc::now());

        assert_eq!(state.name.as_deref(), Some("A"));
        assert_eq!(state.location.as_deref(), Some("Y"));
    }

    #[test]
    fn crop_list_is_replaced_not_appended() {
        let mut state = FarmState::empty("s1");
        state.apply(
            FarmProfileUpdate {
                primary_crops: Some(vec!["wheat".into(), "barley".into()]),
                ..Default::default()
            },
            Utc::now(),
        );
        state.apply(
            FarmProfileUpdate {
                primary_crops: Some(vec!["rice".into()]),
                ..Default::default()
            },
            Utc::now(),
        );

        assert_eq!(state.primary_crops, vec!["rice".to_string()]);
        assert_eq!(state.main_crop(), "rice");
    }

    #[test]
    fn empty_update_still_stamps_time() {
        let stamp = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        let mut state = FarmState::empty("s1");
        assert!(!state.is_recorded());

        state.apply(FarmProfileUpdate::default(), stamp);

        assert!(state.is_recorded());
        assert_eq!(state.updated_at, Some(stamp));
        assert_eq!(state.name, None);
    }

    #[test]
    fn empty_state_uses_generic_crop_label() {
        assert_eq!(FarmState::empty("s1").main_crop(), DEFAULT_CROP_LABEL);
    }

    #[test]
    fn partial_json_update_leaves_other_fields_absent() {
        let update: FarmProfileUpdate = serde_json::from_str(r#"{"location": "Kansas"}"#).unwrap();
        assert_eq!(update.location.as_deref(), Some("Kansas"));
        assert!(update.name.is_none());
        assert!(update.primary_crops.is_none());
    }
}

mod summary {
    use super::*;

    #[test]
    fn summary_lists_recorded_fields_in_order() {
        let state = FarmState {
            session_id: "s1".into(),
            name: Some("Green Acres".into()),
            location: Some("Iowa".into()),
            primary_crops: vec!["corn".into(), "soybeans".into()],
            notes: Some("drip lines on the north field".into()),
            updated_at: None,
        };

        assert_eq!(
            summarize_farm_state(&state),
            "Farm name: Green Acres. Location: Iowa. Primary crops: corn, soybeans. \
             Notes: drip lines on the north field."
        );
    }

    #[test]
    fn summary_of_empty_state() {
        assert_eq!(
            summarize_farm_state(&FarmState::empty("s1")),
            "No farm profile details recorded yet."
        );
    }
}

fn optional_text() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[a-zA-Z ]{1,20}")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// After any sequence of updates, each field holds its last supplied value
    #[test]
    fn last_supplied_value_wins(
        updates in proptest::collection::vec((optional_text(), optional_text()), 1..10),
    ) {
        let mut state = FarmState::empty("s1");
        for (name, location) in &updates {
            state.apply(
                FarmProfileUpdate {
                    name: name.clone(),
                    location: location.clone(),
                    ..Default::default()
                },
                Utc::now(),
            );
        }

        let last_name = updates.iter().rev().find_map(|(name, _)| name.clone());
        let last_location = updates.iter().rev().find_map(|(_, location)| location.clone());
        prop_assert!(state.is_recorded());
        prop_assert_eq!(state.name, last_name);
        prop_assert_eq!(state.location, last_location);
    }
}
