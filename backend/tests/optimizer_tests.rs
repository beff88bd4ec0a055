//! Tests for the seasonal plan optimizer
//! Verifies normalization, constraint filtering and ranking behavior

use proptest::prelude::*;
use shared::{
    normalize_preferences, optimize_plan, rank_plans, FarmState, ObjectivePreferences, PlanKind,
    ResourceConstraints, RiskTolerance, DEFAULT_SCENARIO,
};

fn farm() -> FarmState {
    FarmState {
        session_id: "test-session".to_string(),
        primary_crops: vec!["maize".to_string()],
        ..Default::default()
    }
}

fn kinds(prefs: &ObjectivePreferences, constraints: &ResourceConstraints) -> Vec<PlanKind> {
    rank_plans(&farm(), prefs, constraints)
        .into_iter()
        .map(|scored| scored.plan.kind)
        .collect()
}

fn position(kinds: &[PlanKind], kind: PlanKind) -> Option<usize> {
    kinds.iter().position(|k| *k == kind)
}

// ============================================================================
// Property Test Strategies
// ============================================================================

/// Non-negative weights with a positive sum
fn positive_weights_strategy() -> impl Strategy<Value = ObjectivePreferences> {
    (0.01f64..1.0, 0.01f64..1.0, 0.01f64..1.0, 0.01f64..1.0)
        .prop_map(|(y, p, w, r)| ObjectivePreferences::new(y, p, w, r))
}

/// Weights whose sum is zero or negative
fn non_positive_weights_strategy() -> impl Strategy<Value = ObjectivePreferences> {
    (-1.0f64..=0.0, -1.0f64..=0.0, -1.0f64..=0.0, -1.0f64..=0.0)
        .prop_map(|(y, p, w, r)| ObjectivePreferences::new(y, p, w, r))
}

fn risk_tolerance_strategy() -> impl Strategy<Value = RiskTolerance> {
    prop_oneof![
        Just(RiskTolerance::Low),
        Just(RiskTolerance::Medium),
        Just(RiskTolerance::High),
    ]
}

fn constraints_strategy() -> impl Strategy<Value = ResourceConstraints> {
    (
        proptest::option::of(-100.0f64..1000.0),
        proptest::option::of(0.0f64..300.0),
        proptest::option::of(0.0f64..10_000.0),
        risk_tolerance_strategy(),
    )
        .prop_map(|(water, nitrogen, budget, risk)| ResourceConstraints {
            max_water_mm: water,
            max_nitrogen_kg_ha: nitrogen,
            max_budget_usd: budget,
            risk_tolerance: risk,
        })
}

// ============================================================================
// Unit Tests
// ============================================================================

mod ranking {
    use super::*;

    #[test]
    fn default_preferences_prefer_balanced() {
        let result = optimize_plan(
            &farm(),
            &ObjectivePreferences::default(),
            &ResourceConstraints::default(),
            None,
        );
        assert_eq!(result.best_plan.kind, PlanKind::Balanced);
        assert_eq!(result.alternative_plan.kind, PlanKind::Aggressive);
        assert!(result.reasoning_summary.contains(DEFAULT_SCENARIO));
    }

    #[test]
    fn low_risk_excludes_aggressive_before_scoring() {
        let constraints = ResourceConstraints {
            risk_tolerance: RiskTolerance::Low,
            ..Default::default()
        };
        // Yield-only weights would otherwise pick the aggressive plan
        let prefs = ObjectivePreferences::new(1.0, 0.0, 0.0, 0.0);
        assert_eq!(kinds(&prefs, &constraints), vec![PlanKind::Balanced, PlanKind::Conservative]);
    }

    #[test]
    fn tiny_water_cap_still_drops_water_hungry_plan() {
        let constraints = ResourceConstraints {
            max_water_mm: Some(1.0),
            ..Default::default()
        };
        let ranked = kinds(&ObjectivePreferences::default(), &constraints);
        assert_eq!(position(&ranked, PlanKind::Aggressive), None);
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn huge_water_cap_also_drops_water_hungry_plan() {
        let constraints = ResourceConstraints {
            max_water_mm: Some(10_000.0),
            ..Default::default()
        };
        let ranked = kinds(&ObjectivePreferences::default(), &constraints);
        assert_eq!(position(&ranked, PlanKind::Aggressive), None);
    }

    #[test]
    fn water_saving_weight_favors_conservative() {
        let prefs = ObjectivePreferences::new(0.0, 0.0, 1.0, 0.0);
        let result = optimize_plan(&farm(), &prefs, &ResourceConstraints::default(), None);
        assert_eq!(result.best_plan.kind, PlanKind::Conservative);
        assert_eq!(result.alternative_plan.kind, PlanKind::Balanced);
    }

    #[test]
    fn scenario_text_is_quoted_in_reasoning() {
        let result = optimize_plan(
            &farm(),
            &ObjectivePreferences::default(),
            &ResourceConstraints::default(),
            Some("  a dry El Nino year "),
        );
        assert!(result.reasoning_summary.contains("a dry El Nino year"));
        assert!(!result.reasoning_summary.contains(DEFAULT_SCENARIO));
    }

    #[test]
    fn plan_descriptions_name_the_main_crop() {
        let result = optimize_plan(
            &farm(),
            &ObjectivePreferences::default(),
            &ResourceConstraints::default(),
            None,
        );
        assert!(result.best_plan.description.contains("maize"));
        assert!(result.alternative_plan.description.contains("maize"));
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Normalizing already-normalized weights changes nothing
    #[test]
    fn normalization_is_idempotent(prefs in positive_weights_strategy()) {
        let once = normalize_preferences(&prefs).weights();
        let twice = normalize_preferences(&once).weights();

        prop_assert!((once.total() - 1.0).abs() < 1e-9);
        for (a, b) in once.as_array().iter().zip(twice.as_array().iter()) {
            prop_assert!((a - b).abs() < 1e-9);
        }
    }

    /// A non-positive sum yields the default preset
    #[test]
    fn non_positive_sum_falls_back_to_default(prefs in non_positive_weights_strategy()) {
        let normalized = normalize_preferences(&prefs);
        prop_assert!(normalized.fell_back());
        prop_assert_eq!(normalized.weights(), ObjectivePreferences::default());
    }

    /// Some plan is always recommended, whatever the constraints
    #[test]
    fn result_is_never_empty(
        prefs in positive_weights_strategy(),
        constraints in constraints_strategy(),
    ) {
        let ranked = rank_plans(&farm(), &prefs, &constraints);
        prop_assert!(!ranked.is_empty());

        let result = optimize_plan(&farm(), &prefs, &constraints, None);
        prop_assert_eq!(&result.best_plan, &ranked[0].plan);
    }

    /// Ranked scores are non-increasing
    #[test]
    fn ranking_is_sorted_by_score(
        prefs in positive_weights_strategy(),
        constraints in constraints_strategy(),
    ) {
        let ranked = rank_plans(&farm(), &prefs, &constraints);
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    /// Low risk tolerance never lets the aggressive plan through
    #[test]
    fn low_risk_never_recommends_aggressive(prefs in positive_weights_strategy()) {
        let constraints = ResourceConstraints {
            risk_tolerance: RiskTolerance::Low,
            ..Default::default()
        };
        let result = optimize_plan(&farm(), &prefs, &constraints, None);
        prop_assert_ne!(result.best_plan.kind, PlanKind::Aggressive);
        prop_assert_ne!(result.alternative_plan.kind, PlanKind::Aggressive);
    }

    /// Raising the yield weight never moves aggressive behind conservative
    #[test]
    fn raising_yield_weight_is_monotonic(
        prefs in positive_weights_strategy(),
        delta in 0.1f64..2.0,
    ) {
        let constraints = ResourceConstraints::default();
        let before = kinds(&prefs, &constraints);
        let raised = ObjectivePreferences {
            weight_yield: prefs.weight_yield + delta,
            ..prefs
        };
        let after = kinds(&raised, &constraints);

        let ahead_before = position(&before, PlanKind::Aggressive) < position(&before, PlanKind::Conservative);
        let ahead_after = position(&after, PlanKind::Aggressive) < position(&after, PlanKind::Conservative);
        prop_assert!(!ahead_before || ahead_after);
    }
}
