//! Property tests for the configurator's pricing invariant.
//!
//! For every sequence of actions, the displayed total must equal the sum
//! of line totals over the resulting selection map.

use petal_builder::{BuilderAction, BuilderEnvironment, BuilderReducer, BuilderState, FixedPlacement};
use petal_catalog::{data, FlowerId, Placement};
use petal_core::reducer::Reducer;
use petal_imagegen::mock::MockGenerator;
use petal_testing::test_clock;
use proptest::prelude::*;
use std::sync::Arc;

const KNOWN_FLOWERS: &[&str] = &["rose-red", "tulip-white", "peony-pink", "orchid-blue"];
const ANY_IDS: &[&str] = &[
    "rose-red",
    "tulip-white",
    "peony-pink",
    "orchid-blue",
    "rose-chartreuse",
];

fn test_env() -> BuilderEnvironment {
    BuilderEnvironment::new(
        data::builtin_flowers(),
        Arc::new(test_clock()),
        Arc::new(FixedPlacement::centered()),
        Arc::new(MockGenerator::ok("mock://preview")),
    )
}

fn arb_action() -> impl Strategy<Value = BuilderAction> {
    let known = proptest::sample::select(KNOWN_FLOWERS);
    let any = proptest::sample::select(ANY_IDS);

    prop_oneof![
        known.prop_map(|id| BuilderAction::AddFlower {
            flower: data::find_flower(&FlowerId::new(id)).expect("known flower"),
        }),
        any.clone().prop_map(|id| BuilderAction::RemoveFlower {
            id: FlowerId::new(id),
        }),
        (any.clone(), 0u32..8).prop_map(|(id, quantity)| BuilderAction::SetQuantity {
            id: FlowerId::new(id),
            quantity,
        }),
        Just(BuilderAction::ClearAll),
        proptest::sample::select(vec!["valentines", "wedding", "birthday"]).prop_map(|preset_id| {
            let preset = data::builtin_presets()
                .into_iter()
                .find(|p| p.id == preset_id)
                .expect("builtin preset");
            BuilderAction::LoadPreset { preset }
        }),
        (any, -50.0f32..900.0, -20.0f32..20.0).prop_map(|(id, x, rotation)| {
            BuilderAction::Reposition {
                id: FlowerId::new(id),
                placement: Placement::new(x, x / 2.0, rotation, 1.0),
            }
        }),
    ]
}

proptest! {
    #[test]
    fn total_always_equals_sum_of_line_totals(actions in proptest::collection::vec(arb_action(), 0..40)) {
        let env = test_env();
        let reducer = BuilderReducer::new();
        let mut state = BuilderState::new();

        for action in actions {
            reducer.reduce(&mut state, action, &env);

            prop_assert_eq!(state.total, state.derived_total());
            prop_assert!(state.selections.values().all(|s| s.quantity >= 1));
        }
    }

    #[test]
    fn set_quantity_zero_equals_remove(
        id in proptest::sample::select(KNOWN_FLOWERS),
        setup in proptest::collection::vec(arb_action(), 0..15),
    ) {
        let env = test_env();
        let reducer = BuilderReducer::new();

        let mut state = BuilderState::new();
        for action in setup {
            reducer.reduce(&mut state, action, &env);
        }

        let mut via_set = state.clone();
        reducer.reduce(
            &mut via_set,
            BuilderAction::SetQuantity { id: FlowerId::new(id), quantity: 0 },
            &env,
        );

        let mut via_remove = state;
        reducer.reduce(
            &mut via_remove,
            BuilderAction::RemoveFlower { id: FlowerId::new(id) },
            &env,
        );

        prop_assert_eq!(via_set, via_remove);
    }

    #[test]
    fn clear_all_always_yields_empty_state(setup in proptest::collection::vec(arb_action(), 0..25)) {
        let env = test_env();
        let reducer = BuilderReducer::new();

        let mut state = BuilderState::new();
        for action in setup {
            reducer.reduce(&mut state, action, &env);
        }

        reducer.reduce(&mut state, BuilderAction::ClearAll, &env);

        prop_assert!(state.selections.is_empty());
        prop_assert_eq!(state.total, petal_catalog::Money::ZERO);
    }
}
