//! Reducer logic for the bouquet configurator.
//!
//! Every mutating arm ends by recomputing the derived total from the full
//! selection map. Unknown flower ids on remove, set-quantity, and
//! reposition are no-ops. The preview request is the only arm that
//! produces an effect.

use crate::environment::BuilderEnvironment;
use crate::prompt;
use crate::types::{BuilderAction, BuilderState, PreviewStatus, Selection};
use petal_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
use petal_imagegen::GenerateRequest;
use std::collections::HashMap;
use std::sync::Arc;

/// Reducer for the bouquet configurator
#[derive(Clone, Copy, Debug, Default)]
pub struct BuilderReducer;

impl BuilderReducer {
    /// Creates a new `BuilderReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for BuilderReducer {
    type State = BuilderState;
    type Action = BuilderAction;
    type Environment = BuilderEnvironment;

    #[allow(clippy::too_many_lines)] // one arm per configurator operation
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            BuilderAction::AddFlower { flower } => {
                match state.selections.entry(flower.id.clone()) {
                    std::collections::hash_map::Entry::Occupied(mut entry) => {
                        entry.get_mut().quantity += 1;
                    },
                    std::collections::hash_map::Entry::Vacant(entry) => {
                        let placement = env.placements.next_placement(&state.canvas);
                        entry.insert(Selection::new(flower, 1, placement));
                    },
                }
                state.total = state.derived_total();
                SmallVec::new()
            },

            BuilderAction::RemoveFlower { id } => {
                state.selections.remove(&id);
                state.total = state.derived_total();
                SmallVec::new()
            },

            BuilderAction::SetQuantity { id, quantity } => {
                if quantity == 0 {
                    state.selections.remove(&id);
                } else if let Some(selection) = state.selections.get_mut(&id) {
                    selection.quantity = quantity;
                }
                state.total = state.derived_total();
                SmallVec::new()
            },

            BuilderAction::ClearAll => {
                state.selections.clear();
                state.total = state.derived_total();
                state.preview = PreviewStatus::Idle;
                state.last_error = None;
                SmallVec::new()
            },

            BuilderAction::LoadPreset { preset } => {
                let mut selections = HashMap::new();
                for entry in preset.flowers {
                    if entry.quantity == 0 {
                        continue;
                    }
                    // Preset entries referencing unknown catalog flowers
                    // are skipped, mirroring the unknown-id no-op policy.
                    let Some(flower) = env.lookup(&entry.flower_id) else {
                        continue;
                    };
                    let placement = entry
                        .placement
                        .unwrap_or_else(|| env.placements.next_placement(&state.canvas));
                    selections.insert(
                        flower.id.clone(),
                        Selection::new(flower.clone(), entry.quantity, placement),
                    );
                }
                state.selections = selections;
                state.total = state.derived_total();
                SmallVec::new()
            },

            BuilderAction::Reposition { id, placement } => {
                if let Some(selection) = state.selections.get_mut(&id) {
                    selection.placement = placement;
                }
                SmallVec::new()
            },

            BuilderAction::SetPackaging { packaging } => {
                state.packaging = packaging;
                SmallVec::new()
            },

            BuilderAction::RequestPreview {
                width,
                height,
                seed,
            } => {
                if state.selections.is_empty() {
                    state.last_error =
                        Some("Add at least one flower before generating a preview".to_string());
                    return SmallVec::new();
                }

                // Re-submission is disabled while a generation is in flight.
                if state.preview.is_pending() {
                    return SmallVec::new();
                }

                let built = prompt::build_prompt(state, seed);
                state.preview = PreviewStatus::Pending {
                    requested_at: env.clock.now(),
                };
                state.last_error = None;

                let generator = Arc::clone(&env.generator);
                let request = GenerateRequest::new(built.positive, width, height)
                    .with_negative_prompt(built.negative)
                    .with_seed(seed)
                    .with_cache_key(built.cache_key);

                smallvec![Effect::future(async move {
                    match generator.generate(request).await {
                        Ok(image) => Some(BuilderAction::PreviewGenerated {
                            image_url: image.image_url,
                            cached: image.cached,
                        }),
                        Err(error) => Some(BuilderAction::PreviewFailed {
                            error: error.to_string(),
                        }),
                    }
                })]
            },

            BuilderAction::PreviewGenerated { image_url, cached } => {
                state.preview = PreviewStatus::Ready { image_url, cached };
                SmallVec::new()
            },

            BuilderAction::PreviewFailed { error } => {
                state.preview = PreviewStatus::Failed {
                    error: error.clone(),
                };
                state.last_error = Some(error);
                SmallVec::new()
            },
        }
    }
}
