//! # Petal Builder
//!
//! The "customize your own bouquet" configurator.
//!
//! At its center is a pure state-transition reducer: a closed set of
//! actions (add flower, remove flower, set quantity, clear, load preset,
//! reposition, change packaging, request preview) folds into a
//! [`types::BuilderState`] holding the selection map and the derived total
//! price. The one invariant the whole module is built around: **the total
//! is always recomputed from the full selection map on every mutation** —
//! it is never adjusted incrementally, so no partial-update drift is
//! possible.
//!
//! Preview generation is the only side effect. The reducer serializes the
//! current configuration into a text prompt (see [`prompt`]), marks the
//! preview pending (which suppresses re-submission), and returns a
//! `Future` effect that calls the injected image generator; the result
//! comes back as a `PreviewGenerated` or `PreviewFailed` action that
//! touches nothing but the preview status.

pub mod environment;
pub mod placement;
pub mod prompt;
pub mod reducer;
pub mod types;

pub use environment::BuilderEnvironment;
pub use placement::{FixedPlacement, PlacementSource, RandomPlacement};
pub use prompt::{build_prompt, BuiltPrompt};
pub use reducer::BuilderReducer;
pub use types::{BuilderAction, BuilderState, CanvasSize, Packaging, PreviewStatus, Selection};
