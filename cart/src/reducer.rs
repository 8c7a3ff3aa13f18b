//! Reducer logic for the shopping cart.

use crate::types::{CartAction, CartItem, CartState};
use petal_core::{effect::Effect, reducer::Reducer, SmallVec};

/// Environment for the cart reducer.
///
/// The cart is a pure state machine; nothing is injected.
#[derive(Clone, Copy, Debug, Default)]
pub struct CartEnvironment;

/// Reducer for the shopping cart
#[derive(Clone, Copy, Debug, Default)]
pub struct CartReducer;

impl CartReducer {
    /// Creates a new `CartReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for CartReducer {
    type State = CartState;
    type Action = CartAction;
    type Environment = CartEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            CartAction::AddItem { product } => {
                let key = product.line_key();
                state
                    .items
                    .entry(key)
                    .and_modify(|item| item.quantity += 1)
                    .or_insert(CartItem {
                        product,
                        quantity: 1,
                    });
            },

            CartAction::RemoveItem { key } => {
                state.items.remove(&key);
            },

            CartAction::SetQuantity { key, quantity } => {
                if quantity == 0 {
                    state.items.remove(&key);
                } else if let Some(item) = state.items.get_mut(&key) {
                    item.quantity = quantity;
                }
            },

            CartAction::Clear => {
                state.items.clear();
            },
        }

        SmallVec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CartProduct;
    use petal_catalog::Money;
    use petal_testing::{assertions, ReducerTest};

    fn product(id: &str, cents: i64) -> CartProduct {
        CartProduct {
            id: id.to_string(),
            name: id.to_string(),
            price: Money::from_cents(cents),
            image_url: None,
            size: None,
            personal_note: None,
            description: None,
        }
    }

    fn with_note(mut product: CartProduct, note: &str) -> CartProduct {
        product.personal_note = Some(note.to_string());
        product
    }

    #[test]
    fn add_item_inserts_line() {
        ReducerTest::new(CartReducer::new())
            .with_env(CartEnvironment)
            .given_state(CartState::new())
            .when_action(CartAction::AddItem {
                product: product("bouquet-1", 18900),
            })
            .then_state(|state| {
                assert_eq!(state.line_count(), 1);
                assert_eq!(state.total_items(), 1);
                assert_eq!(state.total_price(), Money::from_cents(18900));
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn matching_lines_merge_and_different_notes_do_not() {
        let plain = product("bouquet-1", 18900);
        let noted = with_note(product("bouquet-1", 18900), "Happy birthday!");

        ReducerTest::new(CartReducer::new())
            .with_env(CartEnvironment)
            .given_state(CartState::new())
            .when_actions([
                CartAction::AddItem {
                    product: plain.clone(),
                },
                CartAction::AddItem { product: plain },
                CartAction::AddItem { product: noted },
            ])
            .then_state(|state| {
                assert_eq!(state.line_count(), 2);
                assert_eq!(state.total_items(), 3);
                assert_eq!(state.total_price(), Money::from_cents(56700));
            })
            .run();
    }

    #[test]
    fn set_quantity_zero_removes_line() {
        let item = product("bouquet-1", 18900);
        let key = item.line_key();

        ReducerTest::new(CartReducer::new())
            .with_env(CartEnvironment)
            .given_state(CartState::new())
            .when_actions([
                CartAction::AddItem { product: item },
                CartAction::SetQuantity { key, quantity: 0 },
            ])
            .then_state(|state| {
                assert!(state.items.is_empty());
                assert_eq!(state.total_price(), Money::ZERO);
            })
            .run();
    }

    #[test]
    fn set_quantity_overwrites() {
        let item = product("bouquet-1", 2000);
        let key = item.line_key();

        ReducerTest::new(CartReducer::new())
            .with_env(CartEnvironment)
            .given_state(CartState::new())
            .when_actions([
                CartAction::AddItem { product: item },
                CartAction::SetQuantity { key, quantity: 4 },
            ])
            .then_state(|state| {
                assert_eq!(state.total_items(), 4);
                assert_eq!(state.total_price(), Money::from_cents(8000));
            })
            .run();
    }

    #[test]
    fn set_quantity_on_unknown_line_is_noop() {
        ReducerTest::new(CartReducer::new())
            .with_env(CartEnvironment)
            .given_state(CartState::new())
            .when_action(CartAction::SetQuantity {
                key: product("ghost", 100).line_key(),
                quantity: 3,
            })
            .then_state(|state| {
                assert!(state.items.is_empty());
            })
            .run();
    }

    #[test]
    fn clear_empties_cart() {
        ReducerTest::new(CartReducer::new())
            .with_env(CartEnvironment)
            .given_state(CartState::new())
            .when_actions([
                CartAction::AddItem {
                    product: product("bouquet-1", 18900),
                },
                CartAction::AddItem {
                    product: product("bouquet-2", 20500),
                },
                CartAction::Clear,
            ])
            .then_state(|state| {
                assert!(state.items.is_empty());
                assert_eq!(state.total_price(), Money::ZERO);
            })
            .run();
    }
}
