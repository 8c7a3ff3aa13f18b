//! # Petal Cart
//!
//! Shopping cart and checkout for the Petal storefront.
//!
//! The cart is a reducer over line items. Line identity is the tuple
//! `(product id, size, personal note, description)`: the same product with
//! a different gift note is a separate line. Item counts and the total
//! price are always derived from the line map, never stored.
//!
//! Checkout converts finalized selections (cart lines or a custom bouquet
//! snapshot) into an opaque order record, revalidates the claimed total,
//! and hands the order to an [`checkout::OrderGateway`].

pub mod checkout;
pub mod reducer;
pub mod types;

pub use checkout::{
    custom_bouquet_line, CheckoutError, CustomerInfo, HttpOrderGateway, LocalOrderGateway,
    OrderGateway, OrderLine, OrderReceipt, OrderRequest,
};
pub use reducer::{CartEnvironment, CartReducer};
pub use types::{CartAction, CartItem, CartProduct, CartState, LineKey};
