//! Checkout submission.
//!
//! On order submission the finalized selections become an opaque
//! line-item record handed to an external order API. The gateway
//! revalidates the claimed total against the lines before submitting;
//! a failed submission surfaces as an error and never mutates cart or
//! configurator state.

use chrono::{DateTime, Utc};
use petal_builder::BuilderState;
use petal_catalog::Money;
use petal_core::environment::Clock;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during checkout
#[derive(Error, Debug)]
pub enum CheckoutError {
    /// Order contains no lines
    #[error("Order contains no line items")]
    EmptyOrder,

    /// Claimed total does not match the sum of line totals
    #[error("Order total {claimed} does not match line totals {computed}")]
    TotalMismatch {
        /// Total claimed by the client
        claimed: Money,
        /// Total computed from the lines
        computed: Money,
    },

    /// Network request failed
    #[error("Order submission failed: {0}")]
    RequestFailed(String),

    /// Order API rejected the submission
    #[error("Order API rejected the submission with status {status}: {message}")]
    Rejected {
        /// HTTP status code
        status: u16,
        /// Response body (truncated)
        message: String,
    },
}

/// Customer contact details on an order
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    /// Full name
    pub name: String,
    /// Email address
    pub email: String,
    /// Phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// One opaque order line
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// What is being bought (product name or custom bouquet summary)
    pub description: String,
    /// How many
    pub quantity: u32,
    /// Unit price
    pub unit_price: Money,
}

impl OrderLine {
    /// Price of this line
    #[must_use]
    pub const fn line_total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}

/// A finalized order ready for submission
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Customer contact details
    pub customer: CustomerInfo,
    /// Order lines
    pub lines: Vec<OrderLine>,
    /// Total claimed by the client; revalidated before submission
    pub total: Money,
}

impl OrderRequest {
    /// Validates the order snapshot.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::EmptyOrder`] when there are no lines
    /// - [`CheckoutError::TotalMismatch`] when the claimed total differs
    ///   from the sum of line totals
    pub fn validate(&self) -> Result<(), CheckoutError> {
        if self.lines.is_empty() {
            return Err(CheckoutError::EmptyOrder);
        }

        let computed: Money = self.lines.iter().map(OrderLine::line_total).sum();
        if computed != self.total {
            return Err(CheckoutError::TotalMismatch {
                claimed: self.total,
                computed,
            });
        }

        Ok(())
    }
}

/// Acknowledgement returned by the order API
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderReceipt {
    /// Assigned order identifier
    pub order_id: String,
    /// When the order was accepted
    pub accepted_at: DateTime<Utc>,
    /// Accepted total
    pub total: Money,
}

/// Converts a finalized bouquet configuration into an order line.
///
/// The selection snapshot becomes a single opaque line priced at the
/// configuration's derived total.
#[must_use]
pub fn custom_bouquet_line(state: &BuilderState) -> OrderLine {
    let mut flowers: Vec<String> = state
        .selections
        .values()
        .map(|s| format!("{} {}", s.quantity, s.flower.name))
        .collect();
    flowers.sort_unstable();

    OrderLine {
        description: format!("Custom bouquet: {}", flowers.join(", ")),
        quantity: 1,
        unit_price: state.total,
    }
}

/// Type alias for the boxed futures returned by [`OrderGateway`]
pub type SubmitFuture<'a> =
    Pin<Box<dyn Future<Output = Result<OrderReceipt, CheckoutError>> + Send + 'a>>;

/// The order submission boundary
pub trait OrderGateway: Send + Sync {
    /// Validate and submit an order
    fn submit(&self, order: OrderRequest) -> SubmitFuture<'_>;
}

/// Submits orders to a remote order API as JSON
#[derive(Clone, Debug)]
pub struct HttpOrderGateway {
    client: reqwest::Client,
    submit_url: String,
}

impl HttpOrderGateway {
    /// Creates a gateway posting to the given URL.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::RequestFailed`] if the HTTP client cannot
    /// be constructed.
    pub fn new(submit_url: impl Into<String>, timeout: Duration) -> Result<Self, CheckoutError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CheckoutError::RequestFailed(e.to_string()))?;

        Ok(Self {
            client,
            submit_url: submit_url.into(),
        })
    }

    async fn submit_inner(&self, order: OrderRequest) -> Result<OrderReceipt, CheckoutError> {
        order.validate()?;

        let response = self
            .client
            .post(&self.submit_url)
            .json(&order)
            .send()
            .await
            .map_err(|e| CheckoutError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let mut message = body;
            message.truncate(200);
            return Err(CheckoutError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<OrderReceipt>()
            .await
            .map_err(|e| CheckoutError::RequestFailed(e.to_string()))
    }
}

impl OrderGateway for HttpOrderGateway {
    fn submit(&self, order: OrderRequest) -> SubmitFuture<'_> {
        Box::pin(self.submit_inner(order))
    }
}

/// Accepts orders locally when no remote order API is configured.
///
/// Validates the snapshot and acknowledges with a generated order id; the
/// order itself is logged, not persisted.
#[derive(Clone)]
pub struct LocalOrderGateway {
    clock: Arc<dyn Clock>,
}

impl LocalOrderGateway {
    /// Creates a local gateway
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl OrderGateway for LocalOrderGateway {
    fn submit(&self, order: OrderRequest) -> SubmitFuture<'_> {
        Box::pin(async move {
            order.validate()?;

            let receipt = OrderReceipt {
                order_id: format!("order-{}", uuid::Uuid::new_v4()),
                accepted_at: self.clock.now(),
                total: order.total,
            };

            tracing::info!(
                order_id = %receipt.order_id,
                customer = %order.customer.email,
                lines = order.lines.len(),
                total = %order.total,
                "order accepted locally"
            );

            Ok(receipt)
        })
    }
}

/// Mock gateway for tests
pub mod mock {
    use super::{CheckoutError, OrderGateway, OrderReceipt, OrderRequest, SubmitFuture};
    use chrono::Utc;
    use std::sync::Mutex;

    /// Records submitted orders and acknowledges them
    #[derive(Debug, Default)]
    pub struct RecordingGateway {
        submitted: Mutex<Vec<OrderRequest>>,
    }

    impl RecordingGateway {
        /// Creates an empty recording gateway
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Orders submitted so far
        ///
        /// # Panics
        ///
        /// Panics if the internal lock is poisoned.
        #[must_use]
        #[allow(clippy::unwrap_used)] // test helper
        pub fn submitted(&self) -> Vec<OrderRequest> {
            self.submitted.lock().unwrap().clone()
        }
    }

    impl OrderGateway for RecordingGateway {
        fn submit(&self, order: OrderRequest) -> SubmitFuture<'_> {
            Box::pin(async move {
                order.validate()?;

                #[allow(clippy::unwrap_used)] // test helper
                self.submitted.lock().unwrap().push(order.clone());

                Ok(OrderReceipt {
                    order_id: format!("order-test-{}", self.submitted().len()),
                    accepted_at: Utc::now(),
                    total: order.total,
                })
            })
        }
    }

    /// A gateway that always fails with a rejection
    #[derive(Clone, Copy, Debug, Default)]
    pub struct RejectingGateway;

    impl OrderGateway for RejectingGateway {
        fn submit(&self, order: OrderRequest) -> SubmitFuture<'_> {
            Box::pin(async move {
                order.validate()?;
                Err(CheckoutError::Rejected {
                    status: 503,
                    message: "mock rejection".to_string(),
                })
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petal_builder::{BuilderAction, BuilderEnvironment, BuilderReducer, FixedPlacement};
    use petal_catalog::{data, FlowerId};
    use petal_core::reducer::Reducer;
    use petal_imagegen::mock::MockGenerator;
    use petal_testing::test_clock;

    fn customer() -> CustomerInfo {
        CustomerInfo {
            name: "Ada Bloom".to_string(),
            email: "ada@example.com".to_string(),
            phone: None,
        }
    }

    fn line(cents: i64, quantity: u32) -> OrderLine {
        OrderLine {
            description: "Bouquet".to_string(),
            quantity,
            unit_price: Money::from_cents(cents),
        }
    }

    #[test]
    fn validate_accepts_consistent_orders() {
        let order = OrderRequest {
            customer: customer(),
            lines: vec![line(18900, 1), line(2000, 3)],
            total: Money::from_cents(24900),
        };
        assert!(order.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_orders() {
        let order = OrderRequest {
            customer: customer(),
            lines: vec![],
            total: Money::ZERO,
        };
        assert!(matches!(order.validate(), Err(CheckoutError::EmptyOrder)));
    }

    #[test]
    fn validate_rejects_total_mismatch() {
        let order = OrderRequest {
            customer: customer(),
            lines: vec![line(18900, 1)],
            total: Money::from_cents(100),
        };
        assert!(matches!(
            order.validate(),
            Err(CheckoutError::TotalMismatch { .. })
        ));
    }

    #[test]
    fn custom_bouquet_line_snapshots_builder_state() {
        let env = BuilderEnvironment::new(
            data::builtin_flowers(),
            Arc::new(test_clock()),
            Arc::new(FixedPlacement::centered()),
            Arc::new(MockGenerator::ok("mock://preview")),
        );
        let reducer = BuilderReducer::new();
        let mut state = petal_builder::BuilderState::new();

        for id in ["rose-red", "rose-red", "tulip-white"] {
            reducer.reduce(
                &mut state,
                BuilderAction::AddFlower {
                    flower: data::find_flower(&FlowerId::new(id)).expect("flower"),
                },
                &env,
            );
        }

        let line = custom_bouquet_line(&state);
        assert_eq!(line.quantity, 1);
        assert_eq!(line.unit_price, Money::from_cents(1000));
        assert!(line.description.contains("2 Red Rose"));
        assert!(line.description.contains("1 White Tulip"));
    }

    #[tokio::test]
    async fn local_gateway_acknowledges_valid_orders() {
        let gateway = LocalOrderGateway::new(Arc::new(test_clock()));
        let order = OrderRequest {
            customer: customer(),
            lines: vec![line(18900, 1)],
            total: Money::from_cents(18900),
        };

        let receipt = gateway.submit(order).await.expect("receipt");
        assert!(receipt.order_id.starts_with("order-"));
        assert_eq!(receipt.total, Money::from_cents(18900));
    }

    #[tokio::test]
    async fn local_gateway_rejects_inconsistent_orders() {
        let gateway = LocalOrderGateway::new(Arc::new(test_clock()));
        let order = OrderRequest {
            customer: customer(),
            lines: vec![line(18900, 1)],
            total: Money::from_cents(1),
        };

        let result = gateway.submit(order).await;
        assert!(matches!(result, Err(CheckoutError::TotalMismatch { .. })));
    }

    #[tokio::test]
    async fn recording_gateway_keeps_submissions() {
        let gateway = mock::RecordingGateway::new();
        let order = OrderRequest {
            customer: customer(),
            lines: vec![line(2000, 2)],
            total: Money::from_cents(4000),
        };

        gateway.submit(order.clone()).await.expect("receipt");
        assert_eq!(gateway.submitted(), vec![order]);
    }
}
