//! HTTP handlers for the storefront backend.

use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use petal_builder::{BuilderState, Packaging, Selection};
use petal_cart::{CheckoutError, OrderReceipt, OrderRequest};
use petal_catalog::{Flower, FlowerId, Placement, PresetBouquet};
use petal_imagegen::{GenerateError, GenerateRequest};
use serde::{Deserialize, Serialize};

/// Simple liveness check.
///
/// # Endpoint
///
/// ```text
/// GET /health
/// ```
#[allow(clippy::unused_async)]
pub async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}

/// List the flower catalog.
///
/// # Endpoint
///
/// ```text
/// GET /catalog/flowers
/// ```
pub async fn list_flowers(
    State(state): State<AppState>,
) -> Result<Json<Vec<Flower>>, AppError> {
    let flowers = state
        .catalog
        .fetch_flowers()
        .await
        .map_err(|e| AppError::unavailable(e.to_string()))?;
    Ok(Json(flowers))
}

/// List the preset bouquets.
///
/// # Endpoint
///
/// ```text
/// GET /catalog/presets
/// ```
pub async fn list_presets(
    State(state): State<AppState>,
) -> Result<Json<Vec<PresetBouquet>>, AppError> {
    let presets = state
        .catalog
        .fetch_presets()
        .await
        .map_err(|e| AppError::unavailable(e.to_string()))?;
    Ok(Json(presets))
}

/// One selected flower in a preview request
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SelectionDto {
    /// Catalog flower id
    pub flower_id: FlowerId,
    /// How many stems
    pub quantity: u32,
}

/// Request to generate a preview image for a configuration.
///
/// The configuration is stateless from the server's point of view: the
/// client sends its full selection and packaging, and the server rebuilds
/// the prompt from catalog data.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PreviewRequest {
    /// Selected flowers with quantities
    pub selections: Vec<SelectionDto>,
    /// Packaging options; defaults apply when absent
    #[serde(default)]
    pub packaging: Option<Packaging>,
    /// Image width (default 1024)
    #[serde(default)]
    pub width: Option<u32>,
    /// Image height (default 1024)
    #[serde(default)]
    pub height: Option<u32>,
    /// Generation seed; a fresh one is drawn when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Response with the generated preview
#[derive(Debug, Clone, Serialize)]
pub struct PreviewResponse {
    /// Image reference (data URL or remote URL)
    pub image_url: String,
    /// Whether the preview came from the cache
    pub cached: bool,
    /// Human-readable configuration summary
    pub summary: String,
    /// Cache key of this configuration
    pub cache_key: String,
}

const DEFAULT_PREVIEW_DIM: u32 = 1024;

fn map_generate_error(error: GenerateError) -> AppError {
    match error {
        GenerateError::Timeout => AppError::timeout("Preview generation timed out, try again"),
        GenerateError::RateLimited => {
            AppError::unavailable("Preview service is busy, try again shortly")
        },
        GenerateError::InvalidRequest(message) => AppError::internal(message),
        GenerateError::RequestFailed(_) | GenerateError::ApiError { .. } => {
            AppError::unavailable("Could not generate preview, try again")
        },
    }
}

/// Generate a preview image for a bouquet configuration.
///
/// # Endpoint
///
/// ```text
/// POST /preview
/// Content-Type: application/json
///
/// {
///   "selections": [{"flower_id": "rose-red", "quantity": 12}],
///   "packaging": {"kind": "box", "shape": "heart", "size": "medium",
///                 "color": "black", "glitter": false, "ribbon": true,
///                 "accessories": []},
///   "width": 1024,
///   "height": 1024
/// }
/// ```
pub async fn generate_preview(
    State(state): State<AppState>,
    Json(request): Json<PreviewRequest>,
) -> Result<Json<PreviewResponse>, AppError> {
    if request.selections.is_empty() {
        return Err(AppError::validation(
            "Add at least one flower before generating a preview",
        ));
    }

    let flowers = state
        .catalog
        .fetch_flowers()
        .await
        .map_err(|e| AppError::unavailable(e.to_string()))?;

    let mut builder = BuilderState::new();
    builder.packaging = request.packaging.unwrap_or_default();

    for dto in &request.selections {
        if dto.quantity == 0 {
            return Err(AppError::validation(format!(
                "Quantity for {} must be at least 1",
                dto.flower_id
            )));
        }
        let flower = flowers
            .iter()
            .find(|f| f.id == dto.flower_id)
            .ok_or_else(|| AppError::not_found("Flower", &dto.flower_id))?;
        builder.selections.insert(
            flower.id.clone(),
            // Placement is cosmetic and does not shape the prompt.
            Selection::new(flower.clone(), dto.quantity, Placement::new(0.0, 0.0, 0.0, 1.0)),
        );
    }
    builder.total = builder.derived_total();

    #[allow(clippy::cast_possible_truncation)]
    let seed = request
        .seed
        .unwrap_or_else(|| uuid::Uuid::new_v4().as_u128() as u64);
    let width = request.width.unwrap_or(DEFAULT_PREVIEW_DIM);
    let height = request.height.unwrap_or(DEFAULT_PREVIEW_DIM);

    let built = petal_builder::build_prompt(&builder, seed);
    let generate = GenerateRequest::new(built.positive, width, height)
        .with_negative_prompt(built.negative)
        .with_seed(seed)
        .with_cache_key(built.cache_key.clone());

    let image = state
        .generator
        .generate(generate)
        .await
        .map_err(map_generate_error)?;

    Ok(Json(PreviewResponse {
        image_url: image.image_url,
        cached: image.cached,
        summary: built.preview,
        cache_key: built.cache_key,
    }))
}

/// Response after submitting an order
#[derive(Debug, Clone, Serialize)]
pub struct OrderResponse {
    /// Assigned order identifier
    pub order_id: String,
    /// When the order was accepted (ISO 8601)
    pub accepted_at: String,
    /// Accepted total in cents
    pub total_cents: i64,
}

impl From<OrderReceipt> for OrderResponse {
    fn from(receipt: OrderReceipt) -> Self {
        Self {
            order_id: receipt.order_id,
            accepted_at: receipt.accepted_at.to_rfc3339(),
            total_cents: receipt.total.cents(),
        }
    }
}

/// Submit a finalized order.
///
/// # Endpoint
///
/// ```text
/// POST /orders
/// Content-Type: application/json
///
/// {
///   "customer": {"name": "Ada Bloom", "email": "ada@example.com"},
///   "lines": [{"description": "Custom bouquet: 12 Red Rose",
///              "quantity": 1, "unit_price": 4200}],
///   "total": 4200
/// }
/// ```
pub async fn submit_order(
    State(state): State<AppState>,
    Json(order): Json<OrderRequest>,
) -> Result<(StatusCode, Json<OrderResponse>), AppError> {
    let receipt = state.gateway.submit(order).await.map_err(|e| match e {
        CheckoutError::EmptyOrder | CheckoutError::TotalMismatch { .. } => {
            AppError::bad_request(e.to_string())
        },
        CheckoutError::RequestFailed(_) | CheckoutError::Rejected { .. } => {
            AppError::unavailable("Could not submit order, try again")
        },
    })?;

    Ok((StatusCode::CREATED, Json(receipt.into())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use petal_cart::checkout::mock::RecordingGateway;
    use petal_cart::{CustomerInfo, OrderLine};
    use petal_catalog::{Money, StaticCatalog};
    use petal_imagegen::mock::MockGenerator;
    use std::sync::Arc;
    use std::time::Duration;

    fn test_state(generator: Arc<MockGenerator>) -> AppState {
        AppState::new(
            Arc::new(StaticCatalog),
            generator,
            Arc::new(RecordingGateway::new()),
        )
    }

    fn preview_request(selections: Vec<SelectionDto>) -> PreviewRequest {
        PreviewRequest {
            selections,
            packaging: None,
            width: None,
            height: None,
            seed: Some(7),
        }
    }

    #[tokio::test]
    async fn health_answers_ok() {
        let (status, body) = health_check().await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn list_flowers_serves_catalog() {
        let state = test_state(Arc::new(MockGenerator::ok("mock://preview")));
        let Json(flowers) = list_flowers(State(state)).await.expect("flowers");
        assert!(flowers.iter().any(|f| f.id.as_str() == "rose-red"));
    }

    #[tokio::test]
    async fn list_presets_serves_catalog() {
        let state = test_state(Arc::new(MockGenerator::ok("mock://preview")));
        let Json(presets) = list_presets(State(state)).await.expect("presets");
        assert!(presets.iter().any(|p| p.id == "wedding"));
    }

    #[tokio::test]
    async fn preview_generates_image_for_valid_selection() {
        let generator = Arc::new(MockGenerator::ok("mock://preview.png"));
        let state = test_state(Arc::clone(&generator));

        let request = preview_request(vec![SelectionDto {
            flower_id: FlowerId::new("rose-red"),
            quantity: 12,
        }]);

        let Json(response) = generate_preview(State(state), Json(request))
            .await
            .expect("preview");

        assert_eq!(response.image_url, "mock://preview.png");
        assert!(!response.cached);
        assert!(response.summary.contains("12 red roses"));
        assert_eq!(response.cache_key.len(), 8);
        assert_eq!(generator.calls(), 1);
    }

    #[tokio::test]
    async fn preview_rejects_empty_selection() {
        let state = test_state(Arc::new(MockGenerator::ok("mock://preview")));
        let error = generate_preview(State(state), Json(preview_request(vec![])))
            .await
            .expect_err("empty selection must fail");
        assert_eq!(error.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn preview_rejects_unknown_flower() {
        let state = test_state(Arc::new(MockGenerator::ok("mock://preview")));
        let request = preview_request(vec![SelectionDto {
            flower_id: FlowerId::new("rose-chartreuse"),
            quantity: 1,
        }]);

        let error = generate_preview(State(state), Json(request))
            .await
            .expect_err("unknown flower must fail");
        assert_eq!(error.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn preview_failure_maps_to_unavailable() {
        let generator = Arc::new(
            MockGenerator::ok("mock://preview").failing_times(usize::MAX),
        );
        let state = test_state(generator);
        let request = preview_request(vec![SelectionDto {
            flower_id: FlowerId::new("rose-red"),
            quantity: 1,
        }]);

        let error = generate_preview(State(state), Json(request))
            .await
            .expect_err("generation failure must surface");
        assert_eq!(error.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn submit_order_accepts_valid_snapshot() {
        let gateway = Arc::new(RecordingGateway::new());
        let state = AppState::new(
            Arc::new(StaticCatalog),
            Arc::new(MockGenerator::ok("mock://preview")),
            Arc::clone(&gateway) as Arc<dyn petal_cart::OrderGateway>,
        );

        let order = OrderRequest {
            customer: CustomerInfo {
                name: "Ada Bloom".to_string(),
                email: "ada@example.com".to_string(),
                phone: None,
            },
            lines: vec![OrderLine {
                description: "Custom bouquet: 12 Red Rose".to_string(),
                quantity: 1,
                unit_price: Money::from_cents(4200),
            }],
            total: Money::from_cents(4200),
        };

        let (status, Json(response)) = submit_order(State(state), Json(order))
            .await
            .expect("order accepted");

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(response.total_cents, 4200);
        assert_eq!(gateway.submitted().len(), 1);
    }

    #[tokio::test]
    async fn submit_order_rejects_total_mismatch() {
        let state = test_state(Arc::new(MockGenerator::ok("mock://preview")));
        let order = OrderRequest {
            customer: CustomerInfo {
                name: "Ada Bloom".to_string(),
                email: "ada@example.com".to_string(),
                phone: None,
            },
            lines: vec![OrderLine {
                description: "Bouquet".to_string(),
                quantity: 2,
                unit_price: Money::from_cents(1000),
            }],
            total: Money::from_cents(1),
        };

        let error = submit_order(State(state), Json(order))
            .await
            .expect_err("mismatch must fail");
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn cached_preview_round_trip() {
        use petal_imagegen::CachingGenerator;

        let mock = Arc::new(MockGenerator::ok("mock://preview.png"));
        let caching = Arc::new(CachingGenerator::new(
            Arc::clone(&mock) as Arc<dyn petal_imagegen::ImageGenerator>,
            8,
            Duration::from_secs(60),
        ));
        let state = AppState::new(
            Arc::new(StaticCatalog),
            caching,
            Arc::new(RecordingGateway::new()),
        );

        let request = preview_request(vec![SelectionDto {
            flower_id: FlowerId::new("rose-red"),
            quantity: 3,
        }]);

        let Json(first) = generate_preview(State(state.clone()), Json(request.clone()))
            .await
            .expect("first");
        let Json(second) = generate_preview(State(state), Json(request))
            .await
            .expect("second");

        assert!(!first.cached);
        assert!(second.cached);
        assert_eq!(mock.calls(), 1);
    }
}
