//! Mock generator for tests.
//!
//! Kept as a public module (not `cfg(test)`) so downstream crates can use
//! it in their own tests without touching the network.

use crate::error::GenerateError;
use crate::types::{GenerateFuture, GenerateRequest, GeneratedImage, ImageGenerator};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Scripted in-memory generator
#[derive(Debug)]
pub struct MockGenerator {
    image_url: String,
    delay: Option<Duration>,
    fail_remaining: AtomicUsize,
    calls: AtomicUsize,
}

impl MockGenerator {
    /// A generator that always succeeds with the given image URL
    #[must_use]
    pub fn ok(image_url: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
            delay: None,
            fail_remaining: AtomicUsize::new(0),
            calls: AtomicUsize::new(0),
        }
    }

    /// Fail the first `n` calls with a server error, then succeed
    #[must_use]
    pub fn failing_times(mut self, n: usize) -> Self {
        self.fail_remaining = AtomicUsize::new(n);
        self
    }

    /// Sleep for `delay` before answering (for in-flight assertions)
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of generate calls received
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ImageGenerator for MockGenerator {
    fn generate(&self, request: GenerateRequest) -> GenerateFuture<'_> {
        Box::pin(async move {
            self.calls.fetch_add(1, Ordering::SeqCst);

            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }

            if self
                .fail_remaining
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_ok()
            {
                return Err(GenerateError::ApiError {
                    status: 500,
                    message: "mock failure".to_string(),
                });
            }

            Ok(GeneratedImage {
                image_url: self.image_url.clone(),
                cached: false,
                width: request.width,
                height: request.height,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_succeeds_after_scripted_failures() {
        let mock = MockGenerator::ok("mock://img").failing_times(2);
        let request = GenerateRequest::new("roses", 256, 256);

        assert!(mock.generate(request.clone()).await.is_err());
        assert!(mock.generate(request.clone()).await.is_err());

        let image = mock.generate(request).await.expect("third call succeeds");
        assert_eq!(image.image_url, "mock://img");
        assert_eq!(mock.calls(), 3);
    }
}
