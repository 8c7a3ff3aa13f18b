//! # Petal Runtime
//!
//! Runtime implementation for the Petal reducer architecture.
//!
//! This crate provides the [`Store`] that coordinates reducer execution and
//! effect handling:
//!
//! - actions are reduced one at a time behind a write lock, so every state
//!   mutation is serialized exactly like a UI event queue;
//! - effects returned by the reducer run on spawned tasks, and any action
//!   they produce is fed back into the reducer;
//! - every dispatched action (including effect feedback) is broadcast, so
//!   callers can await a matching feedback action with a timeout.
//!
//! ## Example
//!
//! ```ignore
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! store.send(Action::DoSomething).await?;
//! let value = store.state(|s| s.some_field).await;
//! ```

use petal_core::{effect::Effect, reducer::Reducer};
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, RwLock};
use tokio::time::Instant;

pub mod retry;

pub use retry::RetryPolicy;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug)]
    pub enum StoreError {
        /// Store is shutting down and not accepting new actions
        #[error("Store is shutting down")]
        ShutdownInProgress,

        /// Shutdown timed out waiting for effects to complete
        #[error("Shutdown timed out with {0} effects still running")]
        ShutdownTimeout(usize),

        /// Timeout waiting for a matching action
        ///
        /// Returned by `send_and_wait_for` when the timeout expires before
        /// a matching action is received.
        #[error("Timeout waiting for action")]
        Timeout,

        /// Action broadcast channel closed
        #[error("Action broadcast channel closed")]
        ChannelClosed,
    }
}

pub use error::StoreError;

/// The Store runtime.
///
/// Holds the feature state behind a `tokio::sync::RwLock`, runs the reducer
/// for each dispatched action, and executes the returned effects. Cloning a
/// `Store` is cheap: clones share the same state, broadcast channel, and
/// effect counter.
pub struct Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    state: Arc<RwLock<S>>,
    reducer: R,
    environment: E,
    shutdown: Arc<AtomicBool>,
    pending_effects: Arc<AtomicUsize>,
    /// All dispatched actions (sent and effect-produced) are broadcast to
    /// observers. This enables request-response patterns over the action
    /// feedback loop.
    action_broadcast: broadcast::Sender<A>,
}

impl<S, A, E, R> Clone for Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + Clone,
    E: Clone,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            reducer: self.reducer.clone(),
            environment: self.environment.clone(),
            shutdown: Arc::clone(&self.shutdown),
            pending_effects: Arc::clone(&self.pending_effects),
            action_broadcast: self.action_broadcast.clone(),
        }
    }
}

impl<S, A, E, R> Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + Clone + Send + Sync + 'static,
    A: Send + Clone + 'static,
    S: Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    /// Create a new store with initial state, reducer, and environment.
    ///
    /// The action broadcast capacity defaults to 16; increase it with
    /// [`Store::with_broadcast_capacity`] when many feedback actions can be
    /// in flight at once.
    #[must_use]
    pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
        Self::with_broadcast_capacity(initial_state, reducer, environment, 16)
    }

    /// Create a new store with an explicit action broadcast capacity
    #[must_use]
    pub fn with_broadcast_capacity(
        initial_state: S,
        reducer: R,
        environment: E,
        capacity: usize,
    ) -> Self {
        let (action_broadcast, _) = broadcast::channel(capacity);

        Self {
            state: Arc::new(RwLock::new(initial_state)),
            reducer,
            environment,
            shutdown: Arc::new(AtomicBool::new(false)),
            pending_effects: Arc::new(AtomicUsize::new(0)),
            action_broadcast,
        }
    }

    /// Dispatch an action.
    ///
    /// Reduces the action under the state write lock, broadcasts it, and
    /// spawns execution of the returned effects.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] after shutdown began.
    pub async fn send(&self, action: A) -> Result<(), StoreError> {
        if self.shutdown.load(Ordering::SeqCst) {
            return Err(StoreError::ShutdownInProgress);
        }

        let effects = {
            let mut state = self.state.write().await;
            self.reducer
                .reduce(&mut state, action.clone(), &self.environment)
        };

        // Nobody listening is fine; observers are optional.
        let _ = self.action_broadcast.send(action);

        for effect in effects {
            self.spawn_effect(effect);
        }

        Ok(())
    }

    /// Dispatch an action and wait for a matching feedback action.
    ///
    /// Subscribes to the action broadcast before dispatching, so the
    /// matching action cannot be missed even if the effect completes
    /// immediately.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Timeout`] if no matching action arrives in time
    /// - [`StoreError::ChannelClosed`] if the broadcast channel closes
    /// - [`StoreError::ShutdownInProgress`] if the store is shutting down
    pub async fn send_and_wait_for<F>(
        &self,
        action: A,
        predicate: F,
        timeout: Duration,
    ) -> Result<A, StoreError>
    where
        F: Fn(&A) -> bool,
    {
        let mut receiver = self.action_broadcast.subscribe();
        self.send(action).await?;

        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Err(StoreError::Timeout);
            }

            match tokio::time::timeout(remaining, receiver.recv()).await {
                Ok(Ok(candidate)) => {
                    if predicate(&candidate) {
                        return Ok(candidate);
                    }
                },
                // Lagging observers only miss intermediate actions; keep
                // waiting for a match until the deadline.
                Ok(Err(broadcast::error::RecvError::Lagged(_))) => {},
                Ok(Err(broadcast::error::RecvError::Closed)) => {
                    return Err(StoreError::ChannelClosed);
                },
                Err(_) => return Err(StoreError::Timeout),
            }
        }
    }

    /// Read a projection of the current state
    pub async fn state<T>(&self, f: impl FnOnce(&S) -> T) -> T {
        let state = self.state.read().await;
        f(&state)
    }

    /// Subscribe to all dispatched actions
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<A> {
        self.action_broadcast.subscribe()
    }

    /// Number of effects currently running
    #[must_use]
    pub fn pending_effect_count(&self) -> usize {
        self.pending_effects.load(Ordering::SeqCst)
    }

    /// Stop accepting actions and wait for running effects to finish.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownTimeout`] with the number of effects
    /// still running when the timeout elapses.
    pub async fn shutdown(&self, timeout: Duration) -> Result<(), StoreError> {
        self.shutdown.store(true, Ordering::SeqCst);

        let deadline = Instant::now() + timeout;
        loop {
            let pending = self.pending_effect_count();
            if pending == 0 {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(StoreError::ShutdownTimeout(pending));
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }

    fn spawn_effect(&self, effect: Effect<A>) {
        if matches!(effect, Effect::None) {
            return;
        }

        let store = self.clone();
        self.pending_effects.fetch_add(1, Ordering::SeqCst);
        tokio::spawn(async move {
            store.execute_effect(effect).await;
            store.pending_effects.fetch_sub(1, Ordering::SeqCst);
        });
    }

    // Boxed for recursion through Parallel/Sequential trees.
    fn execute_effect(&self, effect: Effect<A>) -> Pin<Box<dyn Future<Output = ()> + Send>> {
        let store = self.clone();
        Box::pin(async move {
            match effect {
                Effect::None => {},
                Effect::Parallel(effects) => {
                    let tasks: Vec<_> = effects
                        .into_iter()
                        .map(|effect| store.execute_effect(effect))
                        .collect();
                    futures::future::join_all(tasks).await;
                },
                Effect::Sequential(effects) => {
                    for effect in effects {
                        store.execute_effect(effect).await;
                    }
                },
                Effect::Delay { duration, action } => {
                    tokio::time::sleep(duration).await;
                    store.feed_back(*action).await;
                },
                Effect::Future(future) => {
                    if let Some(action) = future.await {
                        store.feed_back(action).await;
                    }
                },
            }
        })
    }

    async fn feed_back(&self, action: A) {
        if let Err(error) = self.send(action).await {
            tracing::warn!(%error, "dropping effect feedback action");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_display() {
        assert_eq!(
            StoreError::ShutdownTimeout(3).to_string(),
            "Shutdown timed out with 3 effects still running"
        );
        assert_eq!(StoreError::Timeout.to_string(), "Timeout waiting for action");
    }
}
