//! Integration tests for the Store action/effect feedback loop.

use petal_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
use petal_runtime::{Store, StoreError};
use std::time::Duration;

#[derive(Clone, Debug, Default)]
struct EchoState {
    requests: u32,
    replies: u32,
}

#[derive(Clone, Debug)]
enum EchoAction {
    Request,
    SlowRequest(Duration),
    Reply,
}

#[derive(Clone)]
struct EchoEnv;

#[derive(Clone)]
struct EchoReducer;

impl Reducer for EchoReducer {
    type State = EchoState;
    type Action = EchoAction;
    type Environment = EchoEnv;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            EchoAction::Request => {
                state.requests += 1;
                smallvec![Effect::future(async { Some(EchoAction::Reply) })]
            },
            EchoAction::SlowRequest(delay) => {
                state.requests += 1;
                smallvec![Effect::future(async move {
                    tokio::time::sleep(delay).await;
                    Some(EchoAction::Reply)
                })]
            },
            EchoAction::Reply => {
                state.replies += 1;
                smallvec![Effect::None]
            },
        }
    }
}

fn echo_store() -> Store<EchoState, EchoAction, EchoEnv, EchoReducer> {
    Store::new(EchoState::default(), EchoReducer, EchoEnv)
}

#[tokio::test]
async fn effect_feedback_reaches_reducer() {
    let store = echo_store();

    let reply = store
        .send_and_wait_for(
            EchoAction::Request,
            |a| matches!(a, EchoAction::Reply),
            Duration::from_secs(1),
        )
        .await
        .expect("reply should arrive");

    assert!(matches!(reply, EchoAction::Reply));
    assert_eq!(store.state(|s| (s.requests, s.replies)).await, (1, 1));
}

#[tokio::test]
async fn wait_for_times_out_without_match() {
    let store = echo_store();

    let result = store
        .send_and_wait_for(
            EchoAction::Reply,
            |a| matches!(a, EchoAction::Request),
            Duration::from_millis(50),
        )
        .await;

    assert!(matches!(result, Err(StoreError::Timeout)));
}

#[tokio::test]
async fn concurrent_sends_are_serialized() {
    let store = echo_store();

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let store = store.clone();
            tokio::spawn(async move { store.send(EchoAction::Reply).await })
        })
        .collect();

    for handle in handles {
        handle.await.expect("task").expect("send");
    }

    assert_eq!(store.state(|s| s.replies).await, 16);
}

#[tokio::test]
async fn shutdown_rejects_new_actions() {
    let store = echo_store();

    store
        .shutdown(Duration::from_secs(1))
        .await
        .expect("no effects pending");

    let result = store.send(EchoAction::Request).await;
    assert!(matches!(result, Err(StoreError::ShutdownInProgress)));
}

#[tokio::test]
async fn shutdown_waits_for_running_effects() {
    let store = echo_store();

    store
        .send(EchoAction::SlowRequest(Duration::from_millis(50)))
        .await
        .expect("send");

    // The slow effect is still running; shutdown must wait for it. The
    // feedback Reply is dropped because the store no longer accepts
    // actions, which is the documented best-effort cancellation behavior.
    store
        .shutdown(Duration::from_secs(2))
        .await
        .expect("effects drain before the deadline");

    assert_eq!(store.pending_effect_count(), 0);
}
