#![allow(dead_code)]

use courier::{
    BoxError, CancellationToken, Next, Notification, NotificationHandler, PipelineBehavior,
    Request, RequestHandler,
};
use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

// ============================================================================
// Test Request Types
// ============================================================================

#[derive(Clone, Debug)]
pub struct Ping {
    pub message: String,
}

impl Request for Ping {
    type Response = Pong;
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Pong {
    pub message: String,
}

/// A unit request answered with a default [`Pong`].
pub struct StatusCheck;

impl Request for StatusCheck {
    type Response = Pong;
}

// ============================================================================
// Test Handlers and Behaviors
// ============================================================================

pub struct EchoHandler;

impl RequestHandler<Ping> for EchoHandler {
    async fn handle(&self, request: &Ping, _cancel: &CancellationToken) -> Result<Pong, BoxError> {
        Ok(Pong {
            message: request.message.clone(),
        })
    }
}

// Handler that returns Result for error propagation tests
pub struct FallibleHandler {
    pub should_fail: bool,
}

impl RequestHandler<Ping> for FallibleHandler {
    async fn handle(&self, request: &Ping, _cancel: &CancellationToken) -> Result<Pong, BoxError> {
        if self.should_fail {
            Err("intentional failure".into())
        } else {
            Ok(Pong {
                message: request.message.clone(),
            })
        }
    }
}

pub struct FailingBehavior {
    pub message: &'static str,
}

impl PipelineBehavior<Ping> for FailingBehavior {
    async fn handle(
        &self,
        _request: &Ping,
        _next: Next<'_, Ping>,
        _cancel: &CancellationToken,
    ) -> Result<Pong, BoxError> {
        Err(self.message.into())
    }
}

// ============================================================================
// Test Notification Types and Handlers
// ============================================================================

#[derive(Clone, Debug)]
pub struct OrderShipped {
    pub order_id: u64,
}

impl Notification for OrderShipped {}

pub struct OrderRecordingHandler {
    pub id: usize,
    pub order: Arc<Mutex<Vec<usize>>>,
    pub delay: Option<Duration>,
}

impl OrderRecordingHandler {
    pub fn new(id: usize, order: Arc<Mutex<Vec<usize>>>) -> Self {
        Self {
            id,
            order,
            delay: None,
        }
    }

    pub fn delayed(id: usize, order: Arc<Mutex<Vec<usize>>>, delay: Duration) -> Self {
        Self {
            id,
            order,
            delay: Some(delay),
        }
    }
}

impl NotificationHandler<OrderShipped> for OrderRecordingHandler {
    async fn handle(
        &self,
        _notification: &OrderShipped,
        _cancel: &CancellationToken,
    ) -> Result<(), BoxError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.order.lock().unwrap().push(self.id);
        Ok(())
    }
}
