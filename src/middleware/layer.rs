//! Validator layer and service

use std::fmt;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::body::{Body, Bytes, HttpBody};
use axum::extract::Request;
use axum::http::{header, HeaderMap};
use axum::response::Response;
use futures_util::future::BoxFuture;
use tower::{Layer, Service};

use crate::config::MiddlewareConfig;
use crate::engine::{validate, Outcome, Violation};
use crate::rules::{RuleResult, RuleSet};

use super::response::ErrorReply;

/// State shared by every service a layer produces
struct Shared {
    name: String,
    rules: RuleSet,
    reply: ErrorReply,
    max_body_bytes: Option<usize>,
}

impl Shared {
    /// Buffers and validates the body. On success returns the request with
    /// its body replaced by the buffered bytes.
    async fn inspect(&self, req: Request) -> Result<Request, Violation> {
        let (parts, body) = req.into_parts();

        if is_absent(&parts.headers, &body) {
            return Err(Violation::MissingBody);
        }

        let bytes = self.buffer(body).await?;

        match validate(Some(&bytes), &self.rules) {
            Outcome::Pass => {
                tracing::trace!(middleware = %self.name, len = bytes.len(), "request body accepted");
                Ok(Request::from_parts(parts, Body::from(bytes)))
            }
            Outcome::Fail(violation) => Err(violation),
        }
    }

    async fn buffer(&self, body: Body) -> Result<Bytes, Violation> {
        let limit = self.max_body_bytes.unwrap_or(usize::MAX);
        axum::body::to_bytes(body, limit).await.map_err(|err| {
            tracing::warn!(middleware = %self.name, error = %err, "failed to read request body");
            Violation::UnreadableBody
        })
    }

    fn reject(&self, violation: &Violation) -> Response {
        tracing::debug!(
            middleware = %self.name,
            status = self.reply.status().as_u16(),
            field = violation.field(),
            error = %violation,
            "request body rejected"
        );
        self.reply.render(violation)
    }
}

/// A request has no body when the stream is already finished and no framing
/// header announces one. `Content-Length: 0` is an empty body, not a missing one.
fn is_absent(headers: &HeaderMap, body: &Body) -> bool {
    body.is_end_stream()
        && !headers.contains_key(header::CONTENT_LENGTH)
        && !headers.contains_key(header::TRANSFER_ENCODING)
}

/// Layer that applies [`JsonBodyValidator`].
#[derive(Clone)]
pub struct JsonBodyValidatorLayer {
    shared: Arc<Shared>,
}

impl JsonBodyValidatorLayer {
    /// Compiles `config` into a layer.
    ///
    /// # Errors
    ///
    /// Returns `RuleError` if the rule list is empty, a rule has no field,
    /// a pattern is invalid, or the response status is not a valid code.
    pub fn new(config: MiddlewareConfig) -> RuleResult<Self> {
        let rules = RuleSet::compile(&config.rules, config.evaluation)?;
        let reply = ErrorReply::from_config(&config.response)?;

        tracing::info!(
            middleware = %config.name,
            rules = rules.len(),
            status = reply.status().as_u16(),
            "validator constructed"
        );

        Ok(Self {
            shared: Arc::new(Shared {
                name: config.name,
                rules,
                reply,
                max_body_bytes: config.max_body_bytes,
            }),
        })
    }

    pub fn name(&self) -> &str {
        &self.shared.name
    }

    /// The compiled rules
    pub fn rules(&self) -> &RuleSet {
        &self.shared.rules
    }

    /// Resolved error response settings
    pub fn reply(&self) -> &ErrorReply {
        &self.shared.reply
    }
}

impl fmt::Debug for JsonBodyValidatorLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonBodyValidatorLayer")
            .field("name", &self.shared.name)
            .field("rules", &self.shared.rules.len())
            .finish()
    }
}

impl<S> Layer<S> for JsonBodyValidatorLayer {
    type Service = JsonBodyValidator<S>;

    fn layer(&self, inner: S) -> Self::Service {
        JsonBodyValidator {
            inner,
            shared: self.shared.clone(),
        }
    }
}

/// Middleware that validates JSON request bodies.
///
/// Valid requests reach the inner service with a body that replays the
/// original bytes. Invalid requests are answered with a JSON error and never
/// reach the inner service.
#[derive(Clone)]
pub struct JsonBodyValidator<S> {
    inner: S,
    shared: Arc<Shared>,
}

impl<S: fmt::Debug> fmt::Debug for JsonBodyValidator<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonBodyValidator")
            .field("inner", &self.inner)
            .field("name", &self.shared.name)
            .finish()
    }
}

impl<S> Service<Request> for JsonBodyValidator<S>
where
    S: Service<Request, Response = Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = Response;
    type Error = S::Error;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        // Keep the instance that was driven to readiness.
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);
        let shared = self.shared.clone();

        Box::pin(async move {
            match shared.inspect(req).await {
                Ok(req) => inner.call(req).await,
                Err(violation) => Ok(shared.reject(&violation)),
            }
        })
    }
}
