//! # Fake Channel
//!
//! **INTERNAL USE ONLY**: This crate exists solely to provide an in-process gRPC channel
//! for testing the `dialogflow-grpc` transports without a network.
//! It is not intended for production use.
//!
//! A [`FakeChannel`] is a `tower` service speaking just enough of the gRPC protocol for
//! unary calls:
//!
//! * every request is recorded with its path, headers and (unframed) message bytes;
//! * replies are canned per path with [`FakeChannel::respond_with`] or
//!   [`FakeChannel::fail_with`], and unknown paths answer `UNIMPLEMENTED`;
//! * every `clone()` of the channel is counted, which is how tests observe when a new
//!   client is created on top of it.
//!
//! Clones share their state, so a channel can be configured and inspected after it has
//! been handed to a transport.
use bytes::{BufMut, Bytes, BytesMut};
use futures_util::future::BoxFuture;
use http::{HeaderMap, HeaderValue, header::CONTENT_TYPE};
use http_body::Frame;
use http_body_util::{BodyExt, StreamBody};
use prost::Message;
use std::{
    collections::HashMap,
    convert::Infallible,
    sync::{
        Arc, Mutex, MutexGuard, PoisonError,
        atomic::{AtomicUsize, Ordering},
    },
    task::{Context, Poll},
};
use tonic::{Code, Status, body::Body, codegen::Service};

const GRPC_HEADER_LEN: usize = 5;

#[derive(Debug, Clone)]
enum Reply {
    Message(Bytes),
    Status(Code, String),
}

#[derive(Debug, Default)]
struct State {
    replies: Mutex<HashMap<String, Reply>>,
    requests: Mutex<Vec<RecordedRequest>>,
    clones: AtomicUsize,
}

/// A request seen by a [`FakeChannel`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub headers: HeaderMap,
    /// The encoded request message, without the gRPC frame header.
    pub message: Bytes,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    pub fn decode<M: Message + Default>(&self) -> Result<M, prost::DecodeError> {
        M::decode(self.message.clone())
    }
}

#[derive(Debug, Default)]
pub struct FakeChannel {
    state: Arc<State>,
}

impl Clone for FakeChannel {
    fn clone(&self) -> Self {
        self.state.clones.fetch_add(1, Ordering::SeqCst);
        Self {
            state: self.state.clone(),
        }
    }
}

impl FakeChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers every call to `path` with `message`.
    pub fn respond_with(&self, path: &str, message: &impl Message) {
        let reply = Reply::Message(message.encode_to_vec().into());
        lock(&self.state.replies).insert(path.to_string(), reply);
    }

    /// Fails every call to `path` with the given status.
    pub fn fail_with(&self, path: &str, code: Code, message: impl Into<String>) {
        let reply = Reply::Status(code, message.into());
        lock(&self.state.replies).insert(path.to_string(), reply);
    }

    /// How many times this channel, or any of its clones, has been cloned.
    pub fn clone_count(&self) -> usize {
        self.state.clones.load(Ordering::SeqCst)
    }

    /// Every request received so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        lock(&self.state.requests).clone()
    }

    /// Whether `other` is this channel or one of its clones.
    pub fn same_channel(&self, other: &FakeChannel) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }
}

impl Service<http::Request<Body>> for FakeChannel {
    type Response = http::Response<Body>;
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: http::Request<Body>) -> Self::Future {
        let state = self.state.clone();

        Box::pin(async move {
            let (parts, body) = request.into_parts();
            let path = parts.uri.path().to_string();

            let message = match body.collect().await {
                Ok(collected) => unframe(collected.to_bytes()),
                Err(status) => {
                    return Ok(status_response(
                        Code::Internal,
                        &format!("Failed to read request body: {}", status.message()),
                    ));
                }
            };

            lock(&state.requests).push(RecordedRequest {
                path: path.clone(),
                headers: parts.headers,
                message,
            });

            let reply = lock(&state.replies).get(&path).cloned();

            Ok(match reply {
                Some(Reply::Message(message)) => message_response(message),
                Some(Reply::Status(code, message)) => status_response(code, &message),
                None => status_response(Code::Unimplemented, &format!("Method not found: {path}")),
            })
        })
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn unframe(body: Bytes) -> Bytes {
    if body.len() < GRPC_HEADER_LEN {
        return Bytes::new();
    }
    body.slice(GRPC_HEADER_LEN..)
}

fn message_response(message: Bytes) -> http::Response<Body> {
    let mut framed = BytesMut::with_capacity(GRPC_HEADER_LEN + message.len());
    framed.put_u8(0);
    framed.put_u32(message.len() as u32);
    framed.put_slice(&message);

    let mut trailers = HeaderMap::new();
    trailers.insert("grpc-status", HeaderValue::from_static("0"));

    let frames: Vec<Result<Frame<Bytes>, Infallible>> = vec![
        Ok(Frame::data(framed.freeze())),
        Ok(Frame::trailers(trailers)),
    ];
    let body = StreamBody::new(futures_util::stream::iter(frames));

    let mut response = http::Response::new(Body::new(body));
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/grpc"));
    response
}

// Trailers-only response: the status travels in the headers and the body is empty.
fn status_response(code: Code, message: &str) -> http::Response<Body> {
    let mut response = http::Response::new(Body::empty());
    let headers = response.headers_mut();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/grpc"));

    if Status::new(code, message).add_header(headers).is_err() {
        headers.insert("grpc-status", HeaderValue::from(code as i32));
    }
    response
}
