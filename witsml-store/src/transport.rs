//! Transport layer abstraction.
//!
//! The five STORE operations the client needs, independent of how they
//! reach the server (SOAP over HTTP in production, a queue in tests).

use std::fmt;
use thiserror::Error;
use witsml_types::ObjectType;

/// Raw outcome of a store call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreReply {
    /// Response document (`XMLout`). Empty when the server sent none.
    pub xml: String,
    pub status: StoreStatus,
}

impl StoreReply {
    /// A successful reply carrying `xml`.
    pub fn ok(xml: impl Into<String>) -> Self {
        Self {
            xml: xml.into(),
            status: StoreStatus::new(1, None),
        }
    }

    /// A failed reply with a server code and optional message.
    pub fn failed(code: i32, message: Option<&str>) -> Self {
        Self {
            xml: String::new(),
            status: StoreStatus::new(code, message.map(str::to_string)),
        }
    }
}

/// Status code plus the optional supplemental message (`SuppMsgOut`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreStatus {
    pub code: i32,
    pub message: Option<String>,
}

impl StoreStatus {
    pub fn new(code: i32, message: Option<String>) -> Self {
        Self { code, message }
    }

    /// Positive codes are success; zero and negative codes are errors.
    pub fn is_success(&self) -> bool {
        self.code > 0
    }
}

impl fmt::Display for StoreStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{} ({})", self.code, message),
            None => write!(f, "{}", self.code),
        }
    }
}

/// Failures below the protocol: connection, TLS, timeouts, SOAP faults.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),

    #[error("operation timed out")]
    Timeout,

    #[error("SOAP fault: {0}")]
    Fault(String),

    #[error("no reply queued for {0}")]
    Exhausted(&'static str),
}

pub type TransportResult<T> = Result<T, TransportError>;

/// A STORE endpoint. Implementations own connection handling and timeouts.
pub trait StoreTransport: Send + Sync {
    /// Comma separated list of data schema versions (`WMLS_GetVersion`).
    fn get_version(&self) -> TransportResult<String>;

    /// Human readable text for a status code (`WMLS_GetBaseMsg`).
    fn get_status_message(&self, code: i32) -> TransportResult<String>;

    /// Capabilities document (`WMLS_GetCap`).
    fn get_capabilities(&self) -> TransportResult<StoreReply>;

    /// `WMLS_GetFromStore` for one object type.
    fn get_from_store(&self, object_type: ObjectType, query: &str) -> TransportResult<StoreReply>;

    /// `WMLS_DeleteFromStore` for one object type.
    fn delete_from_store(&self, object_type: ObjectType, query: &str)
        -> TransportResult<StoreStatus>;
}

/// A mock transport for testing.
pub mod mock {
    use super::*;
    use std::collections::{HashMap, VecDeque};
    use std::sync::{Arc, Mutex};

    /// One request seen by [`MockTransport`].
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RecordedRequest {
        pub operation: &'static str,
        pub object_type: Option<ObjectType>,
        pub query: String,
    }

    /// Replays queued replies and records every request.
    ///
    /// Clones share the same queues, so a test can keep a handle after
    /// moving the transport into a client.
    #[derive(Debug, Clone, Default)]
    pub struct MockTransport {
        version: Arc<Mutex<String>>,
        capabilities: Arc<Mutex<String>>,
        messages: Arc<Mutex<HashMap<i32, String>>>,
        replies: Arc<Mutex<VecDeque<TransportResult<StoreReply>>>>,
        deletes: Arc<Mutex<VecDeque<StoreStatus>>>,
        requests: Arc<Mutex<Vec<RecordedRequest>>>,
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn set_version(&self, versions: impl Into<String>) {
            *self.version.lock().unwrap() = versions.into();
        }

        pub fn set_capabilities(&self, xml: impl Into<String>) {
            *self.capabilities.lock().unwrap() = xml.into();
        }

        pub fn set_status_message(&self, code: i32, message: impl Into<String>) {
            self.messages.lock().unwrap().insert(code, message.into());
        }

        /// Queues the reply for the next `get_from_store`.
        pub fn queue_reply(&self, reply: StoreReply) {
            self.replies.lock().unwrap().push_back(Ok(reply));
        }

        /// Queues a transport failure for the next `get_from_store`.
        pub fn queue_failure(&self, error: TransportError) {
            self.replies.lock().unwrap().push_back(Err(error));
        }

        /// Queues the status for the next `delete_from_store`.
        pub fn queue_delete(&self, status: StoreStatus) {
            self.deletes.lock().unwrap().push_back(status);
        }

        /// Every request seen so far, oldest first.
        pub fn requests(&self) -> Vec<RecordedRequest> {
            self.requests.lock().unwrap().clone()
        }

        /// Query text of the most recent request.
        pub fn last_query(&self) -> Option<String> {
            self.requests.lock().unwrap().last().map(|r| r.query.clone())
        }

        fn record(&self, operation: &'static str, object_type: Option<ObjectType>, query: &str) {
            self.requests.lock().unwrap().push(RecordedRequest {
                operation,
                object_type,
                query: query.to_string(),
            });
        }
    }

    impl StoreTransport for MockTransport {
        fn get_version(&self) -> TransportResult<String> {
            self.record("GetVersion", None, "");
            Ok(self.version.lock().unwrap().clone())
        }

        fn get_status_message(&self, code: i32) -> TransportResult<String> {
            self.record("GetBaseMsg", None, &code.to_string());
            Ok(self
                .messages
                .lock()
                .unwrap()
                .get(&code)
                .cloned()
                .unwrap_or_default())
        }

        fn get_capabilities(&self) -> TransportResult<StoreReply> {
            self.record("GetCap", None, "");
            Ok(StoreReply::ok(self.capabilities.lock().unwrap().clone()))
        }

        fn get_from_store(&self, object_type: ObjectType, query: &str) -> TransportResult<StoreReply> {
            self.record("GetFromStore", Some(object_type), query);
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(TransportError::Exhausted("GetFromStore")))
        }

        fn delete_from_store(
            &self,
            object_type: ObjectType,
            query: &str,
        ) -> TransportResult<StoreStatus> {
            self.record("DeleteFromStore", Some(object_type), query);
            Ok(self
                .deletes
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| StoreStatus::new(1, None)))
        }
    }
}
