use hyper::StatusCode;
use std::{
    error::Error as StdError,
    fmt::{Display, Formatter, Result as FmtResult},
};

#[derive(Debug)]
pub enum ErrorKind {
    EmptyProductId,
    BuildingRequest,
    Sending,
    ChunkingResponse,
    Timeout,
    Response { status: StatusCode, bytes: Vec<u8> },
    Deserialize,
}

#[derive(Debug)]
pub struct GumroadError {
    pub(super) source: Option<Box<dyn StdError + Send + Sync>>,
    pub(super) kind: ErrorKind,
}

#[derive(Debug)]
pub struct DeserializeBodyError {
    pub(super) source: Option<Box<dyn StdError + Send + Sync>>,
    pub(super) bytes: Vec<u8>,
}

impl GumroadError {
    pub(crate) fn new(kind: ErrorKind) -> Self {
        Self { source: None, kind }
    }

    pub(crate) fn with_source(
        kind: ErrorKind,
        source: impl Into<Box<dyn StdError + Send + Sync>>,
    ) -> Self {
        Self {
            source: Some(source.into()),
            kind,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    #[must_use]
    pub fn into_source(self) -> Option<Box<dyn StdError + Send + Sync>> {
        self.source
    }

    #[must_use]
    pub fn into_parts(self) -> (ErrorKind, Option<Box<dyn StdError + Send + Sync>>) {
        (self.kind, self.source)
    }
}

impl Display for GumroadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.kind() {
            ErrorKind::EmptyProductId => write!(f, "product id must not be empty"),
            ErrorKind::BuildingRequest => write!(f, "failed to build the request"),
            ErrorKind::Sending => write!(f, "sending the request failed"),
            ErrorKind::ChunkingResponse => write!(f, "chunking the response failed"),
            ErrorKind::Timeout => write!(f, "the request timed out"),
            ErrorKind::Response { status, bytes: _ } => {
                write!(f, "license verification failed with {status}")
            }
            ErrorKind::Deserialize => write!(f, "error deserializing"),
        }
    }
}

impl StdError for GumroadError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|source| &**source as &(dyn StdError + 'static))
    }
}

impl Display for DeserializeBodyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let display = String::from_utf8_lossy(&self.bytes);
        write!(f, "bytes: {display}")
    }
}

impl StdError for DeserializeBodyError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|source| &**source as &(dyn StdError + 'static))
    }
}

/// Why a well-formed verification response was still refused.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Rejection {
    Unsuccessful,
    MissingPurchase,
    KeyMismatch,
    MissingRefundStatus,
    Refunded,
    Disputed,
}

impl Display for Rejection {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Rejection::Unsuccessful => write!(f, "service reported no success"),
            Rejection::MissingPurchase => write!(f, "no purchase in response"),
            Rejection::KeyMismatch => write!(f, "purchase is for a different license key"),
            Rejection::MissingRefundStatus => write!(f, "purchase has no refund status"),
            Rejection::Refunded => write!(f, "purchase was refunded"),
            Rejection::Disputed => write!(f, "purchase is disputed or charged back"),
        }
    }
}
