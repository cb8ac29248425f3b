use http_body_util::{BodyExt, Full};
use hyper::{body::Bytes, Request as HyperRequest, StatusCode};
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client as HyperClient},
    rt::TokioExecutor,
};
use std::future::Future;

use crate::error::{ErrorKind, GumroadError};

pub struct Response {
    pub status: StatusCode,
    pub bytes: Bytes,
}

/// Sends a built request and hands back the status and the collected body.
pub trait Transport: Send + Sync {
    fn send(
        &self,
        request: HyperRequest<Full<Bytes>>,
    ) -> impl Future<Output = Result<Response, GumroadError>> + Send;
}

#[derive(Clone)]
pub struct HttpsTransport {
    client: HyperClient<HttpsConnector<HttpConnector>, Full<Bytes>>,
}

impl HttpsTransport {
    #[must_use]
    pub fn new() -> Self {
        let connector = HttpsConnectorBuilder::new()
            .with_webpki_roots()
            .https_or_http()
            .enable_http1()
            .enable_http2()
            .build();
        let client = HyperClient::builder(TokioExecutor::new()).build(connector);
        Self { client }
    }
}

impl Default for HttpsTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpsTransport {
    async fn send(&self, request: HyperRequest<Full<Bytes>>) -> Result<Response, GumroadError> {
        let res = self
            .client
            .request(request)
            .await
            .map_err(|source| GumroadError::with_source(ErrorKind::Sending, source))?;
        let status = res.status();

        let bytes = res
            .into_body()
            .collect()
            .await
            .map_err(|source| GumroadError::with_source(ErrorKind::ChunkingResponse, source))?
            .to_bytes();

        Ok(Response { status, bytes })
    }
}
