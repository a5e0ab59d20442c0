mod builder;
#[cfg(test)]
pub(crate) mod mock;

use crate::error::{ClientError, Result};
pub use builder::ClientBuilder;
use http::header::{HeaderMap, HeaderName, SET_COOKIE};
use http::Method;
use rquest::Client as RquestClient;
use std::future::Future;

/// Whether the transport may chase 3xx responses on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirects {
    Never,
    Follow,
}

#[derive(Debug, Clone)]
pub struct ClientRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(HeaderName, String)>,
    pub body: Option<String>,
    pub redirects: Redirects,
}

impl ClientRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            url: url.into(),
            headers: Vec::new(),
            body: None,
            redirects: Redirects::Follow,
        }
    }

    pub fn post(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            method: Method::POST,
            url: url.into(),
            headers: Vec::new(),
            body: Some(body.into()),
            redirects: Redirects::Follow,
        }
    }

    pub fn header(mut self, name: HeaderName, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    pub fn redirects(mut self, redirects: Redirects) -> Self {
        self.redirects = redirects;
        self
    }

    pub fn header_value(&self, name: &HeaderName) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// A response as the portal sent it. Non-2xx statuses are not errors here.
#[derive(Debug, Clone, Default)]
pub struct ClientResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub content: String,
}

impl ClientResponse {
    pub fn set_cookies(&self) -> Vec<&str> {
        self.headers
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .collect()
    }

    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(http::header::LOCATION)
            .and_then(|value| value.to_str().ok())
    }

    pub fn is_redirect(&self) -> bool {
        (300..400).contains(&self.status)
    }
}

/// Anything that can carry a request to the portal and bring back its answer.
pub trait Transport {
    fn execute(
        &self,
        request: ClientRequest,
    ) -> impl Future<Output = Result<ClientResponse>> + Send;
}

impl<T: Transport> Transport for &T {
    fn execute(
        &self,
        request: ClientRequest,
    ) -> impl Future<Output = Result<ClientResponse>> + Send {
        (**self).execute(request)
    }
}

/// rquest-backed transport. Holds one client that never follows redirects
/// and one that follows up to the configured limit.
#[derive(Clone)]
pub struct Client {
    direct: RquestClient,
    following: RquestClient,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    fn inner(&self, redirects: Redirects) -> &RquestClient {
        match redirects {
            Redirects::Never => &self.direct,
            Redirects::Follow => &self.following,
        }
    }
}

impl Transport for Client {
    async fn execute(&self, request: ClientRequest) -> Result<ClientResponse> {
        let mut builder = self
            .inner(request.redirects)
            .request(request.method.clone(), request.url.as_str());

        for (name, value) in request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            ClientError::RequestFailed(format!("{} {}: {}", request.method, request.url, e))
        })?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let content = response.text().await.map_err(|e| {
            ClientError::RequestFailed(format!("Failed to get response text: {}", e))
        })?;

        Ok(ClientResponse {
            status,
            headers,
            content,
        })
    }
}
