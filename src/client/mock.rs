use super::{ClientRequest, ClientResponse, Transport};
use crate::error::{ClientError, Result};
use http::header::{HeaderMap, HeaderValue, LOCATION, SET_COOKIE};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Replays canned responses in order and records every request it sees.
#[derive(Default)]
pub(crate) struct MockTransport {
    script: Mutex<VecDeque<Result<ClientResponse>>>,
    seen: Mutex<Vec<ClientRequest>>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(self, response: ClientResponse) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back(Ok(response));
        self
    }

    pub(crate) fn fail(self, message: &str) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back(Err(ClientError::RequestFailed(message.to_string()).into()));
        self
    }

    pub(crate) fn requests(&self) -> Vec<ClientRequest> {
        self.seen.lock().unwrap().clone()
    }

    pub(crate) fn remaining(&self) -> usize {
        self.script.lock().unwrap().len()
    }
}

impl Transport for MockTransport {
    async fn execute(&self, request: ClientRequest) -> Result<ClientResponse> {
        let url = request.url.clone();
        self.seen.lock().unwrap().push(request);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(ClientError::RequestFailed(format!("unscripted request to {}", url)).into())
            })
    }
}

pub(crate) fn page(status: u16, content: &str) -> ClientResponse {
    ClientResponse {
        status,
        headers: HeaderMap::new(),
        content: content.to_string(),
    }
}

pub(crate) fn with_cookies(mut response: ClientResponse, cookies: &[&str]) -> ClientResponse {
    for cookie in cookies {
        response
            .headers
            .append(SET_COOKIE, HeaderValue::from_str(cookie).unwrap());
    }
    response
}

pub(crate) fn redirect(location: &str) -> ClientResponse {
    let mut response = page(302, "");
    response
        .headers
        .insert(LOCATION, HeaderValue::from_str(location).unwrap());
    response
}
