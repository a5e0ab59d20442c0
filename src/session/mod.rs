mod auth;
mod cookies;

pub use auth::{Authenticator, LoginState};
pub use cookies::CookieJar;

use crate::client::{ClientRequest, ClientResponse, Redirects, Transport};
use crate::error::{ClientError, Result};
use crate::log_debug;
use http::header::COOKIE;
use std::fmt;
use url::Url;

pub const LOGIN_PATH: &str = "HomeAccess/Account/LogOn";
pub const WEEK_VIEW_PATH: &str = "HomeAccess/Home/WeekView";

/// Who to log in as, and where. `base_url` always ends with `/`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    base_url: String,
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        let mut base_url = base_url.into();
        Url::parse(&base_url).map_err(|e| {
            ClientError::InvalidUrl(format!("Invalid base URL {}: {}", base_url, e))
        })?;
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Ok(Self {
            base_url,
            username: username.into(),
            password: password.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub(crate) fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// State for one login-then-fetch exchange. Built per call and dropped with it.
#[derive(Debug)]
pub struct Session {
    jar: CookieJar,
    credentials: Credentials,
}

impl Session {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            jar: CookieJar::new(),
            credentials,
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn cookies(&self) -> &CookieJar {
        &self.jar
    }

    /// Absolute URL of a portal path such as `HomeAccess/Home/WeekView`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.credentials.base_url, path.trim_start_matches('/'))
    }

    /// Sends `request` with the jar's cookies and keeps whatever the
    /// response sets, whatever its status.
    pub async fn send<T: Transport>(
        &mut self,
        transport: &T,
        request: ClientRequest,
    ) -> Result<ClientResponse> {
        let request = if self.jar.is_empty() {
            request
        } else {
            request.header(COOKIE, self.jar.serialize())
        };

        let response = transport.execute(request).await?;
        self.jar.merge(response.set_cookies());
        Ok(response)
    }

    /// GETs a portal page after login. Error statuses become `ClientError`.
    pub async fn fetch<T: Transport>(&mut self, transport: &T, path: &str) -> Result<String> {
        let url = self.url(path);
        log_debug!("[session] GET {}", url);

        let response = self
            .send(transport, ClientRequest::get(&url).redirects(Redirects::Follow))
            .await?;

        if response.status >= 400 {
            return Err(ClientError::ResponseError {
                status_code: response.status,
                url,
            }
            .into());
        }

        Ok(response.content)
    }
}
