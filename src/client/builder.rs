use super::Client;
use crate::config::PortalConfig;
use crate::error::{ClientError, Result};
use http::{
    header::{HeaderMap, HeaderName},
    HeaderValue,
};
use rquest::{redirect::Policy, Client as RquestClient, Impersonate};
use std::str::FromStr;
use std::time::Duration;

pub struct ClientBuilder {
    timeout: Duration,
    max_redirects: usize,
    chrome_impersonation: bool,
    headers: HeaderMap,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            max_redirects: 5,
            chrome_impersonation: false,
            headers: HeaderMap::new(),
        }
    }
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies the timeout, redirect limit and user agent from `[portal]`.
    pub fn portal(self, config: &PortalConfig) -> Result<Self> {
        self.timeout(config.timeout())
            .max_redirects(config.max_redirects)
            .header("user-agent", &config.user_agent)
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// `0` means redirects are never followed, even when a request asks for it.
    pub fn max_redirects(mut self, max_redirects: usize) -> Self {
        self.max_redirects = max_redirects;
        self
    }

    pub fn chrome_impersonation(mut self, enabled: bool) -> Self {
        self.chrome_impersonation = enabled;
        self
    }

    pub fn header<K, V>(mut self, key: K, value: V) -> Result<Self>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let header_name = HeaderName::from_str(key.as_ref())
            .map_err(|e| ClientError::BuildError(format!("Invalid header name: {}", e)))?;

        let header_value = HeaderValue::from_str(value.as_ref())
            .map_err(|e| ClientError::BuildError(format!("Invalid header value: {}", e)))?;

        self.headers.insert(header_name, header_value);
        Ok(self)
    }

    pub fn build(self) -> Result<Client> {
        let follow_policy = if self.max_redirects == 0 {
            Policy::none()
        } else {
            Policy::limited(self.max_redirects)
        };

        let direct = self.build_inner(Policy::none())?;
        let following = self.build_inner(follow_policy)?;

        Ok(Client { direct, following })
    }

    fn build_inner(&self, policy: Policy) -> Result<RquestClient> {
        let mut client_builder = RquestClient::builder()
            .redirect(policy)
            .timeout(self.timeout);

        if self.chrome_impersonation {
            client_builder = client_builder.impersonate(Impersonate::Chrome131);
        }

        let mut inner = client_builder
            .build()
            .map_err(|e| ClientError::BuildError(format!("Failed to build client: {}", e)))?;

        *inner.as_mut().headers() = self.headers.clone();

        Ok(inner)
    }
}
