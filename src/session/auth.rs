use super::{Session, LOGIN_PATH};
use crate::client::{ClientRequest, ClientResponse, Redirects, Transport};
use crate::error::{AppError, AuthError, Result};
use crate::extract::Extractor;
use crate::log_debug;
use http::header::{CONTENT_TYPE, REFERER};
use url::{form_urlencoded, Url};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Steps of the portal's login handshake.
#[derive(Debug)]
pub enum LoginState {
    Start,
    TokenFetched { token: String },
    CredentialsSubmitted { response: ClientResponse },
    Authenticated,
    Failed(AppError),
}

impl LoginState {
    fn name(&self) -> &'static str {
        match self {
            LoginState::Start => "start",
            LoginState::TokenFetched { .. } => "token fetched",
            LoginState::CredentialsSubmitted { .. } => "credentials submitted",
            LoginState::Authenticated => "authenticated",
            LoginState::Failed(_) => "failed",
        }
    }
}

/// Drives a fresh [`Session`] from `Start` to `Authenticated` or `Failed`.
pub struct Authenticator<'a, T> {
    transport: &'a T,
    session: &'a mut Session,
    database: &'a str,
}

impl<'a, T: Transport> Authenticator<'a, T> {
    pub fn new(transport: &'a T, session: &'a mut Session, database: &'a str) -> Self {
        Self {
            transport,
            session,
            database,
        }
    }

    /// Runs the whole handshake. On success the session's jar holds the
    /// authenticated cookies.
    pub async fn login(mut self) -> Result<()> {
        let mut state = LoginState::Start;
        loop {
            log_debug!("[auth] {}", state.name());
            state = match state {
                LoginState::Start => self.fetch_token().await,
                LoginState::TokenFetched { token } => self.submit_credentials(&token).await,
                LoginState::CredentialsSubmitted { response } => {
                    self.follow_redirect(response).await
                }
                LoginState::Authenticated => return Ok(()),
                LoginState::Failed(err) => return Err(err),
            }
            .unwrap_or_else(LoginState::Failed);
        }
    }

    fn login_url(&self) -> String {
        self.session.url(LOGIN_PATH)
    }

    async fn fetch_token(&mut self) -> Result<LoginState> {
        let request = ClientRequest::get(self.login_url());
        let response = self.session.send(self.transport, request).await?;
        reject_error_status(&response)?;

        let token = Extractor::new(&response.content)
            .verification_token()
            .ok_or(AuthError::TokenMissing)?;

        Ok(LoginState::TokenFetched { token })
    }

    async fn submit_credentials(&mut self, token: &str) -> Result<LoginState> {
        let credentials = self.session.credentials();
        let body = form_urlencoded::Serializer::new(String::new())
            .append_pair("__RequestVerificationToken", token)
            .append_pair("Database", self.database)
            .append_pair("VerificationOption", "UsernamePassword")
            .append_pair("LogOnDetails.UserName", credentials.username())
            .append_pair("LogOnDetails.Password", credentials.password())
            .append_pair("tempUN", "")
            .append_pair("tempPW", "")
            .finish();

        let login_url = self.login_url();
        let request = ClientRequest::post(&login_url, body)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .header(REFERER, &login_url)
            .redirects(Redirects::Never);

        let response = self.session.send(self.transport, request).await?;
        reject_error_status(&response)?;

        Ok(LoginState::CredentialsSubmitted { response })
    }

    async fn follow_redirect(&mut self, response: ClientResponse) -> Result<LoginState> {
        if !response.is_redirect() {
            return Ok(LoginState::Authenticated);
        }

        let location = response.location().ok_or_else(|| {
            AuthError::InvalidRedirect(format!("status {} without Location", response.status))
        })?;
        let target = self.resolve_location(location)?;
        log_debug!("[auth] Following login redirect to {}", target);

        let request = ClientRequest::get(target)
            .header(REFERER, self.login_url())
            .redirects(Redirects::Follow);
        let response = self.session.send(self.transport, request).await?;
        reject_error_status(&response)?;

        Ok(LoginState::Authenticated)
    }

    fn resolve_location(&self, location: &str) -> Result<String> {
        if location.starts_with("http") {
            return Ok(location.to_string());
        }

        let base_url = self.session.credentials().base_url();
        if location.starts_with('/') {
            return Ok(format!("{}{}", base_url.trim_end_matches('/'), location));
        }

        Url::parse(&self.login_url())
            .and_then(|login| login.join(location))
            .map(String::from)
            .map_err(|e| AuthError::InvalidRedirect(format!("{}: {}", location, e)).into())
    }
}

fn reject_error_status(response: &ClientResponse) -> Result<()> {
    if response.status >= 400 {
        return Err(AuthError::Rejected {
            status: response.status,
        }
        .into());
    }
    Ok(())
}
