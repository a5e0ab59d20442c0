use crate::cache::{CacheKey, ResultCache};
use crate::client::Transport;
use crate::config::PortalConfig;
use crate::error::{AppError, Result, ScraperError};
use crate::extract::Extractor;
use crate::models::{CourseDetail, CourseSummary, FailureKind, Outcome, StudentIdentity};
use crate::session::{Authenticator, Credentials, Session, WEEK_VIEW_PATH};
use crate::{log_error, log_info, log_warn};
use serde::{de::DeserializeOwned, Serialize};
use tracing::instrument;

const LOGIN_FAILED: &str = "Login failed";
const CLASS_NOT_FOUND: &str = "Class not found";

fn assignments_path(section_key: &str, marking_period: u32) -> String {
    format!(
        "HomeAccess/Content/Student/AssignmentsFromRCPopUp.aspx?section_key={}&course_session=1&RC_RUN={}&MARK_TITLE=MP&MARK_TYPE=MP&SLOT_INDEX=1",
        section_key, marking_period
    )
}

/// Reads one student's data from the portal.
///
/// Build one per request. Every operation logs in from scratch on its own
/// [`Session`], so nothing authenticated outlives the call. The transport and
/// an optional [`ResultCache`] are the only things that may be shared.
pub struct Scraper<T> {
    transport: T,
    config: PortalConfig,
    credentials: Credentials,
    cache: Option<ResultCache>,
}

impl<T: Transport> Scraper<T> {
    pub fn new(transport: T, config: PortalConfig, credentials: Credentials) -> Self {
        Self {
            transport,
            config,
            credentials,
            cache: None,
        }
    }

    pub fn with_cache(mut self, cache: ResultCache) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    #[instrument(skip(self), fields(user = %self.credentials.username()))]
    pub async fn fetch_identity(&self) -> Outcome<StudentIdentity> {
        let key = CacheKey::new("identity", &self.credentials, Vec::<String>::new());
        if let Some(identity) = self.cached(&key).await {
            return Outcome::ok(identity);
        }

        match self.identity().await {
            Ok(identity) => {
                log_info!("[portal] Student name: {}", identity.name);
                self.store(key, identity).await
            }
            Err(e) => failure(&e, StudentIdentity::default()),
        }
    }

    #[instrument(skip(self), fields(user = %self.credentials.username()))]
    pub async fn fetch_course_summaries(&self) -> Outcome<Vec<CourseSummary>> {
        let key = CacheKey::new("courses", &self.credentials, Vec::<String>::new());
        if let Some(courses) = self.cached(&key).await {
            return Outcome::ok(courses);
        }

        match self.course_summaries().await {
            Ok(courses) => {
                log_info!("[portal] Found {} classes", courses.len());
                self.store(key, courses).await
            }
            Err(e) => failure(&e, Vec::new()),
        }
    }

    /// Assignments and categories for the class whose listing name matches
    /// `class_name`, ignoring whitespace differences.
    #[instrument(skip(self), fields(user = %self.credentials.username()))]
    pub async fn fetch_course_detail(
        &self,
        class_name: &str,
        marking_period: u32,
    ) -> Outcome<CourseDetail> {
        let key = CacheKey::new(
            "detail",
            &self.credentials,
            [class_name.to_string(), marking_period.to_string()],
        );
        if let Some(detail) = self.cached(&key).await {
            return Outcome::ok(detail);
        }

        match self.course_detail(class_name, marking_period).await {
            Ok(detail) => {
                log_info!(
                    "[portal] {}: {} assignments, {} categories",
                    detail.class_name,
                    detail.assignments.len(),
                    detail.categories.len()
                );
                self.store(key, detail).await
            }
            Err(e) => {
                let mut detail = CourseDetail::not_found(class_name, marking_period);
                detail.error = Some(failure_message(&e));
                failure(&e, detail)
            }
        }
    }

    /// Same as [`fetch_course_detail`](Self::fetch_course_detail) for the
    /// configured default marking period.
    pub async fn fetch_current_course_detail(&self, class_name: &str) -> Outcome<CourseDetail> {
        self.fetch_course_detail(class_name, self.config.marking_period)
            .await
    }

    async fn login(&self) -> Result<Session> {
        let mut session = Session::new(self.credentials.clone());
        Authenticator::new(&self.transport, &mut session, &self.config.database)
            .login()
            .await?;
        Ok(session)
    }

    async fn identity(&self) -> Result<StudentIdentity> {
        let mut session = self.login().await?;
        let page = session.fetch(&self.transport, WEEK_VIEW_PATH).await?;
        Ok(Extractor::new(&page).identity())
    }

    async fn course_summaries(&self) -> Result<Vec<CourseSummary>> {
        let mut session = self.login().await?;
        let page = session.fetch(&self.transport, WEEK_VIEW_PATH).await?;
        Ok(Extractor::new(&page).listing().courses())
    }

    async fn course_detail(&self, class_name: &str, marking_period: u32) -> Result<CourseDetail> {
        let mut session = self.login().await?;
        let listing = session.fetch(&self.transport, WEEK_VIEW_PATH).await?;

        let link = Extractor::new(&listing)
            .listing()
            .course_link(class_name)
            .ok_or_else(|| ScraperError::ClassNotFound(class_name.to_string()))?;
        log_info!("[portal] Section key for {:?}: {}", class_name, link.section_key);

        let page = session
            .fetch(&self.transport, &assignments_path(&link.section_key, marking_period))
            .await?;

        Ok(Extractor::new(&page)
            .detail()
            .course_detail(class_name, &link.teacher_name, marking_period))
    }

    async fn cached<V: DeserializeOwned>(&self, key: &CacheKey) -> Option<V> {
        self.cache.as_ref()?.get(key).await
    }

    async fn store<V: Serialize>(&self, key: CacheKey, value: V) -> Outcome<V> {
        if let Some(cache) = &self.cache {
            if let Err(e) = cache.insert(key, &value).await {
                log_warn!("[portal] Could not cache result: {}", e);
            }
        }
        Outcome::ok(value)
    }
}

fn failure_kind(error: &AppError) -> FailureKind {
    match error {
        AppError::Auth(_) => FailureKind::Authentication,
        AppError::Scraper(ScraperError::ClassNotFound(_)) => FailureKind::Correlation,
        _ => FailureKind::Transport,
    }
}

fn failure_message(error: &AppError) -> String {
    match failure_kind(error) {
        FailureKind::Authentication => LOGIN_FAILED.to_string(),
        FailureKind::Correlation => CLASS_NOT_FOUND.to_string(),
        FailureKind::Transport => error.to_string(),
    }
}

fn failure<V>(error: &AppError, data: V) -> Outcome<V> {
    log_error!(error => "[portal] Operation failed");
    Outcome::failed(failure_kind(error), failure_message(error), data)
}
