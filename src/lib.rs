//! Session-and-extraction engine for Home Access Center student portals.
//!
//! A [`Scraper`] logs in with a fresh [`Session`] for every operation, reads
//! the server-rendered pages and hands back an [`Outcome`] that is either the
//! extracted data or a tagged failure carrying empty data.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod logging;
pub mod models;
pub mod portal;
pub mod session;
pub mod utils;

pub use cache::{CacheKey, ResultCache};
pub use client::{Client, ClientRequest, ClientResponse, Redirects, Transport};
pub use config::Config;
pub use error::{AppError, Result};
pub use models::{
    Assignment, AssignmentCategory, CourseDetail, CourseSummary, FailureKind, Outcome,
    StudentIdentity,
};
pub use portal::Scraper;
pub use session::{Credentials, Session};
