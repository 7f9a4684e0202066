use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SiteError {
    #[error("invalid hex colour {0:?}")]
    InvalidColor(String),

    #[error("sitemap site url must not be empty")]
    EmptySiteUrl,

    #[error("sitemap priority {priority} for {path} is outside 0.0..=1.0")]
    InvalidPriority { path: String, priority: f64 },
}

pub type Result<T> = std::result::Result<T, SiteError>;
