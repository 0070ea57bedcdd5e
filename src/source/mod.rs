//! Upstream collaborator delivering the full user collection.

use thiserror::Error;

use crate::domain::user::UserRecord;

pub mod http;

/// Status reported to the viewer when the upstream could not be reached or
/// answered with something that is not a user list.
pub const GENERIC_FAILURE_STATUS: u16 = 500;
pub const SUCCESS_STATUS: u16 = 200;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("upstream responded with status {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid users payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Status code shown in the error banner.
    pub fn status_code(&self) -> u16 {
        match self {
            FetchError::Status(status) => *status,
            FetchError::Transport(_) | FetchError::Decode(_) => GENERIC_FAILURE_STATUS,
        }
    }
}

pub type FetchResult<T> = Result<T, FetchError>;

/// Source of the user collection rendered by the index page.
#[allow(async_fn_in_trait)]
pub trait UserSource {
    async fn fetch_users(&self) -> FetchResult<Vec<UserRecord>>;
}

/// Outcome of one fetch: a status code and the records that came with it.
///
/// Errors never escape this type; a failed fetch carries its status code and
/// an empty collection.
#[derive(Debug, PartialEq, Eq)]
pub struct UsersFetch {
    pub status_code: u16,
    pub users: Vec<UserRecord>,
}

impl UsersFetch {
    pub fn from_result(result: FetchResult<Vec<UserRecord>>) -> Self {
        match result {
            Ok(users) => Self {
                status_code: SUCCESS_STATUS,
                users,
            },
            Err(err) => {
                log::error!("Failed to fetch users: {err}");
                Self {
                    status_code: err.status_code(),
                    users: Vec::new(),
                }
            }
        }
    }

    pub fn is_success(&self) -> bool {
        self.status_code == SUCCESS_STATUS
    }
}
