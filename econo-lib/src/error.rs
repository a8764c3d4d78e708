use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use econo_repo::category_repo::CategoryRepoError;
use econo_repo::entry_repo::EntryRepoError;
use econo_repo::entry_tag_repo::EntryTagRepoError;
use econo_repo::tag_repo::TagRepoError;
use econo_repo::user_repo::UserRepoError;
use thiserror::Error;
use tracing::error;

/// Taxonomy of handler failures: absent rows map to 404, a uniqueness
/// violation and an empty update payload both map to 400, everything else is
/// a 500 with the detail kept out of the response body.
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("Nothing to update")]
    EmptyUpdate,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<UserRepoError> for HandlerError {
    fn from(e: UserRepoError) -> Self {
        match e {
            UserRepoError::UserNotFound(_) => HandlerError::NotFound(e.to_string()),
            UserRepoError::DuplicateEmail(_) => HandlerError::Conflict(e.to_string()),
            UserRepoError::Other(e) => HandlerError::Internal(e),
        }
    }
}

impl From<CategoryRepoError> for HandlerError {
    fn from(e: CategoryRepoError) -> Self {
        match e {
            CategoryRepoError::CategoryNotFound(_) => HandlerError::NotFound(e.to_string()),
            CategoryRepoError::Other(e) => HandlerError::Internal(e),
        }
    }
}

impl From<EntryRepoError> for HandlerError {
    fn from(e: EntryRepoError) -> Self {
        match e {
            EntryRepoError::EntryNotFound(_) => HandlerError::NotFound(e.to_string()),
            EntryRepoError::Other(e) => HandlerError::Internal(e),
        }
    }
}

impl From<TagRepoError> for HandlerError {
    fn from(e: TagRepoError) -> Self {
        match e {
            TagRepoError::TagNotFound(_) => HandlerError::NotFound(e.to_string()),
            TagRepoError::Other(e) => HandlerError::Internal(e),
        }
    }
}

impl From<EntryTagRepoError> for HandlerError {
    fn from(e: EntryTagRepoError) -> Self {
        match e {
            EntryTagRepoError::LinkNotFound(_, _) => HandlerError::NotFound(e.to_string()),
            EntryTagRepoError::Other(e) => HandlerError::Internal(e),
        }
    }
}

impl ResponseError for HandlerError {
    fn status_code(&self) -> StatusCode {
        match self {
            HandlerError::NotFound(_) => StatusCode::NOT_FOUND,
            HandlerError::Conflict(_) | HandlerError::EmptyUpdate => StatusCode::BAD_REQUEST,
            HandlerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        if let HandlerError::Internal(e) = self {
            error!("Error handling request: {:#}", e);
            return HttpResponse::InternalServerError()
                .json(serde_json::json!({ "error": "Internal server error" }));
        }
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "error": self.to_string() }))
    }
}
