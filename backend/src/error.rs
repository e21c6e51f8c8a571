use rocket::http::Status;
use rocket::response::Responder;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Serialize)]
pub enum ApiError {
    #[error("Unknown candidate")]
    UnknownCandidate,
    #[error("Invalid category")]
    InvalidCategory,
    #[error("Internal error: {0}")]
    Internal(String),
}

impl<'r, 'o: 'r> Responder<'r, 'o> for ApiError {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        let status = match self {
            ApiError::UnknownCandidate => Status::BadRequest,
            ApiError::InvalidCategory => Status::BadRequest,
            ApiError::Internal(_) => Status::InternalServerError,
        };

        rocket::Response::build_from(self.to_string().respond_to(req)?)
            .status(status)
            .ok()
    }
}
