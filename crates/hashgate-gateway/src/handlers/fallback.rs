use crate::error::AppError;

/// Method fallback for routes that only accept `POST`.
pub async fn post_only() -> AppError {
    AppError::MethodNotAllowed("POST")
}

/// Method fallback for routes that only accept `GET`.
pub async fn get_only() -> AppError {
    AppError::MethodNotAllowed("GET")
}

pub async fn not_found() -> AppError {
    AppError::NotFound
}
