use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Catalog service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("roaster not found")]
    RoasterNotFound,
    #[error("coffee not found")]
    CoffeeNotFound,
    #[error("tasting session not found")]
    TastingNotFound,
    #[error("roaster already exists")]
    RoasterAlreadyExists,
    #[error("coffee already exists for this roaster")]
    CoffeeAlreadyExists,
    #[error("access denied")]
    Forbidden,
    #[error("{0}")]
    Validation(String),
    #[error("recommendation service not configured")]
    AnalyzerNotConfigured,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl CatalogError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::RoasterNotFound => "ROASTER_NOT_FOUND",
            Self::CoffeeNotFound => "COFFEE_NOT_FOUND",
            Self::TastingNotFound => "TASTING_NOT_FOUND",
            Self::RoasterAlreadyExists => "ROASTER_ALREADY_EXISTS",
            Self::CoffeeAlreadyExists => "COFFEE_ALREADY_EXISTS",
            Self::Forbidden => "FORBIDDEN",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::AnalyzerNotConfigured => "ANALYZER_NOT_CONFIGURED",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::RoasterNotFound | Self::CoffeeNotFound | Self::TastingNotFound => {
                StatusCode::NOT_FOUND
            }
            Self::RoasterAlreadyExists | Self::CoffeeAlreadyExists => StatusCode::BAD_REQUEST,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::AnalyzerNotConfigured | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        // Internals never leak their message to the client.
        let message = match &self {
            Self::Internal(_) => "internal error".to_owned(),
            other => other.to_string(),
        };
        let body = serde_json::json!({
            "error": {
                "type": self.kind(),
                "message": message,
                "status_code": status.as_u16(),
            }
        });
        (status, axum::Json(body)).into_response()
    }
}
