use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use brewlog_auth::token::TokenValidator;

use crate::infra::analyzer::OpenAiAnalyzer;
use crate::infra::db::{
    DbCoffeeRepository, DbFlavorTagRepository, DbRoasterRepository, DbTastingRepository,
};
use crate::metrics::HttpMetrics;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub validator: TokenValidator,
    pub metrics: HttpMetrics,
    /// `None` when no analyzer API key is configured.
    pub analyzer: Option<OpenAiAnalyzer>,
    /// Deployment environment label, surfaced by `GET /health`.
    pub environment: String,
}

impl AppState {
    pub fn roaster_repo(&self) -> DbRoasterRepository {
        DbRoasterRepository {
            db: self.db.clone(),
        }
    }

    pub fn coffee_repo(&self) -> DbCoffeeRepository {
        DbCoffeeRepository {
            db: self.db.clone(),
        }
    }

    pub fn flavor_tag_repo(&self) -> DbFlavorTagRepository {
        DbFlavorTagRepository {
            db: self.db.clone(),
        }
    }

    pub fn tasting_repo(&self) -> DbTastingRepository {
        DbTastingRepository {
            db: self.db.clone(),
        }
    }
}

impl FromRef<AppState> for TokenValidator {
    fn from_ref(state: &AppState) -> Self {
        state.validator.clone()
    }
}

impl FromRef<AppState> for HttpMetrics {
    fn from_ref(state: &AppState) -> Self {
        state.metrics.clone()
    }
}
