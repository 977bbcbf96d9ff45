use axum::{Json, extract::State};
use serde::Serialize;

use brewlog_auth::Identity;

use crate::domain::types::{PreferenceAnalysis, TasteProfile};
use crate::error::CatalogError;
use crate::state::AppState;
use crate::usecase::recommendation::{AnalyzePreferencesUseCase, GetTasteProfileUseCase};

// ── GET /recommendations/preferences ─────────────────────────────────────────

#[derive(Serialize)]
pub struct TasteProfileResponse {
    pub total_tastings: u64,
    pub average_rating: Option<f64>,
    pub most_common_flavors: Vec<FlavorCount>,
    pub preferred_brew_methods: Vec<FlavorCount>,
}

#[derive(Serialize)]
pub struct FlavorCount {
    pub name: String,
    pub count: u64,
}

impl From<TasteProfile> for TasteProfileResponse {
    fn from(profile: TasteProfile) -> Self {
        let counts = |pairs: Vec<(String, u64)>| {
            pairs
                .into_iter()
                .map(|(name, count)| FlavorCount { name, count })
                .collect()
        };
        Self {
            total_tastings: profile.total_tastings,
            average_rating: profile.average_rating,
            most_common_flavors: counts(profile.most_common_flavors),
            preferred_brew_methods: counts(profile.preferred_brew_methods),
        }
    }
}

pub async fn get_taste_profile(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<TasteProfileResponse>, CatalogError> {
    let usecase = GetTasteProfileUseCase {
        tastings: state.tasting_repo(),
    };
    let profile = usecase.execute(&identity.user_id).await?;
    Ok(Json(profile.into()))
}

// ── GET /recommendations/analysis ────────────────────────────────────────────

#[derive(Serialize)]
pub struct PreferenceAnalysisResponse {
    pub user_id: String,
    pub total_tastings: u64,
    pub flavor_analysis: String,
}

impl From<PreferenceAnalysis> for PreferenceAnalysisResponse {
    fn from(analysis: PreferenceAnalysis) -> Self {
        Self {
            user_id: analysis.user_id,
            total_tastings: analysis.total_tastings,
            flavor_analysis: analysis.flavor_analysis,
        }
    }
}

pub async fn analyze_preferences(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<PreferenceAnalysisResponse>, CatalogError> {
    let analyzer = state
        .analyzer
        .clone()
        .ok_or(CatalogError::AnalyzerNotConfigured)?;
    let usecase = AnalyzePreferencesUseCase {
        tastings: state.tasting_repo(),
        analyzer,
    };
    let analysis = usecase.execute(&identity.user_id).await?;
    Ok(Json(analysis.into()))
}
