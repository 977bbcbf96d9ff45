use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use brewlog_auth::Identity;
use brewlog_domain::pagination::PageQuery;

use crate::domain::types::{NewRoaster, Roaster};
use crate::error::CatalogError;
use crate::state::AppState;
use crate::usecase::roaster::{CreateRoasterUseCase, GetRoasterUseCase, ListRoastersUseCase};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct RoasterResponse {
    pub id: Uuid,
    pub name: String,
    pub location: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    #[serde(serialize_with = "brewlog_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "brewlog_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub created_by: Option<String>,
}

impl From<Roaster> for RoasterResponse {
    fn from(roaster: Roaster) -> Self {
        Self {
            id: roaster.id,
            name: roaster.name,
            location: roaster.location,
            website: roaster.website,
            description: roaster.description,
            created_at: roaster.created_at,
            updated_at: roaster.updated_at,
            created_by: roaster.created_by,
        }
    }
}

#[derive(Serialize)]
pub struct RoasterListResponse {
    pub items: Vec<RoasterResponse>,
    pub total: u64,
    pub skip: u64,
    pub limit: u64,
}

// ── POST /roasters ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateRoasterRequest {
    pub name: String,
    pub location: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
}

pub async fn create_roaster(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<CreateRoasterRequest>,
) -> Result<(StatusCode, Json<RoasterResponse>), CatalogError> {
    let usecase = CreateRoasterUseCase {
        repo: state.roaster_repo(),
    };
    let roaster = usecase
        .execute(
            NewRoaster {
                name: body.name,
                location: body.location,
                website: body.website,
                description: body.description,
            },
            &identity.user_id,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(roaster.into())))
}

// ── GET /roasters ────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct RoasterListQuery {
    pub search: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub skip: u64,
    pub limit: Option<u64>,
}

pub async fn list_roasters(
    _identity: Identity,
    State(state): State<AppState>,
    Query(query): Query<RoasterListQuery>,
) -> Result<Json<RoasterListResponse>, CatalogError> {
    let page = PageQuery {
        skip: query.skip,
        limit: query.limit.unwrap_or(PageQuery::default().limit),
    }
    .clamped();
    let usecase = ListRoastersUseCase {
        repo: state.roaster_repo(),
    };
    let (roasters, total) = usecase
        .execute(query.search.as_deref(), query.location.as_deref(), page)
        .await?;
    Ok(Json(RoasterListResponse {
        items: roasters.into_iter().map(RoasterResponse::from).collect(),
        total,
        skip: page.skip,
        limit: page.limit,
    }))
}

// ── GET /roasters/{id} ───────────────────────────────────────────────────────

pub async fn get_roaster(
    _identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RoasterResponse>, CatalogError> {
    let usecase = GetRoasterUseCase {
        repo: state.roaster_repo(),
    };
    let roaster = usecase.execute(id).await?;
    Ok(Json(roaster.into()))
}
