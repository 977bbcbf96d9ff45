use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use brewlog_auth::Identity;
use brewlog_catalog_schema::enums::{BrewMethod, GrindSize};
use brewlog_domain::pagination::PageQuery;
use brewlog_domain::patch::Patch;

use crate::domain::types::{
    NewTastingNote, NewTastingSession, TastingDetail, TastingNoteDetail, TastingSession,
    TastingSessionPatch,
};
use crate::error::CatalogError;
use crate::state::AppState;
use crate::usecase::tasting::{
    CreateTastingUseCase, DeleteTastingUseCase, GetTastingUseCase, ListTastingsUseCase,
    UpdateTastingUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct TastingNoteResponse {
    pub id: Uuid,
    pub flavor_tag_id: Uuid,
    pub flavor_tag: String,
    pub intensity: Option<i32>,
    pub notes: Option<String>,
    pub aroma: bool,
    pub flavor: bool,
    pub aftertaste: bool,
}

impl From<TastingNoteDetail> for TastingNoteResponse {
    fn from(detail: TastingNoteDetail) -> Self {
        Self {
            id: detail.note.id,
            flavor_tag_id: detail.flavor_tag.id,
            flavor_tag: detail.flavor_tag.name,
            intensity: detail.note.intensity,
            notes: detail.note.notes,
            aroma: detail.note.aroma,
            flavor: detail.note.flavor,
            aftertaste: detail.note.aftertaste,
        }
    }
}

#[derive(Serialize)]
pub struct TastingResponse {
    pub id: Uuid,
    pub coffee_id: Uuid,
    /// Absent when the tasted coffee has since been soft-deleted.
    pub coffee_name: Option<String>,
    pub roaster_name: Option<String>,
    pub brew_method: BrewMethod,
    pub grind_size: Option<GrindSize>,
    pub coffee_dose: Option<Decimal>,
    pub water_amount: Option<Decimal>,
    pub water_temperature: Option<i32>,
    pub brew_time: Option<String>,
    pub grinder: Option<String>,
    pub brewing_device: Option<String>,
    pub filter_type: Option<String>,
    pub session_notes: Option<String>,
    pub overall_rating: Option<i32>,
    pub would_buy_again: Option<bool>,
    pub notes: Vec<TastingNoteResponse>,
    #[serde(serialize_with = "brewlog_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "brewlog_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<TastingDetail> for TastingResponse {
    fn from(detail: TastingDetail) -> Self {
        let session = detail.session;
        Self {
            id: session.id,
            coffee_id: session.coffee_id,
            coffee_name: detail.coffee.map(|c| c.name),
            roaster_name: detail.roaster_name,
            brew_method: session.brew_method,
            grind_size: session.grind_size,
            coffee_dose: session.coffee_dose,
            water_amount: session.water_amount,
            water_temperature: session.water_temperature,
            brew_time: session.brew_time,
            grinder: session.grinder,
            brewing_device: session.brewing_device,
            filter_type: session.filter_type,
            session_notes: session.session_notes,
            overall_rating: session.overall_rating,
            would_buy_again: session.would_buy_again,
            notes: detail.notes.into_iter().map(TastingNoteResponse::from).collect(),
            created_at: session.created_at,
            updated_at: session.updated_at,
        }
    }
}

/// Bare session, for the update response where notes are untouched.
#[derive(Serialize)]
pub struct TastingSessionResponse {
    pub id: Uuid,
    pub coffee_id: Uuid,
    pub brew_method: BrewMethod,
    pub grind_size: Option<GrindSize>,
    pub coffee_dose: Option<Decimal>,
    pub water_amount: Option<Decimal>,
    pub water_temperature: Option<i32>,
    pub brew_time: Option<String>,
    pub grinder: Option<String>,
    pub brewing_device: Option<String>,
    pub filter_type: Option<String>,
    pub session_notes: Option<String>,
    pub overall_rating: Option<i32>,
    pub would_buy_again: Option<bool>,
    #[serde(serialize_with = "brewlog_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<TastingSession> for TastingSessionResponse {
    fn from(session: TastingSession) -> Self {
        Self {
            id: session.id,
            coffee_id: session.coffee_id,
            brew_method: session.brew_method,
            grind_size: session.grind_size,
            coffee_dose: session.coffee_dose,
            water_amount: session.water_amount,
            water_temperature: session.water_temperature,
            brew_time: session.brew_time,
            grinder: session.grinder,
            brewing_device: session.brewing_device,
            filter_type: session.filter_type,
            session_notes: session.session_notes,
            overall_rating: session.overall_rating,
            would_buy_again: session.would_buy_again,
            updated_at: session.updated_at,
        }
    }
}

#[derive(Serialize)]
pub struct TastingListResponse {
    pub items: Vec<TastingResponse>,
    pub total: u64,
    pub skip: u64,
    pub limit: u64,
}

// ── GET /tastings ────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct TastingListQuery {
    #[serde(default)]
    pub skip: u64,
    pub limit: Option<u64>,
}

pub async fn list_tastings(
    identity: Identity,
    State(state): State<AppState>,
    Query(query): Query<TastingListQuery>,
) -> Result<Json<TastingListResponse>, CatalogError> {
    let page = PageQuery {
        skip: query.skip,
        limit: query.limit.unwrap_or(PageQuery::default().limit),
    }
    .clamped();
    let usecase = ListTastingsUseCase {
        tastings: state.tasting_repo(),
    };
    let (tastings, total) = usecase.execute(&identity.user_id, page).await?;
    Ok(Json(TastingListResponse {
        items: tastings.into_iter().map(TastingResponse::from).collect(),
        total,
        skip: page.skip,
        limit: page.limit,
    }))
}

// ── POST /tastings ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateTastingNoteRequest {
    pub flavor_tag: String,
    pub intensity: Option<i32>,
    pub notes: Option<String>,
    #[serde(default)]
    pub aroma: bool,
    #[serde(default)]
    pub flavor: bool,
    #[serde(default)]
    pub aftertaste: bool,
}

#[derive(Deserialize)]
pub struct CreateTastingRequest {
    pub coffee_id: Uuid,
    pub brew_method: BrewMethod,
    pub grind_size: Option<GrindSize>,
    pub coffee_dose: Option<Decimal>,
    pub water_amount: Option<Decimal>,
    pub water_temperature: Option<i32>,
    pub brew_time: Option<String>,
    pub grinder: Option<String>,
    pub brewing_device: Option<String>,
    pub filter_type: Option<String>,
    pub session_notes: Option<String>,
    pub overall_rating: Option<i32>,
    pub would_buy_again: Option<bool>,
    #[serde(default)]
    pub notes: Vec<CreateTastingNoteRequest>,
}

pub async fn create_tasting(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<CreateTastingRequest>,
) -> Result<(StatusCode, Json<TastingResponse>), CatalogError> {
    let usecase = CreateTastingUseCase {
        tastings: state.tasting_repo(),
        coffees: state.coffee_repo(),
    };
    let tasting = usecase
        .execute(
            &identity.user_id,
            NewTastingSession {
                coffee_id: body.coffee_id,
                brew_method: body.brew_method,
                grind_size: body.grind_size,
                coffee_dose: body.coffee_dose,
                water_amount: body.water_amount,
                water_temperature: body.water_temperature,
                brew_time: body.brew_time,
                grinder: body.grinder,
                brewing_device: body.brewing_device,
                filter_type: body.filter_type,
                session_notes: body.session_notes,
                overall_rating: body.overall_rating,
                would_buy_again: body.would_buy_again,
                notes: body
                    .notes
                    .into_iter()
                    .map(|n| NewTastingNote {
                        flavor_tag: n.flavor_tag,
                        intensity: n.intensity,
                        notes: n.notes,
                        aroma: n.aroma,
                        flavor: n.flavor,
                        aftertaste: n.aftertaste,
                    })
                    .collect(),
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(tasting.into())))
}

// ── GET /tastings/{id} ───────────────────────────────────────────────────────

pub async fn get_tasting(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TastingResponse>, CatalogError> {
    let usecase = GetTastingUseCase {
        tastings: state.tasting_repo(),
    };
    let tasting = usecase.execute(id, &identity.user_id).await?;
    Ok(Json(tasting.into()))
}

// ── PUT /tastings/{id} ───────────────────────────────────────────────────────

/// Partial update: an absent key keeps the stored value, an explicit `null`
/// clears it. `brew_method` is non-nullable so `null` there is rejected by
/// deserialization.
#[derive(Deserialize, Default)]
pub struct UpdateTastingRequest {
    pub brew_method: Option<BrewMethod>,
    #[serde(default)]
    pub grind_size: Patch<GrindSize>,
    #[serde(default)]
    pub coffee_dose: Patch<Decimal>,
    #[serde(default)]
    pub water_amount: Patch<Decimal>,
    #[serde(default)]
    pub water_temperature: Patch<i32>,
    #[serde(default)]
    pub brew_time: Patch<String>,
    #[serde(default)]
    pub grinder: Patch<String>,
    #[serde(default)]
    pub brewing_device: Patch<String>,
    #[serde(default)]
    pub filter_type: Patch<String>,
    #[serde(default)]
    pub session_notes: Patch<String>,
    #[serde(default)]
    pub overall_rating: Patch<i32>,
    #[serde(default)]
    pub would_buy_again: Patch<bool>,
}

pub async fn update_tasting(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateTastingRequest>,
) -> Result<Json<TastingSessionResponse>, CatalogError> {
    let usecase = UpdateTastingUseCase {
        tastings: state.tasting_repo(),
    };
    let session = usecase
        .execute(
            id,
            &identity.user_id,
            TastingSessionPatch {
                brew_method: body.brew_method,
                grind_size: body.grind_size,
                coffee_dose: body.coffee_dose,
                water_amount: body.water_amount,
                water_temperature: body.water_temperature,
                brew_time: body.brew_time,
                grinder: body.grinder,
                brewing_device: body.brewing_device,
                filter_type: body.filter_type,
                session_notes: body.session_notes,
                overall_rating: body.overall_rating,
                would_buy_again: body.would_buy_again,
            },
        )
        .await?;
    Ok(Json(session.into()))
}

// ── DELETE /tastings/{id} ────────────────────────────────────────────────────

pub async fn delete_tasting(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, CatalogError> {
    let usecase = DeleteTastingUseCase {
        tastings: state.tasting_repo(),
    };
    usecase.execute(id, &identity.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
