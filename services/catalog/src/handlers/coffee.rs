use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use brewlog_auth::Identity;
use brewlog_catalog_schema::enums::{ProcessingMethod, RoastLevel};
use brewlog_domain::pagination::PageQuery;

use crate::domain::types::{CoffeeWithTags, FlavorTag, NewCoffee};
use crate::error::CatalogError;
use crate::state::AppState;
use crate::usecase::coffee::{
    CreateCoffeeUseCase, DeleteCoffeeUseCase, GetCoffeeUseCase, ListCoffeesUseCase,
    RestoreCoffeeUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct FlavorTagResponse {
    pub id: Uuid,
    pub name: String,
    pub category: Option<String>,
}

impl From<FlavorTag> for FlavorTagResponse {
    fn from(tag: FlavorTag) -> Self {
        Self {
            id: tag.id,
            name: tag.name,
            category: tag.category,
        }
    }
}

#[derive(Serialize)]
pub struct CoffeeResponse {
    pub id: Uuid,
    pub name: String,
    pub roaster_id: Uuid,
    pub origin_country: Option<String>,
    pub origin_region: Option<String>,
    pub farm_name: Option<String>,
    pub producer: Option<String>,
    pub altitude: Option<String>,
    pub processing_method: Option<ProcessingMethod>,
    pub variety: Option<String>,
    pub roast_level: Option<RoastLevel>,
    pub roast_date: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub bag_size: Option<String>,
    pub flavor_tags: Vec<FlavorTagResponse>,
    #[serde(serialize_with = "brewlog_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "brewlog_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub created_by: Option<String>,
}

impl From<CoffeeWithTags> for CoffeeResponse {
    fn from(c: CoffeeWithTags) -> Self {
        let coffee = c.coffee;
        Self {
            id: coffee.id,
            name: coffee.name,
            roaster_id: coffee.roaster_id,
            origin_country: coffee.origin_country,
            origin_region: coffee.origin_region,
            farm_name: coffee.farm_name,
            producer: coffee.producer,
            altitude: coffee.altitude,
            processing_method: coffee.processing_method,
            variety: coffee.variety,
            roast_level: coffee.roast_level,
            roast_date: coffee.roast_date,
            description: coffee.description,
            price: coffee.price,
            bag_size: coffee.bag_size,
            flavor_tags: c.flavor_tags.into_iter().map(FlavorTagResponse::from).collect(),
            created_at: coffee.created_at,
            updated_at: coffee.updated_at,
            created_by: coffee.created_by,
        }
    }
}

#[derive(Serialize)]
pub struct CoffeeListResponse {
    pub items: Vec<CoffeeResponse>,
    pub total: u64,
    pub skip: u64,
    pub limit: u64,
}

// ── POST /coffees ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateCoffeeRequest {
    pub name: String,
    pub roaster_id: Uuid,
    pub origin_country: Option<String>,
    pub origin_region: Option<String>,
    pub farm_name: Option<String>,
    pub producer: Option<String>,
    pub altitude: Option<String>,
    pub processing_method: Option<ProcessingMethod>,
    pub variety: Option<String>,
    pub roast_level: Option<RoastLevel>,
    pub roast_date: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub bag_size: Option<String>,
    /// Flavor tag names, resolved case-insensitively via find-or-create.
    #[serde(default)]
    pub flavor_tags: Vec<String>,
}

pub async fn create_coffee(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<CreateCoffeeRequest>,
) -> Result<(StatusCode, Json<CoffeeResponse>), CatalogError> {
    let usecase = CreateCoffeeUseCase {
        coffees: state.coffee_repo(),
        roasters: state.roaster_repo(),
    };
    let coffee = usecase
        .execute(
            NewCoffee {
                name: body.name,
                roaster_id: body.roaster_id,
                origin_country: body.origin_country,
                origin_region: body.origin_region,
                farm_name: body.farm_name,
                producer: body.producer,
                altitude: body.altitude,
                processing_method: body.processing_method,
                variety: body.variety,
                roast_level: body.roast_level,
                roast_date: body.roast_date,
                description: body.description,
                price: body.price,
                bag_size: body.bag_size,
                flavor_tags: body.flavor_tags,
            },
            &identity.user_id,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(coffee.into())))
}

// ── GET /coffees ─────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct CoffeeListQuery {
    pub roaster_id: Option<Uuid>,
    pub search: Option<String>,
    pub origin_country: Option<String>,
    #[serde(default)]
    pub skip: u64,
    pub limit: Option<u64>,
}

pub async fn list_coffees(
    _identity: Identity,
    State(state): State<AppState>,
    Query(query): Query<CoffeeListQuery>,
) -> Result<Json<CoffeeListResponse>, CatalogError> {
    let page = PageQuery {
        skip: query.skip,
        limit: query.limit.unwrap_or(PageQuery::default().limit),
    }
    .clamped();
    let usecase = ListCoffeesUseCase {
        coffees: state.coffee_repo(),
    };
    let (coffees, total) = usecase
        .execute(
            query.roaster_id,
            query.search.as_deref(),
            query.origin_country.as_deref(),
            page,
        )
        .await?;
    Ok(Json(CoffeeListResponse {
        items: coffees.into_iter().map(CoffeeResponse::from).collect(),
        total,
        skip: page.skip,
        limit: page.limit,
    }))
}

// ── GET /coffees/{id} ────────────────────────────────────────────────────────

pub async fn get_coffee(
    _identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CoffeeResponse>, CatalogError> {
    let usecase = GetCoffeeUseCase {
        coffees: state.coffee_repo(),
    };
    let coffee = usecase.execute(id).await?;
    Ok(Json(coffee.into()))
}

// ── DELETE /coffees/{id} ─────────────────────────────────────────────────────

pub async fn delete_coffee(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, CatalogError> {
    let usecase = DeleteCoffeeUseCase {
        coffees: state.coffee_repo(),
    };
    usecase.execute(id, &identity.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── POST /coffees/{id}/restore ───────────────────────────────────────────────

pub async fn restore_coffee(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CoffeeResponse>, CatalogError> {
    let usecase = RestoreCoffeeUseCase {
        coffees: state.coffee_repo(),
    };
    let coffee = usecase.execute(id, &identity.user_id).await?;
    Ok(Json(coffee.into()))
}
