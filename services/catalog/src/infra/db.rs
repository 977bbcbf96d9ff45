use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, ConnectionTrait,
    DatabaseConnection, DbErr, EntityTrait, ModelTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Select, SqlErr, TransactionTrait,
    sea_query::{Expr, Func, extension::postgres::PgExpr},
};
use uuid::Uuid;

use brewlog_core::audited;
use brewlog_domain::pagination::PageQuery;
use brewlog_catalog_schema::{
    coffee_flavors, coffees, flavor_tags, roasters, tasting_notes, tasting_sessions,
};

use crate::domain::repository::{
    CoffeeRepository, FlavorTagRepository, RoasterRepository, TastingRepository,
};
use crate::domain::types::{
    Coffee, CoffeeWithTags, FlavorTag, NewCoffee, NewRoaster, NewTastingSession, Roaster,
    TastingDetail, TastingNote, TastingNoteDetail, TastingSession, TastingSessionPatch,
};
use crate::error::CatalogError;

// ── Roaster repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRoasterRepository {
    pub db: DatabaseConnection,
}

fn roaster_filtered(search: Option<&str>, location: Option<&str>) -> Select<roasters::Entity> {
    let mut select = audited::live::<roasters::Entity>();
    if let Some(search) = search {
        select = select.filter(Expr::col(roasters::Column::Name).ilike(format!("%{search}%")));
    }
    if let Some(location) = location {
        select =
            select.filter(Expr::col(roasters::Column::Location).ilike(format!("%{location}%")));
    }
    select
}

impl RoasterRepository for DbRoasterRepository {
    async fn get(&self, id: Uuid) -> Result<Option<Roaster>, CatalogError> {
        let model = audited::get::<roasters::Entity, _>(&self.db, id, false)
            .await
            .context("get roaster")?;
        Ok(model.map(roaster_from_model))
    }

    async fn list(
        &self,
        search: Option<&str>,
        location: Option<&str>,
        page: PageQuery,
    ) -> Result<Vec<Roaster>, CatalogError> {
        let page = page.clamped();
        let models = roaster_filtered(search, location)
            .order_by_asc(roasters::Column::CreatedAt)
            .offset(page.skip)
            .limit(page.limit)
            .all(&self.db)
            .await
            .context("list roasters")?;
        Ok(models.into_iter().map(roaster_from_model).collect())
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Roaster>, CatalogError> {
        let model = audited::live::<roasters::Entity>()
            .filter(roasters::Column::Name.eq(name))
            .one(&self.db)
            .await
            .context("get roaster by name")?;
        Ok(model.map(roaster_from_model))
    }

    async fn create(&self, roaster: &NewRoaster, actor: &str) -> Result<Roaster, CatalogError> {
        let now = Utc::now();
        let model = roasters::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(roaster.name.clone()),
            location: Set(roaster.location.clone()),
            website: Set(roaster.website.clone()),
            description: Set(roaster.description.clone()),
            created_at: Set(now),
            updated_at: Set(now),
            created_by: Set(Some(actor.to_owned())),
            updated_by: Set(Some(actor.to_owned())),
            deleted_by: Set(None),
            deleted_at: Set(None),
        }
        .insert(&self.db)
        .await
        .context("create roaster")?;
        Ok(roaster_from_model(model))
    }

    async fn count(
        &self,
        search: Option<&str>,
        location: Option<&str>,
    ) -> Result<u64, CatalogError> {
        let total = roaster_filtered(search, location)
            .count(&self.db)
            .await
            .context("count roasters")?;
        Ok(total)
    }
}

fn roaster_from_model(model: roasters::Model) -> Roaster {
    Roaster {
        id: model.id,
        name: model.name,
        location: model.location,
        website: model.website,
        description: model.description,
        created_at: model.created_at,
        updated_at: model.updated_at,
        created_by: model.created_by,
        updated_by: model.updated_by,
    }
}

// ── Flavor tag repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbFlavorTagRepository {
    pub db: DatabaseConnection,
}

/// Case-insensitive lookup among live tags.
async fn lookup_tag<C: ConnectionTrait>(
    conn: &C,
    name: &str,
) -> Result<Option<flavor_tags::Model>, DbErr> {
    audited::live::<flavor_tags::Entity>()
        .filter(
            Expr::expr(Func::lower(Expr::col(flavor_tags::Column::Name)))
                .eq(name.to_lowercase()),
        )
        .one(conn)
        .await
}

/// Find-or-create a tag by name, composable inside a larger transaction.
/// An insert lost to a concurrent writer is retried as a lookup, so the
/// call is idempotent under races.
async fn find_or_create_tag<C: ConnectionTrait>(
    conn: &C,
    name: &str,
    actor: &str,
) -> Result<flavor_tags::Model, DbErr> {
    let name = name.trim();
    if let Some(existing) = lookup_tag(conn, name).await? {
        return Ok(existing);
    }
    let now = Utc::now();
    let insert = flavor_tags::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_owned()),
        category: Set(None),
        description: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
        created_by: Set(Some(actor.to_owned())),
        updated_by: Set(Some(actor.to_owned())),
        deleted_by: Set(None),
        deleted_at: Set(None),
    }
    .insert(conn)
    .await;
    match insert {
        Ok(model) => Ok(model),
        Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            lookup_tag(conn, name).await?.ok_or(e)
        }
        Err(e) => Err(e),
    }
}

/// Batch find-or-create preserving input order; trims, skips blanks, and
/// dedupes case-insensitively.
async fn find_or_create_tags<C: ConnectionTrait>(
    conn: &C,
    names: &[String],
    actor: &str,
) -> Result<Vec<flavor_tags::Model>, DbErr> {
    let mut seen: Vec<String> = Vec::new();
    let mut out = Vec::new();
    for name in names {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            continue;
        }
        let lower = trimmed.to_lowercase();
        if seen.contains(&lower) {
            continue;
        }
        seen.push(lower);
        out.push(find_or_create_tag(conn, trimmed, actor).await?);
    }
    Ok(out)
}

impl FlavorTagRepository for DbFlavorTagRepository {
    async fn get_by_name(&self, name: &str) -> Result<Option<FlavorTag>, CatalogError> {
        let model = lookup_tag(&self.db, name.trim())
            .await
            .context("get flavor tag by name")?;
        Ok(model.map(flavor_tag_from_model))
    }

    async fn find_or_create_by_name(
        &self,
        name: &str,
        actor: &str,
    ) -> Result<FlavorTag, CatalogError> {
        let model = find_or_create_tag(&self.db, name, actor)
            .await
            .context("find or create flavor tag")?;
        Ok(flavor_tag_from_model(model))
    }

    async fn find_or_create_multiple(
        &self,
        names: &[String],
        actor: &str,
    ) -> Result<Vec<FlavorTag>, CatalogError> {
        let models = find_or_create_tags(&self.db, names, actor)
            .await
            .context("find or create flavor tags")?;
        Ok(models.into_iter().map(flavor_tag_from_model).collect())
    }

    async fn search(&self, query: &str, page: PageQuery) -> Result<Vec<FlavorTag>, CatalogError> {
        let page = page.clamped();
        let pattern = format!("%{query}%");
        let models = audited::live::<flavor_tags::Entity>()
            .filter(
                Condition::any()
                    .add(Expr::col(flavor_tags::Column::Name).ilike(pattern.clone()))
                    .add(Expr::col(flavor_tags::Column::Category).ilike(pattern)),
            )
            .order_by_asc(flavor_tags::Column::Name)
            .offset(page.skip)
            .limit(page.limit)
            .all(&self.db)
            .await
            .context("search flavor tags")?;
        Ok(models.into_iter().map(flavor_tag_from_model).collect())
    }
}

fn flavor_tag_from_model(model: flavor_tags::Model) -> FlavorTag {
    FlavorTag {
        id: model.id,
        name: model.name,
        category: model.category,
        description: model.description,
    }
}

// ── Coffee repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCoffeeRepository {
    pub db: DatabaseConnection,
}

fn coffee_filtered(
    roaster_id: Option<Uuid>,
    search: Option<&str>,
    origin_country: Option<&str>,
) -> Select<coffees::Entity> {
    let mut select = audited::live::<coffees::Entity>();
    if let Some(roaster_id) = roaster_id {
        select = select.filter(coffees::Column::RoasterId.eq(roaster_id));
    }
    if let Some(search) = search {
        select = select.filter(Expr::col(coffees::Column::Name).ilike(format!("%{search}%")));
    }
    if let Some(country) = origin_country {
        select = select
            .filter(Expr::col(coffees::Column::OriginCountry).ilike(format!("%{country}%")));
    }
    select
}

async fn coffee_tags<C: ConnectionTrait>(
    conn: &C,
    model: &coffees::Model,
) -> Result<Vec<flavor_tags::Model>, DbErr> {
    model.find_related(flavor_tags::Entity).all(conn).await
}

impl CoffeeRepository for DbCoffeeRepository {
    async fn get(&self, id: Uuid) -> Result<Option<CoffeeWithTags>, CatalogError> {
        let Some(model) = audited::get::<coffees::Entity, _>(&self.db, id, false)
            .await
            .context("get coffee")?
        else {
            return Ok(None);
        };
        let tags = coffee_tags(&self.db, &model)
            .await
            .context("load coffee flavor tags")?;
        Ok(Some(coffee_with_tags(model, tags)))
    }

    async fn get_by_name_and_roaster(
        &self,
        name: &str,
        roaster_id: Uuid,
    ) -> Result<Option<Coffee>, CatalogError> {
        let model = audited::live::<coffees::Entity>()
            .filter(coffees::Column::Name.eq(name))
            .filter(coffees::Column::RoasterId.eq(roaster_id))
            .one(&self.db)
            .await
            .context("get coffee by name and roaster")?;
        Ok(model.map(coffee_from_model))
    }

    async fn create_with_flavor_tags(
        &self,
        coffee: &NewCoffee,
        actor: &str,
    ) -> Result<CoffeeWithTags, CatalogError> {
        let coffee = coffee.clone();
        let actor = actor.to_owned();
        let (model, tags) = self
            .db
            .transaction::<_, (coffees::Model, Vec<flavor_tags::Model>), DbErr>(|txn| {
                Box::pin(async move {
                    let now = Utc::now();
                    let model = coffees::ActiveModel {
                        id: Set(Uuid::new_v4()),
                        name: Set(coffee.name.clone()),
                        roaster_id: Set(coffee.roaster_id),
                        origin_country: Set(coffee.origin_country.clone()),
                        origin_region: Set(coffee.origin_region.clone()),
                        farm_name: Set(coffee.farm_name.clone()),
                        producer: Set(coffee.producer.clone()),
                        altitude: Set(coffee.altitude.clone()),
                        processing_method: Set(coffee.processing_method),
                        variety: Set(coffee.variety.clone()),
                        roast_level: Set(coffee.roast_level),
                        roast_date: Set(coffee.roast_date.clone()),
                        description: Set(coffee.description.clone()),
                        price: Set(coffee.price),
                        bag_size: Set(coffee.bag_size.clone()),
                        created_at: Set(now),
                        updated_at: Set(now),
                        created_by: Set(Some(actor.clone())),
                        updated_by: Set(Some(actor.clone())),
                        deleted_by: Set(None),
                        deleted_at: Set(None),
                    }
                    .insert(txn)
                    .await?;

                    let tags = find_or_create_tags(txn, &coffee.flavor_tags, &actor).await?;
                    for tag in &tags {
                        coffee_flavors::ActiveModel {
                            coffee_id: Set(model.id),
                            flavor_tag_id: Set(tag.id),
                        }
                        .insert(txn)
                        .await?;
                    }
                    Ok((model, tags))
                })
            })
            .await
            .context("create coffee with flavor tags")?;
        Ok(coffee_with_tags(model, tags))
    }

    async fn list(
        &self,
        roaster_id: Option<Uuid>,
        search: Option<&str>,
        origin_country: Option<&str>,
        page: PageQuery,
    ) -> Result<Vec<CoffeeWithTags>, CatalogError> {
        let page = page.clamped();
        let models = coffee_filtered(roaster_id, search, origin_country)
            .order_by_asc(coffees::Column::CreatedAt)
            .offset(page.skip)
            .limit(page.limit)
            .all(&self.db)
            .await
            .context("list coffees")?;
        let mut out = Vec::with_capacity(models.len());
        for model in models {
            let tags = coffee_tags(&self.db, &model)
                .await
                .context("load coffee flavor tags")?;
            out.push(coffee_with_tags(model, tags));
        }
        Ok(out)
    }

    async fn soft_delete(&self, id: Uuid, actor: &str) -> Result<bool, CatalogError> {
        let affected = audited::soft_delete::<coffees::Entity, _>(&self.db, id, actor)
            .await
            .context("soft delete coffee")?;
        Ok(affected > 0)
    }

    async fn get_any(&self, id: Uuid) -> Result<Option<Coffee>, CatalogError> {
        let model = audited::get::<coffees::Entity, _>(&self.db, id, true)
            .await
            .context("get coffee including deleted")?;
        Ok(model.map(coffee_from_model))
    }

    async fn restore(&self, id: Uuid, actor: &str) -> Result<bool, CatalogError> {
        let affected = audited::restore::<coffees::Entity, _>(&self.db, id, actor)
            .await
            .context("restore coffee")?;
        Ok(affected > 0)
    }

    async fn count(
        &self,
        roaster_id: Option<Uuid>,
        search: Option<&str>,
        origin_country: Option<&str>,
    ) -> Result<u64, CatalogError> {
        let total = coffee_filtered(roaster_id, search, origin_country)
            .count(&self.db)
            .await
            .context("count coffees")?;
        Ok(total)
    }
}

fn coffee_from_model(model: coffees::Model) -> Coffee {
    Coffee {
        id: model.id,
        name: model.name,
        roaster_id: model.roaster_id,
        origin_country: model.origin_country,
        origin_region: model.origin_region,
        farm_name: model.farm_name,
        producer: model.producer,
        altitude: model.altitude,
        processing_method: model.processing_method,
        variety: model.variety,
        roast_level: model.roast_level,
        roast_date: model.roast_date,
        description: model.description,
        price: model.price,
        bag_size: model.bag_size,
        created_at: model.created_at,
        updated_at: model.updated_at,
        created_by: model.created_by,
        updated_by: model.updated_by,
    }
}

fn coffee_with_tags(model: coffees::Model, tags: Vec<flavor_tags::Model>) -> CoffeeWithTags {
    CoffeeWithTags {
        coffee: coffee_from_model(model),
        flavor_tags: tags.into_iter().map(flavor_tag_from_model).collect(),
    }
}

// ── Tasting repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbTastingRepository {
    pub db: DatabaseConnection,
}

/// Load notes, tags, coffee, and roaster for one session model.
async fn load_tasting_detail<C: ConnectionTrait>(
    conn: &C,
    session: tasting_sessions::Model,
) -> Result<TastingDetail, DbErr> {
    let note_models = session
        .find_related(tasting_notes::Entity)
        .filter(tasting_notes::Column::DeletedAt.is_null())
        .order_by_asc(tasting_notes::Column::CreatedAt)
        .all(conn)
        .await?;

    let mut notes = Vec::with_capacity(note_models.len());
    for note in note_models {
        let tag = note.find_related(flavor_tags::Entity).one(conn).await?;
        if let Some(tag) = tag {
            notes.push(TastingNoteDetail {
                note: tasting_note_from_model(note),
                flavor_tag: flavor_tag_from_model(tag),
            });
        }
    }

    let coffee = audited::get::<coffees::Entity, _>(conn, session.coffee_id, false).await?;
    let roaster_name = match &coffee {
        Some(coffee) => coffee
            .find_related(roasters::Entity)
            .one(conn)
            .await?
            .map(|r| r.name),
        None => None,
    };

    Ok(TastingDetail {
        session: tasting_session_from_model(session),
        coffee: coffee.map(coffee_from_model),
        roaster_name,
        notes,
    })
}

impl TastingRepository for DbTastingRepository {
    async fn get_by_user_id(
        &self,
        user_id: &str,
        page: PageQuery,
    ) -> Result<Vec<TastingDetail>, CatalogError> {
        let page = page.clamped();
        let sessions = audited::live::<tasting_sessions::Entity>()
            .filter(tasting_sessions::Column::UserId.eq(user_id))
            .order_by_desc(tasting_sessions::Column::CreatedAt)
            .offset(page.skip)
            .limit(page.limit)
            .all(&self.db)
            .await
            .context("list tasting sessions")?;
        let mut out = Vec::with_capacity(sessions.len());
        for session in sessions {
            out.push(
                load_tasting_detail(&self.db, session)
                    .await
                    .context("load tasting detail")?,
            );
        }
        Ok(out)
    }

    async fn get_with_notes(&self, id: Uuid) -> Result<Option<TastingDetail>, CatalogError> {
        let Some(session) = audited::get::<tasting_sessions::Entity, _>(&self.db, id, false)
            .await
            .context("get tasting session")?
        else {
            return Ok(None);
        };
        let detail = load_tasting_detail(&self.db, session)
            .await
            .context("load tasting detail")?;
        Ok(Some(detail))
    }

    async fn create_with_notes(
        &self,
        user_id: &str,
        session: &NewTastingSession,
    ) -> Result<TastingDetail, CatalogError> {
        let user_id = user_id.to_owned();
        let new = session.clone();
        let session_model = self
            .db
            .transaction::<_, tasting_sessions::Model, DbErr>(|txn| {
                Box::pin(async move {
                    let now = Utc::now();
                    let session_model = tasting_sessions::ActiveModel {
                        id: Set(Uuid::new_v4()),
                        coffee_id: Set(new.coffee_id),
                        user_id: Set(user_id.clone()),
                        brew_method: Set(new.brew_method),
                        grind_size: Set(new.grind_size),
                        coffee_dose: Set(new.coffee_dose),
                        water_amount: Set(new.water_amount),
                        water_temperature: Set(new.water_temperature),
                        brew_time: Set(new.brew_time.clone()),
                        grinder: Set(new.grinder.clone()),
                        brewing_device: Set(new.brewing_device.clone()),
                        filter_type: Set(new.filter_type.clone()),
                        session_notes: Set(new.session_notes.clone()),
                        overall_rating: Set(new.overall_rating),
                        would_buy_again: Set(new.would_buy_again),
                        created_at: Set(now),
                        updated_at: Set(now),
                        created_by: Set(Some(user_id.clone())),
                        updated_by: Set(Some(user_id.clone())),
                        deleted_by: Set(None),
                        deleted_at: Set(None),
                    }
                    .insert(txn)
                    .await?;

                    for note in &new.notes {
                        let tag = find_or_create_tag(txn, &note.flavor_tag, &user_id).await?;
                        tasting_notes::ActiveModel {
                            id: Set(Uuid::new_v4()),
                            tasting_session_id: Set(session_model.id),
                            flavor_tag_id: Set(tag.id),
                            intensity: Set(note.intensity),
                            notes: Set(note.notes.clone()),
                            aroma: Set(note.aroma),
                            flavor: Set(note.flavor),
                            aftertaste: Set(note.aftertaste),
                            created_at: Set(now),
                            updated_at: Set(now),
                            created_by: Set(Some(user_id.clone())),
                            updated_by: Set(Some(user_id.clone())),
                            deleted_by: Set(None),
                            deleted_at: Set(None),
                        }
                        .insert(txn)
                        .await?;
                    }
                    Ok(session_model)
                })
            })
            .await
            .context("create tasting session with notes")?;

        let detail = load_tasting_detail(&self.db, session_model)
            .await
            .context("load tasting detail")?;
        Ok(detail)
    }

    async fn update(
        &self,
        id: Uuid,
        patch: &TastingSessionPatch,
        actor: &str,
    ) -> Result<TastingSession, CatalogError> {
        let mut am = tasting_sessions::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        if let Some(method) = patch.brew_method {
            am.brew_method = Set(method);
        }
        if let Some(v) = patch.grind_size.to_option() {
            am.grind_size = Set(v);
        }
        if let Some(v) = patch.coffee_dose.to_option() {
            am.coffee_dose = Set(v);
        }
        if let Some(v) = patch.water_amount.to_option() {
            am.water_amount = Set(v);
        }
        if let Some(v) = patch.water_temperature.to_option() {
            am.water_temperature = Set(v);
        }
        if let Some(v) = patch.brew_time.to_option() {
            am.brew_time = Set(v);
        }
        if let Some(v) = patch.grinder.to_option() {
            am.grinder = Set(v);
        }
        if let Some(v) = patch.brewing_device.to_option() {
            am.brewing_device = Set(v);
        }
        if let Some(v) = patch.filter_type.to_option() {
            am.filter_type = Set(v);
        }
        if let Some(v) = patch.session_notes.to_option() {
            am.session_notes = Set(v);
        }
        if let Some(v) = patch.overall_rating.to_option() {
            am.overall_rating = Set(v);
        }
        if let Some(v) = patch.would_buy_again.to_option() {
            am.would_buy_again = Set(v);
        }
        am.updated_at = Set(Utc::now());
        am.updated_by = Set(Some(actor.to_owned()));
        let model = am
            .update(&self.db)
            .await
            .context("update tasting session")?;
        Ok(tasting_session_from_model(model))
    }

    async fn delete_by_id(&self, id: Uuid, user_id: &str) -> Result<bool, CatalogError> {
        // Ownership folded into the predicate: someone else's session is
        // indistinguishable from an absent one. Notes cascade via FK.
        let res = tasting_sessions::Entity::delete_many()
            .filter(tasting_sessions::Column::Id.eq(id))
            .filter(tasting_sessions::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .context("delete tasting session")?;
        Ok(res.rows_affected > 0)
    }

    async fn count_by_user(&self, user_id: &str) -> Result<u64, CatalogError> {
        let total = audited::live::<tasting_sessions::Entity>()
            .filter(tasting_sessions::Column::UserId.eq(user_id))
            .count(&self.db)
            .await
            .context("count tasting sessions")?;
        Ok(total)
    }
}

fn tasting_session_from_model(model: tasting_sessions::Model) -> TastingSession {
    TastingSession {
        id: model.id,
        coffee_id: model.coffee_id,
        user_id: model.user_id,
        brew_method: model.brew_method,
        grind_size: model.grind_size,
        coffee_dose: model.coffee_dose,
        water_amount: model.water_amount,
        water_temperature: model.water_temperature,
        brew_time: model.brew_time,
        grinder: model.grinder,
        brewing_device: model.brewing_device,
        filter_type: model.filter_type,
        session_notes: model.session_notes,
        overall_rating: model.overall_rating,
        would_buy_again: model.would_buy_again,
        created_at: model.created_at,
        updated_at: model.updated_at,
        created_by: model.created_by,
        updated_by: model.updated_by,
    }
}

fn tasting_note_from_model(model: tasting_notes::Model) -> TastingNote {
    TastingNote {
        id: model.id,
        tasting_session_id: model.tasting_session_id,
        flavor_tag_id: model.flavor_tag_id,
        intensity: model.intensity,
        notes: model.notes,
        aroma: model.aroma,
        flavor: model.flavor,
        aftertaste: model.aftertaste,
    }
}
