//! Generic query layer for audited entities.
//!
//! Every table in the catalog carries the same audit base: `created_at`,
//! `updated_at`, `created_by`, `updated_by`, `deleted_at`, `deleted_by`.
//! [`AuditedEntity`] exposes those columns so reads and deletes can be
//! written once. The soft-delete predicate lives here and only here —
//! repositories call [`live`] / [`scoped`] instead of re-spelling
//! `deleted_at IS NULL`.

use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Select, UpdateMany,
};
use uuid::Uuid;

/// An entity with the audited base columns.
///
/// Implemented by every schema entity; the column accessors let the generic
/// operations below work against any of them.
pub trait AuditedEntity: EntityTrait {
    fn id_col() -> Self::Column;
    fn created_at_col() -> Self::Column;
    fn updated_at_col() -> Self::Column;
    fn created_by_col() -> Self::Column;
    fn updated_by_col() -> Self::Column;
    fn deleted_at_col() -> Self::Column;
    fn deleted_by_col() -> Self::Column;
}

/// Select over live (not soft-deleted) rows only.
pub fn live<E: AuditedEntity>() -> Select<E> {
    E::find().filter(E::deleted_at_col().is_null())
}

/// Select honoring the `include_deleted` flag.
pub fn scoped<E: AuditedEntity>(include_deleted: bool) -> Select<E> {
    if include_deleted { E::find() } else { live::<E>() }
}

/// Fetch one row by id. Soft-deleted rows behave as absent unless
/// `include_deleted` is set.
pub async fn get<E, C>(db: &C, id: Uuid, include_deleted: bool) -> Result<Option<E::Model>, DbErr>
where
    E: AuditedEntity,
    C: ConnectionTrait,
{
    scoped::<E>(include_deleted)
        .filter(E::id_col().eq(id))
        .one(db)
        .await
}

/// Fetch a page of rows ordered by `created_at` ascending so offset
/// pagination stays stable across requests.
pub async fn get_multi<E, C>(
    db: &C,
    skip: u64,
    limit: u64,
    include_deleted: bool,
) -> Result<Vec<E::Model>, DbErr>
where
    E: AuditedEntity,
    C: ConnectionTrait,
{
    scoped::<E>(include_deleted)
        .order_by_asc(E::created_at_col())
        .offset(skip)
        .limit(limit)
        .all(db)
        .await
}

pub async fn count<E, C>(db: &C, include_deleted: bool) -> Result<u64, DbErr>
where
    E: AuditedEntity,
    E::Model: Send + Sync,
    C: ConnectionTrait,
{
    scoped::<E>(include_deleted).count(db).await
}

pub async fn exists<E, C>(db: &C, id: Uuid, include_deleted: bool) -> Result<bool, DbErr>
where
    E: AuditedEntity,
    C: ConnectionTrait,
{
    Ok(get::<E, C>(db, id, include_deleted).await?.is_some())
}

fn soft_delete_query<E: AuditedEntity>(
    id: Uuid,
    actor: &str,
    now: DateTime<Utc>,
) -> UpdateMany<E> {
    E::update_many()
        .col_expr(E::deleted_at_col(), Expr::value(Some(now)))
        .col_expr(E::deleted_by_col(), Expr::value(Some(actor.to_owned())))
        .col_expr(E::updated_at_col(), Expr::value(now))
        .col_expr(E::updated_by_col(), Expr::value(Some(actor.to_owned())))
        .filter(E::id_col().eq(id))
        .filter(E::deleted_at_col().is_null())
}

/// Soft-delete a live row, stamping `deleted_at`/`deleted_by`. Returns the
/// number of rows affected; 0 means the row was absent or already deleted,
/// the caller maps that to its NotFound.
pub async fn soft_delete<E, C>(db: &C, id: Uuid, actor: &str) -> Result<u64, DbErr>
where
    E: AuditedEntity,
    C: ConnectionTrait,
{
    let res = soft_delete_query::<E>(id, actor, Utc::now()).exec(db).await?;
    Ok(res.rows_affected)
}

fn restore_query<E: AuditedEntity>(id: Uuid, actor: &str, now: DateTime<Utc>) -> UpdateMany<E> {
    E::update_many()
        .col_expr(
            E::deleted_at_col(),
            Expr::value(Option::<DateTime<Utc>>::None),
        )
        .col_expr(E::deleted_by_col(), Expr::value(Option::<String>::None))
        .col_expr(E::updated_at_col(), Expr::value(now))
        .col_expr(E::updated_by_col(), Expr::value(Some(actor.to_owned())))
        .filter(E::id_col().eq(id))
        .filter(E::deleted_at_col().is_not_null())
}

/// Undo a soft delete. Only currently-deleted rows qualify; 0 rows affected
/// means there was nothing to restore.
pub async fn restore<E, C>(db: &C, id: Uuid, actor: &str) -> Result<u64, DbErr>
where
    E: AuditedEntity,
    C: ConnectionTrait,
{
    let res = restore_query::<E>(id, actor, Utc::now()).exec(db).await?;
    Ok(res.rows_affected)
}

/// Permanent removal, regardless of soft-delete state.
pub async fn hard_delete<E, C>(db: &C, id: Uuid) -> Result<u64, DbErr>
where
    E: AuditedEntity,
    C: ConnectionTrait,
{
    let res = E::delete_many()
        .filter(E::id_col().eq(id))
        .exec(db)
        .await?;
    Ok(res.rows_affected)
}
