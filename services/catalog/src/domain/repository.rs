#![allow(async_fn_in_trait)]

use uuid::Uuid;

use brewlog_domain::pagination::PageQuery;

use crate::domain::types::{
    Coffee, CoffeeWithTags, FlavorTag, NewCoffee, NewRoaster, NewTastingSession, Roaster,
    TastingDetail, TastingSession, TastingSessionPatch,
};
use crate::error::CatalogError;

/// Repository for coffee roasters.
pub trait RoasterRepository: Send + Sync {
    async fn get(&self, id: Uuid) -> Result<Option<Roaster>, CatalogError>;

    /// Page of live roasters ordered by `created_at` ascending, with
    /// optional case-insensitive name / location filters.
    async fn list(
        &self,
        search: Option<&str>,
        location: Option<&str>,
        page: PageQuery,
    ) -> Result<Vec<Roaster>, CatalogError>;

    /// Exact name match among live rows.
    async fn get_by_name(&self, name: &str) -> Result<Option<Roaster>, CatalogError>;

    /// Create with audit stamps. The name-uniqueness check against live rows
    /// happens in the usecase before this call.
    async fn create(&self, roaster: &NewRoaster, actor: &str) -> Result<Roaster, CatalogError>;

    async fn count(
        &self,
        search: Option<&str>,
        location: Option<&str>,
    ) -> Result<u64, CatalogError>;
}

/// Repository for coffees. Every read eager-loads flavor tags.
pub trait CoffeeRepository: Send + Sync {
    async fn get(&self, id: Uuid) -> Result<Option<CoffeeWithTags>, CatalogError>;

    /// Exact `(name, roaster_id)` match among live rows; a soft-deleted
    /// coffee does not reserve its name.
    async fn get_by_name_and_roaster(
        &self,
        name: &str,
        roaster_id: Uuid,
    ) -> Result<Option<Coffee>, CatalogError>;

    /// Insert the coffee, resolve flavor tag names (find-or-create), and
    /// write the associations, all in one transaction.
    async fn create_with_flavor_tags(
        &self,
        coffee: &NewCoffee,
        actor: &str,
    ) -> Result<CoffeeWithTags, CatalogError>;

    /// Page of live coffees with optional filters, tags eager-loaded.
    async fn list(
        &self,
        roaster_id: Option<Uuid>,
        search: Option<&str>,
        origin_country: Option<&str>,
        page: PageQuery,
    ) -> Result<Vec<CoffeeWithTags>, CatalogError>;

    /// Soft delete. Returns `false` if the coffee was absent or already
    /// deleted.
    async fn soft_delete(&self, id: Uuid, actor: &str) -> Result<bool, CatalogError>;

    /// Fetch regardless of soft-delete state, for owner checks before
    /// delete/restore.
    async fn get_any(&self, id: Uuid) -> Result<Option<Coffee>, CatalogError>;

    /// Undo a soft delete. Returns `false` if the coffee was not deleted.
    async fn restore(&self, id: Uuid, actor: &str) -> Result<bool, CatalogError>;

    async fn count(
        &self,
        roaster_id: Option<Uuid>,
        search: Option<&str>,
        origin_country: Option<&str>,
    ) -> Result<u64, CatalogError>;
}

/// Repository for flavor tags. Names compare case-insensitively everywhere.
pub trait FlavorTagRepository: Send + Sync {
    async fn get_by_name(&self, name: &str) -> Result<Option<FlavorTag>, CatalogError>;

    /// Idempotent find-or-create: an existing tag is returned as-is with its
    /// original casing; a lost insert race is retried as a lookup.
    async fn find_or_create_by_name(
        &self,
        name: &str,
        actor: &str,
    ) -> Result<FlavorTag, CatalogError>;

    /// Order-preserving batch find-or-create. Trims whitespace, skips
    /// blanks, dedupes case-insensitively.
    async fn find_or_create_multiple(
        &self,
        names: &[String],
        actor: &str,
    ) -> Result<Vec<FlavorTag>, CatalogError>;

    /// Case-insensitive substring search over name or category.
    async fn search(&self, query: &str, page: PageQuery) -> Result<Vec<FlavorTag>, CatalogError>;
}

/// Repository for tasting sessions and their notes.
pub trait TastingRepository: Send + Sync {
    /// The user's live sessions, newest first, with notes, tags, coffee, and
    /// roaster eager-loaded.
    async fn get_by_user_id(
        &self,
        user_id: &str,
        page: PageQuery,
    ) -> Result<Vec<TastingDetail>, CatalogError>;

    async fn get_with_notes(&self, id: Uuid) -> Result<Option<TastingDetail>, CatalogError>;

    /// Session + tag resolution + notes in one transaction; nothing persists
    /// if any step fails.
    async fn create_with_notes(
        &self,
        user_id: &str,
        session: &NewTastingSession,
    ) -> Result<TastingDetail, CatalogError>;

    async fn update(
        &self,
        id: Uuid,
        patch: &TastingSessionPatch,
        actor: &str,
    ) -> Result<TastingSession, CatalogError>;

    /// Hard delete with ownership folded into the predicate; a non-matching
    /// `user_id` behaves as absent. Notes go with the session (FK cascade).
    /// Returns `false` if nothing was deleted.
    async fn delete_by_id(&self, id: Uuid, user_id: &str) -> Result<bool, CatalogError>;

    async fn count_by_user(&self, user_id: &str) -> Result<u64, CatalogError>;
}

/// Port for LLM-backed preference analysis. The prompt/response flow lives
/// behind this trait; the usecase only sees text out.
pub trait PreferenceAnalyzerPort: Send + Sync {
    async fn analyze(&self, summary: &str) -> Result<String, CatalogError>;
}
