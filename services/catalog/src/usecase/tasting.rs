use uuid::Uuid;

use brewlog_auth::require_owner_access;
use brewlog_domain::pagination::PageQuery;

use crate::domain::repository::{CoffeeRepository, TastingRepository};
use crate::domain::types::{
    NewTastingSession, TastingDetail, TastingSession, TastingSessionPatch,
};
use crate::error::CatalogError;

fn validate_rating(rating: Option<i32>) -> Result<(), CatalogError> {
    match rating {
        Some(r) if !(1..=10).contains(&r) => Err(CatalogError::Validation(
            "overall_rating must be between 1 and 10".into(),
        )),
        _ => Ok(()),
    }
}

fn validate_intensity(intensity: Option<i32>) -> Result<(), CatalogError> {
    match intensity {
        Some(i) if !(1..=10).contains(&i) => Err(CatalogError::Validation(
            "intensity must be between 1 and 10".into(),
        )),
        _ => Ok(()),
    }
}

fn validate_temperature(celsius: Option<i32>) -> Result<(), CatalogError> {
    match celsius {
        Some(t) if !(0..=100).contains(&t) => Err(CatalogError::Validation(
            "water_temperature must be between 0 and 100".into(),
        )),
        _ => Ok(()),
    }
}

// ── ListTastings ─────────────────────────────────────────────────────────────

pub struct ListTastingsUseCase<T: TastingRepository> {
    pub tastings: T,
}

impl<T: TastingRepository> ListTastingsUseCase<T> {
    /// Only the caller's own sessions, newest first.
    pub async fn execute(
        &self,
        user_id: &str,
        page: PageQuery,
    ) -> Result<(Vec<TastingDetail>, u64), CatalogError> {
        let tastings = self.tastings.get_by_user_id(user_id, page).await?;
        let total = self.tastings.count_by_user(user_id).await?;
        Ok((tastings, total))
    }
}

// ── GetTasting ───────────────────────────────────────────────────────────────

pub struct GetTastingUseCase<T: TastingRepository> {
    pub tastings: T,
}

impl<T: TastingRepository> GetTastingUseCase<T> {
    pub async fn execute(&self, id: Uuid, user_id: &str) -> Result<TastingDetail, CatalogError> {
        let detail = self
            .tastings
            .get_with_notes(id)
            .await?
            .ok_or(CatalogError::TastingNotFound)?;
        require_owner_access(&detail.session.user_id, user_id)
            .map_err(|_| CatalogError::Forbidden)?;
        Ok(detail)
    }
}

// ── CreateTasting ────────────────────────────────────────────────────────────

pub struct CreateTastingUseCase<T: TastingRepository, C: CoffeeRepository> {
    pub tastings: T,
    pub coffees: C,
}

impl<T: TastingRepository, C: CoffeeRepository> CreateTastingUseCase<T, C> {
    /// Coffee existence is checked first; if any later step fails the
    /// repository transaction persists nothing.
    pub async fn execute(
        &self,
        user_id: &str,
        input: NewTastingSession,
    ) -> Result<TastingDetail, CatalogError> {
        validate_rating(input.overall_rating)?;
        validate_temperature(input.water_temperature)?;
        for note in &input.notes {
            validate_intensity(note.intensity)?;
            if note.flavor_tag.trim().is_empty() {
                return Err(CatalogError::Validation(
                    "flavor_tag must not be empty".into(),
                ));
            }
        }
        if self.coffees.get(input.coffee_id).await?.is_none() {
            return Err(CatalogError::CoffeeNotFound);
        }
        self.tastings.create_with_notes(user_id, &input).await
    }
}

// ── UpdateTasting ────────────────────────────────────────────────────────────

pub struct UpdateTastingUseCase<T: TastingRepository> {
    pub tastings: T,
}

impl<T: TastingRepository> UpdateTastingUseCase<T> {
    pub async fn execute(
        &self,
        id: Uuid,
        user_id: &str,
        patch: TastingSessionPatch,
    ) -> Result<TastingSession, CatalogError> {
        validate_rating(patch.overall_rating.as_set().copied())?;
        validate_temperature(patch.water_temperature.as_set().copied())?;
        let detail = self
            .tastings
            .get_with_notes(id)
            .await?
            .ok_or(CatalogError::TastingNotFound)?;
        require_owner_access(&detail.session.user_id, user_id)
            .map_err(|_| CatalogError::Forbidden)?;
        self.tastings.update(id, &patch, user_id).await
    }
}

// ── DeleteTasting ────────────────────────────────────────────────────────────

pub struct DeleteTastingUseCase<T: TastingRepository> {
    pub tastings: T,
}

impl<T: TastingRepository> DeleteTastingUseCase<T> {
    /// Owner mismatch is Forbidden here; the repository predicate then only
    /// matches rows the caller owns, so a lost race reads as NotFound.
    pub async fn execute(&self, id: Uuid, user_id: &str) -> Result<(), CatalogError> {
        let detail = self
            .tastings
            .get_with_notes(id)
            .await?
            .ok_or(CatalogError::TastingNotFound)?;
        require_owner_access(&detail.session.user_id, user_id)
            .map_err(|_| CatalogError::Forbidden)?;
        if !self.tastings.delete_by_id(id, user_id).await? {
            return Err(CatalogError::TastingNotFound);
        }
        Ok(())
    }
}
