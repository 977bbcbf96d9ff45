use uuid::Uuid;

use brewlog_domain::pagination::PageQuery;

use crate::domain::repository::RoasterRepository;
use crate::domain::types::{NewRoaster, Roaster};
use crate::error::CatalogError;

// ── CreateRoaster ────────────────────────────────────────────────────────────

pub struct CreateRoasterUseCase<R: RoasterRepository> {
    pub repo: R,
}

impl<R: RoasterRepository> CreateRoasterUseCase<R> {
    pub async fn execute(
        &self,
        input: NewRoaster,
        actor: &str,
    ) -> Result<Roaster, CatalogError> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(CatalogError::Validation("name must not be empty".into()));
        }
        if self.repo.get_by_name(name).await?.is_some() {
            return Err(CatalogError::RoasterAlreadyExists);
        }
        let input = NewRoaster {
            name: name.to_owned(),
            ..input
        };
        self.repo.create(&input, actor).await
    }
}

// ── GetRoaster ───────────────────────────────────────────────────────────────

pub struct GetRoasterUseCase<R: RoasterRepository> {
    pub repo: R,
}

impl<R: RoasterRepository> GetRoasterUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<Roaster, CatalogError> {
        self.repo
            .get(id)
            .await?
            .ok_or(CatalogError::RoasterNotFound)
    }
}

// ── ListRoasters ─────────────────────────────────────────────────────────────

pub struct ListRoastersUseCase<R: RoasterRepository> {
    pub repo: R,
}

impl<R: RoasterRepository> ListRoastersUseCase<R> {
    /// Returns the page plus the total count for the same filters.
    pub async fn execute(
        &self,
        search: Option<&str>,
        location: Option<&str>,
        page: PageQuery,
    ) -> Result<(Vec<Roaster>, u64), CatalogError> {
        let roasters = self.repo.list(search, location, page).await?;
        let total = self.repo.count(search, location).await?;
        Ok((roasters, total))
    }
}
