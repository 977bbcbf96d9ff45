use uuid::Uuid;

use brewlog_domain::pagination::PageQuery;

use crate::domain::repository::{CoffeeRepository, RoasterRepository};
use crate::domain::types::{Coffee, CoffeeWithTags, NewCoffee};
use crate::error::CatalogError;

fn require_owner(coffee: &Coffee, actor: &str) -> Result<(), CatalogError> {
    if coffee.created_by.as_deref() == Some(actor) {
        Ok(())
    } else {
        Err(CatalogError::Forbidden)
    }
}

// ── CreateCoffee ─────────────────────────────────────────────────────────────

pub struct CreateCoffeeUseCase<C: CoffeeRepository, R: RoasterRepository> {
    pub coffees: C,
    pub roasters: R,
}

impl<C: CoffeeRepository, R: RoasterRepository> CreateCoffeeUseCase<C, R> {
    /// The duplicate check runs before the insert so a `(name, roaster)`
    /// conflict surfaces before any flavor-tag side effects.
    pub async fn execute(
        &self,
        input: NewCoffee,
        actor: &str,
    ) -> Result<CoffeeWithTags, CatalogError> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(CatalogError::Validation("name must not be empty".into()));
        }
        if self.roasters.get(input.roaster_id).await?.is_none() {
            return Err(CatalogError::RoasterNotFound);
        }
        if self
            .coffees
            .get_by_name_and_roaster(name, input.roaster_id)
            .await?
            .is_some()
        {
            return Err(CatalogError::CoffeeAlreadyExists);
        }
        let input = NewCoffee {
            name: name.to_owned(),
            ..input
        };
        self.coffees.create_with_flavor_tags(&input, actor).await
    }
}

// ── GetCoffee ────────────────────────────────────────────────────────────────

pub struct GetCoffeeUseCase<C: CoffeeRepository> {
    pub coffees: C,
}

impl<C: CoffeeRepository> GetCoffeeUseCase<C> {
    pub async fn execute(&self, id: Uuid) -> Result<CoffeeWithTags, CatalogError> {
        self.coffees
            .get(id)
            .await?
            .ok_or(CatalogError::CoffeeNotFound)
    }
}

// ── ListCoffees ──────────────────────────────────────────────────────────────

pub struct ListCoffeesUseCase<C: CoffeeRepository> {
    pub coffees: C,
}

impl<C: CoffeeRepository> ListCoffeesUseCase<C> {
    pub async fn execute(
        &self,
        roaster_id: Option<Uuid>,
        search: Option<&str>,
        origin_country: Option<&str>,
        page: PageQuery,
    ) -> Result<(Vec<CoffeeWithTags>, u64), CatalogError> {
        let coffees = self
            .coffees
            .list(roaster_id, search, origin_country, page)
            .await?;
        let total = self
            .coffees
            .count(roaster_id, search, origin_country)
            .await?;
        Ok((coffees, total))
    }
}

// ── DeleteCoffee ─────────────────────────────────────────────────────────────

pub struct DeleteCoffeeUseCase<C: CoffeeRepository> {
    pub coffees: C,
}

impl<C: CoffeeRepository> DeleteCoffeeUseCase<C> {
    /// Owner-only soft delete. A coffee that is already deleted reads as
    /// absent, so deleting twice yields NotFound.
    pub async fn execute(&self, id: Uuid, actor: &str) -> Result<(), CatalogError> {
        let coffee = self
            .coffees
            .get(id)
            .await?
            .ok_or(CatalogError::CoffeeNotFound)?;
        require_owner(&coffee.coffee, actor)?;
        if !self.coffees.soft_delete(id, actor).await? {
            return Err(CatalogError::CoffeeNotFound);
        }
        Ok(())
    }
}

// ── RestoreCoffee ────────────────────────────────────────────────────────────

pub struct RestoreCoffeeUseCase<C: CoffeeRepository> {
    pub coffees: C,
}

impl<C: CoffeeRepository> RestoreCoffeeUseCase<C> {
    /// Owner-only restore of a soft-deleted coffee. Restoring a live coffee
    /// yields NotFound, same as restoring a missing one.
    pub async fn execute(&self, id: Uuid, actor: &str) -> Result<CoffeeWithTags, CatalogError> {
        let coffee = self
            .coffees
            .get_any(id)
            .await?
            .ok_or(CatalogError::CoffeeNotFound)?;
        require_owner(&coffee, actor)?;
        if !self.coffees.restore(id, actor).await? {
            return Err(CatalogError::CoffeeNotFound);
        }
        self.coffees
            .get(id)
            .await?
            .ok_or(CatalogError::CoffeeNotFound)
    }
}
