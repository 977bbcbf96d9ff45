use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use brewlog_catalog::domain::repository::{
    CoffeeRepository, FlavorTagRepository, PreferenceAnalyzerPort, RoasterRepository,
    TastingRepository,
};
use brewlog_catalog::domain::types::{
    Coffee, CoffeeWithTags, FlavorTag, NewCoffee, NewRoaster, NewTastingSession, Roaster,
    TastingDetail, TastingNote, TastingNoteDetail, TastingSession, TastingSessionPatch,
};
use brewlog_catalog::error::CatalogError;
use brewlog_domain::pagination::PageQuery;

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

// ── MockFlavorTagRepo ────────────────────────────────────────────────────────

/// In-memory tag store with the case-insensitive find-or-create semantics of
/// the real repository. Shared between the coffee and tasting mocks so tag
/// identity is consistent across them.
#[derive(Clone)]
pub struct MockFlavorTagRepo {
    pub tags: Arc<Mutex<Vec<FlavorTag>>>,
}

impl MockFlavorTagRepo {
    pub fn empty() -> Self {
        Self {
            tags: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn find_or_create(&self, name: &str) -> FlavorTag {
        let mut tags = self.tags.lock().unwrap();
        if let Some(tag) = tags.iter().find(|t| t.name.eq_ignore_ascii_case(name)) {
            return tag.clone();
        }
        let tag = FlavorTag {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            category: None,
            description: None,
        };
        tags.push(tag.clone());
        tag
    }

    /// Trim, skip blanks, dedupe case-insensitively, preserve first-seen order.
    pub fn find_or_create_batch(&self, names: &[String]) -> Vec<FlavorTag> {
        let mut seen: Vec<String> = Vec::new();
        let mut out = Vec::new();
        for name in names {
            let trimmed = name.trim();
            if trimmed.is_empty() {
                continue;
            }
            let key = trimmed.to_lowercase();
            if seen.contains(&key) {
                continue;
            }
            seen.push(key);
            out.push(self.find_or_create(trimmed));
        }
        out
    }
}

impl FlavorTagRepository for MockFlavorTagRepo {
    async fn get_by_name(&self, name: &str) -> Result<Option<FlavorTag>, CatalogError> {
        Ok(self
            .tags
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
            .cloned())
    }

    async fn find_or_create_by_name(
        &self,
        name: &str,
        _actor: &str,
    ) -> Result<FlavorTag, CatalogError> {
        Ok(self.find_or_create(name.trim()))
    }

    async fn find_or_create_multiple(
        &self,
        names: &[String],
        _actor: &str,
    ) -> Result<Vec<FlavorTag>, CatalogError> {
        Ok(self.find_or_create_batch(names))
    }

    async fn search(&self, query: &str, page: PageQuery) -> Result<Vec<FlavorTag>, CatalogError> {
        Ok(self
            .tags
            .lock()
            .unwrap()
            .iter()
            .filter(|t| {
                contains_ci(&t.name, query)
                    || t.category.as_deref().is_some_and(|c| contains_ci(c, query))
            })
            .skip(page.skip as usize)
            .take(page.limit as usize)
            .cloned()
            .collect())
    }
}

// ── MockRoasterRepo ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockRoasterRepo {
    pub roasters: Arc<Mutex<Vec<Roaster>>>,
}

impl MockRoasterRepo {
    pub fn empty() -> Self {
        Self {
            roasters: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with(roasters: Vec<Roaster>) -> Self {
        Self {
            roasters: Arc::new(Mutex::new(roasters)),
        }
    }

    fn filtered(&self, search: Option<&str>, location: Option<&str>) -> Vec<Roaster> {
        self.roasters
            .lock()
            .unwrap()
            .iter()
            .filter(|r| search.is_none_or(|s| contains_ci(&r.name, s)))
            .filter(|r| {
                location.is_none_or(|l| {
                    r.location.as_deref().is_some_and(|loc| contains_ci(loc, l))
                })
            })
            .cloned()
            .collect()
    }
}

impl RoasterRepository for MockRoasterRepo {
    async fn get(&self, id: Uuid) -> Result<Option<Roaster>, CatalogError> {
        Ok(self
            .roasters
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn list(
        &self,
        search: Option<&str>,
        location: Option<&str>,
        page: PageQuery,
    ) -> Result<Vec<Roaster>, CatalogError> {
        Ok(self
            .filtered(search, location)
            .into_iter()
            .skip(page.skip as usize)
            .take(page.limit as usize)
            .collect())
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Roaster>, CatalogError> {
        Ok(self
            .roasters
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.name == name)
            .cloned())
    }

    async fn create(&self, roaster: &NewRoaster, actor: &str) -> Result<Roaster, CatalogError> {
        let now = Utc::now();
        let created = Roaster {
            id: Uuid::new_v4(),
            name: roaster.name.clone(),
            location: roaster.location.clone(),
            website: roaster.website.clone(),
            description: roaster.description.clone(),
            created_at: now,
            updated_at: now,
            created_by: Some(actor.to_owned()),
            updated_by: Some(actor.to_owned()),
        };
        self.roasters.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn count(
        &self,
        search: Option<&str>,
        location: Option<&str>,
    ) -> Result<u64, CatalogError> {
        Ok(self.filtered(search, location).len() as u64)
    }
}

// ── MockCoffeeRepo ───────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct CoffeeRecord {
    pub coffee: Coffee,
    pub tags: Vec<FlavorTag>,
    pub deleted: bool,
}

/// Coffee store with soft-delete semantics: `get`/`list`/`get_by_name_and_roaster`
/// see live rows only, `get_any` sees everything.
#[derive(Clone)]
pub struct MockCoffeeRepo {
    pub coffees: Arc<Mutex<Vec<CoffeeRecord>>>,
    pub flavor_tags: MockFlavorTagRepo,
}

impl MockCoffeeRepo {
    pub fn empty() -> Self {
        Self {
            coffees: Arc::new(Mutex::new(Vec::new())),
            flavor_tags: MockFlavorTagRepo::empty(),
        }
    }
}

impl CoffeeRepository for MockCoffeeRepo {
    async fn get(&self, id: Uuid) -> Result<Option<CoffeeWithTags>, CatalogError> {
        Ok(self
            .coffees
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.coffee.id == id && !r.deleted)
            .map(|r| CoffeeWithTags {
                coffee: r.coffee.clone(),
                flavor_tags: r.tags.clone(),
            }))
    }

    async fn get_by_name_and_roaster(
        &self,
        name: &str,
        roaster_id: Uuid,
    ) -> Result<Option<Coffee>, CatalogError> {
        Ok(self
            .coffees
            .lock()
            .unwrap()
            .iter()
            .find(|r| !r.deleted && r.coffee.name == name && r.coffee.roaster_id == roaster_id)
            .map(|r| r.coffee.clone()))
    }

    async fn create_with_flavor_tags(
        &self,
        coffee: &NewCoffee,
        actor: &str,
    ) -> Result<CoffeeWithTags, CatalogError> {
        let now = Utc::now();
        let tags = self.flavor_tags.find_or_create_batch(&coffee.flavor_tags);
        let created = Coffee {
            id: Uuid::new_v4(),
            name: coffee.name.clone(),
            roaster_id: coffee.roaster_id,
            origin_country: coffee.origin_country.clone(),
            origin_region: coffee.origin_region.clone(),
            farm_name: coffee.farm_name.clone(),
            producer: coffee.producer.clone(),
            altitude: coffee.altitude.clone(),
            processing_method: coffee.processing_method,
            variety: coffee.variety.clone(),
            roast_level: coffee.roast_level,
            roast_date: coffee.roast_date.clone(),
            description: coffee.description.clone(),
            price: coffee.price,
            bag_size: coffee.bag_size.clone(),
            created_at: now,
            updated_at: now,
            created_by: Some(actor.to_owned()),
            updated_by: Some(actor.to_owned()),
        };
        self.coffees.lock().unwrap().push(CoffeeRecord {
            coffee: created.clone(),
            tags: tags.clone(),
            deleted: false,
        });
        Ok(CoffeeWithTags {
            coffee: created,
            flavor_tags: tags,
        })
    }

    async fn list(
        &self,
        roaster_id: Option<Uuid>,
        search: Option<&str>,
        origin_country: Option<&str>,
        page: PageQuery,
    ) -> Result<Vec<CoffeeWithTags>, CatalogError> {
        Ok(self
            .coffees
            .lock()
            .unwrap()
            .iter()
            .filter(|r| !r.deleted)
            .filter(|r| roaster_id.is_none_or(|id| r.coffee.roaster_id == id))
            .filter(|r| search.is_none_or(|s| contains_ci(&r.coffee.name, s)))
            .filter(|r| {
                origin_country.is_none_or(|c| {
                    r.coffee
                        .origin_country
                        .as_deref()
                        .is_some_and(|oc| contains_ci(oc, c))
                })
            })
            .skip(page.skip as usize)
            .take(page.limit as usize)
            .map(|r| CoffeeWithTags {
                coffee: r.coffee.clone(),
                flavor_tags: r.tags.clone(),
            })
            .collect())
    }

    async fn soft_delete(&self, id: Uuid, actor: &str) -> Result<bool, CatalogError> {
        let mut coffees = self.coffees.lock().unwrap();
        match coffees.iter_mut().find(|r| r.coffee.id == id && !r.deleted) {
            Some(record) => {
                record.deleted = true;
                record.coffee.updated_at = Utc::now();
                record.coffee.updated_by = Some(actor.to_owned());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn get_any(&self, id: Uuid) -> Result<Option<Coffee>, CatalogError> {
        Ok(self
            .coffees
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.coffee.id == id)
            .map(|r| r.coffee.clone()))
    }

    async fn restore(&self, id: Uuid, actor: &str) -> Result<bool, CatalogError> {
        let mut coffees = self.coffees.lock().unwrap();
        match coffees.iter_mut().find(|r| r.coffee.id == id && r.deleted) {
            Some(record) => {
                record.deleted = false;
                record.coffee.updated_at = Utc::now();
                record.coffee.updated_by = Some(actor.to_owned());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count(
        &self,
        roaster_id: Option<Uuid>,
        search: Option<&str>,
        origin_country: Option<&str>,
    ) -> Result<u64, CatalogError> {
        Ok(self
            .list(roaster_id, search, origin_country, PageQuery {
                skip: 0,
                limit: u64::MAX,
            })
            .await?
            .len() as u64)
    }
}

// ── MockTastingRepo ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockTastingRepo {
    pub tastings: Arc<Mutex<Vec<TastingDetail>>>,
    pub flavor_tags: MockFlavorTagRepo,
}

impl MockTastingRepo {
    pub fn empty() -> Self {
        Self {
            tastings: Arc::new(Mutex::new(Vec::new())),
            flavor_tags: MockFlavorTagRepo::empty(),
        }
    }

    pub fn with(tastings: Vec<TastingDetail>) -> Self {
        Self {
            tastings: Arc::new(Mutex::new(tastings)),
            flavor_tags: MockFlavorTagRepo::empty(),
        }
    }
}

impl TastingRepository for MockTastingRepo {
    async fn get_by_user_id(
        &self,
        user_id: &str,
        page: PageQuery,
    ) -> Result<Vec<TastingDetail>, CatalogError> {
        let mut mine: Vec<_> = self
            .tastings
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.session.user_id == user_id)
            .cloned()
            .collect();
        mine.sort_by(|a, b| b.session.created_at.cmp(&a.session.created_at));
        Ok(mine
            .into_iter()
            .skip(page.skip as usize)
            .take(page.limit as usize)
            .collect())
    }

    async fn get_with_notes(&self, id: Uuid) -> Result<Option<TastingDetail>, CatalogError> {
        Ok(self
            .tastings
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.session.id == id)
            .cloned())
    }

    async fn create_with_notes(
        &self,
        user_id: &str,
        session: &NewTastingSession,
    ) -> Result<TastingDetail, CatalogError> {
        let now = Utc::now();
        let session_id = Uuid::new_v4();
        let notes = session
            .notes
            .iter()
            .map(|n| {
                let tag = self.flavor_tags.find_or_create(n.flavor_tag.trim());
                TastingNoteDetail {
                    note: TastingNote {
                        id: Uuid::new_v4(),
                        tasting_session_id: session_id,
                        flavor_tag_id: tag.id,
                        intensity: n.intensity,
                        notes: n.notes.clone(),
                        aroma: n.aroma,
                        flavor: n.flavor,
                        aftertaste: n.aftertaste,
                    },
                    flavor_tag: tag,
                }
            })
            .collect();
        let detail = TastingDetail {
            session: TastingSession {
                id: session_id,
                coffee_id: session.coffee_id,
                user_id: user_id.to_owned(),
                brew_method: session.brew_method,
                grind_size: session.grind_size,
                coffee_dose: session.coffee_dose,
                water_amount: session.water_amount,
                water_temperature: session.water_temperature,
                brew_time: session.brew_time.clone(),
                grinder: session.grinder.clone(),
                brewing_device: session.brewing_device.clone(),
                filter_type: session.filter_type.clone(),
                session_notes: session.session_notes.clone(),
                overall_rating: session.overall_rating,
                would_buy_again: session.would_buy_again,
                created_at: now,
                updated_at: now,
                created_by: Some(user_id.to_owned()),
                updated_by: Some(user_id.to_owned()),
            },
            coffee: None,
            roaster_name: None,
            notes,
        };
        self.tastings.lock().unwrap().push(detail.clone());
        Ok(detail)
    }

    async fn update(
        &self,
        id: Uuid,
        patch: &TastingSessionPatch,
        actor: &str,
    ) -> Result<TastingSession, CatalogError> {
        let mut tastings = self.tastings.lock().unwrap();
        let detail = tastings
            .iter_mut()
            .find(|t| t.session.id == id)
            .ok_or(CatalogError::TastingNotFound)?;
        let s = &mut detail.session;
        if let Some(method) = patch.brew_method {
            s.brew_method = method;
        }
        if let Some(v) = patch.grind_size.to_option() {
            s.grind_size = v;
        }
        if let Some(v) = patch.coffee_dose.to_option() {
            s.coffee_dose = v;
        }
        if let Some(v) = patch.water_amount.to_option() {
            s.water_amount = v;
        }
        if let Some(v) = patch.water_temperature.to_option() {
            s.water_temperature = v;
        }
        if let Some(v) = patch.brew_time.to_option() {
            s.brew_time = v;
        }
        if let Some(v) = patch.grinder.to_option() {
            s.grinder = v;
        }
        if let Some(v) = patch.brewing_device.to_option() {
            s.brewing_device = v;
        }
        if let Some(v) = patch.filter_type.to_option() {
            s.filter_type = v;
        }
        if let Some(v) = patch.session_notes.to_option() {
            s.session_notes = v;
        }
        if let Some(v) = patch.overall_rating.to_option() {
            s.overall_rating = v;
        }
        if let Some(v) = patch.would_buy_again.to_option() {
            s.would_buy_again = v;
        }
        s.updated_at = Utc::now();
        s.updated_by = Some(actor.to_owned());
        Ok(s.clone())
    }

    async fn delete_by_id(&self, id: Uuid, user_id: &str) -> Result<bool, CatalogError> {
        let mut tastings = self.tastings.lock().unwrap();
        let before = tastings.len();
        tastings.retain(|t| !(t.session.id == id && t.session.user_id == user_id));
        Ok(tastings.len() < before)
    }

    async fn count_by_user(&self, user_id: &str) -> Result<u64, CatalogError> {
        Ok(self
            .tastings
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.session.user_id == user_id)
            .count() as u64)
    }
}

// ── MockAnalyzer ─────────────────────────────────────────────────────────────

pub struct MockAnalyzer {
    pub prompt_seen: Arc<Mutex<Option<String>>>,
    pub reply: String,
}

impl MockAnalyzer {
    pub fn replying(reply: &str) -> Self {
        Self {
            prompt_seen: Arc::new(Mutex::new(None)),
            reply: reply.to_owned(),
        }
    }
}

impl PreferenceAnalyzerPort for MockAnalyzer {
    async fn analyze(&self, summary: &str) -> Result<String, CatalogError> {
        *self.prompt_seen.lock().unwrap() = Some(summary.to_owned());
        Ok(self.reply.clone())
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub const ALICE: &str = "user-alice";
pub const BOB: &str = "user-bob";

pub fn new_roaster(name: &str) -> NewRoaster {
    NewRoaster {
        name: name.to_owned(),
        location: Some("Oslo, Norway".to_owned()),
        website: None,
        description: None,
    }
}

pub fn new_coffee(name: &str, roaster_id: Uuid, flavor_tags: &[&str]) -> NewCoffee {
    NewCoffee {
        name: name.to_owned(),
        roaster_id,
        origin_country: Some("Ethiopia".to_owned()),
        origin_region: None,
        farm_name: None,
        producer: None,
        altitude: None,
        processing_method: None,
        variety: None,
        roast_level: None,
        roast_date: None,
        description: None,
        price: None,
        bag_size: None,
        flavor_tags: flavor_tags.iter().map(|s| (*s).to_owned()).collect(),
    }
}
