//! Domain types for the catalog service.
//!
//! Plain structs decoupled from both the schema entities and the HTTP
//! response shapes. Audit stamps (`created_by` etc.) ride along so callers
//! can see who touched a record.

use brewlog_domain::patch::Patch;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use brewlog_catalog_schema::enums::{BrewMethod, GrindSize, ProcessingMethod, RoastLevel};

// ── Roaster ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Roaster {
    pub id: Uuid,
    pub name: String,
    pub location: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewRoaster {
    pub name: String,
    pub location: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
}

// ── Coffee ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Coffee {
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
}

/// Coffee with its flavor tags eager-loaded. Every coffee read returns this.
#[derive(Debug, Clone, PartialEq)]
pub struct CoffeeWithTags {
    pub coffee: Coffee,
    pub flavor_tags: Vec<FlavorTag>,
}

#[derive(Debug, Clone)]
pub struct NewCoffee {
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
    /// Tag names, resolved case-insensitively via find-or-create.
    pub flavor_tags: Vec<String>,
}

// ── FlavorTag ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct FlavorTag {
    pub id: Uuid,
    pub name: String,
    pub category: Option<String>,
    pub description: Option<String>,
}

// ── TastingSession ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct TastingSession {
    pub id: Uuid,
    pub coffee_id: Uuid,
    pub user_id: String,
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TastingNote {
    pub id: Uuid,
    pub tasting_session_id: Uuid,
    pub flavor_tag_id: Uuid,
    pub intensity: Option<i32>,
    pub notes: Option<String>,
    pub aroma: bool,
    pub flavor: bool,
    pub aftertaste: bool,
}

/// Note joined with its flavor tag.
#[derive(Debug, Clone, PartialEq)]
pub struct TastingNoteDetail {
    pub note: TastingNote,
    pub flavor_tag: FlavorTag,
}

/// Session with notes, tags, and the tasted coffee eager-loaded.
/// `coffee` is `None` when the coffee has since been soft-deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct TastingDetail {
    pub session: TastingSession,
    pub coffee: Option<Coffee>,
    pub roaster_name: Option<String>,
    pub notes: Vec<TastingNoteDetail>,
}

#[derive(Debug, Clone)]
pub struct NewTastingSession {
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
    pub notes: Vec<NewTastingNote>,
}

#[derive(Debug, Clone)]
pub struct NewTastingNote {
    /// Flavor tag name, resolved case-insensitively via find-or-create.
    pub flavor_tag: String,
    pub intensity: Option<i32>,
    pub notes: Option<String>,
    pub aroma: bool,
    pub flavor: bool,
    pub aftertaste: bool,
}

/// Partial update for a tasting session. `Keep` leaves a field untouched,
/// `Clear` nulls it, `Set` replaces it. `brew_method` is non-nullable so it
/// can only be kept or replaced.
#[derive(Debug, Clone, Default)]
pub struct TastingSessionPatch {
    pub brew_method: Option<BrewMethod>,
    pub grind_size: Patch<GrindSize>,
    pub coffee_dose: Patch<Decimal>,
    pub water_amount: Patch<Decimal>,
    pub water_temperature: Patch<i32>,
    pub brew_time: Patch<String>,
    pub grinder: Patch<String>,
    pub brewing_device: Patch<String>,
    pub filter_type: Patch<String>,
    pub session_notes: Patch<String>,
    pub overall_rating: Patch<i32>,
    pub would_buy_again: Patch<bool>,
}

// ── Preference analysis ──────────────────────────────────────────────────────

/// Aggregated taste profile computed from a user's tasting history.
#[derive(Debug, Clone, PartialEq)]
pub struct TasteProfile {
    pub total_tastings: u64,
    pub average_rating: Option<f64>,
    /// (tag name, occurrences), most frequent first.
    pub most_common_flavors: Vec<(String, u64)>,
    /// (brew method wire name, occurrences), most frequent first.
    pub preferred_brew_methods: Vec<(String, u64)>,
}

/// LLM preference analysis for a user.
#[derive(Debug, Clone)]
pub struct PreferenceAnalysis {
    pub user_id: String,
    pub total_tastings: u64,
    pub flavor_analysis: String,
}
