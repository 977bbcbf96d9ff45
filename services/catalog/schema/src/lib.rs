//! sea-orm entities for the catalog database.
//!
//! Every entity table carries the audited base columns and implements
//! `brewlog_core::audited::AuditedEntity`; `coffee_flavors` is the plain
//! coffee ↔ flavor-tag association.

pub mod coffee_flavors;
pub mod coffees;
pub mod enums;
pub mod flavor_tags;
pub mod roasters;
pub mod tasting_notes;
pub mod tasting_sessions;
