//! String-backed enums stored as Postgres enum columns.
//!
//! The `string_value` of each variant matches its wire form, so the same
//! type serializes identically in the database and the JSON API.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(
    rs_type = "String",
    db_type = "Enum",
    enum_name = "processing_method_enum"
)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingMethod {
    #[sea_orm(string_value = "washed")]
    Washed,
    #[sea_orm(string_value = "natural")]
    Natural,
    #[sea_orm(string_value = "honey")]
    Honey,
    #[sea_orm(string_value = "semi_washed")]
    SemiWashed,
    #[sea_orm(string_value = "wet_hulled")]
    WetHulled,
    #[sea_orm(string_value = "carbonic_maceration")]
    CarbonicMaceration,
    #[sea_orm(string_value = "other")]
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "roast_level_enum")]
#[serde(rename_all = "snake_case")]
pub enum RoastLevel {
    #[sea_orm(string_value = "light")]
    Light,
    #[sea_orm(string_value = "medium_light")]
    MediumLight,
    #[sea_orm(string_value = "medium")]
    Medium,
    #[sea_orm(string_value = "medium_dark")]
    MediumDark,
    #[sea_orm(string_value = "dark")]
    Dark,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "brew_method_enum")]
#[serde(rename_all = "snake_case")]
pub enum BrewMethod {
    #[sea_orm(string_value = "pour_over")]
    PourOver,
    #[sea_orm(string_value = "french_press")]
    FrenchPress,
    #[sea_orm(string_value = "espresso")]
    Espresso,
    #[sea_orm(string_value = "aeropress")]
    Aeropress,
    #[sea_orm(string_value = "chemex")]
    Chemex,
    #[sea_orm(string_value = "v60")]
    V60,
    #[sea_orm(string_value = "kalita")]
    Kalita,
    #[sea_orm(string_value = "siphon")]
    Siphon,
    #[sea_orm(string_value = "cold_brew")]
    ColdBrew,
    #[sea_orm(string_value = "moka_pot")]
    MokaPot,
    #[sea_orm(string_value = "drip")]
    Drip,
    #[sea_orm(string_value = "other")]
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "grind_size_enum")]
#[serde(rename_all = "snake_case")]
pub enum GrindSize {
    #[sea_orm(string_value = "extra_fine")]
    ExtraFine,
    #[sea_orm(string_value = "fine")]
    Fine,
    #[sea_orm(string_value = "medium_fine")]
    MediumFine,
    #[sea_orm(string_value = "medium")]
    Medium,
    #[sea_orm(string_value = "medium_coarse")]
    MediumCoarse,
    #[sea_orm(string_value = "coarse")]
    Coarse,
    #[sea_orm(string_value = "extra_coarse")]
    ExtraCoarse,
}
