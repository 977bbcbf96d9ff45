pub mod coffee;
pub mod health;
pub mod recommendation;
pub mod roaster;
pub mod tasting;
