pub mod coffee;
pub mod recommendation;
pub mod roaster;
pub mod tasting;
