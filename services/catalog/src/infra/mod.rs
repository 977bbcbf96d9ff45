pub mod analyzer;
pub mod db;
