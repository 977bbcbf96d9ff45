/// Trait for loading service configuration from environment variables.
///
/// Implementors derive `serde::Deserialize` and call `Config::from_env()`
/// once at startup.
///
/// # Panics
///
/// Panics if a required env var is missing or fails to deserialize. A
/// service with broken configuration must not come up.
pub trait Config: Sized + serde::de::DeserializeOwned {
    fn from_env() -> Self {
        envy::from_env().expect("failed to load config from environment")
    }
}
