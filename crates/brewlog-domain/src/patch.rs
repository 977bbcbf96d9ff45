//! Tri-state partial-update cell.
//!
//! Update payloads need to distinguish "field absent" (leave untouched) from
//! "field explicitly null" (clear it). A plain `Option<T>` collapses both into
//! `None`; `Patch<T>` keeps them apart. Combine with `#[serde(default)]` on
//! each field so an absent key deserializes to [`Patch::Keep`].

use serde::{Deserialize, Deserializer};

/// One nullable field of a partial-update payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Patch<T> {
    /// Field absent from the payload; leave the stored value untouched.
    #[default]
    Keep,
    /// Field explicitly `null`; clear the stored value.
    Clear,
    /// Field present; replace the stored value.
    Set(T),
}

impl<T> Patch<T> {
    /// `None` for [`Patch::Keep`], `Some(new_value)` otherwise.
    ///
    /// Shaped for feeding a sea-orm `ActiveValue`:
    /// `if let Some(v) = patch.to_option() { model.field = Set(v); }`
    pub fn to_option(&self) -> Option<Option<T>>
    where
        T: Clone,
    {
        match self {
            Self::Keep => None,
            Self::Clear => Some(None),
            Self::Set(value) => Some(Some(value.clone())),
        }
    }

    pub fn is_keep(&self) -> bool {
        matches!(self, Self::Keep)
    }

    /// The value being set, if any.
    pub fn as_set(&self) -> Option<&T> {
        match self {
            Self::Set(value) => Some(value),
            _ => None,
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Only reached when the key is present: null → Clear, value → Set.
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Self::Set(value),
            None => Self::Clear,
        })
    }
}
