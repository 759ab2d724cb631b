use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("slot count must be between 1 and {max}, got {provided}")]
    InvalidSlotCount { provided: usize, max: usize },
}

/// Configuration for the sentence builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuilderSettings {
    slot_count: usize,
    shuffle_parts: bool,
}

impl BuilderSettings {
    pub const DEFAULT_SLOT_COUNT: usize = 6;
    pub const MAX_SLOT_COUNT: usize = 32;

    /// # Errors
    ///
    /// Returns `SettingsError::InvalidSlotCount` if `slot_count` is zero or
    /// above `MAX_SLOT_COUNT`.
    pub fn new(slot_count: usize, shuffle_parts: bool) -> Result<Self, SettingsError> {
        if slot_count == 0 || slot_count > Self::MAX_SLOT_COUNT {
            return Err(SettingsError::InvalidSlotCount {
                provided: slot_count,
                max: Self::MAX_SLOT_COUNT,
            });
        }
        Ok(Self {
            slot_count,
            shuffle_parts,
        })
    }

    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    /// Whether each exercise's word pool is shuffled when a lesson opens.
    #[must_use]
    pub fn shuffle_parts(&self) -> bool {
        self.shuffle_parts
    }
}

impl Default for BuilderSettings {
    fn default() -> Self {
        Self {
            slot_count: Self::DEFAULT_SLOT_COUNT,
            shuffle_parts: false,
        }
    }
}
