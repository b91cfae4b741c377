//! Record store configuration.
//!
//! The store does no geometry math of its own: the sector size is whatever page
//! size the device reports at `partition_offset`, and the medium decides whether
//! the resulting partition fits.

/// Store configuration parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Offset of the storage partition on the device (default: 0).
    pub partition_offset: u64,

    /// Number of sectors handed to the medium (default: 2).
    ///
    /// The medium keeps one sector free for garbage collection, so at least
    /// two are required.
    pub sector_count: u16,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            partition_offset: 0,
            sector_count: 2,
        }
    }
}

impl StoreConfig {
    /// Minimum number of sectors.
    pub const MIN_SECTORS: u16 = 2;

    /// Create a new store configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set partition offset (builder pattern).
    pub fn with_partition_offset(mut self, offset: u64) -> Self {
        self.partition_offset = offset;
        self
    }

    /// Set sector count (builder pattern).
    pub fn with_sector_count(mut self, count: u16) -> Self {
        self.sector_count = count;
        self
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), StoreConfigError> {
        if self.sector_count < Self::MIN_SECTORS {
            return Err(StoreConfigError::TooFewSectors(self.sector_count));
        }
        Ok(())
    }

    /// Create a configuration for testing (partition past the first page, more room).
    pub fn for_testing() -> Self {
        StoreConfig {
            partition_offset: 4096,
            sector_count: 4,
        }
    }
}

/// Store configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreConfigError {
    /// Fewer than two sectors.
    #[error("At least 2 sectors are required, got {0}")]
    TooFewSectors(u16),
}
