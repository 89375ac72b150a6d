//! Avatar persistence.
//!
//! Storage receives already-encoded images. Failures are reported as-is and
//! never retried.

mod local;

pub use local::{LocalStorage, METADATA_FILENAME};

use crate::engine::{AvatarMetadata, GeneratedAvatar};
use crate::error::{AvatarError, Result};
use crate::types::Resolution;

/// A place to keep generated avatars.
pub trait Storage {
    /// Persist an avatar and return where it was written.
    fn save(&self, avatar: &GeneratedAvatar) -> Result<String>;

    /// Load an avatar with all of its images.
    fn load(&self, id: &str) -> Result<GeneratedAvatar>;

    /// Load the PNG for a single resolution.
    fn load_image(&self, id: &str, resolution: Resolution) -> Result<Vec<u8>>;

    fn metadata(&self, id: &str) -> Result<AvatarMetadata>;

    fn delete(&self, id: &str) -> Result<()>;

    fn exists(&self, id: &str) -> bool;

    /// Ids of every stored avatar, sorted.
    fn list(&self) -> Result<Vec<String>>;
}

/// Reject ids that could escape the storage root.
pub fn validate_id(id: &str) -> Result<()> {
    let valid = !id.is_empty()
        && id.len() <= 64
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(())
    } else {
        Err(AvatarError::Validation {
            message: format!("Invalid avatar id: {:?}", id),
            help: Some("Ids contain only letters, digits, '-' and '_'".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_id() {
        assert!(validate_id("67e55044-10b1-426f-9247-bb680e5fe0c8").is_ok());
        assert!(validate_id("my_avatar").is_ok());

        let long = "x".repeat(65);
        for bad in ["", "../etc", "a/b", "a b", ".", long.as_str()] {
            assert!(validate_id(bad).is_err(), "{:?}", bad);
        }
    }
}
