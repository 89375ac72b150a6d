//! Local filesystem storage.
//!
//! Layout: `<root>/<id>/<size>.png` for each canonical size, plus
//! `<root>/<id>/meta.json`.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::engine::{AvatarMetadata, EncodedImages, GeneratedAvatar};
use crate::error::{AvatarError, Result};
use crate::types::Resolution;

use super::{validate_id, Storage};

/// Metadata file written alongside the images.
pub const METADATA_FILENAME: &str = "meta.json";

#[derive(Debug, Clone)]
pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn avatar_dir(&self, id: &str) -> Result<PathBuf> {
        validate_id(id)?;
        Ok(self.root.join(id))
    }

    fn image_path(dir: &Path, resolution: Resolution) -> PathBuf {
        dir.join(format!("{}.png", resolution.pixels()))
    }

    /// Directory for an id that must already exist.
    fn existing_dir(&self, id: &str) -> Result<PathBuf> {
        let dir = self.avatar_dir(id)?;
        if dir.join(METADATA_FILENAME).is_file() {
            Ok(dir)
        } else {
            Err(AvatarError::NotFound { id: id.to_string() })
        }
    }

    fn write_all(dir: &Path, avatar: &GeneratedAvatar) -> Result<()> {
        fs::create_dir_all(dir).map_err(|e| io_error(dir, "Failed to create avatar directory", e))?;

        for resolution in Resolution::ALL {
            let bytes = avatar.image(resolution).ok_or_else(|| {
                AvatarError::validation(format!("Avatar {} has no {} image", avatar.id(), resolution))
            })?;
            let path = Self::image_path(dir, resolution);
            fs::write(&path, bytes).map_err(|e| io_error(&path, "Failed to write image", e))?;
        }

        // Metadata last: its presence marks the avatar as complete.
        let path = dir.join(METADATA_FILENAME);
        let json = serde_json::to_string_pretty(&avatar.metadata).map_err(|e| AvatarError::Parse {
            message: format!("Failed to serialize metadata: {}", e),
            help: None,
        })?;
        fs::write(&path, json).map_err(|e| io_error(&path, "Failed to write metadata", e))?;

        Ok(())
    }
}

impl Storage for LocalStorage {
    fn save(&self, avatar: &GeneratedAvatar) -> Result<String> {
        let dir = self.avatar_dir(avatar.id())?;

        if let Err(e) = Self::write_all(&dir, avatar) {
            if let Err(cleanup) = fs::remove_dir_all(&dir) {
                warn!(path = %dir.display(), error = %cleanup, "failed to remove partial avatar");
            }
            return Err(e);
        }

        debug!(id = avatar.id(), path = %dir.display(), "saved avatar");
        Ok(dir.display().to_string())
    }

    fn load(&self, id: &str) -> Result<GeneratedAvatar> {
        let metadata = self.metadata(id)?;
        let mut images = EncodedImages::new();
        for resolution in Resolution::ALL {
            images.insert(resolution.pixels(), self.load_image(id, resolution)?);
        }
        Ok(GeneratedAvatar { metadata, images })
    }

    fn load_image(&self, id: &str, resolution: Resolution) -> Result<Vec<u8>> {
        let dir = self.existing_dir(id)?;
        let path = Self::image_path(&dir, resolution);
        fs::read(&path).map_err(|e| io_error(&path, "Failed to read image", e))
    }

    fn metadata(&self, id: &str) -> Result<AvatarMetadata> {
        let path = self.existing_dir(id)?.join(METADATA_FILENAME);
        let content =
            fs::read_to_string(&path).map_err(|e| io_error(&path, "Failed to read metadata", e))?;

        serde_json::from_str(&content).map_err(|e| AvatarError::Parse {
            message: format!("Invalid metadata in {}: {}", path.display(), e),
            help: None,
        })
    }

    fn delete(&self, id: &str) -> Result<()> {
        let dir = self.existing_dir(id)?;
        fs::remove_dir_all(&dir).map_err(|e| io_error(&dir, "Failed to delete avatar", e))?;
        debug!(id, "deleted avatar");
        Ok(())
    }

    fn exists(&self, id: &str) -> bool {
        self.existing_dir(id).is_ok()
    }

    fn list(&self) -> Result<Vec<String>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut ids = Vec::new();
        for entry in WalkDir::new(&self.root).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| AvatarError::Io {
                path: self.root.clone(),
                message: e.to_string(),
            })?;

            if !entry.file_type().is_dir() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if self.exists(name) {
                    ids.push(name.to_string());
                }
            }
        }

        ids.sort();
        Ok(ids)
    }
}

fn io_error(path: &Path, context: &str, e: std::io::Error) -> AvatarError {
    AvatarError::Io {
        path: path.to_path_buf(),
        message: format!("{}: {}", context, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::generate;
    use crate::render::RenderOptions;
    use crate::types::GenerationParams;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn avatar(seed: &str) -> GeneratedAvatar {
        generate(
            &GenerationParams::new().with_seed(seed),
            &RenderOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::new(dir.path());
        let avatar = avatar("save");

        let location = storage.save(&avatar).unwrap();
        assert!(location.ends_with(avatar.id()));
        assert!(storage.exists(avatar.id()));

        let loaded = storage.load(avatar.id()).unwrap();
        assert_eq!(loaded.metadata, avatar.metadata);
        assert!(loaded.images == avatar.images);
    }

    #[test]
    fn test_layout_on_disk() {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::new(dir.path());
        let avatar = avatar("layout");
        storage.save(&avatar).unwrap();

        let avatar_dir = dir.path().join(avatar.id());
        for size in [16, 32, 64, 128, 256, 512] {
            assert!(avatar_dir.join(format!("{}.png", size)).is_file());
        }
        assert!(avatar_dir.join(METADATA_FILENAME).is_file());
    }

    #[test]
    fn test_load_single_size() {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::new(dir.path());
        let avatar = avatar("single");
        storage.save(&avatar).unwrap();

        let bytes = storage.load_image(avatar.id(), Resolution::ALL[1]).unwrap();
        let img = image::load_from_memory(&bytes).unwrap();
        assert_eq!(img.width(), 32);
    }

    #[test]
    fn test_missing_avatar() {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::new(dir.path());

        assert!(!storage.exists("nope"));
        assert!(matches!(storage.load("nope"), Err(AvatarError::NotFound { .. })));
        assert!(matches!(storage.delete("nope"), Err(AvatarError::NotFound { .. })));
    }

    #[test]
    fn test_save_incomplete_avatar_leaves_nothing() {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::new(dir.path());
        let mut avatar = avatar("partial");
        avatar.images.remove(&64);

        let err = storage.save(&avatar).unwrap_err();
        assert!(err.is_validation());
        assert!(!storage.exists(avatar.id()));
        assert!(!dir.path().join(avatar.id()).exists());
    }

    #[test]
    fn test_delete() {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::new(dir.path());
        let avatar = avatar("delete");
        storage.save(&avatar).unwrap();

        storage.delete(avatar.id()).unwrap();
        assert!(!storage.exists(avatar.id()));
        assert!(!dir.path().join(avatar.id()).exists());
    }

    #[test]
    fn test_list_sorted_and_skips_incomplete() {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::new(dir.path());
        let a = avatar("a");
        let b = avatar("b");
        storage.save(&a).unwrap();
        storage.save(&b).unwrap();
        fs::create_dir_all(dir.path().join("half-written")).unwrap();
        fs::write(dir.path().join("stray.txt"), "x").unwrap();

        let mut expected = vec![a.id().to_string(), b.id().to_string()];
        expected.sort();
        assert_eq!(storage.list().unwrap(), expected);
    }

    #[test]
    fn test_list_missing_root() {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::new(dir.path().join("not-created"));
        assert!(storage.list().unwrap().is_empty());
    }

    #[test]
    fn test_rejects_traversal_ids() {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::new(dir.path());
        assert!(storage.load_image("../x", Resolution::LARGEST).unwrap_err().is_validation());
    }

    #[test]
    fn test_save_without_all_sizes_leaves_nothing() {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::new(dir.path());
        let mut avatar = avatar("partial");
        avatar.images.remove(&512);

        assert!(storage.save(&avatar).is_err());
        assert!(!dir.path().join(avatar.id()).exists());
    }
}
