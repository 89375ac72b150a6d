//! Avatar service: generation and retrieval on top of a storage backend.

use std::time::Duration;

use tracing::{info, instrument};

use crate::engine::{self, AvatarMetadata, GeneratedAvatar};
use crate::error::Result;
use crate::render::{CancelToken, RenderOptions};
use crate::storage::Storage;
use crate::types::{GenerationParams, Resolution};

pub struct AvatarService<S: Storage> {
    storage: S,
    parallel: bool,
    timeout: Option<Duration>,
}

impl<S: Storage> AvatarService<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            parallel: true,
            timeout: None,
        }
    }

    /// Render the six sizes in parallel (default) or one after another.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Abandon a render that runs longer than `timeout`.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            parallel: self.parallel,
            cancel: self.timeout.map(CancelToken::with_timeout).unwrap_or_default(),
        }
    }

    /// Generate, encode, and store a new avatar.
    #[instrument(skip_all)]
    pub fn generate(&self, params: &GenerationParams) -> Result<GeneratedAvatar> {
        let avatar = engine::generate(params, &self.render_options())?;
        let location = self.storage.save(&avatar)?;
        info!(id = avatar.id(), location = %location, "stored avatar");
        Ok(avatar)
    }

    /// Fetch one size of a stored avatar as PNG, optionally filtered.
    ///
    /// `size_exponent` selects the resolution (4 = 16px ... 9 = 512px).
    #[instrument(skip(self))]
    pub fn fetch(&self, id: &str, size_exponent: u8, filter: Option<&str>) -> Result<Vec<u8>> {
        let resolution = Resolution::from_exponent(size_exponent)?;
        let bytes = self.storage.load_image(id, resolution)?;
        engine::filter_png(&bytes, filter)
    }

    pub fn metadata(&self, id: &str) -> Result<AvatarMetadata> {
        self.storage.metadata(id)
    }

    pub fn remove(&self, id: &str) -> Result<()> {
        self.storage.delete(id)?;
        info!(id, "removed avatar");
        Ok(())
    }

    pub fn exists(&self, id: &str) -> bool {
        self.storage.exists(id)
    }

    pub fn list(&self) -> Result<Vec<String>> {
        self.storage.list()
    }
}
