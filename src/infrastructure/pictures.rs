use std::path::PathBuf;
use tracing::warn;

/// Loads the illustrative "friends met" picture from disk.
///
/// The picture is cosmetic: any failure to read it degrades to empty
/// bytes rather than failing the request.
#[derive(Debug, Clone)]
pub struct PictureStore {
    path: PathBuf,
}

impl PictureStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn fetch(&self) -> Vec<u8> {
        match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(error) => {
                warn!(path = %self.path.display(), %error, "could not read friends picture");
                Vec::new()
            }
        }
    }
}
