use super::error::MediaError;
use crate::config::app_config;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

/// media folder for vehicle photos
pub const VEHICLE_PHOTOS_FOLDER: &str = "vehicles";

/// media folder for user profile photos
pub const PROFILE_PICS_FOLDER: &str = "profile_pics";

/// media key of the placeholder profile photo
pub const DEFAULT_PROFILE_PIC: &str = "profile_pics/default.jpg";

/// largest allowed profile photo dimension, bigger photos are shrunk
/// in place on save
const PROFILE_PIC_MAX_SIZE: u32 = 300;

const ALLOWED_IMAGE_EXTENSIONS: [&str; 5] = ["jpe", "jpg", "jpeg", "png", "webp"];

/// Local filesystem media storage.
///
/// keys are slash separated paths relative to the root folder, eg:
/// `vehicles/photo_02-10-2023_10:20:59.jpeg`, and are what gets stored
/// on the `photo` columns.
pub struct MediaStorage {
    root: PathBuf,
}

impl MediaStorage {
    pub fn new(root: impl Into<PathBuf>) -> MediaStorage {
        MediaStorage { root: root.into() }
    }

    /// storage rooted at the configured media directory
    pub fn from_config() -> MediaStorage {
        MediaStorage::new(&app_config().media_root)
    }

    /// absolute path of a media key
    pub fn path_of(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }

    pub async fn store(
        &self,
        folder: &str,
        filename: &str,
        contents: &[u8],
    ) -> Result<String, MediaError> {
        let dir = self.root.join(folder);
        fs::create_dir_all(&dir).await?;

        let path = dir.join(filename);
        fs::write(&path, contents).await?;

        info!("[MEDIA] stored {}", path.display());

        Ok(format!("{}/{}", folder, filename))
    }

    pub async fn delete(&self, key: &str) -> Result<(), MediaError> {
        fs::remove_file(self.path_of(key)).await?;

        Ok(())
    }

    /// Shrinks the stored profile photo in place so both dimensions fit
    /// within 300x300, keeping the aspect ratio. photos already within
    /// the limit are left untouched.
    ///
    /// blocking: decodes and re encodes the file on the calling thread
    pub fn normalize_profile_photo(&self, key: &str) -> Result<(), MediaError> {
        shrink_to_fit(
            &self.path_of(key),
            PROFILE_PIC_MAX_SIZE,
            PROFILE_PIC_MAX_SIZE,
        )
    }
}

/// creates a filename for an uploaded image with the following format:
///
/// `<prefix>_<now_timestamp>.<uploaded_file_extension>`
///
/// eg: photo_02-10-2023_10:20:59.jpeg
pub fn filename_from_upload(prefix: &str, original_filename: &str) -> Result<String, MediaError> {
    let (_, extension) = original_filename
        .rsplit_once('.')
        .ok_or_else(|| MediaError::InvalidFilename(String::from(original_filename)))?;

    if !ALLOWED_IMAGE_EXTENSIONS.contains(&extension) {
        return Err(MediaError::InvalidFilename(String::from(original_filename)));
    }

    let timestamp = chrono::Utc::now().format("%d-%m-%Y_%H:%M:%S");

    Ok(format!("{}_{}.{}", prefix, timestamp, extension))
}

fn shrink_to_fit(path: &Path, max_width: u32, max_height: u32) -> Result<(), MediaError> {
    let (width, height) = image::image_dimensions(path)?;

    if width <= max_width && height <= max_height {
        return Ok(());
    }

    let resized = image::open(path)?.thumbnail(max_width, max_height);
    resized.save(path)?;

    info!(
        "[MEDIA] shrunk {} from {}x{} to {}x{}",
        path.display(),
        width,
        height,
        resized.width(),
        resized.height()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, RgbImage};

    fn write_test_image(path: &Path, width: u32, height: u32) {
        DynamicImage::ImageRgb8(RgbImage::new(width, height))
            .save(path)
            .unwrap();
    }

    #[test]
    fn oversized_photos_are_shrunk_preserving_aspect_ratio() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.png");

        write_test_image(&path, 600, 300);
        shrink_to_fit(&path, 300, 300).unwrap();

        assert_eq!(image::image_dimensions(&path).unwrap(), (300, 150));
    }

    #[test]
    fn photos_within_the_limit_are_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.png");

        write_test_image(&path, 200, 200);
        shrink_to_fit(&path, 300, 300).unwrap();

        assert_eq!(image::image_dimensions(&path).unwrap(), (200, 200));
    }

    #[test]
    fn files_that_are_not_images_fail_to_shrink() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.png");

        std::fs::write(&path, b"definitely not a png").unwrap();

        assert!(shrink_to_fit(&path, 300, 300).is_err());
    }

    #[tokio::test]
    async fn stored_files_land_under_their_folder_namespace() {
        let dir = tempfile::tempdir().unwrap();
        let media = MediaStorage::new(dir.path());

        let key = media
            .store(PROFILE_PICS_FOLDER, "me.jpg", b"bytes")
            .await
            .unwrap();

        assert_eq!(key, "profile_pics/me.jpg");
        assert!(media.path_of(&key).exists());
    }

    #[test]
    fn upload_filenames_keep_the_original_extension() {
        let name = filename_from_upload("photo", "car.jpeg").unwrap();

        assert!(name.starts_with("photo_"));
        assert!(name.ends_with(".jpeg"));

        assert!(filename_from_upload("photo", "report.pdf").is_err());
        assert!(filename_from_upload("photo", "no-extension").is_err());
    }
}
