use std::{error, fmt, io};

/// Wrapper for media storage errors.
///
/// photo handling has no graceful fallback: a file that cannot be
/// written or decoded fails the whole operation.
#[derive(Debug)]
pub enum MediaError {
    Io(io::Error),
    Image(image::ImageError),
    /// the uploaded filename had no allowed image extension
    InvalidFilename(String),
}

impl From<io::Error> for MediaError {
    fn from(err: io::Error) -> Self {
        MediaError::Io(err)
    }
}

impl From<image::ImageError> for MediaError {
    fn from(err: image::ImageError) -> Self {
        MediaError::Image(err)
    }
}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaError::Io(err) => write!(f, "media file error: {}", err),
            MediaError::Image(err) => write!(f, "image error: {}", err),
            MediaError::InvalidFilename(name) => write!(f, "invalid image filename: {}", name),
        }
    }
}

impl error::Error for MediaError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            MediaError::Io(err) => Some(err),
            MediaError::Image(err) => Some(err),
            MediaError::InvalidFilename(_) => None,
        }
    }
}
