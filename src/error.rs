use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompressError {
    #[error("Read past the end of the source buffer")]
    OutOfBounds,
    #[error("Source image could not be decoded: {0}")]
    DecodeFailure(#[source] image::ImageError),
    #[error("Output image could not be encoded: {0}")]
    EncodeFailure(#[source] image::ImageError),

    // Logic errors
    #[error("Invalid argument ratio: must be in (0, 100]")]
    InvalidArgumentRatio,
    #[error("Invalid argument quality: must be in (0, 100]")]
    InvalidArgumentQuality,
}
