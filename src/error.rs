use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("degenerate pose: body height resolves to zero pixels")]
    DegeneratePose,

    #[error("invalid calibration input: reference pixel height must be positive")]
    InvalidCalibrationInput,

    #[error("unsupported calibration mode: {0:?}")]
    UnsupportedCalibrationMode(String),

    #[error("insufficient landmark data: full body not visible or scale invalid")]
    InsufficientLandmarkData,
}

pub type Result<T> = std::result::Result<T, Error>;
