//! ## Custom Errors for Taxi Featurizer
//!
//! This module defines the error types used throughout the library.
//! It uses the `thiserror` crate to derive the `Error` trait, and the
//! `FeaturizerError` enum covers the failure scenarios the library can hit:
//! engine and storage errors are wrapped, while parameter and schema problems
//! get their own variants.
//!
//! The `FeaturizerResult` type alias is the result type returned by all
//! fallible operations in the library.
//!
//! ### Example
//!
//! ```rust
//! use taxi_featurizer::exceptions::{FeaturizerError, FeaturizerResult};
//!
//! fn load_data() -> FeaturizerResult<()> {
//!     Err(FeaturizerError::UnsupportedFormat("trip log".into()))
//! }
//! ```

use thiserror::Error;

/// Errors specific to the Taxi Featurizer library.
#[derive(Debug, Error)]
pub enum FeaturizerError {
    /// Wraps underlying I/O errors.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Wraps errors from DataFusion.
    #[error("DataFusion error: {0}")]
    DataFusionError(#[from] datafusion::error::DataFusionError),

    /// Wraps errors from Arrow.
    #[error("Arrow error: {0}")]
    ArrowError(#[from] arrow::error::ArrowError),

    /// Wraps errors from Parquet.
    #[error("Parquet error: {0}")]
    ParquetError(#[from] parquet::errors::ParquetError),

    /// Wraps errors from the object store layer (e.g. S3).
    #[error("Object store error: {0}")]
    ObjectStoreError(#[from] object_store::Error),

    /// Indicates that a storage URL could not be parsed.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    /// Indicates that an invalid parameter was provided (e.g. unsupported value or incorrect data type).
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Indicates that the provided data format is unsupported (e.g. unknown file format).
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Indicates that the specified column does not exist in the DataFrame.
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// Indicates the transform method was called before calling fit for a stateful transformer.
    #[error("Transform called before fit for stateful transformer")]
    FitNotCalled,
}

/// A convenient result type for Taxi Featurizer operations.
pub type FeaturizerResult<T> = std::result::Result<T, FeaturizerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error() {
        // Create a simple I/O error.
        let io_err = io::Error::new(io::ErrorKind::Other, "test io error");
        let err: FeaturizerError = io_err.into();
        let err_msg = format!("{}", err);
        assert!(err_msg.contains("I/O error:"));
        assert!(err_msg.contains("test io error"));
    }

    #[test]
    fn test_datafusion_error() {
        // Create a DataFusion error.
        let df_err = datafusion::error::DataFusionError::Plan("test plan error".into());
        let err: FeaturizerError = df_err.into();
        let err_msg = format!("{}", err);
        assert!(err_msg.contains("DataFusion error:"));
        assert!(err_msg.contains("test plan error"));
    }

    #[test]
    fn test_arrow_error() {
        // Create an Arrow error.
        let arrow_err = arrow::error::ArrowError::ComputeError("test compute error".into());
        let err: FeaturizerError = arrow_err.into();
        let err_msg = format!("{}", err);
        assert!(err_msg.contains("Arrow error:"));
        assert!(err_msg.contains("test compute error"));
    }

    #[test]
    fn test_invalid_parameter_error() {
        let err = FeaturizerError::InvalidParameter("bad param".into());
        let err_msg = format!("{}", err);
        assert!(err_msg.contains("Invalid parameter:"));
        assert!(err_msg.contains("bad param"));
    }

    #[test]
    fn test_unsupported_format_error() {
        let err = FeaturizerError::UnsupportedFormat("unknown format".into());
        let err_msg = format!("{}", err);
        assert!(err_msg.contains("Unsupported format:"));
        assert!(err_msg.contains("unknown format"));
    }

    #[test]
    fn test_missing_column_error() {
        let err = FeaturizerError::MissingColumn("missing column".into());
        let err_msg = format!("{}", err);
        assert!(err_msg.contains("Missing column:"));
        assert!(err_msg.contains("missing column"));
    }

    #[test]
    fn test_fit_not_called_error() {
        let err = FeaturizerError::FitNotCalled;
        let err_msg = format!("{}", err);
        assert!(err_msg.contains("Transform called before fit for stateful transformer"));
    }
}
