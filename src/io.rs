//! ## Dataset Loading
//!
//! This module connects a provisioned session to the trip record files.
//!
//! - [`register_anonymous_s3`] attaches an unsigned (anonymous) S3 object store
//!   to the session so `s3://` paths resolve without credentials.
//! - [`load_trips`] reads a CSV glob or a Parquet file into a lazily-evaluated
//!   DataFrame. CSV scans get the declared [`crate::trip::trip_schema`], so the
//!   pickup and dropoff columns parse as timestamps and ambiguous numeric
//!   columns come out as nullable floats.
//!
//! Failures from the storage layer or the engine propagate to the caller
//! unchanged; there is no retry logic here.

use crate::exceptions::{FeaturizerError, FeaturizerResult};
use crate::trip;
use datafusion::prelude::{CsvReadOptions, DataFrame, ParquetReadOptions, SessionContext};
use object_store::aws::AmazonS3Builder;
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// Registers an anonymous S3 object store for `s3://<bucket>` paths on the session.
///
/// Requests are sent unsigned, which is all the public TLC bucket requires.
pub fn register_anonymous_s3(
    ctx: &SessionContext,
    bucket: &str,
    region: &str,
) -> FeaturizerResult<()> {
    let store = AmazonS3Builder::new()
        .with_bucket_name(bucket)
        .with_region(region)
        .with_skip_signature(true)
        .build()?;
    let url = Url::parse(&format!("s3://{}", bucket))?;
    ctx.register_object_store(&url, Arc::new(store));
    debug!(bucket, region, "registered anonymous S3 object store");
    Ok(())
}

/// Loads trip records from a CSV glob or a Parquet path into a DataFrame.
///
/// The path may be local or point at a registered object store. CSV files are
/// read with the yellow-taxi schema; Parquet files carry their own schema.
/// The returned DataFrame is lazy and nothing is fetched until it is executed.
pub async fn load_trips(ctx: &SessionContext, path: &str) -> FeaturizerResult<DataFrame> {
    debug!(path, "loading trip records");
    if path.ends_with(".parquet") {
        ctx.read_parquet(path, ParquetReadOptions::default())
            .await
            .map_err(FeaturizerError::from)
    } else if path.ends_with(".csv") {
        let schema = trip::trip_schema();
        let options = CsvReadOptions::new().schema(&schema).has_header(true);
        ctx.read_csv(path, options)
            .await
            .map_err(FeaturizerError::from)
    } else {
        Err(FeaturizerError::UnsupportedFormat(format!(
            "Cannot infer trip file format from path '{}'; expected a .csv or .parquet suffix",
            path
        )))
    }
}
