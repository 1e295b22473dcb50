//! ## Trip Featurization
//!
//! The end-to-end transform from raw trip records to model-ready feature rows.
//!
//! [`prep_features`] takes a DataFrame of yellow-taxi trip records and produces
//! a DataFrame with six features plus the `tip_fraction` label:
//!
//! 1. Keep only rows with a strictly positive fare (guards the ratio below
//!    against division by zero; bad rows are dropped, not repaired).
//! 2. Project to the four raw columns the features are derived from.
//! 3. Append `tip_fraction = tip_amount / fare_amount`.
//! 4. Append the calendar features of the pickup timestamp.
//! 5. Project to exactly the feature columns plus the label.
//! 6. Cast every column to `Float64`.
//! 7. Fill every remaining null with the sentinel `-1`.
//!
//! The cast runs before the fill so that unconvertible values become nulls and
//! then pick up the sentinel. The transform is pure: it never mutates its input
//! and the output is lazy until the caller executes it.

use crate::exceptions::FeaturizerResult;
use crate::make_pipeline;
use crate::transformers::calendar::CalendarFeatures;
use crate::transformers::filtering::PositiveValueFilter;
use crate::transformers::imputation::{CastToFloat, SentinelImputer};
use crate::transformers::labeling::RatioLabel;
use crate::transformers::selection::KeepColumns;
use crate::trip;
use datafusion::prelude::DataFrame;
use tracing::debug;

/// The raw trip-record columns the features are derived from.
pub const RAW_FEATURES: [&str; 4] = [
    trip::PICKUP_DATETIME,
    trip::PASSENGER_COUNT,
    trip::TIP_AMOUNT,
    trip::FARE_AMOUNT,
];

/// The feature columns of the output, in order.
pub const FEATURES: [&str; 6] = [
    "pickup_weekday",
    "pickup_weekofyear",
    "pickup_hour",
    "pickup_week_hour",
    "pickup_minute",
    "passenger_count",
];

/// The label column: the fraction of the fare given as a tip.
pub const LABEL: &str = "tip_fraction";

/// Placeholder substituted for any missing or unconvertible value.
pub const MISSING_SENTINEL: f64 = -1.0;

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// Generates features and the `tip_fraction` label from raw trip records.
///
/// The output carries exactly the [`FEATURES`] columns followed by [`LABEL`],
/// all as `Float64`, one row per retained trip record. Rows whose
/// `fare_amount` is zero, negative, or missing produce no output row.
pub async fn prep_features(df: &DataFrame) -> FeaturizerResult<DataFrame> {
    let mut model_columns = owned(&FEATURES);
    model_columns.push(LABEL.to_string());

    let mut pipeline = make_pipeline!(
        false,
        (
            "positive_fare",
            PositiveValueFilter::new(trip::FARE_AMOUNT)
        ),
        ("raw_columns", KeepColumns::new(owned(&RAW_FEATURES))),
        (
            "tip_fraction",
            RatioLabel::new(LABEL, trip::TIP_AMOUNT, trip::FARE_AMOUNT)
        ),
        (
            "pickup_calendar",
            CalendarFeatures::new(vec![(
                "pickup".to_string(),
                trip::PICKUP_DATETIME.to_string()
            )])
        ),
        ("model_columns", KeepColumns::new(model_columns)),
        ("to_float", CastToFloat::all()),
        ("fill_missing", SentinelImputer::all(MISSING_SENTINEL)),
    );

    debug!("preparing trip features");
    pipeline.fit_transform(df).await
}
