//! ## Trip Record Schema
//!
//! Column names and the CSV schema for NYC yellow-taxi trip records, plus the
//! canonical location of the public 2019 dataset.
//!
//! The CSV files on the TLC bucket carry integer-looking columns that can be
//! empty, so [`trip_schema`] declares every numeric column as a nullable
//! `Float64` and the two `tpep_*` columns as nanosecond timestamps. That way
//! missing values parse to nulls instead of failing the scan, and the
//! timestamps come out ready for calendar-feature extraction.

use arrow::datatypes::{DataType, Field, Schema, TimeUnit};

/// Pickup timestamp column.
pub const PICKUP_DATETIME: &str = "tpep_pickup_datetime";
/// Dropoff timestamp column.
pub const DROPOFF_DATETIME: &str = "tpep_dropoff_datetime";
/// Number of passengers reported by the driver.
pub const PASSENGER_COUNT: &str = "passenger_count";
/// Tip amount in dollars.
pub const TIP_AMOUNT: &str = "tip_amount";
/// Metered fare in dollars.
pub const FARE_AMOUNT: &str = "fare_amount";

/// Public bucket holding the TLC trip record files.
pub const TRIPDATA_BUCKET: &str = "nyc-tlc";
/// Region of the public TLC bucket.
pub const TRIPDATA_REGION: &str = "us-east-1";
/// Glob matching the twelve monthly CSV files for 2019.
pub const TRIPDATA_2019_GLOB: &str = "s3://nyc-tlc/trip data/yellow_tripdata_2019-*.csv";

/// Schema for the 2019 yellow-taxi CSV files.
pub fn trip_schema() -> Schema {
    let timestamp = DataType::Timestamp(TimeUnit::Nanosecond, None);
    Schema::new(vec![
        Field::new("VendorID", DataType::Float64, true),
        Field::new(PICKUP_DATETIME, timestamp.clone(), true),
        Field::new(DROPOFF_DATETIME, timestamp, true),
        Field::new(PASSENGER_COUNT, DataType::Float64, true),
        Field::new("trip_distance", DataType::Float64, true),
        Field::new("RatecodeID", DataType::Float64, true),
        Field::new("store_and_fwd_flag", DataType::Utf8, true),
        Field::new("PULocationID", DataType::Float64, true),
        Field::new("DOLocationID", DataType::Float64, true),
        Field::new("payment_type", DataType::Float64, true),
        Field::new(FARE_AMOUNT, DataType::Float64, true),
        Field::new("extra", DataType::Float64, true),
        Field::new("mta_tax", DataType::Float64, true),
        Field::new(TIP_AMOUNT, DataType::Float64, true),
        Field::new("tolls_amount", DataType::Float64, true),
        Field::new("improvement_surcharge", DataType::Float64, true),
        Field::new("total_amount", DataType::Float64, true),
        Field::new("congestion_surcharge", DataType::Float64, true),
    ])
}
