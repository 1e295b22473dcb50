//! # Taxi Featurizer
//!
//! A feature-engineering library that turns raw NYC yellow-taxi trip records
//! into model-ready features plus a `tip_fraction` label, powered by Apache
//! DataFusion.
//!
//! The crate is organized around a few small pieces:
//!
//! - [`cluster`]: provisions a sized DataFusion session, the local stand-in
//!   for a worker cluster.
//! - [`io`]: registers an anonymous S3 object store and loads trip records
//!   from CSV globs or Parquet files into a lazily-evaluated DataFrame.
//! - [`trip`]: the yellow-taxi record schema and column-name constants.
//! - [`transformers`]: composable fit/transform steps (filtering, column
//!   selection, label derivation, calendar features, casting and imputation).
//! - [`pipeline`]: the [`pipeline::Transformer`] trait and [`pipeline::Pipeline`]
//!   for chaining transformers over a lazy logical plan.
//! - [`features`]: `prep_features`, the end-to-end trip-to-features transform.
//!
//! Everything stays lazy until a terminal action such as `collect` or `show`
//! is called on the resulting DataFrame, so the engine decides how to
//! partition and parallelize the work.

pub mod cluster;
pub mod exceptions;
pub mod features;
pub mod io;
pub mod logging;
pub mod pipeline;
pub mod transformers;
pub mod trip;
