//! # Transformer Implementations
//!
//! The submodules contain the transformer implementations for the individual
//! steps of trip featurization.

pub mod calendar;
pub mod filtering;
pub mod imputation;
pub mod labeling;
pub mod selection;
