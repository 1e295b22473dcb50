//! ## Casting and Imputation Transformers
//!
//! This module implements transformers for coercing columns to floats and for
//! dealing with missing values.
//!
//! Currently, the following transformers are implemented:
//!
//! - **CastToFloat:** Casts columns to `Float64` using a lossy try-cast, so any
//!   value that cannot be converted becomes a null instead of raising an error.
//! - **SentinelImputer:** Replaces missing values in columns with a fixed
//!   sentinel number.
//!
//! Both transformers accept an explicit column list or apply to every column in
//! the DataFrame. Run `CastToFloat` before `SentinelImputer` when both are used:
//! casting first turns unconvertible values into nulls, which the sentinel fill
//! then covers.
//!
//! Errors are returned as `FeaturizerError` and results are wrapped in `FeaturizerResult`.

use crate::exceptions::{FeaturizerError, FeaturizerResult};
use crate::impl_transformer;
use datafusion::arrow::datatypes::DataType;
use datafusion::dataframe::DataFrame;
use datafusion::logical_expr::{col, lit, not, try_cast, Case as DFCase, Expr};

/// Validates that every column in `target_cols` exists in the DataFrame.
fn validate_columns(df: &DataFrame, target_cols: &[String]) -> FeaturizerResult<()> {
    let schema = df.schema();
    for col_name in target_cols {
        if schema.field_with_name(None, col_name).is_err() {
            return Err(FeaturizerError::MissingColumn(format!(
                "Column '{}' not found in DataFrame",
                col_name
            )));
        }
    }
    Ok(())
}

/// Constructs an expression equivalent to SQL COALESCE(col, fallback).
/// This is implemented as a CASE expression: if `col` is not null then return it, otherwise return `fallback`.
fn coalesce_expr_for(name: &str, fallback: Expr) -> Expr {
    Expr::Case(DFCase {
        expr: None,
        when_then_expr: vec![(Box::new(not(col(name).is_null())), Box::new(col(name)))],
        else_expr: Some(Box::new(fallback)),
    })
}

/// Resolves an optional target list to concrete column names: the given list,
/// or every column in the DataFrame when none was given.
fn resolve_targets(df: &DataFrame, columns: &Option<Vec<String>>) -> Vec<String> {
    if let Some(cols) = columns {
        cols.clone()
    } else {
        df.schema()
            .fields()
            .iter()
            .map(|f| f.name().to_string())
            .collect()
    }
}

/// Casts columns to `Float64`, turning unconvertible values into nulls.
pub struct CastToFloat {
    /// Optional list of column names to cast. If None, all columns are cast.
    pub columns: Option<Vec<String>>,
}

impl CastToFloat {
    /// Create a transformer that casts only the specified columns.
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns: Some(columns),
        }
    }

    /// Create a transformer that casts every column.
    pub fn all() -> Self {
        Self { columns: None }
    }

    /// Validates that any explicitly targeted columns exist.
    pub async fn fit(&mut self, df: &DataFrame) -> FeaturizerResult<()> {
        if let Some(cols) = &self.columns {
            validate_columns(df, cols)?;
        }
        Ok(())
    }

    /// Returns a new DataFrame where each targeted column is try-cast to `Float64`.
    pub fn transform(&self, df: DataFrame) -> FeaturizerResult<DataFrame> {
        if let Some(cols) = &self.columns {
            validate_columns(&df, cols)?;
        }
        let targets = resolve_targets(&df, &self.columns);
        let exprs: Vec<Expr> = df
            .schema()
            .fields()
            .iter()
            .map(|field| {
                let name = field.name();
                if targets.contains(name) {
                    try_cast(col(name), DataType::Float64).alias(name)
                } else {
                    col(name)
                }
            })
            .collect();
        df.select(exprs).map_err(FeaturizerError::from)
    }

    // This transformer is stateless.
    fn inherent_is_stateful(&self) -> bool {
        false
    }
}

/// Replaces missing values with a fixed sentinel number.
pub struct SentinelImputer {
    /// Optional list of column names to fill. If None, all columns are filled.
    pub columns: Option<Vec<String>>,
    /// The value substituted for every null.
    pub sentinel: f64,
}

impl SentinelImputer {
    /// Create an imputer that fills only the specified columns.
    pub fn new(columns: Vec<String>, sentinel: f64) -> Self {
        Self {
            columns: Some(columns),
            sentinel,
        }
    }

    /// Create an imputer that fills every column.
    pub fn all(sentinel: f64) -> Self {
        Self {
            columns: None,
            sentinel,
        }
    }

    /// Validates that any explicitly targeted columns exist and that the sentinel is finite.
    pub async fn fit(&mut self, df: &DataFrame) -> FeaturizerResult<()> {
        if let Some(cols) = &self.columns {
            validate_columns(df, cols)?;
        }
        if !self.sentinel.is_finite() {
            return Err(FeaturizerError::InvalidParameter(format!(
                "Sentinel {} must be finite",
                self.sentinel
            )));
        }
        Ok(())
    }

    /// Returns a new DataFrame where, for each targeted column, missing values are
    /// replaced with the sentinel.
    pub fn transform(&self, df: DataFrame) -> FeaturizerResult<DataFrame> {
        if let Some(cols) = &self.columns {
            validate_columns(&df, cols)?;
        }
        let targets = resolve_targets(&df, &self.columns);
        let exprs: Vec<Expr> = df
            .schema()
            .fields()
            .iter()
            .map(|field| {
                let name = field.name();
                if targets.contains(name) {
                    coalesce_expr_for(name, lit(self.sentinel)).alias(name)
                } else {
                    col(name)
                }
            })
            .collect();
        df.select(exprs).map_err(FeaturizerError::from)
    }

    // This transformer is stateless.
    fn inherent_is_stateful(&self) -> bool {
        false
    }
}

impl_transformer!(CastToFloat);
impl_transformer!(SentinelImputer);
