//! ## Column Selection Transformers
//!
//! This module implements transformers that change which columns a DataFrame carries.
//!
//! Currently, the following transformer is implemented:
//!
//! - **KeepColumns:** Project the DataFrame to exactly the named columns, in the
//!   given order, dropping everything else.
//!
//! Errors are returned as `FeaturizerError` and results are wrapped in `FeaturizerResult`.

use crate::exceptions::{FeaturizerError, FeaturizerResult};
use crate::impl_transformer;
use datafusion::dataframe::DataFrame;
use datafusion_expr::{col, Expr};

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

/// Projects the DataFrame to exactly `self.columns`, in order.
pub struct KeepColumns {
    pub columns: Vec<String>,
}

impl KeepColumns {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    /// Validates that the column list is not empty.
    pub async fn fit(&mut self, _df: &DataFrame) -> FeaturizerResult<()> {
        if self.columns.is_empty() {
            return Err(FeaturizerError::InvalidParameter(
                "KeepColumns requires at least one column".to_string(),
            ));
        }
        Ok(())
    }

    /// Transform validates that each named column exists and projects to them.
    pub fn transform(&self, df: DataFrame) -> FeaturizerResult<DataFrame> {
        validate_columns(&df, &self.columns)?;
        let exprs: Vec<Expr> = self.columns.iter().map(|name| col(name)).collect();
        df.select(exprs).map_err(FeaturizerError::DataFusionError)
    }

    // This transformer is stateless.
    fn inherent_is_stateful(&self) -> bool {
        false
    }
}

impl_transformer!(KeepColumns);
