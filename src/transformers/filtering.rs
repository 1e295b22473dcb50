//! ## Row Filtering Transformers
//!
//! This module implements transformers that drop rows from the DataFrame.
//!
//! Currently, the following transformer is implemented:
//!
//! - **PositiveValueFilter:** Retain only rows where a numeric column is strictly
//!   positive. Rows where the column is zero, negative, or null are dropped.
//!
//! Errors are returned as `FeaturizerError` and results are wrapped in `FeaturizerResult`.

use crate::exceptions::{FeaturizerError, FeaturizerResult};
use crate::impl_transformer;
use datafusion::dataframe::DataFrame;
use datafusion_expr::{col, lit};

/// Validates that a column exists and is of a numeric type.
fn validate_numeric_column(df: &DataFrame, col_name: &str) -> FeaturizerResult<()> {
    let field = df.schema().field_with_name(None, col_name).map_err(|_| {
        FeaturizerError::MissingColumn(format!("Column '{}' not found", col_name))
    })?;
    if field.data_type().is_numeric() {
        Ok(())
    } else {
        Err(FeaturizerError::InvalidParameter(format!(
            "Column '{}' must be numeric, but found {:?}",
            col_name,
            field.data_type()
        )))
    }
}

/// Retains only rows where `self.column` is strictly positive.
///
/// A null in the column fails the comparison, so rows with a missing value are
/// dropped along with the non-positive ones.
pub struct PositiveValueFilter {
    pub column: String,
}

impl PositiveValueFilter {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
        }
    }

    /// Stateless transformer: fit does nothing.
    pub async fn fit(&mut self, _df: &DataFrame) -> FeaturizerResult<()> {
        Ok(())
    }

    /// Transform validates the target column and applies the `> 0` filter.
    pub fn transform(&self, df: DataFrame) -> FeaturizerResult<DataFrame> {
        validate_numeric_column(&df, &self.column)?;
        df.filter(col(&self.column).gt(lit(0.0)))
            .map_err(FeaturizerError::DataFusionError)
    }

    // This transformer is stateless.
    fn inherent_is_stateful(&self) -> bool {
        false
    }
}

impl_transformer!(PositiveValueFilter);
