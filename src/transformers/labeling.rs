//! ## Label Derivation Transformers
//!
//! This module implements transformers that derive a label column from existing features.
//!
//! Currently, the following transformer is implemented:
//!
//! - **RatioLabel:** Append a label computed as the elementwise ratio of two numeric
//!   columns. A null in either operand yields a null label for that row; the caller
//!   is expected to guard against a zero denominator by filtering beforehand.
//!
//! Errors are returned as `FeaturizerError` and results are wrapped in `FeaturizerResult`.

use crate::exceptions::{FeaturizerError, FeaturizerResult};
use crate::impl_transformer;
use datafusion::dataframe::DataFrame;
use datafusion_expr::{col, Expr};
use std::ops::Div;

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

/// Appends a label column computed as `numerator / denominator`.
pub struct RatioLabel {
    pub name: String,
    pub numerator: String,
    pub denominator: String,
}

impl RatioLabel {
    pub fn new(
        name: impl Into<String>,
        numerator: impl Into<String>,
        denominator: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            numerator: numerator.into(),
            denominator: denominator.into(),
        }
    }

    /// Stateless transformer: fit does nothing.
    pub async fn fit(&mut self, _df: &DataFrame) -> FeaturizerResult<()> {
        Ok(())
    }

    /// Transform validates both operand columns and appends the ratio column.
    pub fn transform(&self, df: DataFrame) -> FeaturizerResult<DataFrame> {
        validate_numeric_column(&df, &self.numerator)?;
        validate_numeric_column(&df, &self.denominator)?;

        // Retain all original columns and append the ratio.
        let mut exprs: Vec<Expr> = df.schema().fields().iter().map(|f| col(f.name())).collect();
        exprs.push(
            col(&self.numerator)
                .div(col(&self.denominator))
                .alias(&self.name),
        );
        df.select(exprs).map_err(FeaturizerError::DataFusionError)
    }

    // This transformer is stateless.
    fn inherent_is_stateful(&self) -> bool {
        false
    }
}

impl_transformer!(RatioLabel);
