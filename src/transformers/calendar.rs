//! ## Calendar Feature Transformers
//!
//! This module implements transformers for extracting calendar features from
//! timestamp columns.
//!
//! Currently, the following transformer is implemented:
//!
//! - **CalendarFeatures:** For each (prefix, column) pair, appends
//!   `<prefix>_weekday`, `<prefix>_weekofyear`, `<prefix>_hour`,
//!   `<prefix>_week_hour`, and `<prefix>_minute`, all as `Float64`.
//!
//! The weekday uses the Monday = 0 through Sunday = 6 convention and the week
//! of year is the ISO week number. The week-hour is the composite
//! `weekday * 24 + hour`, giving each hour of the week its own index in
//! `[0, 167]`. Timestamps are used as-is; no timezone conversion is performed.
//!
//! Errors are returned as `FeaturizerError` and results are wrapped in `FeaturizerResult`.

use crate::exceptions::{FeaturizerError, FeaturizerResult};
use crate::impl_transformer;
use datafusion::arrow::datatypes::DataType;
use datafusion::dataframe::DataFrame;
use datafusion::logical_expr::{Case as DFCase, Expr};
use datafusion_expr::{cast, col, lit};
use datafusion_functions::datetime::date_part;
use std::ops::{Add, Mul, Sub};

/// Validates that a column exists and is of a datetime type (Timestamp, Date32, or Date64).
fn validate_datetime_column(df: &DataFrame, col_name: &str) -> FeaturizerResult<()> {
    let field = df.schema().field_with_name(None, col_name).map_err(|_| {
        FeaturizerError::MissingColumn(format!("Column '{}' not found", col_name))
    })?;
    match field.data_type() {
        DataType::Timestamp(_, _) | DataType::Date32 | DataType::Date64 => Ok(()),
        dt => Err(FeaturizerError::InvalidParameter(format!(
            "Column '{}' must be a datetime type (Timestamp, Date32, or Date64), but found {:?}",
            col_name, dt
        ))),
    }
}

/// Extracts the named part of a datetime expression as `Float64`.
fn part_expr(expr: Expr, part: &str) -> Expr {
    cast(date_part().call(vec![lit(part), expr]), DataType::Float64)
}

/// Day of week with Monday = 0 and Sunday = 6.
/// `date_part('dow')` counts from Sunday = 0, so the index is rotated.
fn weekday_expr(expr: Expr) -> Expr {
    let dow = part_expr(expr, "dow");
    Expr::Case(DFCase {
        expr: None,
        when_then_expr: vec![(
            Box::new(dow.clone().eq(lit(0.0))),
            Box::new(lit(6.0)),
        )],
        else_expr: Some(Box::new(dow.sub(lit(1.0)))),
    })
}

/// Extracts calendar features from timestamp columns.
/// For each (prefix, column) pair in `self.columns`, it adds the following new
/// features: `<prefix>_weekday`, `<prefix>_weekofyear`, `<prefix>_hour`,
/// `<prefix>_week_hour`, and `<prefix>_minute`.
pub struct CalendarFeatures {
    pub columns: Vec<(String, String)>,
}

impl CalendarFeatures {
    pub fn new(columns: Vec<(String, String)>) -> Self {
        Self { columns }
    }

    /// Stateless transformer: fit does nothing.
    pub async fn fit(&mut self, _df: &DataFrame) -> FeaturizerResult<()> {
        Ok(())
    }

    /// Transform validates that each source column exists and is a datetime type,
    /// then returns a new DataFrame with the calendar features appended.
    pub fn transform(&self, df: DataFrame) -> FeaturizerResult<DataFrame> {
        for (_, col_name) in &self.columns {
            validate_datetime_column(&df, col_name)?;
        }
        // Retain all original columns.
        let mut exprs: Vec<Expr> = df.schema().fields().iter().map(|f| col(f.name())).collect();
        for (prefix, col_name) in &self.columns {
            let base = col(col_name);
            let weekday = weekday_expr(base.clone());
            let weekofyear = part_expr(base.clone(), "week");
            let hour = part_expr(base.clone(), "hour");
            let week_hour = weekday.clone().mul(lit(24.0)).add(hour.clone());
            let minute = part_expr(base, "minute");

            exprs.push(weekday.alias(format!("{}_weekday", prefix)));
            exprs.push(weekofyear.alias(format!("{}_weekofyear", prefix)));
            exprs.push(hour.alias(format!("{}_hour", prefix)));
            exprs.push(week_hour.alias(format!("{}_week_hour", prefix)));
            exprs.push(minute.alias(format!("{}_minute", prefix)));
        }
        df.select(exprs).map_err(FeaturizerError::DataFusionError)
    }

    // This transformer is stateless.
    fn inherent_is_stateful(&self) -> bool {
        false
    }
}

impl_transformer!(CalendarFeatures);
