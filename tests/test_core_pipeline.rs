use std::sync::Arc;

use approx::assert_abs_diff_eq;
use arrow::array::{ArrayRef, Float64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use datafusion::datasource::MemTable;
use datafusion::prelude::{DataFrame, SessionContext};
use taxi_featurizer::exceptions::FeaturizerResult;
use taxi_featurizer::make_pipeline;
use taxi_featurizer::pipeline::{Pipeline, Transformer};
use taxi_featurizer::transformers::filtering::PositiveValueFilter;
use taxi_featurizer::transformers::imputation::SentinelImputer;
use taxi_featurizer::transformers::labeling::RatioLabel;

/// Create a DataFrame with "tip" (nullable) and "fare" columns.
async fn create_amounts_df() -> DataFrame {
    let schema = Arc::new(Schema::new(vec![
        Field::new("tip", DataType::Float64, true),
        Field::new("fare", DataType::Float64, true),
    ]));
    // Rows: a normal trip, a zero fare, and a trip with no tip recorded.
    let tip: ArrayRef = Arc::new(Float64Array::from(vec![Some(1.0), Some(2.0), None]));
    let fare: ArrayRef = Arc::new(Float64Array::from(vec![
        Some(10.0),
        Some(0.0),
        Some(4.0),
    ]));
    let batch = RecordBatch::try_new(schema.clone(), vec![tip, fare]).unwrap();
    let mem_table = MemTable::try_new(schema, vec![vec![batch]]).unwrap();
    let ctx = SessionContext::new();
    ctx.register_table("amounts", Arc::new(mem_table)).unwrap();
    ctx.table("amounts").await.unwrap()
}

#[tokio::test]
async fn test_pipeline_filters_labels_and_fills() -> FeaturizerResult<()> {
    let df = create_amounts_df().await;

    // Build the pipeline with explicitly boxed transformers.
    let mut pipeline = Pipeline::new(
        vec![
            (
                "positive_fare".to_string(),
                Box::new(PositiveValueFilter::new("fare"))
                    as Box<dyn Transformer + Send + Sync>,
            ),
            (
                "tip_fraction".to_string(),
                Box::new(RatioLabel::new("tip_fraction", "tip", "fare"))
                    as Box<dyn Transformer + Send + Sync>,
            ),
            (
                "fill_missing".to_string(),
                Box::new(SentinelImputer::all(-1.0)) as Box<dyn Transformer + Send + Sync>,
            ),
        ],
        false, // verbose off for testing
    );

    let transformed_df: DataFrame = pipeline.fit_transform(&df).await?;
    let results = transformed_df.collect().await?;
    let batch = &results[0];

    // The zero-fare row is gone; two rows survive.
    assert_eq!(batch.num_rows(), 2);

    let label = batch
        .column(batch.schema().index_of("tip_fraction")?)
        .as_any()
        .downcast_ref::<Float64Array>()
        .expect("Failed to downcast column 'tip_fraction'");

    assert_abs_diff_eq!(label.value(0), 0.1, epsilon = 1e-9);
    // The missing tip becomes a missing label, which the imputer fills.
    assert_abs_diff_eq!(label.value(1), -1.0, epsilon = 1e-9);

    Ok(())
}

#[tokio::test]
async fn test_pipeline_macro_builds_equivalent_pipeline() -> FeaturizerResult<()> {
    let df = create_amounts_df().await;

    let mut pipeline = make_pipeline!(
        false,
        ("positive_fare", PositiveValueFilter::new("fare")),
        ("tip_fraction", RatioLabel::new("tip_fraction", "tip", "fare")),
        ("fill_missing", SentinelImputer::all(-1.0)),
    );

    let transformed_df: DataFrame = pipeline.fit_transform(&df).await?;
    let results = transformed_df.collect().await?;
    let batch = &results[0];

    assert_eq!(batch.num_rows(), 2);
    let tip = batch
        .column(batch.schema().index_of("tip")?)
        .as_any()
        .downcast_ref::<Float64Array>()
        .expect("Failed to downcast column 'tip'");
    assert_abs_diff_eq!(tip.value(0), 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(tip.value(1), -1.0, epsilon = 1e-9);

    Ok(())
}

#[tokio::test]
async fn test_empty_pipeline_is_rejected() {
    let df = create_amounts_df().await;
    let mut pipeline = Pipeline::new(vec![], false);
    assert!(
        pipeline.fit(&df).await.is_err(),
        "Expected error for pipeline with no transformers"
    );
}
