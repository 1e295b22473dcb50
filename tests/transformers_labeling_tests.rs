use approx::assert_abs_diff_eq;
use arrow::array::{Array, ArrayRef, Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use datafusion::datasource::MemTable;
use datafusion::prelude::*;
use std::sync::Arc;
use taxi_featurizer::transformers::labeling::RatioLabel;

/// Create a DataFrame with "tip" (nullable) and "fare" columns.
async fn create_amounts_df() -> DataFrame {
    let schema = Arc::new(Schema::new(vec![
        Field::new("tip", DataType::Float64, true),
        Field::new("fare", DataType::Float64, false),
    ]));
    let tip: ArrayRef = Arc::new(Float64Array::from(vec![Some(1.0), None, Some(3.0)]));
    let fare: ArrayRef = Arc::new(Float64Array::from(vec![10.0, 5.0, 6.0]));
    let batch = RecordBatch::try_new(schema.clone(), vec![tip, fare]).unwrap();
    let mem_table = MemTable::try_new(schema, vec![vec![batch]]).unwrap();
    let ctx = SessionContext::new();
    ctx.register_table("amounts", Arc::new(mem_table)).unwrap();
    ctx.table("amounts").await.unwrap()
}

#[tokio::test]
async fn test_ratio_label_appends_elementwise_ratio() {
    let df = create_amounts_df().await;
    let mut transformer = RatioLabel::new("tip_fraction", "tip", "fare");
    transformer.fit(&df).await.unwrap();
    let transformed_df = transformer.transform(df).unwrap();
    let batches = transformed_df.collect().await.unwrap();
    let batch = &batches[0];

    // Original columns retained, label appended.
    assert_eq!(batch.num_columns(), 3);

    let label = batch
        .column(batch.schema().index_of("tip_fraction").unwrap())
        .as_any()
        .downcast_ref::<Float64Array>()
        .unwrap();

    assert_abs_diff_eq!(label.value(0), 0.1, epsilon = 1e-9);
    assert!(label.is_null(1), "Null numerator must yield a null label");
    assert_abs_diff_eq!(label.value(2), 0.5, epsilon = 1e-9);
}

#[tokio::test]
async fn test_ratio_label_missing_column() {
    let df = create_amounts_df().await;
    let transformer = RatioLabel::new("tip_fraction", "nonexistent", "fare");
    assert!(
        transformer.transform(df).is_err(),
        "Expected error for missing numerator column"
    );
}

#[tokio::test]
async fn test_ratio_label_non_numeric_column() {
    let schema = Arc::new(Schema::new(vec![
        Field::new("tip", DataType::Utf8, false),
        Field::new("fare", DataType::Float64, false),
    ]));
    let tip: ArrayRef = Arc::new(StringArray::from(vec!["1.0", "2.0"]));
    let fare: ArrayRef = Arc::new(Float64Array::from(vec![10.0, 20.0]));
    let batch = RecordBatch::try_new(schema.clone(), vec![tip, fare]).unwrap();
    let mem_table = MemTable::try_new(schema, vec![vec![batch]]).unwrap();
    let ctx = SessionContext::new();
    ctx.register_table("amounts", Arc::new(mem_table)).unwrap();
    let df = ctx.table("amounts").await.unwrap();

    let transformer = RatioLabel::new("tip_fraction", "tip", "fare");
    assert!(
        transformer.transform(df).is_err(),
        "Expected error for non-numeric numerator column"
    );
}
