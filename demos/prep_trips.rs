// Run `cargo run --example prep_trips -- <path-or-glob>` to featurize a local
// CSV or Parquet file. With no argument it reads the full 2019 yellow-taxi
// dataset from the public nyc-tlc S3 bucket (network access required).

use std::error::Error;
use taxi_featurizer::{cluster, features, io, trip};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| trip::TRIPDATA_2019_GLOB.to_string());

    // Size the session like the small cluster the workflow was designed for.
    let ctx = cluster::provision(&cluster::ClusterSpec::default())?;
    if path.starts_with("s3://") {
        io::register_anonymous_s3(&ctx, trip::TRIPDATA_BUCKET, trip::TRIPDATA_REGION)?;
    }

    let trips = io::load_trips(&ctx, &path).await?;
    let feat = features::prep_features(&trips).await?;

    // Show the first 5 feature rows.
    feat.limit(0, Some(5))?.show().await?;

    Ok(())
}
