//! ## Session Provisioning
//!
//! This module provisions the execution engine the featurizer runs on.
//! A [`ClusterSpec`] describes the compute the caller wants, in the same terms a
//! distributed cluster would be requested (worker count, threads per worker, and
//! an optional memory budget), and [`provision`] turns it into a configured
//! DataFusion `SessionContext`.
//!
//! The session handle is returned to the caller and passed explicitly into the
//! load and transform steps; nothing is stored in module-level globals.
//! With an in-process engine every "worker" is ready as soon as the context is
//! built, so provisioning either succeeds immediately or fails with an error.

use crate::exceptions::{FeaturizerError, FeaturizerResult};
use datafusion::execution::runtime_env::RuntimeEnvBuilder;
use datafusion::prelude::*;
use tracing::debug;

/// Describes the compute resources to provision for a featurization run.
///
/// The defaults match a small cluster of 5 workers with 4 threads each.
#[derive(Debug, Clone)]
pub struct ClusterSpec {
    /// Number of workers to size the session for.
    pub workers: usize,
    /// Threads per worker.
    pub threads_per_worker: usize,
    /// Optional memory budget in bytes shared by all operators.
    pub memory_limit: Option<usize>,
}

impl Default for ClusterSpec {
    fn default() -> Self {
        Self {
            workers: 5,
            threads_per_worker: 4,
            memory_limit: None,
        }
    }
}

impl ClusterSpec {
    /// Create a spec for the given worker and thread counts.
    pub fn new(workers: usize, threads_per_worker: usize) -> Self {
        Self {
            workers,
            threads_per_worker,
            memory_limit: None,
        }
    }

    /// Set a memory budget in bytes for the session.
    pub fn with_memory_limit(mut self, bytes: usize) -> Self {
        self.memory_limit = Some(bytes);
        self
    }

    /// The number of partitions the engine should target: one per worker thread.
    pub fn target_partitions(&self) -> usize {
        self.workers * self.threads_per_worker
    }
}

/// Provisions a DataFusion session sized according to the given spec.
///
/// The returned `SessionContext` targets one partition per worker thread, so a
/// scan over a partitioned dataset fans out the way it would across a cluster.
/// If a memory limit is set, the session uses a bounded memory pool.
pub fn provision(spec: &ClusterSpec) -> FeaturizerResult<SessionContext> {
    if spec.workers == 0 {
        return Err(FeaturizerError::InvalidParameter(
            "ClusterSpec requires at least one worker".to_string(),
        ));
    }
    if spec.threads_per_worker == 0 {
        return Err(FeaturizerError::InvalidParameter(
            "ClusterSpec requires at least one thread per worker".to_string(),
        ));
    }

    let config = SessionConfig::new().with_target_partitions(spec.target_partitions());

    let mut runtime_builder = RuntimeEnvBuilder::new();
    if let Some(limit) = spec.memory_limit {
        if limit == 0 {
            return Err(FeaturizerError::InvalidParameter(
                "Memory limit must be greater than zero bytes".to_string(),
            ));
        }
        runtime_builder = runtime_builder.with_memory_limit(limit, 1.0);
    }
    let runtime = runtime_builder
        .build_arc()
        .map_err(FeaturizerError::from)?;

    debug!(
        workers = spec.workers,
        threads_per_worker = spec.threads_per_worker,
        target_partitions = spec.target_partitions(),
        "provisioned session"
    );
    Ok(SessionContext::new_with_config_rt(config, runtime))
}
