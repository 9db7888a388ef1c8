use std::thread;

/// Controls how a layer's outputs are computed.
/// Layers with at least `parallel_threshold` units are split across `parallelism` partitions,
/// each on its own scoped thread. Smaller layers run on the calling thread.
/// Both paths produce bit-identical outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    pub parallelism: usize,
    pub parallel_threshold: usize
}

impl NetworkConfig {
    /// Never spawns threads.
    pub fn serial() -> Self {
        Self { parallelism: 1, ..Self::default() }
    }

    pub(crate) fn runs_parallel(&self, unit_count: usize) -> bool {
        self.parallelism > 1 && unit_count >= self.parallel_threshold.max(1)
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            parallelism: thread::available_parallelism().map(|n| n.get()).unwrap_or(1),
            parallel_threshold: 64
        }
    }
}
