use std::{ops::Index, thread};

use crate::partition::Partition;

/// Splits work into partitions and runs each on a scoped thread.
#[derive(Hash, Debug, Clone, PartialEq, Eq, Default)]
pub struct Partitioner {
    partitions: Vec<Partition>
}

impl Index<usize> for Partitioner {
    type Output = Partition;

    fn index(&self, index: usize) -> &Self::Output {
        &self.partitions[index]
    }
}

impl Partitioner {
    /// Creates partitions whose sizes differ by at most 1.
    /// Never creates empty partitions, so asking for more partitions than items yields fewer.
    pub fn with_partitions(count: usize, partition_count: usize) -> Self {
        if count == 0 {
            return Partitioner { partitions: vec![] };
        }

        let partition_count = partition_count.clamp(1, count);
        let partition_size = count / partition_count;

        // First `spread` partitions take one leftover item each
        let spread = count % partition_count;
        let mut partitions = Vec::with_capacity(partition_count);
        let mut cursor = 0;
        for partition_index in 0..partition_count {
            let extra = if partition_index < spread { 1 } else { 0 };
            let adjusted_partition_size = partition_size + extra;
            let start = cursor;
            cursor = start + adjusted_partition_size;

            partitions.push(Partition::new(start, cursor));
        }

        Partitioner { partitions }
    }

    pub fn len(&self) -> usize { self.partitions.len() }
    pub fn is_empty(&self) -> bool { self.partitions.is_empty() }

    /// Runs `function` once per partition and concatenates the results in partition order.
    /// A panic in any worker is re-raised on the calling thread.
    pub fn parallelized<T, F>(&self, function: F) -> Vec<T>
    where
        F: FnOnce(&Partition) -> Vec<T> + Send + Copy,
        T: Send
    {
        match self.partitions.as_slice() {
            [] => return vec![],
            [only] => return function(only),
            _ => {}
        }

        let mut values: Vec<T> = Vec::new();
        thread::scope(|s| {
            let mut scope_join_handles = Vec::with_capacity(self.partitions.len());

            for partition in &self.partitions[..] {
                scope_join_handles.push(s.spawn(move || {
                    function(partition)
                }));
            }

            for scope_join_handle in scope_join_handles {
                match scope_join_handle.join() {
                    Ok(result) => values.extend(result),
                    Err(payload) => std::panic::resume_unwind(payload)
                }
            }
        });

        values
    }
}
