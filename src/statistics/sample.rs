use rand::{rngs::StdRng, Rng, SeedableRng};

/// An in-memory data set drawn from at random without replacement.
pub struct Sample<T> {
    all_samples: Vec<T>,
    unused: Vec<usize>,
    used: Vec<usize>,
    rng: StdRng
}

impl<T> Sample<T> {
    /// Creates a sample of data from specified vector, shuffled from OS entropy.
    /// Make sure to move the data into sample for it to be consumed.
    pub fn create_sample(data: Vec<T>) -> Sample<T> {
        Self::with_rng(data, StdRng::from_entropy())
    }

    /// Same as `create_sample`, but every series of batches is reproducible.
    pub fn with_seed(data: Vec<T>, seed: u64) -> Sample<T> {
        Self::with_rng(data, StdRng::seed_from_u64(seed))
    }

    fn with_rng(data: Vec<T>, rng: StdRng) -> Sample<T> {
        let unused = (0..data.len()).collect();
        let used = Vec::with_capacity(data.len());

        Sample {
            all_samples: data,
            unused,
            used,
            rng
        }
    }

    pub fn len(&self) -> usize { self.all_samples.len() }
    pub fn is_empty(&self) -> bool { self.all_samples.is_empty() }

    /// Everything in the sample, in the original order.
    pub fn all(&self) -> &[T] { &self.all_samples }

    /// Creates a random batch from sample data.
    /// Repeated calls never use the same element twice before a call to reset.
    /// The last batch before exhaustion may be smaller than requested.
    pub fn random_batch(&mut self, requested_batch_size: usize) -> Vec<&T> {
        let batch_size = std::cmp::min(requested_batch_size, self.unused.len());

        let mut newbatch = Vec::with_capacity(batch_size);
        for _ in 0..batch_size {
            let unused_index = self.rng.gen_range(0..self.unused.len());
            let index_to_use = self.unused.swap_remove(unused_index);
            self.used.push(index_to_use);

            newbatch.push(&self.all_samples[index_to_use]);
        }

        newbatch
    }

    /// Resets batch sample to allow a fresh series of random batches.
    pub fn reset(&mut self) {
        self.unused.append(&mut self.used);
        self.unused.sort_unstable();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_exhausts_without_repeats() {
        let mut sample = Sample::with_seed(
            vec!["a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k"], 3
        );

        for _ in 0..3 {
            let mut seen: Vec<&str> = vec![];
            for _ in 0..6 {
                seen.extend(sample.random_batch(2).into_iter().copied());
            }

            seen.sort_unstable();
            assert_eq!(seen, sample.all().to_vec());
            assert!(sample.random_batch(2).is_empty());

            sample.reset();
        }
    }

    #[test]
    fn test_seeded_order_repeats() {
        let mut first = Sample::with_seed((0..20).collect::<Vec<i32>>(), 11);
        let mut second = Sample::with_seed((0..20).collect::<Vec<i32>>(), 11);

        let a: Vec<i32> = first.random_batch(20).into_iter().copied().collect();
        let b: Vec<i32> = second.random_batch(20).into_iter().copied().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unseeded_sample_covers_everything() {
        let mut sample = Sample::create_sample((0..8).collect::<Vec<i32>>());
        assert_eq!(sample.len(), 8);

        let mut drawn: Vec<i32> = sample.random_batch(100).into_iter().copied().collect();
        drawn.sort_unstable();
        assert_eq!(drawn, (0..8).collect::<Vec<i32>>());
        assert!(sample.random_batch(1).is_empty());
    }
}
