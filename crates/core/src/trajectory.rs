use std::collections::{VecDeque, vec_deque};

use thiserror::Error;

use crate::State;

/// A state captured at a point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub time: f64,
    pub state: State,
}

impl Sample {
    /// Creates a new sample.
    #[must_use]
    pub fn new(time: f64, state: State) -> Self {
        Self { time, state }
    }
}

/// Error returned when a [`Trajectory`] is created with zero capacity.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("trajectory capacity must be at least one sample")]
pub struct CapacityError;

/// A bounded history of samples, oldest first.
///
/// Once `capacity` samples are held, each push evicts the oldest sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    samples: VecDeque<Sample>,
    capacity: usize,
}

impl Trajectory {
    /// Creates an empty trajectory that retains at most `capacity` samples.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, CapacityError> {
        if capacity == 0 {
            return Err(CapacityError);
        }

        Ok(Self {
            samples: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
        })
    }

    /// Appends a sample, returning the evicted oldest sample if full.
    pub fn push(&mut self, sample: Sample) -> Option<Sample> {
        let evicted = if self.samples.len() == self.capacity {
            self.samples.pop_front()
        } else {
            None
        };
        self.samples.push_back(sample);
        evicted
    }

    /// Removes all samples, keeping the capacity.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Returns the most recent sample.
    #[must_use]
    pub fn latest(&self) -> Option<&Sample> {
        self.samples.back()
    }

    /// Returns the oldest retained sample.
    #[must_use]
    pub fn oldest(&self) -> Option<&Sample> {
        self.samples.front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates over retained samples, oldest first.
    pub fn iter(&self) -> vec_deque::Iter<'_, Sample> {
        self.samples.iter()
    }

    /// Iterates over one state entry across all retained samples.
    ///
    /// Samples too short to contain `index` are skipped.
    pub fn column(&self, index: usize) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().filter_map(move |s| s.state.get(index).copied())
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Sample;
    type IntoIter = vec_deque::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
