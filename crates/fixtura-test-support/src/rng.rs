//! Test random sources — deterministic `RandomSource` implementations.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use fixtura_core::{FixtureError, RandomSource};

#[derive(Debug, Default)]
struct StubState {
    ints: VecDeque<i32>,
    longs: VecDeque<i64>,
    doubles: VecDeque<f64>,
    floats: VecDeque<f32>,
    booleans: VecDeque<bool>,
    bytes: VecDeque<u8>,
    int_ranges: Vec<(i32, i32)>,
    long_ranges: Vec<(i64, i64)>,
    double_ranges: Vec<(f64, f64)>,
    draws: usize,
}

fn pop<T>(queue: &mut VecDeque<T>, kind: &str) -> T {
    queue
        .pop_front()
        .unwrap_or_else(|| panic!("StubRandom: no {kind} values left"))
}

/// A source that returns queued values, one queue per draw kind, and records
/// the bounds of every ranged draw. Bounds are recorded, never enforced.
///
/// Clones share their queues and records, so a test can keep one clone for
/// inspection after handing the other to a fixture. Panics when a queue is
/// exhausted.
#[derive(Debug, Clone, Default)]
pub struct StubRandom {
    state: Arc<Mutex<StubState>>,
}

impl StubRandom {
    /// Creates a stub with empty queues.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, StubState> {
        self.state.lock().expect("StubRandom mutex poisoned")
    }

    /// Queues values for `next_int` and `next_int_in`.
    #[must_use]
    pub fn with_ints(self, values: impl IntoIterator<Item = i32>) -> Self {
        self.state().ints.extend(values);
        self
    }

    /// Queues values for `next_long` and `next_long_in`.
    #[must_use]
    pub fn with_longs(self, values: impl IntoIterator<Item = i64>) -> Self {
        self.state().longs.extend(values);
        self
    }

    /// Queues values for `next_double_in`.
    #[must_use]
    pub fn with_doubles(self, values: impl IntoIterator<Item = f64>) -> Self {
        self.state().doubles.extend(values);
        self
    }

    /// Queues values for `next_float`.
    #[must_use]
    pub fn with_floats(self, values: impl IntoIterator<Item = f32>) -> Self {
        self.state().floats.extend(values);
        self
    }

    /// Queues values for `next_boolean`.
    #[must_use]
    pub fn with_booleans(self, values: impl IntoIterator<Item = bool>) -> Self {
        self.state().booleans.extend(values);
        self
    }

    /// Queues bytes for `next_bytes`.
    #[must_use]
    pub fn with_bytes(self, values: impl IntoIterator<Item = u8>) -> Self {
        self.state().bytes.extend(values);
        self
    }

    /// Bounds of every `next_int_in` call, in call order.
    #[must_use]
    pub fn int_ranges(&self) -> Vec<(i32, i32)> {
        self.state().int_ranges.clone()
    }

    /// Bounds of every `next_long_in` call, in call order.
    #[must_use]
    pub fn long_ranges(&self) -> Vec<(i64, i64)> {
        self.state().long_ranges.clone()
    }

    /// Bounds of every `next_double_in` call, in call order.
    #[must_use]
    pub fn double_ranges(&self) -> Vec<(f64, f64)> {
        self.state().double_ranges.clone()
    }

    /// Total number of draws of any kind.
    #[must_use]
    pub fn draw_count(&self) -> usize {
        self.state().draws
    }
}

impl RandomSource for StubRandom {
    fn next_int(&mut self) -> i32 {
        let mut state = self.state();
        state.draws += 1;
        pop(&mut state.ints, "int")
    }

    fn next_int_in(&mut self, from: i32, until: i32) -> Result<i32, FixtureError> {
        let mut state = self.state();
        state.draws += 1;
        state.int_ranges.push((from, until));
        Ok(pop(&mut state.ints, "int"))
    }

    fn next_long(&mut self) -> i64 {
        let mut state = self.state();
        state.draws += 1;
        pop(&mut state.longs, "long")
    }

    fn next_long_in(&mut self, from: i64, until: i64) -> Result<i64, FixtureError> {
        let mut state = self.state();
        state.draws += 1;
        state.long_ranges.push((from, until));
        Ok(pop(&mut state.longs, "long"))
    }

    fn next_double_in(&mut self, from: f64, to: f64) -> Result<f64, FixtureError> {
        let mut state = self.state();
        state.draws += 1;
        state.double_ranges.push((from, to));
        Ok(pop(&mut state.doubles, "double"))
    }

    fn next_float(&mut self) -> f32 {
        let mut state = self.state();
        state.draws += 1;
        pop(&mut state.floats, "float")
    }

    fn next_boolean(&mut self) -> bool {
        let mut state = self.state();
        state.draws += 1;
        pop(&mut state.booleans, "boolean")
    }

    fn next_bytes(&mut self, n: usize) -> Vec<u8> {
        let mut state = self.state();
        state.draws += 1;
        (0..n).map(|_| pop(&mut state.bytes, "byte")).collect()
    }
}

/// A source that always returns the lower bound, zero, or `false`, and
/// counts how often it was asked. Suitable for tests that do not depend on
/// specific random values.
#[derive(Debug, Clone, Default)]
pub struct MockRandom {
    draws: Arc<AtomicUsize>,
}

impl MockRandom {
    /// Creates a mock.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of draws of any kind.
    #[must_use]
    pub fn draw_count(&self) -> usize {
        self.draws.load(Ordering::SeqCst)
    }

    fn count(&self) {
        self.draws.fetch_add(1, Ordering::SeqCst);
    }
}

impl RandomSource for MockRandom {
    fn next_int(&mut self) -> i32 {
        self.count();
        0
    }

    fn next_int_in(&mut self, from: i32, _until: i32) -> Result<i32, FixtureError> {
        self.count();
        Ok(from)
    }

    fn next_long(&mut self) -> i64 {
        self.count();
        0
    }

    fn next_long_in(&mut self, from: i64, _until: i64) -> Result<i64, FixtureError> {
        self.count();
        Ok(from)
    }

    fn next_double_in(&mut self, from: f64, _to: f64) -> Result<f64, FixtureError> {
        self.count();
        Ok(from)
    }

    fn next_float(&mut self) -> f32 {
        self.count();
        0.0
    }

    fn next_boolean(&mut self) -> bool {
        self.count();
        false
    }

    fn next_bytes(&mut self, n: usize) -> Vec<u8> {
        self.count();
        vec![0; n]
    }
}
