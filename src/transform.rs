//! Fast spectral transforms over truth tables.
//!
//! - [fast_walsh_hadamard_transform]: in-place butterfly, for any signed numeric type.
//! - [parallel_fast_walsh_hadamard_transform]: same butterfly, each stage spread over a worker pool.
//! - [fast_mobius_transform] / [inverse_fast_mobius_transform]: truth table $\leftrightarrow$ ANF coefficients over GF(2).
//! - [autocorrelation_from_walsh_spectrum]: autocorrelation spectrum through the Wiener-Khintchine identity.

use crate::truth_table::{TruthTable, WORD_BITS};
use fast_boolean_anf_transform::fast_bool_anf_transform_unsigned;
use log::{debug, warn};
use once_cell::sync::Lazy;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};
use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::ops::{Add, Sub};
use std::sync::{Arc, Mutex, PoisonError};

/// log2 of the number of outputs packed in one word.
const WORD_VARIABLES: usize = WORD_BITS.trailing_zeros() as usize;

/// Thread pools of the parallel transform, one per worker count, built on first use.
static WORKER_POOLS: Lazy<Mutex<HashMap<usize, Arc<ThreadPool>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Applies in place the fast Walsh-Hadamard transform to `data`.
///
/// For `step` = 1, 2, 4... each block of size `2 * step` gets the butterfly
/// $(a, b) \mapsto (a + b, a - b)$ on its two halves.
///
/// Applied to the sign sequence $(-1)^{f(x)}$ it yields the Walsh spectrum of $f$.
/// Applying it twice multiplies the input by its length.
///
/// # Panics
/// In debug builds, if the length of `data` is not a power of 2.
///
/// # Example
/// ```rust
/// use boolean_function_metrics::transform::fast_walsh_hadamard_transform;
///
/// let mut signs = vec![1i64, -1, -1, 1];
/// fast_walsh_hadamard_transform(&mut signs);
/// assert_eq!(signs, vec![0, 0, 0, 4]);
/// ```
pub fn fast_walsh_hadamard_transform<T>(data: &mut [T])
where
    T: Copy + Add<Output = T> + Sub<Output = T>,
{
    debug_assert!(data.len().is_power_of_two());
    let length = data.len();
    let mut step = 1;
    while step < length {
        data.chunks_exact_mut(step << 1)
            .for_each(|block| butterfly(block, step));
        step <<= 1;
    }
}

/// Parallel version of [fast_walsh_hadamard_transform], giving the exact same result.
///
/// Each butterfly stage splits its blocks across `workers` threads (capped by the available hardware
/// parallelism). A stage only starts once every block of the previous one is done.
///
/// The pool of a given worker count is built by the first call and reused by the next ones,
/// so only the first call pays for spawning the threads.
///
/// With `workers <= 1`, or if the thread pool cannot be created, it falls back to the sequential transform.
pub fn parallel_fast_walsh_hadamard_transform<T>(data: &mut [T], workers: usize)
where
    T: Copy + Send + Add<Output = T> + Sub<Output = T>,
{
    let workers = workers.min(max_workers());
    if workers <= 1 {
        fast_walsh_hadamard_transform(data);
        return;
    }
    let pool = match worker_pool(workers) {
        Ok(pool) => pool,
        Err(error) => {
            warn!("cannot build a {} workers pool ({}), running sequential FWHT", workers, error);
            fast_walsh_hadamard_transform(data);
            return;
        }
    };
    debug_assert!(data.len().is_power_of_two());
    let length = data.len();
    pool.install(|| {
        let mut step = 1;
        while step < length {
            // for_each returns once all blocks of the stage are written
            data.par_chunks_mut(step << 1)
                .for_each(|block| butterfly(block, step));
            step <<= 1;
        }
    });
}

#[inline]
fn butterfly<T>(block: &mut [T], step: usize)
where
    T: Copy + Add<Output = T> + Sub<Output = T>,
{
    let (low, high) = block.split_at_mut(step);
    for (a, b) in low.iter_mut().zip(high.iter_mut()) {
        let (x, y) = (*a, *b);
        *a = x + y;
        *b = x - y;
    }
}

fn worker_pool(workers: usize) -> Result<Arc<ThreadPool>, ThreadPoolBuildError> {
    let mut pools = WORKER_POOLS.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(pool) = pools.get(&workers) {
        return Ok(Arc::clone(pool));
    }
    debug!("building a {} workers pool", workers);
    let pool = Arc::new(ThreadPoolBuilder::new().num_threads(workers).build()?);
    pools.insert(workers, Arc::clone(&pool));
    Ok(pool)
}

fn max_workers() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

/// Forward fast Möbius transform, in place: truth table to ANF coefficients.
///
/// For increasing bit positions $i$, every index $j$ with bit $i$ set gets `value[j] ^= value[j ^ (1 << i)]`.
///
/// Values are expected to be 0 or 1, and the length a power of 2.
///
/// # Example
/// ```rust
/// use boolean_function_metrics::transform::fast_mobius_transform;
///
/// // x0 AND x1
/// let mut values = vec![0u8, 0, 0, 1];
/// fast_mobius_transform(&mut values);
/// assert_eq!(values, vec![0, 0, 0, 1]);
///
/// // x0 OR x1 = x0 + x1 + x0*x1
/// let mut values = vec![0u8, 1, 1, 1];
/// fast_mobius_transform(&mut values);
/// assert_eq!(values, vec![0, 1, 1, 1]);
/// ```
pub fn fast_mobius_transform(values: &mut [u8]) {
    debug_assert!(values.len().is_power_of_two());
    let variables_count = values.len().trailing_zeros() as usize;
    (0..variables_count).for_each(|i| mobius_stage(values, 1 << i));
}

/// Inverse fast Möbius transform, in place: ANF coefficients to truth table.
///
/// Same update as [fast_mobius_transform], with bit positions taken in decreasing order.
pub fn inverse_fast_mobius_transform(values: &mut [u8]) {
    debug_assert!(values.len().is_power_of_two());
    let variables_count = values.len().trailing_zeros() as usize;
    (0..variables_count)
        .rev()
        .for_each(|i| mobius_stage(values, 1 << i));
}

fn mobius_stage(values: &mut [u8], bit: usize) {
    for j in 0..values.len() {
        if j & bit != 0 {
            values[j] ^= values[j ^ bit];
        }
    }
}

/// Forward Möbius transform on a packed table.
///
/// Stages on the 6 lowest variables happen inside each word, the others XOR whole words.
pub(crate) fn fast_mobius_transform_packed(table: &mut TruthTable) {
    let variables_count = table.variables_count();
    mobius_in_word(table, variables_count);
    (WORD_VARIABLES..variables_count).for_each(|i| mobius_word_stage(table, i));
}

/// Inverse Möbius transform on a packed table.
pub(crate) fn inverse_fast_mobius_transform_packed(table: &mut TruthTable) {
    let variables_count = table.variables_count();
    (WORD_VARIABLES..variables_count)
        .rev()
        .for_each(|i| mobius_word_stage(table, i));
    mobius_in_word(table, variables_count);
}

fn mobius_in_word(table: &mut TruthTable, variables_count: usize) {
    let word_variables = variables_count.min(WORD_VARIABLES);
    if word_variables == 0 {
        return;
    }
    table
        .words_mut()
        .iter_mut()
        .for_each(|word| *word = fast_bool_anf_transform_unsigned(*word, word_variables));
}

fn mobius_word_stage(table: &mut TruthTable, variable: usize) {
    let stride = 1 << (variable - WORD_VARIABLES);
    let words = table.words_mut();
    for j in 0..words.len() {
        if j & stride != 0 {
            words[j] ^= words[j ^ stride];
        }
    }
}

/// Computes the autocorrelation spectrum from the Walsh spectrum.
///
/// The squared Walsh values go through the Walsh-Hadamard butterfly once more, then get divided by $2^n$.
/// Squares are handled as `f64` so that large spectra cannot overflow.
///
/// # Example
/// ```rust
/// use boolean_function_metrics::transform::autocorrelation_from_walsh_spectrum;
///
/// // x0 AND x1
/// let autocorrelation = autocorrelation_from_walsh_spectrum(&[2, 2, 2, -2]);
/// assert_eq!(autocorrelation, vec![4, 0, 0, 0]);
/// ```
pub fn autocorrelation_from_walsh_spectrum(walsh_spectrum: &[i64]) -> Vec<i64> {
    let mut squares = walsh_spectrum
        .iter()
        .map(|value| {
            let value = *value as f64;
            value * value
        })
        .collect::<Vec<f64>>();
    fast_walsh_hadamard_transform(&mut squares);
    let length = walsh_spectrum.len() as f64;
    squares
        .into_iter()
        .map(|value| (value / length).round() as i64)
        .collect()
}
