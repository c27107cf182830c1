//! # Boolean function metrics library

#![doc = include_str!("../README.md")]
#![forbid(unsafe_code, unused_must_use)]
#![forbid(
    missing_docs,
    unreachable_pub,
    unused_import_braces,
    unused_extern_crates
)]

mod algebraic_immunity;
mod analysis;
mod anf_polynom;
mod bit_matrix;
mod boolean_function_error;
mod iterator;
pub mod transform;
mod truth_table;
mod utils;

pub use crate::algebraic_immunity::AlgebraicImmunity;
pub use crate::analysis::{
    analyze, analyze_timed, AnalysisOptions, BooleanFunctionAnalysis, TimedAnalysis,
};
pub use crate::anf_polynom::AnfPolynomial;
pub use crate::bit_matrix::BitMatrix;
pub use crate::boolean_function_error::BooleanFunctionError;
pub use crate::iterator::BooleanFunctionIterator;
use crate::transform::{
    autocorrelation_from_walsh_spectrum, fast_walsh_hadamard_transform,
    parallel_fast_walsh_hadamard_transform,
};
use crate::truth_table::{TruthTable, WORD_BITS};
use crate::utils::{half_length, rotate_left_1};
use crate::BooleanFunctionError::{ArityOutOfRange, InvalidHex, InvalidLength, InvalidValue};
use hackfn::hackfn;
use num_bigint::BigUint;
use num_traits::Num;
use once_cell::sync::OnceCell;
use std::collections::BTreeMap;
use std::fmt::Debug;

/// Largest variable count accepted by the integer constructor, the truth table filling an `u64`.
const MAX_U64_VARIABLES: usize = 6;

/// Largest variable count accepted by the hexadecimal and ANF constructors, $2^n$ having to fit in an `usize`.
const MAX_VARIABLES: usize = usize::BITS as usize - 1;

/// Boolean function of $n$ variables, given by its truth table of $2^n$ outputs.
///
/// Bit $j$ of an input index is the variable $x_j$, so that $f(i)$ is the output for
/// $x_0 = i \bmod 2$, $x_1 = \lfloor i/2 \rfloor \bmod 2$, and so on.
///
/// The truth table never changes once built. The Walsh-Hadamard spectrum, the autocorrelation spectrum and the
/// ANF are computed on first use and cached, a function being safely shared between threads.
///
/// # Example
/// ```rust
/// use boolean_function_metrics::BooleanFunction;
///
/// let boolean_function = BooleanFunction::from_hex_string_truth_table("96", 3).unwrap();
/// assert_eq!(boolean_function.hamming_weight(), 4);
/// assert!(boolean_function.is_balanced());
/// assert_eq!(boolean_function.algebraic_normal_form(), "x0 + x1 + x2");
/// assert_eq!(boolean_function(3), false); // directly as a function
/// ```
#[derive(Clone)]
pub struct BooleanFunction {
    truth_table: TruthTable,
    walsh_spectrum: OnceCell<Vec<i64>>,
    autocorrelation_spectrum: OnceCell<Vec<i64>>,
    anf: OnceCell<AnfPolynomial>,
}

#[hackfn]
impl BooleanFunction {
    fn call(&self, input_bits: usize) -> bool {
        self.compute(input_bits)
    }
}

impl BooleanFunction {
    fn from_packed(truth_table: TruthTable) -> Self {
        BooleanFunction {
            truth_table,
            walsh_spectrum: OnceCell::new(),
            autocorrelation_spectrum: OnceCell::new(),
            anf: OnceCell::new(),
        }
    }

    /// Creates a Boolean function from its truth table, as a list of 0 and 1.
    ///
    /// The table is copied, the function never aliases the caller's buffer.
    ///
    /// # Parameters
    /// - `truth_table`: The $2^n$ outputs, `truth_table[i]` being $f(i)$.
    ///
    /// # Returns
    /// The Boolean function of $n$ variables, or [BooleanFunctionError::InvalidLength] if the length is not a power of 2,
    /// [BooleanFunctionError::InvalidValue] if an entry is neither 0 nor 1.
    ///
    /// # Example
    /// ```rust
    /// use boolean_function_metrics::BooleanFunction;
    ///
    /// let boolean_function = BooleanFunction::from_truth_table(&[0, 1, 1, 0, 1, 0, 0, 1]).unwrap();
    /// assert_eq!(boolean_function.variables_count(), 3);
    /// assert!(BooleanFunction::from_truth_table(&[0, 1, 1]).is_err());
    /// ```
    pub fn from_truth_table(truth_table: &[u8]) -> Result<Self, BooleanFunctionError> {
        if !truth_table.len().is_power_of_two() {
            return Err(InvalidLength(truth_table.len()));
        }
        if let Some((index, value)) = truth_table.iter().enumerate().find(|(_, v)| **v > 1) {
            return Err(InvalidValue {
                index,
                value: *value,
            });
        }
        Ok(Self::from_packed(TruthTable::from_bits(truth_table)))
    }

    /// Creates a Boolean function of 6 or fewer variables from an `u64` holding its truth table.
    ///
    /// Bit $i$ of `truth_table` is $f(i)$, bits from $2^n$ upwards are ignored.
    ///
    /// # Returns
    /// The Boolean function, or [BooleanFunctionError::ArityOutOfRange] if `num_variables` is not in $[1, 6]$.
    ///
    /// # Example
    /// ```rust
    /// use boolean_function_metrics::BooleanFunction;
    ///
    /// let boolean_function = BooleanFunction::from_u64_truth_table(150, 3).unwrap();
    /// assert_eq!(boolean_function.truth_table(), vec![0, 1, 1, 0, 1, 0, 0, 1]);
    /// ```
    pub fn from_u64_truth_table(
        truth_table: u64,
        num_variables: usize,
    ) -> Result<Self, BooleanFunctionError> {
        check_arity(num_variables, MAX_U64_VARIABLES)?;
        let bits = (0..(1u32 << num_variables))
            .map(|i| ((truth_table >> i) & 1) as u8)
            .collect::<Vec<u8>>();
        Self::from_truth_table(&bits)
    }

    /// Creates a Boolean function from a hexadecimal string representing its truth table as an unsigned integer.
    ///
    /// The string may start with `0x` or `0X`, digits are case-insensitive. Bit $i$ of the number is $f(i)$, so that
    /// the last digit holds $f(0)$ to $f(3)$. Missing leading digits are zeros, bits from $2^n$ upwards are ignored.
    ///
    /// # Parameters
    /// - `hex_truth_table`: The hexadecimal string representing the truth table of the Boolean function.
    /// - `num_variables`: The variable count $n$.
    ///
    /// # Returns
    /// The Boolean function, or [BooleanFunctionError::InvalidHex] if the string cannot be parsed,
    /// [BooleanFunctionError::ArityOutOfRange] if `num_variables` is 0 or too large.
    ///
    /// # Example
    /// ```rust
    /// use boolean_function_metrics::BooleanFunction;
    ///
    /// let boolean_function = BooleanFunction::from_hex_string_truth_table("0x7969817CC5893BA6AC326E47619F5AD0", 7)
    ///     .unwrap();
    /// assert_eq!(boolean_function.nonlinearity(), 56);
    /// ```
    pub fn from_hex_string_truth_table(
        hex_truth_table: &str,
        num_variables: usize,
    ) -> Result<Self, BooleanFunctionError> {
        check_arity(num_variables, MAX_VARIABLES)?;
        let digits = hex_truth_table
            .strip_prefix("0x")
            .or_else(|| hex_truth_table.strip_prefix("0X"))
            .unwrap_or(hex_truth_table);
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(InvalidHex(hex_truth_table.to_string()));
        }
        let value = BigUint::from_str_radix(digits, 16)
            .map_err(|_| InvalidHex(hex_truth_table.to_string()))?;
        let bits = (0..(1u64 << num_variables))
            .map(|i| value.bit(i) as u8)
            .collect::<Vec<u8>>();
        Self::from_truth_table(&bits)
    }

    /// Creates a Boolean function from the string of its Algebraic Normal Form, like `"x0*x1 + x2 + 1"`.
    ///
    /// See [AnfPolynomial::from_str] for the accepted grammar.
    ///
    /// # Returns
    /// The Boolean function, or an error if the string cannot be parsed or `num_variables` is 0 or too large.
    ///
    /// # Example
    /// ```rust
    /// use boolean_function_metrics::BooleanFunction;
    ///
    /// let boolean_function = BooleanFunction::from_anf_polynomial_str("x0 + x1*x2", 3).unwrap();
    /// assert_eq!(boolean_function.printable_hex_truth_table(), "6a");
    /// assert_eq!(boolean_function.algebraic_degree(), 2);
    /// ```
    pub fn from_anf_polynomial_str(
        anf_polynomial: &str,
        num_variables: usize,
    ) -> Result<Self, BooleanFunctionError> {
        Ok(Self::from_anf_polynomial(&AnfPolynomial::from_str(
            anf_polynomial,
            num_variables,
        )?))
    }

    /// Creates a Boolean function from its [AnfPolynomial], by inverse Möbius transform.
    pub fn from_anf_polynomial(anf_polynomial: &AnfPolynomial) -> Self {
        Self::from_packed(anf_polynomial.to_truth_table())
    }

    /// Variable count $n$ of the Boolean function.
    pub fn variables_count(&self) -> usize {
        self.truth_table.variables_count()
    }

    pub(crate) fn truth_table_len(&self) -> usize {
        self.truth_table.len()
    }

    /// Copy of the truth table, as $2^n$ values 0 or 1.
    pub fn truth_table(&self) -> Vec<u8> {
        self.truth_table.to_bytes()
    }

    /// Computes the value of the Boolean function for a given input.
    ///
    /// This is equivalent of calling directly your Boolean function object as a function.
    ///
    /// # Parameters
    /// - `input_bits`: The input value, the least significant bit being the first variable $x_0$.
    ///
    /// # Panics
    /// If `input_bits` is $\ge 2^n$, and the `unsafe_disable_safety_checks` feature is not enabled.
    pub fn compute(&self, input_bits: usize) -> bool {
        #[cfg(not(feature = "unsafe_disable_safety_checks"))]
        if input_bits >= self.truth_table.len() {
            panic!(
                "Too big input, must be < {}",
                self.truth_table.len()
            );
        }
        self.truth_table.get(input_bits)
    }

    /// Iterator over the outputs $f(0), f(1), \ldots, f(2^n - 1)$.
    pub fn iter(&self) -> BooleanFunctionIterator<'_> {
        BooleanFunctionIterator::new(self)
    }

    /// Truth table as a hexadecimal number, bit $i$ being $f(i)$, with $\lceil 2^n / 4 \rceil$ lowercase digits.
    ///
    /// # Example
    /// ```rust
    /// use boolean_function_metrics::BooleanFunction;
    ///
    /// let boolean_function = BooleanFunction::from_hex_string_truth_table("0FE12", 4).unwrap();
    /// assert_eq!(boolean_function.printable_hex_truth_table(), "fe12");
    /// ```
    pub fn printable_hex_truth_table(&self) -> String {
        let words = self.truth_table.words();
        (0..self.truth_table.len().div_ceil(4))
            .rev()
            .map(|nibble| {
                let bit = nibble * 4;
                format!("{:x}", (words[bit / WORD_BITS] >> (bit % WORD_BITS)) & 0xf)
            })
            .collect()
    }

    /// Hamming weight of the truth table: count of inputs $x$ with $f(x) = 1$.
    pub fn hamming_weight(&self) -> u64 {
        self.truth_table.count_ones()
    }

    /// Returns `true` if the function has as many 0 as 1 outputs.
    ///
    /// The 0-variable functions are never balanced.
    pub fn is_balanced(&self) -> bool {
        self.variables_count() > 0
            && self.hamming_weight() == half_length(self.variables_count())
    }

    /// Walsh-Hadamard spectrum of the function.
    ///
    /// $$W_f(\omega) = \sum_{x=0}^{2^n-1} (-1)^{f(x) \oplus \omega \cdot x}$$
    ///
    /// Computed once by fast Walsh-Hadamard transform, then cached.
    ///
    /// # Example
    /// ```rust
    /// use boolean_function_metrics::BooleanFunction;
    ///
    /// let boolean_function = BooleanFunction::from_hex_string_truth_table("96", 3).unwrap();
    /// assert_eq!(boolean_function.walsh_hadamard_spectrum(), &[0, 0, 0, 0, 0, 0, 0, 8]);
    /// ```
    pub fn walsh_hadamard_spectrum(&self) -> &[i64] {
        self.walsh_spectrum.get_or_init(|| {
            let mut spectrum = self.truth_table.signs();
            fast_walsh_hadamard_transform(&mut spectrum);
            spectrum
        })
    }

    /// Walsh-Hadamard spectrum, computed with each butterfly stage spread over `workers` threads.
    ///
    /// Always recomputed, never cached, and equal to [BooleanFunction::walsh_hadamard_spectrum].
    pub fn walsh_hadamard_spectrum_parallel(&self, workers: usize) -> Vec<i64> {
        let mut spectrum = self.truth_table.signs();
        parallel_fast_walsh_hadamard_transform(&mut spectrum, workers);
        spectrum
    }

    /// Autocorrelation spectrum of the function.
    ///
    /// $$\Delta_f(\omega) = \sum_{x=0}^{2^n-1} (-1)^{f(x) \oplus f(x \oplus \omega)}$$
    ///
    /// Derived from the Walsh-Hadamard spectrum, then cached.
    pub fn auto_correlation_spectrum(&self) -> &[i64] {
        self.autocorrelation_spectrum
            .get_or_init(|| autocorrelation_from_walsh_spectrum(self.walsh_hadamard_spectrum()))
    }

    /// Algebraic Normal Form of the function, as an [AnfPolynomial], computed once by fast Möbius transform.
    pub fn algebraic_normal_form_polynomial(&self) -> &AnfPolynomial {
        self.anf
            .get_or_init(|| AnfPolynomial::from_truth_table(&self.truth_table))
    }

    /// Algebraic Normal Form of the function, as a string.
    ///
    /// Monomials are sorted by increasing index, `"0"` being the null function.
    ///
    /// # Example
    /// ```rust
    /// // Wolfram's rule 30
    /// use boolean_function_metrics::BooleanFunction;
    ///
    /// let boolean_function = BooleanFunction::from_u64_truth_table(30, 3).unwrap();
    /// assert_eq!(boolean_function.algebraic_normal_form(), "x0 + x1 + x0*x1 + x2");
    /// ```
    pub fn algebraic_normal_form(&self) -> String {
        self.algebraic_normal_form_polynomial().to_string()
    }

    /// The $2^n$ coefficients of the Algebraic Normal Form, coefficient `i` being the one of
    /// the monomial made of the variables whose bit is set in `i`.
    pub fn algebraic_normal_form_coefficients(&self) -> Vec<u8> {
        self.algebraic_normal_form_polynomial().coefficients()
    }

    /// Algebraic degree: largest variable count among the monomials of the ANF, 0 for the null function.
    pub fn algebraic_degree(&self) -> usize {
        self.algebraic_normal_form_polynomial().degree()
    }

    /// Nonlinearity: Hamming distance to the closest affine function.
    ///
    /// $$NL(f) = 2^{n-1} - \frac{1}{2} \max_{\omega} |W_f(\omega)|$$
    pub fn nonlinearity(&self) -> u64 {
        let max_absolute_walsh = self
            .walsh_hadamard_spectrum()
            .iter()
            .map(|value| value.unsigned_abs())
            .max()
            .unwrap_or(0);
        half_length(self.variables_count()).saturating_sub(max_absolute_walsh / 2)
    }

    /// Correlation immunity order: largest $t$ such that $W_f(\omega) = 0$ for every $\omega$ with
    /// $1 \le wt(\omega) \le t$.
    ///
    /// Orders being nested, this is one less than the lowest weight of a non-zero point of the spectrum
    /// having a non-zero Walsh value, or $n$ if there is none.
    pub fn correlation_immunity(&self) -> usize {
        self.walsh_hadamard_spectrum()
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(_, value)| **value != 0)
            .map(|(omega, _)| omega.count_ones() as usize)
            .min()
            .map_or(self.variables_count(), |lowest_weight| lowest_weight - 1)
    }

    /// Resiliency order: the [correlation immunity](BooleanFunction::correlation_immunity) of a balanced function.
    ///
    /// # Returns
    /// `None` if the function is not balanced, and so not resilient.
    pub fn resiliency_order(&self) -> Option<usize> {
        self.is_balanced().then(|| self.correlation_immunity())
    }

    /// Returns `true` if the function is bent: $n$ is even and $|W_f(\omega)| = 2^{n/2}$ for every $\omega$.
    ///
    /// Bent functions reach the highest nonlinearity $2^{n-1} - 2^{n/2-1}$, and are never balanced.
    pub fn is_bent(&self) -> bool {
        let variables_count = self.variables_count();
        if variables_count % 2 != 0 {
            return false;
        }
        let expected = 1u64 << (variables_count / 2);
        self.walsh_hadamard_spectrum()
            .iter()
            .all(|value| value.unsigned_abs() == expected)
    }

    /// Sum-of-squares indicator: $\sum_{\omega} \Delta_f(\omega)^2$.
    pub fn sum_of_square_indicator(&self) -> u128 {
        self.auto_correlation_spectrum()
            .iter()
            .map(|value| {
                let value = value.unsigned_abs() as u128;
                value * value
            })
            .sum()
    }

    /// Absolute Walsh-Hadamard spectrum: number of occurrences of each absolute Walsh value, sorted by value.
    ///
    /// # Example
    /// ```rust
    /// use boolean_function_metrics::BooleanFunction;
    /// use std::collections::BTreeMap;
    ///
    /// let boolean_function = BooleanFunction::from_hex_string_truth_table("abce1234", 5).unwrap();
    /// assert_eq!(
    ///     boolean_function.absolute_walsh_hadamard_spectrum(),
    ///     BTreeMap::from([(2, 16), (6, 10), (10, 6)])
    /// );
    /// ```
    pub fn absolute_walsh_hadamard_spectrum(&self) -> BTreeMap<u64, usize> {
        absolute_histogram(self.walsh_hadamard_spectrum())
    }

    /// Absolute autocorrelation spectrum: number of occurrences of each absolute autocorrelation value,
    /// sorted by value.
    pub fn absolute_autocorrelation(&self) -> BTreeMap<u64, usize> {
        absolute_histogram(self.auto_correlation_spectrum())
    }

    /// Absolute indicator: $\max_{\omega \neq 0} |\Delta_f(\omega)|$, 0 for the 0-variable functions.
    pub fn absolute_indicator(&self) -> u64 {
        self.auto_correlation_spectrum()
            .iter()
            .skip(1)
            .map(|value| value.unsigned_abs())
            .max()
            .unwrap_or(0)
    }

    /// Differential uniformity: $2^{n-1} + \frac{1}{2} \max_{\omega \neq 0} |\Delta_f(\omega)|$.
    pub fn differential_uniformity(&self) -> u64 {
        half_length(self.variables_count()) + self.absolute_indicator() / 2
    }

    /// Returns `true` if the output is invariant by cyclic rotation of the input variables,
    /// $f(x_0, x_1, \ldots, x_{n-1}) = f(x_{n-1}, x_0, \ldots, x_{n-2})$.
    pub fn is_rotation_symmetric(&self) -> bool {
        let variables_count = self.variables_count();
        (0..self.truth_table.len()).all(|input| {
            self.truth_table.get(input)
                == self.truth_table.get(rotate_left_1(input, variables_count))
        })
    }

    /// Transparency order, as defined on the autocorrelation spectrum:
    ///
    /// $$1 - \frac{\sum_{\omega \neq 0} |\Delta_f(\omega)|}{2^n (2^n - 1)}$$
    ///
    /// 1.0 for the 0-variable functions.
    pub fn transparency_order(&self) -> f64 {
        let length = self.truth_table.len();
        if length <= 1 {
            return 1.0;
        }
        let absolute_sum = self
            .auto_correlation_spectrum()
            .iter()
            .skip(1)
            .map(|value| value.unsigned_abs() as f64)
            .sum::<f64>();
        1.0 - absolute_sum / (length as f64 * (length - 1) as f64)
    }

    /// Algebraic immunity: lowest degree of a non-null function $g$ such that $f \cdot g = 0$ or $(f + 1) \cdot g = 0$.
    ///
    /// The search goes through degrees $1$ to $\lceil n/2 \rceil$, solving for each the linear system of the
    /// annihilators of the smallest of the two supports first. The 0-variable functions have immunity 0,
    /// the 1-variable ones have immunity 1 with annihilator $x_0$.
    ///
    /// # Parameters
    /// - `with_annihilator`: Also solve for an annihilator of that degree, instead of only checking it exists.
    ///
    /// # Returns
    /// The algebraic immunity, with an annihilator if requested.
    /// [BooleanFunctionError::AnnihilatorSearchFailure] is only returned if the solver breaks its own invariants.
    ///
    /// # Example
    /// ```rust
    /// use boolean_function_metrics::BooleanFunction;
    ///
    /// let boolean_function = BooleanFunction::from_anf_polynomial_str("x0*x1 + x2*x3", 4).unwrap();
    /// let algebraic_immunity = boolean_function.algebraic_immunity(true).unwrap();
    /// assert_eq!(algebraic_immunity.degree(), 2);
    /// assert_eq!(algebraic_immunity.annihilator().unwrap().degree(), 2);
    /// ```
    pub fn algebraic_immunity(
        &self,
        with_annihilator: bool,
    ) -> Result<AlgebraicImmunity, BooleanFunctionError> {
        algebraic_immunity::algebraic_immunity(&self.truth_table, with_annihilator)
    }
}

pub(crate) fn check_arity(num_variables: usize, max: usize) -> Result<(), BooleanFunctionError> {
    if num_variables == 0 || num_variables > max {
        return Err(ArityOutOfRange {
            arity: num_variables,
            min: 1,
            max,
        });
    }
    Ok(())
}

fn absolute_histogram(spectrum: &[i64]) -> BTreeMap<u64, usize> {
    spectrum
        .iter()
        .fold(BTreeMap::new(), |mut histogram, value| {
            *histogram.entry(value.unsigned_abs()).or_insert(0) += 1;
            histogram
        })
}

impl Debug for BooleanFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BooleanFunction")
            .field("variables_count", &self.variables_count())
            .field("truth_table", &self.printable_hex_truth_table())
            .finish()
    }
}

impl PartialEq for BooleanFunction {
    fn eq(&self, other: &Self) -> bool {
        self.truth_table == other.truth_table
    }
}

impl Eq for BooleanFunction {}

#[cfg(test)]
mod tests {
    use crate::utils::fast_binary_dot_product;
    use crate::{AnfPolynomial, BooleanFunction, BooleanFunctionError};
    use std::collections::BTreeMap;

    fn all_functions(num_variables: usize) -> impl Iterator<Item = BooleanFunction> {
        (0..(1u64 << (1 << num_variables)))
            .map(move |tt| BooleanFunction::from_u64_truth_table(tt, num_variables).unwrap())
    }

    #[test]
    fn test_from_truth_table() {
        let boolean_function = BooleanFunction::from_truth_table(&[0, 1, 1, 0, 1, 0, 0, 1]).unwrap();
        assert_eq!(boolean_function.variables_count(), 3);
        assert_eq!(boolean_function.truth_table(), vec![0, 1, 1, 0, 1, 0, 0, 1]);

        let boolean_function = BooleanFunction::from_truth_table(&[1]).unwrap();
        assert_eq!(boolean_function.variables_count(), 0);

        assert_eq!(
            BooleanFunction::from_truth_table(&[]),
            Err(BooleanFunctionError::InvalidLength(0))
        );
        assert_eq!(
            BooleanFunction::from_truth_table(&[0, 1, 0]),
            Err(BooleanFunctionError::InvalidLength(3))
        );
        assert_eq!(
            BooleanFunction::from_truth_table(&[0, 1, 2, 1]),
            Err(BooleanFunctionError::InvalidValue { index: 2, value: 2 })
        );
    }

    #[test]
    fn test_truth_table_is_a_copy() {
        let mut bits = vec![0u8, 1, 1, 0];
        let boolean_function = BooleanFunction::from_truth_table(&bits).unwrap();
        bits[0] = 1;
        let mut copy = boolean_function.truth_table();
        copy[1] = 0;
        assert_eq!(boolean_function.truth_table(), vec![0, 1, 1, 0]);
    }

    #[test]
    fn test_boolean_function_from_u64_truth_table() {
        let boolean_function = BooleanFunction::from_u64_truth_table(30, 3).unwrap();
        assert_eq!(boolean_function.printable_hex_truth_table(), "1e");
        assert_eq!(boolean_function.variables_count(), 3);

        let boolean_function = BooleanFunction::from_u64_truth_table(0x1ff, 3).unwrap();
        assert_eq!(boolean_function.printable_hex_truth_table(), "ff");

        let boolean_function = BooleanFunction::from_u64_truth_table(u64::MAX, 6).unwrap();
        assert_eq!(boolean_function.hamming_weight(), 64);

        let boolean_function = BooleanFunction::from_u64_truth_table(2, 1).unwrap();
        assert_eq!(boolean_function.truth_table(), vec![0, 1]);

        assert_eq!(
            BooleanFunction::from_u64_truth_table(0, 0),
            Err(BooleanFunctionError::ArityOutOfRange {
                arity: 0,
                min: 1,
                max: 6
            })
        );
        assert!(BooleanFunction::from_u64_truth_table(0, 7).is_err());
    }

    #[test]
    fn test_boolean_function_from_hex_string_truth_table() {
        let boolean_function =
            BooleanFunction::from_hex_string_truth_table("7969817CC5893BA6AC326E47619F5AD0", 7)
                .unwrap();
        assert_eq!(boolean_function.variables_count(), 7);

        let boolean_function = BooleanFunction::from_hex_string_truth_table("fe12", 4).unwrap();
        assert_eq!(boolean_function.variables_count(), 4);
        assert_eq!(
            BooleanFunction::from_hex_string_truth_table("0xFE12", 4).unwrap(),
            boolean_function
        );
        assert_eq!(
            BooleanFunction::from_hex_string_truth_table("0XfE12", 4).unwrap(),
            boolean_function
        );
        assert_eq!(
            BooleanFunction::from_hex_string_truth_table("ffe12", 4).unwrap(),
            boolean_function
        );

        let boolean_function = BooleanFunction::from_hex_string_truth_table("1", 4).unwrap();
        assert_eq!(boolean_function.printable_hex_truth_table(), "0001");

        assert_eq!(
            BooleanFunction::from_hex_string_truth_table("fe1z", 4),
            Err(BooleanFunctionError::InvalidHex("fe1z".to_string()))
        );
        assert!(BooleanFunction::from_hex_string_truth_table("", 4).is_err());
        assert!(BooleanFunction::from_hex_string_truth_table("0x", 4).is_err());
        assert!(BooleanFunction::from_hex_string_truth_table("-1", 4).is_err());
        assert!(BooleanFunction::from_hex_string_truth_table("f_f", 4).is_err());
        assert!(matches!(
            BooleanFunction::from_hex_string_truth_table("ff", 0),
            Err(BooleanFunctionError::ArityOutOfRange { .. })
        ));
    }

    #[test]
    fn test_from_anf_polynomial_str() {
        let boolean_function =
            BooleanFunction::from_anf_polynomial_str("x0*x2*x3 + x2*x3 + x1 + 1", 4).unwrap();
        assert_eq!(
            boolean_function.algebraic_normal_form(),
            "1 + x1 + x2*x3 + x0*x2*x3"
        );

        let boolean_function = BooleanFunction::from_anf_polynomial_str("1", 3).unwrap();
        assert_eq!(boolean_function.truth_table(), vec![1; 8]);
        assert_eq!(boolean_function.algebraic_degree(), 0);

        let boolean_function = BooleanFunction::from_anf_polynomial_str("", 3).unwrap();
        assert_eq!(boolean_function.truth_table(), vec![0; 8]);
        assert_eq!(boolean_function.algebraic_normal_form(), "0");

        assert_eq!(
            BooleanFunction::from_anf_polynomial_str("x0 + x3", 3),
            Err(BooleanFunctionError::VariableOutOfRange {
                index: 3,
                variables_count: 3
            })
        );
        assert!(matches!(
            BooleanFunction::from_anf_polynomial_str("x0 + y1", 3),
            Err(BooleanFunctionError::AnfParseError(_))
        ));
        assert!(matches!(
            BooleanFunction::from_anf_polynomial_str("x0", 0),
            Err(BooleanFunctionError::ArityOutOfRange { .. })
        ));
    }

    #[test]
    fn test_from_anf_polynomial() {
        let polynomial = AnfPolynomial::from_str("x0*x1 + x0 + x1 + x2", 3).unwrap();
        let boolean_function = BooleanFunction::from_anf_polynomial(&polynomial);
        assert_eq!(boolean_function.printable_hex_truth_table(), "1e");
        assert_eq!(boolean_function.algebraic_normal_form_polynomial(), &polynomial);
    }

    #[test]
    fn test_compute() {
        let boolean_function = BooleanFunction::from_hex_string_truth_table("abce1234", 5).unwrap();
        assert_eq!(boolean_function.compute(0), false);
        assert_eq!(boolean_function.compute(2), true);
        assert_eq!(boolean_function.compute(8), false);
        assert_eq!(boolean_function.compute(31), true);
        assert_eq!(boolean_function(2), true);
        assert_eq!(boolean_function(8), false);

        let boolean_function =
            BooleanFunction::from_hex_string_truth_table("7969817CC5893BA6AC326E47619F5AD0", 7)
                .unwrap();
        assert_eq!(boolean_function(0), false);
        assert_eq!(boolean_function(4), true);
        assert_eq!(boolean_function(127), false);
    }

    #[cfg(not(feature = "unsafe_disable_safety_checks"))]
    #[test]
    #[should_panic(expected = "Too big input")]
    fn test_compute_out_of_range() {
        let boolean_function = BooleanFunction::from_hex_string_truth_table("abce1234", 5).unwrap();
        boolean_function.compute(32);
    }

    #[test]
    fn test_iter() {
        let boolean_function = BooleanFunction::from_u64_truth_table(0b1110, 2).unwrap();
        assert_eq!(
            boolean_function.iter().collect::<Vec<bool>>(),
            vec![false, true, true, true]
        );
        assert_eq!(
            boolean_function.iter().map(|v| v as u8).collect::<Vec<u8>>(),
            boolean_function.truth_table()
        );
    }

    #[test]
    fn test_printable_hex_truth_table() {
        let boolean_function =
            BooleanFunction::from_hex_string_truth_table("0069817CC5893BA6AC326E47619F5AD0", 7)
                .unwrap();
        assert_eq!(
            boolean_function.printable_hex_truth_table(),
            "0069817cc5893ba6ac326e47619f5ad0"
        );

        let boolean_function = BooleanFunction::from_hex_string_truth_table("fe12", 4).unwrap();
        assert_eq!(boolean_function.printable_hex_truth_table(), "fe12");

        let boolean_function = BooleanFunction::from_truth_table(&[0, 1]).unwrap();
        assert_eq!(boolean_function.printable_hex_truth_table(), "2");

        let boolean_function = BooleanFunction::from_truth_table(&[1]).unwrap();
        assert_eq!(boolean_function.printable_hex_truth_table(), "1");
    }

    #[test]
    fn test_clone_and_eq() {
        let boolean_function =
            BooleanFunction::from_hex_string_truth_table("7969817CC5893BA6AC326E47619F5AD0", 7)
                .unwrap();
        boolean_function.walsh_hadamard_spectrum();
        let cloned_boolean_function = boolean_function.clone();
        assert_eq!(&boolean_function, &cloned_boolean_function);

        let boolean_function2 = BooleanFunction::from_hex_string_truth_table("fe12", 4).unwrap();
        assert_ne!(&boolean_function2, &boolean_function);

        let boolean_function3 =
            BooleanFunction::from_hex_string_truth_table("0000fe12", 5).unwrap();
        assert_ne!(&boolean_function3, &boolean_function2);

        let boolean_function4 =
            BooleanFunction::from_hex_string_truth_table("0969817CC5893BA6AC326E47619F5AD0", 7)
                .unwrap();
        assert_ne!(&boolean_function, &boolean_function4);
    }

    #[test]
    fn test_scenarios() {
        let boolean_function = BooleanFunction::from_hex_string_truth_table("96", 3).unwrap();
        assert_eq!(boolean_function.truth_table(), vec![0, 1, 1, 0, 1, 0, 0, 1]);
        assert_eq!(boolean_function.hamming_weight(), 4);
        assert!(boolean_function.is_balanced());
        assert_eq!(boolean_function.algebraic_degree(), 1);
        assert_eq!(boolean_function.nonlinearity(), 0);

        let boolean_function = BooleanFunction::from_truth_table(&[0, 1]).unwrap();
        assert_eq!(boolean_function.hamming_weight(), 1);
        assert!(boolean_function.is_balanced());
        assert_eq!(boolean_function.algebraic_degree(), 1);
        assert_eq!(boolean_function.nonlinearity(), 0);

        let boolean_function = BooleanFunction::from_anf_polynomial_str("x0 + x1*x2", 3).unwrap();
        assert_eq!(boolean_function.algebraic_degree(), 2);

        let boolean_function = BooleanFunction::from_anf_polynomial_str("1", 3).unwrap();
        assert_eq!(boolean_function.algebraic_degree(), 0);
        assert_eq!(boolean_function.truth_table(), vec![1; 8]);

        let encodings = [
            BooleanFunction::from_truth_table(&[0, 1, 1, 0, 1, 0, 0, 1]).unwrap(),
            BooleanFunction::from_hex_string_truth_table("96", 3).unwrap(),
            BooleanFunction::from_u64_truth_table(150, 3).unwrap(),
        ];
        for boolean_function in &encodings {
            assert_eq!(boolean_function, &encodings[0]);
            assert_eq!(boolean_function.hamming_weight(), encodings[0].hamming_weight());
            assert_eq!(boolean_function.is_balanced(), encodings[0].is_balanced());
            assert_eq!(boolean_function.nonlinearity(), encodings[0].nonlinearity());
        }
    }

    #[test]
    fn test_parity_is_not_bent() {
        // x0 + x1 + x2 + x3, linear
        let boolean_function = BooleanFunction::from_hex_string_truth_table("6996", 4).unwrap();
        assert_eq!(boolean_function.algebraic_normal_form(), "x0 + x1 + x2 + x3");
        assert!(boolean_function.is_balanced());
        assert!(!boolean_function.is_bent());
        assert_eq!(boolean_function.nonlinearity(), 0);
        assert_eq!(boolean_function.resiliency_order(), Some(3));
    }

    #[test]
    fn test_is_bent() {
        let boolean_function = BooleanFunction::from_hex_string_truth_table("00000000", 5).unwrap();
        assert!(!boolean_function.is_bent());

        let boolean_function =
            BooleanFunction::from_hex_string_truth_table("0113077C165E76A8", 6).unwrap();
        assert!(boolean_function.is_bent());
        assert_eq!(boolean_function.nonlinearity(), 28);

        // x0*x1 + x2*x3
        let boolean_function = BooleanFunction::from_hex_string_truth_table("7888", 4).unwrap();
        assert!(boolean_function.is_bent());
        assert_eq!(boolean_function.nonlinearity(), 6);
        assert_eq!(boolean_function.hamming_weight(), 6);
        assert!(!boolean_function.is_balanced());
        assert_eq!(boolean_function.absolute_indicator(), 0);
        assert_eq!(boolean_function.differential_uniformity(), 8);

        let boolean_function =
            BooleanFunction::from_hex_string_truth_table("00000000ffffffff", 6).unwrap();
        assert!(!boolean_function.is_bent());
    }

    #[test]
    fn test_walsh_hadamard_spectrum() {
        let boolean_function =
            BooleanFunction::from_hex_string_truth_table("7969817CC5893BA6AC326E47619F5AD0", 7)
                .unwrap();
        let spectrum = boolean_function.walsh_hadamard_spectrum();
        assert_eq!(spectrum.len(), 128);
        assert_eq!(spectrum[0], 0);
        assert_eq!(spectrum[1], 0);
        assert_eq!(spectrum[7], -16);
        assert_eq!(spectrum[15], 16);
        assert_eq!(spectrum[126], 16);
        assert_eq!(spectrum[127], -16);

        let boolean_function = BooleanFunction::from_hex_string_truth_table("aa55aa55", 5).unwrap();
        let spectrum = boolean_function.walsh_hadamard_spectrum();
        assert_eq!(spectrum[0], 0);
        assert_eq!(spectrum[1], 0);
        assert_eq!(spectrum[9], -32);
        assert_eq!(spectrum[31], 0);

        let boolean_function = BooleanFunction::from_hex_string_truth_table("abce1234", 5).unwrap();
        let spectrum = boolean_function.walsh_hadamard_spectrum();
        assert_eq!(spectrum[0], 2);
        assert_eq!(spectrum[1], 6);
        assert_eq!(spectrum[2], -2);
        assert_eq!(spectrum[31], -6);
    }

    #[test]
    fn test_walsh_hadamard_spectrum_parallel() {
        let boolean_function =
            BooleanFunction::from_hex_string_truth_table("7969817CC5893BA6AC326E47619F5AD0", 7)
                .unwrap();
        for workers in [0, 1, 2, 8] {
            assert_eq!(
                boolean_function.walsh_hadamard_spectrum_parallel(workers),
                boolean_function.walsh_hadamard_spectrum()
            );
        }
    }

    #[test]
    fn test_absolute_walsh_hadamard_spectrum() {
        let boolean_function =
            BooleanFunction::from_hex_string_truth_table("7969817CC5893BA6AC326E47619F5AD0", 7)
                .unwrap();
        assert_eq!(
            boolean_function.absolute_walsh_hadamard_spectrum(),
            BTreeMap::from([(0, 64), (16, 64)])
        );

        let boolean_function = BooleanFunction::from_hex_string_truth_table("abce1234", 5).unwrap();
        assert_eq!(
            boolean_function.absolute_walsh_hadamard_spectrum(),
            BTreeMap::from([(6, 10), (10, 6), (2, 16)])
        );
    }

    #[test]
    fn test_auto_correlation_spectrum() {
        let boolean_function =
            BooleanFunction::from_hex_string_truth_table("7969817CC5893BA6AC326E47619F5AD0", 7)
                .unwrap();
        let spectrum = boolean_function.auto_correlation_spectrum();
        assert_eq!(spectrum[0], 128);
        assert_eq!(spectrum[1], -24);
        assert_eq!(spectrum[126], -8);
        assert_eq!(spectrum[127], -32);

        let boolean_function = BooleanFunction::from_hex_string_truth_table("03", 3).unwrap();
        assert_eq!(
            boolean_function.auto_correlation_spectrum(),
            &[8, 8, 0, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn test_absolute_autocorrelation_spectrum() {
        let boolean_function =
            BooleanFunction::from_hex_string_truth_table("7969817CC5893BA6AC326E47619F5AD0", 7)
                .unwrap();
        assert_eq!(
            boolean_function.absolute_autocorrelation(),
            BTreeMap::from([(0, 33), (8, 58), (16, 28), (24, 6), (32, 2), (128, 1)])
        );

        let boolean_function = BooleanFunction::from_hex_string_truth_table("abce1234", 5).unwrap();
        assert_eq!(
            boolean_function.absolute_autocorrelation(),
            BTreeMap::from([(4, 25), (12, 6), (32, 1)])
        );
    }

    #[test]
    fn test_algebraic_normal_form() {
        let boolean_function = BooleanFunction::from_u64_truth_table(30, 3).unwrap();
        assert_eq!(
            boolean_function.algebraic_normal_form(),
            "x0 + x1 + x0*x1 + x2"
        );
        assert_eq!(
            boolean_function.algebraic_normal_form_coefficients(),
            vec![0, 1, 1, 1, 1, 0, 0, 0]
        );

        let boolean_function = BooleanFunction::from_hex_string_truth_table("00000000", 5).unwrap();
        assert_eq!(boolean_function.algebraic_normal_form(), "0");

        let boolean_function = BooleanFunction::from_hex_string_truth_table("ffffffff", 5).unwrap();
        assert_eq!(boolean_function.algebraic_normal_form(), "1");

        let boolean_function =
            BooleanFunction::from_hex_string_truth_table("7969817CC5893BA6AC326E47619F5AD0", 7)
                .unwrap();
        let anf = boolean_function.algebraic_normal_form();
        assert_eq!(
            BooleanFunction::from_anf_polynomial_str(&anf, 7).unwrap(),
            boolean_function
        );
    }

    #[test]
    fn test_algebraic_degree() {
        let boolean_function = BooleanFunction::from_u64_truth_table(30, 3).unwrap();
        assert_eq!(boolean_function.algebraic_degree(), 2);

        let boolean_function = BooleanFunction::from_hex_string_truth_table("00000000", 5).unwrap();
        assert_eq!(boolean_function.algebraic_degree(), 0);

        let boolean_function = BooleanFunction::from_hex_string_truth_table("aa55aa55", 5).unwrap();
        assert_eq!(boolean_function.algebraic_degree(), 1);

        let boolean_function =
            BooleanFunction::from_hex_string_truth_table("80000000000000000000000000000000", 7)
                .unwrap();
        assert_eq!(boolean_function.algebraic_degree(), 7);
    }

    #[test]
    fn test_nonlinearity() {
        let boolean_function = BooleanFunction::from_hex_string_truth_table("00000000", 5).unwrap();
        assert_eq!(boolean_function.nonlinearity(), 0);

        let boolean_function = BooleanFunction::from_hex_string_truth_table("ffffffff", 5).unwrap();
        assert_eq!(boolean_function.nonlinearity(), 0);

        let boolean_function = BooleanFunction::from_hex_string_truth_table("0000000a", 5).unwrap();
        assert_eq!(boolean_function.nonlinearity(), 2);

        let boolean_function = BooleanFunction::from_truth_table(&[1]).unwrap();
        assert_eq!(boolean_function.nonlinearity(), 0);
    }

    #[test]
    fn test_correlation_immunity() {
        let boolean_function = BooleanFunction::from_hex_string_truth_table("dd0e", 4).unwrap();
        assert_eq!(boolean_function.correlation_immunity(), 0);

        let boolean_function = BooleanFunction::from_hex_string_truth_table("55C3AAC3", 5).unwrap();
        assert_eq!(boolean_function.correlation_immunity(), 1);

        let boolean_function = BooleanFunction::from_hex_string_truth_table("1f", 3).unwrap();
        assert_eq!(boolean_function.correlation_immunity(), 0);

        let boolean_function = BooleanFunction::from_hex_string_truth_table("ffff", 4).unwrap();
        assert_eq!(boolean_function.correlation_immunity(), 4);

        let boolean_function =
            BooleanFunction::from_hex_string_truth_table("00000000000000000000000000000000", 7)
                .unwrap();
        assert_eq!(boolean_function.correlation_immunity(), 7);

        let boolean_function =
            BooleanFunction::from_hex_string_truth_table("7969817CC5893BA6AC326E47619F5AD0", 7)
                .unwrap();
        assert_eq!(boolean_function.correlation_immunity(), 2);
    }

    #[test]
    fn test_resiliency_order() {
        let boolean_function = BooleanFunction::from_hex_string_truth_table("dd0e", 4).unwrap();
        assert_eq!(boolean_function.resiliency_order(), None);

        let boolean_function = BooleanFunction::from_hex_string_truth_table("55C3AAC3", 5).unwrap();
        assert_eq!(boolean_function.resiliency_order(), Some(1));

        let boolean_function = BooleanFunction::from_hex_string_truth_table("ffff", 4).unwrap();
        assert_eq!(boolean_function.resiliency_order(), None);

        let boolean_function =
            BooleanFunction::from_hex_string_truth_table("7969817CC5893BA6AC326E47619F5AD0", 7)
                .unwrap();
        assert_eq!(boolean_function.resiliency_order(), Some(2));
    }

    #[test]
    fn test_sum_of_square_indicator() {
        let boolean_function = BooleanFunction::from_hex_string_truth_table("ffffffff", 5).unwrap();
        assert_eq!(boolean_function.sum_of_square_indicator(), 32768);

        let boolean_function = BooleanFunction::from_hex_string_truth_table("0000", 4).unwrap();
        assert_eq!(boolean_function.sum_of_square_indicator(), 4096);

        let boolean_function =
            BooleanFunction::from_hex_string_truth_table("abcdef1234567890abcdef1234567890", 7)
                .unwrap();
        assert_eq!(boolean_function.sum_of_square_indicator(), 84992);

        let boolean_function =
            BooleanFunction::from_hex_string_truth_table("7969817CC5893BA6AC326E47619F5AD0", 7)
                .unwrap();
        assert_eq!(boolean_function.sum_of_square_indicator(), 32768);
    }

    #[test]
    fn test_absolute_indicator() {
        let boolean_function = BooleanFunction::from_hex_string_truth_table("1e", 3).unwrap();
        assert_eq!(boolean_function.absolute_indicator(), 8);

        let boolean_function = BooleanFunction::from_hex_string_truth_table("ffffffff", 5).unwrap();
        assert_eq!(boolean_function.absolute_indicator(), 32);

        let boolean_function = BooleanFunction::from_hex_string_truth_table("0000", 4).unwrap();
        assert_eq!(boolean_function.absolute_indicator(), 16);

        let boolean_function =
            BooleanFunction::from_hex_string_truth_table("abcdef1234567890abcdef1234567890", 7)
                .unwrap();
        assert_eq!(boolean_function.absolute_indicator(), 128);

        let boolean_function =
            BooleanFunction::from_hex_string_truth_table("7969817CC5893BA6AC326E47619F5AD0", 7)
                .unwrap();
        assert_eq!(boolean_function.absolute_indicator(), 32);
        assert_eq!(boolean_function.differential_uniformity(), 80);

        let boolean_function = BooleanFunction::from_truth_table(&[0]).unwrap();
        assert_eq!(boolean_function.absolute_indicator(), 0);
        assert_eq!(boolean_function.differential_uniformity(), 0);
    }

    #[test]
    fn test_is_rotation_symmetric() {
        // majority of 3 variables
        let boolean_function = BooleanFunction::from_u64_truth_table(0b11101000, 3).unwrap();
        assert!(boolean_function.is_rotation_symmetric());

        let boolean_function = BooleanFunction::from_hex_string_truth_table("96", 3).unwrap();
        assert!(boolean_function.is_rotation_symmetric());

        let boolean_function = BooleanFunction::from_anf_polynomial_str("x0*x1", 3).unwrap();
        assert!(!boolean_function.is_rotation_symmetric());

        // x0*x1 + x1*x2 + x2*x0
        let boolean_function =
            BooleanFunction::from_anf_polynomial_str("x0*x1 + x1*x2 + x0*x2", 3).unwrap();
        assert!(boolean_function.is_rotation_symmetric());

        // x0*x1 + x1*x2 + x2*x3 + x3*x0
        let boolean_function =
            BooleanFunction::from_anf_polynomial_str("x0*x1 + x1*x2 + x2*x3 + x0*x3", 4).unwrap();
        assert!(boolean_function.is_rotation_symmetric());

        let boolean_function = BooleanFunction::from_truth_table(&[1]).unwrap();
        assert!(boolean_function.is_rotation_symmetric());
    }

    #[test]
    fn test_transparency_order() {
        let boolean_function = BooleanFunction::from_hex_string_truth_table("0000", 4).unwrap();
        assert_eq!(boolean_function.transparency_order(), 0.0);

        let boolean_function = BooleanFunction::from_hex_string_truth_table("7888", 4).unwrap();
        assert_eq!(boolean_function.transparency_order(), 1.0);

        let boolean_function = BooleanFunction::from_hex_string_truth_table("03", 3).unwrap();
        assert!((boolean_function.transparency_order() - (1.0 - 8.0 / 56.0)).abs() < 1e-12);

        let boolean_function = BooleanFunction::from_truth_table(&[0]).unwrap();
        assert_eq!(boolean_function.transparency_order(), 1.0);
    }

    #[test]
    fn test_algebraic_immunity() {
        let boolean_function = BooleanFunction::from_truth_table(&[0]).unwrap();
        assert_eq!(boolean_function.algebraic_immunity(true).unwrap().degree(), 0);

        let boolean_function = BooleanFunction::from_truth_table(&[0, 1]).unwrap();
        let algebraic_immunity = boolean_function.algebraic_immunity(true).unwrap();
        assert_eq!(algebraic_immunity.degree(), 1);
        assert_eq!(algebraic_immunity.annihilator().unwrap().to_string(), "x0");

        let boolean_function =
            BooleanFunction::from_hex_string_truth_table("7969817CC5893BA6AC326E47619F5AD0", 7)
                .unwrap();
        let fast = boolean_function.algebraic_immunity(false).unwrap();
        let full = boolean_function.algebraic_immunity(true).unwrap();
        assert_eq!(fast.degree(), full.degree());
        assert!(fast.annihilator().is_none());
        let annihilator = BooleanFunction::from_anf_polynomial(full.annihilator().unwrap());
        assert_eq!(annihilator.algebraic_degree(), full.degree());
        let annihilates_function = (0..128).all(|x| !(annihilator(x) && boolean_function(x)));
        let annihilates_complement = (0..128).all(|x| !(annihilator(x) && !boolean_function(x)));
        assert!(annihilates_function || annihilates_complement);
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_shared_between_threads() {
        assert_send_sync::<BooleanFunction>();
        assert_send_sync::<AnfPolynomial>();

        let hex_truth_table = "7969817CC5893BA6AC326E47619F5AD0";
        let reference = BooleanFunction::from_hex_string_truth_table(hex_truth_table, 7).unwrap();
        let walsh = reference.walsh_hadamard_spectrum().to_vec();
        let autocorrelation = reference.auto_correlation_spectrum().to_vec();
        let anf = reference.algebraic_normal_form();
        let algebraic_immunity = reference.algebraic_immunity(false).unwrap();

        // caches are empty, every thread races to fill them
        let boolean_function = BooleanFunction::from_hex_string_truth_table(hex_truth_table, 7).unwrap();
        std::thread::scope(|scope| {
            let handles = (0..8)
                .map(|_| {
                    scope.spawn(|| {
                        (
                            boolean_function.walsh_hadamard_spectrum().to_vec(),
                            boolean_function.auto_correlation_spectrum().to_vec(),
                            boolean_function.algebraic_normal_form(),
                            boolean_function.algebraic_immunity(false).unwrap(),
                        )
                    })
                })
                .collect::<Vec<_>>();
            for handle in handles {
                let (thread_walsh, thread_autocorrelation, thread_anf, thread_algebraic_immunity) =
                    handle.join().unwrap();
                assert_eq!(thread_walsh, walsh);
                assert_eq!(thread_autocorrelation, autocorrelation);
                assert_eq!(thread_anf, anf);
                assert_eq!(thread_algebraic_immunity, algebraic_immunity);
            }
        });

        assert_eq!(boolean_function.walsh_hadamard_spectrum(), walsh.as_slice());
        assert_eq!(boolean_function.auto_correlation_spectrum(), autocorrelation.as_slice());
        assert_eq!(boolean_function.algebraic_normal_form(), anf);
    }

    #[test]
    fn test_arity_zero_conventions() {
        for value in [0u8, 1] {
            let boolean_function = BooleanFunction::from_truth_table(&[value]).unwrap();
            assert_eq!(boolean_function.variables_count(), 0);
            assert!(!boolean_function.is_balanced());
            assert_eq!(boolean_function.resiliency_order(), None);
            assert_eq!(boolean_function.nonlinearity(), 0);
            assert_eq!(boolean_function.algebraic_degree(), 0);
            assert_eq!(boolean_function.correlation_immunity(), 0);
            assert_eq!(boolean_function.walsh_hadamard_spectrum().len(), 1);
            assert_eq!(boolean_function.auto_correlation_spectrum(), &[1]);
            assert_eq!(boolean_function.sum_of_square_indicator(), 1);
        }
    }

    #[test]
    fn test_properties_on_all_small_functions() {
        for num_variables in 1..=4 {
            let length = 1usize << num_variables;
            for boolean_function in all_functions(num_variables) {
                let truth_table = boolean_function.truth_table();
                let weight = boolean_function.hamming_weight();

                assert_eq!(
                    boolean_function.is_balanced(),
                    weight == (length / 2) as u64
                );

                let walsh = boolean_function.walsh_hadamard_spectrum();
                for (omega, value) in walsh.iter().enumerate() {
                    let expected: i64 = (0..length)
                        .map(|x| {
                            if (truth_table[x] as u32 + fast_binary_dot_product(omega, x)) & 1 == 0 {
                                1
                            } else {
                                -1
                            }
                        })
                        .sum();
                    assert_eq!(*value, expected);
                }
                assert_eq!(
                    walsh.iter().map(|v| v * v).sum::<i64>(),
                    (length * length) as i64
                );

                let autocorrelation = boolean_function.auto_correlation_spectrum();
                for (a, value) in autocorrelation.iter().enumerate() {
                    let expected: i64 = (0..length)
                        .map(|x| if truth_table[x] == truth_table[x ^ a] { 1 } else { -1 })
                        .sum();
                    assert_eq!(*value, expected);
                }

                if boolean_function.is_bent() {
                    assert_eq!(num_variables % 2, 0);
                    let half_bias = 1u64 << (num_variables / 2 - 1);
                    assert!(weight == (length / 2) as u64 - half_bias
                        || weight == (length / 2) as u64 + half_bias);
                    assert!(!boolean_function.is_balanced());
                }

                assert_eq!(boolean_function.absolute_indicator() % 2, 0);
                assert_eq!(
                    boolean_function.differential_uniformity(),
                    (length / 2) as u64 + boolean_function.absolute_indicator() / 2
                );

                match boolean_function.resiliency_order() {
                    Some(order) => {
                        assert!(boolean_function.is_balanced());
                        assert_eq!(order, boolean_function.correlation_immunity());
                    }
                    None => assert!(!boolean_function.is_balanced()),
                }

                let anf = boolean_function.algebraic_normal_form();
                assert_eq!(
                    BooleanFunction::from_anf_polynomial_str(&anf, num_variables).unwrap(),
                    boolean_function
                );
                assert_eq!(
                    BooleanFunction::from_anf_polynomial(
                        boolean_function.algebraic_normal_form_polynomial()
                    ),
                    boolean_function
                );

                let ai = boolean_function.algebraic_immunity(false).unwrap().degree();
                assert!(ai >= 1 && ai <= (num_variables + 1) / 2);
                assert!(ai <= boolean_function.algebraic_degree().max(1));
            }
        }
    }
}
