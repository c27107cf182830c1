//! Computation of every metric of a Boolean function at once, optionally timed step by step.

use crate::BooleanFunction;
use log::{debug, warn};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Options of [analyze] and [analyze_timed].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// Also solve for an annihilator of lowest degree, instead of only checking the algebraic immunity.
    pub find_annihilator: bool,
    /// Largest variable count for which the annihilator is solved for, bigger functions only get the degree.
    pub annihilator_max_variables: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        AnalysisOptions {
            find_annihilator: false,
            annihilator_max_variables: 8,
        }
    }
}

/// Every metric of a Boolean function, as returned by the [BooleanFunction] accessors of the same name.
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanFunctionAnalysis {
    /// Variable count $n$.
    pub variables_count: usize,
    /// Truth table, $2^n$ values 0 or 1.
    pub truth_table: Vec<u8>,
    /// See [BooleanFunction::hamming_weight].
    pub hamming_weight: u64,
    /// See [BooleanFunction::is_balanced].
    pub is_balanced: bool,
    /// See [BooleanFunction::algebraic_normal_form].
    pub algebraic_normal_form: String,
    /// See [BooleanFunction::algebraic_degree].
    pub algebraic_degree: usize,
    /// See [BooleanFunction::walsh_hadamard_spectrum].
    pub walsh_hadamard_spectrum: Vec<i64>,
    /// See [BooleanFunction::auto_correlation_spectrum].
    pub auto_correlation_spectrum: Vec<i64>,
    /// See [BooleanFunction::transparency_order].
    pub transparency_order: f64,
    /// See [BooleanFunction::nonlinearity].
    pub nonlinearity: u64,
    /// See [BooleanFunction::correlation_immunity].
    pub correlation_immunity: usize,
    /// See [BooleanFunction::resiliency_order].
    pub resiliency_order: Option<usize>,
    /// See [BooleanFunction::is_bent].
    pub is_bent: bool,
    /// See [BooleanFunction::sum_of_square_indicator].
    pub sum_of_square_indicator: u128,
    /// See [BooleanFunction::is_rotation_symmetric].
    pub is_rotation_symmetric: bool,
    /// See [BooleanFunction::absolute_walsh_hadamard_spectrum].
    pub absolute_walsh_hadamard_spectrum: BTreeMap<u64, usize>,
    /// See [BooleanFunction::absolute_autocorrelation].
    pub absolute_autocorrelation: BTreeMap<u64, usize>,
    /// See [BooleanFunction::absolute_indicator].
    pub absolute_indicator: u64,
    /// See [BooleanFunction::differential_uniformity].
    pub differential_uniformity: u64,
    /// See [BooleanFunction::algebraic_immunity], `None` if the search failed.
    pub algebraic_immunity: Option<usize>,
    /// Annihilator in ANF, when requested by [AnalysisOptions::find_annihilator] and found.
    pub annihilator: Option<String>,
}

/// [BooleanFunctionAnalysis] with the time spent on each step.
#[derive(Debug, Clone)]
pub struct TimedAnalysis {
    /// Computed metrics.
    pub analysis: BooleanFunctionAnalysis,
    /// Step names with their duration, in execution order.
    pub steps: Vec<(&'static str, Duration)>,
    /// Duration of the whole analysis.
    pub total: Duration,
}

impl TimedAnalysis {
    /// Duration of the step named `name`, if it ran.
    pub fn step(&self, name: &str) -> Option<Duration> {
        self.steps
            .iter()
            .find(|(step_name, _)| *step_name == name)
            .map(|(_, duration)| *duration)
    }
}

/// Computes every metric of `boolean_function`.
///
/// Spectra are shared through the function caches, each transform running at most once.
/// A failure of the algebraic immunity search is logged, and leaves [BooleanFunctionAnalysis::algebraic_immunity] to `None`.
///
/// # Example
/// ```rust
/// use boolean_function_metrics::{analyze, AnalysisOptions, BooleanFunction};
///
/// let boolean_function = BooleanFunction::from_anf_polynomial_str("x0*x1 + x2*x3", 4).unwrap();
/// let analysis = analyze(&boolean_function, &AnalysisOptions::default());
/// assert!(analysis.is_bent);
/// assert_eq!(analysis.nonlinearity, 6);
/// assert_eq!(analysis.algebraic_immunity, Some(2));
/// ```
pub fn analyze(
    boolean_function: &BooleanFunction,
    options: &AnalysisOptions,
) -> BooleanFunctionAnalysis {
    analyze_timed(boolean_function, options).analysis
}

/// Same as [analyze], timing each step.
///
/// Steps are named `construct_result`, `hamming_weight`, `is_balanced`, `anf`, `algebraic_degree`, `walsh_hadamard`,
/// `autocorrelation`, `transparency_order`, `nonlinearity`, `correlation_immunity`, `resiliency_order`, `is_bent`,
/// `sum_of_square_indicator`, `rotation_symmetric`, `absolute_walsh_spectrum`, `absolute_autocorr_spectrum`,
/// `absolute_indicator`, `differential_uniformity`, then `algebraic_immunity_fast`, or `algebraic_immunity_full`
/// when the annihilator is solved for.
pub fn analyze_timed(
    boolean_function: &BooleanFunction,
    options: &AnalysisOptions,
) -> TimedAnalysis {
    let f = boolean_function;
    let start = Instant::now();
    let mut steps = Vec::with_capacity(19);

    let (variables_count, truth_table) = timed(&mut steps, "construct_result", || {
        (f.variables_count(), f.truth_table())
    });
    let hamming_weight = timed(&mut steps, "hamming_weight", || f.hamming_weight());
    let is_balanced = timed(&mut steps, "is_balanced", || f.is_balanced());
    let algebraic_normal_form = timed(&mut steps, "anf", || f.algebraic_normal_form());
    let algebraic_degree = timed(&mut steps, "algebraic_degree", || f.algebraic_degree());
    let walsh_hadamard_spectrum = timed(&mut steps, "walsh_hadamard", || {
        f.walsh_hadamard_spectrum().to_vec()
    });
    let auto_correlation_spectrum = timed(&mut steps, "autocorrelation", || {
        f.auto_correlation_spectrum().to_vec()
    });
    let transparency_order = timed(&mut steps, "transparency_order", || f.transparency_order());
    let nonlinearity = timed(&mut steps, "nonlinearity", || f.nonlinearity());
    let correlation_immunity =
        timed(&mut steps, "correlation_immunity", || f.correlation_immunity());
    let resiliency_order = timed(&mut steps, "resiliency_order", || f.resiliency_order());
    let is_bent = timed(&mut steps, "is_bent", || f.is_bent());
    let sum_of_square_indicator = timed(&mut steps, "sum_of_square_indicator", || {
        f.sum_of_square_indicator()
    });
    let is_rotation_symmetric =
        timed(&mut steps, "rotation_symmetric", || f.is_rotation_symmetric());
    let absolute_walsh_hadamard_spectrum = timed(&mut steps, "absolute_walsh_spectrum", || {
        f.absolute_walsh_hadamard_spectrum()
    });
    let absolute_autocorrelation = timed(&mut steps, "absolute_autocorr_spectrum", || {
        f.absolute_autocorrelation()
    });
    let absolute_indicator = timed(&mut steps, "absolute_indicator", || f.absolute_indicator());
    let differential_uniformity = timed(&mut steps, "differential_uniformity", || {
        f.differential_uniformity()
    });

    let with_annihilator =
        options.find_annihilator && variables_count <= options.annihilator_max_variables;
    let step_name = if with_annihilator {
        "algebraic_immunity_full"
    } else {
        "algebraic_immunity_fast"
    };
    let (algebraic_immunity, annihilator) = timed(&mut steps, step_name, || {
        match f.algebraic_immunity(with_annihilator) {
            Ok(algebraic_immunity) => (
                Some(algebraic_immunity.degree()),
                algebraic_immunity
                    .annihilator()
                    .map(|annihilator| annihilator.to_string()),
            ),
            Err(error) => {
                warn!("algebraic immunity search failed: {}", error);
                (None, None)
            }
        }
    });

    let total = start.elapsed();
    debug!("analysis of a {} variable function: {:?}", variables_count, total);
    TimedAnalysis {
        analysis: BooleanFunctionAnalysis {
            variables_count,
            truth_table,
            hamming_weight,
            is_balanced,
            algebraic_normal_form,
            algebraic_degree,
            walsh_hadamard_spectrum,
            auto_correlation_spectrum,
            transparency_order,
            nonlinearity,
            correlation_immunity,
            resiliency_order,
            is_bent,
            sum_of_square_indicator,
            is_rotation_symmetric,
            absolute_walsh_hadamard_spectrum,
            absolute_autocorrelation,
            absolute_indicator,
            differential_uniformity,
            algebraic_immunity,
            annihilator,
        },
        steps,
        total,
    }
}

fn timed<T>(
    steps: &mut Vec<(&'static str, Duration)>,
    name: &'static str,
    compute: impl FnOnce() -> T,
) -> T {
    let start = Instant::now();
    let value = compute();
    let elapsed = start.elapsed();
    debug!("{}: {:?}", name, elapsed);
    steps.push((name, elapsed));
    value
}
