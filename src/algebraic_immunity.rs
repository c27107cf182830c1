//! Algebraic immunity: lowest degree of a non-null annihilator of $f$ or of $f + 1$.

use crate::bit_matrix::BitMatrix;
use crate::truth_table::TruthTable;
use crate::utils::half_length;
use crate::{AnfPolynomial, BooleanFunctionError};
use log::{debug, trace};
use num_integer::binomial;

/// Result of an algebraic immunity computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgebraicImmunity {
    degree: usize,
    annihilator: Option<AnfPolynomial>,
}

impl AlgebraicImmunity {
    /// Algebraic immunity of the function.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Annihilator of degree [AlgebraicImmunity::degree], either of $f$ or of $f + 1$.
    ///
    /// `None` unless the annihilator was requested, or for the 0-variable function.
    pub fn annihilator(&self) -> Option<&AnfPolynomial> {
        self.annihilator.as_ref()
    }
}

/// Linear system of a candidate annihilator $g$ of degree $\le d$: one unknown per monomial of degree $\le d$,
/// one equation $g(x) = 0$ per input $x$ of the support being annihilated.
struct AnnihilatorSystem {
    monomials: Vec<usize>,
    support: Vec<usize>,
}

impl AnnihilatorSystem {
    fn new(truth_table: &TruthTable, degree: usize, annihilate_function: bool) -> Self {
        let variables_count = truth_table.variables_count();
        let unknowns_count: usize = (0..=degree.min(variables_count))
            .map(|k| binomial(variables_count, k))
            .sum();
        let mut monomials = Vec::with_capacity(unknowns_count);
        monomials.extend((0..truth_table.len()).filter(|m| m.count_ones() as usize <= degree));
        AnnihilatorSystem {
            monomials,
            support: truth_table.positions(annihilate_function).collect(),
        }
    }

    /// Row `i` holds the value of each monomial at the `i`-th support input.
    fn matrix(&self) -> BitMatrix {
        let mut matrix = BitMatrix::new(self.support.len(), self.monomials.len());
        for (row, input) in self.support.iter().enumerate() {
            for (col, monomial) in self.monomials.iter().enumerate() {
                if input & monomial == *monomial {
                    matrix.set(row, col, true);
                }
            }
        }
        matrix
    }

    fn has_solution(&self) -> bool {
        if self.support.len() < self.monomials.len() {
            return true;
        }
        let rank = self.matrix().reduce_to_echelon();
        trace!("rank {} for {} unknowns", rank, self.monomials.len());
        rank < self.monomials.len()
    }

    fn find_solution(
        &self,
        variables_count: usize,
    ) -> Result<Option<AnfPolynomial>, BooleanFunctionError> {
        let mut coefficients = TruthTable::zeroed(1 << variables_count);
        if self.support.is_empty() {
            // x0 annihilates a constant
            coefficients.flip(1);
            return Ok(Some(AnfPolynomial::from_coefficients(coefficients)));
        }
        let mut matrix = self.matrix();
        let rank = matrix.reduce_to_echelon();
        trace!("rank {} for {} unknowns", rank, self.monomials.len());
        if rank >= self.monomials.len() {
            return Ok(None);
        }
        let solution = matrix.solve(rank);
        if !solution.iter().any(|value| *value) {
            return Err(BooleanFunctionError::AnnihilatorSearchFailure(format!(
                "null solution with rank {} < {} unknowns",
                rank,
                self.monomials.len()
            )));
        }
        solution
            .iter()
            .zip(self.monomials.iter())
            .filter(|(value, _)| **value)
            .for_each(|(_, monomial)| coefficients.flip(*monomial));
        Ok(Some(AnfPolynomial::from_coefficients(coefficients)))
    }
}

/// Searches the lowest degree $d \le \lceil n/2 \rceil$ having a non-null annihilator of $f$ or $f + 1$.
///
/// For each degree, the support with the fewest inputs is annihilated first.
/// With `with_annihilator`, the explicit annihilator is solved for, otherwise only its existence is checked.
pub(crate) fn algebraic_immunity(
    truth_table: &TruthTable,
    with_annihilator: bool,
) -> Result<AlgebraicImmunity, BooleanFunctionError> {
    let variables_count = truth_table.variables_count();
    match variables_count {
        0 => {
            return Ok(AlgebraicImmunity {
                degree: 0,
                annihilator: None,
            })
        }
        1 => {
            let annihilator = with_annihilator
                .then(|| AnfPolynomial::from_str("x0", 1))
                .transpose()?;
            return Ok(AlgebraicImmunity {
                degree: 1,
                annihilator,
            });
        }
        _ => {}
    }

    let max_degree = variables_count.div_ceil(2);
    let function_first = truth_table.count_ones() <= half_length(variables_count);
    let check_order = [function_first, !function_first];

    for degree in 1..=max_degree {
        for annihilate_function in check_order {
            let system = AnnihilatorSystem::new(truth_table, degree, annihilate_function);
            debug!(
                "degree {}: annihilating {}, {} equations, {} unknowns",
                degree,
                if annihilate_function { "f" } else { "f + 1" },
                system.support.len(),
                system.monomials.len()
            );
            if with_annihilator {
                if let Some(annihilator) = system.find_solution(variables_count)? {
                    return Ok(AlgebraicImmunity {
                        degree,
                        annihilator: Some(annihilator),
                    });
                }
            } else if system.has_solution() {
                return Ok(AlgebraicImmunity {
                    degree,
                    annihilator: None,
                });
            }
        }
    }

    debug!("no annihilator up to degree {}", max_degree);
    Ok(AlgebraicImmunity {
        degree: max_degree,
        annihilator: None,
    })
}
