use crate::transform::{fast_mobius_transform_packed, inverse_fast_mobius_transform_packed};
use crate::truth_table::TruthTable;
use crate::BooleanFunctionError;
use crate::BooleanFunctionError::{AnfParseError, VariableOutOfRange};
use crate::{check_arity, MAX_VARIABLES};
use itertools::Itertools;
use std::fmt::Display;

/// Polynomial over GF(2) in Algebraic Normal Form.
///
/// Coefficient `i` is the coefficient of the monomial made of every variable $x_j$ whose bit $j$ is set in `i`,
/// so coefficient 0 is the constant term, coefficient `0b101` the monomial `x0*x2`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct AnfPolynomial {
    coefficients: TruthTable,
    num_variables: usize,
}

impl AnfPolynomial {
    pub(crate) fn from_coefficients(coefficients: TruthTable) -> Self {
        AnfPolynomial {
            num_variables: coefficients.variables_count(),
            coefficients,
        }
    }

    /// ANF of the function whose truth table is given, by forward Möbius transform.
    pub(crate) fn from_truth_table(truth_table: &TruthTable) -> Self {
        let mut coefficients = truth_table.clone();
        fast_mobius_transform_packed(&mut coefficients);
        Self::from_coefficients(coefficients)
    }

    /// Truth table of the polynomial, by inverse Möbius transform.
    pub(crate) fn to_truth_table(&self) -> TruthTable {
        let mut truth_table = self.coefficients.clone();
        inverse_fast_mobius_transform_packed(&mut truth_table);
        truth_table
    }

    /// Parses an ANF expression like "`x0*x2*x3 + x2*x3 + x1 + 1`".
    ///
    /// - Terms are joined with `+` and summed over GF(2): a monomial written twice cancels out.
    /// - A term is either the constant `1`, or a `*`-joined product of variables `x0` to `x(n-1)`.
    /// - Whitespaces are ignored and variable names are case-insensitive.
    /// - An empty expression, or `0`, is the null polynomial.
    ///
    /// # Parameters
    /// - `anf_polynomial`: The string representation of the ANF form
    /// - `num_variables`: Variable count of the polynomial
    ///
    /// # Returns
    /// The polynomial, or [BooleanFunctionError::AnfParseError] on a malformed token or term,
    /// [BooleanFunctionError::VariableOutOfRange] if a variable index is not lower than `num_variables`,
    /// [BooleanFunctionError::ArityOutOfRange] if `num_variables` is 0, or if $2^n$ does not fit in a `usize`.
    ///
    /// # Example
    /// ```rust
    /// use boolean_function_metrics::AnfPolynomial;
    ///
    /// let polynomial = AnfPolynomial::from_str("X2 * x1 + x0 + 1 + x1*x2", 3).unwrap();
    /// assert_eq!(polynomial.to_string(), "1 + x0");
    /// ```
    pub fn from_str(
        anf_polynomial: &str,
        num_variables: usize,
    ) -> Result<Self, BooleanFunctionError> {
        check_arity(num_variables, MAX_VARIABLES)?;
        let tokens = tokenize(anf_polynomial)?;
        let mut coefficients = TruthTable::zeroed(1 << num_variables);
        for monomial in parse_monomials(&tokens, num_variables)? {
            coefficients.flip(monomial);
        }
        Ok(Self::from_coefficients(coefficients))
    }

    /// Variable count of the polynomial.
    pub fn num_variables(&self) -> usize {
        self.num_variables
    }

    /// The $2^n$ coefficients, as 0 or 1 bytes.
    pub fn coefficients(&self) -> Vec<u8> {
        self.coefficients.to_bytes()
    }

    /// Indices of the monomials having a coefficient 1, in ascending order.
    pub fn monomials(&self) -> Vec<usize> {
        self.coefficients.ones().collect()
    }

    /// Returns `true` for the null polynomial.
    pub fn is_zero(&self) -> bool {
        self.coefficients.count_ones() == 0
    }

    /// Degree of the polynomial: the largest variable count among its monomials, 0 for the null polynomial.
    pub fn degree(&self) -> usize {
        self.coefficients
            .ones()
            .map(|monomial| monomial.count_ones() as usize)
            .max()
            .unwrap_or(0)
    }

    fn monomial_to_string(&self, monomial: usize) -> String {
        if monomial == 0 {
            return String::from("1");
        }
        (0..self.num_variables)
            .filter(|i| monomial & (1 << i) != 0)
            .map(|i| format!("x{}", i))
            .join("*")
    }
}

/// Canonical form: monomials by ascending index, joined with `" + "`, `"0"` for the null polynomial.
impl Display for AnfPolynomial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let polynomial = self
            .coefficients
            .ones()
            .map(|monomial| self.monomial_to_string(monomial))
            .join(" + ");
        write!(f, "{}", polynomial)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Plus,
    Star,
    Zero,
    One,
    Variable(usize),
}

fn tokenize(expression: &str) -> Result<Vec<Token>, BooleanFunctionError> {
    let mut chars = expression
        .chars()
        .filter(|c| !c.is_whitespace())
        .peekable();
    let mut tokens = Vec::new();
    while let Some(c) = chars.next() {
        let token = match c {
            '+' => Token::Plus,
            '*' => Token::Star,
            '0' => Token::Zero,
            '1' => Token::One,
            'x' | 'X' => {
                let mut index: Option<usize> = None;
                while let Some(digit) = chars.peek().and_then(|d| d.to_digit(10)) {
                    chars.next();
                    index = index
                        .unwrap_or(0)
                        .checked_mul(10)
                        .and_then(|i| i.checked_add(digit as usize))
                        .map(Some)
                        .ok_or_else(|| AnfParseError(String::from("too big variable index")))?;
                }
                Token::Variable(index.ok_or_else(|| {
                    AnfParseError(format!("missing variable index after '{}'", c))
                })?)
            }
            _ => return Err(AnfParseError(format!("unexpected character '{}'", c))),
        };
        tokens.push(token);
    }
    Ok(tokens)
}

/// Monomial index of every term, duplicates included.
fn parse_monomials(
    tokens: &[Token],
    num_variables: usize,
) -> Result<Vec<usize>, BooleanFunctionError> {
    if tokens.is_empty() || tokens == [Token::Zero] {
        return Ok(Vec::new());
    }
    tokens
        .split(|token| *token == Token::Plus)
        .map(|term| parse_term(term, num_variables))
        .collect()
}

fn parse_term(term: &[Token], num_variables: usize) -> Result<usize, BooleanFunctionError> {
    match term {
        [] => Err(AnfParseError(String::from("empty term"))),
        [Token::One] => Ok(0),
        _ => term
            .split(|token| *token == Token::Star)
            .try_fold(0usize, |monomial, factor| match factor {
                [Token::Variable(index)] if *index < num_variables => Ok(monomial | (1 << index)),
                [Token::Variable(index)] => Err(VariableOutOfRange {
                    index: *index,
                    variables_count: num_variables,
                }),
                [] => Err(AnfParseError(String::from("empty factor"))),
                _ => Err(AnfParseError(format!("invalid factor {:?}", factor))),
            }),
    }
}
