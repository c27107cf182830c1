use thiserror::Error;

/// Errors raised while building a Boolean function or searching for an annihilator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BooleanFunctionError {
    /// The truth table length is not a power of 2.
    #[error("Truth table length must be a power of 2, got {0}")]
    InvalidLength(usize),
    /// A truth table entry is neither 0 nor 1.
    #[error("Truth table can only contain 0 or 1, found {value} at index {index}")]
    InvalidValue {
        /// Position of the faulty entry.
        index: usize,
        /// Faulty value.
        value: u8,
    },
    /// The requested variable count is outside the range accepted by the constructor.
    #[error("Variable count must be between {min} and {max}, got {arity}")]
    ArityOutOfRange {
        /// Requested variable count.
        arity: usize,
        /// Smallest accepted variable count.
        min: usize,
        /// Largest accepted variable count.
        max: usize,
    },
    /// The hexadecimal string cannot be parsed.
    #[error("Invalid hex string: {0}")]
    InvalidHex(String),
    /// The ANF expression is malformed.
    #[error("Error parsing ANF expression: {0}")]
    AnfParseError(String),
    /// The ANF expression references a variable index >= variable count.
    #[error("Variable x{index} out of range (n={variables_count})")]
    VariableOutOfRange {
        /// Index of the variable found in the expression.
        index: usize,
        /// Variable count of the function.
        variables_count: usize,
    },
    /// Internal invariant violated while solving the annihilator linear system.
    #[error("Annihilator search failed, this shouldn't happen: {0}")]
    AnnihilatorSearchFailure(String),
}
