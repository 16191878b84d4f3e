use std::fmt::{Display, Formatter, Result};

/// The arithmetic operation an [`Error`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    MultiplyWiden,
    DotProductScaled,
    Factorial,
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let name = match self {
            Operation::MultiplyWiden => "multiply_widen",
            Operation::DotProductScaled => "dot_product_scaled",
            Operation::Factorial => "factorial",
        };
        f.write_str(name)
    }
}

/// Failures reported by the checked operations and the C ABI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The exact result does not fit the fixed-width result type.
    Overflow { op: Operation },

    /// A declared element count disagrees with the sequence actually passed.
    LengthMismatch { declared: usize, actual: usize },

    /// A null sequence pointer was passed with a non-zero length.
    NullSequence { len: usize },

    /// A required pointer argument was null.
    NullArgument { name: &'static str },
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Error::Overflow { op } => write!(f, "{} overflowed its fixed-width result", op),
            Error::LengthMismatch { declared, actual } => write!(
                f,
                "declared length {} does not match sequence length {}",
                declared, actual
            ),
            Error::NullSequence { len } => {
                write!(f, "null sequence pointer with length {}", len)
            }
            Error::NullArgument { name } => write!(f, "argument `{}` is null", name),
        }
    }
}

impl std::error::Error for Error {}
