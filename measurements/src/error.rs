pub type Result<T = (), E = Error> = std::result::Result<T, E>;

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// The operands belong to different unit families, for example grams and kilometers.
    #[error("attempt to {operation} measurements with non-equal units: {lhs} and {rhs}")]
    IncompatibleUnits { operation: Operation, lhs: String, rhs: String },

    /// The operands cannot be ordered: either side is not a dimension, or their base units differ.
    #[error("attempt to compare measurements with non-equal dimensions: {lhs} and {rhs}")]
    IncompatibleDimensions { lhs: String, rhs: String },

    /// The dimension is not a member of any unit family, so it has no base unit.
    #[error("`{symbol}` does not belong to a unit family and has no base unit")]
    UnsupportedOperation { symbol: String },

    #[error("unknown unit family `{0}`")]
    UnknownFamily(String),

    #[error("unknown locale `{0}`")]
    UnknownLocale(String),
}

/// Operation that combines two or more measurements.
#[derive(Copy, Clone, Debug, Eq, PartialEq, derive_more::Display)]
pub enum Operation {
    #[display("add")]
    Add,

    #[display("subtract")]
    Subtract,

    #[display("multiply")]
    Multiply,

    #[display("divide")]
    Divide,

    #[display("sum")]
    Sum,

    #[display("convert")]
    Convert,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incompatible_units_message() {
        let error = Error::IncompatibleUnits {
            operation: Operation::Add,
            lhs: "g".to_owned(),
            rhs: "km".to_owned(),
        };
        assert_eq!(
            error.to_string(),
            "attempt to add measurements with non-equal units: g and km"
        );
    }

    #[test]
    fn unsupported_operation_message() {
        let error = Error::UnsupportedOperation { symbol: "a".to_owned() };
        assert_eq!(error.to_string(), "`a` does not belong to a unit family and has no base unit");
    }
}
