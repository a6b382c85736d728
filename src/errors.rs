//! Error types
//!
//! The engines themselves never fail on well-formed input. Errors only arise at
//! the edges:
//! - [`ContainerError`]: building a container from caller-supplied data
//! - [`SessionError`]: presentation-tier validation of operands and capacity
//! - [`ConfigError`]: command-line parsing

use std::fmt;

/// A container could not be built from the supplied values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerError {
    /// Slot 0 is occupied, or there are no slots at all
    MissingSentinel,

    /// A heap slot past the sentinel holds no value
    EmptySlot { index: usize },

    /// value[index] is smaller than its parent
    NotAHeap { index: usize },

    /// value[index] is smaller than value[index - 1]
    NotSorted { index: usize },
}

impl fmt::Display for ContainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerError::MissingSentinel => {
                write!(f, "Heap slot 0 must be an empty sentinel")
            }
            ContainerError::EmptySlot { index } => {
                write!(f, "Heap slot {} is empty", index)
            }
            ContainerError::NotAHeap { index } => {
                write!(f, "Min-heap property violated at slot {} (smaller than its parent)", index)
            }
            ContainerError::NotSorted { index } => {
                write!(f, "Array is not ascending at index {}", index)
            }
        }
    }
}

impl std::error::Error for ContainerError {}

/// An operation was rejected before reaching an engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Operand text is not an integer
    InvalidOperand { input: String },

    /// Operand outside the accepted range
    ValueOutOfRange { value: i64, min: i32, max: i32 },

    /// Heap already holds the maximum number of values
    CapacityExceeded { limit: usize },

    /// Nothing to extract
    EmptyContainer,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::InvalidOperand { input } => {
                write!(f, "'{}' is not a number", input)
            }
            SessionError::ValueOutOfRange { value, min, max } => {
                write!(f, "{} is out of range ({}..={})", value, min, max)
            }
            SessionError::CapacityExceeded { limit } => {
                write!(f, "Heap is full ({} values max)", limit)
            }
            SessionError::EmptyContainer => write!(f, "Nothing to extract: container is empty"),
        }
    }
}

impl std::error::Error for SessionError {}

/// Command-line arguments could not be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnknownFlag { flag: String },

    MissingValue { flag: String },

    InvalidNumber { flag: String, input: String },

    SpeedOutOfRange { speed: u64, min: u64, max: u64 },

    TooManyValues { count: usize, limit: usize },

    /// A positional initial value was rejected
    InvalidValue(SessionError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownFlag { flag } => write!(f, "Unknown option '{}'", flag),
            ConfigError::MissingValue { flag } => {
                write!(f, "Option '{}' requires a value", flag)
            }
            ConfigError::InvalidNumber { flag, input } => {
                write!(f, "Option '{}' expects a number, got '{}'", flag, input)
            }
            ConfigError::SpeedOutOfRange { speed, min, max } => {
                write!(f, "Speed {}ms is out of range ({}..={}ms)", speed, min, max)
            }
            ConfigError::TooManyValues { count, limit } => {
                write!(f, "{} initial values given, the heap holds at most {}", count, limit)
            }
            ConfigError::InvalidValue(err) => write!(f, "Invalid initial value: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidValue(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SessionError> for ConfigError {
    fn from(err: SessionError) -> Self {
        ConfigError::InvalidValue(err)
    }
}
