//! Error types for the chain-clustering core library.
//!
//! Defines error enums exposed by the public API and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while validating a [`crate::Dataset`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DatasetError {
    /// Rows must carry at least one coordinate.
    #[error("dataset points must have positive dimension")]
    ZeroDimension,
    /// A row's dimensionality differed from the first row.
    #[error("row {row} has dimension {found} but the dataset expects {expected}")]
    DimensionMismatch {
        /// Position of the offending row.
        row: usize,
        /// Dimensionality established by the first row.
        expected: usize,
        /// Dimensionality of the offending row.
        found: usize,
    },
    /// A coordinate was NaN or infinite.
    #[error("row {row} contains a non-finite value at column {column}: {value}")]
    NonFinite {
        /// Position of the offending row.
        row: usize,
        /// Coordinate position within the row.
        column: usize,
        /// The rejected value.
        value: f64,
    },
    /// Points spread so far apart that a pairwise distance could reach the
    /// diagonal sentinel of the distance matrix.
    #[error("bounding-box diagonal {extent} must stay below {limit}")]
    ExtentTooLarge {
        /// Diagonal of the bounding box around all points.
        extent: f64,
        /// Largest diagonal the distance matrix supports, exclusive.
        limit: f64,
    },
}

define_error_codes! {
    /// Stable codes describing [`DatasetError`] variants.
    enum DatasetErrorCode for DatasetError {
        /// Rows must carry at least one coordinate.
        ZeroDimension => ZeroDimension => "DATASET_ZERO_DIMENSION",
        /// A row's dimensionality differed from the first row.
        DimensionMismatch => DimensionMismatch { .. } => "DATASET_DIMENSION_MISMATCH",
        /// A coordinate was NaN or infinite.
        NonFinite => NonFinite { .. } => "DATASET_NON_FINITE",
        /// Points spread too far apart for the distance matrix.
        ExtentTooLarge => ExtentTooLarge { .. } => "DATASET_EXTENT_EXCEEDS_MAX_DISTANCE",
    }
}

/// Error type produced when configuring or running [`crate::ChainClusterAlg`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ChainClusterError {
    /// The number of seed points must be greater than zero.
    #[error("num_seed_points must be at least 1 (got {got})")]
    InvalidNumSeedPoints {
        /// The invalid value supplied by the caller.
        got: usize,
    },
    /// The linking strength must be finite and strictly positive.
    #[error("linking_strength must be finite and greater than zero (got {got})")]
    InvalidLinkingStrength {
        /// The invalid value supplied by the caller.
        got: f64,
    },
    /// The input points failed validation.
    #[error("dataset rejected: {error}")]
    Dataset {
        #[source]
        /// Underlying validation failure.
        error: DatasetError,
    },
    /// Seed selection found no candidate although the free pool was large
    /// enough to seed another cluster.
    #[error("internal invariant violated: no seed found among {free_points} free points")]
    SeedSelectionFailed {
        /// Size of the free pool at the time of the failure.
        free_points: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`ChainClusterError`] variants.
    enum ChainClusterErrorCode for ChainClusterError {
        /// The number of seed points must be greater than zero.
        InvalidNumSeedPoints => InvalidNumSeedPoints { .. } => "CHAIN_INVALID_NUM_SEED_POINTS",
        /// The linking strength must be finite and strictly positive.
        InvalidLinkingStrength => InvalidLinkingStrength { .. } => "CHAIN_INVALID_LINKING_STRENGTH",
        /// The input points failed validation.
        DatasetFailure => Dataset { .. } => "CHAIN_DATASET_FAILURE",
        /// Seed selection found no candidate.
        SeedSelectionFailed => SeedSelectionFailed { .. } => "CHAIN_SEED_SELECTION_FAILED",
    }
}

impl ChainClusterError {
    /// Retrieve the inner [`DatasetErrorCode`] when the error originated in
    /// dataset validation.
    #[must_use]
    pub const fn dataset_code(&self) -> Option<DatasetErrorCode> {
        match self {
            Self::Dataset { error } => Some(error.code()),
            _ => None,
        }
    }
}

impl From<DatasetError> for ChainClusterError {
    fn from(error: DatasetError) -> Self {
        Self::Dataset { error }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, ChainClusterError>;
