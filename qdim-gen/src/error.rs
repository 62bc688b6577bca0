//! Error types for the generator.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop code generation.
///
/// All variants are configuration errors: the build script is expected to return them and fail the build.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// [`Generator::out_dir`](crate::Generator::out_dir) was never set (or `OUT_DIR` is missing).
    #[error("no output directory configured")]
    MissingOutputDir,

    /// A kind name is not usable as a Rust type name.
    #[error("`{name}` cannot be used as a {role} name: {reason}")]
    InvalidIdentifier {
        /// The rejected name.
        name: String,
        /// What the name was used as.
        role: &'static str,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// Two declarations share a name.
    #[error("kind `{0}` is declared more than once")]
    DuplicateKind(String),

    /// A blacklist names a kind that is not registered.
    #[error("kind `{kind}` blacklists `{entry}`, which is not a registered kind")]
    UnknownBlacklistEntry {
        /// The declaring kind.
        kind: String,
        /// The unresolved entry.
        entry: String,
    },

    /// An exponent is NaN or infinite.
    #[error("kind `{kind}` has a non-finite dimension exponent")]
    NonFiniteExponent {
        /// The offending kind.
        kind: String,
    },

    /// A conversion has a bad or duplicate name, or a ratio that is not finite and positive.
    #[error("kind `{kind}` has an invalid conversion `{name}`: {reason}")]
    InvalidConversion {
        /// The declaring kind.
        kind: String,
        /// The conversion name.
        name: String,
        /// Why it was rejected.
        reason: String,
    },

    /// More than one non-blacklisted kind matches the result of an operation.
    #[error(
        "cannot {operation} {}: {} all have the resulting dimensions; blacklist all but one on `{lhs}`",
        operands(.lhs, .rhs),
        .candidates.join(", ")
    )]
    AmbiguousResult {
        /// Verb phrase of the operation.
        operation: &'static str,
        /// Receiver.
        lhs: String,
        /// Right-hand operand; `None` for unary operations.
        rhs: Option<String>,
        /// Every colliding kind.
        candidates: Vec<String>,
    },

    /// The registry file is not valid TOML or does not match the schema.
    #[error("invalid registry TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// Reading the registry or writing the output failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// The file or directory involved.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The rendered tokens are not a valid Rust file.
    #[error("generated code does not parse: {0}")]
    Syntax(#[from] syn::Error),
}

fn operands(lhs: &str, rhs: &Option<String>) -> String {
    match rhs {
        Some(rhs) => format!("`{}` by `{}`", lhs, rhs),
        None => format!("`{}`", lhs),
    }
}

/// Result alias for generator operations.
pub type Result<T> = std::result::Result<T, GenerationError>;
