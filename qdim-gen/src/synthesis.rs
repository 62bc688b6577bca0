//! Operator synthesis.
//!
//! The synthesis pass walks the cross product of registered kinds and decides, for every operation, which kind
//! (if any) the result is and whether it is reachable through the natural operator or only through a named
//! method. It produces a [`Synthesis`] plan; rendering it to Rust is the job of [`crate::emit`].
//!
//! Resolution for a receiver `A` and the set `R` of kinds whose dimensions match the result:
//!
//! - kinds in `R` blacklisted by `A` are emitted as named methods (`times_torque`, `sqrt_length`, ...);
//! - if exactly one kind remains, it becomes the operator result;
//! - if more than one remains, synthesis fails with [`GenerationError::AmbiguousResult`].
//!
//! When `A` is dimensionless only `R == B` is considered, otherwise when `B` is dimensionless only `R == A`.

use crate::error::{GenerationError, Result};
use crate::registry::{KindId, Registry};
use crate::rules;
use log::debug;

// =============================================================================
// Plan
// =============================================================================

/// Binary operations between two kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BinaryOp {
    /// `a * b`.
    Mul,
    /// `a / b`.
    Div,
}

impl BinaryOp {
    /// Both operations, in emission order.
    pub const ALL: [BinaryOp; 2] = [BinaryOp::Mul, BinaryOp::Div];

    /// Verb used in diagnostics.
    pub fn verb(self) -> &'static str {
        match self {
            BinaryOp::Mul => "multiply",
            BinaryOp::Div => "divide",
        }
    }

    /// Prefix of the named fallback: `Times`/`Div` for traits, `times_`/`div_` for methods.
    pub fn named_prefix(self) -> &'static str {
        match self {
            BinaryOp::Mul => "Times",
            BinaryOp::Div => "Div",
        }
    }

    /// Operator symbol, for docs.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }

    fn accepts(self, registry: &Registry, lhs: KindId, rhs: KindId, result: KindId) -> bool {
        let (a, b, r) = (
            registry.dimensions(lhs),
            registry.dimensions(rhs),
            registry.dimensions(result),
        );
        match self {
            BinaryOp::Mul => rules::is_multiply_compatible(a, b, r),
            BinaryOp::Div => rules::is_divide_compatible(a, b, r),
        }
    }
}

/// Operations on a single kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UnaryOp {
    /// Square root.
    Sqrt,
    /// Second power.
    Squared,
    /// Third power.
    Cubed,
    /// `1.0 / a`.
    Inverse,
}

impl UnaryOp {
    /// Every unary operation, in emission order.
    pub const ALL: [UnaryOp; 4] = [
        UnaryOp::Sqrt,
        UnaryOp::Squared,
        UnaryOp::Cubed,
        UnaryOp::Inverse,
    ];

    /// Method name of the operator form; also the prefix of the named form.
    pub fn method(self) -> &'static str {
        match self {
            UnaryOp::Sqrt => "sqrt",
            UnaryOp::Squared => "squared",
            UnaryOp::Cubed => "cubed",
            UnaryOp::Inverse => "inverse",
        }
    }

    /// Verb phrase used in diagnostics.
    pub fn verb(self) -> &'static str {
        match self {
            UnaryOp::Sqrt => "take the square root of",
            UnaryOp::Squared => "square",
            UnaryOp::Cubed => "cube",
            UnaryOp::Inverse => "invert",
        }
    }

    fn accepts(self, registry: &Registry, operand: KindId, result: KindId) -> bool {
        let (a, r) = (registry.dimensions(operand), registry.dimensions(result));
        match self {
            UnaryOp::Sqrt => rules::is_sqrt_compatible(a, r),
            UnaryOp::Squared => rules::is_pow_compatible(a, r, 2.0),
            UnaryOp::Cubed => rules::is_pow_compatible(a, r, 3.0),
            UnaryOp::Inverse => rules::is_inverse_compatible(a, r),
        }
    }
}

/// How an emission is exposed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Form {
    /// The operator trait (`Mul`, `Div`) or the plain method (`sqrt`, `squared`, ...).
    Operator,
    /// A method named after the result kind (`times_torque`, `sqrt_length`, `inverse_frequency`, ...).
    Named,
}

/// One `lhs op rhs = result` impl to generate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BinaryEmission {
    /// The operation.
    pub op: BinaryOp,
    /// Receiver.
    pub lhs: KindId,
    /// Right-hand operand.
    pub rhs: KindId,
    /// Result kind.
    pub result: KindId,
    /// Operator impl or named trait impl.
    pub form: Form,
}

/// One `op(operand) = result` method to generate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnaryEmission {
    /// The operation.
    pub op: UnaryOp,
    /// Receiver.
    pub operand: KindId,
    /// Result kind.
    pub result: KindId,
    /// Plain method (or `f64 / operand` for inverse) or named method.
    pub form: Form,
}

/// Everything the emitter has to generate beyond the per-kind boilerplate.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Synthesis {
    /// Multiplications and divisions, in registry order of `(lhs, rhs)`.
    pub binary: Vec<BinaryEmission>,
    /// Roots, powers and inverses, in registry order of the operand.
    pub unary: Vec<UnaryEmission>,
}

impl Synthesis {
    /// Number of emissions in operator form.
    pub fn operator_count(&self) -> usize {
        self.binary.iter().filter(|e| e.form == Form::Operator).count()
            + self.unary.iter().filter(|e| e.form == Form::Operator).count()
    }

    /// Number of emissions in named form.
    pub fn named_count(&self) -> usize {
        self.binary.len() + self.unary.len() - self.operator_count()
    }

    /// Distinct `(op, result)` pairs reached through a named binary method, in first-use order.
    ///
    /// Each pair becomes one generated trait (`TimesTorque<Rhs>`, ...).
    pub fn named_binary_traits(&self) -> Vec<(BinaryOp, KindId)> {
        let mut traits = Vec::new();
        for emission in self.binary.iter().filter(|e| e.form == Form::Named) {
            let key = (emission.op, emission.result);
            if !traits.contains(&key) {
                traits.push(key);
            }
        }
        traits
    }

    /// The binary emission for `lhs op rhs` with result `result`, if any.
    pub fn find_binary(
        &self,
        op: BinaryOp,
        lhs: KindId,
        rhs: KindId,
        result: KindId,
    ) -> Option<&BinaryEmission> {
        self.binary
            .iter()
            .find(|e| e.op == op && e.lhs == lhs && e.rhs == rhs && e.result == result)
    }

    /// The unary emission for `op(operand)` with result `result`, if any.
    pub fn find_unary(&self, op: UnaryOp, operand: KindId, result: KindId) -> Option<&UnaryEmission> {
        self.unary
            .iter()
            .find(|e| e.op == op && e.operand == operand && e.result == result)
    }
}

// =============================================================================
// Engine
// =============================================================================

/// Kinds matching an operation, split by the receiver's blacklist.
struct Resolution {
    operator: Option<KindId>,
    named: Vec<KindId>,
}

fn resolve(
    registry: &Registry,
    receiver: KindId,
    candidates: Vec<KindId>,
    ambiguity: impl FnOnce(Vec<String>) -> GenerationError,
) -> Result<Resolution> {
    let (named, allowed): (Vec<_>, Vec<_>) = candidates
        .into_iter()
        .partition(|&r| registry.is_blacklisted(receiver, r));

    match allowed.as_slice() {
        [] => Ok(Resolution {
            operator: None,
            named,
        }),
        [only] => Ok(Resolution {
            operator: Some(*only),
            named,
        }),
        _ => Err(ambiguity(
            allowed
                .iter()
                .map(|&r| registry.name(r).to_string())
                .collect(),
        )),
    }
}

/// Runs the synthesis pass over `registry`.
pub fn synthesize(registry: &Registry) -> Result<Synthesis> {
    let mut plan = Synthesis::default();

    for lhs in registry.ids() {
        for rhs in registry.ids() {
            for op in BinaryOp::ALL {
                synthesize_binary(registry, op, lhs, rhs, &mut plan)?;
            }
        }
    }

    for operand in registry.ids() {
        for op in UnaryOp::ALL {
            synthesize_unary(registry, op, operand, &mut plan)?;
        }
    }

    Ok(plan)
}

fn synthesize_binary(
    registry: &Registry,
    op: BinaryOp,
    lhs: KindId,
    rhs: KindId,
    plan: &mut Synthesis,
) -> Result<()> {
    let lhs_unitless = registry.dimensions(lhs).is_dimensionless();
    let rhs_unitless = registry.dimensions(rhs).is_dimensionless();

    let candidates = registry
        .ids()
        .filter(|&r| op.accepts(registry, lhs, rhs, r))
        .filter(|&r| {
            if lhs_unitless {
                r == rhs
            } else if rhs_unitless {
                r == lhs
            } else {
                true
            }
        })
        .collect();

    let resolution = resolve(registry, lhs, candidates, |candidates| {
        GenerationError::AmbiguousResult {
            operation: op.verb(),
            lhs: registry.name(lhs).to_string(),
            rhs: Some(registry.name(rhs).to_string()),
            candidates,
        }
    })?;

    if let Some(result) = resolution.operator {
        debug!(
            "{} {} {} -> {}",
            registry.name(lhs),
            op.symbol(),
            registry.name(rhs),
            registry.name(result)
        );
        plan.binary.push(BinaryEmission {
            op,
            lhs,
            rhs,
            result,
            form: Form::Operator,
        });
    }
    for result in resolution.named {
        debug!(
            "{} {} {} -> {} (named, blacklisted by {})",
            registry.name(lhs),
            op.symbol(),
            registry.name(rhs),
            registry.name(result),
            registry.name(lhs)
        );
        plan.binary.push(BinaryEmission {
            op,
            lhs,
            rhs,
            result,
            form: Form::Named,
        });
    }
    Ok(())
}

fn synthesize_unary(
    registry: &Registry,
    op: UnaryOp,
    operand: KindId,
    plan: &mut Synthesis,
) -> Result<()> {
    let unitless = registry.dimensions(operand).is_dimensionless();

    let candidates = registry
        .ids()
        .filter(|&r| op.accepts(registry, operand, r))
        .filter(|&r| !unitless || r == operand)
        .collect();

    let resolution = resolve(registry, operand, candidates, |candidates| {
        GenerationError::AmbiguousResult {
            operation: op.verb(),
            lhs: registry.name(operand).to_string(),
            rhs: None,
            candidates,
        }
    })?;

    if let Some(result) = resolution.operator {
        debug!(
            "{}({}) -> {}",
            op.method(),
            registry.name(operand),
            registry.name(result)
        );
        plan.unary.push(UnaryEmission {
            op,
            operand,
            result,
            form: Form::Operator,
        });
    }
    for result in resolution.named {
        debug!(
            "{}({}) -> {} (named, blacklisted by {})",
            op.method(),
            registry.name(operand),
            registry.name(result),
            registry.name(operand)
        );
        plan.unary.push(UnaryEmission {
            op,
            operand,
            result,
            form: Form::Named,
        });
    }
    Ok(())
}
