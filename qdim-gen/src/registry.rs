//! Quantity kind registry.
//!
//! The registry is the ordered, validated set of kind declarations the synthesis pass works on. It is built either
//! in Rust through [`RegistryBuilder`] or from a TOML file:
//!
//! ```toml
//! [[kind]]
//! name = "Length"
//! dimensions = { length = 1.0 }
//! blacklist = ["Torque"]
//! conversions = [
//!     { name = "meter", ratio = 1.0 },
//!     { name = "kilometer", ratio = 1000.0 },
//! ]
//! ```
//!
//! Missing exponents default to zero. Declaration order is preserved and drives the order of generated items.

use crate::error::{GenerationError, Result};
use crate::naming;
use qdim_core::Dimensions;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

// =============================================================================
// Declarations
// =============================================================================

/// A named conversion: `1 <name> == ratio` canonical units.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Conversion {
    /// Lowercase snake_case method name, e.g. `kilometer`.
    pub name: String,
    /// Canonical units per one of this unit.
    pub ratio: f64,
}

/// Declaration of one quantity kind.
///
/// ```rust
/// use qdim_core::Dimensions;
/// use qdim_gen::KindDecl;
///
/// let length = KindDecl::new("Length", Dimensions::LENGTH)
///     .conversion("meter", 1.0)
///     .conversion("kilometer", 1000.0)
///     .blacklist("Torque");
/// assert_eq!(length.canonical_unit(), Some("meter"));
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KindDecl {
    /// Type name of the generated kind.
    pub name: String,
    /// Dimension vector; missing exponents are zero.
    #[serde(default)]
    pub dimensions: Dimensions,
    /// Kinds that must never be the operator result when this kind is the receiver.
    #[serde(default)]
    pub blacklist: Vec<String>,
    /// Named units, in declaration order.
    #[serde(default)]
    pub conversions: Vec<Conversion>,
}

impl KindDecl {
    /// A declaration with no conversions and an empty blacklist.
    pub fn new(name: impl Into<String>, dimensions: Dimensions) -> Self {
        Self {
            name: name.into(),
            dimensions,
            blacklist: Vec::new(),
            conversions: Vec::new(),
        }
    }

    /// Appends a conversion.
    pub fn conversion(mut self, name: impl Into<String>, ratio: f64) -> Self {
        self.conversions.push(Conversion {
            name: name.into(),
            ratio,
        });
        self
    }

    /// Appends a blacklist entry.
    pub fn blacklist(mut self, kind: impl Into<String>) -> Self {
        self.blacklist.push(kind.into());
        self
    }

    /// Name of the first conversion with ratio exactly `1.0`.
    pub fn canonical_unit(&self) -> Option<&str> {
        self.conversions
            .iter()
            .find(|c| c.ratio == 1.0)
            .map(|c| c.name.as_str())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RegistryFile {
    #[serde(default, rename = "kind")]
    kinds: Vec<KindDecl>,
}

// =============================================================================
// Registry
// =============================================================================

/// Index of a kind in its [`Registry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KindId(usize);

impl KindId {
    /// Position in declaration order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A validated, ordered set of kinds.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    kinds: Vec<KindDecl>,
    // blacklist[a] holds the ids `a` refuses as an operator result.
    blacklists: Vec<Vec<KindId>>,
}

impl Registry {
    /// Validates `kinds` and builds a registry.
    pub fn new(kinds: Vec<KindDecl>) -> Result<Self> {
        let mut by_name: HashMap<&str, KindId> = HashMap::with_capacity(kinds.len());
        let mut by_method_name: HashMap<String, &str> = HashMap::with_capacity(kinds.len());
        let mut conversion_owner: HashMap<&str, &str> = HashMap::new();

        for (index, kind) in kinds.iter().enumerate() {
            naming::check_kind_name(&kind.name)?;
            if by_name.insert(&kind.name, KindId(index)).is_some() {
                return Err(GenerationError::DuplicateKind(kind.name.clone()));
            }
            // Named methods embed the snake_case name (`sqrt_si_unit`), so it must be unique too.
            if by_method_name
                .insert(naming::snake_case(&kind.name), &kind.name)
                .is_some()
            {
                return Err(GenerationError::InvalidIdentifier {
                    name: kind.name.clone(),
                    role: "kind",
                    reason: "its snake_case form is already used by another kind",
                });
            }
            if !kind.dimensions.is_finite() {
                return Err(GenerationError::NonFiniteExponent {
                    kind: kind.name.clone(),
                });
            }
            for conversion in &kind.conversions {
                check_conversion(kind, conversion, &mut conversion_owner)?;
            }
        }

        // Names generated on behalf of a kind must not shadow another kind.
        for kind in &kinds {
            for derived in naming::derived_type_names(&kind.name) {
                if by_name.contains_key(derived.as_str()) {
                    return Err(GenerationError::InvalidIdentifier {
                        name: derived,
                        role: "kind",
                        reason: "clashes with a trait generated for another kind",
                    });
                }
            }
        }

        let blacklists = kinds
            .iter()
            .map(|kind| {
                kind.blacklist
                    .iter()
                    .map(|entry| {
                        by_name.get(entry.as_str()).copied().ok_or_else(|| {
                            GenerationError::UnknownBlacklistEntry {
                                kind: kind.name.clone(),
                                entry: entry.clone(),
                            }
                        })
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { kinds, blacklists })
    }

    /// Starts an empty [`RegistryBuilder`].
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Parses and validates a TOML registry.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let file: RegistryFile = toml::from_str(source)?;
        Self::new(file.kinds)
    }

    /// Reads, parses and validates a TOML registry file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| GenerationError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Number of kinds.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// `true` when no kind is declared.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// All ids in declaration order.
    pub fn ids(&self) -> impl Iterator<Item = KindId> + '_ {
        (0..self.kinds.len()).map(KindId)
    }

    /// Declaration of `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` belongs to another registry and is out of range.
    pub fn get(&self, id: KindId) -> &KindDecl {
        &self.kinds[id.0]
    }

    /// Type name of `id`.
    pub fn name(&self, id: KindId) -> &str {
        &self.get(id).name
    }

    /// Dimension vector of `id`.
    pub fn dimensions(&self, id: KindId) -> Dimensions {
        self.get(id).dimensions
    }

    /// Id of the kind called `name`.
    pub fn find(&self, name: &str) -> Option<KindId> {
        self.kinds.iter().position(|k| k.name == name).map(KindId)
    }

    /// `true` when `receiver` blacklists `result`.
    pub fn is_blacklisted(&self, receiver: KindId, result: KindId) -> bool {
        self.blacklists[receiver.0].contains(&result)
    }

    /// Every declaration, in order.
    pub fn kinds(&self) -> &[KindDecl] {
        &self.kinds
    }
}

fn check_conversion<'a>(
    kind: &'a KindDecl,
    conversion: &'a Conversion,
    owners: &mut HashMap<&'a str, &'a str>,
) -> Result<()> {
    let invalid = |reason: String| GenerationError::InvalidConversion {
        kind: kind.name.clone(),
        name: conversion.name.clone(),
        reason,
    };

    naming::check_conversion_name(&conversion.name).map_err(|r| invalid(r.to_string()))?;
    if !conversion.ratio.is_finite() || conversion.ratio <= 0.0 {
        return Err(invalid(format!(
            "ratio must be finite and positive, got {}",
            conversion.ratio
        )));
    }
    // Every conversion is a method on `f64`, so names must be unique across the registry.
    if let Some(owner) = owners.insert(&conversion.name, &kind.name) {
        return Err(invalid(format!("name already used by `{}`", owner)));
    }
    Ok(())
}

/// Incremental [`Registry`] construction.
#[derive(Clone, Debug, Default)]
pub struct RegistryBuilder {
    kinds: Vec<KindDecl>,
}

impl RegistryBuilder {
    /// Adds one declaration.
    pub fn kind(mut self, kind: KindDecl) -> Self {
        self.kinds.push(kind);
        self
    }

    /// Adds several declarations.
    pub fn kinds(mut self, kinds: impl IntoIterator<Item = KindDecl>) -> Self {
        self.kinds.extend(kinds);
        self
    }

    /// Validates the declarations, see [`Registry::new`].
    pub fn build(self) -> Result<Registry> {
        Registry::new(self.kinds)
    }
}
