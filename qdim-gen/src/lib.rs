//! Build-time generator for dimension-checked quantity kinds.
//!
//! `qdim-gen` reads a registry of quantity kinds (name, dimension vector, conversions, blacklist), works out every
//! multiplication, division, root, power and inverse between them whose result is another registered kind, and
//! writes the corresponding Rust types and operator impls to a single source file.
//!
//! # Features
//!
//! - **Registry**: kinds declared in TOML or through [`RegistryBuilder`], validated up front
//! - **Synthesis**: exact dimension matching with blacklist-based disambiguation ([`synthesis`])
//! - **Emission**: `quote`-built code, checked with `syn` before it is written
//!
//! # Quick Start
//!
//! In the consuming crate's `build.rs`:
//!
//! ```rust,no_run
//! use qdim_gen::{Generator, Registry};
//!
//! fn main() -> Result<(), qdim_gen::GenerationError> {
//!     println!("cargo:rerun-if-changed=quantities.toml");
//!     let registry = Registry::from_toml_file("quantities.toml")?;
//!     Generator::new(registry)
//!         .out_dir(std::env::var_os("OUT_DIR").unwrap_or_default())
//!         .generate()?;
//!     Ok(())
//! }
//! ```
//!
//! and in its `lib.rs`:
//!
//! ```rust,ignore
//! include!(concat!(env!("OUT_DIR"), "/quantities.rs"));
//! ```
//!
//! # Ambiguity
//!
//! Two kinds may share a dimension vector (energy and torque). For a receiver `A`, every matching kind that `A`
//! blacklists is reached through a named method (`a.times_torque(b)`); exactly one may remain for the operator.
//! Anything else is a [`GenerationError::AmbiguousResult`].
#![deny(missing_docs)]

pub mod emit;
mod error;
mod naming;
pub mod registry;
pub mod rules;
pub mod synthesis;

pub use emit::EmitOptions;
pub use error::{GenerationError, Result};
pub use registry::{Conversion, KindDecl, KindId, Registry, RegistryBuilder};
pub use synthesis::{synthesize, Synthesis};

use log::{info, warn};
use std::fs;
use std::path::PathBuf;

/// Default name of the generated file.
pub const DEFAULT_FILE_NAME: &str = "quantities.rs";

/// What [`Generator::generate`] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    /// The written file, or `None` when the registry was empty.
    pub path: Option<PathBuf>,
    /// Kinds in the registry.
    pub kinds: usize,
    /// Operator impls and plain methods emitted.
    pub operators: usize,
    /// Named fallback methods emitted.
    pub named: usize,
}

/// Configures and runs a generation pass.
#[derive(Clone, Debug)]
pub struct Generator {
    registry: Registry,
    out_dir: Option<PathBuf>,
    file_name: String,
    options: EmitOptions,
}

impl Generator {
    /// A generator writing [`DEFAULT_FILE_NAME`] with default [`EmitOptions`]; the output directory is unset.
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            out_dir: None,
            file_name: DEFAULT_FILE_NAME.to_string(),
            options: EmitOptions::default(),
        }
    }

    /// Directory the file is written to. An empty path counts as unset.
    pub fn out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        self.out_dir = (!dir.as_os_str().is_empty()).then_some(dir);
        self
    }

    /// Name of the written file inside the output directory.
    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = name.into();
        self
    }

    /// Path of the runtime crate as seen from the generated code (default `crate`).
    pub fn runtime_path(mut self, path: impl Into<String>) -> Self {
        self.options.runtime_path = path.into();
        self
    }

    /// Gates `serde` derives on generated kinds behind `feature`.
    pub fn serde_feature(mut self, feature: impl Into<String>) -> Self {
        self.options.serde_feature = Some(feature.into());
        self
    }

    /// The registry being generated.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Runs synthesis and renders the source without writing it.
    pub fn render(&self) -> Result<(Synthesis, String)> {
        let plan = synthesize(&self.registry)?;
        let tokens = emit::render(&self.registry, &plan, &self.options)?;
        let file: syn::File = syn::parse2(tokens)?;
        let source = format!(
            "// @generated by qdim-gen from {} kinds. Do not edit.\n{}\n",
            self.registry.len(),
            quote::ToTokens::to_token_stream(&file)
        );
        Ok((plan, source))
    }

    /// Generates and writes the output file.
    ///
    /// An empty registry is a no-op: nothing is written and [`Report::path`] is `None`.
    pub fn generate(&self) -> Result<Report> {
        if self.registry.is_empty() {
            warn!("registry is empty, nothing to generate");
            return Ok(Report {
                path: None,
                kinds: 0,
                operators: 0,
                named: 0,
            });
        }
        let out_dir = self.out_dir.as_ref().ok_or(GenerationError::MissingOutputDir)?;

        let (plan, source) = self.render()?;

        fs::create_dir_all(out_dir).map_err(|source| GenerationError::Io {
            path: out_dir.clone(),
            source,
        })?;
        let path = out_dir.join(&self.file_name);
        fs::write(&path, source).map_err(|source| GenerationError::Io {
            path: path.clone(),
            source,
        })?;

        let report = Report {
            path: Some(path),
            kinds: self.registry.len(),
            operators: plan.operator_count(),
            named: plan.named_count(),
        };
        info!(
            "generated {} kinds, {} operators, {} named operations into {}",
            report.kinds,
            report.operators,
            report.named,
            out_dir.join(&self.file_name).display()
        );
        Ok(report)
    }
}
