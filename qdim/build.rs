use qdim_gen::{GenerationError, Generator, Registry};
use std::env;
use std::path::PathBuf;

fn main() -> Result<(), GenerationError> {
    // Re-run if the catalog changes
    println!("cargo:rerun-if-changed=quantities.toml");
    println!("cargo:rerun-if-changed=tests/fixtures/named_forms.toml");
    println!("cargo:rerun-if-changed=build.rs");

    let crate_dir = PathBuf::from(env::var_os("CARGO_MANIFEST_DIR").unwrap_or_default());
    let out_dir = env::var_os("OUT_DIR");

    let registry = Registry::from_toml_file(crate_dir.join("quantities.toml"))?;
    let mut generator = Generator::new(registry).runtime_path("crate").serde_feature("serde");
    if let Some(out_dir) = &out_dir {
        generator = generator.out_dir(out_dir);
    }
    let report = generator.generate()?;

    // Kinds for the integration tests, compiled against the public API.
    let fixture = Registry::from_toml_file(crate_dir.join("tests/fixtures/named_forms.toml"))?;
    let mut generator = Generator::new(fixture)
        .runtime_path("::qdim")
        .file_name("named_forms.rs");
    if let Some(out_dir) = &out_dir {
        generator = generator.out_dir(out_dir);
    }
    generator.generate()?;

    println!(
        "cargo:warning=Generated {} quantity kinds ({} operators, {} named operations)",
        report.kinds, report.operators, report.named
    );
    Ok(())
}
