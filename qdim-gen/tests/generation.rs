use qdim_core::Dimensions;
use qdim_gen::{GenerationError, Generator, KindDecl, Registry};
use std::fs;

fn energy() -> Dimensions {
    Dimensions::MASS + Dimensions::LENGTH * 2.0 - Dimensions::TIME * 2.0
}

fn mechanics() -> Registry {
    Registry::builder()
        .kind(
            KindDecl::new("Length", Dimensions::LENGTH)
                .conversion("meter", 1.0)
                .conversion("kilometer", 1000.0)
                .blacklist("Torque"),
        )
        .kind(KindDecl::new("Force", energy() - Dimensions::LENGTH).blacklist("Energy"))
        .kind(KindDecl::new("Energy", energy()).conversion("joule", 1.0))
        .kind(KindDecl::new("Torque", energy()).conversion("newton_meter", 1.0))
        .build()
        .unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Output file
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_generate_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let report = Generator::new(mechanics())
        .out_dir(dir.path())
        .generate()
        .unwrap();

    let path = report.path.unwrap();
    assert_eq!(path, dir.path().join("quantities.rs"));
    assert_eq!(report.kinds, 4);
    // Length * Force -> Energy, Force * Length -> Torque, plus the divisions back.
    assert!(report.operators >= 2);
    assert_eq!(report.named, 2);

    let source = fs::read_to_string(&path).unwrap();
    assert!(source.starts_with("// @generated"));
    assert!(source.contains("times_torque"));
    assert!(source.contains("times_energy"));
    assert!(source.contains("KINDS"));
    syn::parse_file(&source).unwrap();
}

#[test]
fn test_generate_creates_missing_directories() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    let report = Generator::new(mechanics())
        .out_dir(&nested)
        .file_name("kinds.rs")
        .generate()
        .unwrap();
    assert_eq!(report.path.unwrap(), nested.join("kinds.rs"));
}

#[test]
fn test_missing_out_dir_is_an_error() {
    let err = Generator::new(mechanics()).generate().unwrap_err();
    assert!(matches!(err, GenerationError::MissingOutputDir));

    let err = Generator::new(mechanics()).out_dir("").generate().unwrap_err();
    assert!(matches!(err, GenerationError::MissingOutputDir));
}

#[test]
fn test_empty_registry_is_a_no_op() {
    let dir = tempfile::tempdir().unwrap();
    let report = Generator::new(Registry::default())
        .out_dir(dir.path())
        .generate()
        .unwrap();
    assert_eq!(report.path, None);
    assert_eq!(report.kinds, 0);
    assert!(!dir.path().join("quantities.rs").exists());

    // No output directory is needed when there is nothing to write.
    assert!(Generator::new(Registry::default()).generate().is_ok());
}

#[test]
fn test_ambiguity_fails_before_writing() {
    let registry = Registry::builder()
        .kind(KindDecl::new("Force", energy() - Dimensions::LENGTH))
        .kind(KindDecl::new("Length", Dimensions::LENGTH))
        .kind(KindDecl::new("Energy", energy()))
        .kind(KindDecl::new("Torque", energy()))
        .build()
        .unwrap();
    let dir = tempfile::tempdir().unwrap();
    let err = Generator::new(registry)
        .out_dir(dir.path())
        .generate()
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("Energy"), "{}", message);
    assert!(message.contains("Torque"), "{}", message);
    assert!(!dir.path().join("quantities.rs").exists());
}

// ─────────────────────────────────────────────────────────────────────────────
// TOML input
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_from_toml_file_to_output() {
    let dir = tempfile::tempdir().unwrap();
    let registry_path = dir.path().join("quantities.toml");
    fs::write(
        &registry_path,
        r#"
        [[kind]]
        name = "Time"
        dimensions = { time = 1.0 }
        conversions = [{ name = "second", ratio = 1.0 }, { name = "minute", ratio = 60.0 }]

        [[kind]]
        name = "Frequency"
        dimensions = { time = -1.0 }
        conversions = [{ name = "hertz", ratio = 1.0 }]
        "#,
    )
    .unwrap();

    let registry = Registry::from_toml_file(&registry_path).unwrap();
    let report = Generator::new(registry)
        .out_dir(dir.path().join("out"))
        .runtime_path("::qdim_core")
        .serde_feature("serde")
        .generate()
        .unwrap();

    let source = fs::read_to_string(report.path.unwrap()).unwrap();
    assert!(source.contains("TimeConversions"));
    assert!(source.contains("FrequencyConversions"));
    assert!(source.contains("qdim_core"));
    assert!(source.contains("transparent"));
}

#[test]
fn test_render_without_writing() {
    let (plan, source) = Generator::new(mechanics()).render().unwrap();
    assert_eq!(plan.named_count(), 2);
    assert!(source.contains("impl"));
}
