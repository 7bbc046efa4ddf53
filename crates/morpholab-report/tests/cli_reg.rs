//! Command-line regression test
//!
//! Tests:
//!   (1) A synthetic run writes all 33 artifacts and reports the element
//!   (2) Even kernel sizes are normalized before use
//!   (3) Input photographs replace the synthetic images
//!   (4) Invalid arguments fail without writing anything
//!
//! Run with:
//! ```
//! cargo test -p morpholab-report --test cli_reg
//! ```

use assert_cmd::Command;
use morpholab_core::RgbGrid;
use morpholab_io::{ExportContext, read_image};
use predicates::prelude::*;
use std::path::Path;

const STEMS: [&str; 11] = [
    "", "_B", "_G", "_R", "_histograma", "_erosao", "_dilatacao", "_abertura", "_fechamento",
    "_gradiente", "_morfologia",
];

fn morpholab() -> Command {
    Command::cargo_bin("morpholab").expect("binary built")
}

fn assert_artifacts(out: &Path, name: &str) {
    for stem in STEMS {
        let path = out.join(format!("{name}{stem}.png"));
        assert!(path.is_file(), "missing {}", path.display());
    }
}

#[test]
fn cli_synthetic_run() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");

    morpholab()
        .args(["--img-width", "64", "--img-height", "48"])
        .args(["--kernel-size", "4", "--element", "cross"])
        .arg("--input-dir")
        .arg(dir.path().join("in"))
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Element: cross of size 5"))
        .stdout(predicate::str::contains("Artifacts: 33 files"))
        .stdout(predicate::str::contains("documento: 64x48, 24 bits, synthetic"));

    for name in ["pessoa", "objeto", "documento"] {
        assert_artifacts(&out, name);
    }
    let erosion = read_image(out.join("pessoa_erosao.png")).unwrap();
    assert_eq!(erosion.dimensions(), (64, 48));
    let plot = read_image(out.join("objeto_histograma.png")).unwrap();
    assert_eq!(plot.width(), 256);
}

#[test]
fn cli_uses_input_photo() {
    let dir = tempfile::tempdir().unwrap();
    let input = ExportContext::new(dir.path().join("in")).unwrap();
    let photo = RgbGrid::new_filled(10, 8, (200, 100, 50)).unwrap();
    input.save_rgb("pessoa", &photo).unwrap();
    std::fs::write(input.output_dir().join("objeto.jpg"), b"broken").unwrap();
    let out = dir.path().join("out");

    morpholab()
        .args(["--img-width", "32", "--img-height", "24", "--element", "ellipse"])
        .arg("--input-dir")
        .arg(input.output_dir())
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("pessoa: 10x8, 24 bits, photo (pessoa.png)"))
        .stdout(predicate::str::contains("objeto: 32x24, 24 bits, synthetic"));

    assert_eq!(read_image(out.join("pessoa.png")).unwrap(), photo);
    let red = read_image(out.join("pessoa_R.png")).unwrap();
    assert_eq!(red.get_rgb(3, 3), Some((200, 0, 0)));
}

#[test]
fn cli_rejects_bad_arguments() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");

    morpholab()
        .args(["--element", "hexagon"])
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("hexagon"));

    morpholab()
        .args(["--kernel-size", "0", "--img-width", "16", "--img-height", "16"])
        .arg("--input-dir")
        .arg(dir.path().join("in"))
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid structuring element"));

    assert!(!out.exists());
}
