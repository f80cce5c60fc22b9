//! Integration test: pluto.ini read/write round trips.

use pluto_io::{IniDocument, IoError, read_ini, write_ini};

const PLUTO_INI: &str = "\
[Grid]

X1-grid    1    0.0    100    u    1.0
X2-grid    1    0.0    1      u    1.0
X3-grid    1    0.0    1      u    1.0

[Chombo Refinement]

[Time]

CFL              0.4
CFL_max_var      1.1
tstop            0.2
first_dt         1.e-6

[Static Grid Output]

uservar    0
dbl        0.01  -1   single_file
log        100
";

#[test]
fn round_trip_preserves_structure_and_order() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let src = dir.path().join("pluto.ini");
    let dst = dir.path().join("rewritten.ini");
    std::fs::write(&src, PLUTO_INI).expect("seed file");

    let doc = read_ini(&src).expect("read succeeds");
    write_ini(&dst, &doc).expect("write succeeds");
    let back = read_ini(&dst).expect("re-read succeeds");

    assert_eq!(back, doc);
    let names: Vec<_> = back.sections().map(|(n, _)| n).collect();
    assert_eq!(
        names,
        ["Grid", "Chombo Refinement", "Time", "Static Grid Output"]
    );
    assert!(back.section("Chombo Refinement").expect("present").is_empty());
    assert_eq!(
        back.get("Static Grid Output", "dbl"),
        Some("0.01  -1   single_file")
    );
}

#[test]
fn written_layout() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("pluto.ini");

    let mut doc = IniDocument::new();
    doc.set("Time", "CFL", "0.4").expect("valid entry");
    doc.set("Time", "tstop", "1.0").expect("valid entry");
    doc.insert_section("Boundary");
    write_ini(&path, &doc).expect("write succeeds");

    let text = std::fs::read_to_string(&path).expect("read back");
    assert_eq!(
        text,
        "[Time]\n\n\
         CFL                      0.4\n\
         tstop                    1.0\n\
         \n\
         [Boundary]\n\n\n"
    );
}

#[test]
fn structural_error_aborts_read() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("pluto.ini");
    std::fs::write(&path, "CFL 0.4\n[Time]\ntstop 1.0\n").expect("seed file");

    let err = read_ini(&path).unwrap_err();
    assert!(
        matches!(err, IoError::KeyOutsideSection { line: 1, .. }),
        "got {err:?}"
    );
}

#[test]
fn missing_file_is_file_not_found() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let err = read_ini(&dir.path().join("absent.ini")).unwrap_err();
    assert!(matches!(err, IoError::FileNotFound { .. }));
}
