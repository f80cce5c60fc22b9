//! Integration test: output catalogs on disk.

use approx::assert_relative_eq;
use pluto_io::{IoError, read_output_log};
use pluto_units::units;

#[test]
fn reads_pluto_catalog() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("dbl.out");
    std::fs::write(
        &path,
        "0 0.000000e+00 1.000000e-04 0 single_file little rho vx1 vx2 prs\n\
         1 1.000000e-01 2.131000e-03 48 single_file little rho vx1 vx2 prs\n\
         2 2.000000e-01 2.131000e-03 95 single_file little rho vx1 vx2 prs\n",
    )
    .expect("seed file");

    let log = read_output_log(&path).expect("read succeeds");
    assert_eq!(log.len(), 3);

    let (last, rec) = log.last().expect("non-empty");
    assert_eq!(last, 2);
    assert_relative_eq!(rec.time(), 0.2);
    assert_relative_eq!(rec.time_years(), 0.2 * units().time_to_years);
    assert_eq!(rec.format(), "single_file");
    assert_eq!(rec.variables(), &["rho", "vx1", "vx2", "prs"]);
}

#[test]
fn documented_example_line() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("flt.out");
    std::fs::write(&path, "3 12.5 0.0 100 dbl 0 rho vx1 vx2\n").expect("seed file");

    let log = read_output_log(&path).expect("read succeeds");
    let rec = log.get(3).expect("index 3 present");
    assert_eq!(rec.time(), 12.5);
    assert_eq!(rec.time_years(), 12.5 * units().time_to_years);
    assert_eq!(rec.format(), "dbl");
    assert_eq!(rec.variables(), &["rho", "vx1", "vx2"]);
}

#[test]
fn short_line_fails_whole_read() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("dbl.out");
    std::fs::write(&path, "0 0.0 1e-4 0 single_file little rho\n1 0.1\n").expect("seed file");

    let err = read_output_log(&path).unwrap_err();
    assert!(matches!(err, IoError::Malformed { line: 2, .. }), "got {err:?}");
}

#[test]
fn missing_catalog_is_file_not_found() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let err = read_output_log(&dir.path().join("vtk.out")).unwrap_err();
    assert!(matches!(err, IoError::FileNotFound { .. }));
}
