//! Integration tests for negated column selection (-n).

use crate::{CONN_LOG, zeek_cut};

#[test]
fn negate_removes_named_columns() {
    zeek_cut()
        .args(["-n", "uid", "id.orig_p"])
        .write_stdin(CONN_LOG)
        .assert()
        .success()
        .stdout(
            "1300475167.096535\t141.142.220.202\tudp\n\
             1300475168.853899\t141.142.220.118\ttcp\n",
        );
}

#[test]
fn negate_ignores_unknown_names() {
    zeek_cut()
        .args(["-n", "bogus"])
        .write_stdin(CONN_LOG)
        .assert()
        .success()
        .stdout(
            "1300475167.096535\tCXWv6p3arKYeMETxOg\t141.142.220.202\t5353\tudp\n\
             1300475168.853899\tCjhGID4nQcgTWjvg4c\t141.142.220.118\t43927\ttcp\n",
        );
}

#[test]
fn negate_filters_header_display() {
    let output = zeek_cut()
        .args(["-c", "-n", "ts", "proto"])
        .write_stdin(CONN_LOG)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("#fields\tuid\tid.orig_h\tid.orig_p\n"));
    assert!(stdout.contains("#types\tstring\taddr\tport\n"));
}
