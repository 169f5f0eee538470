//! Integration tests for header block display (-c / -C).

use crate::{CONN_LOG, zeek_cut};

fn header_lines(stdout: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stdout)
        .lines()
        .filter(|l| l.starts_with('#'))
        .map(str::to_string)
        .collect()
}

#[test]
fn headers_hidden_by_default() {
    let output = zeek_cut().write_stdin(CONN_LOG).output().unwrap();
    assert!(output.status.success());
    assert!(header_lines(&output.stdout).is_empty());
}

#[test]
fn first_block_shown_with_lowercase_c() {
    let output = zeek_cut()
        .args(["-c", "uid", "ts"])
        .write_stdin(CONN_LOG)
        .output()
        .unwrap();
    let headers = header_lines(&output.stdout);
    assert_eq!(
        headers,
        vec![
            "#separator \\x09",
            "#set_separator\t,",
            "#empty_field\t(empty)",
            "#unset_field\t-",
            "#path\tconn",
            "#open\t2011-03-18-19-06-07",
            "#fields\tuid\tts",
            "#types\tstring\ttime",
        ]
    );
}

#[test]
fn only_first_of_two_logs_with_lowercase_c() {
    let input = format!("{CONN_LOG}{CONN_LOG}");
    let output = zeek_cut().arg("-c").write_stdin(input).output().unwrap();
    let headers = header_lines(&output.stdout);
    assert_eq!(headers.iter().filter(|h| h.starts_with("#fields")).count(), 1);
    // The #close ending the first log already belongs to the second block.
    assert!(!headers.iter().any(|h| h.starts_with("#close")));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().filter(|l| !l.starts_with('#')).count(), 4);
}

#[test]
fn every_block_shown_with_uppercase_c() {
    let input = format!("{CONN_LOG}{CONN_LOG}");
    let output = zeek_cut().arg("-C").write_stdin(input).output().unwrap();
    let headers = header_lines(&output.stdout);
    assert_eq!(headers.iter().filter(|h| h.starts_with("#fields")).count(), 2);
    assert_eq!(headers.iter().filter(|h| h.starts_with("#close")).count(), 2);
}

#[test]
fn lowercase_and_uppercase_c_conflict() {
    zeek_cut().args(["-c", "-C"]).write_stdin(CONN_LOG).assert().failure();
}

#[test]
fn header_uses_output_separator() {
    let output = zeek_cut()
        .args(["-c", "-F", "|", "ts", "proto"])
        .write_stdin(CONN_LOG)
        .output()
        .unwrap();
    let headers = header_lines(&output.stdout);
    assert!(headers.contains(&"#fields|ts|proto".to_string()));
    assert!(headers.contains(&"#types|time|enum".to_string()));
}
