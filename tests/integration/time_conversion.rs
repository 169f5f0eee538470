//! Integration tests for time conversion (-d / -D / -u / -U).

use predicates::prelude::*;

use crate::{CONN_LOG, zeek_cut};

#[test]
fn utc_with_custom_format() {
    zeek_cut()
        .args(["-U", "%Y-%m-%dT%H:%M:%SZ", "ts", "proto"])
        .write_stdin(CONN_LOG)
        .assert()
        .success()
        .stdout("2011-03-18T19:06:07Z\tudp\n2011-03-18T19:06:08Z\ttcp\n");
}

#[test]
fn utc_default_format() {
    zeek_cut()
        .args(["-u", "ts"])
        .write_stdin(CONN_LOG)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("2011-03-18T19:06:07+0000\n"));
}

#[test]
fn local_time_follows_tz() {
    zeek_cut()
        .env("TZ", "UTC")
        .args(["-D", "%H:%M:%S", "ts"])
        .write_stdin(CONN_LOG)
        .assert()
        .success()
        .stdout("19:06:07\n19:06:08\n");
}

#[test]
fn epoch_zero() {
    let input = "#fields\tts\n#types\ttime\n0\n";
    zeek_cut()
        .args(["-U", "%Y-%m-%dT%H:%M:%SZ"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout("1970-01-01T00:00:00Z\n");
}

#[test]
fn env_supplies_format() {
    zeek_cut()
        .env("ZEEK_CUT_TIMEFMT", "%Y/%m/%d")
        .args(["-u", "ts"])
        .write_stdin(CONN_LOG)
        .assert()
        .success()
        .stdout("2011/03/18\n2011/03/18\n");
}

#[test]
fn legacy_env_supplies_format() {
    zeek_cut()
        .env("BRO_CUT_TIMEFMT", "%Y")
        .args(["-u", "ts"])
        .write_stdin(CONN_LOG)
        .assert()
        .success()
        .stdout("2011\n2011\n");
}

#[test]
fn flag_format_beats_env() {
    zeek_cut()
        .env("ZEEK_CUT_TIMEFMT", "%Y/%m/%d")
        .args(["-U", "%Y", "ts"])
        .write_stdin(CONN_LOG)
        .assert()
        .success()
        .stdout("2011\n2011\n");
}

#[test]
fn types_header_rewritten() {
    zeek_cut()
        .args(["-c", "-u", "ts", "uid"])
        .write_stdin(CONN_LOG)
        .assert()
        .success()
        .stdout(predicate::str::contains("#types\tstring\tstring\n"));
}

#[test]
fn non_time_columns_untouched() {
    zeek_cut()
        .args(["-u", "id.orig_p"])
        .write_stdin(CONN_LOG)
        .assert()
        .success()
        .stdout("5353\n43927\n");
}

#[test]
fn unset_time_value_passes_through() {
    let input = "#fields\tts\tuid\n#types\ttime\tstring\n-\tCx\n";
    zeek_cut()
        .arg("-u")
        .write_stdin(input)
        .assert()
        .success()
        .stdout("-\tCx\n");
}

#[test]
fn too_few_types_fails() {
    let input = "#fields\tts\tuid\n#types\ttime\n1\tCx\n";
    zeek_cut()
        .arg("-u")
        .write_stdin(input)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("log header does not have enough fields"));
}

#[test]
fn conversion_flags_conflict() {
    zeek_cut().args(["-d", "-u"]).write_stdin(CONN_LOG).assert().failure();
}
