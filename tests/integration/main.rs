//! CLI integration tests for `zeek-cut`.

mod header_blocks;
mod negate;
mod time_conversion;

use assert_cmd::Command;

/// A two-record conn log as Zeek writes it.
pub const CONN_LOG: &str = "#separator \\x09
#set_separator\t,
#empty_field\t(empty)
#unset_field\t-
#path\tconn
#open\t2011-03-18-19-06-07
#fields\tts\tuid\tid.orig_h\tid.orig_p\tproto
#types\ttime\tstring\taddr\tport\tenum
1300475167.096535\tCXWv6p3arKYeMETxOg\t141.142.220.202\t5353\tudp
1300475168.853899\tCjhGID4nQcgTWjvg4c\t141.142.220.118\t43927\ttcp
#close\t2011-03-18-19-06-13
";

/// A `zeek-cut` command isolated from the user's config file and environment.
#[allow(deprecated)]
pub fn zeek_cut() -> Command {
    let mut cmd = Command::cargo_bin("zeek-cut").unwrap();
    cmd.env("XDG_CONFIG_HOME", "/tmp/zeek-cut-test-no-config")
        .env_remove("ZEEK_CUT_TIMEFMT")
        .env_remove("BRO_CUT_TIMEFMT")
        .env_remove("ZEEK_CUT_LOG");
    cmd
}
