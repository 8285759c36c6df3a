//! CLI tests, one file per area.

use super::Cli;
use clap::Parser;


#[test]
fn cli_parse_no_args() {
    assert!(Cli::try_parse_from(["imgfetch"]).is_ok());
}

#[test]
fn cli_rejects_flags_and_positionals() {
    assert!(Cli::try_parse_from(["imgfetch", "--folder", "pics"]).is_err());
    assert!(Cli::try_parse_from(["imgfetch", "https://example.com/a.png"]).is_err());
}

#[test]
fn cli_help_and_version_are_builtin() {
    let help = Cli::try_parse_from(["imgfetch", "--help"]).unwrap_err();
    assert_eq!(help.kind(), clap::error::ErrorKind::DisplayHelp);
    let version = Cli::try_parse_from(["imgfetch", "--version"]).unwrap_err();
    assert_eq!(version.kind(), clap::error::ErrorKind::DisplayVersion);
}
