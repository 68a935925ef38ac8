//! CLI parse and rendering tests.

use super::{Cli, CliCommand};
use clap::Parser;

pub(super) fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}


#[test]
fn cli_parse_global_config() {
    let cli = parse(&["orcid-check", "check", "x", "--config", "/tmp/c.toml"]);
    assert_eq!(
        cli.config.as_deref(),
        Some(std::path::Path::new("/tmp/c.toml"))
    );
    assert!(matches!(cli.command, CliCommand::Check { .. }));
}

#[test]
fn cli_parse_requires_subcommand() {
    assert!(Cli::try_parse_from(["orcid-check"]).is_err());
}

#[test]
fn command_names_match_cli_spelling() {
    assert_eq!(parse(&["orcid-check", "check", "x"]).command.name(), "check");
    assert_eq!(
        parse(&["orcid-check", "check-digit", "000000021825009"])
            .command
            .name(),
        "check-digit"
    );
}
