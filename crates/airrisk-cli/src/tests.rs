use super::*;

#[test]
fn parses_update_with_defaults() {
    let cli = Cli::try_parse_from(["airrisk-cli", "update"]).expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Update {
            output: None,
            skip_notices: false
        }
    ));
}

#[test]
fn parses_update_with_output_and_skip_notices() {
    let cli = Cli::try_parse_from([
        "airrisk-cli",
        "update",
        "--output",
        "/tmp/out.kml",
        "--skip-notices",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Update {
            output: Some(ref path),
            skip_notices: true
        } if path == &PathBuf::from("/tmp/out.kml")
    ));
}

#[test]
fn parses_manifest_command() {
    let cli = Cli::try_parse_from(["airrisk-cli", "manifest"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Manifest));
}

#[test]
fn missing_subcommand_is_rejected() {
    assert!(Cli::try_parse_from(["airrisk-cli"]).is_err());
}

#[test]
fn unknown_flag_is_rejected() {
    assert!(Cli::try_parse_from(["airrisk-cli", "update", "--dry-run"]).is_err());
}
