use super::*;

#[test]
fn test_cli_parses_input_and_verbosity() {
    let cli = Cli::parse_from(["deptrack", "deps.txt", "-vv"]);
    assert_eq!(cli.input, PathBuf::from("deps.txt"));
    assert_eq!(cli.verbose, 2);

    let config = CliConfig::from_cli(cli);
    assert_eq!(config.logger.level, LogLevel::Info);
    assert_eq!(config.logger.output, LogOutput::Stderr);
}

#[test]
fn test_cli_defaults_to_quiet_stderr_logging() {
    let cli = Cli::parse_from(["deptrack", "deps.txt"]);
    let config = CliConfig::from_cli(cli);
    assert_eq!(config.logger.level, LogLevel::Error);
    assert_eq!(config.logger.output, LogOutput::Stderr);
}

#[test]
fn test_cli_log_output_selection() {
    let cli = Cli::parse_from(["deptrack", "deps.txt", "--log-output", "stdout"]);
    assert_eq!(cli.log_output, LogOutput::Stdout);
}

#[test]
fn test_cli_requires_an_input_file() {
    assert!(Cli::try_parse_from(["deptrack"]).is_err());
}
