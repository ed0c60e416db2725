use anyhow::Context as _;
use chrono::NaiveDate;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use jira2md_core::{generate_report, parse_date, today, Config, ReportError};
use std::path::PathBuf;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing::{debug, info};

fn cli() -> Command {
    Command::new("jira2md")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render an issue tracker CSV export as a Markdown report grouped by epic")
        .long_about(
            "Reads a CSV export of issues from standard input, groups the issues by epic link, \
             sorts each group by priority and status and prints a Markdown report.",
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("YAML or JSON file with `domain` and `epics` settings"),
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Read the CSV export from FILE instead of standard input"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Write the report to FILE instead of standard output"),
        )
        .arg(
            Arg::new("date")
                .long("date")
                .value_name("YYYY-MM-DD")
                .value_parser(parse_date)
                .help("Date shown in the report banner, defaults to today"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Log progress to standard error, repeat for more detail"),
        )
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    // Standard output carries the report
    tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_writer(std::io::stderr)
        .init();
}

async fn load_config(path: Option<&PathBuf>) -> jira2md_core::Result<Config> {
    let Some(path) = path else {
        debug!("No configuration file given, using defaults");
        return Ok(Config::default());
    };

    info!("Reading configuration from: {}", path.display());
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|err| ReportError::config(path, err))?;
    Config::parse(path, &contents)
}

async fn read_input(path: Option<&PathBuf>) -> anyhow::Result<Vec<u8>> {
    let input = match path {
        Some(path) => {
            info!("Reading issues from: {}", path.display());
            tokio::fs::read(path)
                .await
                .with_context(|| format!("failed to read input file '{}'", path.display()))?
        }
        None => {
            debug!("Reading issues from standard input");
            let mut input = Vec::new();
            tokio::io::stdin()
                .read_to_end(&mut input)
                .await
                .context("failed to read standard input")?;
            input
        }
    };
    debug!("Read {} byte(s) of input", input.len());
    Ok(input)
}

async fn write_output(path: Option<&PathBuf>, report: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            tokio::fs::write(path, report)
                .await
                .with_context(|| format!("failed to write report to '{}'", path.display()))?;
            info!("Report written to: {}", path.display());
        }
        None => {
            let mut stdout = tokio::io::stdout();
            stdout
                .write_all(report.as_bytes())
                .await
                .context("failed to write report to standard output")?;
            stdout.flush().await?;
        }
    }
    Ok(())
}

async fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    // Configuration problems abort before any input is read
    let config = load_config(matches.get_one::<PathBuf>("config")).await?;
    debug!("Configuration: {:?}", config);

    let date = matches
        .get_one::<NaiveDate>("date")
        .copied()
        .unwrap_or_else(today);

    let input = read_input(matches.get_one::<PathBuf>("input")).await?;
    let report = generate_report(input.as_slice(), &config, date)?;

    write_output(matches.get_one::<PathBuf>("output"), &report).await
}

#[tokio::main]
async fn main() {
    let matches = cli().get_matches();
    init_tracing(matches.get_count("verbose"));

    if let Err(err) = run(&matches).await {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        cli().debug_assert();
    }

    #[test]
    fn test_parses_short_and_long_config_flag() {
        for flag in ["-c", "--config"] {
            let matches = cli().try_get_matches_from(["jira2md", flag, "report.yaml"]).unwrap();
            assert_eq!(
                matches.get_one::<PathBuf>("config"),
                Some(&PathBuf::from("report.yaml"))
            );
        }
    }

    #[test]
    fn test_config_flag_is_optional() {
        let matches = cli().try_get_matches_from(["jira2md"]).unwrap();
        assert!(matches.get_one::<PathBuf>("config").is_none());
        assert_eq!(matches.get_count("verbose"), 0);
    }

    #[test]
    fn test_date_flag_is_validated() {
        let matches = cli()
            .try_get_matches_from(["jira2md", "--date", "2024-03-09"])
            .unwrap();
        assert_eq!(
            matches.get_one::<NaiveDate>("date"),
            NaiveDate::from_ymd_opt(2024, 3, 9).as_ref()
        );
        assert!(cli()
            .try_get_matches_from(["jira2md", "--date", "yesterday"])
            .is_err());
    }

    #[tokio::test]
    async fn test_missing_config_file_names_path() {
        let path = PathBuf::from("/nonexistent/jira2md/report.yaml");
        let err = load_config(Some(&path)).await.unwrap_err();
        assert!(err.to_string().contains("/nonexistent/jira2md/report.yaml"));
    }

    #[tokio::test]
    async fn test_no_config_file_gives_defaults() {
        assert_eq!(load_config(None).await.unwrap(), Config::default());
    }
}
