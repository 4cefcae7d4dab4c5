// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;
mod runtime;

use anyhow::{Context, Result, anyhow};
use config::Config;
use jobdeck_app::PickerKind;
use runtime::{OutputFormat, SampleDocumentPicker, Screen, ScreenKind, Session};
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use time::OffsetDateTime;
use tracing::info;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "JOBDECK_LOG";

fn main() {
    if let Err(error) = run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = parse_cli_args(env::args().skip(1), Config::default_path()?)?;
    if options.show_help {
        print_help();
        return Ok(());
    }

    if options.print_config_path {
        println!("{}", options.config_path.display());
        return Ok(());
    }

    if options.print_example {
        print!("{}", Config::example_config(&options.config_path));
        return Ok(());
    }

    let config = Config::load(&options.config_path).with_context(|| {
        format!(
            "load config {}; run `jobdeck --print-example-config` to generate a v1 template",
            options.config_path.display()
        )
    })?;
    init_logging(&config.log_level());

    let now = OffsetDateTime::now_utc();
    let screen = Screen::mount(options.screen, &config, now, options.job_id.as_deref())
        .with_context(|| format!("mount the {} screen", options.screen.as_str()))?;
    if options.check_only {
        return Ok(());
    }

    let format = if options.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let mut session = Session::new(
        screen,
        SampleDocumentPicker::from_config(&config),
        now,
        format,
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let executed = match &options.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("open session script {}", path.display()))?;
            session.run(BufReader::new(file), &mut out)?
        }
        None => session.run(io::stdin().lock(), &mut out)?,
    };
    info!(
        executed,
        screen = options.screen.as_str(),
        open = session.screen().is_open(),
        "session finished"
    );
    Ok(())
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));
    // A subscriber already installed by a test harness is fine to keep.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: PathBuf,
    screen: ScreenKind,
    script: Option<PathBuf>,
    job_id: Option<String>,
    json: bool,
    print_config_path: bool,
    print_example: bool,
    check_only: bool,
    show_help: bool,
}

fn parse_cli_args<I, S>(args: I, default_config_path: PathBuf) -> Result<CliOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CliOptions {
        config_path: default_config_path,
        screen: ScreenKind::Picker(PickerKind::Skills),
        script: None,
        job_id: None,
        json: false,
        print_config_path: false,
        print_example: false,
        check_only: false,
        show_help: false,
    };

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_ref() {
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--config requires a file path"))?;
                options.config_path = PathBuf::from(value.as_ref());
            }
            "--screen" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--screen requires one of {}", ScreenKind::NAMES))?;
                options.screen = ScreenKind::parse(value.as_ref()).ok_or_else(|| {
                    anyhow!(
                        "unknown screen {:?}; expected one of {}",
                        value.as_ref(),
                        ScreenKind::NAMES
                    )
                })?;
            }
            "--script" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--script requires a file path"))?;
                options.script = Some(PathBuf::from(value.as_ref()));
            }
            "--job" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--job requires a saved job id"))?;
                options.job_id = Some(value.as_ref().to_owned());
            }
            "--json" => {
                options.json = true;
            }
            "--print-config-path" => {
                options.print_config_path = true;
            }
            "--print-example-config" => {
                options.print_example = true;
            }
            "--check" => {
                options.check_only = true;
            }
            "--help" | "-h" => {
                options.show_help = true;
            }
            unknown => {
                return Err(anyhow!(
                    "unknown argument {unknown:?}; run with --help to see supported options"
                ));
            }
        }
    }

    Ok(options)
}

fn print_help() {
    println!("jobdeck");
    println!("  --config <path>          Use a specific config path");
    println!("  --print-config-path      Print resolved config path");
    println!("  --print-example-config   Print a v1 config template");
    println!("  --screen <name>          Screen to mount: {}", ScreenKind::NAMES);
    println!("  --job <id>               Saved job reviewed by the application screen");
    println!("  --script <path>          Read session commands from a file instead of stdin");
    println!("  --json                   Print one JSON object per command");
    println!("  --check                  Validate config and mount the screen, then exit");
    println!("  --help                   Show this help");
    println!();
    println!("Session commands, one per line:");
    println!("  query <text> | pick <id> | unpick <id> | clear | delete <id> | delete-all");
    println!("  confirm | cancel | upload | letter <text> | save | show");
}

#[cfg(test)]
mod tests {
    use super::{CliOptions, parse_cli_args};
    use crate::runtime::ScreenKind;
    use anyhow::Result;
    use jobdeck_app::PickerKind;
    use std::path::PathBuf;

    fn default_options_path() -> PathBuf {
        PathBuf::from("/tmp/jobdeck-config.toml")
    }

    #[test]
    fn parse_cli_args_defaults_to_skill_picker() -> Result<()> {
        let options = parse_cli_args(Vec::<String>::new(), default_options_path())?;
        assert_eq!(
            options,
            CliOptions {
                config_path: default_options_path(),
                screen: ScreenKind::Picker(PickerKind::Skills),
                script: None,
                job_id: None,
                json: false,
                print_config_path: false,
                print_example: false,
                check_only: false,
                show_help: false,
            }
        );
        Ok(())
    }

    #[test]
    fn parse_cli_args_sets_config_path_override() -> Result<()> {
        let options = parse_cli_args(
            vec!["--config", "/custom/config.toml"],
            default_options_path(),
        )?;
        assert_eq!(options.config_path, PathBuf::from("/custom/config.toml"));
        Ok(())
    }

    #[test]
    fn parse_cli_args_errors_for_missing_values() {
        for (flag, expected) in [
            ("--config", "--config requires a file path"),
            ("--script", "--script requires a file path"),
            ("--job", "--job requires a saved job id"),
            ("--screen", "--screen requires one of"),
        ] {
            let error = parse_cli_args(vec![flag], default_options_path())
                .expect_err("missing value should fail");
            assert!(error.to_string().contains(expected), "{flag}");
        }
    }

    #[test]
    fn parse_cli_args_selects_screen_and_script() -> Result<()> {
        let options = parse_cli_args(
            vec![
                "--screen",
                "application",
                "--job",
                "2",
                "--script",
                "apply.txt",
                "--json",
            ],
            default_options_path(),
        )?;
        assert_eq!(options.screen, ScreenKind::Application);
        assert_eq!(options.job_id.as_deref(), Some("2"));
        assert_eq!(options.script, Some(PathBuf::from("apply.txt")));
        assert!(options.json);
        Ok(())
    }

    #[test]
    fn parse_cli_args_rejects_unknown_screen() {
        let error = parse_cli_args(vec!["--screen", "dashboard"], default_options_path())
            .expect_err("unknown screen should fail");
        let message = error.to_string();
        assert!(message.contains("unknown screen \"dashboard\""));
        assert!(message.contains("saved-jobs"));
    }

    #[test]
    fn parse_cli_args_errors_for_unknown_argument() {
        let error = parse_cli_args(vec!["--wat"], default_options_path())
            .expect_err("unknown arg should fail");
        let message = error.to_string();
        assert!(message.contains("unknown argument"));
        assert!(message.contains("--help"));
    }

    #[test]
    fn parse_cli_args_sets_print_and_check_flags() -> Result<()> {
        let options = parse_cli_args(
            vec!["--print-config-path", "--print-example-config", "--check"],
            default_options_path(),
        )?;
        assert!(options.print_config_path);
        assert!(options.print_example);
        assert!(options.check_only);
        assert!(!options.json);
        assert!(!options.show_help);
        Ok(())
    }

    #[test]
    fn parse_cli_args_sets_help_flag_for_long_and_short_variants() -> Result<()> {
        let long = parse_cli_args(vec!["--help"], default_options_path())?;
        assert!(long.show_help);

        let short = parse_cli_args(vec!["-h"], default_options_path())?;
        assert!(short.show_help);
        Ok(())
    }
}
