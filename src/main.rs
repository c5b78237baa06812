//! `apipuncher` sends one Slack Web API method for one or more configured teams
//! and prints what Slack answered.

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;

use anyhow::{anyhow, bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use log::{info, LevelFilter};
use serde::Deserialize;

use slack_api::http::{standard_registry, Client, ReqwestSender, SlotDefault};
use slack_api::{ConfigError, RequestOptions, SlackConfig};

mod logger;
use logger::Logger;

#[derive(Parser)]
#[command(name = "apipuncher", about = "Call Slack Web API methods", version)]
struct Cli {
    /// Config file to read instead of ~/.apipuncher.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Team to call, by name. Repeat for several teams. Defaults to the first one.
    #[arg(long = "team", global = true)]
    teams: Vec<String>,

    /// Call every configured team.
    #[arg(long, global = true, conflicts_with = "teams")]
    all_teams: bool,

    /// Log more. Repeat for more detail.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Send one method, e.g. `call chat.postMessage channel=C123 text=hi`.
    Call {
        /// Full method name.
        method: String,

        /// Parameters as KEY=VALUE, overriding the method's defaults.
        #[arg(value_parser = parse_pair)]
        params: Vec<(String, String)>,

        /// Leave a parameter out even if it has a default, such as the token.
        #[arg(long)]
        unset: Vec<String>,
    },

    /// List every known method with its verb and parameters.
    Methods,
}

#[derive(Debug, Default, Deserialize)]
struct Config {
    log_file: Option<PathBuf>,
    #[serde(default)]
    slack: Vec<Team>,
}

#[derive(Debug, Deserialize)]
struct Team {
    name: String,
    #[serde(flatten)]
    slack: SlackConfig,
}

fn parse_pair(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got `{}`", arg)),
    }
}

fn build_options(params: &[(String, String)], unset: &[String]) -> RequestOptions {
    let mut options: RequestOptions = params.iter().cloned().collect();
    for key in unset {
        options.unset(key);
    }
    options
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let (path, explicit) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => match dirs::home_dir() {
            Some(home) => (home.join(".apipuncher.toml"), false),
            None => return Ok(Config::default()),
        },
    };
    if !explicit && !path.exists() {
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Unable to read config file at {:?}", path))?;
    parse_config(&contents)
        .with_context(|| format!("{:?} is not a valid apipuncher config file", path))
}

fn parse_config(contents: &str) -> Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if let Some(team) = config.slack.iter().find(|t| t.slack.token.trim().is_empty()) {
        bail!("team {} has no token", team.name);
    }
    Ok(config)
}

/// The teams the command line asked for, in the order they were asked for.
fn select_teams(configured: Vec<Team>, wanted: &[String], all: bool) -> Result<Vec<Team>> {
    let configured = if configured.is_empty() {
        let slack = SlackConfig::from_env().map_err(|e| match e {
            ConfigError::MissingToken => {
                anyhow!("no teams configured and SLACK_API_TOKEN is not set")
            }
            other => other.into(),
        })?;
        vec![Team {
            name: "env".to_string(),
            slack,
        }]
    } else {
        configured
    };

    if all {
        return Ok(configured);
    }
    if wanted.is_empty() {
        return Ok(configured.into_iter().take(1).collect());
    }

    let mut selected = Vec::with_capacity(wanted.len());
    let mut configured: Vec<Option<Team>> = configured.into_iter().map(Some).collect();
    for name in wanted {
        let team = configured
            .iter_mut()
            .find(|t| t.as_ref().map_or(false, |t| &t.name == name))
            .and_then(Option::take)
            .ok_or_else(|| anyhow!("no team named {} in the config file", name))?;
        selected.push(team);
    }
    Ok(selected)
}

fn call(teams: Vec<Team>, method: &str, options: RequestOptions) -> Result<()> {
    let registry = standard_registry();
    if registry.resolve(method).is_none() {
        bail!("{} is not a known Slack method", method);
    }

    let labelled = teams.len() > 1;
    let total = teams.len();
    let (result_sender, result_recv) = mpsc::channel();

    for (index, team) in teams.into_iter().enumerate() {
        let result_sender = result_sender.clone();
        let options = options.clone();
        let method = method.to_string();
        thread::spawn(move || {
            let result = ReqwestSender::new(&team.slack)
                .context("Unable to build the HTTP client")
                .and_then(|sender| {
                    let client = Client::new(sender, team.slack);
                    client
                        .invoke(&method, options)
                        .with_context(|| format!("{} failed", method))
                });
            let _ = result_sender.send((index, team.name, result));
        });
    }

    // The loop below ends once every worker has dropped its sender
    drop(result_sender);

    let mut results: Vec<_> = result_recv.iter().collect();
    results.sort_by_key(|(index, _, _)| *index);

    let mut failures = 0;
    for (_, name, result) in results {
        match result {
            Ok(response) if labelled => println!("{}: {}", name, response),
            Ok(response) => println!("{}", response),
            Err(err) => {
                failures += 1;
                eprintln!("{}: {:#}", name, err);
            }
        }
    }

    if failures > 0 {
        bail!("{} of {} calls failed", failures, total);
    }
    Ok(())
}

fn list_methods() {
    for descriptor in standard_registry().iter() {
        let template: Vec<String> = descriptor
            .template
            .iter()
            .map(|slot| match slot.default {
                SlotDefault::Required => format!("{}*", slot.name),
                _ => slot.name.to_string(),
            })
            .collect();
        println!(
            "{:<6} {:<28} {}",
            descriptor.method.to_string(),
            descriptor.name(),
            template.join(", ")
        );
    }
}

fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Command::Methods = cli.command {
        list_methods();
        return Ok(());
    }

    let config = load_config(cli.config.as_deref())?;

    let log_path = match config.log_file.clone() {
        Some(path) => path,
        None => dirs::home_dir()
            .context("no home directory to keep ~/.apipuncher_log in")?
            .join(".apipuncher_log"),
    };
    Logger::new(&log_path, level_for(cli.verbose))
        .with_context(|| format!("Unable to open log file at {:?}", log_path))?
        .install()?;

    let teams = select_teams(config.slack, &cli.teams, cli.all_teams)?;
    info!(
        "using teams {}",
        teams.iter().map(|t| t.name.as_str()).collect::<Vec<_>>().join(", ")
    );

    match cli.command {
        Command::Call {
            method,
            params,
            unset,
        } => call(teams, &method, build_options(&params, &unset)),
        Command::Methods => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slack_api::Param;

    #[test]
    fn pairs_split_on_the_first_equals() {
        assert_eq!(
            parse_pair("text=a=b"),
            Ok(("text".to_string(), "a=b".to_string()))
        );
        assert_eq!(parse_pair("users=U1,U2").unwrap().1, "U1,U2");
        assert_eq!(parse_pair("pretty=").unwrap().1, "");
        assert!(parse_pair("=x").is_err());
        assert!(parse_pair("channel").is_err());
    }

    #[test]
    fn unset_keys_override_pairs() {
        let params = vec![
            ("channel".to_string(), "C1".to_string()),
            ("token".to_string(), "xoxb-1".to_string()),
        ];
        let options = build_options(&params, &["token".to_string()]);
        let channel = options.get("channel").and_then(Param::value);
        assert_eq!(channel.map(|v| v.to_string()).as_deref(), Some("C1"));
        assert_eq!(options.get("token"), Some(&Param::Unset));
    }

    #[test]
    fn config_file_teams() {
        let config = parse_config(
            r#"
            log_file = "/tmp/apipuncher.log"

            [[slack]]
            name = "work"
            token = "xoxb-work"

            [[slack]]
            name = "home"
            token = "xoxb-home"
            api_base = "http://127.0.0.1:9000/api/"
            "#,
        )
        .unwrap();
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/apipuncher.log")));
        assert_eq!(config.slack.len(), 2);
        assert_eq!(config.slack[0].slack, SlackConfig::new("xoxb-work"));
        assert_eq!(config.slack[1].slack.api_base, "http://127.0.0.1:9000/api/");
    }

    #[test]
    fn blank_tokens_are_rejected() {
        assert!(parse_config("[[slack]]\nname = \"work\"\ntoken = \"\"\n").is_err());
    }

    fn teams() -> Vec<Team> {
        ["work", "home", "club"]
            .iter()
            .map(|name| Team {
                name: name.to_string(),
                slack: SlackConfig::new(format!("xoxb-{}", name)),
            })
            .collect()
    }

    fn names(teams: &[Team]) -> Vec<&str> {
        teams.iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn team_selection() {
        assert_eq!(names(&select_teams(teams(), &[], false).unwrap()), ["work"]);
        assert_eq!(
            names(&select_teams(teams(), &[], true).unwrap()),
            ["work", "home", "club"]
        );
        let wanted = ["club".to_string(), "work".to_string()];
        assert_eq!(
            names(&select_teams(teams(), &wanted, false).unwrap()),
            ["club", "work"]
        );
        assert!(select_teams(teams(), &["nope".to_string()], false).is_err());
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(2), LevelFilter::Debug);
        assert_eq!(level_for(9), LevelFilter::Trace);
    }

    #[test]
    fn cli_parses_a_call() {
        let cli = Cli::try_parse_from([
            "apipuncher",
            "--team",
            "work",
            "call",
            "chat.postMessage",
            "channel=C1",
            "text=hi",
            "--unset",
            "token",
        ])
        .unwrap();
        assert_eq!(cli.teams, ["work"]);
        match cli.command {
            Command::Call {
                method,
                params,
                unset,
            } => {
                assert_eq!(method, "chat.postMessage");
                assert_eq!(params.len(), 2);
                assert_eq!(unset, ["token"]);
            }
            Command::Methods => panic!("expected a call"),
        }
    }
}
