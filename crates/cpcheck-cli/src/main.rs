//! cpcheck CLI - black-box checks against the complaint prioritization service

use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use cpcheck_core::{Config, Runner, SilentListener, StdoutListener, report};
use cpcheck_runner::{HttpClient, RequestSpec, Suite};

#[derive(Parser)]
#[command(name = "cpcheck")]
#[command(about = "Black-box integration checks for the complaint prioritization service")]
#[command(version)]
struct Cli {
    /// Invoked with no subcommand, the full catalog runs.
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output format
    #[arg(long, global = true, default_value = "terminal")]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the case catalog against the configured service
    Run {
        /// Config file (default: .cpcheck.toml)
        #[arg(short, long)]
        config: Option<String>,
    },

    /// List the case catalog
    List,

    /// Initialize config file
    Init,

    /// Show configuration and service reachability
    Doctor,

    /// Export JSON Schema for the report format
    Schema,

    /// Show usage guide
    Guide,
}

#[derive(Clone, Copy, ValueEnum, PartialEq, Eq)]
enum OutputFormat {
    Terminal,
    Json,
    Silent,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(3)
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command.unwrap_or(Commands::Run { config: None }) {
        Commands::Run { config } => {
            let cfg = if let Some(path) = config {
                Config::load(Path::new(&path))?
            } else {
                Config::load_default()?
            };

            if cli.output != OutputFormat::Silent {
                eprintln!("Config:");
                eprintln!("  base_url: {}", cfg.base_url);
                eprintln!("  sut_root: {}", cfg.sut_root.display());
                eprintln!("  timeout:  {}s", cfg.timeout_secs);
                eprintln!();
            }

            let registry = Suite::catalog()?;
            let mut suite = Suite::new(&cfg)?;

            let report = match cli.output {
                OutputFormat::Terminal => {
                    Runner::new(StdoutListener).run(&registry, &mut suite)
                }
                OutputFormat::Json | OutputFormat::Silent => {
                    Runner::new(SilentListener).run(&registry, &mut suite)
                }
            };

            match cli.output {
                OutputFormat::Terminal => {
                    println!();
                    println!("{}", report.summary());
                }
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&report)?);
                }
                OutputFormat::Silent => {}
            }

            Ok(report.exit_code())
        }

        Commands::List => {
            let registry = Suite::catalog()?;
            for case in registry.ordered() {
                println!("{:>2}  {:<40} {}", case.priority, case.name, case.description);
            }
            Ok(0)
        }

        Commands::Init => {
            let config_path = ".cpcheck.toml";
            if Path::new(config_path).exists() {
                eprintln!("{config_path} already exists");
                return Ok(1);
            }

            std::fs::write(config_path, Config::example())?;
            println!("Created {config_path}");
            println!("\nEdit the file to configure:");
            println!("  - base_url: the service under test");
            println!("  - sut_root: root of the service source tree");
            println!("  - timeout_secs: connect/read timeout");
            Ok(0)
        }

        Commands::Doctor => {
            println!("cpcheck doctor");
            println!("==============\n");

            let config_ok = Config::load_default().is_ok();
            println!(
                "[{}] Config file (.cpcheck.toml)",
                if config_ok { "OK" } else { "--" }
            );

            if let Ok(cfg) = Config::load_default() {
                let tree_ok = cfg.sut_root.is_dir();
                println!(
                    "[{}] SUT tree root ({})",
                    if tree_ok { "OK" } else { "NG" },
                    cfg.sut_root.display()
                );

                let client = HttpClient::new(cfg.base_url.clone(), Duration::from_secs(5));
                let reachable = client
                    .and_then(|c| c.execute(&RequestSpec::get("/")))
                    .is_ok();
                println!(
                    "[{}] Service reachable ({})",
                    if reachable { "OK" } else { "NG" },
                    cfg.base_url
                );
                if !reachable {
                    println!("\nStart the complaint service on {} and retry.", cfg.base_url);
                }
            }

            if !config_ok {
                println!("\nCreate config file:");
                println!("  cpcheck init");
            }

            Ok(0)
        }

        Commands::Schema => {
            println!("{}", report::generate_schema());
            Ok(0)
        }

        Commands::Guide => {
            print!("{}", include_str!("../docs/GUIDE.md"));
            Ok(0)
        }
    }
}
