use std::path::PathBuf;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use docs_version_bump::cli::orchestration::{preflight_warnings, report_warnings};
use docs_version_bump::cli::{self, RunOptions};
use docs_version_bump::config;
use docs_version_bump::domain::TargetVersion;
use docs_version_bump::self_test;
use docs_version_bump::ui::Reporter;

#[derive(clap::Parser)]
#[command(
    name = "docs-version-bump",
    about = "Point versioned documentation URLs at a new release"
)]
struct Args {
    #[arg(help = "Directory of documents to rewrite")]
    root: Option<PathBuf>,

    #[arg(
        value_name = "VERSION",
        help = "Target release, e.g. 3.15 or 3.16.0"
    )]
    target_version: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Report what would change without writing documents")]
    dry_run: bool,

    #[arg(short, long, help = "Suppress all console output")]
    silent: bool,

    #[arg(short, long, help = "Print the path of every changed document")]
    verbose: bool,

    #[arg(
        long,
        help = "Run the built-in rewrite checks and exit",
        conflicts_with_all = ["root", "target_version"]
    )]
    self_test: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let options = RunOptions {
        dry_run: args.dry_run,
        silent: args.silent,
        verbose: args.verbose,
    };
    let reporter = Reporter::new(&options);

    if args.self_test {
        let outcomes = self_test::run_self_test();
        reporter.self_test(&outcomes);
        if outcomes.iter().any(|outcome| !outcome.passed()) {
            std::process::exit(1);
        }
        return Ok(());
    }

    let (Some(root), Some(version)) = (args.root, args.target_version) else {
        Args::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                "a root directory and a target version are required",
            )
            .exit();
    };

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            reporter.error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let target = TargetVersion::new(version);
    for warning in preflight_warnings(&target) {
        reporter.warning(&warning);
    }

    if options.dry_run {
        reporter.status("Dry run: documents will not be written");
    }

    let report = match cli::run(&root, &target, &options, &config) {
        Ok(report) => report,
        Err(e) => {
            reporter.error(&format!(
                "Failed to rewrite documents under '{}': {}",
                root.display(),
                e
            ));
            std::process::exit(1);
        }
    };

    for warning in report_warnings(&root, &report, &config) {
        reporter.warning(&warning);
    }
    reporter.report(&report);

    Ok(())
}
