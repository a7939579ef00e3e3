mod utils;

use crate::utils::MultiProgressNew;
use clap::{Parser, ValueEnum};
use env_logger::Env;
use futures::future;
use indicatif::{MultiProgress, ProgressBar};
use itertools::Itertools;
use log::{debug, error, info};
use sprint_metrics::analyze::{Analyzer, SprintReport};
use sprint_metrics::i18n::Translations;
use sprint_metrics::loader::{JsonSnapshotLoader, SprintRepository};
use sprint_metrics::model::Sprint;
use sprint_metrics::report::ReportFormat;
use sprint_metrics::{MetricsError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser, Debug, Clone)]
struct Args {
    #[arg(long = "snapshot", default_value = "sprints.json")]
    snapshot_paths: Vec<PathBuf>,
    #[arg(long = "translations")]
    translations_path: Option<PathBuf>,
    #[arg(long = "out", default_value = "reports")]
    out_dir: PathBuf,
    #[arg(long = "format", value_enum, default_value_t = ReportFormat::Markdown)]
    format: ReportFormat,
    #[arg(long = "log_level", value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    configure_logging(args.log_level);
    if let Err(err) = run(&args).await {
        error!("{err}");
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn configure_logging(log_level: LogLevel) {
    // RUST_LOG wins over the command line level
    env_logger::Builder::from_env(Env::default().default_filter_or(match log_level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    }))
    .init();
    debug!("Logging started");
}

async fn run(args: &Args) -> Result<()> {
    let translations = match &args.translations_path {
        Some(path) => Translations::from_file(path)?,
        None => Translations::default(),
    };
    let sprints = tokio::spawn(load_snapshots(args.snapshot_paths.clone())).await??;
    info!("Loaded {} sprints", sprints.len());

    let reports = sprints.analyze_sprints(&translations);
    write_reports(&reports, &args.out_dir, args.format)
}

async fn load_snapshots(paths: Vec<PathBuf>) -> Result<Vec<Sprint>> {
    async fn load_snapshot(path: PathBuf, pb: ProgressBar) -> Result<Vec<Sprint>> {
        let loader = JsonSnapshotLoader::new(path.clone());
        let sprints = tokio::task::spawn_blocking(move || loader.sprints()).await?;
        match &sprints {
            Ok(sprints) => pb.finish_with_message(format!(
                "✅ Completed parsing file `{}` (find {} sprints)",
                path.display(),
                sprints.len()
            )),
            Err(_) => pb.abandon_with_message(format!(
                "❌ Failed parsing file `{}`",
                path.display()
            )),
        }
        sprints
    }

    let multi_progress = MultiProgress::default();
    let loads = paths
        .into_iter()
        .map(|path| {
            let pb = multi_progress.add_spinner(format!("Read file `{}` ...", path.display()));
            load_snapshot(path, pb)
        })
        .collect::<Vec<_>>();

    future::join_all(loads)
        .await
        .into_iter()
        .flatten_ok()
        .collect()
}

fn write_reports(reports: &[SprintReport], out_dir: &Path, format: ReportFormat) -> Result<()> {
    fs::create_dir_all(out_dir).map_err(|source| MetricsError::WriteReport {
        path: out_dir.to_path_buf(),
        source,
    })?;
    for report in reports {
        let path = out_dir.join(format!("{}.{}", report.file_stem(), format.extension()));
        let content = format.render(report)?;
        fs::write(&path, content).map_err(|source| MetricsError::WriteReport {
            path: path.clone(),
            source,
        })?;
        info!("Wrote report for `{}` to {}", report.title, path.display());
    }
    Ok(())
}
