// warp-digest - what did I actually do in the terminal today?
//
// Parses CLI args, runs the pipeline, prints the report.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;
use tracing::{error, info};
use warp_digest_lib::{
    intelligence::Analyzer,
    logging::enable_logging,
    report::{progress_line, ReportContext, ReportRenderer},
    AnalyzerConfig, Pipeline, Result,
};

#[derive(Parser, Debug)]
#[command(name = "warp-digest", version, long_about = None)]
#[command(about = "Summarise today's Warp terminal activity")]
struct Args {
    #[arg(help = "Log file to read. Defaults to ~/Library/Logs/warp.log")]
    path: Option<PathBuf>,
    #[arg(long, help = "Day to analyze as YYYY-MM-DD. Defaults to today")]
    date: Option<String>,
    #[arg(long, help = "Enable logging")]
    verbose: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    let logging_level = args.verbose.then_some(LevelFilter::TRACE);
    enable_logging(logging_level)?;

    match run(args) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            error!("Run failed: {e:?}");
            eprintln!("❌ {}", e.user_message());
            Ok(ExitCode::FAILURE)
        }
    }
}

fn run(args: Args) -> Result<()> {
    let log_path = match args.path {
        Some(path) => path,
        None => AnalyzerConfig::default_log_path()?,
    };

    let config = match args.date.as_deref() {
        Some(date) => AnalyzerConfig::new(log_path, AnalyzerConfig::parse_date(date)?),
        None => AnalyzerConfig::for_today(log_path),
    };

    let pipeline = Pipeline::new(config);

    // Progress goes to stderr so stdout carries only the report
    let (events, scan) = pipeline.run_with_progress(|lines| {
        eprintln!("{}", progress_line(lines));
    })?;

    let result = Analyzer::analyze(&events);
    info!(
        "Analysis done: {} commands, score {:.1}",
        result.total_count, result.productivity_score
    );

    let context = ReportContext {
        target_date: pipeline.config().target_date,
        log_path: &pipeline.config().log_path,
        scan,
    };
    print!("{}", ReportRenderer::new(context, &result));

    Ok(())
}
