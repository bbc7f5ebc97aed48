mod app;
mod data;
mod util;

use std::path::PathBuf;

use clap::Parser;
use flexi_logger::{Logger, LoggerHandle};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Graph data JSON file; the built-in sample set is used when omitted.
    #[arg(long)]
    graph: Option<PathBuf>,

    /// Log level specification, e.g. "info" or "graphfolio=debug".
    #[arg(long, default_value = "info")]
    log: String,
}

fn init_logging(spec: &str) -> Option<LoggerHandle> {
    match Logger::try_with_env_or_str(spec).and_then(|logger| logger.start()) {
        Ok(handle) => Some(handle),
        Err(error) => {
            eprintln!("logger initialization failed: {error}");
            None
        }
    }
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();
    let _logger = init_logging(&args.log);

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1280.0, 840.0]),
        ..Default::default()
    };

    eframe::run_native(
        "graphfolio",
        options,
        Box::new(move |cc| Ok(Box::new(app::GraphfolioApp::new(cc, args.graph.clone())))),
    )
}
