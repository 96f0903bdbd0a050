use std::path::PathBuf;

use clap::Parser;

use crate::model::View;

#[derive(Parser, Debug)]
#[command(
    name = "todoflow",
    about = concat!("[x] todoflow v", env!("CARGO_PKG_VERSION"), " - tasks for this session, in your terminal"),
    version
)]
pub struct Cli {
    /// Read UI settings from this file instead of the default location
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// View to open with: today, upcoming, all or completed
    #[arg(long)]
    pub view: Option<View>,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
