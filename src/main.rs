//! `touchtile` - split terminal frames with the mouse.
//!
//! Left click splits the frame under the pointer top/bottom, right click
//! splits it side by side. Escape, `q` or Ctrl+C quits.

mod cli;

use std::fs::File;
use std::io;
use std::path::Path;

use clap::Parser;
use cli::Cli;
use env_logger::{Env, Target};
use touchtile::app::App;

/// The terminal shows the frames, so logs go to a file or nowhere.
fn init_logging(log_file: Option<&Path>) -> io::Result<()> {
    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            env_logger::Builder::from_env(Env::default().default_filter_or("debug"))
                .target(Target::Pipe(Box::new(file)))
                .init();
        }
        None => env_logger::Builder::from_env(Env::default().default_filter_or("off")).init(),
    }
    Ok(())
}

async fn run(cli: &Cli) -> io::Result<()> {
    let mut app = App::new(cli.to_config())?;
    app.run_terminal().await
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.log_file.as_deref()) {
        eprintln!("Error: cannot open log file: {e}");
        std::process::exit(1);
    }
    log::info!("starting with {cli:?}");

    if let Err(e) = run(&cli).await {
        log::error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
