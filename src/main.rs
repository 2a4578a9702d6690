use anyhow::{bail, Context, Result};
use clap::Parser;
use winit::event_loop::EventLoop;

use pixelblit::app::{App, AppConfig};
use pixelblit::cli::Cli;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig {
        width: cli.width,
        height: cli.height,
        title: cli.title.clone(),
        clear_color: cli.clear_color()?,
    };

    let event_loop = EventLoop::new().context("event loop creation failed")?;
    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    // ApplicationHandler can't return errors, so setup failures surface here
    // to produce a non-zero exit code.
    if let Some(message) = app.setup_error() {
        bail!("{message}");
    }

    log::info!("clean exit after {} frames", app.frames_presented());
    Ok(())
}
