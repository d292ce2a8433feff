use std::fs::{create_dir_all, OpenOptions};
use std::sync::Mutex;

use linkhub::ui::terminal::{enable_mouse, teardown};
use linkhub::util::log::init_log_dir;
use linkhub::widgets::error_boundary::install_panic_guard;
use linkhub::{App, AppConfig};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config = AppConfig::load()?;
    init_log_dir(&config.log_dir);

    // stdout belongs to the terminal UI, so tracing goes to a file
    create_dir_all(&config.log_dir)?;
    let trace_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(config.log_dir.join("trace.log"))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(trace_file))
        .with_ansi(false)
        .init();

    let app = App::new(config)?;

    let terminal = ratatui::init();
    // Wraps the restore hook ratatui just installed
    install_panic_guard();

    let mut stdout = std::io::stdout();
    let result = match enable_mouse(&mut stdout) {
        Ok(()) => app.run(terminal).await,
        Err(e) => Err(e.into()),
    };
    teardown(&mut stdout, ratatui::restore);
    result
}
