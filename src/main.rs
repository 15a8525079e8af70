use anyhow::Result;
use clap::Parser;

use inovaview::app::App;
use inovaview::cli::Cli;
use inovaview::config::Config;

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal state before handling panic so the shell
        // is usable after a crash
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen
        );
        original_hook(panic_info);
    }));
}

fn main() -> Result<()> {
    setup_panic_hook();

    let cli = Cli::parse();

    // Set up logging directory
    let log_dir = dirs::cache_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_default())
        .join("inovaview");
    std::fs::create_dir_all(&log_dir)?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_appender = tracing_appender::rolling::never(&log_dir, "inovaview.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false) // Disable ANSI colors in file
        .init();

    let config_path = cli
        .config
        .unwrap_or_else(inovaview::utils::get_config_path);
    let config = Config::load_or_create(&config_path)?;
    if !config.is_configured() {
        anyhow::bail!(
            "Supabase connection not configured.\n\
            Fill in supabase.url and supabase.anon_key in {:?}",
            config_path
        );
    }

    let mut app = App::new(config)?;
    let result = app.run();

    drop(guard);

    result
}
