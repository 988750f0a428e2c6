mod app;
mod config;
mod error;
mod event;
mod feed;
mod logging;
mod scene;
#[cfg(test)]
mod test_utils;
mod ticker;
mod ui;

use app::App;
use clap::Parser;
use config::{Config, Overrides};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use error::PortfolioError;
use event::AppEvent;
use feed::activation;
use feed::source::{GitHubSource, ListingSource};
use futures::StreamExt;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;

#[derive(Parser)]
#[command(name = "foundry", about = "Terminal portfolio with a live repository feed")]
struct Cli {
    #[arg(long, short, help = "GitHub account whose public repositories are listed")]
    account: Option<String>,

    #[arg(long, short, help = "Path to a config.toml")]
    config: Option<PathBuf>,

    #[arg(long, help = "Write logs to this file")]
    log_file: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = Config::load(Overrides {
        config_file: cli.config,
        account: cli.account,
        log_file: cli.log_file,
    })?;

    let log_path = config
        .log_file
        .clone()
        .unwrap_or_else(logging::default_log_path);
    logging::init("info", &log_path).map_err(PortfolioError::from)?;
    if let Some(warning) = &config.load_warning {
        tracing::warn!("{warning}");
    }
    tracing::info!(?config, "starting");

    let source: Arc<dyn ListingSource> = Arc::new(GitHubSource::new(
        &config.api_base_url,
        config.github_token.as_deref(),
    )?);

    let tick_rate = config.tick_rate_ms;
    let mut app = App::new(config);

    // Install panic hook before entering raw mode so terminal is restored on panic
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let (tx, mut rx) = mpsc::unbounded_channel::<AppEvent>();

    activate(&mut app, &source, &tx);

    let ticker = tokio::spawn(ticker::start_ticker(tx.clone(), tick_rate));

    let input_tx = tx.clone();
    let input = tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            let app_event = match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
                Event::Resize(_, _) => Some(AppEvent::Resize),
                _ => None,
            };
            if let Some(e) = app_event {
                if input_tx.send(e).is_err() {
                    break;
                }
            }
        }
    });

    loop {
        terminal.draw(|f| app.render(f))?;

        let first = match rx.recv().await {
            Some(e) => e,
            None => break,
        };
        app.handle_event(first);
        while let Ok(pending) = rx.try_recv() {
            app.handle_event(pending);
        }

        if app.should_quit {
            break;
        }
        if app.take_reload_request() {
            activate(&mut app, &source, &tx);
        }
    }

    app.teardown();
    ticker.abort();
    input.abort();
    drop(rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("shut down");
    Ok(())
}

fn activate(app: &mut App, source: &Arc<dyn ListingSource>, tx: &mpsc::UnboundedSender<AppEvent>) {
    let id = app.begin_activation();
    let handle = activation::spawn_load(
        id,
        app.config.account.clone(),
        Arc::clone(source),
        tx.clone(),
    );
    app.attach_load(handle);
}
