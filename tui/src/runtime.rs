//! Terminal event loop.
//!
//! Key presses, spinner ticks and finished embedding jobs all arrive at the
//! same `select!` and are handed to [`App::handle_event`] one at a time.
//! Embedding jobs run on spawned tasks and report back through a channel.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEventKind};
use ember_embeddings::{EmbeddingProvider, EmbeddingRequest};
use ratatui::DefaultTerminal;
use tokio::sync::mpsc;
use tokio_stream::StreamExt;
use tracing::{debug, info};

use crate::app::App;
use crate::event::{AppEvent, Command};
use crate::ui;

const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Take over the terminal and run the session until the user quits.
pub async fn run(
    app: App,
    initial: Option<Command>,
    provider: Arc<dyn EmbeddingProvider>,
) -> anyhow::Result<()> {
    let mut terminal = ratatui::try_init()?;
    let result = event_loop(&mut terminal, app, initial, provider).await;
    ratatui::restore();
    result
}

async fn event_loop(
    terminal: &mut DefaultTerminal,
    mut app: App,
    initial: Option<Command>,
    provider: Arc<dyn EmbeddingProvider>,
) -> anyhow::Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut terminal_events = EventStream::new();
    let mut ticker = tokio::time::interval(TICK_INTERVAL);

    if let Some(command) = initial {
        if execute(command, &provider, &tx) {
            return Ok(());
        }
    }

    info!("Session started");

    loop {
        terminal.draw(|frame| ui::render(frame, &app))?;

        let event = tokio::select! {
            Some(event) = rx.recv() => event,
            maybe_event = terminal_events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
                Some(Ok(_)) => continue,
                Some(Err(err)) => return Err(err.into()),
                None => break,
            },
            _ = ticker.tick() => AppEvent::Tick,
        };

        if let Some(command) = app.handle_event(event) {
            if execute(command, &provider, &tx) {
                break;
            }
        }
    }

    info!("Session ended");
    Ok(())
}

/// Run a command. Returns `true` when the session should end.
fn execute(
    command: Command,
    provider: &Arc<dyn EmbeddingProvider>,
    tx: &mpsc::UnboundedSender<AppEvent>,
) -> bool {
    match command {
        Command::Quit => true,
        Command::EmbedQuery { text } => {
            spawn_query(Arc::clone(provider), text, tx.clone());
            false
        }
        Command::EmbedComparisons { texts } => {
            spawn_comparisons(Arc::clone(provider), texts, tx.clone());
            false
        }
    }
}

/// Embed one query on a background task.
pub fn spawn_query(
    provider: Arc<dyn EmbeddingProvider>,
    text: String,
    tx: mpsc::UnboundedSender<AppEvent>,
) {
    tokio::spawn(async move {
        debug!("Embedding query ({} chars)", text.len());
        let result = provider
            .embed(EmbeddingRequest::new(text.clone()))
            .await
            .map(|response| response.embedding);
        // The receiver only goes away when the session has ended.
        let _ = tx.send(AppEvent::QueryEmbedded { text, result });
    });
}

/// Embed comparison texts in order on a background task.
pub fn spawn_comparisons(
    provider: Arc<dyn EmbeddingProvider>,
    texts: Vec<String>,
    tx: mpsc::UnboundedSender<AppEvent>,
) {
    tokio::spawn(async move {
        debug!("Embedding {} comparison texts", texts.len());
        let requests = texts.iter().cloned().map(EmbeddingRequest::new).collect();
        let result = provider.embed_batch(requests).await.map(|responses| {
            responses
                .into_iter()
                .map(|response| response.embedding)
                .collect::<Vec<_>>()
        });
        let _ = tx.send(AppEvent::ComparisonsEmbedded { texts, result });
    });
}
