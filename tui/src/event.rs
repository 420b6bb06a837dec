//! Events fed into the session and commands it hands back.

use crossterm::event::KeyEvent;
use ember_embeddings::{Embedding, EmbeddingError};

/// Everything the session reacts to, in arrival order.
#[derive(Debug)]
pub enum AppEvent {
    /// A key press from the terminal.
    Key(KeyEvent),

    /// Spinner animation tick.
    Tick,

    /// A single query embedding finished.
    QueryEmbedded {
        text: String,
        result: Result<Embedding, EmbeddingError>,
    },

    /// A batch of comparison embeddings finished.
    ComparisonsEmbedded {
        texts: Vec<String>,
        result: Result<Vec<Embedding>, EmbeddingError>,
    },
}

/// Work the session asks the runtime to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Embed one query text. Answered by [`AppEvent::QueryEmbedded`].
    EmbedQuery { text: String },

    /// Embed comparison texts in order. Answered by
    /// [`AppEvent::ComparisonsEmbedded`].
    EmbedComparisons { texts: Vec<String> },

    /// Leave the program.
    Quit,
}
