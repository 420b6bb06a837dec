//! Screen rendering.

use ember_embeddings::{MAX_COMPARISONS, SimilarityResult, best_match};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Gauge, Paragraph, Wrap};

use crate::app::{
    App, ConfigureScreen, InputScreen, LoadingScreen, ResultsScreen, Screen, SessionContext,
};
use crate::text_buffer::TextBuffer;

const ACCENT: Color = Color::Rgb(0x95, 0x67, 0xE3);
const HIGHLIGHT: Color = Color::Rgb(0xC9, 0x67, 0xE3);
const MUTED: Color = Color::Rgb(0x66, 0x66, 0x66);
const DANGER: Color = Color::Rgb(0xFF, 0x6B, 0x6B);

/// Text lines a configuration field grows to before it scrolls.
const FIELD_MAX_LINES: usize = 4;

/// Draw the active screen.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    match app.screen() {
        Screen::Input(input) => render_input(frame, area, input, app.context()),
        Screen::Results(results) => render_results(frame, area, results),
        Screen::Configure(configure) => render_configure(frame, area, configure, app.context()),
        Screen::Loading(loading) => render_loading(frame, area, loading),
        Screen::QuitConfirm(_) => render_quit_confirm(frame, area),
    }
}

fn header<'a>(lines: Vec<Line<'a>>) -> Paragraph<'a> {
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::new().fg(ACCENT)),
        )
}

fn title(text: &str) -> Line<'_> {
    Line::from(text).style(Style::new().fg(ACCENT).add_modifier(Modifier::BOLD))
}

fn hint(text: &str) -> Paragraph<'_> {
    Paragraph::new(Line::from(text).style(Style::new().fg(MUTED).add_modifier(Modifier::ITALIC)))
}

fn status_line(context: &SessionContext) -> Line<'_> {
    match &context.last_error {
        Some(err) => Line::from(format!("Error: {err}")).style(Style::new().fg(DANGER)),
        None => Line::from(format!(
            "Comparing against {} texts using {}",
            context.comparisons.len(),
            context.model
        ))
        .style(Style::new().fg(MUTED)),
    }
}

fn editor_text(buffer: &TextBuffer) -> Text<'_> {
    if buffer.text().is_empty() {
        Text::from(Span::styled(buffer.placeholder(), Style::new().fg(MUTED)))
    } else {
        Text::from(buffer.text())
    }
}

/// Visible text lines for a configuration field.
fn field_lines(buffer: &TextBuffer) -> usize {
    buffer.text().split('\n').count().clamp(1, FIELD_MAX_LINES)
}

/// Rows to scroll so the last line of a tall field stays in view.
fn field_scroll(buffer: &TextBuffer) -> u16 {
    let hidden = buffer.text().split('\n').count().saturating_sub(FIELD_MAX_LINES);
    u16::try_from(hidden).unwrap_or(u16::MAX)
}

fn render_input(frame: &mut Frame, area: Rect, input: &InputScreen, context: &SessionContext) {
    let [top, label, editor, status, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(2),
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(header(vec![title("EMBER")]), top);
    frame.render_widget(Paragraph::new(title("Enter your text below:")), label);
    frame.render_widget(
        Paragraph::new(editor_text(&input.editor))
            .wrap(Wrap { trim: false })
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::new().fg(HIGHLIGHT)),
            ),
        editor,
    );
    frame.render_widget(Paragraph::new(status_line(context)), status);
    frame.render_widget(
        hint("Alt+Enter to compare • Tab to configure comparisons • Esc to quit"),
        footer,
    );
}

/// Gauge ratio for a score; negative scores show as an empty bar.
fn gauge_ratio(score: f64) -> f64 {
    if score.is_finite() {
        score.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

fn render_results(frame: &mut Frame, area: Rect, screen: &ResultsScreen) {
    let [top, query, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(header(vec![title("COMPARISON RESULTS")]), top);
    frame.render_widget(
        Paragraph::new(vec![
            Line::from("Similarity results for:"),
            Line::from(screen.query.as_str()).style(Style::new().fg(HIGHLIGHT).bold()),
        ])
        .wrap(Wrap { trim: true }),
        query,
    );

    let best = best_match(&screen.results);
    let rows = Layout::vertical(
        screen
            .results
            .iter()
            .map(|field| Constraint::Length(field_lines(field) as u16 + 2))
            .chain(std::iter::once(Constraint::Min(0))),
    )
    .split(body);

    // Results stay in comparison-set order; the best one is only highlighted.
    for (result, row) in screen.results.iter().zip(rows.iter()) {
        let is_best = best.is_some_and(|b| std::ptr::eq(b, result));
        render_result_row(frame, *row, result, is_best);
    }

    frame.render_widget(
        hint("Press Enter to return to input screen, Esc to quit."),
        footer,
    );
}

fn render_result_row(frame: &mut Frame, area: Rect, result: &SimilarityResult, is_best: bool) {
    let [label, score, bar] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let label_style = if is_best {
        Style::new().fg(HIGHLIGHT).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::new().fg(ACCENT).add_modifier(Modifier::BOLD)
    };
    frame.render_widget(
        Paragraph::new(Line::from(result.label.as_str()).style(label_style)),
        label,
    );
    frame.render_widget(
        Paragraph::new(format!("Similarity: {:.3}", result.score)),
        score,
    );
    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::new().fg(HIGHLIGHT).bg(Color::Black))
            .ratio(gauge_ratio(result.score))
            .label(""),
        bar,
    );
}

fn render_configure(
    frame: &mut Frame,
    area: Rect,
    screen: &ConfigureScreen,
    context: &SessionContext,
) {
    let [top, body, status, footer] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        header(vec![
            title("CONFIGURE COMPARISONS"),
            Line::from(format!(
                "Define your comparison texts ({}/{MAX_COMPARISONS})",
                screen.fields.len()
            )),
        ]),
        top,
    );

    let rows = Layout::vertical(
        screen
            .fields
            .iter()
            .map(|_| Constraint::Length(3))
            .chain(std::iter::once(Constraint::Min(0))),
    )
    .split(body);

    for (i, (field, row)) in screen.fields.iter().zip(rows.iter()).enumerate() {
        let border = if i == screen.focused { HIGHLIGHT } else { MUTED };
        frame.render_widget(
            Paragraph::new(editor_text(field))
                .wrap(Wrap { trim: false })
                .scroll((field_scroll(field), 0))
                .block(
                    Block::bordered()
                        .border_type(BorderType::Rounded)
                        .border_style(Style::new().fg(border))
                        .title(
                            Line::from(format!("Comparison text {}", i + 1))
                                .style(Style::new().fg(ACCENT)),
                        ),
                ),
            *row,
        );
    }

    frame.render_widget(Paragraph::new(status_line(context)), status);
    frame.render_widget(
        hint("Tab to switch • Ctrl+N to add • Ctrl+X to remove • Alt+Enter to generate • Esc to return"),
        footer,
    );
}

fn render_loading(frame: &mut Frame, area: Rect, screen: &LoadingScreen) {
    let [top, _, message, _] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(6),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    frame.render_widget(
        header(vec![title("PROCESSING"), Line::from("Generating embeddings...")]),
        top,
    );
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(screen.spinner(), Style::new().fg(HIGHLIGHT)),
            Span::raw(" "),
            Span::raw(screen.message.as_str()),
        ]))
        .alignment(Alignment::Center),
        message,
    );
}

fn render_quit_confirm(frame: &mut Frame, area: Rect) {
    let [top, _, warning, _, instructions, _] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(6),
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    frame.render_widget(
        header(vec![
            Line::from("WARNING").style(Style::new().fg(DANGER).bold()),
            Line::from("Are you sure you want to quit?"),
        ]),
        top,
    );
    frame.render_widget(
        Paragraph::new(Line::from("You may lose any unsaved text input!").style(Style::new().fg(DANGER).bold()))
            .alignment(Alignment::Center),
        warning,
    );
    frame.render_widget(
        Paragraph::new(title("Press Y to quit • Press N to cancel • Press Esc to cancel"))
            .alignment(Alignment::Center),
        instructions,
    );
}
