//! Pure rendering: map App state to ratatui widget trees.
//!
//! Widget-building functions are pure (state in, widgets out); the only
//! effect is Frame::render_widget() which writes to the terminal buffer.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::report::format_money;
use crate::session::BillSession;

use super::state::{App, Focus};
use super::theme;

/// Width of the slider track in cells.
const SLIDER_WIDTH: usize = 40;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the form to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Length(4), // total per person
        Constraint::Length(3), // bill input
        Constraint::Min(0),    // detail
        Constraint::Length(1), // help
    ])
    .split(area);

    frame.render_widget(render_title(), chunks[0]);
    render_total(&app.session, frame, chunks[1]);
    render_bill(&app.session, app.focus, frame, chunks[2]);
    if app.session.detail_visible() {
        render_detail(&app.session, app.focus, frame, chunks[3]);
    }
    frame.render_widget(render_help(app.focus, app.session.detail_visible()), chunks[4]);
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

fn render_title() -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled("tip-split", theme::STYLE_TITLE)))
}

/// Help line showing the keys that matter for the focused field.
fn render_help(focus: Focus, detail_visible: bool) -> Paragraph<'static> {
    let help_text = match (focus, detail_visible) {
        (Focus::Bill, false) => "type a bill  [Esc] quit",
        (Focus::Bill, true) => "[Enter] done  [Tab] next  [^U] clear  [Esc] quit",
        (Focus::Split, _) => "[←/-] fewer  [→/+] more  [Tab] next  [q] quit",
        (Focus::Tip, _) => "[←/-] less tip  [→/+] more tip  [Tab] next  [q] quit",
    };

    Paragraph::new(Span::styled(help_text, theme::STYLE_HELP))
}

fn field_block(title: &str, focused: bool) -> Block<'_> {
    let style = if focused {
        theme::STYLE_FOCUSED
    } else {
        theme::STYLE_UNFOCUSED
    };
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(style)
        .title(Span::styled(title, style))
}

// ============================================================================
// HEADER: TOTAL PER PERSON
// ============================================================================

fn render_total(session: &BillSession, frame: &mut Frame, area: Rect) {
    let symbol = &session.config().currency_symbol;
    let lines = vec![Line::from(Span::styled(
        format!("  {}", format_money(session.total_per_person(), symbol)),
        theme::STYLE_TOTAL,
    ))];

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(theme::STYLE_TOTAL)
        .title(Span::styled("Total Per Person", theme::STYLE_TOTAL));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

// ============================================================================
// BILL INPUT
// ============================================================================

fn render_bill(session: &BillSession, focus: Focus, frame: &mut Frame, area: Rect) {
    let focused = focus == Focus::Bill;
    let mut spans = vec![
        Span::raw(" "),
        Span::styled(session.bill_text().to_string(), theme::STYLE_IMPORTANT),
    ];
    if focused {
        spans.push(Span::styled("▏", theme::STYLE_INTERACTIVE));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(field_block("Enter bill", focused));
    frame.render_widget(paragraph, area);
}

// ============================================================================
// DETAIL: SPLIT, TIP, SLIDER
// ============================================================================

fn render_detail(session: &BillSession, focus: Focus, frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // split
        Constraint::Length(1), // tip amount
        Constraint::Length(4), // slider
        Constraint::Min(0),
    ])
    .split(area);

    let symbol = &session.config().currency_symbol;

    // Split stepper
    let split_focused = focus == Focus::Split;
    let button = focus_style(split_focused);
    let split_line = Line::from(vec![
        Span::raw(" "),
        Span::styled("[-]", button),
        Span::styled(format!("  {}  ", session.split().get()), theme::STYLE_IMPORTANT),
        Span::styled("[+]", button),
    ]);
    frame.render_widget(
        Paragraph::new(split_line).block(field_block("Split", split_focused)),
        chunks[0],
    );

    // Tip amount
    let tip_line = Line::from(vec![
        Span::styled("  Tip  ", theme::STYLE_DIM),
        Span::styled(
            format_money(session.tip_amount(), symbol),
            theme::STYLE_IMPORTANT,
        ),
    ]);
    frame.render_widget(Paragraph::new(tip_line), chunks[1]);

    // Slider
    let tip_focused = focus == Focus::Tip;
    let percent = session.tip_percentage().get();
    let slider_lines = vec![
        Line::from(vec![
            Span::raw(" "),
            Span::styled(slider_bar(session.slider(), SLIDER_WIDTH), theme::STYLE_SLIDER),
            Span::styled(format!(" {}%", percent), theme::STYLE_IMPORTANT),
        ]),
        Line::from(vec![
            Span::raw(" "),
            Span::styled(
                tick_ruler(session.config().slider_steps, SLIDER_WIDTH),
                theme::STYLE_DIM,
            ),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(slider_lines).block(field_block("Tip %", tip_focused)),
        chunks[2],
    );
}

fn focus_style(focused: bool) -> Style {
    if focused {
        theme::STYLE_INTERACTIVE
    } else {
        theme::STYLE_DIM
    }
}

/// Text slider track: filled up to `position` (0.0..=1.0) of `width` cells.
fn slider_bar(position: f64, width: usize) -> String {
    let filled = ((position.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Tick marks for the slider stops, ends included. `steps` counts the
/// stops between the two ends. More stops than cells saturate the ruler.
fn tick_ruler(steps: u32, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let mut cells = vec![' '; width];
    let intervals = (steps as usize)
        .saturating_add(1)
        .min(width.saturating_sub(1).max(1));
    for i in 0..=intervals {
        let idx = (i * (width - 1)) / intervals;
        cells[idx] = '╵';
    }
    cells.into_iter().collect()
}

// ============================================================================
// TESTS
// ============================================================================
