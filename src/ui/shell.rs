// ============================================================================
// Cadre de l'application
// ============================================================================
// Disposition :
//
//   ┌ lendboard ────────────────────────────────────────────────┐
//   │ 1 Dashboard │ 2 Tickets │ 3 Wallet │ 4 Notifications       │  header
//   └───────────────────────────────────────────────────────────┘
//   ... page courante ...                                           body
//   ┌───────────────────────────────────────────────────────────┐
//   │ ⠋ Tab/←→ pages  1-4 jump  ↑↓ select  r reload  q quit      │  footer
//   └───────────────────────────────────────────────────────────┘
// ============================================================================

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::app::{App, Screen};
use crate::ui::widgets::spinner_frame;
use crate::ui::{dashboard, notifications, tickets, wallet};

/// Fonction principale de rendu
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(frame.size());

    render_header(frame, app, chunks[0]);

    match app.current_screen {
        Screen::Dashboard => dashboard::render_dashboard_page(frame, app, chunks[1]),
        Screen::Tickets => tickets::render_tickets_page(frame, app, chunks[1]),
        Screen::Wallet => wallet::render_wallet_page(frame, app, chunks[1]),
        Screen::Notifications => notifications::render_notifications_page(frame, app, chunks[1]),
    }

    render_footer(frame, app, chunks[2]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Screen::ALL
        .iter()
        .enumerate()
        .map(|(i, screen)| Line::from(format!("{} {}", i + 1, screen.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" lendboard "),
        )
        .select(app.current_screen.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    frame.render_widget(tabs, area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();

    if app.is_loading() {
        spans.push(Span::styled(
            format!("{} ", spinner_frame(app.tick_count)),
            Style::default().fg(Color::Cyan),
        ));
    }

    let shortcuts = [
        ("Tab/←→", "pages"),
        ("1-4", "jump"),
        ("↑↓", "select"),
        ("r", "reload"),
        ("q", "quit"),
    ];
    for (key, action) in shortcuts {
        spans.push(Span::styled(key, Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(format!(" {}  ", action)));
    }

    let footer = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(footer, area);
}
