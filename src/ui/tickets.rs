// ============================================================================
// Page : Tickets
// ============================================================================
// Totaux par statut + tableau des tickets, du plus récent au plus ancien
//
// Le tri et les totaux sont recalculés à chaque rendu depuis le snapshot :
// rien de dérivé n'est stocké dans l'état.
// ============================================================================

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::app::App;
use crate::format::format_relative_time_now;
use crate::lifecycle::LoadState;
use crate::models::{sort_by_recency, StatusTotals, Ticket, TicketStatus};
use crate::ui::widgets::{card, render_error, render_loading, render_placeholder};

/// Texte affiché quand l'utilisateur n'a aucun ticket
pub const NO_TICKETS: &str = "No tickets available yet.";

/// Couleur associée à chaque statut
pub fn status_color(status: TicketStatus) -> Color {
    match status {
        TicketStatus::Pending => Color::Yellow,
        TicketStatus::Accepted => Color::Blue,
        TicketStatus::Active | TicketStatus::Completed => Color::Green,
        TicketStatus::Cancelled => Color::Red,
    }
}

pub fn render_tickets_page(frame: &mut Frame, app: &App, area: Rect) {
    match app.tickets.state() {
        LoadState::Loading => {
            render_loading(frame, area, app.tickets.resource().loading_label(), app.tick_count)
        }
        LoadState::Failed(message) => render_error(frame, area, message),
        LoadState::Success(tickets) => render_tickets(frame, tickets, app.selected_index, area),
    }
}

/// Dessine les totaux et le tableau
pub fn render_tickets(frame: &mut Frame, tickets: &[Ticket], selected: usize, area: Rect) {
    if tickets.is_empty() {
        render_placeholder(frame, area, card("Tickets"), NO_TICKETS);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_status_totals(frame, &StatusTotals::from_tickets(tickets), chunks[0]);
    render_ticket_table(frame, &sort_by_recency(tickets), selected, chunks[1]);
}

/// Une ligne : "Pending 2  Accepted 0  Active 1 ..." (zéros inclus)
fn render_status_totals(frame: &mut Frame, totals: &StatusTotals, area: Rect) {
    let mut spans = Vec::new();
    for (status, count) in totals.iter_all() {
        spans.push(Span::styled(
            format!("{} ", status.label()),
            Style::default().fg(status_color(status)),
        ));
        spans.push(Span::styled(
            format!("{}   ", count),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    }

    let title = format!("Status ({} total)", totals.total());
    frame.render_widget(Paragraph::new(Line::from(spans)).block(card(&title)), area);
}

fn render_ticket_table(frame: &mut Frame, tickets: &[Ticket], selected: usize, area: Rect) {
    let header = Row::new(vec!["ID", "Asset", "Status", "Borrower", "Lender", "Updated"])
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = tickets
        .iter()
        .map(|ticket| {
            Row::new(vec![
                Cell::from(ticket.display_id()),
                Cell::from(ticket.asset_name.clone()),
                Cell::from(Span::styled(
                    ticket.status_label.clone(),
                    Style::default().fg(status_color(ticket.status)),
                )),
                Cell::from(ticket.borrower.clone()),
                Cell::from(ticket.lender.clone()),
                Cell::from(format_relative_time_now(&ticket.updated_at)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(8),
        Constraint::Percentage(25),
        Constraint::Length(11),
        Constraint::Percentage(20),
        Constraint::Percentage(20),
        Constraint::Length(10),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(card("Tickets"))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = TableState::default();
    state.select(Some(selected));
    frame.render_stateful_widget(table, area, &mut state);
}
