// ============================================================================
// Page : Wallet
// ============================================================================
// Trois cartes (solde, réserve de règlement, versements à venir) puis le
// tableau des transactions.
//
// En cas d'échec, le message remplace toute la page : ni les cartes ni le
// tableau ne sont dessinés.
// ============================================================================

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Gauge, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::app::App;
use crate::format::{format_currency, format_number, format_relative_time_now};
use crate::lifecycle::LoadState;
use crate::models::{PaymentStatus, WalletOverview, WalletStatus, WalletSummary, WalletTransaction};
use crate::ui::widgets::{card, render_error, render_loading, render_placeholder};

/// Texte affiché quand aucune transaction n'existe
pub const NO_TRANSACTIONS: &str = "No transactions recorded yet.";

pub fn render_wallet_page(frame: &mut Frame, app: &App, area: Rect) {
    match app.wallet.state() {
        LoadState::Loading => {
            render_loading(frame, area, app.wallet.resource().loading_label(), app.tick_count)
        }
        LoadState::Failed(message) => render_error(frame, area, message),
        LoadState::Success(overview) => render_overview(frame, overview, app.selected_index, area),
    }
}

pub fn render_overview(frame: &mut Frame, overview: &WalletOverview, selected: usize, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(area);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[0]);

    let wallet = &overview.wallet;
    render_balance(frame, wallet, cards[0]);
    render_buffer_gauge(frame, wallet, cards[1]);
    render_amount_card(
        frame,
        "Upcoming payouts",
        &format_currency(wallet.upcoming_payouts, &wallet.currency),
        cards[2],
    );

    render_transactions(frame, &overview.transactions, &wallet.currency, selected, rows[1]);
}

fn render_balance(frame: &mut Frame, wallet: &WalletSummary, area: Rect) {
    let status_color = match wallet.status {
        WalletStatus::Active => Color::Green,
        WalletStatus::Frozen => Color::Red,
    };

    let text = vec![
        Line::from(Span::styled(
            format_currency(wallet.balance, &wallet.currency),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Wallet {}", wallet.status.label()),
            Style::default().fg(status_color),
        )),
    ];

    let paragraph = Paragraph::new(text).block(card("Balance")).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Jauge de la réserve : verte au-dessus du seuil, jaune sinon
fn render_buffer_gauge(frame: &mut Frame, wallet: &WalletSummary, area: Rect) {
    let color = if wallet.buffer_is_healthy() {
        Color::Green
    } else {
        Color::Yellow
    };

    let gauge = Gauge::default()
        .block(card("Settlement buffer"))
        .gauge_style(Style::default().fg(color))
        .ratio(wallet.buffer_ratio())
        .label(format!("{}% verified inflows", format_number(wallet.settlement_buffer)));

    frame.render_widget(gauge, area);
}

fn render_amount_card(frame: &mut Frame, title: &str, amount: &str, area: Rect) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        amount.to_string(),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )))
    .block(card(title))
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn payment_color(status: PaymentStatus) -> Color {
    match status {
        PaymentStatus::Initiated => Color::Yellow,
        PaymentStatus::Verified => Color::Green,
        PaymentStatus::Failed => Color::Red,
    }
}

fn render_transactions(
    frame: &mut Frame,
    transactions: &[WalletTransaction],
    currency: &str,
    selected: usize,
    area: Rect,
) {
    let title = "Transactions";

    if transactions.is_empty() {
        render_placeholder(frame, area, card(title), NO_TRANSACTIONS);
        return;
    }

    let header = Row::new(vec!["Reference", "Ticket", "Type", "Amount", "Status", "Created"])
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = transactions
        .iter()
        .map(|tx| {
            Row::new(vec![
                Cell::from(tx.reference.clone()),
                Cell::from(format!("#{} {}", tx.ticket_id, tx.ticket_asset)),
                Cell::from(tx.kind.clone()),
                Cell::from(format_currency(tx.amount, currency)),
                Cell::from(Span::styled(
                    tx.status_label.clone(),
                    Style::default().fg(payment_color(tx.status)),
                )),
                Cell::from(format_relative_time_now(&tx.created_at)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(14),
        Constraint::Percentage(25),
        Constraint::Length(11),
        Constraint::Length(12),
        Constraint::Length(10),
        Constraint::Length(10),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(card(title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = TableState::default();
    state.select(Some(selected));
    frame.render_stateful_widget(table, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Screen;
    use crate::ui::test_support::render_to_string;

    fn overview(transactions: Vec<WalletTransaction>) -> WalletOverview {
        WalletOverview {
            wallet: WalletSummary {
                balance: 1500.75,
                currency: "USD".to_string(),
                status: WalletStatus::Active,
                settlement_buffer: 75.0,
                upcoming_payouts: 250.0,
            },
            transactions,
        }
    }

    #[test]
    fn test_cards_and_transactions_render() {
        let data = overview(vec![WalletTransaction {
            id: 4,
            reference: "A0000000042".to_string(),
            ticket_id: 9,
            ticket_asset: "Drill".to_string(),
            kind: "Settlement".to_string(),
            amount: 80.0,
            status: PaymentStatus::Verified,
            status_label: "Verified".to_string(),
            created_at: "2024-05-01T10:00:00Z".to_string(),
        }]);

        let screen = render_to_string(120, 20, |frame| {
            render_overview(frame, &data, 0, frame.size());
        });

        assert!(screen.contains("$1,501"));
        assert!(screen.contains("$250"));
        assert!(screen.contains("75% verified inflows"));
        assert!(screen.contains("A0000000042"));
        assert!(screen.contains("$80"));
    }

    #[test]
    fn test_fractional_buffer_label() {
        let mut data = overview(Vec::new());
        data.wallet.settlement_buffer = 66.7;

        let screen = render_to_string(120, 20, |frame| {
            render_overview(frame, &data, 0, frame.size());
        });

        assert!(screen.contains("66.7% verified inflows"));
    }

    #[test]
    fn test_empty_transactions_placeholder() {
        let data = overview(Vec::new());
        let screen = render_to_string(120, 20, |frame| {
            render_overview(frame, &data, 0, frame.size());
        });
        assert!(screen.contains(NO_TRANSACTIONS));
    }

    #[test]
    fn test_failure_replaces_whole_page() {
        let mut app = App::new();
        let request = app.open(Screen::Wallet);
        app.wallet.commit::<&str>(&request.token, Err("502"));

        let screen = render_to_string(120, 20, |frame| {
            render_wallet_page(frame, &app, frame.size());
        });

        assert!(screen.contains("Unable to load wallet data"));
        assert!(!screen.contains("Balance"));
        assert!(!screen.contains("Transactions"));
    }
}
