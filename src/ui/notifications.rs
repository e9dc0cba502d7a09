// ============================================================================
// Page : Notifications
// ============================================================================
// Dernières notifications envoyées (SMS, WhatsApp, email)
// ============================================================================

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
    Frame,
};

use crate::app::App;
use crate::format::format_relative_time_now;
use crate::lifecycle::LoadState;
use crate::models::{NotificationItem, NotificationStatus};
use crate::ui::widgets::{card, render_error, render_loading, render_placeholder};

pub const NO_NOTIFICATIONS: &str = "No notifications yet.";

pub fn render_notifications_page(frame: &mut Frame, app: &App, area: Rect) {
    match app.notifications.state() {
        LoadState::Loading => render_loading(
            frame,
            area,
            app.notifications.resource().loading_label(),
            app.tick_count,
        ),
        LoadState::Failed(message) => render_error(frame, area, message),
        LoadState::Success(items) => render_notifications(frame, items, app.selected_index, area),
    }
}

fn status_color(status: NotificationStatus) -> Color {
    match status {
        NotificationStatus::Queued => Color::Yellow,
        NotificationStatus::Sent => Color::Green,
        NotificationStatus::Failed => Color::Red,
    }
}

pub fn render_notifications(
    frame: &mut Frame,
    items: &[NotificationItem],
    selected: usize,
    area: Rect,
) {
    let title = "Notifications";

    if items.is_empty() {
        render_placeholder(frame, area, card(title), NO_NOTIFICATIONS);
        return;
    }

    let list_items: Vec<ListItem> = items
        .iter()
        .map(|item| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<9}", item.channel_label),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    format!("{:<8}", item.status_label),
                    Style::default().fg(status_color(item.status)),
                ),
                Span::raw(item.message.clone()),
                Span::styled(
                    format!("  {}", format_relative_time_now(&item.created_at)),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(list_items)
        .block(card(title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    state.select(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}
