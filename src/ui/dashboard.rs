// ============================================================================
// Page : Dashboard
// ============================================================================
// Disposition :
//
//   ┌ Primary ─────────┐┌ Supporting ──────┐┌ Metrics ─────────┐
//   └──────────────────┘└──────────────────┘└──────────────────┘
//   ┌ Performance ───────────────────────┐┌ Latest activity ──┐
//   │                                    ││                   │
//   └────────────────────────────────────┘└───────────────────┘
// ============================================================================

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::App;
use crate::format::format_relative_time_now;
use crate::lifecycle::LoadState;
use crate::models::{ActivityItem, DashboardMetric, DashboardSnapshot};
use crate::ui::chart::render_performance_chart;
use crate::ui::widgets::{card, render_error, render_loading, render_placeholder, NO_DATA};

/// Texte affiché quand le fil d'activité est vide
pub const NO_ACTIVITY: &str = "No activity recorded yet.";

/// Dessine la page Dashboard selon son état de chargement
pub fn render_dashboard_page(frame: &mut Frame, app: &App, area: Rect) {
    match app.dashboard.state() {
        LoadState::Loading => {
            render_loading(frame, area, app.dashboard.resource().loading_label(), app.tick_count)
        }
        LoadState::Failed(message) => render_error(frame, area, message),
        LoadState::Success(snapshot) => render_snapshot(frame, snapshot, app.selected_index, area),
    }
}

/// Dessine un snapshot chargé
pub fn render_snapshot(frame: &mut Frame, snapshot: &DashboardSnapshot, selected: usize, area: Rect) {
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

    render_metric_card(frame, "Primary", snapshot.primary_metric(), cards[0]);
    render_metric_card(frame, "Supporting", snapshot.supporting_metric(), cards[1]);
    render_metric_list(frame, &snapshot.metrics, cards[2]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(rows[1]);

    render_performance_chart(frame, &snapshot.performance, body[0]);
    render_activity(frame, &snapshot.recent_activity, selected, body[1]);
}

/// Carte d'un indicateur (ou "No data")
fn render_metric_card(frame: &mut Frame, title: &str, metric: Option<&DashboardMetric>, area: Rect) {
    let Some(metric) = metric else {
        render_placeholder(frame, area, card(title), NO_DATA);
        return;
    };

    let text = vec![
        Line::from(Span::styled(metric.label.clone(), Style::default().fg(Color::Gray))),
        Line::from(Span::styled(
            metric.display_value(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
    ];

    let paragraph = Paragraph::new(text).block(card(title)).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Tous les indicateurs, un par ligne
fn render_metric_list(frame: &mut Frame, metrics: &[DashboardMetric], area: Rect) {
    if metrics.is_empty() {
        render_placeholder(frame, area, card("Metrics"), NO_DATA);
        return;
    }

    let lines: Vec<Line> = metrics
        .iter()
        .map(|metric| {
            Line::from(vec![
                Span::styled(format!("{}: ", metric.label), Style::default().fg(Color::Gray)),
                Span::raw(metric.display_value()),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(card("Metrics")), area);
}

/// Fil d'activité récente
fn render_activity(frame: &mut Frame, activity: &[ActivityItem], selected: usize, area: Rect) {
    let title = "Latest activity";

    if activity.is_empty() {
        render_placeholder(frame, area, card(title), NO_ACTIVITY);
        return;
    }

    let items: Vec<ListItem> = activity
        .iter()
        .map(|item| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        format!("[{}] ", item.category),
                        Style::default().fg(category_color(&item.category)),
                    ),
                    Span::raw(item.message.clone()),
                ]),
                Line::from(Span::styled(
                    format!("  {}", format_relative_time_now(&item.timestamp)),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(card(title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    // ListState fait défiler la liste jusqu'à la ligne sélectionnée
    let mut state = ListState::default();
    state.select(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn category_color(category: &str) -> Color {
    match category {
        "ticket" => Color::Cyan,
        "payment" => Color::Green,
        "notification" => Color::Magenta,
        _ => Color::Blue,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PerformancePoint;
    use crate::ui::chart::NO_PERFORMANCE;
    use crate::ui::test_support::render_to_string;

    fn snapshot(metrics: Vec<DashboardMetric>, activity: Vec<ActivityItem>) -> DashboardSnapshot {
        DashboardSnapshot {
            metrics,
            performance: vec![
                PerformancePoint { label: "Mon".to_string(), value: 10.0 },
                PerformancePoint { label: "Tue".to_string(), value: 30.0 },
            ],
            recent_activity: activity,
        }
    }

    #[test]
    fn test_empty_activity_renders_placeholder() {
        let data = snapshot(Vec::new(), Vec::new());
        let screen = render_to_string(120, 30, |frame| {
            render_snapshot(frame, &data, 0, frame.size());
        });

        assert!(screen.contains(NO_ACTIVITY));
        assert!(screen.contains(NO_DATA));
    }

    #[test]
    fn test_metrics_and_activity_render() {
        let data = snapshot(
            vec![DashboardMetric {
                label: "Wallet Balance".to_string(),
                value: 1500.75,
                unit: Some("USD".to_string()),
            }],
            vec![ActivityItem {
                id: "ticket-1".to_string(),
                message: "Ticket Tent marked active".to_string(),
                category: "ticket".to_string(),
                timestamp: "2024-05-01T10:00:00Z".to_string(),
            }],
        );

        let screen = render_to_string(120, 30, |frame| {
            render_snapshot(frame, &data, 0, frame.size());
        });

        assert!(screen.contains("$1,501"));
        assert!(screen.contains("Ticket Tent marked active"));
        assert!(!screen.contains(NO_ACTIVITY));
    }

    #[test]
    fn test_selected_activity_scrolls_into_view() {
        let activity: Vec<ActivityItem> = (0..10)
            .map(|i| ActivityItem {
                id: format!("payment-{}", i),
                message: format!("Activity item {:02}", i),
                category: "payment".to_string(),
                timestamp: "2024-05-01T10:00:00Z".to_string(),
            })
            .collect();
        let data = snapshot(Vec::new(), activity);

        let screen = render_to_string(120, 16, |frame| {
            render_snapshot(frame, &data, 9, frame.size());
        });

        assert!(screen.contains("Activity item 09"));
        assert!(!screen.contains("Activity item 00"));
    }

    #[test]
    fn test_empty_performance_renders_placeholder() {
        let mut data = snapshot(Vec::new(), Vec::new());
        data.performance.clear();

        let screen = render_to_string(120, 30, |frame| {
            render_snapshot(frame, &data, 0, frame.size());
        });

        assert!(screen.contains(NO_PERFORMANCE));
    }

    #[test]
    fn test_failed_page_shows_only_message() {
        let mut app = App::new();
        let request = app.open(crate::app::Screen::Dashboard);
        app.dashboard.commit::<&str>(&request.token, Err("timeout"));

        let screen = render_to_string(100, 20, |frame| {
            render_dashboard_page(frame, &app, frame.size());
        });

        assert!(screen.contains("Unable to load dashboard data"));
        assert!(!screen.contains("timeout"));
    }
}
