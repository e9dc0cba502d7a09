// ============================================================================
// Chart - Courbe de performance du tableau de bord
// ============================================================================
// Total des paiements vérifiés par jour, en graphique ligne
//
// CONCEPTS RATATUI :
// 1. Chart widget : graphique ligne
// 2. Dataset : série de points (x, y)
// 3. Axis : bornes et labels
// ============================================================================

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    text::Span,
    widgets::{Axis, Chart, Dataset, GraphType},
    Frame,
};

use crate::format::format_number;
use crate::models::PerformancePoint;
use crate::ui::widgets::{card, render_placeholder};

/// Texte affiché quand la période ne contient aucun paiement vérifié
pub const NO_PERFORMANCE: &str = "No verified payments this week.";

/// Dessine la courbe de performance
pub fn render_performance_chart(frame: &mut Frame, points: &[PerformancePoint], area: Rect) {
    let title = "Performance";

    if points.is_empty() {
        render_placeholder(frame, area, card(title), NO_PERFORMANCE);
        return;
    }

    // Convertit les points en (x, y)
    // CONCEPT RUST : Iterator chaining
    let data: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .map(|(i, point)| (i as f64, point.value))
        .collect();

    let (y_min, y_max) = value_bounds(points);

    let datasets = vec![Dataset::default()
        .name("verified")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&data)];

    // Labels X : le premier, le milieu et le dernier jour
    let x_labels: Vec<Span> = match points.len() {
        1 => vec![Span::raw(points[0].label.clone())],
        n => vec![
            Span::raw(points[0].label.clone()),
            Span::raw(points[n / 2].label.clone()),
            Span::raw(points[n - 1].label.clone()),
        ],
    };

    let x_axis = Axis::default()
        .style(Style::default().fg(Color::Gray))
        .bounds([0.0, (points.len().max(2) - 1) as f64])
        .labels(x_labels);

    let y_axis = Axis::default()
        .style(Style::default().fg(Color::Gray))
        .bounds([y_min, y_max])
        .labels(vec![
            Span::raw(format_number(y_min.round())),
            Span::raw(format_number(((y_min + y_max) / 2.0).round())),
            Span::raw(format_number(y_max.round())),
        ]);

    let chart = Chart::new(datasets)
        .block(card(title))
        .x_axis(x_axis)
        .y_axis(y_axis);

    frame.render_widget(chart, area);
}

/// Bornes de l'axe Y avec 5% de marge
///
/// Une série positive ne descend pas sous zéro ; une série avec des valeurs
/// négatives garde sa marge en dessous du minimum.
///
/// Une série plate (tous les jours à 0, par exemple) reçoit une hauteur
/// arbitraire de 1 pour que la ligne reste visible.
fn value_bounds(points: &[PerformancePoint]) -> (f64, f64) {
    let (min, max) = points
        .iter()
        .fold((f64::MAX, f64::MIN), |(min, max), p| (min.min(p.value), max.max(p.value)));

    let margin = ((max - min) * 0.05).max(0.5);
    let lower = if min >= 0.0 {
        (min - margin).max(0.0)
    } else {
        min - margin
    };
    (lower, max + margin)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(label: &str, value: f64) -> PerformancePoint {
        PerformancePoint {
            label: label.to_string(),
            value,
        }
    }

    #[test]
    fn test_value_bounds_never_negative() {
        let (min, max) = value_bounds(&[point("Mon", 0.0), point("Tue", 100.0)]);
        assert_eq!(min, 0.0);
        assert!(max > 100.0);
    }

    #[test]
    fn test_value_bounds_keep_negative_values_visible() {
        let (min, max) = value_bounds(&[point("Mon", -20.0), point("Tue", 80.0)]);
        assert!(min < -20.0);
        assert!(max > 80.0);
    }

    #[test]
    fn test_value_bounds_flat_series() {
        let (min, max) = value_bounds(&[point("Mon", 0.0), point("Tue", 0.0)]);
        assert!(max > min);
    }
}
