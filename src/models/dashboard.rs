// ============================================================================
// Structure : DashboardSnapshot
// ============================================================================
// Snapshot renvoyé par GET /reports/dashboard : indicateurs, courbe de
// performance (paiements vérifiés par jour) et activité récente
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::format::{format_currency, format_number};

/// Un indicateur clé (ex: "Wallet Balance", 1500.0, Some("USD"))
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardMetric {
    pub label: String,
    pub value: f64,

    /// Code devise ; None pour un simple compteur
    #[serde(default)]
    pub unit: Option<String>,
}

impl DashboardMetric {
    /// Valeur formatée : montant si une devise est présente, nombre sinon
    pub fn display_value(&self) -> String {
        match self.unit.as_deref() {
            Some(currency) if !currency.is_empty() => format_currency(self.value, currency),
            _ => format_number(self.value),
        }
    }
}

/// Un point de la courbe de performance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformancePoint {
    pub label: String,
    pub value: f64,
}

/// Une entrée du fil d'activité
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityItem {
    pub id: String,
    pub message: String,
    pub category: String,
    pub timestamp: String,
}

/// Snapshot complet du tableau de bord
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub metrics: Vec<DashboardMetric>,
    pub performance: Vec<PerformancePoint>,
    pub recent_activity: Vec<ActivityItem>,
}

impl DashboardSnapshot {
    /// Indicateur principal : le premier de la liste
    pub fn primary_metric(&self) -> Option<&DashboardMetric> {
        self.metrics.first()
    }

    /// Indicateur secondaire : le deuxième, ou le premier s'il est seul
    pub fn supporting_metric(&self) -> Option<&DashboardMetric> {
        self.metrics.get(1).or_else(|| self.metrics.first())
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn metric(label: &str, value: f64, unit: Option<&str>) -> DashboardMetric {
        DashboardMetric {
            label: label.to_string(),
            value,
            unit: unit.map(str::to_string),
        }
    }

    fn snapshot(metrics: Vec<DashboardMetric>) -> DashboardSnapshot {
        DashboardSnapshot {
            metrics,
            performance: Vec::new(),
            recent_activity: Vec::new(),
        }
    }

    #[test]
    fn test_primary_and_supporting_metric() {
        let data = snapshot(vec![
            metric("Active Tickets", 3.0, None),
            metric("Wallet Balance", 1500.75, Some("USD")),
        ]);

        assert_eq!(data.primary_metric().unwrap().label, "Active Tickets");
        assert_eq!(data.supporting_metric().unwrap().label, "Wallet Balance");
    }

    #[test]
    fn test_supporting_metric_falls_back_to_primary() {
        let data = snapshot(vec![metric("Active Tickets", 3.0, None)]);
        assert_eq!(data.supporting_metric().unwrap().label, "Active Tickets");

        let empty = snapshot(Vec::new());
        assert!(empty.primary_metric().is_none());
        assert!(empty.supporting_metric().is_none());
    }

    #[test]
    fn test_metric_display_value() {
        assert_eq!(metric("Balance", 1500.75, Some("USD")).display_value(), "$1,501");
        assert_eq!(metric("Tickets", 1234.0, None).display_value(), "1,234");
    }

    #[test]
    fn test_deserialize_snapshot() {
        let json = r#"{
            "metrics": [{"label": "Active Tickets", "value": 2, "unit": null}],
            "performance": [{"label": "Mon", "value": 120.5}],
            "recentActivity": [{
                "id": "ticket-1",
                "message": "Ticket Camera marked active",
                "category": "ticket",
                "timestamp": "2024-05-01T10:00:00Z"
            }]
        }"#;

        let data: DashboardSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(data.metrics[0].unit, None);
        assert_eq!(data.recent_activity.len(), 1);
        assert_eq!(data.performance[0].value, 120.5);
    }
}
