// ============================================================================
// Structure : Ticket
// ============================================================================
// Un ticket de prêt d'actif, liant un emprunteur et un prêteur
//
// Vues dérivées (calculées à chaque rendu, jamais stockées) :
// - tri par date de mise à jour décroissante (tri stable)
// - total des tickets par statut
// ============================================================================

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::format::parse_timestamp;

/// Statut d'un ticket (énumération fermée côté serveur)
///
/// CONCEPT RUST : serde rename_all
/// - "pending" (JSON) <-> TicketStatus::Pending (Rust)
/// - Une valeur inconnue fait échouer la désérialisation (payload invalide)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    Pending,
    Accepted,
    Active,
    Completed,
    Cancelled,
}

impl TicketStatus {
    /// Tous les statuts, dans l'ordre du cycle de vie
    pub const ALL: [TicketStatus; 5] = [
        TicketStatus::Pending,
        TicketStatus::Accepted,
        TicketStatus::Active,
        TicketStatus::Completed,
        TicketStatus::Cancelled,
    ];

    /// Libellé court, utilisé quand le serveur n'en fournit pas
    pub fn label(&self) -> &'static str {
        match self {
            TicketStatus::Pending => "Pending",
            TicketStatus::Accepted => "Accepted",
            TicketStatus::Active => "Active",
            TicketStatus::Completed => "Completed",
            TicketStatus::Cancelled => "Cancelled",
        }
    }
}

/// Ticket tel que renvoyé par GET /tickets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: u64,
    pub asset_name: String,
    pub status: TicketStatus,
    pub status_label: String,
    pub borrower: String,
    pub lender: String,

    /// Horodatage ISO-8601, parsé uniquement à la demande
    pub updated_at: String,
}

impl Ticket {
    /// Identifiant affiché : "TK-007"
    pub fn display_id(&self) -> String {
        format!("TK-{:03}", self.id)
    }

    /// Date de mise à jour parsée (None si le serveur envoie un format invalide)
    pub fn updated_at_parsed(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.updated_at)
    }
}

// ============================================================================
// Tri par récence
// ============================================================================

/// Trie les tickets du plus récent au plus ancien
///
/// CONCEPT RUST : sort_by est stable
/// - Deux tickets avec le même updated_at gardent leur ordre d'origine
/// - Les horodatages illisibles passent après tous les autres
///
/// La source n'est pas modifiée : on renvoie une nouvelle liste.
pub fn sort_by_recency(tickets: &[Ticket]) -> Vec<Ticket> {
    // Parse une seule fois par ticket plutôt qu'à chaque comparaison
    let mut keyed: Vec<(Option<DateTime<Utc>>, &Ticket)> = tickets
        .iter()
        .map(|ticket| (ticket.updated_at_parsed(), ticket))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    keyed.into_iter().map(|(_, ticket)| ticket.clone()).collect()
}

// ============================================================================
// Agrégation par statut
// ============================================================================

/// Nombre de tickets par statut
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusTotals {
    counts: BTreeMap<TicketStatus, usize>,
}

impl StatusTotals {
    /// Compte les tickets de chaque statut
    pub fn from_tickets(tickets: &[Ticket]) -> Self {
        let mut counts = BTreeMap::new();
        for ticket in tickets {
            *counts.entry(ticket.status).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Nombre de tickets pour un statut (0 s'il n'apparaît pas)
    pub fn count(&self, status: TicketStatus) -> usize {
        self.counts.get(&status).copied().unwrap_or(0)
    }

    /// Total tous statuts confondus
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Tous les statuts avec leur compte, y compris ceux à zéro
    pub fn iter_all(&self) -> impl Iterator<Item = (TicketStatus, usize)> + '_ {
        TicketStatus::ALL
            .iter()
            .map(move |status| (*status, self.count(*status)))
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(id: u64, status: TicketStatus, updated_at: &str) -> Ticket {
        Ticket {
            id,
            asset_name: format!("Asset {}", id),
            status,
            status_label: status.label().to_string(),
            borrower: "borrower@example.com".to_string(),
            lender: "lender@example.com".to_string(),
            updated_at: updated_at.to_string(),
        }
    }

    #[test]
    fn test_sort_by_recency_descending() {
        // Maintenant = 10:00 ; T-3 = il y a 3h, T-1 = il y a 1h, T-2 = il y a 2h
        let tickets = vec![
            ticket(1, TicketStatus::Pending, "2024-05-01T07:00:00Z"),
            ticket(2, TicketStatus::Pending, "2024-05-01T09:00:00Z"),
            ticket(3, TicketStatus::Pending, "2024-05-01T08:00:00Z"),
        ];

        let sorted = sort_by_recency(&tickets);
        let ids: Vec<u64> = sorted.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_by_recency_is_stable() {
        let tickets = vec![
            ticket(1, TicketStatus::Active, "2024-05-01T10:00:00Z"),
            ticket(2, TicketStatus::Active, "2024-05-02T10:00:00Z"),
            ticket(3, TicketStatus::Active, "2024-05-01T10:00:00Z"),
            ticket(4, TicketStatus::Active, "2024-05-01T10:00:00+00:00"),
        ];

        let sorted = sort_by_recency(&tickets);
        let ids: Vec<u64> = sorted.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 1, 3, 4]);
    }

    #[test]
    fn test_sort_by_recency_unparseable_last() {
        let tickets = vec![
            ticket(1, TicketStatus::Active, "not a date"),
            ticket(2, TicketStatus::Active, "2024-05-01T10:00:00Z"),
        ];

        let sorted = sort_by_recency(&tickets);
        assert_eq!(sorted[0].id, 2);
        assert_eq!(sorted[1].id, 1);
        // La source est intacte
        assert_eq!(tickets[0].id, 1);
    }

    #[test]
    fn test_status_totals() {
        let tickets = vec![
            ticket(1, TicketStatus::Pending, "2024-05-01T10:00:00Z"),
            ticket(2, TicketStatus::Active, "2024-05-01T10:00:00Z"),
            ticket(3, TicketStatus::Pending, "2024-05-01T10:00:00Z"),
        ];

        let totals = StatusTotals::from_tickets(&tickets);
        assert_eq!(totals.count(TicketStatus::Pending), 2);
        assert_eq!(totals.count(TicketStatus::Active), 1);
        assert_eq!(totals.count(TicketStatus::Cancelled), 0);
        assert_eq!(totals.total(), 3);
        assert_eq!(totals.iter_all().count(), 5);
    }

    #[test]
    fn test_display_id_is_padded() {
        assert_eq!(ticket(7, TicketStatus::Pending, "").display_id(), "TK-007");
        assert_eq!(ticket(1234, TicketStatus::Pending, "").display_id(), "TK-1234");
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "id": 12,
            "assetName": "Camera",
            "status": "accepted",
            "statusLabel": "Accepted",
            "borrower": "Ana",
            "lender": "Bo",
            "updatedAt": "2024-05-01T10:00:00Z"
        }"#;

        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.asset_name, "Camera");
        assert_eq!(ticket.status, TicketStatus::Accepted);
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let json = r#"{
            "id": 12, "assetName": "Camera", "status": "lost", "statusLabel": "Lost",
            "borrower": "Ana", "lender": "Bo", "updatedAt": "2024-05-01T10:00:00Z"
        }"#;

        assert!(serde_json::from_str::<Ticket>(json).is_err());
    }
}
