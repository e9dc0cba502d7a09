// ============================================================================
// Module : models
// ============================================================================
// Structures de données échangées avec l'API de prêt d'actifs
//
// Tous les payloads sont des snapshots immuables : chaque chargement remplace
// le précédent en bloc, rien n'est modifié côté client.
// ============================================================================

pub mod dashboard;    // Snapshot du tableau de bord (/reports/dashboard)
pub mod ticket;       // Tickets de prêt (/tickets)
pub mod wallet;       // Portefeuille et transactions (/wallet/overview)
pub mod notification; // Notifications récentes (/notifications/recent)

// Re-exports pour simplifier les imports
// Au lieu de : use lendboard::models::ticket::Ticket;
// On peut faire : use lendboard::models::Ticket;
pub use dashboard::{ActivityItem, DashboardMetric, DashboardSnapshot, PerformancePoint};
pub use notification::{NotificationChannel, NotificationItem, NotificationStatus};
pub use ticket::{sort_by_recency, StatusTotals, Ticket, TicketStatus};
pub use wallet::{PaymentStatus, WalletOverview, WalletStatus, WalletSummary, WalletTransaction};
