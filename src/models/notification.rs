// ============================================================================
// Structure : NotificationItem
// ============================================================================
// Notifications envoyées à l'utilisateur (GET /notifications/recent)
// ============================================================================

use serde::{Deserialize, Serialize};

/// Canal d'envoi
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationChannel {
    Sms,
    Whatsapp,
    Email,
}

/// État d'envoi
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationStatus {
    Queued,
    Sent,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationItem {
    pub id: u64,
    pub channel: NotificationChannel,
    pub channel_label: String,
    pub status: NotificationStatus,
    pub status_label: String,
    pub message: String,
    pub created_at: String,
}
