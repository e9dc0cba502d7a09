// ============================================================================
// Structure : WalletOverview
// ============================================================================
// Résumé du portefeuille + dernières transactions (GET /wallet/overview)
// ============================================================================

use serde::{de, Deserialize, Deserializer, Serialize};

/// Seuil au-dessus duquel la réserve de règlement est jugée saine
const HEALTHY_BUFFER_THRESHOLD: f64 = 50.0;

/// Statut du portefeuille
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletStatus {
    Active,
    Frozen,
}

impl WalletStatus {
    pub fn label(&self) -> &'static str {
        match self {
            WalletStatus::Active => "active",
            WalletStatus::Frozen => "frozen",
        }
    }
}

/// Statut d'un paiement lié à une transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Initiated,
    Verified,
    Failed,
}

/// Résumé du portefeuille
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletSummary {
    pub balance: f64,
    pub currency: String,
    pub status: WalletStatus,

    /// Part des paiements vérifiés, en pourcentage (toujours dans [0, 100],
    /// décimales autorisées : 66.7)
    #[serde(deserialize_with = "deserialize_percentage")]
    pub settlement_buffer: f64,

    pub upcoming_payouts: f64,
}

impl WalletSummary {
    /// Vrai si la réserve dépasse le seuil (affichée en vert)
    pub fn buffer_is_healthy(&self) -> bool {
        self.settlement_buffer > HEALTHY_BUFFER_THRESHOLD
    }

    /// Ratio [0.0, 1.0] pour la jauge
    pub fn buffer_ratio(&self) -> f64 {
        (self.settlement_buffer / 100.0).clamp(0.0, 1.0)
    }
}

/// Une transaction du portefeuille
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletTransaction {
    pub id: u64,
    pub reference: String,
    pub ticket_id: u64,
    pub ticket_asset: String,

    /// "Top-up", "Settlement" ou "Payout"
    #[serde(rename = "type")]
    pub kind: String,

    pub amount: f64,
    pub status: PaymentStatus,
    pub status_label: String,
    pub created_at: String,
}

/// Vue complète du portefeuille
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletOverview {
    pub wallet: WalletSummary,
    pub transactions: Vec<WalletTransaction>,
}

/// Refuse tout pourcentage hors de [0, 100]
///
/// CONCEPT RUST : deserialize_with
/// - Validation au moment du parsing : un payload hors bornes est une erreur
///   de décodage, au même titre qu'un JSON malformé
fn deserialize_percentage<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(de::Error::custom(format!(
            "settlementBuffer out of range: {}",
            value
        )));
    }
    Ok(value)
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn overview_json(buffer: &str) -> String {
        format!(
            r#"{{
                "wallet": {{
                    "balance": 1500.75,
                    "currency": "USD",
                    "status": "active",
                    "settlementBuffer": {},
                    "upcomingPayouts": 250
                }},
                "transactions": [{{
                    "id": 4,
                    "reference": "A0000000042",
                    "ticketId": 9,
                    "ticketAsset": "Drill",
                    "type": "Settlement",
                    "amount": 80.0,
                    "status": "verified",
                    "statusLabel": "Verified",
                    "createdAt": "2024-05-01T10:00:00Z"
                }}]
            }}"#,
            buffer
        )
    }

    #[test]
    fn test_deserialize_overview() {
        let overview: WalletOverview = serde_json::from_str(&overview_json("75")).unwrap();
        assert_eq!(overview.wallet.settlement_buffer, 75.0);
        assert_eq!(overview.wallet.status, WalletStatus::Active);
        assert_eq!(overview.transactions[0].kind, "Settlement");
        assert_eq!(overview.transactions[0].status, PaymentStatus::Verified);
    }

    #[test]
    fn test_settlement_buffer_bounds() {
        assert!(serde_json::from_str::<WalletOverview>(&overview_json("100")).is_ok());
        assert!(serde_json::from_str::<WalletOverview>(&overview_json("0")).is_ok());
        assert!(serde_json::from_str::<WalletOverview>(&overview_json("101")).is_err());
        assert!(serde_json::from_str::<WalletOverview>(&overview_json("-1")).is_err());
        assert!(serde_json::from_str::<WalletOverview>(&overview_json("100.5")).is_err());
    }

    #[test]
    fn test_fractional_settlement_buffer() {
        let whole: WalletOverview = serde_json::from_str(&overview_json("75.0")).unwrap();
        assert_eq!(whole.wallet.settlement_buffer, 75.0);

        let fractional: WalletOverview = serde_json::from_str(&overview_json("66.7")).unwrap();
        assert_eq!(fractional.wallet.settlement_buffer, 66.7);
        assert!(fractional.wallet.buffer_is_healthy());
    }

    #[test]
    fn test_buffer_health() {
        let mut overview: WalletOverview = serde_json::from_str(&overview_json("51")).unwrap();
        assert!(overview.wallet.buffer_is_healthy());

        overview.wallet.settlement_buffer = 50.0;
        assert!(!overview.wallet.buffer_is_healthy());
        assert_eq!(overview.wallet.buffer_ratio(), 0.5);
    }
}
