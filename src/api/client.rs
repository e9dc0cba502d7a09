// ============================================================================
// API Client : plateforme de prêt d'actifs
// ============================================================================
// Une méthode par ressource ; chacune fait exactement un GET et renvoie le
// payload parsé, ou une ApiError. Pas de retry, pas de backoff, pas de cache :
// c'est à l'appelant de décider quoi montrer en cas d'échec.
//
// Le client est construit une seule fois au démarrage (URL de base, jeton,
// timeouts) puis partagé : reqwest::Client est un Arc en interne, le cloner
// ne coûte rien.
// ============================================================================

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use crate::api::{ApiError, Resource};
use crate::config::ApiConfig;
use crate::models::{DashboardSnapshot, NotificationItem, Ticket, WalletOverview};

/// Client HTTP typé
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Construit le client à partir de la configuration
    ///
    /// Le jeton est posé comme en-tête par défaut : toutes les requêtes
    /// portent le même contexte d'authentification.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let builder = http_builder(config)?;
        Self::from_builder(builder, config)
    }

    fn from_builder(builder: reqwest::ClientBuilder, config: &ApiConfig) -> Result<Self, ApiError> {
        let http = builder.build().map_err(ApiError::ClientBuild)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// URL complète d'une ressource
    pub fn url(&self, resource: Resource) -> String {
        format!("{}{}", self.base_url, resource.path())
    }

    /// GET /reports/dashboard
    pub async fn fetch_dashboard(&self) -> Result<DashboardSnapshot, ApiError> {
        self.get_json(Resource::Dashboard).await
    }

    /// GET /tickets
    pub async fn fetch_tickets(&self) -> Result<Vec<Ticket>, ApiError> {
        self.get_json(Resource::Tickets).await
    }

    /// GET /wallet/overview
    pub async fn fetch_wallet_overview(&self) -> Result<WalletOverview, ApiError> {
        self.get_json(Resource::Wallet).await
    }

    /// GET /notifications/recent
    pub async fn fetch_recent_notifications(&self) -> Result<Vec<NotificationItem>, ApiError> {
        self.get_json(Resource::Notifications).await
    }

    /// GET générique + désérialisation
    ///
    /// CONCEPT RUST : génériques avec DeserializeOwned
    /// - T est choisi par l'appelant (DashboardSnapshot, Vec<Ticket>, ...)
    /// - DeserializeOwned : T ne garde aucune référence vers le buffer
    ///
    /// Le corps est lu en bytes puis parsé avec serde_json, pour distinguer
    /// une erreur réseau (Transport) d'un payload malformé (Decode).
    #[instrument(skip(self), fields(path = resource.path()))]
    async fn get_json<T: DeserializeOwned>(&self, resource: Resource) -> Result<T, ApiError> {
        let path = resource.path();
        let url = self.url(resource);
        debug!(url = %url, "Sending HTTP request");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| ApiError::Transport { path, source })?;

        let status = response.status();
        debug!(status = %status, "Received HTTP response");

        if !status.is_success() {
            error!(status = %status, "API returned error status");
            return Err(ApiError::Status {
                path,
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| ApiError::Transport { path, source })?;

        let payload = serde_json::from_slice(&body).map_err(|source| {
            error!(error = %source, bytes = body.len(), "Failed to parse API payload");
            ApiError::Decode { path, source }
        })?;

        info!(bytes = body.len(), "Successfully fetched resource");
        Ok(payload)
    }
}

/// Prépare le ClientBuilder : en-têtes par défaut, user agent, timeouts
fn http_builder(config: &ApiConfig) -> Result<reqwest::ClientBuilder, ApiError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    if let Some(token) = config.token.as_deref() {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", token.trim()))
            .map_err(|_| ApiError::InvalidToken)?;
        // Masqué dans les Debug de reqwest
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    Ok(reqwest::Client::builder()
        .user_agent(concat!("lendboard/", env!("CARGO_PKG_VERSION")))
        .default_headers(headers)
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs)))
}

// ============================================================================
// Tests unitaires
// ============================================================================
// Un mini serveur HTTP sur 127.0.0.1 (port éphémère) renvoie une réponse
// préparée et rend la requête reçue pour inspection.
// ============================================================================
