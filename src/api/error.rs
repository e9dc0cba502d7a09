// ============================================================================
// Erreurs du client HTTP
// ============================================================================
// Trois familles d'échec d'une requête :
// 1. Transport : réseau, DNS, timeout
// 2. Statut    : réponse HTTP hors 2xx
// 3. Décodage  : JSON malformé ou invariant violé (statut inconnu, etc.)
//
// Les pages ne distinguent pas ces cas (message fixe par ressource), mais
// les logs gardent le détail.
// ============================================================================

/// Erreur d'un appel à l'API
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid API token: not a valid HTTP header value")]
    InvalidToken,

    #[error("HTTP client build failed: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("request to {path} failed: {source}")]
    Transport {
        path: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{path} returned HTTP {status}")]
    Status { path: &'static str, status: u16 },

    #[error("malformed payload from {path}: {source}")]
    Decode {
        path: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Nom court de la famille d'erreur (pour les logs structurés)
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::InvalidToken | ApiError::ClientBuild(_) => "config",
            ApiError::Transport { .. } => "transport",
            ApiError::Status { .. } => "status",
            ApiError::Decode { .. } => "decode",
        }
    }
}
