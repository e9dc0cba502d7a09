// ============================================================================
// Module : api
// ============================================================================
// Client HTTP typé vers l'API de prêt d'actifs : une requête GET par
// ressource, sans retry, sans cache
// ============================================================================

pub mod client;   // ApiClient (reqwest)
pub mod error;    // ApiError (transport / statut HTTP / payload)
pub mod resource; // Ressources distantes et leurs chemins

// Re-export des types principaux
pub use client::ApiClient;
pub use error::ApiError;
pub use resource::Resource;
