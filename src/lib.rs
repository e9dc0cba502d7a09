// ============================================================================
// lendboard - Library
// ============================================================================
// Expose les modules publics pour le binaire et les tests
// ============================================================================

pub mod api;       // Client HTTP de la plateforme
pub mod app;       // État de l'application
pub mod config;    // Configuration (fichier TOML + variables d'environnement)
pub mod format;    // Montants, nombres, dates relatives
pub mod lifecycle; // Cycle de chargement des pages
pub mod models;    // Structures de données
pub mod ui;        // Interface utilisateur
pub mod worker;    // Thread d'exécution des requêtes
