// ============================================================================
// Enum : Resource
// ============================================================================
// Les quatre ressources lues par l'application
// ============================================================================

/// Ressource distante (une par page)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Dashboard,
    Tickets,
    Wallet,
    Notifications,
}

impl Resource {
    /// Chemin relatif à l'URL de base de l'API
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Dashboard => "/reports/dashboard",
            Resource::Tickets => "/tickets",
            Resource::Wallet => "/wallet/overview",
            Resource::Notifications => "/notifications/recent",
        }
    }

    /// Message fixe affiché quand le chargement échoue
    ///
    /// Le texte de l'erreur sous-jacente n'est jamais montré à l'utilisateur.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Resource::Dashboard => "Unable to load dashboard data",
            Resource::Tickets => "Unable to load tickets",
            Resource::Wallet => "Unable to load wallet data",
            Resource::Notifications => "Unable to load notifications",
        }
    }

    /// Texte affiché pendant le chargement
    pub fn loading_label(&self) -> &'static str {
        match self {
            Resource::Dashboard => "Loading dashboard...",
            Resource::Tickets => "Loading tickets...",
            Resource::Wallet => "Loading wallet...",
            Resource::Notifications => "Loading notifications...",
        }
    }
}
