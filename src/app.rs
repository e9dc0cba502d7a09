// ============================================================================
// Structure : App
// ============================================================================
// État global de l'application TUI
//
// PATTERN : "Application State"
// - Tous les composants de l'UI lisent depuis App
// - Toutes les modifications passent par les méthodes de App
//
// Une seule page est montée à la fois : changer d'écran démonte la page
// courante (son jeton est désactivé) puis monte la nouvelle, qui émet
// exactement une requête.
// ============================================================================

use crate::api::Resource;
use crate::lifecycle::{LoadRequest, PageLoader};
use crate::models::{DashboardSnapshot, NotificationItem, Ticket, WalletOverview};
use crate::worker::{LoadOutcome, Payload};

// ============================================================================
// Enum : Screen
// ============================================================================
// CONCEPT RUST : Enums pour state machines
// - Un seul écran actif à la fois
// - Le compilateur force à gérer tous les cas (exhaustivité)
// ============================================================================

/// Écrans de l'application (onglets de la barre de navigation)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Tickets,
    Wallet,
    Notifications,
}

impl Screen {
    /// Ordre des onglets
    pub const ALL: [Screen; 4] = [
        Screen::Dashboard,
        Screen::Tickets,
        Screen::Wallet,
        Screen::Notifications,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::Tickets => "Tickets",
            Screen::Wallet => "Wallet",
            Screen::Notifications => "Notifications",
        }
    }

    /// Ressource chargée au montage de l'écran
    pub fn resource(&self) -> Resource {
        match self {
            Screen::Dashboard => Resource::Dashboard,
            Screen::Tickets => Resource::Tickets,
            Screen::Wallet => Resource::Wallet,
            Screen::Notifications => Resource::Notifications,
        }
    }

    /// Position dans la barre d'onglets
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    /// Écran à partir d'un numéro d'onglet 1..=4
    pub fn from_number(number: usize) -> Option<Screen> {
        number.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    /// Onglet suivant (cyclique)
    pub fn next(&self) -> Screen {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Onglet précédent (cyclique)
    pub fn previous(&self) -> Screen {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// État principal de l'application
pub struct App {
    /// Indique si l'application doit continuer à tourner
    pub running: bool,

    /// Écran actuellement affiché
    pub current_screen: Screen,

    pub dashboard: PageLoader<DashboardSnapshot>,
    pub tickets: PageLoader<Vec<Ticket>>,
    pub wallet: PageLoader<WalletOverview>,
    pub notifications: PageLoader<Vec<NotificationItem>>,

    /// Ligne sélectionnée dans la liste de l'écran courant
    pub selected_index: usize,

    /// Compteur de ticks (animation du spinner de chargement)
    pub tick_count: u64,
}

impl App {
    /// Crée l'application ; aucune page n'est montée tant que open() n'est
    /// pas appelé
    pub fn new() -> Self {
        Self {
            running: true,
            current_screen: Screen::Dashboard,
            dashboard: PageLoader::new(Resource::Dashboard),
            tickets: PageLoader::new(Resource::Tickets),
            wallet: PageLoader::new(Resource::Wallet),
            notifications: PageLoader::new(Resource::Notifications),
            selected_index: 0,
            tick_count: 0,
        }
    }

    /// Quitte l'application
    pub fn quit(&mut self) {
        self.unmount_current();
        self.running = false;
    }

    /// Vérifie si l'application doit continuer
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Tick : appelé à chaque itération de la boucle
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
    }

    // ========================================================================
    // Navigation entre écrans (montage / démontage)
    // ========================================================================

    /// Affiche un écran : démonte la page courante, monte la cible
    ///
    /// Retourne la requête à transmettre au worker.
    pub fn open(&mut self, screen: Screen) -> LoadRequest {
        self.unmount_current();
        self.current_screen = screen;
        self.selected_index = 0;
        self.mount_current()
    }

    /// Recharge l'écran courant : nouveau montage, nouvelle requête unique
    pub fn reload(&mut self) -> LoadRequest {
        self.open(self.current_screen)
    }

    pub fn next_screen(&mut self) -> LoadRequest {
        self.open(self.current_screen.next())
    }

    pub fn previous_screen(&mut self) -> LoadRequest {
        self.open(self.current_screen.previous())
    }

    fn mount_current(&mut self) -> LoadRequest {
        match self.current_screen {
            Screen::Dashboard => self.dashboard.mount(),
            Screen::Tickets => self.tickets.mount(),
            Screen::Wallet => self.wallet.mount(),
            Screen::Notifications => self.notifications.mount(),
        }
    }

    fn unmount_current(&mut self) {
        match self.current_screen {
            Screen::Dashboard => self.dashboard.unmount(),
            Screen::Tickets => self.tickets.unmount(),
            Screen::Wallet => self.wallet.unmount(),
            Screen::Notifications => self.notifications.unmount(),
        }
    }

    /// Applique un résultat du worker à la page concernée
    ///
    /// Retourne false si le résultat a été ignoré (page démontée entre-temps).
    pub fn apply(&mut self, outcome: LoadOutcome) -> bool {
        let LoadOutcome { token, payload } = outcome;

        let applied = match payload {
            Payload::Dashboard(result) => self.dashboard.commit(&token, result),
            Payload::Tickets(result) => self.tickets.commit(&token, result),
            Payload::Wallet(result) => self.wallet.commit(&token, result),
            Payload::Notifications(result) => self.notifications.commit(&token, result),
        };

        if applied {
            self.clamp_selection();
        }
        applied
    }

    /// Vrai si l'écran courant attend encore sa réponse
    pub fn is_loading(&self) -> bool {
        match self.current_screen {
            Screen::Dashboard => self.dashboard.is_loading(),
            Screen::Tickets => self.tickets.is_loading(),
            Screen::Wallet => self.wallet.is_loading(),
            Screen::Notifications => self.notifications.is_loading(),
        }
    }

    // ========================================================================
    // Sélection de ligne
    // ========================================================================

    /// Nombre de lignes navigables sur l'écran courant
    pub fn row_count(&self) -> usize {
        match self.current_screen {
            Screen::Dashboard => self.dashboard.data().map_or(0, |d| d.recent_activity.len()),
            Screen::Tickets => self.tickets.data().map_or(0, Vec::len),
            Screen::Wallet => self.wallet.data().map_or(0, |w| w.transactions.len()),
            Screen::Notifications => self.notifications.data().map_or(0, Vec::len),
        }
    }

    /// CONCEPT RUST : saturating_sub évite les panics avec les unsigned
    pub fn navigate_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn navigate_down(&mut self) {
        let max_index = self.row_count().saturating_sub(1);
        self.selected_index = (self.selected_index + 1).min(max_index);
    }

    fn clamp_selection(&mut self) {
        let max_index = self.row_count().saturating_sub(1);
        self.selected_index = self.selected_index.min(max_index);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::models::TicketStatus;

    fn ticket(id: u64) -> Ticket {
        Ticket {
            id,
            asset_name: "Tent".to_string(),
            status: TicketStatus::Active,
            status_label: "Active".to_string(),
            borrower: "Ana".to_string(),
            lender: "Bo".to_string(),
            updated_at: "2024-05-01T10:00:00Z".to_string(),
        }
    }

    fn tickets_outcome(request: &LoadRequest, count: u64) -> LoadOutcome {
        LoadOutcome {
            token: request.token.clone(),
            payload: Payload::Tickets(Ok((1..=count).map(ticket).collect())),
        }
    }

    #[test]
    fn test_app_creation() {
        let app = App::new();
        assert!(app.is_running());
        assert_eq!(app.current_screen, Screen::Dashboard);
        assert!(!app.dashboard.is_mounted());
    }

    #[test]
    fn test_screen_cycle() {
        assert_eq!(Screen::Dashboard.next(), Screen::Tickets);
        assert_eq!(Screen::Notifications.next(), Screen::Dashboard);
        assert_eq!(Screen::Dashboard.previous(), Screen::Notifications);
        assert_eq!(Screen::from_number(3), Some(Screen::Wallet));
        assert_eq!(Screen::from_number(0), None);
        assert_eq!(Screen::from_number(5), None);
    }

    #[test]
    fn test_open_mounts_only_target_page() {
        let mut app = App::new();
        let first = app.open(Screen::Dashboard);
        assert_eq!(first.resource, Resource::Dashboard);
        assert!(app.dashboard.is_mounted());

        let second = app.open(Screen::Tickets);
        assert_eq!(second.resource, Resource::Tickets);
        assert!(!app.dashboard.is_mounted());
        assert!(app.tickets.is_mounted());
        assert!(!first.token.is_active());
        assert!(app.is_loading());
    }

    #[test]
    fn test_apply_success_on_current_page() {
        let mut app = App::new();
        let request = app.open(Screen::Tickets);

        assert!(app.apply(tickets_outcome(&request, 2)));
        assert!(!app.is_loading());
        assert_eq!(app.row_count(), 2);
    }

    #[test]
    fn test_apply_failure_on_current_page() {
        let mut app = App::new();
        let request = app.open(Screen::Wallet);

        let outcome = LoadOutcome {
            token: request.token.clone(),
            payload: Payload::Wallet(Err(ApiError::Status {
                path: "/wallet/overview",
                status: 500,
            })),
        };

        assert!(app.apply(outcome));
        assert_eq!(app.wallet.error(), Some("Unable to load wallet data"));
        assert!(app.wallet.data().is_none());
    }

    #[test]
    fn test_late_result_after_navigation_is_ignored() {
        let mut app = App::new();
        let request = app.open(Screen::Tickets);
        app.open(Screen::Dashboard);

        assert!(!app.apply(tickets_outcome(&request, 3)));
        assert!(app.tickets.data().is_none());
        assert!(app.dashboard.is_loading());
    }

    #[test]
    fn test_navigation_bounds() {
        let mut app = App::new();
        let request = app.open(Screen::Tickets);
        app.apply(tickets_outcome(&request, 3));

        app.navigate_down();
        app.navigate_down();
        app.navigate_down();
        assert_eq!(app.selected_index, 2);

        app.navigate_up();
        app.navigate_up();
        app.navigate_up();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_reload_resets_selection_and_state() {
        let mut app = App::new();
        let request = app.open(Screen::Tickets);
        app.apply(tickets_outcome(&request, 3));
        app.navigate_down();

        let reload = app.reload();
        assert_eq!(reload.resource, Resource::Tickets);
        assert_eq!(app.selected_index, 0);
        assert!(app.is_loading());
        assert!(!request.token.is_active());
    }

    #[test]
    fn test_quit_unmounts_current_page() {
        let mut app = App::new();
        let request = app.open(Screen::Dashboard);
        app.quit();

        assert!(!app.is_running());
        assert!(!request.token.is_active());
    }
}
