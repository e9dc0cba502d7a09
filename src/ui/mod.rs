// ============================================================================
// Module : ui
// ============================================================================
// Gère toute l'interface utilisateur (Terminal User Interface)
// ============================================================================

pub mod events;        // Gestion des événements clavier
pub mod shell;         // Cadre commun : onglets, page courante, raccourcis
pub mod widgets;       // Chargement, erreur, placeholders
pub mod chart;         // Courbe de performance
pub mod dashboard;     // Page Dashboard
pub mod tickets;       // Page Tickets
pub mod wallet;        // Page Wallet
pub mod notifications; // Page Notifications

// Re-exports pour simplifier les imports
pub use events::{Event, EventHandler};
pub use shell::render;

/// Rendu dans un terminal factice, pour les tests
#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::{backend::TestBackend, Frame, Terminal};

    /// Dessine avec `draw` puis retourne l'écran, une ligne par rangée
    pub fn render_to_string(width: u16, height: u16, draw: impl FnOnce(&mut Frame)) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(draw).unwrap();

        let buffer = terminal.backend().buffer();
        let mut screen = String::new();
        for y in 0..height {
            for x in 0..width {
                screen.push_str(buffer.get(x, y).symbol());
            }
            screen.push('\n');
        }
        screen
    }
}
