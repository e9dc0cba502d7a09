// ============================================================================
// Gestion des événements
// ============================================================================
// Gère les événements clavier et les ticks de l'application
//
// CONCEPTS RUST :
// 1. Enums avec variants : représenter différents types d'événements
// 2. Non-blocking I/O : poll avec timeout
// 3. Error handling avec Result
// ============================================================================

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Délai d'attente d'une touche avant de produire un Tick
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Événements de l'application
#[derive(Debug, Clone)]
pub enum Event {
    /// Touche pressée
    Key(KeyEvent),

    /// Tick régulier (spinner, application des résultats du worker)
    Tick,
}

/// Gestionnaire d'événements
pub struct EventHandler {
    poll_interval: Duration,
}

impl EventHandler {
    pub fn new() -> Self {
        Self {
            poll_interval: POLL_INTERVAL,
        }
    }

    /// Lit le prochain événement (bloquant avec timeout)
    ///
    /// - poll(timeout) attend au plus `poll_interval`
    /// - Si pas d'événement, retourne Ok(Event::Tick)
    /// - Seuls les appuis sont remontés (certains OS envoient aussi Release)
    pub fn next(&self) -> Result<Event> {
        if !event::poll(self.poll_interval)? {
            return Ok(Event::Tick);
        }

        match event::read()? {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Ok(Event::Key(key)),
            // Release, resize, souris : rien à faire
            _ => Ok(Event::Tick),
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Helpers : KeyEvent -> action
// ============================================================================
// CONCEPT RUST : Pattern matching avancé
// - Match sur KeyCode pour identifier la touche
// - Peut aussi matcher sur les modifiers (Ctrl, Alt, Shift)
// ============================================================================

fn key_code(event: &Event) -> Option<KeyCode> {
    match event {
        Event::Key(key) => Some(key.code),
        Event::Tick => None,
    }
}

/// 'q', Échap ou Ctrl-C
pub fn is_quit_event(event: &Event) -> bool {
    if let Event::Key(key) = event {
        matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
    } else {
        false
    }
}

/// Tab, flèche droite ou 'l'
pub fn is_next_page_event(event: &Event) -> bool {
    matches!(
        key_code(event),
        Some(KeyCode::Tab | KeyCode::Right | KeyCode::Char('l'))
    )
}

/// Shift-Tab, flèche gauche ou 'h'
pub fn is_previous_page_event(event: &Event) -> bool {
    matches!(
        key_code(event),
        Some(KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h'))
    )
}

/// Numéro d'onglet saisi directement ('1'..='4')
pub fn page_number_from_event(event: &Event) -> Option<usize> {
    match key_code(event) {
        Some(KeyCode::Char(c @ '1'..='4')) => c.to_digit(10).map(|d| d as usize),
        _ => None,
    }
}

/// 'r' : recharge la page courante
pub fn is_reload_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Char('r') | KeyCode::Char('R')))
}

/// Flèche vers le haut ou 'k' (vim)
pub fn is_up_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Up | KeyCode::Char('k')))
}

/// Flèche vers le bas ou 'j' (vim)
pub fn is_down_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Down | KeyCode::Char('j')))
}

// ============================================================================
// Tests
// ============================================================================
