// ============================================================================
// Widgets partagés
// ============================================================================
// Les trois états communs à toutes les pages :
// - chargement (spinner + libellé)
// - échec (message fixe qui remplace tout le contenu)
// - liste vide (texte de remplacement littéral)
// ============================================================================

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Placeholder quand un indicateur manque
pub const NO_DATA: &str = "No data";

/// Images du spinner (braille), une par tick
const SPINNER_FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Image du spinner pour un tick donné
pub fn spinner_frame(tick: u64) -> char {
    SPINNER_FRAMES[(tick % SPINNER_FRAMES.len() as u64) as usize]
}

/// Bloc standard d'une carte
pub fn card(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" {} ", title))
}

/// Affiche l'état de chargement
pub fn render_loading(frame: &mut Frame, area: Rect, label: &str, tick: u64) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{} {}", spinner_frame(tick), label),
            Style::default().fg(Color::Cyan),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Cyan)))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

/// Affiche le message d'échec d'une page à la place de son contenu
pub fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" ⚠ Error ");

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            message,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("[r] Reload", Style::default().fg(Color::Gray))),
    ];

    let paragraph = Paragraph::new(text).block(block).alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

/// Affiche un texte de remplacement (liste vide, indicateur absent)
pub fn render_placeholder(frame: &mut Frame, area: Rect, block: Block, message: &str) {
    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(Color::Gray))),
    ])
    .block(block)
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}
