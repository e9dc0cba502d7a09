// ============================================================================
// lendboard - Client terminal de la plateforme de prêt d'objets
// ============================================================================
// Quatre pages (Dashboard, Tickets, Wallet, Notifications), chacune chargée
// depuis l'API HTTP au moment où elle est affichée.
//
// CONCEPTS RUST CLÉS :
// 1. Terminal raw mode : contrôle total du terminal
// 2. Event loop : boucle qui gère résultats, rendu et événements
// 3. Worker thread : les appels HTTP tournent sur un runtime tokio séparé
// 4. Channels mpsc : l'UI envoie des commandes, reçoit des résultats
// ============================================================================

use std::io;
use std::sync::mpsc;

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, error, info, warn};

use lendboard::api::ApiClient;
use lendboard::app::{App, Screen};
use lendboard::config::Config;
use lendboard::lifecycle::LoadRequest;
use lendboard::ui::{events::EventHandler, render, Event};
use lendboard::worker::{spawn_background_worker, Command, LoadOutcome};

// ============================================================================
// Logging
// ============================================================================
// stdout appartient au TUI : les logs vont dans un fichier à rotation
// quotidienne.
// ============================================================================

/// Initialise le système de logging vers fichier
///
/// - Registry : point central des logs
/// - EnvFilter : RUST_LOG si défini, sinon le filtre de la configuration
/// - RollingFileAppender : nouveau fichier chaque jour
///
/// ```bash
/// tail -f ~/.local/share/lendboard/logs/lendboard.log
/// RUST_LOG=lendboard=trace lendboard
/// ```
fn init_logging(config: &Config) -> Result<()> {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let log_dir = config.log_directory();

    std::fs::create_dir_all(&log_dir).context("Échec de la création du répertoire de logs")?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir.clone(), "lendboard.log");

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true)
                .with_line_number(true),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .try_init()
        .context("Échec de l'installation du subscriber tracing")?;

    info!(?log_dir, "Logging initialisé");
    Ok(())
}

// ============================================================================
// Point d'entrée du programme
// ============================================================================

fn main() -> Result<()> {
    let config = Config::load()?;

    // Si le logging échoue, on prévient et on continue sans
    init_logging(&config).unwrap_or_else(|e| {
        eprintln!("⚠️  Warning: Failed to initialize logging: {:#}", e);
        eprintln!("   Continuing without logging...");
    });

    info!(base_url = %config.api.base_url, "lendboard starting up");

    // Session HTTP : construite une fois, puis confiée au worker
    let client = ApiClient::new(&config.api).context("Configuration de l'API invalide")?;

    let (command_tx, command_rx) = mpsc::channel::<Command>();
    let (result_tx, result_rx) = mpsc::channel::<LoadOutcome>();

    info!("Spawning background worker thread");
    let worker = spawn_background_worker(client, command_rx, result_tx)?;

    debug!("Setting up terminal");
    let mut terminal = setup_terminal()?;

    let mut app = App::new();
    let events = EventHandler::new();

    info!("Starting event loop");
    let result = run(&mut terminal, &mut app, &events, &command_tx, &result_rx);

    // Restaure le terminal (même en cas d'erreur)
    debug!("Restoring terminal");
    restore_terminal(&mut terminal)?;

    // Fermer le channel arrête le worker
    drop(command_tx);
    if worker.join().is_err() {
        warn!("Worker thread panicked");
    }

    match &result {
        Ok(_) => info!("Application exited normally"),
        Err(e) => error!(error = ?e, "Application exited with error"),
    }

    result
}

// ============================================================================
// Event loop
// ============================================================================
// 0. RÉSULTATS : applique ce que le worker a terminé
// 1. RENDER    : dessine l'écran courant
// 2. INPUT     : traite un événement (ou un Tick après 250ms)
// 3. UPDATE    : avance le spinner
// ============================================================================

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
    command_tx: &mpsc::Sender<Command>,
    result_rx: &mpsc::Receiver<LoadOutcome>,
) -> Result<()> {
    // Montage de la page d'accueil : une requête
    send_load(command_tx, app.open(Screen::Dashboard))?;

    while app.is_running() {
        // CONCEPT : try_recv ne bloque pas ; on vide tout ce qui est arrivé
        loop {
            match result_rx.try_recv() {
                Ok(outcome) => {
                    let resource = outcome.payload.resource();
                    let succeeded = outcome.payload.is_ok();
                    if app.apply(outcome) {
                        info!(?resource, succeeded, "Page load completed");
                    } else {
                        debug!(?resource, "Late result ignored");
                    }
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    anyhow::bail!("Worker thread disconnected");
                }
            }
        }

        terminal.draw(|frame| render(frame, app))?;

        match events.next() {
            Ok(event) => handle_event(app, event, command_tx)?,
            Err(e) => warn!(error = %e, "Failed to read terminal event"),
        }

        app.tick();
    }

    Ok(())
}

/// Transmet une demande de chargement au worker
fn send_load(command_tx: &mpsc::Sender<Command>, request: LoadRequest) -> Result<()> {
    debug!(resource = ?request.resource, "Requesting load");
    command_tx
        .send(Command::Load(request))
        .context("Le worker ne reçoit plus de commandes")
}

/// Traite un événement et met à jour l'état de l'application
///
/// Chaque changement de page démonte la page courante et produit une
/// nouvelle requête, envoyée aussitôt au worker.
fn handle_event(app: &mut App, event: Event, command_tx: &mpsc::Sender<Command>) -> Result<()> {
    use lendboard::ui::events::{
        is_down_event, is_next_page_event, is_previous_page_event, is_quit_event,
        is_reload_event, is_up_event, page_number_from_event,
    };

    if matches!(event, Event::Tick) {
        return Ok(());
    }

    if is_quit_event(&event) {
        info!("User requested quit");
        app.quit();
    } else if is_next_page_event(&event) {
        let request = app.next_screen();
        info!(screen = app.current_screen.title(), "User changed page");
        send_load(command_tx, request)?;
    } else if is_previous_page_event(&event) {
        let request = app.previous_screen();
        info!(screen = app.current_screen.title(), "User changed page");
        send_load(command_tx, request)?;
    } else if let Some(screen) = page_number_from_event(&event).and_then(Screen::from_number) {
        let request = app.open(screen);
        info!(screen = screen.title(), "User jumped to page");
        send_load(command_tx, request)?;
    } else if is_reload_event(&event) {
        let request = app.reload();
        info!(screen = app.current_screen.title(), "User reloaded page");
        send_load(command_tx, request)?;
    } else if is_up_event(&event) {
        app.navigate_up();
    } else if is_down_event(&event) {
        app.navigate_down();
    }

    Ok(())
}

// ============================================================================
// Terminal
// ============================================================================

/// Configure le terminal en mode TUI (raw mode + alternate screen)
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(|e| e.into())
}

/// Restaure le terminal à son état normal
///
/// Appelé dans main() même en cas d'erreur, pour ne pas laisser le
/// terminal cassé.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}
