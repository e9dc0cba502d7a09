// ============================================================================
// Background Worker
// ============================================================================
// Exécute les requêtes HTTP hors du thread UI
//
// CONCEPT RUST : Command pattern avec channels
// - La boucle UI envoie des Command (un Load par montage de page)
// - Le worker lance une tâche tokio par Load
// - Chaque tâche renvoie un LoadOutcome sur le channel de résultats
// - La boucle UI applique le résultat via PageLoader::commit
//
// Le thread UI reste le seul propriétaire de l'état des pages : le worker
// ne voit que le client HTTP et les jetons.
// ============================================================================

use std::sync::mpsc;
use std::thread::JoinHandle;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::api::{ApiClient, ApiError, Resource};
use crate::lifecycle::{ActiveFlag, LoadRequest};
use crate::models::{DashboardSnapshot, NotificationItem, Ticket, WalletOverview};

/// Commandes envoyées au worker
#[derive(Debug, Clone)]
pub enum Command {
    /// Charger la ressource d'une page qui vient d'être montée
    Load(LoadRequest),
}

/// Résultat typé d'un fetch, une variante par ressource
#[derive(Debug)]
pub enum Payload {
    Dashboard(Result<DashboardSnapshot, ApiError>),
    Tickets(Result<Vec<Ticket>, ApiError>),
    Wallet(Result<WalletOverview, ApiError>),
    Notifications(Result<Vec<NotificationItem>, ApiError>),
}

impl Payload {
    pub fn resource(&self) -> Resource {
        match self {
            Payload::Dashboard(_) => Resource::Dashboard,
            Payload::Tickets(_) => Resource::Tickets,
            Payload::Wallet(_) => Resource::Wallet,
            Payload::Notifications(_) => Resource::Notifications,
        }
    }

    pub fn is_ok(&self) -> bool {
        match self {
            Payload::Dashboard(result) => result.is_ok(),
            Payload::Tickets(result) => result.is_ok(),
            Payload::Wallet(result) => result.is_ok(),
            Payload::Notifications(result) => result.is_ok(),
        }
    }
}

/// Résultat renvoyé à la boucle UI, accompagné du jeton du montage
#[derive(Debug)]
pub struct LoadOutcome {
    pub token: ActiveFlag,
    pub payload: Payload,
}

/// Exécute le fetch correspondant à une ressource
pub async fn execute(client: &ApiClient, resource: Resource) -> Payload {
    match resource {
        Resource::Dashboard => Payload::Dashboard(client.fetch_dashboard().await),
        Resource::Tickets => Payload::Tickets(client.fetch_tickets().await),
        Resource::Wallet => Payload::Wallet(client.fetch_wallet_overview().await),
        Resource::Notifications => Payload::Notifications(client.fetch_recent_notifications().await),
    }
}

/// Lance le worker dans un thread dédié
///
/// CONCEPT RUST : Thread + runtime tokio
/// - std::thread::spawn : thread OS qui attend les commandes (recv bloquant)
/// - runtime.spawn : une tâche async par requête, plusieurs peuvent être
///   en vol si l'utilisateur change de page rapidement
///
/// Le thread s'arrête quand le Sender de commandes est abandonné.
pub fn spawn_background_worker(
    client: ApiClient,
    command_rx: mpsc::Receiver<Command>,
    result_tx: mpsc::Sender<LoadOutcome>,
) -> Result<JoinHandle<()>> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("lendboard-io")
        .enable_all()
        .build()
        .context("Échec de la création du runtime tokio")?;

    std::thread::Builder::new()
        .name("lendboard-worker".to_string())
        .spawn(move || {
            while let Ok(command) = command_rx.recv() {
                match command {
                    Command::Load(request) => {
                        info!(resource = ?request.resource, "Worker received load command");

                        let client = client.clone();
                        let result_tx = result_tx.clone();

                        runtime.spawn(async move {
                            let payload = execute(&client, request.resource).await;

                            // La page a été quittée pendant la requête : inutile
                            // d'encombrer le channel (commit l'ignorerait de toute façon)
                            if !request.token.is_active() {
                                debug!(resource = ?request.resource, "Page unmounted, dropping result");
                                return;
                            }

                            let _ = result_tx.send(LoadOutcome {
                                token: request.token,
                                payload,
                            });
                        });
                    }
                }
            }

            info!("Worker thread exiting (channel closed)");
            runtime.shutdown_background();
        })
        .context("Échec du lancement du thread worker")
}

// ============================================================================
// Tests unitaires
// ============================================================================
