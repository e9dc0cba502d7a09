// ============================================================================
// Cycle de chargement d'une page
// ============================================================================
// Chaque page suit le même protocole :
//
//   mount()  ──► Loading ──(fetch OK)──► Success(payload)
//                       └─(fetch KO)──► Failed(message fixe)
//
// 1. mount() entre dans Loading et crée un ActiveFlag (jeton d'annulation)
// 2. Une seule requête est émise par montage, avec ce jeton
// 3. unmount() désactive le jeton : un résultat arrivé trop tard est ignoré
// 4. Un échec efface le payload précédent ; un succès efface l'erreur
//
// L'annulation est coopérative : la requête HTTP n'est pas interrompue, le
// jeton décide seulement si son résultat a encore le droit de modifier l'état.
// ============================================================================

use std::fmt::Display;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::api::Resource;

// ============================================================================
// ActiveFlag : jeton d'annulation
// ============================================================================
// CONCEPT RUST : Arc<AtomicBool>
// - Partagé entre la page (thread UI) et la tâche de fetch (runtime tokio)
// - Atomique : lecture/écriture sans Mutex
// - Clone = même drapeau (Arc), pas une copie
// ============================================================================

/// Jeton vrai tant que la page qui l'a créé est montée
#[derive(Debug, Clone)]
pub struct ActiveFlag(Arc<AtomicBool>);

impl ActiveFlag {
    fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    /// Vrai tant que la page n'a pas été démontée
    pub fn is_active(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    fn deactivate(&self) {
        self.0.store(false, Ordering::Release);
    }

    /// Vrai si les deux jetons proviennent du même montage
    pub fn same_mount(&self, other: &ActiveFlag) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Demande de chargement émise au montage d'une page
#[derive(Debug, Clone)]
pub struct LoadRequest {
    pub resource: Resource,
    pub token: ActiveFlag,
}

// ============================================================================
// LoadState : état d'une page
// ============================================================================

/// État de chargement
///
/// CONCEPT RUST : Enum avec données
/// - Success porte le payload, Failed porte le message
/// - Impossible d'avoir à la fois des données et une erreur
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Success(T),
    Failed(&'static str),
}

/// Contrôleur de chargement d'une page
#[derive(Debug)]
pub struct PageLoader<T> {
    resource: Resource,
    state: LoadState<T>,

    /// Jeton du montage courant ; None quand la page est démontée
    mount: Option<ActiveFlag>,
}

impl<T> PageLoader<T> {
    /// Crée un contrôleur démonté, en état Loading
    pub fn new(resource: Resource) -> Self {
        Self {
            resource,
            state: LoadState::Loading,
            mount: None,
        }
    }

    pub fn resource(&self) -> Resource {
        self.resource
    }

    /// Monte la page : retour à Loading et nouveau jeton
    ///
    /// Un éventuel montage précédent est désactivé d'abord, pour que son
    /// résultat en vol ne puisse plus rien modifier.
    pub fn mount(&mut self) -> LoadRequest {
        self.unmount();

        let token = ActiveFlag::new();
        self.state = LoadState::Loading;
        self.mount = Some(token.clone());

        LoadRequest {
            resource: self.resource,
            token,
        }
    }

    /// Démonte la page : le jeton est désactivé et le snapshot abandonné
    pub fn unmount(&mut self) {
        if let Some(token) = self.mount.take() {
            token.deactivate();
        }
        self.state = LoadState::Loading;
    }

    pub fn is_mounted(&self) -> bool {
        self.mount.is_some()
    }

    /// Applique le résultat d'un fetch
    ///
    /// Retourne false (et ne touche à rien) si le jeton n'est pas celui du
    /// montage courant ou s'il a été désactivé entre-temps.
    ///
    /// L'erreur n'est jamais exposée : seul le message fixe de la ressource
    /// est conservé.
    pub fn commit<E: Display>(&mut self, token: &ActiveFlag, outcome: Result<T, E>) -> bool {
        let is_current = self
            .mount
            .as_ref()
            .map(|current| current.same_mount(token) && token.is_active())
            .unwrap_or(false);

        if !is_current {
            debug!(resource = ?self.resource, "Discarding result of an unmounted page");
            return false;
        }

        self.state = match outcome {
            Ok(payload) => LoadState::Success(payload),
            Err(error) => {
                warn!(resource = ?self.resource, error = %error, "Page load failed");
                LoadState::Failed(self.resource.failure_message())
            }
        };
        true
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    /// Payload courant (seulement en Success)
    pub fn data(&self) -> Option<&T> {
        match &self.state {
            LoadState::Success(payload) => Some(payload),
            _ => None,
        }
    }

    /// Message d'erreur courant (seulement en Failed)
    pub fn error(&self) -> Option<&'static str> {
        match self.state {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn loader() -> PageLoader<Vec<u32>> {
        PageLoader::new(Resource::Tickets)
    }

    #[test]
    fn test_mount_starts_loading() {
        let mut page = loader();
        assert!(!page.is_mounted());

        let request = page.mount();
        assert!(page.is_mounted());
        assert!(page.is_loading());
        assert_eq!(request.resource, Resource::Tickets);
        assert!(request.token.is_active());
    }

    #[test]
    fn test_success_stores_payload() {
        let mut page = loader();
        let request = page.mount();

        assert!(page.commit::<String>(&request.token, Ok(vec![1, 2, 3])));
        assert_eq!(page.data(), Some(&vec![1, 2, 3]));
        assert!(page.error().is_none());
        assert!(!page.is_loading());
    }

    #[test]
    fn test_failure_uses_fixed_message_and_clears_data() {
        let mut page = loader();
        let request = page.mount();

        let outcome: Result<Vec<u32>, String> = Err("connection reset by peer".to_string());
        assert!(page.commit(&request.token, outcome));

        assert_eq!(page.error(), Some("Unable to load tickets"));
        assert!(page.data().is_none());
        assert!(!page.is_loading());
    }

    #[test]
    fn test_reload_after_failure_restarts_at_loading() {
        let mut page = loader();
        let first = page.mount();
        page.commit::<&str>(&first.token, Err("boom"));

        let second = page.mount();
        assert!(page.is_loading());
        assert!(page.error().is_none());
        assert!(!first.token.is_active());

        assert!(page.commit::<&str>(&second.token, Ok(vec![7])));
        assert_eq!(page.data(), Some(&vec![7]));
    }

    #[test]
    fn test_unmounted_page_ignores_late_result() {
        let mut page = loader();
        let request = page.mount();
        page.unmount();

        assert!(!request.token.is_active());
        assert!(!page.commit::<String>(&request.token, Ok(vec![1])));
        assert!(page.data().is_none());
        assert_eq!(page.state(), &LoadState::Loading);
    }

    #[test]
    fn test_stale_token_from_previous_mount_is_ignored() {
        let mut page = loader();
        let stale = page.mount();
        let current = page.mount();

        assert!(!page.commit::<String>(&stale.token, Ok(vec![1])));
        assert!(page.is_loading());

        assert!(page.commit::<String>(&current.token, Ok(vec![2])));
        assert_eq!(page.data(), Some(&vec![2]));
    }

    #[test]
    fn test_foreign_token_is_ignored() {
        let mut tickets = loader();
        let mut other: PageLoader<Vec<u32>> = PageLoader::new(Resource::Wallet);
        tickets.mount();
        let foreign = other.mount();

        assert!(!tickets.commit::<String>(&foreign.token, Ok(vec![1])));
        assert!(tickets.is_loading());
    }

    #[tokio::test]
    async fn test_unmount_while_fetch_in_flight() {
        let mut page = loader();
        let request = page.mount();

        // Fetch simulé : résout après le démontage
        let fetch = tokio::spawn(async {
            tokio::time::sleep(Duration::from_millis(20)).await;
            Ok::<Vec<u32>, String>(vec![42])
        });

        page.unmount();
        let outcome = fetch.await.unwrap();

        assert!(!page.commit(&request.token, outcome));
        assert!(page.data().is_none());
        assert!(!page.is_mounted());
    }
}
