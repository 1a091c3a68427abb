use std::path::PathBuf;
use std::sync::Arc;

use giftlist_core::{PresentStore, ReservationGuard};

use crate::session::SessionAuthenticator;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PresentStore>,
    pub sessions: Arc<SessionAuthenticator>,
    pub reservations: Arc<ReservationGuard>,
    pub uploads_dir: PathBuf,
    pub secure_cookies: bool,
}
