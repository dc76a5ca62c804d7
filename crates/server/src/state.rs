use std::sync::Arc;

use service::ChequeRepository;

/// Router state shared by every handler; cloning only bumps the `Arc`.
#[derive(Clone)]
pub struct ServerState {
    pub cheques: Arc<dyn ChequeRepository>,
}

impl ServerState {
    pub fn new(cheques: Arc<dyn ChequeRepository>) -> Self {
        Self { cheques }
    }
}
