//! Shared application context: the one place the client, session store, and
//! poller are wired together.

use std::sync::Arc;

use shopgrid_api::ApiClient;
use shopgrid_session::{AlertPoller, SessionStorage, SessionStore};

use crate::config::Config;
use crate::output::ConsoleNotifier;

pub struct AppContext {
    pub config: Config,
    pub client: Arc<ApiClient>,
    pub session: Arc<SessionStore>,
    pub poller: Arc<AlertPoller>,
}

impl AppContext {
    pub fn new(config: Config) -> Self {
        let client = Arc::new(ApiClient::new(config.api_url.clone()));
        let session = Arc::new(SessionStore::new(
            client.clone(),
            SessionStorage::new(config.session_path()),
        ));
        let poller = AlertPoller::new(client.clone(), Arc::new(ConsoleNotifier));

        AppContext {
            config,
            client,
            session,
            poller,
        }
    }
}
