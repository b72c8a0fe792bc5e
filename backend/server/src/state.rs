use std::sync::Arc;

use super::{config::Config, storage::PlanStore};

pub struct State {
    pub config: Config,
    pub store: PlanStore,
}

impl State {
    pub fn new() -> Arc<Self> {
        Self::with_config(Config::load())
    }

    pub fn with_config(config: Config) -> Arc<Self> {
        let store = PlanStore::new(config.data_file.clone());

        Arc::new(Self { config, store })
    }
}
