use std::sync::Arc;

use lexi_srs::Scheduler;

use crate::{
    ApiConfig,
    clock::{Clock, SystemClock},
    config::Environment,
    store::ProgressStore,
};

#[derive(Clone, Debug)]
pub struct ApiState {
    pub store: ProgressStore,
    pub scheduler: Arc<Scheduler>,
    pub clock: Arc<dyn Clock>,
    pub environment: Environment,
    pub max_catalog_size: usize,
}

impl ApiState {
    pub fn new(config: &ApiConfig) -> anyhow::Result<Self> {
        let scheduler = Scheduler::new(config.scheduler_config()?);

        tracing::info!(
            intervals_days = ?scheduler.config().intervals_days(),
            again_delay_minutes = scheduler.config().again_delay().num_minutes(),
            "Scheduler configured"
        );

        Ok(Self {
            store: ProgressStore::new(),
            scheduler: Arc::new(scheduler),
            clock: Arc::new(SystemClock),
            environment: config.env,
            max_catalog_size: config.max_catalog_size,
        })
    }

    /// Swap the time source, e.g. for a [`crate::clock::FixedClock`] in tests.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }
}
