//! [`SweepStaleEntries`] [`Task`].

use std::{convert::Infallible, time};

use common::operations::{By, Perform, Start};
use tokio::time::interval;
use tracing as log;

use crate::{infra::revalidate::Sweep, Service};

use super::Task;

/// Configuration for [`SweepStaleEntries`] [`Task`].
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Interval between sweeps of the revalidation cache.
    pub interval: time::Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interval: time::Duration::from_secs(10 * 60),
        }
    }
}

/// [`Task`] dropping revalidation cache entries past their freshness window,
/// so an idle cache does not hold onto stale responses indefinitely.
#[derive(Clone, Debug)]
pub struct SweepStaleEntries<S> {
    /// [`Config`] of this [`Task`].
    config: Config,

    /// [`Service`] instance.
    service: S,
}

impl<C> Task<Start<By<SweepStaleEntries<Self>, Config>>> for Service<C>
where
    SweepStaleEntries<Service<C>>:
        Task<Perform<()>, Ok = usize, Err = Infallible>,
    Self: Clone,
{
    type Ok = ();
    type Err = Infallible;

    async fn execute(
        &self,
        Start(by): Start<By<SweepStaleEntries<Self>, Config>>,
    ) -> Result<Self::Ok, Self::Err> {
        let config = by.into_inner();
        let task = SweepStaleEntries {
            config,
            service: self.clone(),
        };

        let mut interval = interval(task.config.interval);
        loop {
            _ = interval.tick().await;
            if let Ok(dropped) = task.execute(Perform(())).await {
                if dropped > 0 {
                    log::debug!(
                        "`task::SweepStaleEntries` dropped {dropped} stale \
                         entries",
                    );
                }
            }
        }
    }
}

impl<C> Task<Perform<()>> for SweepStaleEntries<Service<C>>
where
    C: Sweep,
{
    type Ok = usize;
    type Err = Infallible;

    async fn execute(&self, _: Perform<()>) -> Result<Self::Ok, Self::Err> {
        Ok(self.service.catalog().sweep())
    }
}
