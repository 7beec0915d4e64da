//! Async runtime health collector.
//!
//! Samples the tokio runtime the scrape runs on. Outside a runtime both gauges
//! read zero.

use prometheus::core::{Collector, Desc};
use prometheus::proto::MetricFamily;
use prometheus::{IntGauge, Opts};
use tokio::runtime::Handle;

pub struct RuntimeCollector {
    workers: IntGauge,
    alive_tasks: IntGauge,
}

impl RuntimeCollector {
    pub fn new() -> prometheus::Result<Self> {
        let workers = IntGauge::with_opts(Opts::new(
            "tokio_runtime_workers",
            "Number of worker threads used by the async runtime.",
        ))?;
        let alive_tasks = IntGauge::with_opts(Opts::new(
            "tokio_runtime_alive_tasks",
            "Number of tasks currently alive in the async runtime.",
        ))?;
        Ok(Self { workers, alive_tasks })
    }

    fn sample(&self) {
        match Handle::try_current() {
            Ok(handle) => {
                let m = handle.metrics();
                self.workers.set(m.num_workers() as i64);
                self.alive_tasks.set(m.num_alive_tasks() as i64);
            }
            Err(_) => {
                self.workers.set(0);
                self.alive_tasks.set(0);
            }
        }
    }
}

impl Collector for RuntimeCollector {
    fn desc(&self) -> Vec<&Desc> {
        self.workers
            .desc()
            .into_iter()
            .chain(self.alive_tasks.desc())
            .collect()
    }

    fn collect(&self) -> Vec<MetricFamily> {
        self.sample();
        let mut families = self.workers.collect();
        families.extend(self.alive_tasks.collect());
        families
    }
}
