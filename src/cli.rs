//! Pieces shared by the `carousel` and `viewer` binaries.

use std::time::Duration;
use clap::Args;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::carousel::CarouselConfig;
use crate::constants::*;

#[derive(Args, Debug, Clone)]
pub struct TimingArgs {
    /// Milliseconds between automatic advances (0 disables auto-advance)
    #[arg(long, env = "CAROUSEL_INTERVAL_MS", default_value_t = AUTO_ADVANCE_INTERVAL.as_millis() as u64)]
    pub interval_ms: u64,

    /// Milliseconds before a shown slide starts its entry transition
    #[arg(long, env = "CAROUSEL_ENTER_DELAY_MS", default_value_t = ENTER_DELAY.as_millis() as u64)]
    pub enter_delay_ms: u64,
}

impl TimingArgs {
    pub fn config(&self) -> CarouselConfig {
        CarouselConfig::default()
            .with_interval(Duration::from_millis(self.interval_ms))
            .with_enter_delay(Duration::from_millis(self.enter_delay_ms))
    }
}

pub fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(if verbose { Level::DEBUG } else { Level::INFO })
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
