mod app;
mod outline;

use loopline_engine::device::GpuInit;
use loopline_engine::logging::{init_logging, LoggingConfig};
use loopline_engine::window::{LogicalSize, Runtime, RuntimeConfig};

use crate::app::{SketchApp, APP_TITLE};

fn main() {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: APP_TITLE.to_string(),
        initial_size: LogicalSize::new(800.0, 600.0),
    };

    if let Err(e) = Runtime::run(config, GpuInit::default(), SketchApp::new()) {
        log::error!("{e:#}");
        std::process::exit(-1);
    }
}
