#![allow(dead_code)]

use array_processor::{ArrayProcessor, FilterMode, IterProcessor, LoopProcessor};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Both implementations with the default filter rule.
pub fn processors() -> Vec<Box<dyn ArrayProcessor>> {
    processors_with(FilterMode::default())
}

pub fn processors_with(filter: FilterMode) -> Vec<Box<dyn ArrayProcessor>> {
    vec![
        Box::new(LoopProcessor::new(filter)),
        Box::new(IterProcessor::new(filter)),
    ]
}
