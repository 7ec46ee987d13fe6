use crate::config::{ProcessorConfig, ProcessorKind};
use crate::processor::{ArrayProcessor, IterProcessor, LoopProcessor};

/// Build a boxed array processor from a `ProcessorConfig`.
pub fn build_processor(config: ProcessorConfig) -> Box<dyn ArrayProcessor> {
    log::debug!(
        "Building {:?} array processor with {:?} filter",
        config.kind,
        config.filter
    );
    match config.kind {
        ProcessorKind::Loops => Box::new(LoopProcessor::new(config.filter)),
        ProcessorKind::Iterators => Box::new(IterProcessor::new(config.filter)),
    }
}
