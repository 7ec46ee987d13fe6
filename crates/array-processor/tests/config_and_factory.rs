//! Config parsing and processor construction.

use array_processor::{build_processor, FilterMode, ProcessorConfig, ProcessorKind};

#[test]
fn default_config_builds_loop_processor() {
    let config = ProcessorConfig::default();
    assert_eq!(config.kind, ProcessorKind::Loops);
    assert_eq!(config.filter, FilterMode::Positive);
    assert_eq!(build_processor(config).name(), "loops");
}

#[test]
fn factory_honors_kind() {
    let config = ProcessorConfig::new(ProcessorKind::Iterators, FilterMode::Positive);
    assert_eq!(build_processor(config).name(), "iterators");
}

#[test]
fn factory_honors_filter_mode() {
    let config = ProcessorConfig::new(ProcessorKind::Loops, FilterMode::NearMax { margin: 5 });
    let processor = build_processor(config);
    assert_eq!(processor.filter(&[1, 8, 10]).to_vec(), vec![8, 10]);
}

#[test]
fn config_deserializes_with_defaults() -> anyhow::Result<()> {
    let config: ProcessorConfig = serde_json::from_str("{}")?;
    assert_eq!(config, ProcessorConfig::default());

    let config: ProcessorConfig =
        serde_json::from_str(r#"{"kind": "Iterators", "filter": {"NearMax": {"margin": 3}}}"#)?;
    assert_eq!(config.kind, ProcessorKind::Iterators);
    assert_eq!(config.filter, FilterMode::NearMax { margin: 3 });
    Ok(())
}

#[test]
fn config_round_trips_through_json() -> anyhow::Result<()> {
    let config = ProcessorConfig::new(ProcessorKind::Iterators, FilterMode::NearMax { margin: 10 });
    let json = serde_json::to_string(&config)?;
    let back: ProcessorConfig = serde_json::from_str(&json)?;
    assert_eq!(back, config);
    Ok(())
}

#[test]
fn kind_parses_from_string() {
    assert_eq!("Iterators".parse::<ProcessorKind>(), Ok(ProcessorKind::Iterators));
    assert!("gpu".parse::<ProcessorKind>().is_err());
}
