use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Central configuration for building an array processor.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ProcessorConfig {
    pub kind: ProcessorKind,
    pub filter: FilterMode,
}

/// Available processor implementations.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProcessorKind {
    /// Explicit index loops.
    #[default]
    Loops,
    /// Iterator adaptors.
    Iterators,
}

/// Rule applied by `ArrayProcessor::filter`.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterMode {
    /// Keep strictly positive values. Input without negatives is returned as-is.
    #[default]
    Positive,
    /// Drop every value smaller than `max - margin`.
    NearMax { margin: i32 },
}

impl FilterMode {
    /// The documented threshold of the near-max rule.
    pub const DEFAULT_MARGIN: i32 = 10;
}

impl FromStr for ProcessorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "loops" | "loop" => Ok(ProcessorKind::Loops),
            "iterators" | "iterator" | "iter" => Ok(ProcessorKind::Iterators),
            _ => Err(format!(
                "Unknown processor kind: {}. Expected one of `loops` or `iterators`",
                s
            )),
        }
    }
}

impl FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "positive" => Ok(FilterMode::Positive),
            "near_max" | "nearmax" => Ok(FilterMode::NearMax {
                margin: FilterMode::DEFAULT_MARGIN,
            }),
            _ => Err(format!(
                "Unknown filter mode: {}. Expected one of `positive` or `near_max`",
                s
            )),
        }
    }
}

impl ProcessorConfig {
    pub fn new(kind: ProcessorKind, filter: FilterMode) -> Self {
        Self { kind, filter }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!("LOOPS".parse::<ProcessorKind>(), Ok(ProcessorKind::Loops));
        assert_eq!("iter".parse::<ProcessorKind>(), Ok(ProcessorKind::Iterators));
    }

    #[test]
    fn unknown_kind_lists_valid_names() {
        let err = "streams".parse::<ProcessorKind>().unwrap_err();
        assert!(err.contains("streams"));
        assert!(err.contains("iterators"));
    }

    #[test]
    fn near_max_uses_default_margin() {
        assert_eq!(
            "near_max".parse::<FilterMode>(),
            Ok(FilterMode::NearMax { margin: 10 })
        );
    }
}
