use std::str::FromStr;

use serde::Deserialize;

use crate::services::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    Uuid,
    Sequential,
}

impl IdStrategy {
    pub fn generator(&self) -> Box<dyn IdGenerator> {
        match self {
            IdStrategy::Uuid => Box::new(UuidIdGenerator),
            IdStrategy::Sequential => Box::new(SequentialIdGenerator::default()),
        }
    }
}

impl FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uuid" => Ok(IdStrategy::Uuid),
            "sequential" => Ok(IdStrategy::Sequential),
            _ => Err(format!("Invalid id strategy: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Distance below a slot's top at which the pointer counts as past it.
    pub slot_bias: f64,
    pub seed_defaults: bool,
    pub id_strategy: IdStrategy,
    /// Card pitch used when slot positions are derived instead of supplied.
    pub slot_pitch: f64,
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            slot_bias: env_or("KANBAN_SLOT_BIAS", defaults.slot_bias),
            seed_defaults: env_or("KANBAN_SEED_DEFAULTS", defaults.seed_defaults),
            id_strategy: env_or("KANBAN_ID_STRATEGY", defaults.id_strategy),
            slot_pitch: env_or("KANBAN_SLOT_PITCH", defaults.slot_pitch),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            slot_bias: 50.0,
            seed_defaults: true,
            id_strategy: IdStrategy::Uuid,
            slot_pitch: 64.0,
        }
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => parse_or(key, &raw, default),
        Err(_) => default,
    }
}

fn parse_or<T: FromStr>(key: &str, raw: &str, default: T) -> T {
    raw.trim().parse().unwrap_or_else(|_| {
        tracing::warn!(key, value = raw, "Ignoring unparsable config value, using default");
        default
    })
}
