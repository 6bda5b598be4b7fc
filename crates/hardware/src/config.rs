//! Configuration system for the MIPS simulator.
//!
//! This module defines all configuration structures and enums used to parameterize
//! the simulator. It provides:
//! 1. **Defaults:** The MU-MIPS memory map and the text-segment load base.
//! 2. **Structures:** Hierarchical config for general behaviour and the memory layout.
//! 3. **Enums:** The policy applied to unsupported instruction words.
//! 4. **Validation:** Rejects degenerate or overlapping regions before memory is built.
//!
//! Configuration is supplied as JSON (`Config::from_json`) or taken from `Config::default()`.

use serde::Deserialize;

use crate::common::constants::{
    DATA_BASE, KDATA_BASE, KTEXT_BASE, SEGMENT_SIZE, STACK_BASE, TEXT_BASE,
};
use crate::common::error::ConfigError;
use crate::soc::memory::{Memory, Region};

/// Default configuration constants for the simulator.
mod defaults {
    use super::{
        DATA_BASE, KDATA_BASE, KTEXT_BASE, RegionConfig, SEGMENT_SIZE, STACK_BASE, TEXT_BASE,
    };

    /// Address programs are loaded at and started from.
    pub const TEXT_BASE_ADDR: u32 = TEXT_BASE;

    /// The MU-MIPS segment map: user text, user data, stack, kernel text, kernel data.
    pub fn regions() -> Vec<RegionConfig> {
        [
            ("text", TEXT_BASE),
            ("data", DATA_BASE),
            ("stack", STACK_BASE),
            ("ktext", KTEXT_BASE),
            ("kdata", KDATA_BASE),
        ]
        .into_iter()
        .map(|(name, begin)| RegionConfig {
            name: name.to_string(),
            begin,
            size: SEGMENT_SIZE,
        })
        .collect()
    }
}

/// Action taken when the fetched word is not a supported instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum UnsupportedPolicy {
    /// Stop the simulator with a fault.
    #[default]
    #[serde(alias = "halt")]
    Halt,
    /// Log a warning, advance the program counter by one instruction and continue.
    #[serde(alias = "skip")]
    Skip,
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// ```
/// use mipsim_core::config::{Config, UnsupportedPolicy};
///
/// let json = r#"{
///     "general": {
///         "trace_instructions": true,
///         "on_unsupported": "Skip",
///         "max_cycles": 1000
///     },
///     "memory": {
///         "text_base": 4194304,
///         "regions": [
///             { "name": "text", "begin": 4194304, "size": 4096 },
///             { "name": "data", "begin": 268435456, "size": 4096 }
///         ]
///     }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.on_unsupported, UnsupportedPolicy::Skip);
/// assert_eq!(config.general.max_cycles, Some(1000));
/// assert_eq!(config.memory.regions.len(), 2);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Memory layout
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses and validates a JSON configuration document.
    ///
    /// Missing sections and fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the memory layout.
    ///
    /// # Returns
    ///
    /// An error if a region is empty or wraps past `0xFFFF_FFFF`, if two
    /// regions overlap, or if the text base lies outside every region.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut spans = Vec::with_capacity(self.memory.regions.len());
        for r in &self.memory.regions {
            let end = r
                .end()
                .ok_or_else(|| ConfigError::InvalidRegion { name: r.name.clone() })?;
            spans.push((r.begin, end, r.name.as_str()));
        }
        spans.sort_unstable_by_key(|&(begin, _, _)| begin);

        for pair in spans.windows(2) {
            let (_, first_end, first) = pair[0];
            let (second_begin, _, second) = pair[1];
            if second_begin <= first_end {
                return Err(ConfigError::OverlappingRegions {
                    first: first.to_string(),
                    second: second.to_string(),
                });
            }
        }

        let text = self.memory.text_base;
        if !spans.iter().any(|&(b, e, _)| text >= b && text <= e) {
            return Err(ConfigError::MissingTextRegion(text));
        }
        Ok(())
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Emit a `trace!` event with the disassembly of every committed instruction
    #[serde(default)]
    pub trace_instructions: bool,

    /// What to do when an unsupported word is fetched
    #[serde(default)]
    pub on_unsupported: UnsupportedPolicy,

    /// Upper bound on cycles executed by a run-to-halt request (`None` = unbounded)
    #[serde(default)]
    pub max_cycles: Option<u64>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            on_unsupported: UnsupportedPolicy::Halt,
            max_cycles: None,
        }
    }
}

/// Memory layout configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Program load base and initial program counter
    #[serde(default = "MemoryConfig::default_text_base")]
    pub text_base: u32,

    /// Disjoint memory regions
    #[serde(default = "defaults::regions")]
    pub regions: Vec<RegionConfig>,
}

impl MemoryConfig {
    /// Returns the default text base.
    fn default_text_base() -> u32 {
        defaults::TEXT_BASE_ADDR
    }

    /// Builds zeroed memory with the configured regions.
    ///
    /// Call `Config::validate` first; this method does not re-check the layout.
    pub fn build(&self) -> Memory {
        Memory::new(
            self.regions
                .iter()
                .map(|r| Region::new(r.name.clone(), r.begin, r.size))
                .collect(),
        )
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            text_base: defaults::TEXT_BASE_ADDR,
            regions: defaults::regions(),
        }
    }
}

/// One named memory region.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegionConfig {
    /// Display name
    pub name: String,
    /// First address covered
    pub begin: u32,
    /// Size in bytes
    pub size: u32,
}

impl RegionConfig {
    /// Last address covered, or `None` for an empty or wrapping region.
    pub fn end(&self) -> Option<u32> {
        self.size.checked_sub(1).and_then(|s| self.begin.checked_add(s))
    }
}
