//! Run-configuration schema definitions.

use pg_core::{AoaSweep, SweepParameters, DEFAULT_REYNOLDS, EXTENDED_REYNOLDS};
use serde::{Deserialize, Serialize};

use crate::ConfigResult;

/// Top-level run configuration. Every field is defaulted, so an absent or
/// empty file reproduces the stock batch exactly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunConfig {
    #[serde(default)]
    pub reynolds: ReynoldsDef,
    #[serde(default)]
    pub aoa: AoaDef,
    #[serde(default = "default_iterations")]
    pub iterations: u32,
    #[serde(default)]
    pub solver: SolverDef,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            reynolds: ReynoldsDef::default(),
            aoa: AoaDef::default(),
            iterations: default_iterations(),
            solver: SolverDef::default(),
        }
    }
}

/// Reynolds selection: a named preset or an explicit ordered list.
///
/// ```yaml
/// reynolds: extended        # preset
/// reynolds: [1.0e4, 5.0e4]  # explicit
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ReynoldsDef {
    Preset(ReynoldsPreset),
    Values(Vec<f64>),
}

impl Default for ReynoldsDef {
    fn default() -> Self {
        Self::Preset(ReynoldsPreset::Default)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReynoldsPreset {
    /// The stock three-value list (1e4, 5e4, 1e5).
    Default,
    /// Seven-value full-scale list (1e5 .. 1e7).
    Extended,
}

/// AOA sweep bounds in degrees, half-open `[start, end)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AoaDef {
    #[serde(default = "default_aoa_start")]
    pub start_deg: f64,
    #[serde(default = "default_aoa_end")]
    pub end_deg: f64,
    #[serde(default = "default_aoa_step")]
    pub step_deg: f64,
}

impl Default for AoaDef {
    fn default() -> Self {
        Self {
            start_deg: default_aoa_start(),
            end_deg: default_aoa_end(),
            step_deg: default_aoa_step(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SolverDef {
    /// Name or path of the XFOIL executable.
    #[serde(default = "default_binary")]
    pub binary: String,
}

impl Default for SolverDef {
    fn default() -> Self {
        Self {
            binary: default_binary(),
        }
    }
}

fn default_iterations() -> u32 {
    pg_core::sweep::DEFAULT_ITER_LIMIT
}

fn default_aoa_start() -> f64 {
    AoaSweep::default().start_deg
}

fn default_aoa_end() -> f64 {
    AoaSweep::default().end_deg
}

fn default_aoa_step() -> f64 {
    AoaSweep::default().step_deg
}

fn default_binary() -> String {
    "xfoil".to_string()
}

impl RunConfig {
    /// The ordered Reynolds list this configuration selects.
    pub fn resolved_reynolds(&self) -> Vec<f64> {
        match &self.reynolds {
            ReynoldsDef::Preset(ReynoldsPreset::Default) => DEFAULT_REYNOLDS.to_vec(),
            ReynoldsDef::Preset(ReynoldsPreset::Extended) => EXTENDED_REYNOLDS.to_vec(),
            ReynoldsDef::Values(values) => values.clone(),
        }
    }

    /// Build the validated sweep parameters for the batch.
    pub fn sweep_parameters(&self) -> ConfigResult<SweepParameters> {
        let aoa = AoaSweep::new(self.aoa.start_deg, self.aoa.end_deg, self.aoa.step_deg)?;
        Ok(SweepParameters::new(
            self.resolved_reynolds(),
            aoa,
            self.iterations,
        )?)
    }
}
