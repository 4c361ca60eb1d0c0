//! Session schema definitions.

use osc_core::{OscResult, ParameterSet};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionDef {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub grid: GridDef,
    #[serde(default)]
    pub actions: Vec<ActionDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GridDef {
    #[serde(default = "default_samples")]
    pub samples: usize,
}

impl Default for GridDef {
    fn default() -> Self {
        Self {
            samples: default_samples(),
        }
    }
}

fn default_samples() -> usize {
    600
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionDef {
    Freeze { params: ParameterDef },
    Clear,
}

/// Oscillator parameters as written in a session file.
///
/// Omitted fields fall back to the explorer defaults
/// (`m=1, k=4, b=4, x0=1, v0=0, t_max=10`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ParameterDef {
    pub m_kg: f64,
    pub k_n_per_m: f64,
    pub b_kg_per_s: f64,
    pub x0_m: f64,
    pub v0_m_per_s: f64,
    pub t_max_s: f64,
}

impl Default for ParameterDef {
    fn default() -> Self {
        ParameterSet::default().into()
    }
}

impl From<ParameterSet> for ParameterDef {
    fn from(p: ParameterSet) -> Self {
        Self {
            m_kg: p.m,
            k_n_per_m: p.k,
            b_kg_per_s: p.b,
            x0_m: p.x0,
            v0_m_per_s: p.v0,
            t_max_s: p.t_max,
        }
    }
}

impl ParameterDef {
    pub fn to_params(&self) -> OscResult<ParameterSet> {
        ParameterSet::new(
            self.m_kg,
            self.k_n_per_m,
            self.b_kg_per_s,
            self.x0_m,
            self.v0_m_per_s,
            self.t_max_s,
        )
    }
}

impl SessionDef {
    /// Starter session: the three damping regimes of the default oscillator.
    pub fn example() -> Self {
        let freeze = |b: f64| ActionDef::Freeze {
            params: ParameterDef {
                b_kg_per_s: b,
                ..ParameterDef::default()
            },
        };
        Self {
            version: crate::LATEST_VERSION,
            name: "Damping regimes".to_string(),
            grid: GridDef::default(),
            actions: vec![freeze(1.0), freeze(4.0), freeze(10.0)],
        }
    }

    pub fn freeze_count(&self) -> usize {
        self.actions
            .iter()
            .filter(|a| matches!(a, ActionDef::Freeze { .. }))
            .count()
    }
}
