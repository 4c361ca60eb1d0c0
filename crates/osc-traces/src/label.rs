//! Comparison labels for frozen traces.
//!
//! A label names the damping regime and discriminant of one parameter set
//! and lists `b, m, k, x0, v0`, emphasizing the ones that moved since the
//! previous trace. Rendering is plain text with `**markdown**` emphasis via
//! `Display`, or `<b>html</b>` via [`TraceLabel::to_html`].

use osc_core::{ParamKey, ParameterSet, Real, Tolerances, nearly_equal};
use osc_solver::DampingRegime;
use osc_solver::regime::{classify, displayed_discriminant};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelTerm {
    pub key: ParamKey,
    pub value: Real,
    pub emphasized: bool,
}

impl fmt::Display for LabelTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.emphasized {
            write!(f, "**{}={:.2}**", self.key, self.value)
        } else {
            write!(f, "{}={:.2}", self.key, self.value)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TraceLabel {
    pub regime: DampingRegime,
    pub discriminant: Real,
    pub terms: Vec<LabelTerm>,
}

impl TraceLabel {
    /// Keys rendered with emphasis, in label order.
    pub fn changed(&self) -> impl Iterator<Item = ParamKey> + '_ {
        self.terms.iter().filter(|t| t.emphasized).map(|t| t.key)
    }

    pub fn to_html(&self) -> String {
        let terms: Vec<String> = self
            .terms
            .iter()
            .map(|t| {
                if t.emphasized {
                    format!("<b>{}={:.2}</b>", t.key, t.value)
                } else {
                    format!("{}={:.2}", t.key, t.value)
                }
            })
            .collect();
        format!(
            "{} (Δ={:.2}) | {}",
            self.regime,
            self.discriminant,
            terms.join(", ")
        )
    }
}

impl fmt::Display for TraceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Δ={:.2}) | ", self.regime, self.discriminant)?;
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{term}")?;
        }
        Ok(())
    }
}

/// Parameters of `current` that differ from `previous` beyond
/// [`Tolerances::parameter_change`]. Empty when there is no previous set.
pub fn changed_params(current: &ParameterSet, previous: Option<&ParameterSet>) -> Vec<ParamKey> {
    let Some(previous) = previous else {
        return Vec::new();
    };
    ParamKey::LABEL_ORDER
        .into_iter()
        .filter(|&key| {
            !nearly_equal(
                previous.get(key),
                current.get(key),
                Tolerances::parameter_change(),
            )
        })
        .collect()
}

/// Label for `current`, emphasizing what changed relative to `previous`.
pub fn diff_label(current: &ParameterSet, previous: Option<&ParameterSet>) -> TraceLabel {
    let regime = classify(current);
    let changed = changed_params(current, previous);

    TraceLabel {
        regime,
        discriminant: displayed_discriminant(current, regime),
        terms: ParamKey::LABEL_ORDER
            .into_iter()
            .map(|key| LabelTerm {
                key,
                value: current.get(key),
                emphasized: changed.contains(&key),
            })
            .collect(),
    }
}
