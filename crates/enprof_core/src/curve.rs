//! The elementary reaction curve entity.
//!
//! An [`ElementaryCurve`] owns the sampled `(x, y)` profile for one reaction
//! step plus the display metadata a rendering layer needs. Energies are
//! validated and normalized relative to the initial state before any geometry
//! is computed, so a freshly constructed curve always starts at the origin.

use std::sync::atomic::{AtomicU64, Ordering};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::ProfileError;
use crate::profile::{potential_energy_points, ProfileConfig};
use crate::sampling::argmax;
use crate::traits::{Axis, Translate};

static NEXT_CURVE_ID: AtomicU64 = AtomicU64::new(1);

fn next_curve_id() -> CurveId {
    CurveId(NEXT_CURVE_ID.fetch_add(1, Ordering::Relaxed))
}

/// Identity of a curve instance.
///
/// Cloning a curve preserves its identity; [`ElementaryCurve::duplicate`]
/// issues a fresh one. Chains use the identity for membership checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurveId(u64);

/// A 2D coordinate on the reaction profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The five characteristic coordinates describing a curve's shape.
///
/// ```text
///            C
///            _
///           / \
/// A ___ B  /   \  D ___ E
///       \_/     \_
/// ```
///
/// `A`–`B` is the initial plateau, `C` the transition-state peak (equal to
/// `D` when the step has no barrier), `D`–`E` the final plateau. The x values
/// are monotonically non-decreasing from `A` to `E`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EigenPoints {
    pub a: Point2,
    pub b: Point2,
    pub c: Point2,
    pub d: Point2,
    pub e: Point2,
    pub has_barrier: bool,
}

/// Display metadata carried for the rendering layer; inert in the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveStyle {
    pub color: String,
    pub shadow_color: String,
    pub shadow_depth: u32,
    pub line_width: f64,
}

impl Default for CurveStyle {
    fn default() -> Self {
        Self {
            color: "#000000".to_owned(),
            shadow_color: "#595959".to_owned(),
            shadow_depth: 7,
            line_width: 3.0,
        }
    }
}

/// Energy profile curve for a single elementary reaction step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementaryCurve {
    #[serde(skip, default = "next_curve_id")]
    id: CurveId,
    /// State energies relative to the initial state (first entry is 0).
    energies: Vec<f64>,
    config: ProfileConfig,
    pub style: CurveStyle,
    x: Vec<f64>,
    y: Vec<f64>,
}

impl ElementaryCurve {
    /// Construct a curve from raw state energies with default settings.
    ///
    /// `energies` is `(E_is, E_ts, E_fs)` or the barrierless `(E_is, E_fs)`;
    /// absolute values are fine, they are normalized relative to the first
    /// entry before interpolation.
    pub fn new(energies: &[f64]) -> Result<Self, ProfileError> {
        Self::with_config(energies, ProfileConfig::default())
    }

    pub fn with_config(energies: &[f64], config: ProfileConfig) -> Result<Self, ProfileError> {
        validate_energies(energies)?;
        let energies = normalize_energies(energies);
        let (x, y) = potential_energy_points(&energies, &config)?;
        debug!("built {}-state curve with {} points", energies.len(), x.len());

        Ok(Self {
            id: next_curve_id(),
            energies,
            config,
            style: CurveStyle::default(),
            x,
            y,
        })
    }

    pub fn id(&self) -> CurveId {
        self.id
    }

    /// Normalized state energies; the first entry is always 0.
    pub fn energies(&self) -> &[f64] {
        &self.energies
    }

    pub fn config(&self) -> &ProfileConfig {
        &self.config
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn has_barrier(&self) -> bool {
        self.energies.len() == 3
    }

    /// An independent copy with a fresh identity, suitable for appending to a
    /// chain that already contains this curve.
    pub fn duplicate(&self) -> Self {
        let mut copy = self.clone();
        copy.id = next_curve_id();
        copy
    }

    /// The characteristic coordinates of the curve in its current position.
    ///
    /// The peak `C` is read back from the sampled maximum rather than
    /// re-solved; when several samples tie, the first one wins.
    pub fn eigen_points(&self) -> EigenPoints {
        let a = Point2::new(self.x[0], self.y[0]);
        let b = Point2::new(a.x + self.config.hline_length, a.y);

        let final_energy = *self.energies.last().expect("validated: 2 or 3 energies");
        let d = Point2::new(b.x + self.config.peak_width, b.y + final_energy);
        let e = Point2::new(d.x + self.config.hline_length, d.y);

        let has_barrier = self.has_barrier();
        let c = if has_barrier {
            let peak = argmax(&self.y).expect("a curve always has samples");
            Point2::new(self.x[peak], self.y[peak])
        } else {
            d
        };

        EigenPoints {
            a,
            b,
            c,
            d,
            e,
            has_barrier,
        }
    }

    /// Horizontal span of the sampled data.
    pub fn scale_x(&self) -> f64 {
        span(&self.x)
    }

    /// Vertical span of the sampled data.
    pub fn scale_y(&self) -> f64 {
        span(&self.y)
    }
}

impl Translate for ElementaryCurve {
    fn translate(&mut self, distance: f64, axis: Axis) -> &mut Self {
        let values = match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        };
        for v in values.iter_mut() {
            *v += distance;
        }
        self
    }
}

fn span(values: &[f64]) -> f64 {
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    max - min
}

/// Reject energy tuples that cannot describe an elementary step.
fn validate_energies(energies: &[f64]) -> Result<(), ProfileError> {
    match *energies {
        [e_is, e_ts, e_fs] if e_ts > e_is.max(e_fs) => Ok(()),
        [_, _, _] => Err(ProfileError::AbnormalEnergies(energies.to_vec())),
        [_, _] => Ok(()),
        _ => Err(ProfileError::InvalidEnergyCount(energies.len())),
    }
}

/// Shift all energies so the initial state sits at zero. Idempotent.
fn normalize_energies(energies: &[f64]) -> Vec<f64> {
    let reference = energies[0];
    energies.iter().map(|e| e - reference).collect()
}
