//! Sampled point generation for elementary reaction energy profiles.
//!
//! A profile is three segments of `n` points each: a flat initial plateau,
//! the interpolated transition segment, and a flat final plateau. The
//! transition segment is a real barrier for three-state energies and a
//! monotonic rise or fall for the barrierless two-state case.

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::ProfileError;
use crate::interpolate::{locate_peak, quadratic_connect, spline_blend, BarrierShape};
use crate::sampling::linspace;

/// Interpolation strategy for the barrier segment.
///
/// The two strategies yield visibly different shapes for the same energies;
/// both are kept and neither is treated as the more correct one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpKind {
    /// Fix the peak position at the interval midpoint and blend two
    /// half-parabolas with an interpolating spline. The default.
    Spline,
    /// Solve analytically for the peak position of a vertex-form parabola.
    Quadratic,
}

impl Default for InterpKind {
    fn default() -> Self {
        InterpKind::Spline
    }
}

impl FromStr for InterpKind {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spline" => Ok(InterpKind::Spline),
            "quadratic" => Ok(InterpKind::Quadratic),
            other => Err(ProfileError::InvalidInterpKind(other.to_owned())),
        }
    }
}

impl fmt::Display for InterpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterpKind::Spline => f.write_str("spline"),
            InterpKind::Quadratic => f.write_str("quadratic"),
        }
    }
}

/// Settings controlling profile sampling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Sample count per segment; the generated profile has `3 * n` points.
    pub n: usize,
    /// Length of the flat plateau on either side of the barrier.
    pub hline_length: f64,
    /// Horizontal extent of the barrier segment.
    pub peak_width: f64,
    pub kind: InterpKind,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            n: 100,
            hline_length: 1.0,
            peak_width: 1.0,
            kind: InterpKind::Spline,
        }
    }
}

/// Generate the full `(x, y)` point sequence for one elementary step.
///
/// `energies` holds either `(E_is, E_ts, E_fs)` or the barrierless
/// `(E_is, E_fs)`. The x values are non-decreasing, the first and last `n`
/// y values are exactly flat, and the transition segment always occupies the
/// middle third.
pub fn potential_energy_points(
    energies: &[f64],
    config: &ProfileConfig,
) -> Result<(Vec<f64>, Vec<f64>), ProfileError> {
    if config.n < 2 {
        return Err(ProfileError::TooFewSamples(config.n));
    }

    match *energies {
        [e_is, e_ts, e_fs] => barrier_points(e_is, e_ts, e_fs, config),
        [e_is, e_fs] => barrierless_points(e_is, e_fs, config),
        _ => Err(ProfileError::InvalidEnergyCount(energies.len())),
    }
}

/// Three-state case: interpolate a genuine barrier between the plateaus.
fn barrier_points(
    e_is: f64,
    e_ts: f64,
    e_fs: f64,
    config: &ProfileConfig,
) -> Result<(Vec<f64>, Vec<f64>), ProfileError> {
    if !(e_ts > e_is.max(e_fs)) {
        return Err(ProfileError::AbnormalEnergies(vec![e_is, e_ts, e_fs]));
    }

    let (x2, shape) = match config.kind {
        InterpKind::Spline => {
            let (x2, spline) = spline_blend(0.0, e_is, config.peak_width, e_fs, e_ts, 0.5)?;
            (x2, BarrierShape::Spline(spline))
        }
        InterpKind::Quadratic => {
            let (x2, parabola) = locate_peak(0.0, e_is, config.peak_width, e_fs, e_ts)?;
            (x2, BarrierShape::Quadratic(parabola))
        }
    };
    debug!(
        "{} barrier for ({e_is}, {e_ts}, {e_fs}) peaks at x = {:.6}",
        config.kind,
        x2 + config.hline_length
    );

    Ok(assemble(e_is, e_fs, config, |x| shape.eval(x)))
}

/// Two-state case: no transition state exists, so the transition segment is
/// the vertex parabola with a horizontal tangent at the higher-energy
/// endpoint. This gives a gently curved monotonic rise or fall between the
/// plateaus without synthesizing a fake barrier point.
fn barrierless_points(
    e_is: f64,
    e_fs: f64,
    config: &ProfileConfig,
) -> Result<(Vec<f64>, Vec<f64>), ProfileError> {
    let w = config.peak_width;
    let rise = if e_is < e_fs {
        quadratic_connect(0.0, e_is, w, e_fs)?
    } else {
        quadratic_connect(w, e_fs, 0.0, e_is)?
    };

    Ok(assemble(e_is, e_fs, config, |x| rise.eval(x)))
}

/// Stitch plateau, transition and plateau segments in coordinate order.
fn assemble(
    e_is: f64,
    e_fs: f64,
    config: &ProfileConfig,
    transition: impl Fn(f64) -> f64,
) -> (Vec<f64>, Vec<f64>) {
    let n = config.n;
    let hline = config.hline_length;
    let width = config.peak_width;

    let mut x = Vec::with_capacity(3 * n);
    let mut y = Vec::with_capacity(3 * n);

    // Initial plateau.
    x.extend(linspace(0.0, hline, n));
    y.extend(std::iter::repeat(e_is).take(n));

    // Transition segment, translated past the initial plateau.
    for xb in linspace(0.0, width, n) {
        x.push(xb + hline);
        y.push(transition(xb));
    }

    // Final plateau.
    x.extend(linspace(hline + width, 2.0 * hline + width, n));
    y.extend(std::iter::repeat(e_fs).take(n));

    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn interp_kind_round_trips_through_strings() {
        assert_eq!("spline".parse::<InterpKind>().unwrap(), InterpKind::Spline);
        assert_eq!(
            "quadratic".parse::<InterpKind>().unwrap(),
            InterpKind::Quadratic
        );

        let err = "abc".parse::<InterpKind>().unwrap_err();
        assert_eq!(err, ProfileError::InvalidInterpKind("abc".to_owned()));
    }

    #[test]
    fn three_state_profile_matches_known_shape() {
        let config = ProfileConfig {
            n: 2,
            ..ProfileConfig::default()
        };
        let (x, y) = potential_energy_points(&[0.0, 1.2, 0.7], &config).unwrap();

        assert_eq!(x, vec![0.0, 1.0, 1.0, 2.0, 2.0, 3.0]);

        let expected = [0.0, 0.0, 0.0, 0.7, 0.7, 0.7];
        assert_eq!(y.len(), expected.len());
        for (ret, exp) in y.iter().zip(expected.iter()) {
            assert_relative_eq!(ret, exp, epsilon = 1e-9);
        }
    }

    #[test]
    fn plateaus_are_exactly_flat() {
        for kind in [InterpKind::Spline, InterpKind::Quadratic] {
            let config = ProfileConfig {
                n: 25,
                kind,
                ..ProfileConfig::default()
            };
            let (_, y) = potential_energy_points(&[0.1, 1.4, 0.9], &config).unwrap();

            assert!(y[..25].iter().all(|&v| v == 0.1));
            assert!(y[50..].iter().all(|&v| v == 0.9));
        }
    }

    #[test]
    fn peak_lands_in_the_middle_third() {
        for kind in [InterpKind::Spline, InterpKind::Quadratic] {
            let config = ProfileConfig {
                kind,
                ..ProfileConfig::default()
            };
            let (_, y) = potential_energy_points(&[0.0, 1.2, 0.8], &config).unwrap();

            let max = y.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            let idx = y.iter().position(|&v| v == max).unwrap();
            assert!((100..200).contains(&idx), "peak index {idx} ({kind})");
            assert!(max > y[0].max(*y.last().unwrap()));
        }
    }

    #[test]
    fn barrierless_profile_is_monotonic_and_bounded() {
        let config = ProfileConfig {
            n: 2,
            ..ProfileConfig::default()
        };
        let (x, y) = potential_energy_points(&[0.0, 0.8], &config).unwrap();

        assert_eq!(x, vec![0.0, 1.0, 1.0, 2.0, 2.0, 3.0]);
        assert!(y.windows(2).all(|w| w[0] <= w[1]));
        assert!(y.iter().all(|&v| (0.0..=0.8).contains(&v)));
        assert_eq!(y[0], 0.0);
        assert_eq!(*y.last().unwrap(), 0.8);
    }

    #[test]
    fn barrierless_descending_profile_stays_bounded() {
        let (_, y) =
            potential_energy_points(&[0.5, -0.3], &ProfileConfig::default()).unwrap();

        assert!(y.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(y[0], 0.5);
        assert_eq!(*y.last().unwrap(), -0.3);
    }

    #[test]
    fn rejects_non_dominant_transition_state() {
        let err = potential_energy_points(&[0.0, 1.2, 1.5], &ProfileConfig::default())
            .unwrap_err();
        assert_eq!(err, ProfileError::AbnormalEnergies(vec![0.0, 1.2, 1.5]));
    }

    #[test]
    fn rejects_bad_shapes() {
        let config = ProfileConfig::default();
        assert_eq!(
            potential_energy_points(&[0.0], &config).unwrap_err(),
            ProfileError::InvalidEnergyCount(1)
        );
        assert_eq!(
            potential_energy_points(&[0.0, 1.0, 0.5, 0.2], &config).unwrap_err(),
            ProfileError::InvalidEnergyCount(4)
        );

        let sparse = ProfileConfig {
            n: 1,
            ..ProfileConfig::default()
        };
        assert_eq!(
            potential_energy_points(&[0.0, 0.8], &sparse).unwrap_err(),
            ProfileError::TooFewSamples(1)
        );
    }

    #[test]
    fn output_is_always_three_segments() {
        for energies in [vec![0.0, 1.2, 0.7], vec![0.0, 0.8]] {
            let config = ProfileConfig {
                n: 17,
                ..ProfileConfig::default()
            };
            let (x, y) = potential_energy_points(&energies, &config).unwrap();
            assert_eq!(x.len(), 51);
            assert_eq!(y.len(), 51);
            assert!(x.windows(2).all(|w| w[0] <= w[1]));
        }
    }
}
