//! Multi-step reaction pathways.
//!
//! A [`CurveChain`] stitches elementary curves end to end: every curve after
//! the first is translated by the previous curve's eigen point E, so each
//! step starts exactly where the one before it ended. The chain owns its
//! curves outright; once added they can only be reached through the chain.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::slice;

use anyhow::Context;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::curve::ElementaryCurve;
use crate::error::ProfileError;
use crate::traits::{Axis, Translate};

/// An ordered sequence of elementary curves forming one continuous profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CurveChain {
    curves: Vec<ElementaryCurve>,
}

impl CurveChain {
    /// Build a chain, translating every curve into position.
    ///
    /// Fails if the same curve instance appears twice; use
    /// [`ElementaryCurve::duplicate`] to repeat a shape.
    pub fn new(curves: Vec<ElementaryCurve>) -> Result<Self, ProfileError> {
        for (i, curve) in curves.iter().enumerate() {
            if curves[..i].iter().any(|prior| prior.id() == curve.id()) {
                return Err(ProfileError::DuplicateCurve);
            }
        }

        let mut chain = Self { curves };
        chain.expand();
        Ok(chain)
    }

    /// One-time expansion pass: shift each curve by its predecessor's E.
    fn expand(&mut self) {
        for i in 1..self.curves.len() {
            let e = self.curves[i - 1].eigen_points().e;
            self.curves[i].translate(e.x, Axis::X).translate(e.y, Axis::Y);
        }
        debug!("expanded chain of {} curves", self.curves.len());
    }

    /// Append a curve, translating it to start at the chain's current end.
    pub fn append(&mut self, mut curve: ElementaryCurve) -> Result<(), ProfileError> {
        if self.contains(&curve) {
            return Err(ProfileError::DuplicateCurve);
        }

        if let Some(last) = self.curves.last() {
            let e = last.eigen_points().e;
            curve.translate(e.x, Axis::X).translate(e.y, Axis::Y);
        }
        self.curves.push(curve);
        Ok(())
    }

    /// Whether this exact curve instance is part of the chain.
    pub fn contains(&self, curve: &ElementaryCurve) -> bool {
        self.curves.iter().any(|c| c.id() == curve.id())
    }

    pub fn curves(&self) -> &[ElementaryCurve] {
        &self.curves
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Non-consuming iteration in chain order.
    pub fn iter(&self) -> slice::Iter<'_, ElementaryCurve> {
        self.curves.iter()
    }

    /// All x values, concatenated in chain order.
    pub fn x(&self) -> Vec<f64> {
        self.curves.iter().flat_map(|c| c.x().iter().copied()).collect()
    }

    /// All y values, concatenated in chain order.
    pub fn y(&self) -> Vec<f64> {
        self.curves.iter().flat_map(|c| c.y().iter().copied()).collect()
    }

    /// Write the concatenated profile as space-delimited `x y` rows, one
    /// pair per line. Lines starting with `#` are reserved for comments the
    /// caller may prepend.
    pub fn export<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        let mut out = BufWriter::new(file);

        for (x, y) in self.x().iter().zip(self.y().iter()) {
            writeln!(out, "{x} {y}")
                .with_context(|| format!("failed to write to {}", path.display()))?;
        }
        out.flush()
            .with_context(|| format!("failed to flush {}", path.display()))?;

        Ok(())
    }
}

impl Translate for CurveChain {
    fn translate(&mut self, distance: f64, axis: Axis) -> &mut Self {
        for curve in &mut self.curves {
            curve.translate(distance, axis);
        }
        self
    }
}

impl<'a> IntoIterator for &'a CurveChain {
    type Item = &'a ElementaryCurve;
    type IntoIter = slice::Iter<'a, ElementaryCurve>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::Point2;
    use crate::profile::ProfileConfig;
    use approx::assert_relative_eq;

    fn curve(energies: &[f64]) -> ElementaryCurve {
        ElementaryCurve::new(energies).unwrap()
    }

    fn sparse(energies: &[f64]) -> ElementaryCurve {
        ElementaryCurve::with_config(
            energies,
            ProfileConfig {
                n: 2,
                ..ProfileConfig::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn construction_translates_later_curves() {
        let chain = CurveChain::new(vec![curve(&[0.0, 1.2, 0.7]), curve(&[0.0, 1.0, 0.5])]).unwrap();

        let second = chain.curves()[1].eigen_points();
        assert_relative_eq!(second.a.x, 3.0, epsilon = 1e-12);
        assert_relative_eq!(second.a.y, 0.7, epsilon = 1e-12);
    }

    #[test]
    fn adjacent_curves_share_their_junction() {
        let chain = CurveChain::new(vec![
            curve(&[0.0, 1.2, 0.7]),
            curve(&[0.0, 1.0, 0.5]),
            curve(&[0.0, 0.3]),
        ])
        .unwrap();

        for pair in chain.curves().windows(2) {
            assert_eq!(pair[0].eigen_points().e, pair[1].eigen_points().a);
        }
    }

    #[test]
    fn translate_moves_every_curve() {
        let mut chain =
            CurveChain::new(vec![curve(&[0.0, 1.2, 0.6]), curve(&[0.0, 1.0, 0.8])]).unwrap();

        chain.translate(1.0, Axis::X).translate(1.0, Axis::Y);

        assert_eq!(chain.curves()[0].eigen_points().a, Point2::new(1.0, 1.0));
        let second = chain.curves()[1].eigen_points().a;
        assert_relative_eq!(second.x, 4.0, epsilon = 1e-12);
        assert_relative_eq!(second.y, 1.6, epsilon = 1e-12);
    }

    #[test]
    fn append_translates_and_rejects_duplicates() {
        let first = curve(&[0.0, 1.2, 0.7]);
        let second = curve(&[0.0, 1.0, 0.5]);
        let second_again = second.clone();

        let mut chain = CurveChain::new(vec![first]).unwrap();
        chain.append(second).unwrap();

        let appended = chain.curves()[1].eigen_points();
        assert_relative_eq!(appended.a.x, 3.0, epsilon = 1e-12);
        assert_relative_eq!(appended.a.y, 0.7, epsilon = 1e-12);

        // A clone is the same curve instance; only a duplicate may repeat.
        assert_eq!(
            chain.append(second_again.clone()).unwrap_err(),
            ProfileError::DuplicateCurve
        );
        chain.append(second_again.duplicate()).unwrap();
        assert_eq!(chain.len(), 3);
    }

    #[test]
    fn construction_rejects_duplicate_instances() {
        let c = curve(&[0.0, 1.2, 0.7]);
        let err = CurveChain::new(vec![c.clone(), c]).unwrap_err();
        assert_eq!(err, ProfileError::DuplicateCurve);
    }

    #[test]
    fn membership_follows_identity() {
        let inside = curve(&[0.0, 1.2, 0.7]);
        let outside = curve(&[0.0, 1.0, 0.5]);
        let marker = inside.clone();

        let chain = CurveChain::new(vec![inside]).unwrap();
        assert!(chain.contains(&marker));
        assert!(!chain.contains(&outside));
    }

    #[test]
    fn iteration_is_repeatable() {
        let chain =
            CurveChain::new(vec![curve(&[0.0, 1.2, 0.7]), curve(&[0.0, 1.0, 0.5])]).unwrap();

        assert_eq!(chain.iter().count(), 2);
        // A second traversal starts over.
        assert_eq!(chain.iter().count(), 2);
        for c in &chain {
            assert_eq!(c.x().len(), c.y().len());
        }
    }

    #[test]
    fn concatenated_data_follows_chain_order() {
        let chain = CurveChain::new(vec![sparse(&[0.0, 1.2, 0.5]), sparse(&[0.0, 0.8])]).unwrap();

        assert_eq!(
            chain.x(),
            vec![0.0, 1.0, 1.0, 2.0, 2.0, 3.0, 3.0, 4.0, 4.0, 5.0, 5.0, 6.0]
        );

        let expected_y = [0.0, 0.0, 0.0, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 1.3, 1.3, 1.3];
        let y = chain.y();
        assert_eq!(y.len(), expected_y.len());
        for (ret, exp) in y.iter().zip(expected_y.iter()) {
            assert_relative_eq!(ret, exp, epsilon = 1e-9);
        }
    }

    #[test]
    fn export_writes_two_column_rows() {
        let chain = CurveChain::new(vec![sparse(&[0.0, 0.8])]).unwrap();
        let path = std::env::temp_dir().join("enprof_chain_export_test.dat");

        chain.export(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let rows: Vec<&str> = contents.lines().collect();
        assert_eq!(rows.len(), 6);
        for row in &rows {
            let fields: Vec<&str> = row.split(' ').collect();
            assert_eq!(fields.len(), 2);
            fields.iter().for_each(|f| {
                f.parse::<f64>().unwrap();
            });
        }

        std::fs::remove_file(&path).ok();
    }
}
