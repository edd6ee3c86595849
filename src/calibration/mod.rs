//! Calibration tables for table-driven probes
//!
//! A table is an ordered list of `(resistance, temperature)` breakpoints. The resistance column
//! must be strictly monotonic, either ascending (RTD) or descending (NTC). Tables that violate
//! this are rejected when the table is constructed.
mod pt100;
pub use pt100::PT100;

#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CalibrationError {
    #[error("Calibration table needs at least two points")]
    TooShort,
    #[error("Non-finite calibration point at index {0}")]
    NotFinite(usize),
    #[error("Calibration table not monotonic at index {0}")]
    NotMonotonic(usize),
}

/// A validated resistance to temperature table.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CalibrationTable {
    points: &'static [(f32, f32)],
    ascending: bool,
}

impl CalibrationTable {
    /// Validate a table of `(ohms, celsius)` breakpoints.
    pub fn new(points: &'static [(f32, f32)]) -> Result<Self, CalibrationError> {
        if points.len() < 2 {
            return Err(CalibrationError::TooShort);
        }

        if let Some(index) = points
            .iter()
            .position(|(r, t)| !r.is_finite() || !t.is_finite())
        {
            return Err(CalibrationError::NotFinite(index));
        }

        let ascending = points[1].0 > points[0].0;
        if let Some(index) = points.windows(2).position(|w| {
            if ascending {
                w[1].0 <= w[0].0
            } else {
                w[1].0 >= w[0].0
            }
        }) {
            return Err(CalibrationError::NotMonotonic(index + 1));
        }

        Ok(Self { points, ascending })
    }

    pub fn points(&self) -> &'static [(f32, f32)] {
        self.points
    }

    /// The covered resistance range `(min, max)`.
    pub fn range(&self) -> (f32, f32) {
        let (first, last) = self.ends();
        if self.ascending {
            (first.0, last.0)
        } else {
            (last.0, first.0)
        }
    }

    fn ends(&self) -> ((f32, f32), (f32, f32)) {
        (self.points[0], self.points[self.points.len() - 1])
    }

    /// Look up the temperature for a resistance.
    ///
    /// Values between breakpoints are linearly interpolated. Values outside the table are
    /// clamped to the nearest end of the table.
    pub fn interpolate(&self, ohms: f32) -> f32 {
        let (first, last) = self.ends();
        let (low, high) = if self.ascending {
            (first, last)
        } else {
            (last, first)
        };
        // Also catches NaN.
        if !(ohms > low.0) {
            return low.1;
        }
        if ohms >= high.0 {
            return high.1;
        }

        // Strictly inside the table: 1 <= i <= len - 1
        let i = self.points.partition_point(|&(r, _)| {
            if self.ascending {
                r <= ohms
            } else {
                r >= ohms
            }
        });
        let (r0, t0) = self.points[i - 1];
        if r0 == ohms {
            return t0;
        }
        let (r1, t1) = self.points[i];
        t1 + (t0 - t1) * (ohms - r1) / (r0 - r1)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::isclose;

    static NTC: [(f32, f32); 5] = [
        (32650.0, 0.0),
        (19900.0, 10.0),
        (12490.0, 20.0),
        (8057.0, 30.0),
        (5327.0, 40.0),
    ];

    #[test]
    fn rejects_bad_tables() {
        static SHORT: [(f32, f32); 1] = [(100.0, 0.0)];
        static KINKED: [(f32, f32); 4] =
            [(300.0, 0.0), (200.0, 1.0), (250.0, 2.0), (100.0, 3.0)];
        static FLAT: [(f32, f32); 3] = [(1.0, 0.0), (2.0, 1.0), (2.0, 2.0)];
        static NAN: [(f32, f32); 2] = [(1.0, 0.0), (f32::NAN, 1.0)];
        assert_eq!(
            CalibrationTable::new(&SHORT),
            Err(CalibrationError::TooShort)
        );
        assert_eq!(
            CalibrationTable::new(&KINKED),
            Err(CalibrationError::NotMonotonic(2))
        );
        assert_eq!(
            CalibrationTable::new(&FLAT),
            Err(CalibrationError::NotMonotonic(2))
        );
        assert_eq!(
            CalibrationTable::new(&NAN),
            Err(CalibrationError::NotFinite(1))
        );
    }

    #[test]
    fn pt100_is_valid() {
        let table = CalibrationTable::new(&PT100).unwrap();
        assert_eq!(table.range(), (100.0, 280.98));
    }

    #[test]
    fn breakpoints_are_exact() {
        for points in [&PT100[..], &NTC[..]] {
            let table = CalibrationTable::new(points).unwrap();
            for &(r, t) in points {
                assert_eq!(table.interpolate(r), t);
            }
        }
    }

    #[test]
    fn interpolation_is_bracketed() {
        for points in [&PT100[..], &NTC[..]] {
            let table = CalibrationTable::new(points).unwrap();
            for w in points.windows(2) {
                let (r0, t0) = w[0];
                let (r1, t1) = w[1];
                for k in 1..8 {
                    let r = r0 + (r1 - r0) * k as f32 / 8.0;
                    let t = table.interpolate(r);
                    assert!(t >= t0.min(t1) && t <= t0.max(t1), "{r} -> {t}");
                }
            }
        }
    }

    #[test]
    fn interpolation_midpoints() {
        let table = CalibrationTable::new(&PT100).unwrap();
        assert!(isclose(table.interpolate(100.195), 0.5, 0.0, 1e-3));
        assert!(isclose(table.interpolate(138.70), 99.5, 0.0, 1e-2));

        let table = CalibrationTable::new(&NTC).unwrap();
        assert!(isclose(table.interpolate(10273.5), 25.0, 0.0, 1e-3));
    }

    #[test]
    fn clamps_outside_range() {
        let table = CalibrationTable::new(&PT100).unwrap();
        assert_eq!(table.interpolate(50.0), 0.0);
        assert_eq!(table.interpolate(1e6), 500.0);
        assert_eq!(table.interpolate(f32::NAN), 0.0);

        let table = CalibrationTable::new(&NTC).unwrap();
        assert_eq!(table.interpolate(1e6), 0.0);
        assert_eq!(table.interpolate(10.0), 40.0);
    }
}
