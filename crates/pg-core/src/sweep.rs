use crate::error::{PgError, PgResult};

/// Reynolds numbers swept by default (what the batch actually runs).
pub const DEFAULT_REYNOLDS: [f64; 3] = [1.0e4, 5.0e4, 1.0e5];

/// Larger documented preset for full-scale rotor polars, selectable from
/// the run configuration.
pub const EXTENDED_REYNOLDS: [f64; 7] =
    [1.0e5, 5.0e5, 1.0e6, 1.5e6, 2.0e6, 5.0e6, 1.0e7];

/// Viscous-solution iteration cap passed to the solver.
pub const DEFAULT_ITER_LIMIT: u32 = 5000;

/// Angle-of-attack sweep definition, degrees.
///
/// Points are generated on the half-open interval `[start, end)`: the
/// default `-20..25 step 0.5` yields `-20.0 ..= 24.5` (90 points).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AoaSweep {
    pub start_deg: f64,
    pub end_deg: f64,
    pub step_deg: f64,
}

impl Default for AoaSweep {
    fn default() -> Self {
        Self {
            start_deg: -20.0,
            end_deg: 25.0,
            step_deg: 0.5,
        }
    }
}

impl AoaSweep {
    pub fn new(start_deg: f64, end_deg: f64, step_deg: f64) -> PgResult<Self> {
        for (what, v) in [
            ("AOA sweep start", start_deg),
            ("AOA sweep end", end_deg),
            ("AOA sweep step", step_deg),
        ] {
            if !v.is_finite() {
                return Err(PgError::NonFinite { what, value: v });
            }
        }
        if step_deg <= 0.0 {
            return Err(PgError::InvalidArg {
                what: "AOA sweep step must be positive",
            });
        }
        if start_deg >= end_deg {
            return Err(PgError::InvalidArg {
                what: "AOA sweep start must be below end",
            });
        }
        Ok(Self {
            start_deg,
            end_deg,
            step_deg,
        })
    }

    /// Materialize the sweep points.
    pub fn points(&self) -> Vec<f64> {
        let mut out = Vec::new();
        let mut i = 0u32;
        loop {
            let alpha = self.start_deg + f64::from(i) * self.step_deg;
            if alpha >= self.end_deg {
                break;
            }
            out.push(alpha);
            i += 1;
        }
        out
    }
}

/// Full parameter set for one batch: which Reynolds numbers to run and the
/// AOA sweep every one of them shares. Built once, read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepParameters {
    pub reynolds: Vec<f64>,
    pub aoa: AoaSweep,
    pub iter_limit: u32,
}

impl Default for SweepParameters {
    fn default() -> Self {
        Self {
            reynolds: DEFAULT_REYNOLDS.to_vec(),
            aoa: AoaSweep::default(),
            iter_limit: DEFAULT_ITER_LIMIT,
        }
    }
}

impl SweepParameters {
    pub fn new(reynolds: Vec<f64>, aoa: AoaSweep, iter_limit: u32) -> PgResult<Self> {
        if reynolds.is_empty() {
            return Err(PgError::InvalidArg {
                what: "Reynolds list is empty",
            });
        }
        for &re in &reynolds {
            if !re.is_finite() {
                return Err(PgError::NonFinite {
                    what: "Reynolds number",
                    value: re,
                });
            }
            if re <= 0.0 {
                return Err(PgError::InvalidArg {
                    what: "Reynolds number must be positive",
                });
            }
        }
        if iter_limit == 0 {
            return Err(PgError::InvalidArg {
                what: "iteration limit must be positive",
            });
        }
        Ok(Self {
            reynolds,
            aoa,
            iter_limit,
        })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn points_stay_in_half_open_range(
            start in -90.0_f64..0.0,
            span in 0.5_f64..90.0,
            step in 0.1_f64..5.0,
        ) {
            let end = start + span;
            let sweep = AoaSweep::new(start, end, step).unwrap();
            let pts = sweep.points();
            prop_assert!(!pts.is_empty());
            prop_assert_eq!(pts[0], start);
            for &p in &pts {
                prop_assert!(p >= start && p < end);
            }
            for w in pts.windows(2) {
                prop_assert!(w[1] > w[0]);
                prop_assert!((w[1] - w[0] - step).abs() < 1e-9);
            }
        }
    }
}
