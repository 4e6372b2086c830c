// Copyright 2025 the plotez Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear scales and data extents.

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Creates a scale whose domain is widened to the enclosing nice tick values.
    pub fn nice(domain: (f64, f64), range: (f64, f64), tick_count: usize) -> Self {
        let ticks = nice_ticks(domain.0, domain.1, tick_count);
        match (ticks.first(), ticks.last()) {
            (Some(&lo), Some(&hi)) if ticks.len() >= 2 => Self::new((lo, hi), range),
            _ => Self::new(pad_degenerate(domain), range),
        }
    }

    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Returns the domain.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Returns the range.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Returns tick values for the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain.0, self.domain.1, count)
    }
}

/// A single value gets a unit-wide domain around it.
fn pad_degenerate((lo, hi): (f64, f64)) -> (f64, f64) {
    if lo == hi { (lo - 0.5, hi + 0.5) } else { (lo, hi) }
}

/// Tick values covering `[min, max]` at a 1/2/5 × 10ⁿ step.
pub fn nice_ticks(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    if min == max {
        return vec![min];
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }
    let span = max - min;
    let step = nice_step(span / count.max(1) as f64);
    if step == 0.0 {
        return vec![min, max];
    }

    let start = (min / step).floor() * step;
    let stop = (max / step).ceil() * step;

    let n_f = ((stop - start) / step).round();
    let n = if n_f.is_finite() && n_f >= 0.0 {
        let n_f = n_f.min(10_000.0);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "guarded by finite/non-negative checks and capped at 10k"
        )]
        {
            n_f as u64
        }
    } else {
        0
    };
    (0..=n).map(|i| start + step * i as f64).collect()
}

fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let base = 10_f64.powf(power);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}

/// Infers a `(min, max)` extent over several sequences.
///
/// Non-finite values are skipped with a warning. Returns `None` if no finite values are
/// present.
pub fn infer_domain<'a>(columns: impl IntoIterator<Item = &'a [f64]>) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut skipped = 0_usize;
    for column in columns {
        for &v in column {
            if !v.is_finite() {
                skipped += 1;
                continue;
            }
            min = min.min(v);
            max = max.max(v);
        }
    }
    if skipped > 0 {
        log::warn!("skipped {skipped} non-finite value(s) while computing data extents");
    }
    if min.is_finite() && max.is_finite() {
        Some((min, max))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn map_is_linear_and_handles_flat_domains() {
        let s = ScaleLinear::new((0.0, 10.0), (100.0, 0.0));
        assert!(close(s.map(0.0), 100.0), "start");
        assert!(close(s.map(5.0), 50.0), "middle");
        assert!(close(s.map(10.0), 0.0), "end");
        let flat = ScaleLinear::new((3.0, 3.0), (0.0, 1.0));
        assert!(close(flat.map(7.0), 0.0), "flat domain maps to range start");
    }

    #[test]
    fn nice_widens_to_tick_bounds() {
        let s = ScaleLinear::nice((0.3, 9.2), (0.0, 1.0), 5);
        assert_eq!(s.domain(), (0.0, 10.0), "rounded out");
        assert_eq!(s.ticks(5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0], "ticks");

        let single = ScaleLinear::nice((2.0, 2.0), (0.0, 1.0), 5);
        assert_eq!(single.domain(), (1.5, 2.5), "padded");
    }

    #[test]
    fn extents_skip_non_finite_values() {
        let a = [1.0, f64::NAN, 4.0];
        let b = [-2.0, f64::INFINITY];
        assert_eq!(infer_domain([&a[..], &b[..]]), Some((-2.0, 4.0)), "finite extent");
        assert_eq!(infer_domain([&[f64::NAN][..]]), None, "nothing finite");
    }
}
