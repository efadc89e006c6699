//! # IS 456:2000 Code Tables
//!
//! Design shear strength of concrete (Table 19) and the rounding rules used
//! throughout footing design.
//!
//! ## Overview
//!
//! Table 19 tabulates the permissible shear stress τc (N/mm²) against
//! percentage of tension steel for each concrete grade:
//!
//! ```text
//! p% :   0.15   0.25   0.50   0.75   1.00
//! M15:   0.28   0.36   0.44   0.52   0.60
//! M20:   0.29   0.36   0.43   0.50   0.57
//! M25:   0.29   0.36   0.42   0.49   0.56
//! M30:   0.30   0.36   0.42   0.48   0.54
//! M35:   0.30   0.35   0.41   0.47   0.53
//! M40:   0.31   0.35   0.40   0.46   0.52
//! ```
//!
//! Queries interpolate linearly in two stages: first along the steel
//! percentage within each bracketing grade row, then across the two grades.
//! Grades outside the tabulated range clamp to the edge rows rather than
//! failing.
//!
//! A steel percentage outside the breakpoint range falls back to the first
//! entry of the lower grade row. Above 1.00 % this returns the *lowest*
//! coefficient instead of extrapolating toward the highest; that matches the
//! tool this engine must agree with numerically and is kept as-is.
//!
//! ## Reference
//!
//! IS 456:2000, Table 19 and clause 40.2.1.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

// ============================================================================
// IS 456 Code Section References
// ============================================================================

/// IS 456:2000 clause references for design checks and code tables.
///
/// These constants provide traceable references for report output.
pub mod is_ref {
    /// Design shear strength of concrete τc
    pub const SHEAR_TABLE: &str = "IS 456 Table 19";
    /// One-way shear critical section
    pub const ONE_WAY_SHEAR: &str = "IS 456 34.2.4.1(a)";
    /// Punching shear critical section
    pub const PUNCHING_SHEAR: &str = "IS 456 34.2.4.1(b)";
    /// Limit state of collapse: flexure
    pub const FLEXURE: &str = "IS 456 Annex G";
    /// Partial safety factor for loads
    pub const LOAD_FACTOR: &str = "IS 456 Table 18";
}

/// Steel percentage breakpoints of Table 19
pub const STEEL_PERCENT_BREAKPOINTS: [f64; 5] = [0.15, 0.25, 0.50, 0.75, 1.00];

/// Table 19 rows: concrete grade (N/mm²) -> τc at each breakpoint (N/mm²).
///
/// Initialized once at first use; read-only thereafter, safe for concurrent
/// access.
static TAU_C_TABLE: Lazy<BTreeMap<u32, [f64; 5]>> = Lazy::new(|| {
    BTreeMap::from([
        (15, [0.28, 0.36, 0.44, 0.52, 0.60]),
        (20, [0.29, 0.36, 0.43, 0.50, 0.57]),
        (25, [0.29, 0.36, 0.42, 0.49, 0.56]),
        (30, [0.30, 0.36, 0.42, 0.48, 0.54]),
        (35, [0.30, 0.35, 0.41, 0.47, 0.53]),
        (40, [0.31, 0.35, 0.40, 0.46, 0.52]),
    ])
});

/// Look up the design shear strength τc (N/mm²) for a concrete grade and
/// tension steel percentage, interpolating Table 19 in two stages.
///
/// `fck` need not match a tabulated grade; values outside 15-40 clamp to the
/// edge rows. `steel_percent` values outside the 0.15-1.00 breakpoint range
/// return the first entry of the lower grade row (see module docs).
///
/// Always returns a value; this lookup has no failure modes.
///
/// # Example
///
/// ```rust
/// use plinth_core::is456::shear_strength_coefficient;
///
/// // Exact table hit
/// assert_eq!(shear_strength_coefficient(25.0, 0.25), 0.36);
/// ```
pub fn shear_strength_coefficient(fck: f64, steel_percent: f64) -> f64 {
    let grade_low = TAU_C_TABLE
        .keys()
        .rev()
        .find(|&&g| f64::from(g) <= fck)
        .or_else(|| TAU_C_TABLE.keys().next())
        .copied()
        .expect("tau_c table is never empty");
    let grade_high = TAU_C_TABLE
        .keys()
        .find(|&&g| f64::from(g) >= fck)
        .or_else(|| TAU_C_TABLE.keys().next_back())
        .copied()
        .expect("tau_c table is never empty");

    let vals_low = &TAU_C_TABLE[&grade_low];
    let vals_high = &TAU_C_TABLE[&grade_high];

    let breakpoints = &STEEL_PERCENT_BREAKPOINTS;
    for i in 0..breakpoints.len() - 1 {
        let (p1, p2) = (breakpoints[i], breakpoints[i + 1]);
        if p1 <= steel_percent && steel_percent <= p2 {
            let frac = (steel_percent - p1) / (p2 - p1);
            let tau_low = vals_low[i] + (vals_low[i + 1] - vals_low[i]) * frac;
            let tau_high = vals_high[i] + (vals_high[i + 1] - vals_high[i]) * frac;

            // Equal grades: the fck interpolation below would divide by zero
            if grade_high == grade_low {
                return tau_low;
            }
            let grade_frac =
                (fck - f64::from(grade_low)) / (f64::from(grade_high) - f64::from(grade_low));
            return tau_low + (tau_high - tau_low) * grade_frac;
        }
    }

    // Steel percentage outside the breakpoint range
    vals_low[0]
}

/// Round to the nearest 0.1 (plan dimensions, metres).
pub fn round_to_tenth(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Round up to the next multiple of 10 (depths and bar spacings, mm).
///
/// Always rounds up: under-providing depth or over-spacing bars is unsafe.
pub fn round_up_to_ten(x: f64) -> f64 {
    (x / 10.0).ceil() * 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_table_entries() {
        // Every (grade, breakpoint) pair must return the exact entry with no
        // interpolation drift.
        for (&grade, row) in TAU_C_TABLE.iter() {
            for (i, &p) in STEEL_PERCENT_BREAKPOINTS.iter().enumerate() {
                let tau = shear_strength_coefficient(f64::from(grade), p);
                assert_eq!(tau, row[i], "grade {} at p = {}", grade, p);
            }
        }
    }

    #[test]
    fn test_interpolation_along_steel_percent() {
        // M25 row between 0.25 and 0.50: 0.36 -> 0.42
        let tau = shear_strength_coefficient(25.0, 0.375);
        assert!((tau - 0.39).abs() < 1e-12);
    }

    #[test]
    fn test_interpolation_across_grades() {
        // p = 0.40 sits in [0.25, 0.50]:
        //   M20 row gives 0.36 + 0.6*(0.43-0.36) = 0.402
        //   M25 row gives 0.36 + 0.6*(0.42-0.36) = 0.396
        // fck = 22 interpolates 40% of the way from M20 to M25.
        let tau20 = shear_strength_coefficient(20.0, 0.40);
        let tau25 = shear_strength_coefficient(25.0, 0.40);
        let tau22 = shear_strength_coefficient(22.0, 0.40);

        assert!((tau20 - 0.402).abs() < 1e-9);
        assert!((tau25 - 0.396).abs() < 1e-9);
        assert!(tau22 < tau20 && tau22 > tau25);
        assert!((tau22 - 0.3996).abs() < 1e-9);
    }

    #[test]
    fn test_continuity_within_cell() {
        // Small perturbations in p produce small monotone changes
        let base = shear_strength_coefficient(25.0, 0.60);
        let nudged = shear_strength_coefficient(25.0, 0.61);
        assert!(nudged > base);
        assert!((nudged - base) < 0.01);
    }

    #[test]
    fn test_grade_clamping() {
        // Below the table: clamps to the M15 row
        assert_eq!(
            shear_strength_coefficient(10.0, 0.25),
            shear_strength_coefficient(15.0, 0.25)
        );
        // Above the table: clamps to the M40 row
        assert_eq!(
            shear_strength_coefficient(45.0, 0.25),
            shear_strength_coefficient(40.0, 0.25)
        );
    }

    #[test]
    fn test_steel_percent_above_top_breakpoint_falls_back() {
        // Observed behavior of the reference tool: above 1.00 % the lookup
        // returns the first entry of the lower grade row, not the last.
        assert_eq!(shear_strength_coefficient(25.0, 1.05), 0.29);
        assert_eq!(shear_strength_coefficient(15.0, 2.0), 0.28);
    }

    #[test]
    fn test_steel_percent_exactly_at_top_breakpoint() {
        // Exactly 1.00 matches the last interval inclusively and returns the
        // exact tabulated column, not the fallback.
        assert_eq!(shear_strength_coefficient(25.0, 1.00), 0.56);
    }

    #[test]
    fn test_steel_percent_below_first_breakpoint() {
        assert_eq!(shear_strength_coefficient(20.0, 0.10), 0.29);
    }

    #[test]
    fn test_round_to_tenth() {
        assert_eq!(round_to_tenth(7.5_f64.sqrt()), 2.7);
        assert_eq!(round_to_tenth(2.25), 2.3);
        // Idempotent
        assert_eq!(round_to_tenth(round_to_tenth(2.7386)), round_to_tenth(2.7386));
    }

    #[test]
    fn test_round_up_to_ten() {
        assert_eq!(round_up_to_ten(198.6), 200.0);
        assert_eq!(round_up_to_ten(150.0), 150.0);
        assert_eq!(round_up_to_ten(54.02), 60.0);
        // Idempotent
        assert_eq!(round_up_to_ten(round_up_to_ten(193.0)), round_up_to_ten(193.0));
    }
}
