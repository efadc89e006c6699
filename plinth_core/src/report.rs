//! # Design Report
//!
//! Assembles the plain-text design report for a footing calculation: the
//! fixed sequence of labeled result lines front ends print on screen or
//! paginate into a printable document. Layout beyond line order (fonts,
//! page media, download) is a front-end concern.

use serde::{Deserialize, Serialize};

use crate::calculations::footing::{FootingInput, FootingResult};
use crate::is456::is_ref;

/// Report title line
const REPORT_TITLE: &str = "ISOLATED FOOTING DESIGN REPORT (IS 456:2000)";

/// A rendered design report: a title and an ordered sequence of text lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignReport {
    /// Title line, repeated at the head of every page
    pub title: String,

    /// Report body lines in print order
    pub lines: Vec<String>,
}

impl DesignReport {
    /// Render the whole report as a single string.
    pub fn format_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.title);
        out.push('\n');
        out.push_str(&"-".repeat(self.title.len()));
        out.push('\n');
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Split the body into pages of at most `lines_per_page` lines, each page
    /// headed by the title.
    pub fn pages(&self, lines_per_page: usize) -> Vec<String> {
        let per_page = lines_per_page.max(1);
        self.lines
            .chunks(per_page)
            .map(|chunk| {
                let mut page = String::new();
                page.push_str(&self.title);
                page.push('\n');
                page.push_str(&"-".repeat(self.title.len()));
                page.push('\n');
                for line in chunk {
                    page.push_str(line);
                    page.push('\n');
                }
                page
            })
            .collect()
    }
}

/// Build the design report for a computed footing.
pub fn design_report(input: &FootingInput, result: &FootingResult) -> DesignReport {
    let verdict = |ok: bool| if ok { "OK" } else { "NOT OK" };

    let lines = vec![
        format!("Footing: {}", input.label),
        format!(
            "Column: {:.0} mm x {:.0} mm, {} / {}, cover {:.0} mm",
            input.column_breadth_mm, input.column_depth_mm, input.concrete, input.steel, input.cover_mm
        ),
        String::new(),
        format!("Factored Load Pu = {:.1} kN", result.factored_load_kn),
        format!("Required Area = {:.3} m²", result.required_area_m2),
        format!(
            "Adopted Footing Size = {:.1} m x {:.1} m ({})",
            result.footing_length_m, result.footing_breadth_m, input.shape
        ),
        format!("Soil Pressure q = {:.1} kN/m²", result.soil_pressure_kn_m2),
        String::new(),
        format!("Effective Depth d = {:.0} mm", result.effective_depth_mm),
        format!("Bending Moment = {:.2} kNm/m width", result.bending_moment_knm),
        format!(
            "Required Ast = {:.1} mm²/m  (p = {:.3}%)",
            result.required_steel_mm2, result.steel_percent
        ),
        format!(
            "τc ({}) = {:.3} N/mm²",
            is_ref::SHEAR_TABLE,
            result.shear_coefficient_n_mm2
        ),
        String::new(),
        "Shear Checks:".to_string(),
        format!(
            "  One-way v = {:.4} N/mm²  |  τc = {:.4}  ->  {}",
            result.one_way_shear_n_mm2, result.shear_coefficient_n_mm2, verdict(result.one_way_ok)
        ),
        format!(
            "  Punching v = {:.4} N/mm²  |  τc = {:.4}  ->  {}",
            result.punching_shear_n_mm2, result.shear_coefficient_n_mm2, verdict(result.punching_ok)
        ),
        String::new(),
        format!("Reinforcement: {}", result.reinforcement),
        String::new(),
        "All plan dimensions rounded to nearest 0.1 m, depths to 10 mm.".to_string(),
    ];

    DesignReport {
        title: REPORT_TITLE.to_string(),
        lines,
    }
}
