//! # Plinth CLI Application
//!
//! Interactive terminal front end for isolated footing design. Prompts for
//! the eight design inputs, runs the shared calculation engine, and prints
//! the labeled result fields. The plain-text design report can be written to
//! a file for printing or archival.

use std::fs;
use std::io::{self, BufRead, Write};

use plinth_core::calculations::footing::{calculate, FootingInput, FootingShape};
use plinth_core::materials::{ConcreteGrade, SteelGrade};
use plinth_core::report::design_report;

/// Lines per page when the report is written to disk
const REPORT_LINES_PER_PAGE: usize = 40;

/// File name for the saved report
const REPORT_FILE: &str = "Footing_Design_Report.txt";

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return None;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return None;
    }
    Some(input.trim().to_string())
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    match prompt_line(prompt) {
        Some(s) => s.parse().unwrap_or(default),
        None => default,
    }
}

fn prompt_concrete(prompt: &str, default: ConcreteGrade) -> ConcreteGrade {
    match prompt_line(prompt) {
        Some(s) if !s.is_empty() => ConcreteGrade::from_str_flexible(&s).unwrap_or(default),
        _ => default,
    }
}

fn prompt_steel(prompt: &str, default: SteelGrade) -> SteelGrade {
    match prompt_line(prompt) {
        Some(s) if !s.is_empty() => SteelGrade::from_str_flexible(&s).unwrap_or(default),
        _ => default,
    }
}

fn prompt_shape(prompt: &str, default: FootingShape) -> FootingShape {
    match prompt_line(prompt) {
        Some(s) if s.eq_ignore_ascii_case("r") || s.eq_ignore_ascii_case("rectangular") => {
            FootingShape::Rectangular
        }
        Some(s) if s.eq_ignore_ascii_case("s") || s.eq_ignore_ascii_case("square") => {
            FootingShape::Square
        }
        _ => default,
    }
}

fn prompt_yes(prompt: &str) -> bool {
    matches!(prompt_line(prompt), Some(s) if s.eq_ignore_ascii_case("y") || s.eq_ignore_ascii_case("yes"))
}

fn status_icon(pass: bool) -> &'static str {
    if pass {
        "[OK]"
    } else {
        "[FAIL]"
    }
}

fn main() {
    println!("Plinth CLI - Isolated Footing Design (IS 456:2000)");
    println!("==================================================");
    println!();

    let load_kn = prompt_f64("Column load P (kN) [1000]: ", 1000.0);
    let sbc_kn_m2 = prompt_f64("Safe bearing capacity (kN/m²) [200]: ", 200.0);
    let concrete = prompt_concrete("Concrete grade (M15-M40) [M25]: ", ConcreteGrade::M25);
    let steel = prompt_steel("Steel grade (Fe250/Fe415/Fe500) [Fe415]: ", SteelGrade::Fe415);
    let column_breadth_mm = prompt_f64("Column breadth (mm) [400]: ", 400.0);
    let column_depth_mm = prompt_f64("Column depth (mm) [400]: ", 400.0);
    let cover_mm = prompt_f64("Clear cover (mm) [50]: ", 50.0);
    let shape = prompt_shape("Footing shape (S)quare/(R)ectangular [S]: ", FootingShape::Square);

    let input = FootingInput {
        label: "CLI Footing".to_string(),
        load_kn,
        sbc_kn_m2,
        concrete,
        steel,
        column_breadth_mm,
        column_depth_mm,
        cover_mm,
        shape,
    };

    println!();
    match calculate(&input) {
        Ok(result) => {
            println!("═══════════════════════════════════════");
            println!("  FOOTING DESIGN RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Input:");
            println!("  Load:    {:.1} kN on {:.0} x {:.0} mm column", load_kn, column_breadth_mm, column_depth_mm);
            println!("  Soil:    {:.1} kN/m²", sbc_kn_m2);
            println!("  Grades:  {} / {}", concrete, steel);
            println!("  Shape:   {}", shape);
            println!();
            println!("Geometry:");
            println!("  Pu   = {:.1} kN (A_req = {:.3} m²)", result.factored_load_kn, result.required_area_m2);
            println!("  Size = {:.1} m x {:.1} m", result.footing_length_m, result.footing_breadth_m);
            println!("  q    = {:.1} kN/m²", result.soil_pressure_kn_m2);
            println!("  d    = {:.0} mm", result.effective_depth_mm);
            println!();
            println!("Flexure:");
            println!("  M   = {:.2} kNm/m width", result.bending_moment_knm);
            println!("  Ast = {:.1} mm²/m (p = {:.3}%)", result.required_steel_mm2, result.steel_percent);
            println!();
            println!("Shear Checks (τc = {:.3} N/mm²):", result.shear_coefficient_n_mm2);
            println!("  One-way:  {:.4} {}", result.one_way_shear_n_mm2, status_icon(result.one_way_ok));
            println!("  Punching: {:.4} {}", result.punching_shear_n_mm2, status_icon(result.punching_ok));
            println!();
            println!("═══════════════════════════════════════");
            println!("  RESULT: {} (governs: {})",
                if result.passes() { "PASS" } else { "FAIL" },
                result.governing_condition()
            );
            println!("  {}", result.reinforcement);
            println!("═══════════════════════════════════════");

            println!();
            if prompt_yes(&format!("Write report to {}? (y/N): ", REPORT_FILE)) {
                let report = design_report(&input, &result);
                let document = report.pages(REPORT_LINES_PER_PAGE).join("\u{0C}");
                match fs::write(REPORT_FILE, document) {
                    Ok(()) => println!("Report written to {}", REPORT_FILE),
                    Err(e) => eprintln!("Could not write {}: {}", REPORT_FILE, e),
                }
            }

            println!();
            println!("JSON Output (for LLM/API use):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }
}
