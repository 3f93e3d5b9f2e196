//! # OptiCalc CLI Application
//!
//! Terminal-based interface for the ophthalmic optics calculators and a
//! short practice drill. Collects raw text input, hands it to
//! `optics_core`, and prints formatted plus JSON output.

use std::io::{self, BufRead, Write};

use optics_core::calculations::spherical_equivalent::spherical_equivalent;
use optics_core::calculations::thickness::{calculate as thickness, LensThicknessInput};
use optics_core::calculations::transposition::transpose;
use optics_core::materials::LensMaterial;
use optics_core::practice::{bank, PracticeSession, PRACTICE_PASS_PERCENT};
use optics_core::prescription::Prescription;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_line(prompt: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return String::new();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return String::new();
    }

    input.trim().to_string()
}

fn main() {
    println!("OptiCalc CLI - Ophthalmic Optics Calculator");
    println!("===========================================");
    println!();

    run_transposition_demo();
    run_thickness_demo();
    run_practice_round();
}

fn run_transposition_demo() {
    println!("--- Prescription tools ---");
    let sphere = prompt_f64("Enter sphere (D) [-2.00]: ", -2.00);
    let cylinder = prompt_f64("Enter cylinder (D) [+1.00]: ", 1.00);
    let axis = prompt_f64("Enter axis (1-180) [90]: ", 90.0) as u16;

    let rx = Prescription::new(sphere, Some(cylinder), Some(axis));

    println!();
    match transpose(&rx) {
        Ok(flipped) => {
            println!("═══════════════════════════════════════");
            println!("  PRESCRIPTION RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("  Entered:    {}", rx);
            println!("  Transposed: {}", flipped);
            match spherical_equivalent(rx.sphere_d, rx.cylinder_d) {
                Ok(se) => println!("  Spherical equivalent: {:+.2} D", se.0),
                Err(e) => println!("  Spherical equivalent: error - {}", e),
            }
            println!();

            println!("JSON Output (for LLM/API use):");
            if let Ok(json) = serde_json::to_string_pretty(&flipped) {
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
    println!();
}

fn run_thickness_demo() {
    println!("--- Lens thickness estimate (CR-39) ---");
    let sphere = prompt_f64("Enter sphere (D) [-5.00]: ", -5.00);
    let eye_size = prompt_f64("Enter frame eye size (mm) [52]: ", 52.0);
    let frame_pd = prompt_f64("Enter frame PD (mm) [70]: ", 70.0);
    let patient_pd = prompt_f64("Enter patient PD (mm) [62]: ", 62.0);

    let input = LensThicknessInput {
        sphere_d: sphere,
        frame_eye_size_mm: eye_size,
        frame_pd_mm: frame_pd,
        patient_pd_mm: patient_pd,
        material: LensMaterial::Cr39,
    };

    println!();
    match thickness(&input) {
        Ok(result) => {
            println!("═══════════════════════════════════════");
            println!("  THICKNESS ESTIMATE");
            println!("═══════════════════════════════════════");
            println!();
            println!("  Decentration:       {:.1} mm per lens", result.decentration_mm);
            println!("  Effective diameter: {:.1} mm", result.effective_diameter_mm);
            println!("  Surface sag:        {:.2} mm", result.sag_mm);
            println!();
            println!("  Center thickness:   {:.2} mm", result.center_thickness_mm);
            println!("  Edge thickness:     {:.2} mm", result.edge_thickness_mm);
            println!(
                "  Thickest point:     {}",
                if result.is_minus_lens { "edge (minus lens)" } else { "center (plus lens)" }
            );
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
    println!();
}

fn run_practice_round() {
    println!("--- Practice round: 3 random problems ---");
    println!();

    let problems = bank::select_problems(3, None);
    let mut session = PracticeSession::new(problems);

    let mut number = 1;
    while let Some(problem) = session.current_problem().cloned() {
        println!("Problem {} [{} / {}]:", number, problem.kind, problem.difficulty);
        println!("  {}", problem.question);
        let unit_hint = problem
            .unit
            .as_deref()
            .map(|u| format!(" ({})", u))
            .unwrap_or_default();

        let answer = prompt_line(&format!("Your answer{}: ", unit_hint));
        match session.submit(&answer) {
            Ok(outcome) => {
                println!(
                    "  {} {}",
                    status_icon(outcome.is_correct),
                    problem.explanation
                );
                for step in &problem.steps {
                    println!("    - {}", step);
                }
            }
            Err(e) => eprintln!("Error: {}", e),
        }
        println!();
        number += 1;
    }

    let summary = session.summary(PRACTICE_PASS_PERCENT);
    println!("═══════════════════════════════════════");
    println!(
        "  SCORE: {}/{} ({}%) - {}",
        summary.correct_count,
        summary.total_count,
        summary.score_percent,
        if summary.passed { "PASS" } else { "KEEP PRACTICING" }
    );
    println!("═══════════════════════════════════════");

    println!();
    println!("JSON Output (for LLM/API use):");
    if let Ok(json) = serde_json::to_string_pretty(&summary) {
        println!("{}", json);
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[CORRECT]" } else { "[INCORRECT]" }
}
