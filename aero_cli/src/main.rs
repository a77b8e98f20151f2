//! # Aeromesh CLI Application
//!
//! Terminal front end for the CFD setup calculators. Reads typed values
//! from stdin, invokes `aero_core`, and prints the derived quantities -
//! the same division of labor the GUI host application uses.

use std::io::{self, BufRead, Write};

use aero_core::calculations::prism_layer::{self, KnownParameter, PrismLayerInput};
use aero_core::calculations::wall_spacing::{self, WallSpacingInput};
use aero_core::equations::{SkinFrictionCorrelation, StretchingLaw};

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

fn prompt_u32(prompt: &str, default: u32) -> u32 {
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

fn run_prism_layer() {
    println!("Prism Layer Calculator");
    println!("Use a consistent length unit for the thickness values;");
    println!("all other values are dimensionless.");
    println!();

    let num_layers = prompt_u32("Number of layers [20]: ", 20);
    let total_thickness = prompt_f64("Total thickness [0.05]: ", 0.05);
    let near_wall = prompt_f64("Near-wall thickness [1.0e-5]: ", 1.0e-5);

    let input = PrismLayerInput {
        label: "CLI prism stack".to_string(),
        num_layers,
        total_thickness,
        law: StretchingLaw::GeometricProgression,
        known: KnownParameter::NearWallThickness(near_wall),
    };

    match prism_layer::calculate(&input) {
        Ok(result) => {
            println!();
            println!("Stretch factor:      {:.3}", result.stretch_factor);
            println!("Near-wall thickness: {:.6e}", result.near_wall_thickness);
            println!("Thickness ratio:     {:.3}", result.thickness_ratio);
        }
        Err(e) => println!("Error [{}]: {}", e.error_code(), e),
    }
}

fn run_wall_spacing() {
    println!("Wall Y+ Calculator");
    println!("Use a consistent unit system for all inputs, e.g. MKS.");
    println!("The near-wall thickness accounts for the cell thickness being");
    println!("twice the wall distance to the near-wall centroid.");
    println!();

    let defaults = WallSpacingInput::default();
    let input = WallSpacingInput {
        label: "CLI Y+ check".to_string(),
        velocity: prompt_f64("Freestream velocity [1.0]: ", defaults.velocity),
        density: prompt_f64("Density [1.184]: ", defaults.density),
        dynamic_viscosity: prompt_f64("Dynamic viscosity [1.885e-5]: ", defaults.dynamic_viscosity),
        reference_length: prompt_f64("Reference length [1.0]: ", defaults.reference_length),
        target_y_plus: prompt_f64("Target Y+ [1.0]: ", defaults.target_y_plus),
        correlation: SkinFrictionCorrelation::Schlichting,
    };

    match wall_spacing::calculate(&input) {
        Ok(result) => {
            println!();
            println!("Reynolds number:     {:.3e}", result.reynolds_number);
            println!("Skin friction Cf:    {:.3e}", result.skin_friction_coefficient);
            println!("Near-wall thickness: {:.3e}", result.near_wall_thickness);
        }
        Err(e) => println!("Error [{}]: {}", e.error_code(), e),
    }
}

fn main() {
    println!("Aeromesh CLI - CFD Setup Calculators");
    println!("====================================");
    println!();
    println!("Available skin-friction correlations:");
    for correlation in SkinFrictionCorrelation::all() {
        println!("  - {}", correlation.describe());
    }
    println!();

    run_prism_layer();
    println!();
    run_wall_spacing();
}
