//! Dual Display Skins
//!
//! The calculator ships with two alternate visual skins. This example models
//! them as two independent rendering adapters consuming the same engine
//! through its read accessors only - no engine code depends on which skin is
//! active, and switching skins never touches calculator state.
//!
//! Run with: cargo run --example dual_display

use reckoner::core::{Calculator, Op};

/// A rendering adapter over the engine's read-only surface.
trait Skin {
    fn name(&self) -> &'static str;
    fn render(&self, calc: &Calculator) -> String;
}

/// Minimal single-line rendering.
struct PlainSkin;

impl Skin for PlainSkin {
    fn name(&self) -> &'static str {
        "plain"
    }

    fn render(&self, calc: &Calculator) -> String {
        if calc.equation().is_empty() {
            calc.display().to_string()
        } else {
            format!("{}  [{}]", calc.display(), calc.equation())
        }
    }
}

/// Boxed rendering with the equation line above the display.
struct FramedSkin;

impl Skin for FramedSkin {
    fn name(&self) -> &'static str {
        "framed"
    }

    fn render(&self, calc: &Calculator) -> String {
        let width = calc.display().len().max(calc.equation().len()).max(8);
        let bar = "-".repeat(width + 2);
        format!(
            "+{bar}+\n| {:>width$} |\n| {:>width$} |\n+{bar}+",
            calc.equation(),
            calc.display(),
        )
    }
}

fn show(skin: &dyn Skin, calc: &Calculator) {
    println!("[{} skin]\n{}\n", skin.name(), skin.render(calc));
}

fn main() {
    println!("=== Dual Display Skins ===\n");

    let mut calc = Calculator::new();
    calc.input_digit(5);
    calc.apply_operation(Op::Add);
    calc.input_digit(3);

    let skins: [&dyn Skin; 2] = [&PlainSkin, &FramedSkin];

    // same engine state, two renderings
    for skin in skins {
        show(skin, &calc);
    }

    calc.apply_operation(Op::Equals);
    println!("after '=':\n");
    for skin in skins {
        show(skin, &calc);
    }

    println!("=== Example Complete ===");
}
