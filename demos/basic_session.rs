//! Basic Calculator Session
//!
//! This example drives a scripted session through the calculator engine,
//! mapping keypad characters onto actions the way a frontend would.
//!
//! Key concepts:
//! - Pure transitions driven by plain `Action` values
//! - Operator parsing via `Op::try_from`, the crate's only fallible surface
//! - History accumulating across calculations until explicitly cleared
//!
//! Run with: cargo run --example basic_session

use reckoner::core::{Action, Calculator, Op};

/// Map one keypad character onto an action. Unknown keys are ignored,
/// like a button panel that simply has no such button.
fn key_to_action(key: char) -> Option<Action> {
    match key {
        '0'..='9' => key.to_digit(10).map(|d| Action::Digit(d as u8)),
        '.' => Some(Action::DecimalPoint),
        'C' => Some(Action::Clear),
        '±' => Some(Action::ToggleSign),
        other => Op::try_from(other).ok().map(Action::Operation),
    }
}

fn press_keys(calc: &mut Calculator, keys: &str) {
    for key in keys.chars() {
        if let Some(action) = key_to_action(key) {
            calc.apply(action);
        }
    }
}

fn main() {
    println!("=== Basic Calculator Session ===\n");

    let mut calc = Calculator::new();

    press_keys(&mut calc, "5+3=");
    println!("5 + 3        -> {}", calc.display());

    press_keys(&mut calc, "C4+6*2=");
    println!("4 + 6 * 2    -> {} (left-to-right, no precedence)", calc.display());

    press_keys(&mut calc, "C7/0=");
    println!("7 / 0        -> {} (division by zero yields 0)", calc.display());

    press_keys(&mut calc, "C1.5+2.25=");
    println!("1.5 + 2.25   -> {}", calc.display());

    println!("\nHistory (newest first):");
    for summary in calc.history().summaries() {
        println!("  {summary}");
    }

    calc.clear_history();
    println!("\nHistory cleared: {} entries", calc.history().len());

    println!("\n=== Session Complete ===");
}
