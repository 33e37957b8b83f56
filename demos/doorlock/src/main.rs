//! Door Lock Demo
//!
//! A locked door exposes a two-wire circuit with eight switchable modifier
//! pairs. The lock opens when the left wire reads 32V and the right wire
//! reads 20V. This demo builds the circuit, runs the exhaustive solver and
//! prints the switch pattern that opens the door.

use voltlock::prelude::*;

fn print_circuit(config: &CircuitConfig) {
    println!("start voltage: {:.2}V", config.start_value);
    for (index, pair) in config.pairs.iter().enumerate() {
        println!(
            "  pair {}: [{}]  left {} {:<6} right {} {}",
            index + 1,
            if pair.enabled { "x" } else { " " },
            pair.left.operator,
            pair.left.operand.to_string(),
            pair.right.operator,
            pair.right.operand,
        );
    }
    let (left, right) = evaluate_wires(config);
    println!("  left wire: {:.2}V  right wire: {:.2}V", left, right);
}

fn main() {
    println!("Voltlock Door Lock Demo");
    println!("=======================\n");

    let mut config = CircuitConfig::new();
    config.start_value = 12.0;
    config.pairs[0].left = Modifier::new(Operator::Add, 4.0);
    config.pairs[0].right = Modifier::new(Operator::Sub, 2.0);
    config.pairs[2].left = Modifier::new(Operator::Mul, 2.0);
    config.pairs[2].right = Modifier::new(Operator::Add, 10.0);
    config.pairs[5].left = Modifier::new(Operator::Sub, 6.0);
    config.pairs[5].right = Modifier::new(Operator::Div, 2.0);
    config.pairs[7].left = Modifier::new(Operator::Div, 0.0); // dud wire, always a no-op
    config.pairs[7].right = Modifier::new(Operator::Add, 1.0);

    println!("The door's circuit:");
    print_circuit(&config);

    let target = Target::new(32.0, 20.0);
    println!("\nRequired: left 32.00V, right 20.00V");
    println!("Searching all 256 switch combinations...\n");

    let outcome = Solver::new()
        .solve(&mut config, &target)
        .expect("both targets are set");

    match outcome {
        SolveOutcome::Solved {
            combination,
            left,
            right,
            stats,
        } => {
            println!("Door unlocked!");
            println!(
                "  switch pattern: {} ({} combinations tested)",
                combination, stats.combinations_tested
            );
            println!("  left wire: {:.2}V  right wire: {:.2}V\n", left, right);
            println!("Circuit with the winning configuration:");
            print_circuit(&config);
        }
        SolveOutcome::NoSolution { stats } => {
            println!(
                "No combination opens this door ({} tested).",
                stats.combinations_tested
            );
        }
    }
}
