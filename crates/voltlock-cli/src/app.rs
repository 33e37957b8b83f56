//! Interactive session state.
//!
//! Owns the single mutable circuit configuration and applies parsed commands
//! to it, printing wire outputs after every edit the way the original tool
//! recomputed its display live.

use owo_colors::{OwoColorize, Style};
use voltlock::{
    evaluate_wires, parse_modifier_input, CircuitConfig, Operand, SolveError, SolveOutcome, Solver,
    SolverConfig, Target, Wire, PAIR_COUNT,
};

use crate::command::Command;

pub struct App {
    circuit: CircuitConfig,
    target: Target,
    solver: Solver,
    decimals: usize,
    color: bool,
    /// Cosmetic re-entrancy guard; the sweep itself is synchronous.
    solving: bool,
}

impl App {
    pub fn new(config: &SolverConfig, tolerance_override: Option<f64>, color: bool) -> Self {
        let mut solver = Solver::from_config(config);
        if let Some(tolerance) = tolerance_override {
            solver = solver.with_tolerance(tolerance);
        }
        App {
            circuit: CircuitConfig::new(),
            target: Target::default(),
            solver,
            decimals: config.display.decimals as usize,
            color,
            solving: false,
        }
    }

    /// Applies one command. Returns false when the session should end.
    pub fn execute(&mut self, command: Command) -> bool {
        match command {
            Command::Start(value) => {
                self.circuit.start_value = value;
                self.print_outputs();
            }
            Command::Modifier { index, wire, token } => {
                self.edit_modifier(index, wire, &token);
                self.print_outputs();
            }
            Command::Switch { index, enabled } => {
                let pair = &mut self.circuit.pairs[index];
                pair.enabled = enabled.unwrap_or(!pair.enabled);
                println!(
                    "pair {} {}",
                    index + 1,
                    if pair.enabled { "on" } else { "off" }
                );
                self.print_outputs();
            }
            Command::TargetSet { wire, value } => {
                match wire {
                    Wire::Left => self.target.left = Some(value),
                    Wire::Right => self.target.right = Some(value),
                }
                println!("target {} = {:.prec$}", wire, value, prec = self.decimals);
            }
            Command::TargetClear => {
                self.target.clear();
                println!("targets cleared");
            }
            Command::Solve => self.solve(),
            Command::Reset => {
                self.circuit.reset();
                self.target.clear();
                println!("Circuit reset: all switches off, values cleared.");
            }
            Command::Show => self.show(),
            Command::Help => print_help(),
            Command::Quit => return false,
        }
        true
    }

    fn edit_modifier(&mut self, index: usize, wire: Wire, token: &str) {
        let parsed = parse_modifier_input(token);
        let modifier = self.circuit.pairs[index].modifier_mut(wire);
        if let Some(operator) = parsed.operator {
            modifier.operator = operator;
        }
        if let Operand::Pending(ref text) = parsed.operand {
            println!("note: '{}' is not a number; step will be skipped", text);
        }
        modifier.operand = parsed.operand;
    }

    fn solve(&mut self) {
        if self.solving {
            println!("a solve is already running");
            return;
        }
        self.solving = true;
        let result = self.solver.solve(&mut self.circuit, &self.target);
        self.solving = false;

        match result {
            Ok(SolveOutcome::Solved {
                combination, stats, ..
            }) => {
                let style = self.paint(Style::new().green().bold());
                println!(
                    "{}",
                    "Circuit solved: switch configuration applied.".style(style)
                );
                println!(
                    "switches: {}  ({} of 256 combinations tested)",
                    combination, stats.combinations_tested
                );
                self.print_outputs();
            }
            Ok(SolveOutcome::NoSolution { .. }) => {
                let style = self.paint(Style::new().yellow());
                println!(
                    "{}",
                    "No valid switch combination found. Check your modifiers.".style(style)
                );
            }
            Err(SolveError::InvalidTarget) => {
                let style = self.paint(Style::new().red());
                println!(
                    "{}",
                    "Set both target values before solving.".style(style)
                );
            }
            Err(SolveError::Cancelled) => {
                println!("solve cancelled");
            }
        }
    }

    fn show(&self) {
        println!(
            "start: {:.prec$}",
            self.circuit.start_value,
            prec = self.decimals
        );
        for (index, pair) in self.circuit.pairs.iter().enumerate() {
            let left = format!("{} {}", pair.left.operator, pair.left.operand);
            let right = format!("{} {}", pair.right.operator, pair.right.operand);
            println!(
                "  {}. [{}]  left {:<10} right {}",
                index + 1,
                if pair.enabled { "x" } else { " " },
                left,
                right,
            );
        }
        match (self.target.left, self.target.right) {
            (None, None) => println!("targets: unset"),
            (left, right) => println!(
                "targets: left {}  right {}",
                left.map_or("unset".to_string(), |v| format!(
                    "{:.prec$}",
                    v,
                    prec = self.decimals
                )),
                right.map_or("unset".to_string(), |v| format!(
                    "{:.prec$}",
                    v,
                    prec = self.decimals
                )),
            ),
        }
        self.print_outputs();
    }

    fn print_outputs(&self) {
        let (left, right) = evaluate_wires(&self.circuit);
        let left_style = self.paint(Style::new().red().bold());
        let right_style = self.paint(Style::new().blue().bold());
        println!(
            "left: {}  right: {}",
            format!("{:.prec$}", left, prec = self.decimals).style(left_style),
            format!("{:.prec$}", right, prec = self.decimals).style(right_style),
        );
    }

    fn paint(&self, style: Style) -> Style {
        if self.color {
            style
        } else {
            Style::new()
        }
    }
}

fn print_help() {
    println!("commands:");
    println!("  start <value>          set the circuit start value");
    println!("  mod <1-{PAIR_COUNT}> <l|r> <token>  set a modifier, e.g. 'mod 3 l *2'");
    println!("  on|off|toggle <1-{PAIR_COUNT}>     flip a pair's shared switch");
    println!("  target <l|r> <value>   set one target value");
    println!("  target clear           clear both targets");
    println!("  solve                  search all switch combinations");
    println!("  reset                  restore the empty circuit");
    println!("  show                   print the circuit and outputs");
    println!("  quit                   leave");
}
