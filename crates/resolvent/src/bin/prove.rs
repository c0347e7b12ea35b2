//! Command-line front end for the resolution prover.
//!
//! The core holds no I/O; this binary parses arguments, runs one proof
//! search, and prints the result in human-readable or JSON form.

use resolvent::json::ProofResultJson;
use resolvent::{prove_formulas, ProverConfig};
use std::time::Duration;

fn usage(program: &str) -> ! {
    eprintln!(
        "Usage: {} --axiom <formula> [--axiom <formula> ...] --goal <formula> [options]",
        program
    );
    eprintln!("\nOptions:");
    eprintln!("  --max-steps <n>   Maximum resolution steps (default: 20000)");
    eprintln!("  --beam <n>        Candidate pairs sampled per iteration (default: 200)");
    eprintln!("  --timeout <secs>  Wall-clock bound in seconds (default: 10)");
    eprintln!("  --json            Emit the result as JSON");
    eprintln!("\nFormula syntax: ~ & | -> <->, variables [A-Za-z][A-Za-z0-9_]*");
    std::process::exit(1);
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("prove");

    let mut axioms: Vec<String> = Vec::new();
    let mut goal: Option<String> = None;
    let mut config = ProverConfig::default();
    let mut json_output = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--axiom" => {
                if i + 1 >= args.len() {
                    usage(program);
                }
                axioms.push(args[i + 1].clone());
                i += 1;
            }
            "--goal" => {
                if i + 1 >= args.len() {
                    usage(program);
                }
                goal = Some(args[i + 1].clone());
                i += 1;
            }
            "--max-steps" => {
                if i + 1 >= args.len() {
                    usage(program);
                }
                match args[i + 1].parse() {
                    Ok(n) => config.max_steps = n,
                    Err(_) => usage(program),
                }
                i += 1;
            }
            "--beam" => {
                if i + 1 >= args.len() {
                    usage(program);
                }
                match args[i + 1].parse() {
                    Ok(n) => config.beam_width = n,
                    Err(_) => usage(program),
                }
                i += 1;
            }
            "--timeout" => {
                if i + 1 >= args.len() {
                    usage(program);
                }
                match args[i + 1].parse::<u64>() {
                    Ok(secs) => config.timeout = Duration::from_secs(secs),
                    Err(_) => usage(program),
                }
                i += 1;
            }
            "--json" => {
                json_output = true;
            }
            other => {
                eprintln!("Unknown option: {}", other);
                usage(program);
            }
        }
        i += 1;
    }

    let goal = match goal {
        Some(g) => g,
        None => usage(program),
    };

    let result = match prove_formulas(&axioms, &goal, &config) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if json_output {
        let json = ProofResultJson::from(&result);
        match serde_json::to_string_pretty(&json) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    println!("Axioms:");
    for axiom in &axioms {
        println!("  {}", axiom);
    }
    println!("Goal: {}", goal);
    println!();
    println!("Result: {} (steps: {})", result.message, result.steps);

    if let Some(steps) = result.derivation() {
        println!("\nDerivation:");
        for step in steps {
            match step.parents {
                Some((p1, p2)) => {
                    println!("  [{}] {}  (from [{}], [{}])", step.index, step.clause, p1, p2)
                }
                None => println!("  [{}] {}  (input)", step.index, step.clause),
            }
        }
    } else if !result.proved {
        println!("No proof found within the given bounds (inconclusive).");
    }
}
