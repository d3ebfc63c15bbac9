use owo_colors::OwoColorize;
use ratrref::{reduce_to_rref, Matrix, Phase};
use std::{io, process};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    ctrlc::set_handler(|| {
        println!("\nBye!");
        process::exit(0);
    })
    .expect("failed to set Ctrl-C handler");

    let mut buf = String::new();
    loop {
        println!("Feed me a matrix, e.g. [[1, 2], [3, 4]]:");
        let n = io::stdin()
            .read_line(&mut buf)
            .expect("failed to read line");
        if n == 0 {
            break;
        }

        match buf.trim().parse::<Matrix>() {
            Ok(mat) => try_reduce(mat),
            Err(e) => println!("Error: {}", e),
        }

        buf.clear();
    }
}

fn try_reduce(mut mat: Matrix) {
    let trace = match reduce_to_rref(&mut mat) {
        Ok(trace) => trace,
        Err(e) => {
            println!("Error: {}", e);
            return;
        }
    };

    for (phase, snapshot) in &trace {
        let heading = phase.heading();
        match phase {
            Phase::Initial => println!("\n{}", heading.cyan().bold()),
            Phase::Reduced => println!("{}", heading.green().bold()),
            _ => println!("{}", heading.yellow()),
        }
        println!("{}", snapshot);
    }

    println!(
        "{} after {} pivot step(s):\n{}",
        "Result".green().bold(),
        trace.pivot_steps(),
        mat
    );
}
