//! Print Monte Carlo summaries: a biased coin, p(y) by total probability, and
//! p(x | y = k) by rejection sampling, each next to the exact answer.
//!
//! ```text
//! mcmm [--seed N] [--tosses N] [--heads P] [--draws N] [--y-per-x N] [--given K]
//! ```

use std::error::Error;
use std::process::ExitCode;

use mcmm::coin::count;
use mcmm::{Joint, SimulationConfig};

const USAGE: &str =
    "usage: mcmm [--seed N] [--tosses N] [--heads P] [--draws N] [--y-per-x N] [--given K]";

fn parse_args(
    mut args: impl Iterator<Item = String>,
) -> Result<Option<SimulationConfig>, Box<dyn Error>> {
    let mut cfg = SimulationConfig::default();
    while let Some(flag) = args.next() {
        if flag == "-h" || flag == "--help" {
            return Ok(None);
        }
        let value = args
            .next()
            .ok_or_else(|| format!("missing value for {flag}"))?;
        match flag.as_str() {
            "--seed" => cfg.seed = Some(value.parse()?),
            "--tosses" => cfg.num_tosses = value.parse()?,
            "--heads" => cfg.heads_probability = value.parse()?,
            "--draws" => cfg.num_draws = value.parse()?,
            "--y-per-x" => cfg.y_per_x = value.parse()?,
            "--given" => cfg.condition_on = value.parse()?,
            other => return Err(format!("unknown flag {other}").into()),
        }
    }
    Ok(Some(cfg))
}

fn fmt_probs(p: &[f64]) -> String {
    let parts: Vec<String> = p.iter().map(|x| format!("{x:1.2}")).collect();
    format!("[{}]", parts.join(", "))
}

fn run(cfg: &SimulationConfig) -> Result<(), Box<dyn Error>> {
    let joint = Joint::textbook();
    // Reject a bad bias or conditioning label before anything is printed.
    let coin = cfg.coin()?;
    let exact = joint.posterior_x_given_y(cfg.condition_on)?;
    let mut rng = cfg.rng();

    let tosses = coin.get_sequence_with_rng(cfg.num_tosses, &mut rng);
    let tally = count(&tosses);
    println!(
        "simulated {} tosses of a biased coin with p = {}",
        cfg.num_tosses,
        coin.p()
    );
    println!("obtained {} heads and {} tails", tally.heads, tally.tails);

    let p_y = joint.simulate_marginal_y_with_rng(cfg.num_draws, cfg.y_per_x, &mut rng)?;
    println!(
        "p(y) is: {} (exact {})",
        fmt_probs(&p_y.frequencies),
        fmt_probs(&joint.marginal_y())
    );

    let k = cfg.condition_on;
    let post = joint.simulate_posterior_x_given_y_with_rng(k, cfg.num_draws, &mut rng)?;
    println!(
        "p(x|y={k}) is: {} (exact {})",
        fmt_probs(&post.frequencies),
        fmt_probs(&exact)
    );
    println!("INFO: len(x) = {}, len(x_new) = {}", post.draws, post.samples);

    Ok(())
}

fn main() -> ExitCode {
    let cfg = match parse_args(std::env::args().skip(1)) {
        Ok(Some(cfg)) => cfg,
        Ok(None) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("error: {e}\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match run(&cfg) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
