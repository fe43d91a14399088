use anyhow::Result;

use pagesim::input::{self, DEFAULT_FRAME_COUNT, DEFAULT_REFERENCE_STRING};
use pagesim::simulator::{self, Policy};

fn main() -> Result<()> {
    // Default sample from the interactive simulator
    let references = input::parse_reference_string(DEFAULT_REFERENCE_STRING);
    let frames = DEFAULT_FRAME_COUNT;

    println!("Reference string: {}", DEFAULT_REFERENCE_STRING);
    println!("Frames: {}", frames);

    for policy in Policy::ALL {
        let trace = simulator::simulate(policy, &references, frames)?;
        println!();
        println!("{}", policy.label());
        for (index, step) in trace.iter().enumerate().skip(1) {
            let page = step.page.map_or("-".to_string(), |p| p.to_string());
            let evicted = step.evicted.map_or(String::new(), |p| format!(" (evicted {})", p));
            println!("  {:>2}: {:>3} {} {}{}", index, page, step.frames, step.describe(), evicted);
        }
    }

    let comparison = simulator::compare(&references, frames)?;
    println!();
    for (policy, step) in comparison.iter() {
        println!(
            "{:<8} faults: {:>2}  hits: {:>2}",
            policy.to_string(),
            step.faults,
            step.hits
        );
    }
    println!("Fewest faults: {}", comparison.best());

    Ok(())
}
