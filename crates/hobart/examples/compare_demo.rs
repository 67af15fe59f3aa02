//! Headless run of the comparison pipeline over the bundled sample data.

use hobart::data::load_universes;
use hobart::pipeline::compare;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Hobart Comparison Demo ===\n");

    let (baskets, benchmarks) = load_universes(
        Path::new("data/baskets.csv"),
        Path::new("data/benchmarks.csv"),
    )?;

    println!("Baskets:    {:?}", baskets.column_names());
    println!("Benchmarks: {:?}\n", benchmarks.column_names());

    let basket = baskets.column_names()[0].to_string();
    let index = benchmarks.column_names()[0].to_string();
    let result = compare(&baskets, &benchmarks, &basket, &index)?;

    println!("Comparison chart:");
    println!("{}\n", result.comparison.to_json()?);

    println!("Difference chart:");
    println!("{}", result.difference.to_json()?);

    Ok(())
}
