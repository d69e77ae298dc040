//! Example: largest divisible subset.
//!
//! Run with:
//! `cargo run --example subset -- 4 8 2`

use divchain::{
    format_sequence, largest_divisible_chain, try_build_largest_divisible_subset,
};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let input: Vec<i64> = if args.is_empty() {
        vec![4, 8, 2, 3, 9, 27, 81]
    } else {
        match args.iter().map(|a| a.parse::<i64>()).collect::<Result<Vec<_>, _>>() {
            Ok(values) => values,
            Err(err) => {
                eprintln!("subset: {err}");
                std::process::exit(2);
            }
        }
    };

    let subset = match try_build_largest_divisible_subset(&input) {
        Ok(subset) => subset,
        Err(err) => {
            eprintln!("subset: {err}");
            std::process::exit(2);
        }
    };

    println!("Input:  {}", format_sequence(&input));
    println!("Subset: {}", format_sequence(&subset));
    println!("Chain:  {}", format_sequence(&largest_divisible_chain(&input)));
}
