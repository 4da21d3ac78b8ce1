//! Shuffles a set of random values and sorts it with every algorithm in turn,
//! printing the contents before and after.
//!
//! ```text
//! cargo run --example usage -- --len 40 --seed 7
//! RUST_LOG=simplesort=trace cargo run --example usage
//! ```

use std::error::Error;

use argh::FromArgs;
use log::{info, LevelFilter};

/// Sorts shuffled random values with each of the simplesort algorithms.
#[derive(FromArgs)]
struct Args {
    /// number of values to generate
    #[argh(option, default = "25")]
    len: usize,

    /// seed for value generation and shuffling, random if omitted
    #[argh(option)]
    seed: Option<u64>,

    /// values are drawn from `0..max` and scaled by 3.14, rounded down
    #[argh(option, default = "100")]
    max: u32,
}

fn ascending(a: &u64, b: &u64) -> bool {
    a < b
}

fn print_contents(label: &str, values: &[u64]) {
    println!("{label}:");
    let joined: Vec<String> = values.iter().map(u64::to_string).collect();
    println!("{}\n", joined.join(","));
}

fn shuffle_and_print(rng: &mut fastrand::Rng, values: &mut [u64]) {
    rng.shuffle(values);
    print_contents("Unsorted values", values);
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Args = argh::from_env();

    let seed = args.seed.unwrap_or_else(|| fastrand::u64(..));
    info!("generating {} values with seed {}", args.len, seed);

    let mut rng = fastrand::Rng::with_seed(seed);
    let mut values: Vec<u64> = (0..args.len)
        .map(|_| u64::from(rng.u32(0..args.max.max(1))) * 314 / 100)
        .collect();

    shuffle_and_print(&mut rng, &mut values);

    // A closure as the predicate.
    simplesort::bubble_sort(&mut values, |a, b| a < b);
    print_contents("Sorted via bubble sort", &values);
    shuffle_and_print(&mut rng, &mut values);

    // A function as the predicate.
    simplesort::insertion_sort(&mut values, ascending);
    print_contents("Sorted via insertion sort", &values);
    shuffle_and_print(&mut rng, &mut values);

    // A function pointer as the predicate.
    let less_than: fn(&u64, &u64) -> bool = ascending;
    simplesort::selection_sort(&mut values, less_than);
    print_contents("Sorted via selection sort", &values);
    shuffle_and_print(&mut rng, &mut values);

    if values.is_empty() {
        info!("no values to radix sort");
    } else {
        simplesort::radix_sort(&mut values)?;
        print_contents("Sorted via radix sort", &values);
        shuffle_and_print(&mut rng, &mut values);
    }

    // Non-strict descending predicate, as quicksort permits.
    simplesort::quicksort(&mut values, |a, b| a >= b);
    print_contents("Sorted descending via quicksort", &values);

    if let Ok(max) = simplesort::max_value(&values) {
        info!("largest value is {}", max);
    }

    Ok(())
}
