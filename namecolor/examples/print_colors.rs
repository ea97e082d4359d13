//! Print the name color of every argument.
//!
//! `cargo run --example print_colors -- [--old] [--describe] <text>...`
//!
//! With `--describe` the arguments are treated as color descriptions.
//! Set `RUST_LOG=trace` to see the checksum of each name.
use env_logger::Env;
use namecolor::{
    ComputeOptions, DescribeOptions, Era, EraSelection, NameColor, compute,
    described_by,
};

fn print(text: &str, color: Option<NameColor>) {
    match color {
        Some(NameColor::Rgb(entry)) => println!(
            "{text:>24}: #{} {:<6} ({}, {}, {})",
            entry.to_hex(),
            entry.describer,
            entry.red,
            entry.green,
            entry.blue
        ),
        Some(NameColor::Hex(hex)) => println!("{text:>24}: #{hex}"),
        None => println!("{text:>24}: no match"),
    }
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let mut old = false;
    let mut describe = false;
    let mut texts = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--old" => old = true,
            "--describe" => describe = true,
            _ => texts.push(arg),
        }
    }

    if describe {
        let era = if old { EraSelection::Old } else { EraSelection::Auto };
        let options = DescribeOptions::default().with_era(era);
        for text in &texts {
            print(text, described_by(text, &options));
        }
    } else {
        let era = if old { Era::Old } else { Era::Modern };
        let options = ComputeOptions::default().with_era(era);
        for text in &texts {
            print(text, Some(compute(text, &options)));
        }
    }
}
