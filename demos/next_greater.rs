// Copyright 2024 Arrange Developers

use anyhow::Result;
use arrange_digits::Digits;
use arrange_utils::tracing::init_tracing;
use clap::Parser;
use tracing::info;

#[derive(Debug, Parser)]
struct Args {
	/// A positive integer of any length
	#[arg(long, default_value = "321321")]
	number: String,
}

fn main() -> Result<()> {
	let args = Args::parse();
	init_tracing();

	let digits = args.number.parse::<Digits>()?;
	match digits.next_greater_arrangement() {
		Some(next) => println!("{next}"),
		None => {
			info!(%digits, "no greater arrangement exists");
			println!("{digits}");
		}
	}
	Ok(())
}
