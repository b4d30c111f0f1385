// Copyright 2024 Arrange Developers

use anyhow::{ensure, Result};
use arrange_permutation::{deinterleave_permutation, shuffle, shuffle_naive};
use arrange_utils::tracing::init_tracing;
use clap::Parser;
use tracing::info;

#[derive(Debug, Parser)]
struct Args {
	/// The string whose characters are shuffled
	#[arg(long, default_value = "qwerty")]
	input: String,
	/// How many times to move the odd-indexed characters to the end
	#[arg(long, default_value_t = 1)]
	iterations: u64,
	/// Also run the step-by-step shuffle and check that both agree
	#[arg(long, default_value_t = false)]
	verify: bool,
}

fn main() -> Result<()> {
	let args = Args::parse();
	init_tracing();

	let len = args.input.chars().count();
	let order = deinterleave_permutation(len).order();
	info!(len, ?order, iterations = args.iterations, "shuffling");

	let shuffled = shuffle(&args.input, args.iterations)?;
	if args.verify {
		let chars = args.input.chars().collect::<Vec<_>>();
		let naive = shuffle_naive(&chars, args.iterations)
			.into_iter()
			.collect::<String>();
		ensure!(naive == shuffled, "step-by-step shuffle produced {naive:?}, expected {shuffled:?}");
		info!("step-by-step shuffle agrees");
	}

	println!("{shuffled}");
	Ok(())
}
