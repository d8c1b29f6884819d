use std::fmt::Display;
use std::process;
use std::str::FromStr;

use clap::Parser;
use log::info;

use exact_rational::{Rational64, RationalNumber, Result, SimplifiedRational64};

/// Exact arithmetic on two fractions.
///
/// Each fraction is given as a separate numerator and denominator.
#[derive(Parser, Debug)]
#[clap(name = "rational-calc", version, allow_negative_numbers = true)]
struct Args {
    /// One of add, subtract, multiply, divide or compare
    operation: Operation,
    left_numerator: i64,
    left_denominator: i64,
    right_numerator: i64,
    right_denominator: i64,
    /// Keep operands and result in lowest terms
    #[clap(short, long)]
    simplified: bool,
}

#[derive(Debug, Copy, Clone)]
enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Compare,
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "add" => Ok(Self::Add),
            "subtract" => Ok(Self::Subtract),
            "multiply" => Ok(Self::Multiply),
            "divide" => Ok(Self::Divide),
            "compare" => Ok(Self::Compare),
            other => Err(format!("unknown operation \"{}\"", other)),
        }
    }
}

fn run<R>(args: &Args) -> Result<String>
where
    R: RationalNumber<Integer = i64> + Display,
{
    let left = R::construct(args.left_numerator, args.left_denominator)?;
    let right = R::construct(args.right_numerator, args.right_denominator)?;
    info!("{:?} on {} and {}", args.operation, left, right);

    let result = match args.operation {
        Operation::Add => left.add(&right)?,
        Operation::Subtract => left.subtract(&right)?,
        Operation::Multiply => left.multiply(&right)?,
        Operation::Divide => left.divide(&right)?,
        Operation::Compare => return Ok(format!("{:?}", left.compare_to(&right))),
    };

    Ok(result.to_string())
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let outcome = if args.simplified {
        run::<SimplifiedRational64>(&args)
    } else {
        run::<Rational64>(&args)
    };

    match outcome {
        Ok(output) => println!("{}", output),
        Err(error) => {
            eprintln!("error: {}", error);
            process::exit(1);
        }
    }
}
