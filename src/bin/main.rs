use clap::{CommandFactory, Parser, error::ErrorKind};
use mixed_radix_fft::{
    Algorithm, FftError, FftFloat, RadixStrategy,
    harness::{
        COMPOSITE_SIZES, POWER_OF_TWO_SIZES, Suite, accuracy_instances, run_accuracy, run_speed,
    },
};
use tracing_forest::{ForestLayer, util::LevelFilter};
use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short = 'a', long)]
    algorithm: Algorithm,

    /// 1: ascending prime factors, 2: descending prime factors, 3: factors grouped up to the
    /// threshold.
    #[arg(short = 'g', long, value_parser = clap::value_parser!(u8).range(1..=3))]
    radix_strategy: u8,

    #[arg(short = 'r', long)]
    threshold: Option<usize>,

    #[arg(short = 't', long = "test", default_value = "performance")]
    suite: Suite,

    #[arg(short = 'n', long)]
    non_powers_of_two: bool,

    #[arg(short = 's', long)]
    single_precision: bool,

    #[arg(short = 'p', long)]
    preamble: Option<String>,
}

impl Args {
    fn strategy(&self) -> RadixStrategy {
        let threshold = match (self.radix_strategy, self.threshold) {
            (3, None) => Self::command()
                .error(
                    ErrorKind::MissingRequiredArgument,
                    "--threshold is required with --radix-strategy 3",
                )
                .exit(),
            (_, threshold) => threshold.unwrap_or_default(),
        };

        RadixStrategy::from_option(self.radix_strategy, threshold)
            .unwrap_or_else(|err| Self::command().error(ErrorKind::ValueValidation, err).exit())
    }
}

fn run<F: FftFloat>(args: &Args, strategy: RadixStrategy) -> Result<(), FftError> {
    match args.suite {
        Suite::Accuracy => {
            let rows = run_accuracy(&accuracy_instances::<F>(), args.algorithm, strategy)?;
            println!("{:>8} {:>14} {:>14} {:>14}", "size", "time", "max error", "2-norm error");
            for row in rows {
                println!("{row}");
            }
        }
        Suite::Performance => {
            let sizes: &[usize] = if args.non_powers_of_two {
                &COMPOSITE_SIZES
            } else {
                &POWER_OF_TWO_SIZES
            };
            let rows = run_speed::<F>(sizes, args.algorithm, strategy)?;
            println!("{:>8} {:>6} {:>14} {:>14}", "size", "reps", "total", "average");
            for row in rows {
                println!("{row}");
            }
        }
    }
    Ok(())
}

fn main() -> Result<(), FftError> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    Registry::default()
        .with(env_filter)
        .with(ForestLayer::default())
        .init();

    let args = Args::parse();
    let strategy = args.strategy();

    println!("=========================================");
    if let Some(preamble) = &args.preamble {
        println!("{preamble}");
    }
    println!(
        "{} test, {} engine, {strategy:?}, {} precision",
        args.suite,
        args.algorithm,
        if args.single_precision { "single" } else { "double" }
    );

    if args.single_precision {
        run::<f32>(&args, strategy)
    } else {
        run::<f64>(&args, strategy)
    }
}
