// CLI for the RGB332 color compensator. Usage:
//   compensate <input-image> [-o|--output <path>]
// Without -o the output lands next to the input with a `_compensated` suffix.

use rgb332_prep::compensator::default_output_path;
use rgb332_prep::parallel_compensator::ParallelCompensator;
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

struct Args {
    input: PathBuf,
    output: Option<PathBuf>,
}

fn parse_args(mut args: env::Args) -> Result<Args, String> {
    let program = args.next().unwrap_or_else(|| "compensate".into());
    let usage = format!("Usage: {program} <input-image> [-o|--output <path>]");

    let mut input = None;
    let mut output = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-o" | "--output" => {
                let value = args.next().ok_or(format!("{arg} requires a value\n{usage}"))?;
                output = Some(PathBuf::from(value));
            }
            _ if input.is_none() => input = Some(PathBuf::from(arg)),
            _ => return Err(format!("Unexpected argument: {arg}\n{usage}")),
        }
    }

    let input = input.ok_or(usage)?;
    Ok(Args { input, output })
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = match parse_args(env::args()) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    if !args.input.exists() {
        eprintln!("Error: {} not found", args.input.display());
        return ExitCode::FAILURE;
    }

    let output = args
        .output
        .unwrap_or_else(|| default_output_path(&args.input));

    match ParallelCompensator::new()
        .compensate_image(&args.input, &output)
        .await
    {
        Ok(()) => {
            println!("Saved compensated image to {}", output.display());
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("Error: {error:#}");
            ExitCode::FAILURE
        }
    }
}
