// Renders the fixed 240x240 synthwave grid wallpaper into the current
// directory. Takes no arguments; the geometry is fully deterministic.

use rgb332_prep::background;
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let canvas = background::render();
    match canvas.save(Path::new(background::OUTPUT_NAME)) {
        Ok(()) => {
            println!("Created {}", background::OUTPUT_NAME);
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("Error: failed to write {}: {error}", background::OUTPUT_NAME);
            ExitCode::FAILURE
        }
    }
}
