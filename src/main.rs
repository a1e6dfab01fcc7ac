use pixel_distort::filters::{Filter, FilterParams};
use pixel_distort::image::io::{load_rgba_image, save_rgba_image};
use pixel_distort::image::PixelBuffer;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let input_name = prompt("Enter the file name to process: ")?;
    let input_name = if input_name.is_empty() {
        "input.png".to_string()
    } else {
        input_name
    };
    let mut img = load_with_fallback(&input_name)?;

    println!("Choose a filter:");
    println!("1. Solar rays");
    println!("2. Waves");
    println!("3. Color noise");
    println!("4. Glitch");
    println!("5. Grayscale");
    let choice = prompt("Choice: ")?;
    let choice: u32 = choice
        .parse()
        .map_err(|_| format!("filter choice must be a number, got {choice:?}"))?;
    let filter = Filter::from_menu_choice(choice)
        .ok_or_else(|| format!("invalid filter choice: {choice}"))?;

    let mut rng = rand::thread_rng();
    filter.apply(&mut img, &FilterParams::default(), &mut rng);

    let output_name = prompt("Enter the output file name: ")?;
    if output_name.is_empty() {
        return Err("no output file name given".to_string());
    }
    let output_path = Path::new("output").join(&output_name);
    save_rgba_image(&img, &output_path)?;
    println!("Processed image saved to {}", output_path.display());

    Ok(())
}

fn prompt(message: &str) -> Result<String, String> {
    print!("{message}");
    io::stdout()
        .flush()
        .map_err(|e| format!("Failed to flush stdout: {e}"))?;
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .map_err(|e| format!("Failed to read input: {e}"))?;
    Ok(line.trim().to_string())
}

/// Try the given name as-is, then one directory up. The tool is usually run
/// from a build subdirectory while test images sit in the project root.
fn load_with_fallback(name: &str) -> Result<PixelBuffer, String> {
    let primary = PathBuf::from(name);
    match load_rgba_image(&primary) {
        Ok(img) => Ok(img),
        Err(_) => load_rgba_image(&Path::new("..").join(name)).map_err(|_| {
            format!("image {name} not found in the current or the parent directory")
        }),
    }
}
