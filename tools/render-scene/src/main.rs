// Renders the demo scene to a PNG file.
//
// Usage:
//   render-scene [-o <output.png>] [-w <width>] [-h <height>]
//   render-scene --list-modes
//
// Log verbosity follows RUST_LOG (default: info).

use anyhow::{bail, Context, Result};
use scanfill::logging::{init_logging, LoggingConfig};
use scanfill::BlendMode;
use std::path::PathBuf;

const DEFAULT_OUTPUT: &str = "output.png";
const DEFAULT_WIDTH: u32 = 800;
const DEFAULT_HEIGHT: u32 = 600;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Render {
        output: PathBuf,
        width: u32,
        height: u32,
    },
    ListModes,
    Help,
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let args: Vec<String> = std::env::args().skip(1).collect();
    match parse_args(&args)? {
        Command::Help => print_usage(),
        Command::ListModes => {
            for mode in BlendMode::ALL {
                println!("{}", mode);
            }
        }
        Command::Render {
            output,
            width,
            height,
        } => {
            log::info!("rendering demo scene at {}x{}", width, height);
            let image = scanfill::render_demo_scene(width, height);
            image
                .save(&output)
                .with_context(|| format!("failed to write {}", output.display()))?;
            println!("Saved: {}", output.display());
        }
    }
    Ok(())
}

fn print_usage() {
    eprintln!("render-scene - render the scanfill demo scene to PNG");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -o <path>      Output file (default: {})", DEFAULT_OUTPUT);
    eprintln!("  -w <width>     Canvas width (default: {})", DEFAULT_WIDTH);
    eprintln!("  -h <height>    Canvas height (default: {})", DEFAULT_HEIGHT);
    eprintln!("  --list-modes   Print the available blend modes");
    eprintln!("  --help         Show this message");
}

fn parse_args(args: &[String]) -> Result<Command> {
    let mut output = PathBuf::from(DEFAULT_OUTPUT);
    let mut width = DEFAULT_WIDTH;
    let mut height = DEFAULT_HEIGHT;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--list-modes" => return Ok(Command::ListModes),
            "--help" => return Ok(Command::Help),
            flag @ ("-o" | "-w" | "-h") => {
                let Some(value) = args.get(i + 1) else {
                    bail!("missing value for {}", flag);
                };
                match flag {
                    "-o" => output = PathBuf::from(value),
                    "-w" => width = parse_dimension("width", value)?,
                    _ => height = parse_dimension("height", value)?,
                }
                i += 2;
            }
            other => bail!("unknown option: {}", other),
        }
    }

    Ok(Command::Render {
        output,
        width,
        height,
    })
}

fn parse_dimension(what: &str, value: &str) -> Result<u32> {
    let n: u32 = value
        .parse()
        .with_context(|| format!("invalid {}: '{}'", what, value))?;
    if n == 0 {
        bail!("{} must be positive", what);
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        assert_eq!(
            parse_args(&[]).unwrap(),
            Command::Render {
                output: PathBuf::from("output.png"),
                width: 800,
                height: 600,
            }
        );
    }

    #[test]
    fn test_all_options() {
        let cmd = parse_args(&args(&["-w", "320", "-o", "out/a.png", "-h", "200"])).unwrap();
        assert_eq!(
            cmd,
            Command::Render {
                output: PathBuf::from("out/a.png"),
                width: 320,
                height: 200,
            }
        );
    }

    #[test]
    fn test_list_modes() {
        assert_eq!(parse_args(&args(&["--list-modes"])).unwrap(), Command::ListModes);
    }

    #[test]
    fn test_invalid_numbers() {
        assert!(parse_args(&args(&["-w", "wide"])).is_err());
        assert!(parse_args(&args(&["-h", "-5"])).is_err());
        assert!(parse_args(&args(&["-w", "0"])).is_err());
    }

    #[test]
    fn test_missing_value_and_unknown_flag() {
        let err = parse_args(&args(&["-o"])).unwrap_err();
        assert_eq!(err.to_string(), "missing value for -o");
        assert!(parse_args(&args(&["--bogus"])).is_err());
    }
}
