use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use knockout_core::{make_black_transparent, FilterOptions, KnockoutError, Outcome, Threshold};
use tracing::debug;

// Raw, CLI input
#[derive(Parser, Debug)]
#[command(version, about = "Make near-black pixels of an image transparent.", long_about = None)]
pub struct CliArgs {
    #[arg(help = "The image to process (JPEG, PNG, BMP, GIF, TIFF or WebP).")]
    pub input: PathBuf,

    #[arg(help = "Where to save the result. Must end in `.png`.")]
    pub output: PathBuf,

    #[arg(
        short,
        long,
        default_value_t = Threshold::DEFAULT.value(),
        help = "Pixels whose red, green and blue values are all at or below this (0-255) become transparent."
    )]
    pub threshold: u8,
}

impl CliArgs {
    pub fn options(&self) -> FilterOptions {
        FilterOptions::new(self.threshold)
    }
}

/// Render the one-line user message for a finished run.
pub fn report(result: &Result<Outcome, KnockoutError>) -> (String, bool) {
    match result {
        Ok(Outcome::Saved(summary)) => (
            format!(
                "Success! Image with transparent background saved to '{}'",
                summary.output.display()
            ),
            true,
        ),
        Ok(Outcome::InputNotFound(path)) => (
            format!("Error: The file '{}' was not found.", path.display()),
            false,
        ),
        Err(e) => (format!("Error: {e}"), false),
    }
}

pub fn run(args: &CliArgs) -> ExitCode {
    let result = make_black_transparent(&args.input, &args.output, &args.options());
    let (message, to_stdout) = report(&result);

    if to_stdout {
        println!("{message}");
    } else {
        eprintln!("{message}");
    }

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = ?e, "Knockout failed");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::codecs::png::PngEncoder;
    use image::{ExtendedColorType, ImageEncoder};
    use knockout_core::Summary;

    fn parse(args: &[&str]) -> Result<CliArgs, clap::Error> {
        CliArgs::try_parse_from(std::iter::once("knockout").chain(args.iter().copied()))
    }

    #[test]
    fn test_default_threshold() {
        let args = parse(&["in.jpeg", "out.png"]).unwrap();
        assert_eq!(args.threshold, 20);
        assert_eq!(args.options().threshold, Threshold(20));
    }

    #[test]
    fn test_threshold_flag() {
        let args = parse(&["in.jpeg", "out.png", "--threshold", "0"]).unwrap();
        assert_eq!(args.threshold, 0);

        let args = parse(&["-t", "255", "in.jpeg", "out.png"]).unwrap();
        assert_eq!(args.threshold, 255);
    }

    #[test]
    fn test_threshold_out_of_range_rejected() {
        assert!(parse(&["in.jpeg", "out.png", "--threshold", "256"]).is_err());
        assert!(parse(&["in.jpeg", "out.png", "--threshold", "-1"]).is_err());
    }

    #[test]
    fn test_missing_output_rejected() {
        assert!(parse(&["in.jpeg"]).is_err());
    }

    #[test]
    fn test_report_success_message() {
        let (msg, to_stdout) = report(&Ok(Outcome::Saved(Summary {
            output: PathBuf::from("result_transparent.png"),
            width: 4,
            height: 3,
            replaced: 5,
        })));
        assert_eq!(
            msg,
            "Success! Image with transparent background saved to 'result_transparent.png'"
        );
        assert!(to_stdout);
    }

    #[test]
    fn test_report_not_found_uses_reported_path() {
        let (msg, to_stdout) = report(&Ok(Outcome::InputNotFound(PathBuf::from(
            "photos/team.jpeg",
        ))));
        assert_eq!(msg, "Error: The file 'photos/team.jpeg' was not found.");
        assert!(!to_stdout);
    }

    #[test]
    fn test_report_error_message() {
        let (msg, to_stdout) = report(&Err(KnockoutError::InvalidOutputFormat(PathBuf::from(
            "x.jpg",
        ))));
        assert_eq!(
            msg,
            "Error: Output file must be a .png to support transparency: 'x.jpg'"
        );
        assert!(!to_stdout);
    }

    #[test]
    fn test_run_success_and_soft_failure() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.png");
        let output = dir.path().join("out.png");

        let mut bytes = Vec::new();
        PngEncoder::new(&mut bytes)
            .write_image(&[0, 0, 0], 1, 1, ExtendedColorType::Rgb8)
            .unwrap();
        std::fs::write(&input, bytes).unwrap();

        let args = CliArgs {
            input: input.clone(),
            output: output.clone(),
            threshold: 20,
        };
        assert_eq!(run(&args), ExitCode::SUCCESS);
        let written = image::open(&output).unwrap().into_rgba8();
        assert_eq!(written.into_raw(), vec![255, 255, 255, 0]);

        let missing = CliArgs {
            input: dir.path().join("missing.jpeg"),
            output: dir.path().join("other.png"),
            threshold: 20,
        };
        assert_eq!(run(&missing), ExitCode::SUCCESS);
        assert!(!dir.path().join("other.png").exists());
    }

    #[test]
    fn test_run_invalid_output_fails() {
        let args = CliArgs {
            input: PathBuf::from("in.jpeg"),
            output: PathBuf::from("out.jpg"),
            threshold: 20,
        };
        assert_eq!(run(&args), ExitCode::FAILURE);
    }
}
