#[cfg(feature = "cairo-backend")]
use activity_heatmap::api::{FileSink, ImageSink, RenderJob, render_png};
#[cfg(feature = "cairo-backend")]
use std::fs;
#[cfg(feature = "cairo-backend")]
use std::path::PathBuf;

#[cfg(feature = "cairo-backend")]
const DEFAULT_OUTPUT_DIR: &str = ".";
#[cfg(feature = "cairo-backend")]
const DEFAULT_OUTPUT_NAME: &str = "activity.png";

#[cfg(feature = "cairo-backend")]
#[derive(Debug)]
struct CliArgs {
    input_path: PathBuf,
    output_dir: PathBuf,
    output_name: String,
}

#[cfg(feature = "cairo-backend")]
fn main() {
    let _ = activity_heatmap::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cairo-backend"))]
fn main() {
    eprintln!("this tool requires feature `cairo-backend`");
    std::process::exit(1);
}

#[cfg(feature = "cairo-backend")]
fn run() -> Result<(), String> {
    let args = parse_args()?;

    let raw = fs::read_to_string(&args.input_path).map_err(|err| {
        format!(
            "failed to read render job `{}`: {err}",
            args.input_path.display()
        )
    })?;
    let job = RenderJob::from_json_str(&raw).map_err(|err| err.to_string())?;

    let png = render_png(&job.config, &job.series)
        .map_err(|err| format!("render failed: {err}"))?;

    let mut sink = FileSink::new(&args.output_dir);
    sink.deliver(&args.output_name, &png)
        .map_err(|err| err.to_string())?;

    for path in sink.written() {
        println!(
            "rendered {} day(s) -> {} ({} bytes)",
            job.series.len(),
            path.display(),
            png.len()
        );
    }
    Ok(())
}

#[cfg(feature = "cairo-backend")]
fn parse_args() -> Result<CliArgs, String> {
    let mut input_path: Option<PathBuf> = None;
    let mut output_dir = PathBuf::from(DEFAULT_OUTPUT_DIR);
    let mut output_name = DEFAULT_OUTPUT_NAME.to_owned();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input_path = Some(PathBuf::from(value));
            }
            "--output-dir" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output-dir".to_owned())?;
                output_dir = PathBuf::from(value);
            }
            "--name" => {
                output_name = args
                    .next()
                    .ok_or_else(|| "missing value for --name".to_owned())?;
            }
            "--help" | "-h" => {
                println!("{}", usage_message());
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    let input_path =
        input_path.ok_or_else(|| format!("--input is required\n\n{}", usage_message()))?;
    Ok(CliArgs {
        input_path,
        output_dir,
        output_name,
    })
}

#[cfg(feature = "cairo-backend")]
fn usage_message() -> String {
    format!(
        "Usage: cargo run --features cairo-backend --bin render_activity_chart -- \
         --input <job.json> [options]\n\n\
         The job file holds {{\"config\": {{...}}, \"series\": [..]}}; \
         config fields are optional.\n\n\
         Options:\n  \
         --input <path>        Render job JSON\n  \
         --output-dir <path>   Directory for the PNG (default: {DEFAULT_OUTPUT_DIR})\n  \
         --name <file>         PNG file name (default: {DEFAULT_OUTPUT_NAME})\n  \
         -h, --help            Show this message"
    )
}
