use crate::config::load_config;
use crate::dataset::parse_dataset;
use crate::layout::{LayoutError, compute_layout};
use crate::layout_dump::write_layout_dump;
use crate::render::{render_message_svg, render_svg, write_output_svg};
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "ttr",
    version,
    about = "Thesis progress timeline renderer (Gantt-style JSON to SVG/PNG)"
)]
pub struct Args {
    /// Input timeline dataset (.json) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file (svg/png). Defaults to stdout for SVG if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "svg")]
    pub output_format: OutputFormat,

    /// Config JSON5 file (theme preset, themeVariables, viewport)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Chart width in pixels (stands in for the host container measurement)
    #[arg(short = 'w', long = "width", default_value_t = 1200.0)]
    pub width: f32,

    /// Minimum chart height in pixels; the surface grows past this to fit
    #[arg(short = 'H', long = "height", default_value_t = 400.0)]
    pub height: f32,

    /// Write the computed layout as JSON for inspection
    #[arg(long = "dumpLayout")]
    pub dump_layout: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormat {
    Svg,
    #[cfg(feature = "png")]
    Png,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let mut config = load_config(args.config.as_deref())?;
    config.render.width = args.width;
    config.render.height = args.height;
    config.viewport.height = args.height;

    let input = read_input(args.input.as_deref())?;
    let dataset = parse_dataset(&input)?;

    let svg = match compute_layout(
        &dataset,
        &config.theme,
        &config.viewport,
        config.render.width,
    ) {
        Ok(layout) => {
            if let Some(path) = args.dump_layout.as_deref() {
                write_layout_dump(path, &layout)?;
            }
            render_svg(&layout, &config.theme)
        }
        // An empty timeline is not a CLI failure; emit the same placeholder
        // the web page shows.
        Err(LayoutError::EmptyDataset) => render_message_svg(
            "No timeline data available",
            &config.theme,
            config.render.width,
            config.render.height,
        ),
    };

    match args.output_format {
        OutputFormat::Svg => {
            write_output_svg(&svg, args.output.as_deref())?;
        }
        #[cfg(feature = "png")]
        OutputFormat::Png => {
            let output = ensure_output(&args.output, "png")?;
            crate::render::write_output_png(
                &svg,
                &output,
                config.render.width,
                config.render.height,
            )?;
        }
    }
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        if path == Path::new("-") {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            return Ok(buf);
        }
        return Ok(std::fs::read_to_string(path)?);
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

#[cfg(feature = "png")]
fn ensure_output(output: &Option<PathBuf>, ext: &str) -> Result<PathBuf> {
    if let Some(path) = output {
        return Ok(path.clone());
    }
    Err(anyhow::anyhow!("Output path required for {} output", ext))
}
