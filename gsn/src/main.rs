use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use gsn::io::cli::Cli;
use gsn::io::output::NestOutput;
use gsn::io::svg_export::sheet_to_svg;
use gsn::opt::gsn_optimizer::GSNOptimizer;
use gsn::{EPOCH, io, rng_from_config};
use log::info;
use sheetnest::io::{export, import};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = io::read_config(args.config_file.as_deref())?;
    info!("[MAIN] successfully parsed NestConfig: {config:?}");

    let input_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid name")?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let ext_instance = io::read_instance(&args.input_file)?;
    let instance = import::import_instance(&ext_instance)?;

    let rng = rng_from_config(&config);
    let result = GSNOptimizer::new(instance.clone(), config.clone(), rng)?.solve(None)?;

    {
        let output = NestOutput {
            instance: ext_instance,
            solution: export::export_result(&result, *EPOCH),
            config: config.clone(),
        };
        let solution_path = args.solution_folder.join(format!("sol_{input_stem}.json"));
        io::write_json(&output, Path::new(&solution_path))?;
    }

    for sheet_index in 0..result.sheets_used {
        let svg_path = args
            .solution_folder
            .join(format!("sol_{input_stem}_{sheet_index}.svg"));
        let svg = sheet_to_svg(
            sheet_index,
            &result,
            &instance,
            &config,
            config.svg_draw_options,
        );
        io::write_svg(&svg, Path::new(&svg_path))?;
    }

    Ok(())
}
