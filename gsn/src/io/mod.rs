use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use log::{LevelFilter, info, warn};
use serde::Serialize;
use sheetnest::io::ext_repr::ExtNestInstance;
use svg::Document;

use crate::EPOCH;
use crate::config::NestConfig;

pub mod cli;
pub mod output;
pub mod svg_export;
pub mod svg_util;

pub fn read_instance(path: &Path) -> Result<ExtNestInstance> {
    let file = File::open(path)
        .with_context(|| format!("could not open instance file: {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("could not parse instance file: {}", path.display()))
}

/// Reads a [`NestConfig`] from `path`, or falls back to the default one
pub fn read_config(path: Option<&Path>) -> Result<NestConfig> {
    match path {
        None => {
            warn!("[MAIN] no config file provided, use --config-file to provide a custom config");
            Ok(NestConfig::default())
        }
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("could not open config file: {}", path.display()))?;
            serde_json::from_reader(BufReader::new(file)).context("incorrect config file format")
        }
    }
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open solution file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, json)
        .with_context(|| format!("could not write solution file: {}", path.display()))?;

    info!(
        "[IO] solution written to file://{}",
        fs::canonicalize(path)?.to_str().unwrap_or("?")
    );
    Ok(())
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document)
        .with_context(|| format!("could not write svg file: {}", path.display()))?;
    info!(
        "[IO] svg written to file://{}",
        fs::canonicalize(path)?.to_str().unwrap_or("?")
    );
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    //elapsed times are measured from the first log call onwards otherwise
    LazyLock::force(&EPOCH);

    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        // Add blanket level filter
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()
        .context("could not initialize logger")?;

    info!("[MAIN] start time: {}", jiff::Timestamp::now());
    Ok(())
}
