#[macro_use]
extern crate log;
extern crate fern;

mod settings;

use clap::{App, Arg, ArgMatches};
use npywriter::{input, npy, NpyError, Result};
use std::process;

use crate::settings::{default_output, flag_or_env, key_or_default, key_or_none, Settings};

fn main() {
    let matches = get_matches();
    let settings = match get_settings(&matches) {
        Some(settings) => settings,
        None => {
            eprintln!("no input file, pass --input or set NPY_INPUT");
            process::exit(2);
        }
    };

    if let Err(e) = prepare_logger(settings.verbosity, settings.log_file.as_deref()) {
        eprintln!("unable to set up logging: {}", e);
        process::exit(2);
    }

    if let Err(e) = run(&settings) {
        error!("{}", e);
        process::exit(exit_code(&e));
    }
}

/// 2 when the input was rejected, 1 for io and csv failures
fn exit_code(e: &NpyError) -> i32 {
    if e.is_invalid_input() {
        2
    } else {
        1
    }
}

fn run(settings: &Settings) -> Result<()> {
    info!("reading {}", settings.input);
    let rows = input::read_csv_file(&settings.input, settings.has_headers)?;
    let shape = npy::save(&settings.output, &rows)?;
    info!(
        "wrote {} array ({} bytes of data) to {}",
        shape,
        shape.payload_len(),
        settings.output
    );
    Ok(())
}

/// Gets configuration values from CLI arguments, falling back to environment variables
/// if they don't exist and to default values if neither exist.
fn get_settings(matches: &ArgMatches) -> Option<Settings> {
    let input = matches
        .value_of("input")
        .map(String::from)
        .or_else(|| key_or_none("NPY_INPUT"))?;
    let output = matches
        .value_of("output")
        .map(String::from)
        .unwrap_or_else(|| key_or_default("NPY_OUTPUT", &default_output(&input)));
    let has_headers = flag_or_env(matches.is_present("headers"), "NPY_CSV_HEADERS");
    let log_file = matches
        .value_of("log_file")
        .map(String::from)
        .or_else(|| key_or_none("NPY_LOG_FILE"));
    let verbosity = matches.occurrences_of("v") as u8;

    Some(Settings {
        input,
        output,
        has_headers,
        log_file,
        verbosity,
    })
}

fn prepare_logger(verbosity: u8, log_file: Option<&str>) -> std::result::Result<(), fern::InitError> {
    let level = match verbosity {
        0 => log::LevelFilter::Error,
        1 => log::LevelFilter::Warn,
        2 => log::LevelFilter::Info,
        3 => log::LevelFilter::Debug,
        _ => log::LevelFilter::max(),
    };

    let dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S:%f]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout());

    let dispatch = match log_file {
        Some(fname) => dispatch.chain(fern::log_file(fname)?),
        None => dispatch,
    };
    dispatch.apply()?;
    Ok(())
}

/// Parses the command line.
fn get_matches<'a>() -> ArgMatches<'a> {
    App::new("npywrite")
        .version("0.1.0")
        .about("convert a csv matrix of floats into a .npy file (>f4)")
        .arg(
            Arg::with_name("input")
                .short("i")
                .long("input")
                .value_name("INPUT")
                .help("Sets the csv file to read")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .value_name("OUTPUT")
                .help("Sets the .npy file to write (default: input with .npy extension)")
                .takes_value(true),
        )
        .arg(Arg::with_name("headers").long("headers").help(
            "The first csv record is a header row",
        ))
        .arg(Arg::with_name("v").short("v").multiple(true).help(
            "Sets the level of verbosity",
        ))
        .arg(
            Arg::with_name("log_file")
                .short("l")
                .long("log_file")
                .value_name("LOG_FILE")
                .help("Sets the log file to write to")
                .takes_value(true),
        )
        .get_matches()
}
