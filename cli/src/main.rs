mod commands;
mod flatten;
mod parser;

use clap::{value_t_or_exit, App, Arg, ArgMatches, SubCommand};
use commands::*;
use polyflat::flatten::FlattenOptions;

use std::fs::File;
use std::io::prelude::*;
use std::io::stdout;
use std::process;

fn main() {
    env_logger::init();

    let matches = App::new("Polyflat command-line interface")
        .version("0.1")
        .about("Approximates bézier curves with polylines")
        .subcommand(
            SubCommand::with_name("flatten")
                .about("Flattens quadratic and cubic bézier curves")
                .arg(
                    Arg::with_name("CURVES")
                        .value_name("CURVES")
                        .help("Curves such as \"Q 0 0 5 1 10 0; C 0 0 0 10 10 10 10 0\"")
                        .takes_value(true)
                        .required(false),
                )
                .arg(
                    Arg::with_name("INPUT")
                        .help("Reads the curves from a file, one per line")
                        .short("i")
                        .long("input")
                        .value_name("FILE")
                        .takes_value(true)
                        .required(false),
                )
                .arg(
                    Arg::with_name("OUTPUT")
                        .help("Sets the output file to use")
                        .value_name("FILE")
                        .short("o")
                        .long("output")
                        .takes_value(true)
                        .required(false),
                )
                .arg(
                    Arg::with_name("SCALE")
                        .short("s")
                        .long("scale")
                        .help("Sets the approximation scale (0.5 by default)")
                        .value_name("SCALE")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("ANGLE_TOLERANCE")
                        .short("a")
                        .long("angle-tolerance")
                        .help("Sets the angle tolerance in radians (disabled by default)")
                        .value_name("ANGLE")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("CUSP_LIMIT")
                        .short("c")
                        .long("cusp-limit")
                        .help("Sets the cusp limit in radians (disabled by default)")
                        .value_name("ANGLE")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("RECURSION_LIMIT")
                        .short("r")
                        .long("recursion-limit")
                        .help("Sets the maximum subdivision depth (12 by default)")
                        .value_name("LIMIT")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("INTEGER")
                        .long("integer")
                        .help("Rounds the input to integer coordinates"),
                )
                .arg(
                    Arg::with_name("COUNT")
                        .long("count")
                        .help("Prints the number of curves and vertices"),
                ),
        )
        .get_matches();

    if let Some(flatten_matches) = matches.subcommand_matches("flatten") {
        let mut input_buffer = flatten_matches
            .value_of("CURVES")
            .unwrap_or("")
            .to_string();

        if let Some(input_file) = flatten_matches.value_of("INPUT") {
            let read = File::open(input_file).and_then(|mut file| {
                input_buffer.push('\n');
                file.read_to_string(&mut input_buffer)
            });
            if let Err(e) = read {
                eprintln!("Cannot read file {}: {}", input_file, e);
                process::exit(1);
            }
        }

        let output: Box<dyn Write> = match flatten_matches.value_of("OUTPUT") {
            Some(output_file) => match File::create(output_file) {
                Ok(file) => Box::new(file),
                Err(e) => {
                    eprintln!("Cannot create file {}: {}", output_file, e);
                    process::exit(1);
                }
            },
            None => Box::new(stdout()),
        };

        let curves = match parser::parse_curves(&input_buffer) {
            Ok(curves) => curves,
            Err(e) => {
                eprintln!("{}", flatten::FlattenError::from(e));
                process::exit(1);
            }
        };

        let cmd = FlattenCmd {
            curves,
            output,
            options: get_options(flatten_matches),
            integer: flatten_matches.is_present("INTEGER"),
            count: flatten_matches.is_present("COUNT"),
        };

        if let Err(e) = flatten::flatten(cmd) {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}

fn get_options(matches: &ArgMatches) -> FlattenOptions {
    let mut options = FlattenOptions::DEFAULT;

    if matches.is_present("SCALE") {
        options.approximation_scale = value_t_or_exit!(matches, "SCALE", f64);
    }
    if matches.is_present("ANGLE_TOLERANCE") {
        options.angle_tolerance = value_t_or_exit!(matches, "ANGLE_TOLERANCE", f64);
    }
    if matches.is_present("CUSP_LIMIT") {
        options.cusp_limit = value_t_or_exit!(matches, "CUSP_LIMIT", f64);
    }
    if matches.is_present("RECURSION_LIMIT") {
        options.recursion_limit = value_t_or_exit!(matches, "RECURSION_LIMIT", u32);
    }

    options
}
