use clap::{App, Arg};
use std::fs;
use std::io::prelude::*;
use std::process::exit;

#[macro_use]
extern crate log;

mod ast;
mod pretty;
mod samples;

fn main() {
    let matches = App::new("garter")
        .version("0.1")
        .about("AST and pretty-printer for the garter language")
        .arg(
            Arg::with_name("list")
                .short("l")
                .long("list")
                .help("List the built-in sample programs"),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .help("Output file")
                .value_name("FILE"),
        )
        .arg(
            Arg::with_name("SAMPLE")
                .required_unless("list")
                .help("Sample program to render")
                .index(1),
        )
        .arg(
            Arg::with_name("verbose")
                .long("--verbose")
                .short("-v")
                .multiple(true)
                .help("Provides verbose output on stderr"),
        )
        .get_matches();

    let verbose = matches.occurrences_of("verbose");
    stderrlog::new().verbosity(verbose as usize).init().unwrap();

    if matches.is_present("list") {
        for (name, _) in samples::all() {
            println!("{}", name);
        }
        return;
    }

    let name = matches.value_of("SAMPLE").unwrap();
    let program = match samples::find(name) {
        Some(program) => program,
        None => {
            error!("No sample program named '{}'", name);
            exit(2);
        }
    };

    debug!("Rendering {} top-level statements", program.stmts.len());
    let text = pretty::pretty(&program);

    match matches.value_of("output") {
        Some(path) => {
            let file = fs::File::create(path).expect("Failed to open file for writing");
            write!(&file, "{}\n", text).expect("Failed to write output");
        }
        None => println!("{}", text),
    }
}
