
mod report;

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};

use anyhow::{anyhow, Context, Result};
use clap::{App, Arg};
use log::{error, info};

use automata::lexer::tokenize;
use automata::parser::{load_table, Grammar, ParseTable, Verdict, PDA};

use report::{write_trace, Tee};

const TABLE_PATH: &str = "../input.txt";
const OUTPUT_PATH: &str = "../result.txt";
const START: &str = "E";
const TERMINALS: &str = "i()*+";

/*
 * Reads the input to recognize on stdin, and the parsing
 * table from a file. The trace goes both to stdout and to
 * the output file.
 *
 * Whether the input is accepted or not, the program succeeds :
 * the verdict is the last line of the trace.
 */

fn grammar(start: &str, terminals: &str) -> Result<Grammar> {
    let start = match tokenize(start).as_slice() {
        [token] => *token,
        _ => return Err(anyhow!("The start symbol must be exactly one symbol, got \"{}\"", start)),
    };

    Ok(Grammar::new(start, tokenize(terminals)))
}

// Unlike a single-word read, the whole of stdin is taken : `i * i` parses as `i*i`.
fn read_input() -> Result<String> {
    let mut s = String::new();
    io::stdin().read_to_string(&mut s).context("Couldn't read stdin")?;
    Ok(s)
}

fn run(table_path: &str, output_path: &str, grammar: &Grammar, print_table: bool) -> Result<()> {
    let table = match load_table(table_path, grammar) {
        Ok(table) => table,
        Err(e) if e.is_unavailable() => {
            error!("File Not Found ({})", e);
            ParseTable::new()
        },
        Err(e) => return Err(e.into()),
    };
    info!("Loaded {} cells from {}", table.len(), table_path);

    if print_table {
        print!("{}", table);
        println!();
    }

    let input = read_input()?;

    let file = File::create(output_path)
        .with_context(|| format!("Couldn't open {}", output_path))?;
    let stdout = io::stdout();
    let mut out = Tee::new(stdout.lock(), BufWriter::new(file));

    let pda = PDA::new(grammar, &table);
    let mut run = pda.run_str(&input);
    write_trace(&mut out, run.by_ref())
        .with_context(|| format!("Couldn't write the trace to {}", output_path))?;
    out.flush()?;

    match run.verdict() {
        Some(Verdict::Accepted) => info!("Accepted"),
        Some(Verdict::Rejected(e)) => info!("Rejected : {}", e),
        None => (),
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let matches = App::new("ll1")
        .version(clap::crate_version!())
        .author(clap::crate_authors!())
        .about("Recognizes the string read on stdin with a predictive parsing table")
        .arg(Arg::with_name("table")
            .help("The parsing table")
            .long("table")
            .takes_value(true)
            .default_value(TABLE_PATH))
        .arg(Arg::with_name("output")
            .help("Where to write the trace")
            .short("o")
            .long("output")
            .takes_value(true)
            .default_value(OUTPUT_PATH))
        .arg(Arg::with_name("start")
            .help("The start symbol")
            .long("start")
            .takes_value(true)
            .default_value(START))
        .arg(Arg::with_name("terminals")
            .help("The terminal symbols, e.g. \"i()*+\"")
            .long("terminals")
            .takes_value(true)
            .default_value(TERMINALS))
        .arg(Arg::with_name("print-table")
            .help("Prints the parsing table before the trace")
            .long("print-table"))
        .get_matches();

    let grammar = grammar(
        matches.value_of("start").unwrap_or(START),
        matches.value_of("terminals").unwrap_or(TERMINALS),
    )?;

    run(
        matches.value_of("table").unwrap_or(TABLE_PATH),
        matches.value_of("output").unwrap_or(OUTPUT_PATH),
        &grammar,
        matches.is_present("print-table"),
    )
}
