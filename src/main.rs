use std::fs;

use clap::Parser;
use multiop::{Interpreter, scan};

/// MultiOp is a small, easy to read scripting language with
/// indentation-structured blocks, functions and lists.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells multiop to look at a file instead of an inline script.
    #[arg(short, long)]
    file: bool,

    /// Prints the token stream for the input instead of executing it. The
    /// input does not need to be a valid program.
    #[arg(short, long)]
    tokens: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    if args.tokens {
        for (token, span) in scan(&script) {
            println!("{:>3}..{:<3} {token:?}", span.start, span.end);
        }
        return;
    }

    let mut interpreter = Interpreter::new();
    let output = interpreter.execute(&script);
    if !output.is_empty() {
        println!("{output}");
    }
}
