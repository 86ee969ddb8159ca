use std::{fs::read_to_string, io, path::PathBuf, process::exit, rc::Rc, time::Instant};

use clap::Parser as _;
use matrix_lang::{
    display_error, errors::errors::Error, interpreter::interpreter::Interpreter, lexer::lexer::tokenize,
    parser::parser::parse, type_checker::type_checker::TypeChecker,
};
use tracing::{info, Level};

#[derive(clap::Parser, Debug)]
#[command(name = "matrix-lang", version, about = "Type checker and interpreter for a small matrix language")]
struct Cli {
    /// Source file to run
    file: PathBuf,

    /// Type check only, without evaluating
    #[arg(long, default_value_t = false)]
    check: bool,

    /// Log more (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn fail(errors: &[Error], source: &str, file_name: &str) -> ! {
    for error in errors {
        display_error(error, source, file_name);
    }
    exit(1)
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_max_level(level)
        .init();

    let file_name = cli
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.file.to_string_lossy().into_owned());

    let source = match read_to_string(&cli.file) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Error: cannot read {}: {}", cli.file.display(), error);
            exit(1);
        }
    };

    let start = Instant::now();

    let tokens = match tokenize(source.clone(), Some(file_name.clone())) {
        Ok(tokens) => tokens,
        Err(error) => fail(&[error], &source, &file_name),
    };
    info!(tokens = tokens.len(), elapsed = ?start.elapsed(), "tokenized");

    let parse_start = Instant::now();
    let (_, program) = parse(tokens, Rc::new(file_name.clone()));
    let program = match program {
        Ok(program) => program,
        Err(error) => fail(&[error], &source, &file_name),
    };
    info!(statements = program.body.len(), elapsed = ?parse_start.elapsed(), "parsed");

    let check_start = Instant::now();
    let mut type_checker = TypeChecker::new();
    let success = type_checker.check(&program);
    info!(success, elapsed = ?check_start.elapsed(), "type checked");

    if !success {
        fail(type_checker.diagnostics(), &source, &file_name);
    }
    if cli.check {
        return;
    }

    let run_start = Instant::now();
    let mut interpreter = Interpreter::new();
    match interpreter.run(&program) {
        Ok(returned) => {
            info!(returned = ?returned, elapsed = ?run_start.elapsed(), "evaluated");
            info!(elapsed = ?start.elapsed(), "total");
        }
        Err(error) => fail(&[error], &source, &file_name),
    }
}
