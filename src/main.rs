use log::{debug, error, info};
use notation_calc::config::Config;
use notation_calc::menu::{self, MenuChoice};
use notation_calc::{InvalidExpression, Notation};
use rustyline::{error::ReadlineError, DefaultEditor};
use thiserror::Error;

type DynResult = Result<(), Box<dyn std::error::Error>>;

const ERROR_PREFIX_COLOR: &str = "\x1b[41mError:\x1b[0m";
const ERROR_PREFIX_PLAIN: &str = "Error:";

#[derive(Debug, Error)]
enum CliError {
    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("Unknown mode `{0}`, expected `-i`, `-e <notation> <expr>` or `-f <notation> <file>`")]
    UnknownMode(String),

    #[error("{0} of {1} expressions were invalid")]
    InvalidLines(usize, usize),
}

fn main() -> DynResult {
    let dotenv = dotenvy::dotenv();
    env_logger::init();
    if let Err(e) = dotenv {
        debug!("dotenvy load with error {}", e);
    }

    let config = Config::from_env()?;
    let args = std::env::args().collect::<Vec<String>>();
    debug!("{:?}", args);

    match args.get(1).map(String::as_str) {
        None | Some("-i") => repl(&config),
        Some("-e") => {
            let notation = notation_arg(&args)?;
            let expr = args.get(3).ok_or(CliError::MissingArgument("expression"))?;
            eval_once(notation, expr, &config)
        }
        Some("-f") => {
            let notation = notation_arg(&args)?;
            let path = args.get(3).ok_or(CliError::MissingArgument("file name"))?;
            read_from_file(notation, path, &config)
        }
        Some(mode) => Err(Box::new(CliError::UnknownMode(mode.to_string()))),
    }
}

fn notation_arg(args: &[String]) -> Result<Notation, Box<dyn std::error::Error>> {
    let name = args.get(2).ok_or(CliError::MissingArgument("notation"))?;
    Ok(name.parse::<Notation>()?)
}

fn report_invalid(expr: &str, err: &InvalidExpression, config: &Config) {
    let prefix = if config.use_color {
        ERROR_PREFIX_COLOR
    } else {
        ERROR_PREFIX_PLAIN
    };
    eprintln!("{} Invalid expression '{}': {}", prefix, expr, err);
    if let Some(span) = err.span() {
        eprintln!("    {}", expr);
        eprintln!("    {}", span.underline(expr));
    }
}

fn run_expr(notation: Notation, expr: &str, config: &Config) -> Result<(), InvalidExpression> {
    match notation.evaluate(expr) {
        Ok(value) => {
            println!("{} = {}", expr, value);
            Ok(())
        }
        Err(err) => {
            report_invalid(expr, &err, config);
            Err(err)
        }
    }
}

// failures are reported by `run_expr`, so exit instead of returning them
fn eval_once(notation: Notation, expr: &str, config: &Config) -> DynResult {
    if run_expr(notation, expr, config).is_err() {
        std::process::exit(1);
    }
    Ok(())
}

fn read_from_file(notation: Notation, file_path: &str, config: &Config) -> DynResult {
    info!("Read {} expressions from {}", notation, file_path);
    let contents = std::fs::read_to_string(file_path)?;

    let mut total = 0;
    let mut failed = 0;
    for line in contents.lines().map(str::trim).filter(|l| !l.is_empty()) {
        total += 1;
        if run_expr(notation, line, config).is_err() {
            failed += 1;
        }
    }

    if failed > 0 {
        eprintln!("{}", CliError::InvalidLines(failed, total));
        std::process::exit(1);
    }
    Ok(())
}

fn repl(config: &Config) -> DynResult {
    info!("Running in REPL mode");

    let mut rl = DefaultEditor::new()?;
    if let Some(path) = &config.history_file {
        if let Err(e) = rl.load_history(path) {
            debug!("history not loaded from {}: {}", path.display(), e);
        }
    }

    loop {
        let notation = match config.notation {
            Some(notation) => notation,
            None => match choose_notation(&mut rl)? {
                MenuChoice::Evaluate(notation) => notation,
                MenuChoice::Quit => break,
            },
        };
        expression_loop(&mut rl, notation, config)?;
        if config.notation.is_some() {
            break;
        }
    }

    if let Some(path) = &config.history_file {
        rl.save_history(path).unwrap_or_else(|e| error!("{}", e));
    }
    Ok(())
}

fn choose_notation(rl: &mut DefaultEditor) -> Result<MenuChoice, Box<dyn std::error::Error>> {
    loop {
        println!("{}", menu::menu_text());
        match rl.readline(&menu::menu_prompt()) {
            Ok(line) => match menu::parse_menu(&line) {
                Ok(choice) => return Ok(choice),
                Err(e) => println!("{}\n", e),
            },
            Err(ReadlineError::Eof) => return Ok(MenuChoice::Quit),
            Err(ReadlineError::Interrupted) => return Ok(MenuChoice::Quit),
            Err(err) => {
                return Err(Box::new(err));
            }
        }
    }
}

fn expression_loop(rl: &mut DefaultEditor, notation: Notation, config: &Config) -> DynResult {
    let prompt = format!("Enter {} expression> ", notation);

    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                let expr = line.trim();
                if expr.is_empty() {
                    continue;
                }
                rl.add_history_entry(expr)?;
                if expr == "quit" || expr == "q" {
                    break;
                }
                run_expr(notation, expr, config)
                    .unwrap_or_else(|e| debug!("rejected {:?}: {:?}", expr, e));
            }
            Err(ReadlineError::Eof) => break,
            Err(ReadlineError::Interrupted) => break,
            Err(err) => {
                return Err(Box::new(err));
            }
        }
    }

    Ok(())
}
