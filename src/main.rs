// calcpaper: a scratchpad calculator with bit-layout display

mod calculator;
mod display;
mod parser;
mod ui;

use std::fs;
use std::io;
use std::io::Read;
use std::path::{Path, PathBuf};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use calculator::{Calculator, Language};
use ui::App;

struct Options {
    language: Language,
    print_mode: bool,
    file: Option<PathBuf>,
}

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} [options] [file.txt]", program_name);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -l, --lang <zh|en>   message language (default: en)");
    eprintln!("  -p, --print          evaluate and print annotated output, no TUI");
    eprintln!("  -h, --help           show this help");
    eprintln!("  -V, --version        show version");
    eprintln!();
    eprintln!("With no file, the TUI starts with an empty scratchpad.");
    eprintln!("With -p and no file, the document is read from stdin.");
}

fn parse_args(args: &[String], program_name: &str) -> Options {
    let mut options = Options {
        language: Language::En,
        print_mode: false,
        file: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage(program_name);
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("calcpaper {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "-p" | "--print" => {
                options.print_mode = true;
            }
            "-l" | "--lang" => {
                i += 1;
                match args.get(i).map(String::as_str) {
                    Some("zh") => options.language = Language::Zh,
                    Some("en") => options.language = Language::En,
                    Some(other) => {
                        eprintln!("Error: unknown language '{}', expected zh or en", other);
                        std::process::exit(1);
                    }
                    None => {
                        eprintln!("Error: {} requires an argument", args[i - 1]);
                        std::process::exit(1);
                    }
                }
            }
            flag if flag.starts_with('-') => {
                eprintln!("Error: unknown option '{}'", flag);
                print_usage(program_name);
                std::process::exit(1);
            }
            file => {
                if options.file.is_some() {
                    eprintln!("Error: more than one input file given");
                    std::process::exit(1);
                }
                options.file = Some(PathBuf::from(file));
            }
        }
        i += 1;
    }

    options
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args
        .first()
        .map(|s| s.as_str())
        .unwrap_or("calcpaper")
        .to_string();

    let options = parse_args(&args, &program_name);

    if let Some(path) = &options.file {
        if !Path::new(path).exists() {
            eprintln!("Error: File '{}' not found", path.display());
            std::process::exit(1);
        }
    }

    if options.print_mode {
        let text = match &options.file {
            Some(path) => fs::read_to_string(path)?,
            None => {
                let mut buf = String::new();
                io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };

        let mut calc = Calculator::new(options.language);
        calc.process_text(&text);
        println!("{}", calc.format_output());
        return Ok(());
    }

    let text = match &options.file {
        Some(path) => fs::read_to_string(path)?,
        None => String::new(),
    };

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(options.language, &text, options.file);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
