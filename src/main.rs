use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as ReplResult};

use lispy::Session;

fn main() -> Result<(), String> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        run_repl().map_err(|err| err.to_string())?;
    } else if let Err(err) = run_script(&args[1]) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
    Ok(())
}

fn run_script(filename: &str) -> lispy::Result<()> {
    let session = Session::new();
    session.run_script(filename, |value| println!("{value}"))
}

fn run_repl() -> ReplResult<()> {
    let mut rl = DefaultEditor::new()?;
    let session = Session::new();
    #[cfg(feature = "with-file-history")]
    if rl.load_history("history.txt").is_err() {
        println!("No previous history.");
    }
    loop {
        let readline = rl.readline("lispy> ");
        match readline {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                rl.add_history_entry(line.as_str())?;
                match session.eval_line(line.as_str()) {
                    Ok(Some(value)) => println!("{value}"),
                    Ok(None) => {}
                    Err(err) => eprintln!("Error: {err}"),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    #[cfg(feature = "with-file-history")]
    rl.save_history("history.txt")?;
    Ok(())
}
