use std::{env, io, process};

use plox::Plox;

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut stdout = io::stdout();
    let mut plox = Plox::new(&mut stdout);

    match args.len() {
        n if n > 2 => {
            println!("Usage: plox [script]");
            process::exit(64);
        }
        2 => {
            let code = plox.run_file(&args[1]);
            process::exit(code);
        }
        _ => plox.run_prompt(),
    }
}
