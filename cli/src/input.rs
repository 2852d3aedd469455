use std::io::{self, Write};

pub fn prompt(message: &str) -> String {
    print!("{}", message);
    let _ = io::stdout().flush();

    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) => std::process::exit(0),
        Ok(_) => line,
        Err(e) => {
            eprintln!("Failed to read input: {}", e);
            std::process::exit(1);
        }
    }
}
