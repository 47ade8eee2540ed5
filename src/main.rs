use std::{env, io};

use interpreter::repl::repl;

fn main() -> io::Result<()> {
    let user = env::var("USER").unwrap_or_else(|_| String::from("user"));

    println!("   ____ PROGRAMMING LANGUAGE\n\n {}, press Ctrl+C to exit", user);

    let stdin = io::stdin();
    let stdout = io::stdout();

    repl::start(&mut stdin.lock(), &mut stdout.lock())
}
