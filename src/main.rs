use std::io;

use anyhow::Result;
use tracing::info;

use arbiter_proto::Interpreter;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("arbiter starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut interpreter = Interpreter::new();
    interpreter.run(stdin.lock(), stdout.lock())?;

    info!("arbiter shutting down");
    Ok(())
}
