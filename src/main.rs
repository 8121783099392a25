use basic_file_manager::{Dispatcher, WorkingDirectory};
use env_logger::{Builder as LogBuilder, Env};
use log::{error, info};
use std::io::{self, Write};
use std::process;

fn main() {
    // Stay quiet unless RUST_LOG asks otherwise; stderr also carries command failures
    LogBuilder::from_env(Env::default().default_filter_or("warn")).init();

    let workdir = match WorkingDirectory::from_process() {
        Ok(wd) => wd,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    info!("session starting in {}", workdir.current().display());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();

    let mut out = stdout.lock();
    if let Err(e) = writeln!(out, "Basic File Manager\nType 'help' for a list of commands.") {
        error!("cannot write to stdout: {}", e);
        process::exit(1);
    }

    let mut dispatcher = Dispatcher::new(stdin.lock(), out, stderr.lock(), workdir);
    if let Err(e) = dispatcher.run() {
        error!("session aborted: {}", e);
        process::exit(1);
    }
}
