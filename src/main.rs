//tabpad/src/main.rs
use std::io::{self, BufRead, Write};

use tabpad::host::{Host, HostCommand};
use tabpad::kernel::services::adapters::{ensure_settings_file, load_settings};

mod logging;

fn main() -> io::Result<()> {
    let _logging = logging::init();

    if let Err(e) = ensure_settings_file() {
        tracing::warn!(error = %e, "settings file not created");
    }
    let settings = load_settings();
    let mut host = Host::new(&settings)?;
    if !host.storage().is_supported() {
        eprintln!("file storage not supported: save/open/files/rm are unavailable");
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    write!(stdout, "> ")?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        match HostCommand::parse(&line) {
            Ok(Some(HostCommand::Quit)) => break,
            Ok(Some(command)) => match host.execute(command) {
                Ok(output) => {
                    for out in output {
                        writeln!(stdout, "{}", out)?;
                    }
                }
                Err(e) => {
                    tracing::debug!(error = %e, line = %line, "command failed");
                    eprintln!("error: {}", e);
                }
            },
            Ok(None) => {}
            Err(e) => eprintln!("error: {}", e),
        }
        write!(stdout, "> ")?;
        stdout.flush()?;
    }

    tracing::info!("session closed");
    Ok(())
}
