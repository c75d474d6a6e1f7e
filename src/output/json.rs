//! JSON output formatting

use std::io;

use serde::Serialize;

/// Print a value (the built tree or a summary) as pretty-printed JSON to
/// stdout.
pub fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
    let json =
        serde_json::to_string_pretty(value).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    println!("{}", json);
    Ok(())
}
