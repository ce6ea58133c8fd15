//! Writes rover reports to stdout.

use serde::Serialize;

/// Envelope for `--json` output: `{ "ok": true, "data": [...] }`.
#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Prints `reports` either as one JSON document or one `line(report)` per row.
pub fn print_out<T: Serialize>(
    json: bool,
    reports: &[T],
    line: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                data: reports,
            })?
        );
    } else {
        for report in reports {
            println!("{}", line(report));
        }
    }
    Ok(())
}
