use serde::Serialize;
use serde_json::json;

use crate::args::OutFormat;

pub fn execute_command<Cmd, Res>(out_format: OutFormat, command: Cmd)
where
    Cmd: FnOnce() -> anyhow::Result<Res>,
    Res: Printable,
{
    match (command(), out_format) {
        (Ok(result), fmt) => result.print(fmt),
        (Err(error), OutFormat::Plain) => eprintln!("Error during command execution - {error:#}"),
        (Err(error), OutFormat::Json) => eprintln!(
            "{}",
            json!({ "out": "error", "message": format!("{error:#}") })
        ),
    }
}

pub trait Printable {
    fn print(&self, format: OutFormat);
}

impl<T> Printable for T
where
    T: PrintFormat<JsonFormat> + PrintFormat<PlainFormat>,
{
    fn print(&self, format: OutFormat) {
        match format {
            OutFormat::Plain => PrintFormat::<PlainFormat>::print(self),
            OutFormat::Json => PrintFormat::<JsonFormat>::print(self),
        }
    }
}

pub struct JsonFormat;
pub struct PlainFormat;
pub trait PrintFormat<F> {
    fn print(&self);
}

impl<S> PrintFormat<JsonFormat> for S
where
    S: Serialize,
{
    fn print(&self) {
        match serde_json::to_string(self) {
            Ok(serialized) => println!("{serialized}"),
            Err(err) => eprintln!("Error serializing result in json format - {err}"),
        }
    }
}
