use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use anyhow::Context;
use serde::Serialize;

use ringbuff::buffer::{RingBuffer, SearchMode};
use ringbuff::core::config::BufferConfig;

use crate::command::{PlainFormat, PrintFormat};

#[derive(Serialize)]
pub struct DemoStep {
    action: String,
    outcome: String,
}

#[derive(Serialize)]
pub struct DemoReport {
    capacity: usize,
    mode: SearchMode,
    steps: Vec<DemoStep>,
}

impl DemoReport {
    fn step(&mut self, action: impl Into<String>, outcome: impl ToString) {
        self.steps.push(DemoStep { action: action.into(), outcome: outcome.to_string() });
    }
}

#[derive(Serialize)]
pub struct DedupReport {
    unique: Vec<String>,
    suppressed: usize,
}

fn display(element: Option<Vec<u8>>) -> String {
    element
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .unwrap_or_else(|| String::from("<none>"))
}

fn build_buffer(cfg: &BufferConfig) -> anyhow::Result<RingBuffer> {
    cfg.build().context("Error building ring buffer")
}

pub fn run_demo(cfg: &BufferConfig) -> anyhow::Result<DemoReport> {
    let buffer = build_buffer(cfg)?;
    let mut report = DemoReport {
        capacity: buffer.capacity(),
        mode: buffer.mode(),
        steps: Vec::new(),
    };

    let data = b"hello";
    report.step("hello in buffer", buffer.contains(data));

    buffer.add(data);
    report.step("hello in buffer", buffer.contains(data));

    buffer.add(b"hello2");
    buffer.add(b"hello3");
    report.step("most recent", display(buffer.recent()));
    report.step("oldest", display(buffer.oldest()));

    buffer.reset();
    report.step("hello in buffer", buffer.contains(data));

    Ok(report)
}

pub fn run_dedup(cfg: &BufferConfig, input: Option<&Path>) -> anyhow::Result<DedupReport> {
    let buffer = build_buffer(cfg)?;
    let reader: Box<dyn BufRead> = match input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Cannot open {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let mut report = DedupReport { unique: Vec::new(), suppressed: 0 };
    for line in reader.lines() {
        let line = line.context("Error reading input")?;
        if buffer.contains_or_add(line.as_bytes()) {
            report.suppressed += 1;
        } else {
            report.unique.push(line);
        }
    }
    log::debug!("dedup completed, {} lines suppressed", report.suppressed);
    Ok(report)
}

impl PrintFormat<PlainFormat> for DemoReport {
    fn print(&self) {
        println!("buffer :: capacity {} - {} mode", self.capacity, self.mode);
        for step in &self.steps {
            println!("{0: <16} :: {1}", step.action, step.outcome);
        }
    }
}

impl PrintFormat<PlainFormat> for DedupReport {
    fn print(&self) {
        for line in &self.unique {
            println!("{line}");
        }
        eprintln!("{} duplicated lines suppressed", self.suppressed);
    }
}
