use std::io::{self, Read};
use std::path::Path;
use std::sync::Arc;

use tamil_core::convert::convert_text;
use tamil_core::mapping::MappingTable;
use tamil_core::translit::Transliterator;
use tamil_session::{Mode, PhoneticSession};

/// `text`, or all of stdin when absent.
fn read_text(text: Option<&str>) -> String {
    match text {
        Some(t) => t.to_string(),
        None => {
            let mut buf = String::new();
            die!(io::stdin().read_to_string(&mut buf), "Error reading stdin: {}");
            buf
        }
    }
}

/// Convert line by line so the line structure of stdin survives.
pub fn convert_cmd(table: &MappingTable, text: Option<&str>, english: bool, status: bool) {
    let input = read_text(text);
    let mut last_status = None;
    for line in input.lines() {
        let conversion = convert_text(table, line, !english);
        println!("{}", conversion.text);
        last_status = conversion.status;
    }
    if status {
        if let Some(event) = last_status {
            eprintln!("{event}");
        }
    }
}

pub fn explain_cmd(table: &MappingTable, word: &str, json: bool) {
    let explanation = Transliterator::new(table).explain(word);
    if json {
        println!(
            "{}",
            die!(
                serde_json::to_string_pretty(&explanation),
                "JSON serialization failed: {}"
            )
        );
        return;
    }

    println!("word: {}", explanation.word);
    if let Some(ref out) = explanation.exception {
        println!("  exception \u{2192} {out}");
    }
    for (i, step) in explanation.steps.iter().enumerate() {
        let fused = if step.fused { " (fused)" } else { "" };
        println!(
            "  #{:>2} {:<12} {:<6} \u{2192} {}{}",
            i + 1,
            step.rule.as_str(),
            step.input,
            step.output,
            fused
        );
    }
    println!("output: {}", explanation.output);
}

pub fn save_cmd(table: MappingTable, output_file: &str, text: Option<&str>, english: bool) {
    let input = read_text(text);
    let mut session = PhoneticSession::new(Arc::new(table));
    if english {
        session = session.with_mode(Mode::English);
    }
    session.set_input(&input);
    die!(session.save_to(Path::new(output_file)), "Error: {}");
    println!("{}", session.status());
}
