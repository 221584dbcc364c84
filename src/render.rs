//! Presentation of answers for the command line.

use serde::{Deserialize, Serialize};

use crate::types::answer::Answer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn render(answer: &Answer, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(answer)),
        OutputFormat::Json => render_json(answer),
    }
}

/// Plain-text rendering. Empty sections are omitted and `<br>` markup
/// becomes a line break; the record itself is never modified.
pub fn render_text(answer: &Answer) -> String {
    let record = &answer.record;
    let mut out = String::new();

    out.push_str(&format!("# {}\n", record.title));

    for (heading, body) in [
        (None, &record.content),
        (Some("Worked example"), &record.example),
        (Some("Exercise"), &record.exercise),
    ] {
        let body = to_plain_text(body);
        if body.is_empty() {
            continue;
        }
        out.push('\n');
        if let Some(heading) = heading {
            out.push_str(&format!("## {heading}\n"));
        }
        out.push_str(&body);
        out.push('\n');
    }

    out
}

pub fn render_json(answer: &Answer) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(answer)
}

fn to_plain_text(markup: &str) -> String {
    markup
        .replace("<br/>", "\n")
        .replace("<br />", "\n")
        .replace("<br>", "\n")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
