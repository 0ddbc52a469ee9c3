//! HTML pages.
//!
//! Pages are assembled as strings; every piece of user-supplied text goes
//! through [`escape_html`] first.

use mm2_core::{Calculation, Formatted, StepKind};

use crate::form::{FormFields, INTERARRIVAL_FIELD, SERVICE_FIELD};

const STYLE: &str = "body{font-family:sans-serif;max-width:44rem;margin:2rem auto;padding:0 1rem}\
label{display:block;margin-top:1rem}\
.error{color:#a00;border:1px solid #a00;padding:.5rem}\
.step{border-top:1px solid #ccc;margin-top:1rem}\
pre{background:#f6f6f6;padding:.5rem}\
table{border-collapse:collapse}td,th{padding:.25rem .75rem;text-align:left}";

/// The input form, optionally with an error and previously entered values.
pub fn form_page(fields: &FormFields, error: Option<&str>) -> String {
    let mut body = String::new();
    body.push_str("<h1>M/M/2 Queue Calculator</h1>\n");
    body.push_str(
        "<p>Enter the mean time between arrivals and the mean service time \
         of one server, both in minutes.</p>\n",
    );

    if let Some(message) = error {
        body.push_str(&format!(
            "<p class=\"error\">{}</p>\n",
            escape_html(message)
        ));
    }

    body.push_str("<form method=\"post\" action=\"/\">\n");
    body.push_str(&input_field(
        INTERARRIVAL_FIELD,
        "Interarrival time (minutes)",
        fields.interarrival_text(),
    ));
    body.push_str(&input_field(
        SERVICE_FIELD,
        "Service time per server (minutes)",
        fields.service_text(),
    ));
    body.push_str("<p><button type=\"submit\">Calculate</button></p>\n</form>\n");

    document("M/M/2 Queue Calculator", &body)
}

/// The result page: inputs, metric summary and every derivation step.
pub fn result_page(calc: &Calculation) -> String {
    let mut body = String::new();
    body.push_str("<h1>M/M/2 Queue Results</h1>\n");

    body.push_str(&format!(
        "<p>Interarrival time: {} minutes<br>Service time: {} minutes</p>\n",
        Formatted::exact(calc.input.interarrival_min),
        Formatted::exact(calc.input.service_min),
    ));

    body.push_str("<table>\n<tr><th>Metric</th><th>Value</th><th>Unit</th></tr>\n");
    for step in &calc.steps {
        body.push_str(&format!(
            "<tr><td>{} ({})</td><td>{}</td><td>{}</td></tr>\n",
            escape_html(step.kind.symbol()),
            escape_html(step.kind.label()),
            Formatted::display(step.result),
            step.kind.unit().unwrap_or(""),
        ));
    }
    body.push_str("</table>\n");

    for step in &calc.steps {
        body.push_str(&format!(
            "<section class=\"step\" id=\"{}\">\n<h2>{}</h2>\n<p>Formula: <code>{}</code></p>\n<pre>",
            step_anchor(step.kind),
            escape_html(&step.title),
            escape_html(&step.formula),
        ));
        let lines: Vec<String> = step
            .substitution_lines
            .iter()
            .map(|line| escape_html(line))
            .collect();
        body.push_str(&lines.join("\n"));
        body.push_str("</pre>\n</section>\n");
    }

    body.push_str("<p><a href=\"/\">Calculate again</a></p>\n");
    document("M/M/2 Queue Results", &body)
}

fn step_anchor(kind: StepKind) -> String {
    format!("step-{}", kind.number())
}

fn input_field(name: &str, label: &str, value: &str) -> String {
    format!(
        "<label for=\"{name}\">{label}</label>\n\
         <input id=\"{name}\" name=\"{name}\" type=\"text\" inputmode=\"decimal\" value=\"{value}\">\n",
        name = name,
        label = escape_html(label),
        value = escape_html(value),
    )
}

fn document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n<style>{}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape_html(title),
        STYLE,
        body
    )
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
