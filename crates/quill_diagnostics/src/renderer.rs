//! Diagnostic rendering backends for human-readable and machine-readable output.

use crate::kinds::Diagnostic;
use crate::message::MessageSlot;
use crate::severity::Severity;
use quill_source::SourceFile;
use serde_json::{json, Value};

/// Trait for rendering diagnostics into formatted output strings.
pub trait DiagnosticRenderer {
    /// Renders a single diagnostic at `severity`, which may differ from the
    /// kind's declared severity when a lint policy promoted it.
    fn render_at(&self, diag: &Diagnostic, severity: Severity, source: &SourceFile) -> String;

    /// Renders a single diagnostic at its declared severity.
    fn render(&self, diag: &Diagnostic, source: &SourceFile) -> String {
        self.render_at(diag, diag.severity(), source)
    }
}

/// Renders diagnostics in a rustc-style terminal format.
///
/// Produces output like:
/// ```text
/// error[E034]: redeclaration of variable: x
///  --> app.js:2:5
///   |
/// 2 | let x;
///   |     ^
///   = note: variable already declared here
///    --> app.js:1:5
/// ```
///
/// Columns in `-->` lines are 1-indexed byte columns, as in
/// [`Location`](quill_source::Location). The caret underline is laid out in
/// characters so it stays under the right text on lines with multi-byte
/// characters.
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalRenderer {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
}

impl TerminalRenderer {
    /// Creates a new terminal renderer.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn severity_label(&self, severity: Severity) -> String {
        if !self.color {
            return severity.to_string();
        }
        let style = match severity {
            Severity::Error => "1;31",
            Severity::Warning => "1;33",
            Severity::Note => "1;36",
        };
        format!("\x1b[{style}m{severity}\x1b[0m")
    }
}

impl DiagnosticRenderer for TerminalRenderer {
    fn render_at(&self, diag: &Diagnostic, severity: Severity, source: &SourceFile) -> String {
        let message = diag.message();
        let labels = message.labels();
        let mut out = String::new();

        // Header line: severity[CODE]: message
        out.push_str(&format!(
            "{}[{}]: {}\n",
            self.severity_label(severity),
            message.code,
            message.primary.format(source)
        ));

        let (line, _) = source.line_col(message.primary.span().start);
        let line_num = line.to_string();
        let padding = " ".repeat(line_num.len());

        for label in labels.iter().filter(|label| label.is_primary()) {
            let span = label.span;
            let (_, col) = source.line_col(span.start);
            let line_content = source.line_text(span.start);
            out.push_str(&format!("{padding}--> {}\n", source.resolve(span)));
            out.push_str(&format!("{padding} |\n"));
            out.push_str(&format!("{line_num} | {line_content}\n"));

            let byte_col = (col as usize).saturating_sub(1);
            let (indent, width) = underline(line_content, byte_col, span.len() as usize);
            out.push_str(&format!(
                "{padding} | {}{}\n",
                " ".repeat(indent),
                "^".repeat(width)
            ));
        }

        let secondary = labels.iter().filter(|label| !label.is_primary());
        for (label, note) in secondary.zip(&message.notes) {
            out.push_str(&format!(
                "{padding} = {}: {}\n",
                self.severity_label(Severity::Note),
                note.format(source)
            ));
            out.push_str(&format!("{padding}   --> {}\n", source.resolve(label.span)));
        }

        out
    }
}

/// Returns the caret indent and width, in characters, for a span starting at
/// byte column `byte_col` of `line` and covering `len` bytes.
///
/// The underline stops at the end of the line and is at least one caret wide.
fn underline(line: &str, byte_col: usize, len: usize) -> (usize, usize) {
    let start = byte_col.min(line.len());
    let end = start.saturating_add(len).min(line.len());
    let chars = |from: usize, to: usize| {
        line.get(from..to)
            .map_or(to - from, |text| text.chars().count())
    };
    (chars(0, start), chars(start, end).max(1))
}

/// Renders diagnostics as JSON objects, one per diagnostic.
///
/// ```json
/// {"code":"E057","severity":"warning","message":"use of undeclared variable: foo",
///  "begin":14,"end":17,"notes":[]}
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonRenderer;

impl JsonRenderer {
    /// Creates a new JSON renderer.
    pub fn new() -> Self {
        Self
    }

    /// Builds the JSON value for one diagnostic reported at `severity`.
    pub fn to_value(&self, diag: &Diagnostic, severity: Severity, source: &SourceFile) -> Value {
        let message = diag.message();
        let mut value = slot_value(&message.primary, source);
        value["code"] = json!(message.code);
        value["severity"] = json!(severity);
        value["notes"] = message
            .notes
            .iter()
            .map(|note| slot_value(note, source))
            .collect();
        value
    }

    /// Renders diagnostics paired with their reported severities, as returned
    /// by [`DiagnosticSink::reported`](crate::DiagnosticSink::reported), into
    /// a single JSON array.
    pub fn render_all(
        &self,
        reported: &[(Diagnostic, Severity)],
        source: &SourceFile,
    ) -> String {
        let values: Vec<Value> = reported
            .iter()
            .map(|(diag, severity)| self.to_value(diag, *severity, source))
            .collect();
        Value::Array(values).to_string()
    }
}

impl DiagnosticRenderer for JsonRenderer {
    fn render_at(&self, diag: &Diagnostic, severity: Severity, source: &SourceFile) -> String {
        self.to_value(diag, severity, source).to_string()
    }
}

fn slot_value(slot: &MessageSlot<'_>, source: &SourceFile) -> Value {
    let span = slot.span();
    json!({
        "message": slot.format(source),
        "begin": span.begin(),
        "end": span.end(),
    })
}
