//! Message templates bound to diagnostic fields, and the default formatter.
//!
//! Every diagnostic kind produces a [`DiagnosticMessage`]: a primary
//! [`MessageSlot`] and zero or more note slots. A slot pairs a static template
//! with positional arguments borrowed from the diagnostic's fields. Argument 0
//! is always the slot's anchor, the span the message is attached to.
//!
//! Template syntax:
//!
//! - `{N}` interpolates argument `N`
//! - `{N:headlinese}` / `{N:singular}` pick a statement-kind textualization
//! - `{{` is a literal `{`; a lone `}` is a literal `}`

use crate::code::DiagnosticCode;
use crate::label::{Label, LabelStyle};
use crate::language::StatementKind;
use crate::severity::Severity;
use quill_source::{Identifier, SourceFile, Span};

/// A positional argument of a message template.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MessageArg<'a> {
    /// Renders as the source text the span covers.
    Span(Span),
    /// Renders as the identifier's normalized name.
    Identifier(&'a Identifier),
    /// Renders through [`StatementKind::headlinese`] or [`StatementKind::singular`].
    StatementKind(StatementKind),
    /// Renders as the character itself.
    Char(char),
}

impl MessageArg<'_> {
    /// Returns the source span behind this argument, if it has one.
    pub fn span(&self) -> Option<Span> {
        match self {
            MessageArg::Span(span) => Some(*span),
            MessageArg::Identifier(ident) => Some(ident.span),
            MessageArg::StatementKind(_) | MessageArg::Char(_) => None,
        }
    }
}

impl From<Span> for MessageArg<'_> {
    fn from(span: Span) -> Self {
        MessageArg::Span(span)
    }
}

impl From<&Span> for MessageArg<'_> {
    fn from(span: &Span) -> Self {
        MessageArg::Span(*span)
    }
}

impl<'a> From<&'a Identifier> for MessageArg<'a> {
    fn from(ident: &'a Identifier) -> Self {
        MessageArg::Identifier(ident)
    }
}

impl From<&StatementKind> for MessageArg<'_> {
    fn from(kind: &StatementKind) -> Self {
        MessageArg::StatementKind(*kind)
    }
}

impl From<&char> for MessageArg<'_> {
    fn from(c: &char) -> Self {
        MessageArg::Char(*c)
    }
}

/// One message of a diagnostic: a template plus its arguments.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MessageSlot<'a> {
    /// The untranslated template, e.g. `"use of undeclared variable: {0}"`.
    pub template: &'static str,
    /// Positional arguments; argument 0 is the anchor.
    pub args: Vec<MessageArg<'a>>,
}

impl<'a> MessageSlot<'a> {
    pub(crate) fn new(template: &'static str, args: Vec<MessageArg<'a>>) -> Self {
        Self { template, args }
    }

    /// Returns the span this message is attached to.
    pub fn span(&self) -> Span {
        self.args
            .first()
            .and_then(MessageArg::span)
            .unwrap_or_default()
    }

    /// Formats this message against the analyzed source.
    pub fn format(&self, source: &SourceFile) -> String {
        format_message(self, source)
    }
}

/// Everything needed to render one diagnostic.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DiagnosticMessage<'a> {
    /// The kind's stable code.
    pub code: DiagnosticCode,
    /// The kind's severity.
    pub severity: Severity,
    /// The message attached to the error site.
    pub primary: MessageSlot<'a>,
    /// Supporting messages, in declaration order. Empty for kinds without notes.
    pub notes: Vec<MessageSlot<'a>>,
}

impl DiagnosticMessage<'_> {
    /// Returns the implicated spans: the primary site first, then each note site.
    pub fn labels(&self) -> Vec<Label> {
        std::iter::once(Label::primary(self.primary.span()))
            .chain(self.notes.iter().map(|note| Label::secondary(note.span())))
            .collect()
    }

    /// Returns the implicated spans as `(span, style)` pairs.
    pub fn spans(&self) -> Vec<(Span, LabelStyle)> {
        self.labels()
            .into_iter()
            .map(|label| (label.span, label.style))
            .collect()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum ArgStyle {
    Plain,
    Headlinese,
    Singular,
}

/// Formats a message slot, interpolating its arguments.
///
/// Placeholders that cannot be parsed, or that name a missing argument, are
/// copied to the output verbatim.
pub fn format_message(slot: &MessageSlot<'_>, source: &SourceFile) -> String {
    let mut out = String::with_capacity(slot.template.len());
    let mut rest = slot.template;
    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        if let Some(after) = tail.strip_prefix("{{") {
            out.push('{');
            rest = after;
            continue;
        }
        if let Some(after) = tail.strip_prefix('}') {
            out.push('}');
            rest = after;
            continue;
        }

        let placeholder = tail
            .find('}')
            .and_then(|end| parse_placeholder(&tail[1..end]).map(|parsed| (end, parsed)));
        match placeholder {
            Some((end, (index, style))) => {
                match slot.args.get(index) {
                    Some(arg) => render_arg(arg, style, source, &mut out),
                    None => out.push_str(&tail[..=end]),
                }
                rest = &tail[end + 1..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn parse_placeholder(body: &str) -> Option<(usize, ArgStyle)> {
    let (index, style) = match body.split_once(':') {
        Some((index, "headlinese")) => (index, ArgStyle::Headlinese),
        Some((index, "singular")) => (index, ArgStyle::Singular),
        Some(_) => return None,
        None => (body, ArgStyle::Plain),
    };
    Some((index.parse().ok()?, style))
}

fn render_arg(arg: &MessageArg<'_>, style: ArgStyle, source: &SourceFile, out: &mut String) {
    match arg {
        MessageArg::Span(span) => out.push_str(source.snippet(*span)),
        MessageArg::Identifier(ident) => out.push_str(ident.name()),
        MessageArg::StatementKind(kind) => out.push_str(match style {
            ArgStyle::Singular => kind.singular(),
            ArgStyle::Plain | ArgStyle::Headlinese => kind.headlinese(),
        }),
        MessageArg::Char(c) => out.push(*c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(text: &str) -> SourceFile {
        SourceFile::new("test.js", text.to_string())
    }

    #[test]
    fn plain_template() {
        let src = source("x");
        let slot = MessageSlot::new("unexpected token", vec![Span::new(0, 1).into()]);
        assert_eq!(format_message(&slot, &src), "unexpected token");
    }

    #[test]
    fn span_argument_renders_source_text() {
        let src = source("let x += 1;");
        let slot = MessageSlot::new(
            "cannot update variable with '{0}' while declaring it",
            vec![Span::new(6, 8).into()],
        );
        assert_eq!(
            format_message(&slot, &src),
            "cannot update variable with '+=' while declaring it"
        );
    }

    #[test]
    fn identifier_argument_renders_normalized_name() {
        let src = source(r"\u{61} = 1;");
        let ident = Identifier::new(Span::new(0, 6), "a");
        let slot = MessageSlot::new("use of undeclared variable: {0}", vec![(&ident).into()]);
        assert_eq!(format_message(&slot, &src), "use of undeclared variable: a");
    }

    #[test]
    fn statement_kind_styles() {
        let src = source("if (x) class C {}");
        let kind = StatementKind::IfStatement;
        let slot = MessageSlot::new(
            "{1:headlinese} / {1:singular} / {1}",
            vec![Span::new(7, 12).into(), (&kind).into()],
        );
        assert_eq!(
            format_message(&slot, &src),
            "'if' statement / an 'if' statement / 'if' statement"
        );
    }

    #[test]
    fn char_argument() {
        let src = source("if x) {}");
        let slot = MessageSlot::new(
            "if statement is missing '{1}' around condition",
            vec![Span::new(3, 4).into(), (&'(').into()],
        );
        assert_eq!(
            format_message(&slot, &src),
            "if statement is missing '(' around condition"
        );
    }

    #[test]
    fn braces() {
        let src = source("export a;");
        let slot = MessageSlot::new(
            "exporting requires '{{' and '}'",
            vec![Span::new(7, 8).into()],
        );
        assert_eq!(format_message(&slot, &src), "exporting requires '{' and '}'");

        let slot = MessageSlot::new("expected '{{'", vec![Span::new(0, 0).into()]);
        assert_eq!(format_message(&slot, &src), "expected '{'");
    }

    #[test]
    fn malformed_placeholders_are_verbatim() {
        let src = source("abc");
        let slot = MessageSlot::new(
            "{5} {0:shouting} {x} {",
            vec![Span::new(0, 3).into()],
        );
        assert_eq!(format_message(&slot, &src), "{5} {0:shouting} {x} {");
    }

    #[test]
    fn anchor_span() {
        let ident = Identifier::new(Span::new(4, 7), "foo");
        let slot = MessageSlot::new("{0}", vec![(&ident).into()]);
        assert_eq!(slot.span(), Span::new(4, 7));

        let kind = StatementKind::ForLoop;
        let slot = MessageSlot::new("{0}", vec![(&kind).into()]);
        assert_eq!(slot.span(), Span::default());
    }
}
