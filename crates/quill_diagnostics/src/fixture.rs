//! Distinct field values for building one diagnostic of every kind in tests.

use crate::language::{StatementKind, VariableKind};
use quill_source::{Identifier, Span};

/// Hands out increasing offsets so no two fixture spans coincide.
#[derive(Default)]
pub(crate) struct FixtureSeq {
    next: u32,
}

impl FixtureSeq {
    fn bump(&mut self) -> u32 {
        self.next += 1;
        self.next
    }
}

pub(crate) trait Fixture {
    fn fixture(seq: &mut FixtureSeq) -> Self;
}

impl Fixture for Span {
    fn fixture(seq: &mut FixtureSeq) -> Self {
        let n = seq.bump();
        Span::new(n * 10, n * 10 + 3)
    }
}

impl Fixture for Identifier {
    fn fixture(seq: &mut FixtureSeq) -> Self {
        let span = Span::fixture(seq);
        Identifier::new(span, format!("name{}", span.start))
    }
}

impl Fixture for StatementKind {
    fn fixture(seq: &mut FixtureSeq) -> Self {
        const KINDS: [StatementKind; 6] = [
            StatementKind::DoWhileLoop,
            StatementKind::ForLoop,
            StatementKind::IfStatement,
            StatementKind::WhileLoop,
            StatementKind::WithStatement,
            StatementKind::LabelledStatement,
        ];
        KINDS[seq.bump() as usize % KINDS.len()]
    }
}

impl Fixture for VariableKind {
    fn fixture(seq: &mut FixtureSeq) -> Self {
        if seq.bump() % 2 == 0 {
            VariableKind::Const
        } else {
            VariableKind::Let
        }
    }
}

impl Fixture for char {
    fn fixture(seq: &mut FixtureSeq) -> Self {
        if seq.bump() % 2 == 0 {
            '('
        } else {
            ')'
        }
    }
}
