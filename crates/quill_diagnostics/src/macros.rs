//! The table macro that generates the diagnostic taxonomy.

/// Defines every diagnostic kind from a single table.
///
/// Each entry reads:
///
/// ```text
/// StructName(E123) {
///     field: Type,
///     ...
/// }
/// Error("primary template", anchor, args...)
/// note("note template", anchor, args...)
/// ;
/// ```
///
/// Message arguments are expressions over the kind's fields, which are in
/// scope by reference. For each entry this generates the struct, its
/// associated constants, and its `message` method; for the whole table it
/// generates the [`Diagnostic`](crate::Diagnostic) sum type and the fieldless
/// [`DiagnosticKind`](crate::DiagnosticKind) index.
macro_rules! define_diagnostics {
    (
        $(
            $name:ident($code:ident) {
                $($field:ident : $ty:ty),* $(,)?
            }
            $severity:ident($message:literal $(, $arg:expr)+ $(,)?)
            $(note($note:literal $(, $note_arg:expr)+ $(,)?))*
            ;
        )*
    ) => {
        $(
            #[doc = concat!("`", stringify!($code), "` (", stringify!($severity), "): ", $message)]
            #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
            pub struct $name {
                $(
                    #[allow(missing_docs)]
                    pub $field: $ty,
                )*
            }

            impl $name {
                /// The stable code identifying this kind.
                pub const CODE: DiagnosticCode = DiagnosticCode::new(stringify!($code));
                /// The severity of this kind.
                pub const SEVERITY: Severity = Severity::$severity;
                /// The number of note messages this kind carries.
                pub const NOTE_COUNT: usize = <[&'static str]>::len(&[$($note),*]);

                /// Binds this diagnostic's fields into its message templates.
                #[allow(unused_variables)]
                pub fn message(&self) -> DiagnosticMessage<'_> {
                    let Self { $($field),* } = self;
                    DiagnosticMessage {
                        code: Self::CODE,
                        severity: Self::SEVERITY,
                        primary: MessageSlot::new($message, vec![$(MessageArg::from($arg)),+]),
                        notes: vec![
                            $(MessageSlot::new($note, vec![$(MessageArg::from($note_arg)),+])),*
                        ],
                    }
                }
            }

            impl From<$name> for Diagnostic {
                fn from(diagnostic: $name) -> Self {
                    Diagnostic::$name(diagnostic)
                }
            }
        )*

        /// Any diagnostic value, one variant per kind.
        ///
        /// Sinks that treat kinds differently `match` on this enum; adding a
        /// kind makes every such `match` without a wildcard arm fail to
        /// compile until the sink decides what to do with it.
        #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
        pub enum Diagnostic {
            $(
                #[allow(missing_docs)]
                $name($name),
            )*
        }

        impl Diagnostic {
            /// Returns which kind this diagnostic is.
            pub fn kind(&self) -> DiagnosticKind {
                match self {
                    $(Diagnostic::$name(_) => DiagnosticKind::$name,)*
                }
            }

            /// Returns the kind's stable code.
            pub fn code(&self) -> DiagnosticCode {
                self.kind().code()
            }

            /// Returns the kind's severity.
            pub fn severity(&self) -> Severity {
                self.kind().severity()
            }

            /// Binds this diagnostic's fields into its message templates.
            pub fn message(&self) -> DiagnosticMessage<'_> {
                match self {
                    $(Diagnostic::$name(diagnostic) => diagnostic.message(),)*
                }
            }
        }

        /// The fieldless index of diagnostic kinds.
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        pub enum DiagnosticKind {
            $(
                #[allow(missing_docs)]
                $name,
            )*
        }

        impl DiagnosticKind {
            /// Every kind, in table order.
            pub const ALL: &'static [DiagnosticKind] = &[$(DiagnosticKind::$name,)*];

            /// Returns the kind's stable code.
            pub const fn code(self) -> DiagnosticCode {
                match self {
                    $(DiagnosticKind::$name => $name::CODE,)*
                }
            }

            /// Returns the kind's severity.
            pub const fn severity(self) -> Severity {
                match self {
                    $(DiagnosticKind::$name => $name::SEVERITY,)*
                }
            }

            /// Returns the number of note messages the kind carries.
            pub const fn note_count(self) -> usize {
                match self {
                    $(DiagnosticKind::$name => $name::NOTE_COUNT,)*
                }
            }

            /// Returns the kind's type name, e.g. `"UseOfUndeclaredVariable"`.
            pub const fn name(self) -> &'static str {
                match self {
                    $(DiagnosticKind::$name => stringify!($name),)*
                }
            }

            /// Looks up the kind using `code`.
            pub fn from_code(code: &str) -> Option<DiagnosticKind> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|kind| kind.code().as_str() == code)
            }
        }

        #[cfg(test)]
        impl Diagnostic {
            /// One value of every kind, with distinct field values.
            pub(crate) fn fixtures() -> Vec<Diagnostic> {
                let mut seq = $crate::fixture::FixtureSeq::default();
                vec![
                    $(
                        Diagnostic::$name($name {
                            $($field: $crate::fixture::Fixture::fixture(&mut seq),)*
                        }),
                    )*
                ]
            }
        }
    };
}
