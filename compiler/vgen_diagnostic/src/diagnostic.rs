//! Diagnostics reported by the generation pass.
//!
//! A [`Diagnostic`] is plain data: a code, a severity, a message and any
//! number of labeled declaration spans, notes and suggestions. Rendering is
//! left to the emitters. The free functions at the bottom build the
//! diagnostics the pass reports, so wording stays in one place.

use std::fmt;

use vgen_ir::Span;

use crate::ErrorCode;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
    Note,
    Help,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Note => "note",
            Severity::Help => "help",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message attached to a declaration span.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub span: Span,
    pub message: String,
    /// The offending location, as opposed to related context.
    pub is_primary: bool,
}

impl Label {
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Label {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Label {
            span,
            message: message.into(),
            is_primary: false,
        }
    }
}

/// One reported problem.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
    /// How to fix it, when there is an obvious fix.
    pub suggestions: Vec<String>,
}

impl Diagnostic {
    fn with_severity(code: ErrorCode, severity: Severity) -> Self {
        Diagnostic {
            code,
            severity,
            message: String::new(),
            labels: Vec::new(),
            notes: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        Self::with_severity(code, Severity::Error)
    }

    #[cold]
    pub fn warning(code: ErrorCode) -> Self {
        Self::with_severity(code, Severity::Warning)
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Point at the offending declaration.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Point at a related declaration, such as an earlier variant.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn primary_span(&self) -> Option<Span> {
        self.labels.iter().find(|l| l.is_primary).map(|l| l.span)
    }

    /// Whether this stops generation. Warnings do not.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Single-block rendering without colors, used in panics and logs.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)?;
        for label in &self.labels {
            let role = if label.is_primary { "-->" } else { "   " };
            write!(f, "\n  {role} {}: {}", label.span, label.message)?;
        }
        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }
        for suggestion in &self.suggestions {
            write!(f, "\n  = help: {suggestion}")?;
        }
        Ok(())
    }
}

// Constructors for the diagnostics reported by the pass.

/// E0001: the generator was attached to something it cannot project.
pub fn unsupported_declaration(span: Span, found: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E0001)
        .with_message(format!("unsupported declaration kind: expected an enum, found {found}"))
        .with_label(span, "not a variant catalog")
        .with_note("nothing is generated for this declaration")
}

/// E0003: a generator argument could not be understood.
pub fn invalid_argument(span: Span, message: impl Into<String>) -> Diagnostic {
    Diagnostic::error(ErrorCode::E0003)
        .with_message(message)
        .with_label(span, "invalid argument")
}

/// E1001: two variants share the same exact name.
pub fn duplicate_variant(catalog: &str, name: &str, first: Span, duplicate: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1001)
        .with_message(format!("duplicate variant `{name}` in `{catalog}`"))
        .with_label(duplicate, "declared again here")
        .with_secondary_label(first, "first declared here")
        .with_note("the projected catalog would be ambiguous")
}

/// W1001: a variant can never be dispatched to.
pub fn unreachable_variant(
    later: &str,
    later_span: Span,
    first: &str,
    first_span: Span,
) -> Diagnostic {
    Diagnostic::warning(ErrorCode::W1001)
        .with_message(format!(
            "variant `{later}` is unreachable: `{first}` matches the same name ignoring case"
        ))
        .with_label(later_span, "never dispatched to")
        .with_secondary_label(first_span, "matched first")
        .with_suggestion(format!("rename `{later}` to differ from `{first}` by more than case"))
}

/// E2001: a name cannot be emitted as an identifier.
pub fn invalid_identifier(span: Span, what: &str, name: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2001)
        .with_message(format!("{what} `{name}` is not a valid identifier"))
        .with_label(span, "declared here")
}

/// E2002: a variant mixes `label: Type` fields with bare ones.
pub fn mixed_field_kinds(span: Span, variant: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2002)
        .with_message(format!("variant `{variant}` mixes labeled and unlabeled fields"))
        .with_label(span, "in this variant")
        .with_suggestion("give every field a `label: Type` form, or none")
}

/// E2003: the text after a field's colon does not parse as a type.
pub fn invalid_field_type(span: Span, variant: &str, label: &str, type_text: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2003)
        .with_message(format!(
            "field `{label}` of variant `{variant}` has type text `{type_text}` that is not a type"
        ))
        .with_label(span, "in this variant")
        .with_note("the default field lexer splits on every comma, even inside generic arguments")
        .with_suggestion("use `lexer = \"structural\"` for nested field types")
}

/// E9001: an invariant of the pass did not hold.
pub fn internal_error(message: impl Into<String>) -> Diagnostic {
    Diagnostic::error(ErrorCode::E9001).with_message(message)
}
