//! Prompt templates with a fixed placeholder vocabulary
//!
//! A template is plain text with `{name}` placeholders. `{{` and `}}` stand
//! for literal braces. Every template kind accepts a fixed set of
//! placeholders, some of them required; anything else is rejected when the
//! template is parsed, so rendering itself cannot fail. A turn template must
//! reference `{question}` before `{answer}`.

use crate::error::{Error, Result};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// A substitution slot a template may reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// The user side of a turn
    Question,
    /// The bot side of a turn
    Answer,
    /// Text appended after each bot answer
    Suffix,
    /// The system preamble
    System,
    /// The rendered history
    Dialogue,
    /// The stop token hint
    Stop,
}

impl Placeholder {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "question" => Some(Placeholder::Question),
            "answer" => Some(Placeholder::Answer),
            "suffix" => Some(Placeholder::Suffix),
            "system" => Some(Placeholder::System),
            "dialogue" => Some(Placeholder::Dialogue),
            "stop" => Some(Placeholder::Stop),
            _ => None,
        }
    }

    /// Name as written inside the braces
    pub fn name(&self) -> &'static str {
        match self {
            Placeholder::Question => "question",
            Placeholder::Answer => "answer",
            Placeholder::Suffix => "suffix",
            Placeholder::System => "system",
            Placeholder::Dialogue => "dialogue",
            Placeholder::Stop => "stop",
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.name())
    }
}

/// Which part of the prompt a template renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// One question/answer pair of the history
    Turn,
    /// The whole prompt around the rendered history
    Query,
}

impl TemplateKind {
    /// Placeholders that must appear at least once
    pub fn required(&self) -> &'static [Placeholder] {
        match self {
            TemplateKind::Turn => &[Placeholder::Question, Placeholder::Answer],
            TemplateKind::Query => &[Placeholder::System, Placeholder::Dialogue],
        }
    }

    /// Placeholders that may appear
    pub fn optional(&self) -> &'static [Placeholder] {
        match self {
            TemplateKind::Turn => &[Placeholder::Suffix],
            TemplateKind::Query => &[Placeholder::Stop],
        }
    }

    fn allows(&self, placeholder: Placeholder) -> bool {
        self.required().contains(&placeholder) || self.optional().contains(&placeholder)
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateKind::Turn => write!(f, "turn"),
            TemplateKind::Query => write!(f, "query"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Slot(Placeholder),
}

/// A parsed, validated template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    kind: TemplateKind,
    source: String,
    segments: Vec<Segment>,
}

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Escaped braces, a placeholder, or a stray brace.
    PATTERN.get_or_init(|| Regex::new(r"\{\{|\}\}|\{([^{}]*)\}|[{}]").expect("valid regex"))
}

impl Template {
    /// Parse a template of the given kind
    pub fn parse(kind: TemplateKind, source: impl Into<String>) -> Result<Self> {
        let source = source.into();
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut last = 0;

        for caps in token_pattern().captures_iter(&source) {
            let token = caps.get(0).expect("group 0 always matches");
            literal.push_str(&source[last..token.start()]);
            last = token.end();

            match token.as_str() {
                "{{" => literal.push('{'),
                "}}" => literal.push('}'),
                "{" | "}" => {
                    return Err(Error::Template(format!(
                        "unbalanced '{}' at byte {} in {} template",
                        token.as_str(),
                        token.start(),
                        kind
                    )));
                }
                _ => {
                    let name = caps.get(1).map_or("", |m| m.as_str());
                    let placeholder = Placeholder::from_name(name)
                        .filter(|p| kind.allows(*p))
                        .ok_or_else(|| {
                            Error::Template(format!(
                                "unknown placeholder {{{}}} in {} template",
                                name, kind
                            ))
                        })?;
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Slot(placeholder));
                }
            }
        }
        literal.push_str(&source[last..]);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        let template = Self {
            kind,
            source,
            segments,
        };
        if let Some(missing) = kind.required().iter().find(|p| !template.contains(**p)) {
            return Err(Error::Template(format!(
                "{} template is missing required placeholder {}",
                kind, missing
            )));
        }
        if kind == TemplateKind::Turn
            && template.position(Placeholder::Answer) < template.position(Placeholder::Question)
        {
            return Err(Error::Template(
                "{question} must precede {answer} in turn template".to_string(),
            ));
        }
        Ok(template)
    }

    /// Parse a turn template
    pub fn turn(source: impl Into<String>) -> Result<Self> {
        Self::parse(TemplateKind::Turn, source)
    }

    /// Parse a query template
    pub fn query(source: impl Into<String>) -> Result<Self> {
        Self::parse(TemplateKind::Query, source)
    }

    /// The template kind
    pub fn kind(&self) -> TemplateKind {
        self.kind
    }

    /// The text the template was parsed from
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether the template references a placeholder
    pub fn contains(&self, placeholder: Placeholder) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, Segment::Slot(p) if *p == placeholder))
    }

    fn position(&self, placeholder: Placeholder) -> Option<usize> {
        self.segments
            .iter()
            .position(|s| *s == Segment::Slot(placeholder))
    }

    /// Render the template, asking `value` for each placeholder
    pub fn render<'a>(&self, value: impl Fn(Placeholder) -> &'a str) -> String {
        self.render_segments(&self.segments, value)
    }

    /// Render everything before the first occurrence of `placeholder`
    ///
    /// Renders the whole template when the placeholder never occurs.
    pub fn render_until<'a>(
        &self,
        placeholder: Placeholder,
        value: impl Fn(Placeholder) -> &'a str,
    ) -> String {
        let end = self.position(placeholder).unwrap_or(self.segments.len());
        self.render_segments(&self.segments[..end], value)
    }

    fn render_segments<'a>(
        &self,
        segments: &[Segment],
        value: impl Fn(Placeholder) -> &'a str,
    ) -> String {
        let mut out = String::with_capacity(self.source.len());
        for segment in segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Slot(p) => out.push_str(value(*p)),
            }
        }
        out
    }
}
