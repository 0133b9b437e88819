//! Rendering a dialogue transcript into a single prompt string

use crate::error::Result;
use crate::template::{Placeholder, Template};
use crate::types::turn::{Role, Turn};

/// Default system preamble
pub const DEFAULT_SYSTEM: &str = "You are a helpful bot.";

/// Default query template
pub const DEFAULT_QUERY_TEMPLATE: &str = "{system}\n### Dialogue:\n{dialogue}\n\n### Response:";

/// Default turn template
pub const DEFAULT_TURN_TEMPLATE: &str = "Q: {question}\nA: {answer} {suffix}\n\n";

/// Renders transcripts into provider-ready prompts
///
/// A formatter is immutable once built: the same transcript and stop token
/// always render to the same prompt.
///
/// # Example
///
/// ```
/// use snail_core::{Formatter, Turn};
///
/// let formatter = Formatter::builder()
///     .system("You are terse.")
///     .turn_template("User: {question}\nBot: {answer}\n")
///     .build()
///     .expect("valid templates");
///
/// let prompt = formatter.render_prompt(&[Turn::user("Hi")], None);
/// assert!(prompt.starts_with("You are terse.\n"));
/// assert!(prompt.contains("User: Hi\nBot:"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
    system: String,
    suffix: String,
    turn: Template,
    query: Template,
}

impl Default for Formatter {
    fn default() -> Self {
        Self {
            system: DEFAULT_SYSTEM.to_string(),
            suffix: String::new(),
            turn: Template::turn(DEFAULT_TURN_TEMPLATE).expect("default turn template is valid"),
            query: Template::query(DEFAULT_QUERY_TEMPLATE)
                .expect("default query template is valid"),
        }
    }
}

impl Formatter {
    /// Create a formatter from already parsed templates
    pub fn new(
        system: impl Into<String>,
        suffix: impl Into<String>,
        turn: Template,
        query: Template,
    ) -> Self {
        Self {
            system: system.into(),
            suffix: suffix.into(),
            turn,
            query,
        }
    }

    /// Create a new formatter builder
    pub fn builder() -> FormatterBuilder {
        FormatterBuilder::default()
    }

    /// The system preamble
    pub fn system(&self) -> &str {
        &self.system
    }

    /// The text appended after each bot answer
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// The turn template
    pub fn turn_template(&self) -> &Template {
        &self.turn
    }

    /// The query template
    pub fn query_template(&self) -> &Template {
        &self.query
    }

    /// Render one question/answer pair
    pub fn render_turn(&self, question: &str, answer: &str) -> String {
        self.turn.render(|p| match p {
            Placeholder::Question => question,
            Placeholder::Answer => answer,
            Placeholder::Suffix => self.suffix.as_str(),
            _ => "",
        })
    }

    /// Render the open turn that asks the provider to answer `question`
    ///
    /// This is the turn template cut off where the answer would start, with
    /// trailing spaces and tabs removed.
    ///
    /// # Example
    ///
    /// ```
    /// use snail_core::Formatter;
    ///
    /// let formatter = Formatter::default();
    /// assert_eq!(formatter.render_continuation("Hello"), "Q: Hello\nA:");
    /// ```
    pub fn render_continuation(&self, question: &str) -> String {
        let open = self.turn.render_until(Placeholder::Answer, |p| match p {
            Placeholder::Question => question,
            Placeholder::Suffix => self.suffix.as_str(),
            _ => "",
        });
        open.trim_end_matches([' ', '\t']).to_string()
    }

    /// Render a transcript as a sequence of question/answer pairs
    ///
    /// Each user turn opens a pair and the following bot turn closes it. A
    /// user turn that is followed by another user turn is rendered with an
    /// empty answer, and a bot turn with no open question gets an empty
    /// question. A trailing unanswered user turn becomes one continuation
    /// marker (see [`Formatter::render_continuation`]).
    pub fn render_history(&self, turns: &[Turn]) -> String {
        let mut out = String::new();
        let mut open: Option<&str> = None;

        for turn in turns {
            match turn.role() {
                Role::User => {
                    if let Some(question) = open.take() {
                        out.push_str(&self.render_turn(question, ""));
                    }
                    open = Some(turn.content());
                }
                Role::Bot => {
                    let question = open.take().unwrap_or("");
                    out.push_str(&self.render_turn(question, turn.content()));
                }
            }
        }

        if let Some(question) = open {
            out.push_str(&self.render_continuation(question));
        }
        out
    }

    /// Render the full prompt for a transcript
    ///
    /// The stop token fills `{stop}` when the query template has one, and is
    /// appended to the end of the prompt otherwise.
    pub fn render_prompt(&self, history: &[Turn], stop_token: Option<&str>) -> String {
        let dialogue = self.render_history(history);
        let stop = stop_token.unwrap_or("");
        let mut prompt = self.query.render(|p| match p {
            Placeholder::System => self.system.as_str(),
            Placeholder::Dialogue => dialogue.as_str(),
            Placeholder::Stop => stop,
            _ => "",
        });
        if !self.query.contains(Placeholder::Stop) {
            prompt.push_str(stop);
        }
        prompt
    }
}

/// Builder for Formatter
///
/// Templates are parsed in [`FormatterBuilder::build`], so a bad template is
/// reported before the formatter is ever used.
#[derive(Default)]
pub struct FormatterBuilder {
    system: Option<String>,
    suffix: Option<String>,
    turn_template: Option<String>,
    query_template: Option<String>,
}

impl FormatterBuilder {
    /// Set the system preamble
    pub fn system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Set the text appended after each bot answer
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    /// Set the turn template
    pub fn turn_template(mut self, template: impl Into<String>) -> Self {
        self.turn_template = Some(template.into());
        self
    }

    /// Set the query template
    pub fn query_template(mut self, template: impl Into<String>) -> Self {
        self.query_template = Some(template.into());
        self
    }

    /// Build the formatter
    pub fn build(self) -> Result<Formatter> {
        let turn = Template::turn(
            self.turn_template
                .unwrap_or_else(|| DEFAULT_TURN_TEMPLATE.to_string()),
        )?;
        let query = Template::query(
            self.query_template
                .unwrap_or_else(|| DEFAULT_QUERY_TEMPLATE.to_string()),
        )?;
        Ok(Formatter {
            system: self.system.unwrap_or_else(|| DEFAULT_SYSTEM.to_string()),
            suffix: self.suffix.unwrap_or_default(),
            turn,
            query,
        })
    }
}
