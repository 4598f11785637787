use anyhow::Result;
use console::{Term, style};
use serde::Serialize;

use crate::commands::init::InitOutcome;
use crate::commands::list::Listing;
use crate::commands::reset::ResetSummary;
use crate::error::{BoardError, ErrorBody};
use crate::models::Thought;

const MESSAGE_WIDTH: usize = 72;

pub struct Output {
    term: Term,
    json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self {
            term: Term::stdout(),
            json,
        }
    }

    fn print_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let output = serde_json::to_string_pretty(value)?;
        self.term.write_line(&output)?;
        Ok(())
    }

    pub fn initialized(&self, outcome: &InitOutcome) -> Result<()> {
        match outcome {
            InitOutcome::Created(path) => self
                .term
                .write_line(&format!("Initialized board in {}", path.display()))?,
            InitOutcome::AlreadyInitialized(path) => self
                .term
                .write_line(&format!("Board already initialized in {}", path.display()))?,
        }
        Ok(())
    }

    pub fn listing(&self, listing: &Listing, page: i64) -> Result<()> {
        if self.json {
            return self.print_json(listing);
        }

        if listing.thoughts.is_empty() {
            self.term.write_line("No thoughts found.")?;
        }

        for thought in &listing.thoughts {
            self.print_thought(thought)?;
            self.term.write_line("")?;
        }

        self.term.write_line(
            &style(format!("Page {page} of {}", listing.total_pages))
                .dim()
                .to_string(),
        )?;
        Ok(())
    }

    fn print_thought(&self, thought: &Thought) -> Result<()> {
        let created = thought
            .created_at_timestamp()
            .map(|ts| ts.strftime("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();

        self.term.write_line(&format!(
            "{} {} {}",
            style(&thought.id).cyan().bold(),
            style(format!("♥ {}", thought.hearts)).red(),
            style(created).dim()
        ))?;

        for line in textwrap::wrap(&thought.message, MESSAGE_WIDTH) {
            self.term.write_line(&format!("  {line}"))?;
        }

        let mut byline = format!("  - {}", thought.posted_by);
        if !thought.theme.is_empty() {
            byline.push_str(&format!(" [{}]", thought.theme));
        }
        self.term.write_line(&style(byline).yellow().to_string())?;
        Ok(())
    }

    pub fn liked(&self, thought: &Thought) -> Result<()> {
        if self.json {
            return self.print_json(thought);
        }

        self.term.write_line(&format!(
            "{} {}",
            style("Liked thought:").green(),
            style(&thought.id).cyan().bold()
        ))?;
        self.term
            .write_line(&format!("  Hearts: {}", thought.hearts))?;
        Ok(())
    }

    pub fn reset(&self, summary: &ResetSummary) -> Result<()> {
        if self.json {
            return self.print_json(summary);
        }

        self.term.write_line(&format!(
            "{} {} thought(s)",
            style("Deleted").red(),
            summary.deleted
        ))?;
        Ok(())
    }

    /// Report a failed board operation. JSON bodies go to stdout so callers can
    /// parse them; text goes to stderr.
    pub fn board_error(&self, err: &BoardError, suggestion: Option<&str>) -> Result<()> {
        if self.json {
            return self.print_json(&ErrorBody::from(err));
        }

        let stderr = Term::stderr();
        let label = if err.is_client_error() {
            style("Error:").yellow()
        } else {
            style("Error:").red()
        };
        stderr.write_line(&format!("{label} {err}"))?;
        if let Some(suggestion) = suggestion {
            stderr.write_line(&format!("Did you mean: {}", style(suggestion).cyan()))?;
        }
        Ok(())
    }

    /// Report any other failure, such as a missing board or bad arguments.
    pub fn failure(&self, err: &anyhow::Error) -> Result<()> {
        if self.json {
            return self.print_json(&ErrorBody {
                message: None,
                error: format!("{err:#}"),
            });
        }

        Term::stderr().write_line(&format!("{} {err:#}", style("Error:").red()))?;
        Ok(())
    }
}
