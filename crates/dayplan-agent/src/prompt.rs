use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Persona prefix and closing directive wrapped around the per-day instruction.
const PERSONA: &str = "You are an AI daily planner. ";
const DIRECTIVE: &str = " Provide a structured daily schedule given the user's constraints.";

/// Which day the requested plan targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateChoice {
    Today,
    Tomorrow,
}

impl DateChoice {
    /// Map a form value to a choice. Anything that is not exactly "today"
    /// plans for tomorrow.
    pub fn from_form_value(v: &str) -> Self {
        match v {
            "today" => Self::Today,
            _ => Self::Tomorrow,
        }
    }
}

impl std::fmt::Display for DateChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Today => write!(f, "today"),
            Self::Tomorrow => write!(f, "tomorrow"),
        }
    }
}

/// The two-message prompt sent to the generation API.
#[derive(Debug, Clone)]
pub struct BuiltPrompt {
    pub system: String,
    pub user: String,
}

/// Builds the prompt for a plan request.
///
/// The Today template anchors the schedule to the invocation time
/// (12-hour clock); the Tomorrow template plans a full day from the
/// morning with no time anchor.
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn build(user_text: &str, choice: DateChoice, now: DateTime<Local>) -> BuiltPrompt {
        let instruction = match choice {
            DateChoice::Today => {
                let current_time = now.format("%I:%M %p");
                format!(
                    "Today is the scheduled day and the current time is {current_time}. \
                     Please plan a daily schedule starting from now, considering the \
                     remaining hours of the day."
                )
            }
            DateChoice::Tomorrow => "The schedule is for tomorrow. Please plan a daily \
                 schedule starting from the morning (e.g., around 9:00 AM) until the evening."
                .to_string(),
        };

        BuiltPrompt {
            system: format!("{PERSONA}{instruction}{DIRECTIVE}"),
            user: user_text.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
