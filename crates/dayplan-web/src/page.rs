use askama::Template;

use dayplan_store::Plan;

/// One history entry, timestamp preformatted for display.
pub struct PlanView {
    pub created_at: String,
    pub content: String,
}

impl PlanView {
    pub fn from_plan(plan: &Plan) -> Self {
        Self {
            created_at: plan.created_at_display(),
            content: plan.content.clone(),
        }
    }
}

/// The planner page: input form, optional current result, history panel.
///
/// `current` is set only when this request attempted a generation — it
/// carries either the fresh plan or the apology text.
#[derive(Template)]
#[template(path = "planner.html")]
pub struct PlannerPage {
    pub current: Option<String>,
    pub history: Vec<PlanView>,
}
