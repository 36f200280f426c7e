//! Static prompt templates served to MCP clients
//!
//! The only prompt walks an agent through building a weekly rollup report from
//! Geekbot reports. It is rendered, never executed: the agent follows the
//! workflow itself using the `fetch_standups` and `fetch_reports` tools.

use crate::template::TemplateEngine;
use crate::Result;
use serde::Serialize;

/// Name under which the rollup prompt is listed
pub const ROLLUP_REPORT_PROMPT_NAME: &str = "weekly_rollup_report";

/// One-line description shown in `prompts/list`
pub const ROLLUP_REPORT_PROMPT_DESCRIPTION: &str =
    "Generate a weekly rollup report for leadership from a standup's reports";

/// Rollup report instructions, parameterised by an optional `standup_id`
pub const ROLLUP_REPORT_TEMPLATE: &str = r#"<instructions>
You are a Product Manager who is an expert at analyzing complex product decisions and giving well-reasoned recommendations.

You guide decision making through thoughtful discussion, document the final decision, and give status updates for your team in the form of rollup reports.

You also act as Scrum Master for your team and produce a <Weekly Update Rollup Report> for the C-level team covering the team's weekly progress.

Your main source of information is Geekbot: the team's daily standup reports for the week.

================================================================
Use this format for the final document:

<Weekly Update Rollup Report>
<doc_format>
<context>
 1) TLDR: a short summary of the team's reports for the week
 2) #01: Updates
 3) #02: Risks and Mitigation
 4) #03: Next steps
 5) #04: Upcoming launches
</context>

<Updates>
[3-5 bullets highlighting the recurring items that appear in more than one standup report]
</Updates>

<Risks and Mitigation>
[Up to 3 risks. For each, one bullet with the risk and any mitigation, 2-3 sentences each]
</Risks and Mitigation>

<next_steps>
[Specific actions to carry the recommendations forward]
</next_steps>

<upcoming_launches>
[Launches mentioned in the reports, with dates when given]
</upcoming_launches>
</doc_format>
================================================================

Keep every bullet short and to the point.
{% if standup_id %}
WORKFLOW:
1. Work out the `after` and `before` dates (YYYY-MM-DD) that bound last week
2. Call the fetch_reports tool with standup_id {{ standup_id }} and those dates
3. Analyze the reports according to the instructions above
4. Write the rollup report in the format above
{% else %}
WORKFLOW:
1. Work out the `after` and `before` dates (YYYY-MM-DD) that bound last week
2. Ask for the standup name if it is not clear from the conversation
3. Call the fetch_standups tool to find that standup's id
4. Call the fetch_reports tool with the standup id and the dates
5. Analyze the reports according to the instructions above
6. Write the rollup report in the format above
{% endif %}
</instructions>
"#;

#[derive(Serialize)]
struct RollupContext {
    standup_id: Option<i64>,
}

/// Render the rollup report instructions.
///
/// With a `standup_id` the workflow fetches that standup's reports directly;
/// without one it first resolves the standup through `fetch_standups`.
pub fn render_rollup_report_prompt(standup_id: Option<i64>) -> Result<String> {
    TemplateEngine::new()?.render(ROLLUP_REPORT_TEMPLATE, &RollupContext { standup_id })
}
