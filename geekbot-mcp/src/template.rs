//! Template engine and rendering functionality
//!
//! Standups and reports are turned into tagged plain-text sections that an
//! agent can paste straight into a model context. Rendering goes through
//! Liquid templates fed with the serialized data model, so output is a pure
//! function of the input slice: same entities, same order, same bytes.

use crate::models::{Report, Standup};
use crate::{GeekbotError, Result};
use liquid::{Object, Parser};
use serde::Serialize;

/// Template for `fetch_standups` output
pub const STANDUPS_TEMPLATE: &str = r#"<Standups>
{%- for standup in standups %}
***Standup: {{ standup.id }} - {{ standup.name }}***
id: {{ standup.id }}
name: {{ standup.name }}
channel: {{ standup.channel }}
time: {{ standup.time }}
timezone: {{ standup.timezone }}
questions:
{%- for question in standup.questions %}
- text: {{ question.text }}
  answer_type: {{ question.answer_type }}
  is_random: {{ question.is_random }}
{%- if question.answer_type == "multiple_choice" %}
  answer_choices: [{{ question.answer_choices | join: ", " }}]
{%- endif %}
{%- endfor %}
participants:
{%- for user in standup.participants %}
- {{ user.name }} | @{{ user.username }} | id: {{ user.id }}
{%- endfor %}
owner_id: {{ standup.owner_id }}
{% endfor %}
</Standups>"#;

/// Template for `fetch_reports` output
pub const REPORTS_TEMPLATE: &str = r#"<Reports>
{%- for report in reports %}
***Report: {{ report.id }} - {{ report.standup_id }}***
id: {{ report.id }}
standup_id: {{ report.standup_id }}
created_at: {{ report.created_at }}
reporter_name: {{ report.reporter.name }} | @{{ report.reporter.username }}
reporter_id: {{ report.reporter.id }}
content:
{{ report.content | rstrip }}
{% endfor %}
</Reports>"#;

/// A parsed Liquid template
pub struct Template {
    template: liquid::Template,
    template_str: String,
}

impl Template {
    /// Parse a template string with the default parser
    pub fn new(template_str: &str) -> Result<Self> {
        TemplateEngine::new()?.parse(template_str)
    }

    /// Render the template with the given globals
    pub fn render(&self, globals: &Object) -> Result<String> {
        self.template
            .render(globals)
            .map_err(|e| GeekbotError::Template(e.to_string()))
    }

    /// Render the template with any serializable value as globals.
    ///
    /// The value must serialize to a map; its keys become template variables.
    pub fn render_serialized<T: Serialize>(&self, context: &T) -> Result<String> {
        let globals =
            liquid::model::to_object(context).map_err(|e| GeekbotError::Template(e.to_string()))?;
        self.render(&globals)
    }

    /// Get the raw template string
    pub fn raw(&self) -> &str {
        &self.template_str
    }
}

/// Template engine with Liquid configuration
pub struct TemplateEngine {
    parser: Parser,
}

impl TemplateEngine {
    /// Create a new template engine with the Liquid standard library
    pub fn new() -> Result<Self> {
        Ok(Self {
            parser: Self::default_parser()?,
        })
    }

    /// Create a new template engine with custom parser
    pub fn with_parser(parser: Parser) -> Self {
        Self { parser }
    }

    /// Create a default parser
    pub fn default_parser() -> Result<Parser> {
        liquid::ParserBuilder::with_stdlib()
            .build()
            .map_err(|e| GeekbotError::Template(e.to_string()))
    }

    /// Parse a template string
    pub fn parse(&self, template_str: &str) -> Result<Template> {
        let template = self
            .parser
            .parse(template_str)
            .map_err(|e| GeekbotError::Template(e.to_string()))?;

        Ok(Template {
            template,
            template_str: template_str.to_string(),
        })
    }

    /// Parse and render a template string in one step
    pub fn render<T: Serialize>(&self, template_str: &str, context: &T) -> Result<String> {
        self.parse(template_str)?.render_serialized(context)
    }
}

#[derive(Serialize)]
struct StandupsContext<'a> {
    standups: &'a [Standup],
}

#[derive(Serialize)]
struct ReportsContext<'a> {
    reports: &'a [Report],
}

/// Render standups as a `<Standups>` section, one record per standup
pub fn render_standups(standups: &[Standup]) -> Result<String> {
    TemplateEngine::new()?.render(STANDUPS_TEMPLATE, &StandupsContext { standups })
}

/// Render reports as a `<Reports>` section, one record per report
pub fn render_reports(reports: &[Report]) -> Result<String> {
    TemplateEngine::new()?.render(REPORTS_TEMPLATE, &ReportsContext { reports })
}
