//! Prompt rendering.
//!
//! A single handlebars template turns the structured payload into the
//! prompt string. The default template is compiled in; a replacement can
//! be supplied as YAML without touching code.

use crate::payload::LetterPromptData;
use handlebars::Handlebars;
use serde::Deserialize;
use thiserror::Error;

/// Default letter-drafting prompt
const DEFAULT_PROMPT_TEMPLATE: &str = "\
You are helping someone draft a complaint letter. Write in plain, firm, polite English. \
Do not invent facts beyond those given.

Pathway: {{pathway_title}}
Relevant framework: {{legislation}}
Current stage: {{step_name}} - {{step_description}}
{{#if body_name}}The letter is addressed to: {{body_name}}.{{/if}}
{{#if portal_url}}Submission portal: {{portal_url}}{{/if}}
{{#if postal_address}}Postal address: {{postal_address}}{{/if}}
Nation: {{nation}}
{{#if event_date_text}}The events complained about happened: {{event_date_text}}.{{/if}}
{{#if submit_by}}The complaint must be submitted by {{submit_by}}.{{/if}}
{{#if complaint_summary}}What happened, in the complainant's words: {{complaint_summary}}{{/if}}
{{#if desired_outcome}}The outcome they want: {{desired_outcome}}{{/if}}

Draft the letter for this stage only.
";

#[derive(Error, Debug)]
pub enum OutError {
    #[error("RENDER/{0}")]
    Render(#[from] handlebars::RenderError),
    #[error("TEMPLATE/{0}")]
    Template(String),
    #[error("TEMPLATE/read: {0}")]
    Read(#[from] std::io::Error),
}

/// YAML override file shape
#[derive(Debug, Deserialize)]
struct PromptTemplateFile {
    template: String,
}

/// Compiled prompt renderer
pub struct PromptRenderer<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> PromptRenderer<'a> {
    /// Renderer using the compiled-in default template
    pub fn new() -> Self {
        Self::from_template(DEFAULT_PROMPT_TEMPLATE).expect("built-in prompt template compiles")
    }

    /// Renderer using a caller-supplied template string
    pub fn from_template(template: &str) -> Result<Self, OutError> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(false);
        handlebars
            .register_template_string("letter_prompt", template)
            .map_err(|e| OutError::Template(e.to_string()))?;
        Ok(Self { handlebars })
    }

    /// Load a replacement template from a YAML file
    pub fn load(path: &str) -> Result<Self, OutError> {
        let content = std::fs::read_to_string(path)?;
        let file: PromptTemplateFile =
            serde_yaml::from_str(&content).map_err(|e| OutError::Template(e.to_string()))?;
        Self::from_template(&file.template)
    }

    pub fn render(&self, data: &LetterPromptData) -> Result<String, OutError> {
        Ok(self.handlebars.render("letter_prompt", data)?)
    }
}

impl Default for PromptRenderer<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Compose the letter prompt with the default template
pub fn compose_letter_prompt(data: &LetterPromptData) -> Result<String, OutError> {
    PromptRenderer::new().render(data)
}
