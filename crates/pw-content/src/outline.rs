//! Personalised project outline

use crate::catalog::{Category, ProjectTemplate};
use crate::request::ProjectRequest;
use serde::Serialize;

/// Phrase in template abstracts that gets the topic spliced in
const ABSTRACT_SUBJECT: &str = "This project";

/// Generated outline for one request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectOutline {
    /// Category the content was drawn from
    pub category: Category,
    /// `"{topic}: {template title}"`
    pub title: String,
    /// Template abstract with the topic substituted
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    /// Research objectives
    pub objectives: Vec<String>,
    /// Tools & technology
    pub tools: Vec<String>,
    /// Reference list
    pub references: Vec<String>,
}

impl ProjectOutline {
    /// Build the outline for a request from its category template
    #[must_use]
    pub fn personalize(request: &ProjectRequest) -> Self {
        let category = request.resolved_category();
        Self::from_template(request.topic(), category, category.template())
    }

    fn from_template(topic: &str, category: Category, template: &ProjectTemplate) -> Self {
        let subject = format!("This {} project", topic.to_lowercase());
        Self {
            category,
            title: format!("{topic}: {}", template.title),
            abstract_text: template.abstract_text.replace(ABSTRACT_SUBJECT, &subject),
            objectives: to_owned(template.objectives),
            tools: to_owned(template.tools),
            references: to_owned(template.references),
        }
    }

    /// Plain-text rendering suitable for copying into a document
    #[must_use]
    pub fn render_text(&self) -> String {
        format!(
            "PROJECT TITLE:\n{}\n\nABSTRACT:\n{}\n\nOBJECTIVES:\n{}\n\nTOOLS & TECHNOLOGY:\n{}\n\nREFERENCES:\n{}",
            self.title,
            self.abstract_text,
            numbered(&self.objectives),
            self.tools.join(", "),
            numbered(&self.references),
        )
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn numbered(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {item}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TEMPLATE: ProjectTemplate = ProjectTemplate {
        title: "A Study",
        abstract_text: "This project studies things. This project ends.",
        objectives: &["First", "Second"],
        tools: &["Rust", "SQLite"],
        references: &["Ref one."],
    };

    #[test]
    fn title_and_abstract_are_personalised() {
        let outline = ProjectOutline::from_template("Soil Health", Category::Science, &TEMPLATE);
        assert_eq!(outline.title, "Soil Health: A Study");
        assert_eq!(
            outline.abstract_text,
            "This soil health project studies things. This soil health project ends."
        );
    }

    #[test]
    fn render_text_layout() {
        let outline = ProjectOutline::from_template("Soil Health", Category::Science, &TEMPLATE);
        assert_eq!(
            outline.render_text(),
            "PROJECT TITLE:\nSoil Health: A Study\n\n\
             ABSTRACT:\nThis soil health project studies things. This soil health project ends.\n\n\
             OBJECTIVES:\n1. First\n2. Second\n\n\
             TOOLS & TECHNOLOGY:\nRust, SQLite\n\n\
             REFERENCES:\n1. Ref one."
        );
    }

    #[test]
    fn research_project_phrasing_is_left_alone() {
        let request = ProjectRequest::new("Remote work in SMEs", "management").unwrap();
        let outline = ProjectOutline::personalize(&request);

        assert_eq!(outline.category, Category::Management);
        assert!(outline.abstract_text.starts_with("This research project examines"));
        assert!(outline.title.starts_with("Remote work in SMEs: Digital Transformation"));
    }

    #[test]
    fn unknown_category_uses_default_template() {
        let request = ProjectRequest::new("Bee population decline", "apiculture").unwrap();
        let outline = ProjectOutline::personalize(&request);

        assert_eq!(outline.category, Category::Default);
        assert_eq!(
            outline.title,
            "Bee population decline: Innovative Approaches to Modern Challenges: A Comprehensive Research Study"
        );
        assert_eq!(outline.objectives.len(), 5);
    }

    #[test]
    fn serializes_abstract_field() {
        let request = ProjectRequest::new("Gamified statistics", "education").unwrap();
        let json = serde_json::to_value(ProjectOutline::personalize(&request)).unwrap();

        assert_eq!(json["category"], "education");
        assert!(json["abstract"]
            .as_str()
            .unwrap()
            .starts_with("This research project investigates"));
        assert_eq!(json["tools"].as_array().unwrap().len(), 8);
    }
}
