//! Fragment templates.

use askama::Template;

use crate::error::BoardResult;
use crate::project::{Project, ProjectStatus};
use crate::view::item::persons_label;

/// A rendered template, ready to be attached by a render host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub template: &'static str,
    pub html: String,
}

impl Fragment {
    pub fn new(template: &'static str, html: impl Into<String>) -> Self {
        Self {
            template,
            html: html.into(),
        }
    }
}

#[derive(Template)]
#[template(path = "project_input.html")]
struct ProjectInputTemplate<'a> {
    action: &'a str,
}

#[derive(Template)]
#[template(path = "project_list.html")]
struct ProjectListTemplate<'a> {
    status: &'a str,
    heading: &'a str,
}

#[derive(Template)]
#[template(path = "single_project.html")]
struct SingleProjectTemplate<'a> {
    id: &'a str,
    title: &'a str,
    persons: &'a str,
    description: &'a str,
}

/// The project entry form.
pub fn project_input(action: &str) -> BoardResult<Fragment> {
    let html = ProjectInputTemplate { action }.render()?;
    Ok(Fragment::new("project-input", html))
}

/// An empty list section for `status`.
pub fn project_list(status: ProjectStatus) -> BoardResult<Fragment> {
    let html = ProjectListTemplate {
        status: status.as_str(),
        heading: &status.heading(),
    }
    .render()?;
    Ok(Fragment::new("project-list", html))
}

/// One project row.
pub fn single_project(project: &Project) -> BoardResult<Fragment> {
    let html = SingleProjectTemplate {
        id: project.id.as_str(),
        title: &project.title,
        persons: &persons_label(project.people),
        description: &project.description,
    }
    .render()?;
    Ok(Fragment::new("single-project", html))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::CHILDREN_MARKER;

    #[test]
    fn test_project_list_fragment() {
        let fragment = project_list(ProjectStatus::Finished).unwrap();
        assert_eq!(fragment.template, "project-list");
        assert!(fragment.html.contains("FINISHED PROJECTS"));
        assert!(fragment.html.contains("id=\"finished-projects-list\""));
        assert!(fragment.html.contains(CHILDREN_MARKER));
    }

    #[test]
    fn test_single_project_escapes_text() {
        let project = Project {
            id: "p1".into(),
            title: "<b>Learn</b>".to_string(),
            description: "Build a sample app".to_string(),
            people: 1,
            status: ProjectStatus::Active,
        };
        let fragment = single_project(&project).unwrap();
        assert!(fragment.html.contains("&lt;b&gt;Learn&lt;/b&gt;"));
        assert!(fragment.html.contains("1 Person assigned"));
        assert!(fragment.html.contains("draggable=\"true\""));
    }

    #[test]
    fn test_project_input_fragment() {
        let fragment = project_input("/projects").unwrap();
        assert_eq!(fragment.template, "project-input");
        assert!(fragment.html.contains("name=\"people\""));
        assert!(fragment.html.contains("action=\"/projects\""));
    }
}
