//! A single project row.

use tracing::debug;

use crate::dnd::{DragEvent, DragSource, DropEffect, PLAIN_TEXT};
use crate::error::BoardResult;
use crate::project::Project;
use crate::render::{mount, templates, ElementHandle, InsertPosition, SharedHost};

/// Person-count label: exactly one is singular, anything else plural.
pub fn persons_label(people: u32) -> String {
    if people == 1 {
        "1 Person".to_string()
    } else {
        format!("{people} Persons")
    }
}

/// Rendered row bound to one project snapshot. Rebuilt, never updated.
#[derive(Debug, Clone)]
pub struct ItemView {
    project: Project,
    element: ElementHandle,
}

impl ItemView {
    /// Render `project` at the end of `container`.
    pub fn render(host: &SharedHost, container: ElementHandle, project: &Project) -> BoardResult<Self> {
        let fragment = templates::single_project(project)?;
        let element = mount(
            host,
            fragment,
            container,
            InsertPosition::End,
            Some(project.id.as_str()),
        )?;
        Ok(Self {
            project: project.clone(),
            element,
        })
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn element(&self) -> ElementHandle {
        self.element
    }
}

impl DragSource for ItemView {
    fn on_drag_start(&self, event: &mut DragEvent) {
        event.data_transfer.set_data(PLAIN_TEXT, self.project.id.as_str());
        event.data_transfer.effect_allowed = DropEffect::Move;
        debug!(project_id = %self.project.id, "Drag started");
    }

    fn on_drag_end(&self, _event: &DragEvent) {
        debug!(project_id = %self.project.id, "Drag ended");
    }
}
