//! Project entry form.

use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info};

use crate::dnd::SubmitEvent;
use crate::error::{BoardError, BoardResult, INVALID_INPUT_MESSAGE};
use crate::project::{ProjectId, ProjectStore};
use crate::render::{mount, templates, ElementHandle, InsertPosition, SharedHost};
use crate::validation::{self, validate, FieldValue};

/// Element id of the mounted form.
pub const FORM_ID: &str = "user-input";

/// Where the form posts when submitted without scripting.
pub const FORM_ACTION: &str = "/projects";

/// Blocking user-facing dialog.
pub trait Alert {
    fn alert(&self, message: &str);
}

/// One of the form's inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    People,
}

/// Raw text of every input, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub title: String,
    pub description: String,
    pub people: String,
}

impl FormFields {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Description => &self.description,
            FormField::People => &self.people,
        }
    }

    fn get_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
            FormField::People => &mut self.people,
        }
    }

    /// Validate every input. Returns the values to create a project from.
    fn gather(&self) -> Option<(&str, &str, u32)> {
        let title_ok = validate(&validation::title_rule(&self.title));
        let description_ok = validate(&validation::description_rule(&self.description));
        let people_ok = validate(&validation::people_rule(&self.people));

        if !(title_ok && description_ok && people_ok) {
            debug!(title_ok, description_ok, people_ok, "Form input rejected");
            return None;
        }

        let FieldValue::Number(people) = FieldValue::number_from_text(&self.people) else {
            return None;
        };
        Some((&self.title, &self.description, people as u32))
    }
}

/// Gathers and validates input, then asks the store to create a project.
pub struct InputForm {
    store: Rc<ProjectStore>,
    alert: Rc<dyn Alert>,
    element: ElementHandle,
    fields: RefCell<FormFields>,
}

impl InputForm {
    /// Mount the form at the start of `container`.
    pub fn attach(
        store: Rc<ProjectStore>,
        host: &SharedHost,
        container: ElementHandle,
        alert: Rc<dyn Alert>,
    ) -> BoardResult<Self> {
        let fragment = templates::project_input(FORM_ACTION)?;
        let element = mount(host, fragment, container, InsertPosition::Start, Some(FORM_ID))?;
        Ok(Self {
            store,
            alert,
            element,
            fields: RefCell::new(FormFields::default()),
        })
    }

    pub fn element(&self) -> ElementHandle {
        self.element
    }

    pub fn set_field(&self, field: FormField, value: &str) {
        *self.fields.borrow_mut().get_mut(field) = value.to_string();
    }

    /// Replace every input at once.
    pub fn fill(&self, fields: FormFields) {
        *self.fields.borrow_mut() = fields;
    }

    pub fn field(&self, field: FormField) -> String {
        self.fields.borrow().get(field).to_string()
    }

    pub fn fields(&self) -> FormFields {
        self.fields.borrow().clone()
    }

    /// Validate and create.
    ///
    /// On failure nothing is created, inputs keep their values and the user
    /// is alerted. On success inputs are cleared and the new id returned.
    pub fn submit(&self, event: &mut SubmitEvent) -> BoardResult<ProjectId> {
        event.prevent_default();

        let fields = self.fields();
        let Some((title, description, people)) = fields.gather() else {
            self.alert.alert(INVALID_INPUT_MESSAGE);
            return Err(BoardError::InvalidInput);
        };

        self.clear();
        let id = self.store.create(title, description, people);
        info!(project_id = %id, "Project submitted");
        Ok(id)
    }

    fn clear(&self) {
        *self.fields.borrow_mut() = FormFields::default();
    }
}
