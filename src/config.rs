//! Entity Configuration
//!
//! One list page drives one entity kind. The kind is picked from the
//! `data-crud-entity` attribute on `<body>`; a JSON block may override
//! individual fields of the built-in preset.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{EntityRef, Popup};

/// Body attribute naming the entity kind of the page
pub const ENTITY_ATTR: &str = "data-crud-entity";

/// Id of the optional `<script type="application/json">` override block
pub const OVERRIDE_SCRIPT_ID: &str = "crud-list-config";

/// Clickable informational region of a row
pub const INFO_CLASS: &str = "common-info";

/// Elements inside a popup that dismiss it
pub const CLOSE_POPUP_SELECTOR: &str = ".close-popup";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("page does not declare an entity kind")]
    MissingEntity,
    #[error("unknown entity kind: {0}")]
    UnknownEntity(String),
    #[error("invalid config override: {0}")]
    InvalidOverride(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Routine,
    Exercise,
}

impl FromStr for EntityKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "routine" => Ok(EntityKind::Routine),
            "exercise" => Ok(EntityKind::Exercise),
            other => Err(ConfigError::UnknownEntity(other.to_string())),
        }
    }
}

/// Endpoints, field names and DOM naming for one entity kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityConfig {
    pub entity_name: String,
    pub add_path: String,
    pub edit_path: String,
    pub delete_path: String,
    pub detail_prefix: String,
    pub id_field: String,
    pub not_found_reason: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigOverride {
    entity_name: Option<String>,
    add_path: Option<String>,
    edit_path: Option<String>,
    delete_path: Option<String>,
    detail_prefix: Option<String>,
    id_field: Option<String>,
    not_found_reason: Option<String>,
}

impl EntityConfig {
    pub fn preset(kind: EntityKind) -> Self {
        let name = match kind {
            EntityKind::Routine => "routine",
            EntityKind::Exercise => "exercise",
        };
        Self {
            entity_name: name.to_string(),
            add_path: format!("/add-{}/", name),
            edit_path: format!("/edit-{}/", name),
            delete_path: format!("/delete-{}/", name),
            detail_prefix: format!("/{}/", name),
            id_field: format!("{}_id", name),
            not_found_reason: format!("{}_DNE", name.to_ascii_uppercase()),
        }
    }

    /// Apply a JSON object of field overrides
    pub fn with_overrides(mut self, json: &str) -> Result<Self, ConfigError> {
        let o: ConfigOverride = serde_json::from_str(json)?;
        if let Some(v) = o.entity_name { self.entity_name = v; }
        if let Some(v) = o.add_path { self.add_path = v; }
        if let Some(v) = o.edit_path { self.edit_path = v; }
        if let Some(v) = o.delete_path { self.delete_path = v; }
        if let Some(v) = o.detail_prefix { self.detail_prefix = v; }
        if let Some(v) = o.id_field { self.id_field = v; }
        if let Some(v) = o.not_found_reason { self.not_found_reason = v; }
        Ok(self)
    }

    pub fn detail_url(&self, id: &EntityRef) -> String {
        format!("{}{}/", self.detail_prefix, id)
    }

    // DOM naming

    /// Data attribute carrying the identifier on rows and buttons
    pub fn id_attr(&self) -> String {
        format!("data-{}-id", self.entity_name)
    }

    pub fn delete_button_class(&self) -> String {
        format!("delete-{}-btn", self.entity_name)
    }

    pub fn edit_button_class(&self) -> String {
        format!("edit-{}-btn", self.entity_name)
    }

    pub fn delete_button_selector(&self) -> String {
        format!(".{}", self.delete_button_class())
    }

    pub fn edit_button_selector(&self) -> String {
        format!(".{}", self.edit_button_class())
    }

    pub fn add_button_id(&self) -> String {
        format!("add-{}", self.entity_name)
    }

    pub fn popup_id(&self, popup: Popup) -> String {
        match popup {
            Popup::Add => format!("add-{}-popup", self.entity_name),
            Popup::Edit => format!("edit-{}-popup", self.entity_name),
        }
    }

    pub fn form_id(&self, popup: Popup) -> String {
        match popup {
            Popup::Add => format!("add-{}-form", self.entity_name),
            Popup::Edit => format!("edit-{}-form", self.entity_name),
        }
    }

    /// Hidden input of the edit form receiving the identifier
    pub fn edit_id_input(&self) -> String {
        format!("edit-{}-id", self.entity_name)
    }

    /// Controls that submit the given form
    pub fn submit_controls(&self, popup: Popup) -> String {
        let form = self.form_id(popup);
        format!("#{form} button[type=\"submit\"], #{form} input[type=\"submit\"]")
    }
}

/// Resolve the page configuration from the body attribute and optional overrides
pub fn load(entity_attr: Option<&str>, overrides: Option<&str>) -> Result<EntityConfig, ConfigError> {
    let kind: EntityKind = entity_attr.ok_or(ConfigError::MissingEntity)?.parse()?;
    let config = EntityConfig::preset(kind);
    match overrides.map(str::trim).filter(|s| !s.is_empty()) {
        Some(json) => config.with_overrides(json),
        None => Ok(config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exercise_preset() {
        let c = EntityConfig::preset(EntityKind::Exercise);
        assert_eq!(c.add_path, "/add-exercise/");
        assert_eq!(c.edit_path, "/edit-exercise/");
        assert_eq!(c.delete_path, "/delete-exercise/");
        assert_eq!(c.id_field, "exercise_id");
        assert_eq!(c.not_found_reason, "EXERCISE_DNE");
    }

    #[test]
    fn test_routine_preset() {
        let c = EntityConfig::preset(EntityKind::Routine);
        assert_eq!(c.add_path, "/add-routine/");
        assert_eq!(c.delete_path, "/delete-routine/");
        assert_eq!(c.detail_prefix, "/routine/");
        assert_eq!(c.id_field, "routine_id");
        assert_eq!(c.not_found_reason, "ROUTINE_DNE");
    }

    #[test]
    fn test_dom_naming() {
        let c = EntityConfig::preset(EntityKind::Exercise);
        assert_eq!(c.id_attr(), "data-exercise-id");
        assert_eq!(c.delete_button_class(), "delete-exercise-btn");
        assert_eq!(c.edit_button_selector(), ".edit-exercise-btn");
        assert_eq!(c.add_button_id(), "add-exercise");
        assert_eq!(c.popup_id(Popup::Add), "add-exercise-popup");
        assert_eq!(c.popup_id(Popup::Edit), "edit-exercise-popup");
        assert_eq!(c.form_id(Popup::Edit), "edit-exercise-form");
        assert_eq!(c.edit_id_input(), "edit-exercise-id");
        assert_eq!(
            c.submit_controls(Popup::Add),
            "#add-exercise-form button[type=\"submit\"], #add-exercise-form input[type=\"submit\"]"
        );
    }

    #[test]
    fn test_detail_url() {
        let c = EntityConfig::preset(EntityKind::Routine);
        let id = EntityRef::parse("9").unwrap();
        assert_eq!(c.detail_url(&id), "/routine/9/");
    }

    #[test]
    fn test_load_from_attr() {
        let c = load(Some(" Exercise "), None).unwrap();
        assert_eq!(c.entity_name, "exercise");

        assert!(matches!(load(None, None), Err(ConfigError::MissingEntity)));
        assert!(matches!(load(Some("workout"), None), Err(ConfigError::UnknownEntity(k)) if k == "workout"));
    }

    #[test]
    fn test_load_with_overrides() {
        let c = load(Some("routine"), Some(r#"{"delete_path": "/api/routines/delete/"}"#)).unwrap();
        assert_eq!(c.delete_path, "/api/routines/delete/");
        assert_eq!(c.add_path, "/add-routine/");

        // blank override block is ignored
        assert_eq!(load(Some("routine"), Some("  \n")).unwrap(), EntityConfig::preset(EntityKind::Routine));
    }

    #[test]
    fn test_override_rejects_unknown_fields() {
        let err = load(Some("routine"), Some(r#"{"delete_url": "/x/"}"#)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOverride(_)));
    }
}
