//! In-memory rendition of the repeating-section form.
//!
//! The visual form renders experience and education as lists of cloned
//! template fragments. This module models that structure without a DOM: a
//! [`GroupList`] owns a template [`ItemGroup`] and the instantiated groups,
//! and the [`FormRecord`] trait binds a flat record type to the set of field
//! controls one group carries. The synchronizer preserves container order in
//! both directions and never reorders or deduplicates.

use crate::model::{EducationEntry, ExperienceEntry, PersonalInfo};

/// Port for the explicit confirmation step guarding destructive actions.
/// Declining is a no-op, never an error.
pub trait ConfirmPort {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Confirmation source with a predetermined answer, used by the CLI's
/// `--yes` flag and by tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl ConfirmPort for FixedAnswer {
    fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}

/// A single form control holding one string value. Template controls may
/// carry a non-empty default that survives blank imports.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldControl {
    pub value: String,
}

/// One repeating unit of a dynamic list: a named set of field controls in
/// declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemGroup {
    fields: Vec<(String, FieldControl)>,
}

impl ItemGroup {
    /// Builds a group with one empty control per field name.
    pub fn from_field_names(names: &[&str]) -> Self {
        Self {
            fields: names
                .iter()
                .map(|name| (name.to_string(), FieldControl::default()))
                .collect(),
        }
    }

    /// Sets a template default on the named control. Builder-style, used
    /// when constructing templates.
    pub fn with_default(mut self, name: &str, value: &str) -> Self {
        self.set_value(name, value);
        self
    }

    /// Reads the named control, or an empty string when the control is
    /// absent from this group.
    pub fn value(&self, name: &str) -> &str {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, control)| control.value.as_str())
            .unwrap_or("")
    }

    /// Writes the named control. Writing to an absent control is a no-op,
    /// mirroring how the form ignores selectors that match nothing.
    pub fn set_value(&mut self, name: &str, value: &str) {
        if let Some((_, control)) = self.fields.iter_mut().find(|(field, _)| field == name) {
            control.value = value.to_string();
        }
    }
}

/// An ordered list of item-groups plus the template new groups are cloned
/// from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupList {
    template: ItemGroup,
    items: Vec<ItemGroup>,
}

impl GroupList {
    pub fn new(template: ItemGroup) -> Self {
        Self {
            template,
            items: Vec::new(),
        }
    }

    /// Builds an empty list whose template declares one control per field of
    /// the record type.
    pub fn for_record<R: FormRecord>() -> Self {
        Self::new(ItemGroup::from_field_names(R::field_names()))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[ItemGroup] {
        &self.items
    }

    /// Drops every instantiated group. The template is kept.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Clones the template, fills it from the record, and appends it.
    ///
    /// Only non-empty record values are written; an empty value leaves the
    /// template control's own default in place so blank imports do not
    /// clobber it.
    pub fn instantiate<R: FormRecord>(&mut self, record: &R) {
        let mut group = self.template.clone();
        for name in R::field_names() {
            let value = record.get(name);
            if !value.is_empty() {
                group.set_value(name, value);
            }
        }
        self.items.push(group);
    }

    /// Reads one record per item-group, in container order.
    pub fn extract<R: FormRecord>(&self) -> Vec<R> {
        self.items.iter().map(R::from_group).collect()
    }

    /// Detaches the group at `index`. Returns whether a group was removed so
    /// the caller can persist the change immediately.
    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        self.items.remove(index);
        true
    }
}

/// Binds a flat record type to the field controls of one item-group. Field
/// names follow the canonical wire names so a group reads and writes without
/// any renaming step.
pub trait FormRecord: Sized {
    fn field_names() -> &'static [&'static str];

    /// Reads the named field of the record, or an empty string for an
    /// undeclared name.
    fn get(&self, name: &str) -> &str;

    /// Builds a record from one item-group's current values.
    fn from_group(group: &ItemGroup) -> Self;
}

impl FormRecord for ExperienceEntry {
    fn field_names() -> &'static [&'static str] {
        &[
            "company",
            "position",
            "status",
            "startDate",
            "endDate",
            "description",
        ]
    }

    fn get(&self, name: &str) -> &str {
        match name {
            "company" => &self.company,
            "position" => &self.position,
            "status" => &self.status,
            "startDate" => &self.start_date,
            "endDate" => &self.end_date,
            "description" => &self.description,
            _ => "",
        }
    }

    fn from_group(group: &ItemGroup) -> Self {
        Self {
            company: group.value("company").to_string(),
            position: group.value("position").to_string(),
            status: group.value("status").to_string(),
            start_date: group.value("startDate").to_string(),
            end_date: group.value("endDate").to_string(),
            description: group.value("description").to_string(),
        }
    }
}

impl FormRecord for EducationEntry {
    fn field_names() -> &'static [&'static str] {
        &["institution", "degree", "gradDate"]
    }

    fn get(&self, name: &str) -> &str {
        match name {
            "institution" => &self.institution,
            "degree" => &self.degree,
            "gradDate" => &self.grad_date,
            _ => "",
        }
    }

    fn from_group(group: &ItemGroup) -> Self {
        Self {
            institution: group.value("institution").to_string(),
            degree: group.value("degree").to_string(),
            grad_date: group.value("gradDate").to_string(),
        }
    }
}

/// The whole form as the session projects it: the scalar header fields plus
/// the two dynamic lists.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub personal: PersonalInfo,
    pub summary: String,
    pub skills: String,
    pub experience: GroupList,
    pub education: GroupList,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            personal: PersonalInfo::default(),
            summary: String::new(),
            skills: String::new(),
            experience: GroupList::for_record::<ExperienceEntry>(),
            education: GroupList::for_record::<EducationEntry>(),
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
