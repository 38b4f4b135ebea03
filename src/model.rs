use serde::{Deserialize, Serialize};

/// Contact and identity details shown at the top of the résumé.
///
/// Every field is optional in the serialized form and defaults to an empty
/// string, so a document missing any of these keys still deserializes into a
/// fully populated value. Downstream code never observes a null here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub website: String,
}

/// One position in the work history.
///
/// `description` is free text; foreign imports synthesize it from several
/// structured sub-fields (see [`crate::normalize`]). Entry order within
/// [`Resume::experience`] is the order the user entered and is never changed
/// by this crate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub description: String,
}

/// One entry in the education history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub grad_date: String,
}

/// The canonical résumé document.
///
/// This is the shape stored in the persistence slot and produced by export.
/// `skills` is deliberately a single flattened string rather than a
/// structured list; structured skill data from foreign documents is rendered
/// into it during normalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resume {
    #[serde(default)]
    pub personal: PersonalInfo,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub skills: String,
}
