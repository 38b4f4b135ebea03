use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::model::{EducationEntry, ExperienceEntry, PersonalInfo, Resume};

/// Classification assigned to an incoming document before normalization.
///
/// Parse attempts run in a fixed order: strict canonical first, then the
/// foreign Japanese schema, then a best-effort fallback. The first attempt
/// that succeeds wins, so a document can never be treated as foreign once it
/// has parsed as canonical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// The document already matches the canonical [`Resume`] shape exactly.
    Canonical,
    /// The document carries the foreign schema's marker keys and was folded
    /// into canonical form.
    Foreign,
    /// Neither shape matched; known canonical keys were salvaged and the
    /// rest defaulted.
    Unrecognized,
}

/// Normalizes an arbitrary JSON document into a canonical [`Resume`].
///
/// Never fails: unknown shapes degrade to a default-filled résumé rather
/// than erroring, and every field of the result is present and type-correct.
/// Canonical input is a fixed point — normalizing it again returns it
/// unchanged.
pub fn normalize(document: &Value) -> Resume {
    normalize_with_kind(document).0
}

/// Normalizes a document and reports how it was classified.
pub fn normalize_with_kind(document: &Value) -> (Resume, DocumentKind) {
    if let Some(resume) = try_canonical(document) {
        return (resume, DocumentKind::Canonical);
    }

    if let Some(foreign) = try_foreign(document) {
        debug!("folding foreign-schema document into canonical form");
        return (foreign.into_canonical(), DocumentKind::Foreign);
    }

    (salvage_canonical(document), DocumentKind::Unrecognized)
}

const CANONICAL_KEYS: [&str; 5] = ["personal", "summary", "experience", "education", "skills"];

/// Strict canonical parse: every top-level key must belong to the canonical
/// schema and every present field must have its declared type. Missing keys
/// are still fine — they default per the model.
fn try_canonical(document: &Value) -> Option<Resume> {
    let object = document.as_object()?;
    if object.keys().any(|key| !CANONICAL_KEYS.contains(&key.as_str())) {
        return None;
    }
    Resume::deserialize(document).ok()
}

/// Foreign parse: lenient field-by-field deserialization of the Japanese
/// schema, accepted only when at least one marker key (the personal block or
/// the work history) is present. Extra keys are ignored.
fn try_foreign(document: &Value) -> Option<ForeignResume> {
    let foreign = ForeignResume::deserialize(document).ok()?;
    if foreign.personal.is_none() && foreign.work_history.is_none() {
        return None;
    }
    Some(foreign)
}

/// Best-effort fallback: keep whichever canonical top-level fields parse on
/// their own and default the rest. Non-object documents yield an entirely
/// default résumé.
fn salvage_canonical(document: &Value) -> Resume {
    let Some(object) = document.as_object() else {
        return Resume::default();
    };
    Resume {
        personal: salvage_field(object, "personal"),
        summary: salvage_field(object, "summary"),
        experience: salvage_field(object, "experience"),
        education: salvage_field(object, "education"),
        skills: salvage_field(object, "skills"),
    }
}

fn salvage_field<T>(object: &Map<String, Value>, key: &str) -> T
where
    T: serde::de::DeserializeOwned + Default,
{
    object
        .get(key)
        .and_then(|value| T::deserialize(value).ok())
        .unwrap_or_default()
}

/// Mirror of the foreign Japanese résumé schema, keyed by its native field
/// names. Only the fields with a canonical destination are declared; the
/// rest of the document is ignored.
#[derive(Debug, Default, Deserialize)]
struct ForeignResume {
    #[serde(rename = "個人情報")]
    personal: Option<ForeignPersonal>,
    #[serde(rename = "スキル一覧")]
    skill_categories: Option<Value>,
    #[serde(rename = "スキル")]
    skill_fallback: Option<Value>,
    #[serde(rename = "自己PR")]
    self_promotion: Option<String>,
    #[serde(rename = "志望動機")]
    motivation: Option<String>,
    #[serde(rename = "職務経歴")]
    work_history: Option<Vec<ForeignWorkItem>>,
    #[serde(rename = "学歴")]
    education: Option<Vec<Value>>,
}

#[derive(Debug, Default, Deserialize)]
struct ForeignPersonal {
    #[serde(rename = "氏名")]
    name: Option<String>,
    #[serde(rename = "メールアドレス")]
    email: Option<String>,
    #[serde(rename = "電話番号")]
    phone: Option<String>,
    #[serde(rename = "住所")]
    address: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ForeignWorkItem {
    #[serde(rename = "企業名")]
    company: Option<String>,
    #[serde(rename = "職種")]
    position: Option<String>,
    #[serde(rename = "期間")]
    period: Option<ForeignPeriod>,
    #[serde(rename = "担当業務")]
    responsibilities: Option<String>,
    #[serde(rename = "主要プロジェクト")]
    key_projects: Option<Vec<ForeignProject>>,
    #[serde(rename = "業務工程")]
    phases: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
struct ForeignPeriod {
    #[serde(rename = "開始年月")]
    start: Option<String>,
    #[serde(rename = "終了年月")]
    end: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ForeignProject {
    #[serde(rename = "プロジェクト名")]
    name: Option<String>,
    #[serde(rename = "概要")]
    summary: Option<String>,
}

impl ForeignResume {
    fn into_canonical(self) -> Resume {
        let personal = self.personal.unwrap_or_default();
        let skills = flatten_skills(self.skill_categories.as_ref(), self.skill_fallback.as_ref());
        let summary = build_summary(self.self_promotion.as_deref(), self.motivation.as_deref());

        let experience = self
            .work_history
            .unwrap_or_default()
            .into_iter()
            .map(ForeignWorkItem::into_canonical)
            .collect();

        // No field remapping is defined for foreign education entries; known
        // canonical keys pass through and everything else is dropped.
        let education = self
            .education
            .unwrap_or_default()
            .iter()
            .map(|entry| EducationEntry::deserialize(entry).unwrap_or_default())
            .collect();

        Resume {
            personal: PersonalInfo {
                full_name: personal.name.unwrap_or_default(),
                job_title: String::new(),
                email: personal.email.unwrap_or_default(),
                phone: personal.phone.unwrap_or_default(),
                location: personal.address.unwrap_or_default(),
                website: String::new(),
            },
            summary,
            experience,
            education,
            skills,
        }
    }
}

impl ForeignWorkItem {
    fn into_canonical(self) -> ExperienceEntry {
        let period = self.period.unwrap_or_default();
        let mut segments: Vec<String> = Vec::new();

        if let Some(text) = self.responsibilities {
            if !text.is_empty() {
                segments.push(text);
            }
        }

        if let Some(projects) = self.key_projects {
            let bullets: Vec<String> = projects
                .into_iter()
                .map(|project| {
                    format!(
                        "・{}: {}",
                        project.name.unwrap_or_default(),
                        project.summary.unwrap_or_default()
                    )
                })
                .collect();
            segments.push(format!("【主要プロジェクト】\n{}", bullets.join("\n")));
        }

        if let Some(phases) = self.phases {
            segments.push(format!("【担当工程】: {}", phases.join(", ")));
        }

        ExperienceEntry {
            company: self.company.unwrap_or_default(),
            position: self.position.unwrap_or_default(),
            status: String::new(),
            start_date: period.start.unwrap_or_default(),
            end_date: period.end.unwrap_or_default(),
            description: segments.join("\n\n").trim().to_string(),
        }
    }
}

/// Renders structured foreign skill data into the single canonical string.
///
/// The category map (`スキル一覧`) wins when present: one `category: values`
/// line per entry, in the map's own insertion order. Otherwise the alternate
/// map (`スキル`) is flattened into a single comma-joined list with the
/// category labels discarded. Exactly one strategy applies.
fn flatten_skills(categories: Option<&Value>, fallback: Option<&Value>) -> String {
    if let Some(Value::Object(map)) = categories {
        return map
            .iter()
            .map(|(category, values)| format!("{category}: {}", joined_values(values)))
            .collect::<Vec<_>>()
            .join("\n");
    }

    if let Some(Value::Object(map)) = fallback {
        let mut flat: Vec<String> = Vec::new();
        for values in map.values() {
            match values {
                Value::Array(items) => flat.extend(items.iter().map(scalar_text)),
                other => flat.push(scalar_text(other)),
            }
        }
        return flat.join(", ");
    }

    String::new()
}

fn joined_values(values: &Value) -> String {
    match values {
        Value::Array(items) => items.iter().map(scalar_text).collect::<Vec<_>>().join(", "),
        other => scalar_text(other),
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Concatenates the self-promotion text with the labelled motivation block.
/// Either part may be absent and contributes nothing, so the separator never
/// dangles.
fn build_summary(self_promotion: Option<&str>, motivation: Option<&str>) -> String {
    let mut segments: Vec<String> = Vec::new();
    if let Some(text) = self_promotion {
        if !text.is_empty() {
            segments.push(text.to_string());
        }
    }
    if let Some(text) = motivation {
        if !text.is_empty() {
            segments.push(format!("【志望動機】\n{text}"));
        }
    }
    segments.join("\n\n")
}
