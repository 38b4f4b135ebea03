use chrono::NaiveDate;
use resume_helper::form::GroupList;
use resume_helper::io::store::{FileStore, MemoryStore, StorePort};
use resume_helper::model::{EducationEntry, ExperienceEntry, PersonalInfo, Resume};
use resume_helper::session::Session;
use tempfile::tempdir;

fn sample_resume() -> Resume {
    Resume {
        personal: PersonalInfo {
            full_name: "Jane Doe".into(),
            job_title: "Engineer".into(),
            email: "jane@example.com".into(),
            phone: "555-0100".into(),
            location: "Berlin".into(),
            website: "https://example.com".into(),
        },
        summary: "Ten years of systems work.".into(),
        experience: vec![
            ExperienceEntry {
                company: "Acme".into(),
                position: "Engineer".into(),
                status: "full-time".into(),
                start_date: "2015-04".into(),
                end_date: "2020-03".into(),
                description: "Built things.".into(),
            },
            ExperienceEntry {
                company: "Globex".into(),
                position: "Lead".into(),
                status: String::new(),
                start_date: "2020-04".into(),
                end_date: String::new(),
                description: "Leads things.".into(),
            },
        ],
        education: vec![EducationEntry {
            institution: "TU Berlin".into(),
            degree: "BSc".into(),
            grad_date: "2014-09".into(),
        }],
        skills: "Rust, SQL".into(),
    }
}

#[test]
fn export_then_import_reproduces_the_resume_exactly() {
    let mut session = Session::new(MemoryStore::default());
    let resume = sample_resume();
    session
        .edit(|state| *state = resume.clone())
        .expect("résumé saved");

    let today = NaiveDate::from_ymd_opt(2026, 8, 25).expect("valid date");
    let payload = session.export(today).expect("export prepared");
    assert_eq!(payload.file_name, "resume_data_2026-08-25.json");

    let mut blank = Session::new(MemoryStore::default());
    blank.load().expect("blank session loaded");
    blank.import(&payload.bytes).expect("export imported");

    assert_eq!(blank.resume(), &resume);
}

#[test]
fn export_bytes_match_the_slot_contents() {
    let mut session = Session::new(MemoryStore::default());
    session
        .edit(|state| state.summary = "snapshot".into())
        .expect("résumé saved");

    let today = NaiveDate::from_ymd_opt(2026, 1, 2).expect("valid date");
    let payload = session.export(today).expect("export prepared");

    let expected = serde_json::to_string(session.resume()).expect("résumé serialized");
    assert_eq!(payload.bytes, expected.as_bytes());
    assert_eq!(payload.file_name, "resume_data_2026-01-02.json");
}

#[test]
fn save_then_load_preserves_entry_order() {
    let mut session = Session::new(MemoryStore::default());
    session
        .edit(|state| *state = sample_resume())
        .expect("résumé saved");

    session.load().expect("session reloaded");
    let companies: Vec<&str> = session
        .resume()
        .experience
        .iter()
        .map(|entry| entry.company.as_str())
        .collect();
    assert_eq!(companies, ["Acme", "Globex"]);
}

#[test]
fn instantiate_then_extract_is_identity_on_records() {
    let records = sample_resume().experience;
    let mut list = GroupList::for_record::<ExperienceEntry>();
    for record in &records {
        list.instantiate(record);
    }

    let extracted: Vec<ExperienceEntry> = list.extract();
    assert_eq!(extracted, records);
}

#[test]
fn form_projection_round_trips_through_apply() {
    let mut session = Session::new(MemoryStore::default());
    let resume = sample_resume();
    session
        .edit(|state| *state = resume.clone())
        .expect("résumé saved");

    let form = session.form_state();
    assert_eq!(form.experience.len(), 2);
    assert_eq!(form.education.len(), 1);

    session.apply_form(&form).expect("form applied");
    assert_eq!(session.resume(), &resume);
}

#[test]
fn file_store_round_trips_between_sessions() {
    let temp_dir = tempdir().expect("temporary directory");
    let slot = temp_dir.path().join("resume.json");

    let mut first = Session::new(FileStore::new(&slot));
    let resume = sample_resume();
    first
        .edit(|state| *state = resume.clone())
        .expect("résumé saved");

    let mut second = Session::new(FileStore::new(&slot));
    second.load().expect("second session loaded");
    assert_eq!(second.resume(), &resume);
}

#[test]
fn file_store_treats_a_missing_file_as_an_absent_slot() {
    let temp_dir = tempdir().expect("temporary directory");
    let slot = temp_dir.path().join("missing.json");

    let store = FileStore::new(&slot);
    assert_eq!(store.get().expect("slot read"), None);
}

#[test]
fn file_store_remove_tolerates_an_absent_slot() {
    let temp_dir = tempdir().expect("temporary directory");
    let slot = temp_dir.path().join("gone.json");

    let mut store = FileStore::new(&slot);
    store.set("payload").expect("slot written");
    store.remove().expect("slot removed");
    store.remove().expect("second removal still succeeds");
    assert_eq!(store.get().expect("slot read"), None);
}
