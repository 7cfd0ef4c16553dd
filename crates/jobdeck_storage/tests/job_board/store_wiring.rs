#![forbid(unsafe_code)]

use jobdeck_contracts::application::ApplicationInput;
use jobdeck_contracts::job::{JobId, JobPostingInput};
use jobdeck_storage::ids::IdAllocator;
use jobdeck_storage::store::{KeyValueStore, MemoryStore, JOBS_KEY, SAVED_JOBS_KEY};
use jobdeck_storage::{ApplicationRepo, JobBoard, JobRepo, WishlistRepo, WishlistState};

fn board() -> JobBoard<MemoryStore> {
    JobBoard::with_allocator(MemoryStore::new(), IdAllocator::seeded(1_724_000_000_000))
}

fn posting(title: &str, job_type: &str) -> JobPostingInput {
    JobPostingInput {
        title: title.to_string(),
        company: "Acme Co".to_string(),
        location: "Remote".to_string(),
        job_type: job_type.to_string(),
        skills: "Rust".to_string(),
        logo: String::new(),
    }
}

#[test]
fn dbw_seed_first_list_all_writes_three_distinct_samples() {
    let mut board = board();
    let jobs = board.list_all().unwrap();
    assert_eq!(jobs.len(), 3);
    assert_eq!(jobs[0].title, "Frontend Developer");
    assert_eq!(jobs[1].title, "UI/UX Designer");
    assert_eq!(jobs[2].title, "Intern - Web Dev");
    assert!(jobs[0].id != jobs[1].id && jobs[1].id != jobs[2].id && jobs[0].id != jobs[2].id);

    // second call returns the persisted seed unchanged, no re-seeding
    let again = board.list_all().unwrap();
    assert_eq!(again, jobs);
}

#[test]
fn dbw_seed_recovers_from_corrupt_jobs_entry() {
    let mut board = board();
    board.store_mut().write_raw(JOBS_KEY, "not json").unwrap();
    let jobs = board.list_all().unwrap();
    assert_eq!(jobs.len(), 3);
    // the corrupt text was replaced by the freshly seeded collection
    let raw = board.store().read_raw(JOBS_KEY).unwrap().unwrap();
    assert!(raw.starts_with('['));
}

#[test]
fn dbw_create_prepends_and_leaves_prior_records_unchanged() {
    let mut board = board();
    let seeded = board.list_all().unwrap();
    let created = board.create_job(posting("Backend Engineer", "Remote")).unwrap();

    let jobs = board.list_all().unwrap();
    assert_eq!(jobs.len(), 4);
    assert_eq!(jobs[0], created);
    assert_eq!(&jobs[1..], &seeded[..]);
}

#[test]
fn dbw_create_trims_fields_and_allocates_past_stored_maximum() {
    let mut board = JobBoard::with_allocator(MemoryStore::new(), IdAllocator::seeded(5));
    // stored data carries ids far ahead of the allocator seed
    board
        .store_mut()
        .write_raw(
            JOBS_KEY,
            r#"[{"id":9000,"title":"Old","company":"C","location":"L","skills":"","type":"Remote","logo":""}]"#,
        )
        .unwrap();
    let created = board.create_job(posting("  Spaced Out  ", "Full-time")).unwrap();
    assert_eq!(created.title, "Spaced Out");
    assert!(created.id.0 > 9000);
}

#[test]
fn dbw_create_on_empty_store_does_not_seed() {
    let mut board = board();
    let created = board.create_job(posting("Only Job", "Full-time")).unwrap();
    let jobs = board.list_all().unwrap();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0], created);
}

#[test]
fn dbw_find_by_id_matches_numerically_and_does_not_seed() {
    let mut board = board();
    assert_eq!(board.find_by_id(JobId(1)).unwrap(), None);
    // find on the empty store must not have seeded anything
    assert_eq!(board.store().read_raw(JOBS_KEY).unwrap(), None);

    let created = board.create_job(posting("Target", "Remote")).unwrap();
    assert_eq!(board.find_by_id(created.id).unwrap(), Some(created));
}

#[test]
fn dbw_wishlist_toggle_never_duplicates_an_id() {
    let mut board = board();
    let id = JobId(77);
    assert_eq!(board.toggle_saved(id).unwrap(), WishlistState::Saved);
    assert_eq!(board.toggle_saved(id).unwrap(), WishlistState::Unsaved);
    assert_eq!(board.toggle_saved(id).unwrap(), WishlistState::Saved);
    assert_eq!(board.toggle_saved(JobId(5)).unwrap(), WishlistState::Saved);

    let saved = board.saved_ids().unwrap();
    assert_eq!(saved.iter().filter(|s| **s == id).count(), 1);
    assert_eq!(saved.len(), 2);
}

#[test]
fn dbw_wishlist_wire_shape_is_a_plain_id_array() {
    let mut board = board();
    board.toggle_saved(JobId(3)).unwrap();
    board.toggle_saved(JobId(8)).unwrap();
    let raw = board.store().read_raw(SAVED_JOBS_KEY).unwrap().unwrap();
    assert_eq!(raw, "[3,8]");
}

#[test]
fn dbw_applications_prepend_and_record_null_job_id() {
    let mut board = board();
    let first = board
        .create_application(
            ApplicationInput {
                name: " Ada ".to_string(),
                email: "ada@example.com".to_string(),
                resume: "cv".to_string(),
                cover_letter: String::new(),
            },
            Some(JobId(12)),
        )
        .unwrap();
    let second = board
        .create_application(ApplicationInput::default(), None)
        .unwrap();

    assert_eq!(first.name, "Ada");
    assert!(second.id.0 > first.id.0);
    let apps = board.applications().unwrap();
    assert_eq!(apps.len(), 2);
    assert_eq!(apps[0], second);
    assert_eq!(apps[1], first);
    assert_eq!(apps[0].job_id, None);
    assert_eq!(apps[1].job_id, Some(JobId(12)));
}
