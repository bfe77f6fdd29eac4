use lodgebook_core::{ClientService, ServiceError};
use std::fs;
use tempfile::tempdir;

#[test]
fn add_assigns_sequential_ids_and_persists() {
    let dir = tempdir().unwrap();
    let mut service = ClientService::open(dir.path());

    let ana = service.add("Ana Santos", "ana@mail.pt", "").unwrap();
    let rui = service.add("Rui Costa", "rui@mail.pt", "912345678").unwrap();
    assert_eq!(ana.id(), 1);
    assert_eq!(rui.id(), 2);
    assert_eq!(rui.phone(), "912345678");

    let reopened = ClientService::open(dir.path());
    assert_eq!(reopened.count(), 2);
    assert_eq!(reopened.get_by_id(1).unwrap().name(), "Ana Santos");
}

#[test]
fn duplicate_email_differing_only_in_case_is_rejected() {
    let dir = tempdir().unwrap();
    let mut service = ClientService::open(dir.path());
    service.add("Ana Santos", "ana@mail.pt", "").unwrap();

    let err = service.add("Other Ana", "ANA@mail.PT", "").unwrap_err();
    assert!(matches!(err, ServiceError::Validation(ref v) if v.field == "email"));
    assert_eq!(service.count(), 1);
}

#[test]
fn update_keeps_own_email_and_rejects_someone_elses() {
    let dir = tempdir().unwrap();
    let mut service = ClientService::open(dir.path());
    let ana = service.add("Ana Santos", "ana@mail.pt", "").unwrap();
    service.add("Rui Costa", "rui@mail.pt", "").unwrap();

    // Re-submitting the unchanged email is not a duplicate.
    let updated = service
        .update(ana.id(), "Ana S. Santos", "ana@mail.pt", "912345678")
        .unwrap();
    assert_eq!(updated.name(), "Ana S. Santos");
    assert_eq!(updated.phone(), "912345678");

    let err = service
        .update(ana.id(), "Ana Santos", "rui@mail.pt", "")
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(ref v) if v.field == "email"));
}

#[test]
fn update_of_missing_client_is_not_found() {
    let dir = tempdir().unwrap();
    let mut service = ClientService::open(dir.path());
    assert!(matches!(
        service.update(42, "Ana Santos", "ana@mail.pt", ""),
        Err(ServiceError::NotFound { kind: "client", id: 42 })
    ));
}

#[test]
fn update_is_persisted_immediately() {
    let dir = tempdir().unwrap();
    let mut service = ClientService::open(dir.path());
    let ana = service.add("Ana Santos", "ana@mail.pt", "").unwrap();
    service
        .update(ana.id(), "Ana Santos", "ana.santos@mail.pt", "")
        .unwrap();

    let reopened = ClientService::open(dir.path());
    assert_eq!(
        reopened.get_by_id(ana.id()).unwrap().email(),
        "ana.santos@mail.pt"
    );
}

#[test]
fn remove_persists_and_missing_id_is_not_found() {
    let dir = tempdir().unwrap();
    let mut service = ClientService::open(dir.path());
    let ana = service.add("Ana Santos", "ana@mail.pt", "").unwrap();

    service.remove(ana.id()).unwrap();
    assert_eq!(service.count(), 0);
    assert!(matches!(
        service.remove(ana.id()),
        Err(ServiceError::NotFound { .. })
    ));

    let reopened = ClientService::open(dir.path());
    assert_eq!(reopened.count(), 0);
}

#[test]
fn removing_the_max_id_recycles_it_for_the_next_client() {
    let dir = tempdir().unwrap();
    let mut service = ClientService::open(dir.path());
    service.add("Ana Santos", "ana@mail.pt", "").unwrap();
    let rui = service.add("Rui Costa", "rui@mail.pt", "").unwrap();
    assert_eq!(rui.id(), 2);

    service.remove(rui.id()).unwrap();
    let eva = service.add("Eva Luz", "eva@mail.pt", "").unwrap();
    assert_eq!(eva.id(), 2);
}

#[test]
fn name_search_and_sorted_listing_order_ascending() {
    let dir = tempdir().unwrap();
    let mut service = ClientService::open(dir.path());
    service.add("Zeca Santos", "zeca@mail.pt", "").unwrap();
    service.add("Ana Santos", "ana@mail.pt", "").unwrap();
    service.add("Maria Santos", "maria@mail.pt", "").unwrap();

    let found: Vec<String> = service
        .search_by_name("Santos")
        .iter()
        .map(|c| c.name().to_owned())
        .collect();
    assert_eq!(found, ["Ana Santos", "Maria Santos", "Zeca Santos"]);

    let sorted: Vec<String> = service
        .sorted_by_name()
        .iter()
        .map(|c| c.name().to_owned())
        .collect();
    assert_eq!(sorted, ["Ana Santos", "Maria Santos", "Zeca Santos"]);
}

#[test]
fn email_availability_and_lookup_ignore_case() {
    let dir = tempdir().unwrap();
    let mut service = ClientService::open(dir.path());
    service.add("Ana Santos", "ana@mail.pt", "").unwrap();

    assert!(!service.email_available("ANA@mail.pt"));
    assert!(service.email_available("free@mail.pt"));
    assert_eq!(service.get_by_email("Ana@Mail.pt").unwrap().id(), 1);
    assert!(service.get_by_email("free@mail.pt").is_none());
}

#[test]
fn corrupt_snapshot_at_open_is_discarded_and_the_service_starts_empty() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("clients.json"), "not json at all").unwrap();

    let mut service = ClientService::open(dir.path());
    assert_eq!(service.count(), 0);
    service.add("Ana Santos", "ana@mail.pt", "").unwrap();
    assert_eq!(service.count(), 1);
}

#[test]
fn field_validation_failures_pass_through_unwrapped() {
    let dir = tempdir().unwrap();
    let mut service = ClientService::open(dir.path());

    let err = service.add("ab", "ana@mail.pt", "").unwrap_err();
    assert!(matches!(err, ServiceError::Validation(ref v) if v.field == "name"));

    let err = service.add("Ana Santos", "not-an-email", "").unwrap_err();
    assert!(matches!(err, ServiceError::Validation(ref v) if v.field == "email"));

    let err = service.add("Ana Santos", "ana@mail.pt", "123").unwrap_err();
    assert!(matches!(err, ServiceError::Validation(ref v) if v.field == "phone"));
}
