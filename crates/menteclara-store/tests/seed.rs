use menteclara_auth::error::AuthError;
use menteclara_core::models::account::Actor;
use menteclara_store::error::StoreError;
use menteclara_store::seed::{demo_store, DEMO_PASSWORD};

#[test]
fn demo_accounts_log_in() {
    let mut store = demo_store(true).unwrap();

    assert!(matches!(
        store.authenticate("admin@menteclara.com", DEMO_PASSWORD),
        Ok(Actor::Admin(_))
    ));
    assert!(matches!(
        store.authenticate("doctor@menteclara.com", DEMO_PASSWORD),
        Ok(Actor::Therapist(_))
    ));
    assert!(matches!(
        store.authenticate("carlos@menteclara.com", DEMO_PASSWORD),
        Err(StoreError::Auth(AuthError::AccountDisabled))
    ));
}

#[test]
fn demo_patient_has_records() {
    let mut store = demo_store(true).unwrap();
    let actor = store.authenticate("juan@email.com", DEMO_PASSWORD).unwrap();
    let juan = store.view_patient(&actor, actor.id()).unwrap();

    assert_eq!(juan.exercises.len(), 1);
    assert_eq!(juan.exercises[0].title, "Registro de Pensamientos");
    assert_eq!(juan.tasks.len(), 2);
    assert!(juan.tasks[0].completed);
    assert!(!juan.tasks[1].completed);
    assert_eq!(juan.progress.len(), 3);
    assert!((juan.progress[2].mood_average - 8.0).abs() < f64::EPSILON);
}
