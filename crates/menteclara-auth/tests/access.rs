use menteclara_auth::access::{
    can_add_task, can_assign_exercise, can_complete_exercise, can_create_patient,
    can_create_therapist, can_list_patients, can_list_therapists, can_set_status,
    can_toggle_task, can_use_assistant, can_view_patient, StatusTarget,
};
use menteclara_auth::error::{Action, AuthError};
use menteclara_core::models::account::{Account, Actor, Password, Role};
use menteclara_core::models::patient::Patient;

struct Cast {
    admin: Account,
    therapist: Account,
    other_therapist: Account,
    patient: Patient,
    other_patient: Patient,
}

fn cast() -> Cast {
    let admin = Account::new(Role::Admin, "Admin", "admin@menteclara.com", Password::new("1"));
    let therapist = Account::new(Role::Therapist, "Sofia", "sofia@menteclara.com", Password::new("1"));
    let other_therapist =
        Account::new(Role::Therapist, "Carlos", "carlos@menteclara.com", Password::new("1"));
    let patient = Patient::new(
        Account::new(Role::Patient, "Juan", "juan@email.com", Password::new("1")),
        therapist.id,
    );
    let other_patient = Patient::new(
        Account::new(Role::Patient, "Ana", "ana@email.com", Password::new("1")),
        other_therapist.id,
    );
    Cast {
        admin,
        therapist,
        other_therapist,
        patient,
        other_patient,
    }
}

#[test]
fn only_admins_create_therapists() {
    let c = cast();
    assert!(can_create_therapist(&Actor::for_account(&c.admin)).is_ok());
    assert_eq!(
        can_create_therapist(&Actor::for_account(&c.therapist)),
        Err(AuthError::Forbidden(Action::CreateTherapist))
    );
}

#[test]
fn patients_are_bound_to_creating_therapist() {
    let c = cast();
    assert_eq!(can_create_patient(&Actor::for_account(&c.therapist)), Ok(c.therapist.id));
    assert!(can_create_patient(&Actor::for_account(&c.admin)).is_err());
    assert!(can_create_patient(&Actor::Patient(c.patient.id())).is_err());
}

#[test]
fn admin_toggles_therapists_only() {
    let c = cast();
    let admin = Actor::for_account(&c.admin);
    assert!(can_set_status(&admin, StatusTarget::Account(&c.therapist)).is_ok());
    assert!(can_set_status(&admin, StatusTarget::Patient(&c.patient)).is_err());
    assert!(can_set_status(&admin, StatusTarget::Account(&c.admin)).is_err());
}

#[test]
fn therapist_toggles_own_patients_only() {
    let c = cast();
    let therapist = Actor::for_account(&c.therapist);
    assert!(can_set_status(&therapist, StatusTarget::Patient(&c.patient)).is_ok());
    assert_eq!(
        can_set_status(&therapist, StatusTarget::Patient(&c.other_patient)),
        Err(AuthError::Forbidden(Action::SetStatus))
    );
    assert!(can_set_status(&therapist, StatusTarget::Account(&c.other_therapist)).is_err());
}

#[test]
fn patients_cannot_toggle_anything() {
    let c = cast();
    let patient = Actor::Patient(c.patient.id());
    assert!(can_set_status(&patient, StatusTarget::Patient(&c.patient)).is_err());
    assert!(can_set_status(&patient, StatusTarget::Account(&c.therapist)).is_err());
}

#[test]
fn patient_visibility() {
    let c = cast();
    assert!(can_view_patient(&Actor::for_account(&c.admin), &c.other_patient).is_ok());
    assert!(can_view_patient(&Actor::for_account(&c.therapist), &c.patient).is_ok());
    assert!(can_view_patient(&Actor::for_account(&c.therapist), &c.other_patient).is_err());
    assert!(can_view_patient(&Actor::Patient(c.patient.id()), &c.patient).is_ok());
    assert!(can_view_patient(&Actor::Patient(c.patient.id()), &c.other_patient).is_err());
}

#[test]
fn assignment_and_completion_capabilities() {
    let c = cast();
    let therapist = Actor::for_account(&c.therapist);
    let patient = Actor::Patient(c.patient.id());

    assert!(can_assign_exercise(&therapist, &c.patient).is_ok());
    assert!(can_assign_exercise(&patient, &c.patient).is_ok());
    assert!(can_assign_exercise(&therapist, &c.other_patient).is_err());
    assert!(can_assign_exercise(&Actor::for_account(&c.admin), &c.patient).is_err());

    assert!(can_complete_exercise(&patient, &c.patient).is_ok());
    assert!(can_complete_exercise(&therapist, &c.patient).is_err());
}

#[test]
fn task_capabilities() {
    let c = cast();
    let therapist = Actor::for_account(&c.therapist);
    let patient = Actor::Patient(c.patient.id());

    assert!(can_add_task(&therapist, &c.patient).is_ok());
    assert!(can_add_task(&patient, &c.patient).is_ok());
    assert!(can_toggle_task(&patient, &c.patient).is_ok());
    assert!(can_toggle_task(&therapist, &c.patient).is_err());
}

#[test]
fn listing_and_assistant_capabilities() {
    let c = cast();
    let admin = Actor::for_account(&c.admin);
    let therapist = Actor::for_account(&c.therapist);
    let patient = Actor::Patient(c.patient.id());

    assert!(can_list_therapists(&admin).is_ok());
    assert!(can_list_therapists(&therapist).is_err());
    assert!(can_list_patients(&therapist).is_ok());
    assert!(can_list_patients(&patient).is_err());
    assert!(can_use_assistant(&patient).is_ok());
    assert!(can_use_assistant(&admin).is_err());
}
