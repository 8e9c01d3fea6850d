use menteclara_auth::error::AuthError;
use menteclara_auth::flows::{authenticate, guardian_gate, normalize_email, revalidate, Directory};
use menteclara_core::models::account::{Account, AccountStatus, Actor, Password, Role};
use menteclara_core::models::patient::Patient;

struct Fixture {
    admins: Vec<Account>,
    therapists: Vec<Account>,
    patients: Vec<Patient>,
}

impl Directory for Fixture {
    fn admins(&self) -> &[Account] {
        &self.admins
    }

    fn therapists(&self) -> &[Account] {
        &self.therapists
    }

    fn patients(&self) -> &[Patient] {
        &self.patients
    }
}

fn account(role: Role, email: &str) -> Account {
    Account::new(role, email, email, Password::new("123"))
}

fn fixture() -> Fixture {
    let admin = account(Role::Admin, "admin@menteclara.com");
    let therapist = account(Role::Therapist, "doctor@menteclara.com");
    let patient = Patient::new(account(Role::Patient, "juan@email.com"), therapist.id);
    Fixture {
        admins: vec![admin],
        therapists: vec![therapist],
        patients: vec![patient],
    }
}

#[test]
fn normalizes_email() {
    assert_eq!(normalize_email("  Juan@Email.COM "), "juan@email.com");
}

#[test]
fn admin_logs_in() {
    let dir = fixture();
    let actor = authenticate(&dir, "admin@menteclara.com", "123").unwrap();
    assert_eq!(actor, Actor::Admin(dir.admins[0].id));
}

#[test]
fn patient_email_is_case_insensitive_and_trimmed() {
    let dir = fixture();
    let actor = authenticate(&dir, " JUAN@email.com ", " 123 ").unwrap();
    assert_eq!(actor, Actor::Patient(dir.patients[0].id()));
}

#[test]
fn wrong_password_is_invalid_credentials() {
    let dir = fixture();
    assert_eq!(
        authenticate(&dir, "doctor@menteclara.com", "nope"),
        Err(AuthError::InvalidCredentials)
    );
    assert_eq!(
        authenticate(&dir, "nobody@menteclara.com", "123"),
        Err(AuthError::InvalidCredentials)
    );
}

#[test]
fn inactive_therapist_is_disabled() {
    let mut dir = fixture();
    dir.therapists[0].status = AccountStatus::Inactive;
    assert_eq!(
        authenticate(&dir, "doctor@menteclara.com", "123"),
        Err(AuthError::AccountDisabled)
    );
}

#[test]
fn inactive_patient_is_disabled_regardless_of_therapist() {
    let mut dir = fixture();
    dir.patients[0].account.status = AccountStatus::Inactive;
    assert_eq!(
        authenticate(&dir, "juan@email.com", "123"),
        Err(AuthError::AccountDisabled)
    );

    dir.therapists[0].status = AccountStatus::Inactive;
    assert_eq!(
        authenticate(&dir, "juan@email.com", "123"),
        Err(AuthError::AccountDisabled)
    );
}

#[test]
fn inactive_therapist_locks_out_active_patient() {
    let mut dir = fixture();
    dir.therapists[0].status = AccountStatus::Inactive;
    assert_eq!(
        authenticate(&dir, "juan@email.com", "123"),
        Err(AuthError::GuardianDisabled)
    );
    // The patient record itself is untouched.
    assert_eq!(dir.patients[0].account.status, AccountStatus::Active);
}

#[test]
fn dangling_therapist_reference_does_not_block() {
    let mut dir = fixture();
    dir.therapists.clear();
    assert!(authenticate(&dir, "juan@email.com", "123").is_ok());
}

#[test]
fn guardian_gate_is_a_pure_rule() {
    let dir = fixture();
    let mut therapist = dir.therapists[0].clone();
    let patient = &dir.patients[0];

    assert_eq!(guardian_gate(patient, Some(&therapist)), Ok(()));
    therapist.status = AccountStatus::Inactive;
    assert_eq!(
        guardian_gate(patient, Some(&therapist)),
        Err(AuthError::GuardianDisabled)
    );
    assert_eq!(guardian_gate(patient, None), Ok(()));
}

#[test]
fn revalidate_applies_cascading_rule_to_sessions() {
    let mut dir = fixture();
    let actor = Actor::Patient(dir.patients[0].id());
    assert_eq!(revalidate(&dir, &actor), Ok(()));

    dir.therapists[0].status = AccountStatus::Inactive;
    assert_eq!(revalidate(&dir, &actor), Err(AuthError::GuardianDisabled));
    assert_eq!(
        revalidate(&dir, &Actor::Therapist(dir.therapists[0].id)),
        Err(AuthError::AccountDisabled)
    );
}

#[test]
fn revalidate_rejects_unknown_accounts() {
    let dir = fixture();
    assert_eq!(
        revalidate(&dir, &Actor::Admin(uuid::Uuid::new_v4())),
        Err(AuthError::UnknownAccount)
    );
}
