//! Demo accounts for local runs and UI development.

use menteclara_core::models::account::{AccountStatus, Actor, NewAccount};
use menteclara_core::models::exercise::{ExerciseContent, ExerciseDraft};
use menteclara_core::models::progress::ProgressEntry;

use crate::error::StoreError;
use crate::store::Store;

pub const DEMO_PASSWORD: &str = "123";

fn new_account(name: &str, email: &str) -> NewAccount {
    NewAccount {
        name: name.to_string(),
        email: email.to_string(),
        password: DEMO_PASSWORD.to_string(),
    }
}

fn history_entry(date: &str, mood_average: f64, exercises_completed: u32) -> Result<ProgressEntry, StoreError> {
    let date = date
        .parse::<jiff::Timestamp>()
        .map_err(|e| StoreError::Seed(e.to_string()))?;
    Ok(ProgressEntry {
        date,
        mood_average,
        exercises_completed,
    })
}

/// Build a store holding one admin, an active and an inactive therapist, and
/// one patient with an assigned exercise, two tasks and a short history.
pub fn demo_store(record_progress: bool) -> Result<Store, StoreError> {
    let mut store = Store::new().with_progress_tracking(record_progress);

    let admin = store.add_admin(new_account("Administradora Principal", "admin@menteclara.com"))?;
    let admin = Actor::for_account(&admin);

    let sofia = store.create_therapist(&admin, new_account("Dr. Sofia Ramirez", "doctor@menteclara.com"))?;
    let carlos = store.create_therapist(&admin, new_account("Lic. Carlos Mendez", "carlos@menteclara.com"))?;
    store.set_account_status(&admin, carlos.id, AccountStatus::Inactive)?;

    let sofia = Actor::for_account(&sofia);
    let juan = store.create_patient(&sofia, new_account("Juan Perez", "juan@email.com"))?;

    store.assign_exercise(
        &sofia,
        Some(juan.id()),
        ExerciseDraft {
            content: ExerciseContent {
                title: "Registro de Pensamientos".to_string(),
                description: "Identificar pensamientos automáticos negativos.".to_string(),
                steps: vec![
                    "Identificar situación: ¿Qué estaba pasando?".to_string(),
                    "Identificar emoción: ¿Qué sentiste?".to_string(),
                    "Escribir pensamiento: ¿Qué pasó por tu mente?".to_string(),
                ],
            },
            symptoms: "Ansiedad".to_string(),
        },
    )?;

    let walk = store.add_task(&sofia, juan.id(), "Caminar 15 minutos")?;
    store.add_task(&sofia, juan.id(), "Practicar respiración profunda")?;
    store.toggle_task(&Actor::Patient(juan.id()), juan.id(), walk.id)?;

    let history = [
        history_entry("2023-10-25T10:00:00Z", 6.5, 2)?,
        history_entry("2023-10-26T10:00:00Z", 7.2, 1)?,
        history_entry("2023-10-27T10:00:00Z", 8.0, 3)?,
    ];
    store.import_progress(juan.id(), history)?;

    Ok(store)
}
