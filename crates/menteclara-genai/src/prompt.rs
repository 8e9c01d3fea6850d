//! Request bodies sent to Gemini.

use serde_json::{Value, json};

/// Build the CBT exercise prompt for a free-text symptom description.
pub fn exercise_prompt(symptoms: &str) -> String {
    format!(
        "Actúa como un terapeuta experto en Terapia Cognitivo Conductual (TCC). \
Genera un ejercicio práctico, breve y específico para un paciente que presenta los siguientes síntomas: \"{symptoms}\". \
El ejercicio debe ser claro y seguir una estructura paso a paso."
    )
}

/// Structured-output schema: a title, a description and 3 to 5 steps.
pub fn exercise_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": {
                "type": "STRING",
                "description": "Un título alentador y claro para el ejercicio"
            },
            "description": {
                "type": "STRING",
                "description": "Una breve explicación de por qué este ejercicio ayuda con los síntomas mencionados"
            },
            "steps": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Lista de pasos prácticos a seguir (entre 3 y 5 pasos)"
            }
        },
        "required": ["title", "description", "steps"]
    })
}

pub fn exercise_request(symptoms: &str) -> Value {
    json!({
        "contents": [{ "parts": [{ "text": exercise_prompt(symptoms) }] }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": exercise_schema()
        }
    })
}

pub fn speech_request(text: &str, voice: &str) -> Value {
    json!({
        "contents": [{ "parts": [{ "text": text }] }],
        "generationConfig": {
            "responseModalities": ["AUDIO"],
            "speechConfig": {
                "voiceConfig": {
                    "prebuiltVoiceConfig": { "voiceName": voice }
                }
            }
        }
    })
}
