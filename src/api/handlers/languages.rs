// src/api/handlers/languages.rs
use actix_web::{HttpResponse, Result};
use serde::Serialize;

use crate::languages::LANGUAGES;

#[derive(Serialize)]
pub struct LanguageInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub version: &'static str,
    pub starter: &'static str,
}

#[derive(Serialize)]
pub struct LanguagesResponse {
    pub languages: Vec<LanguageInfo>,
}

/// The static language catalog, so the frontend selector doesn't duplicate it.
pub async fn list_languages() -> Result<HttpResponse> {
    let languages = LANGUAGES
        .iter()
        .map(|lang| LanguageInfo {
            id: lang.id,
            name: lang.name,
            version: lang.version,
            starter: lang.starter,
        })
        .collect();

    Ok(HttpResponse::Ok().json(LanguagesResponse { languages }))
}
