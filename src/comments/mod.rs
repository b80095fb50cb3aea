pub mod store;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use store::{CommentStore, FileStore, MemoryStore};

pub const PREDEFINED_COMMENTS: &[&str] = &[
    "Excelente desempeño en las competencias emprendedoras evaluadas.",
    "Se recomienda fortalecer las áreas de menor puntuación identificadas.",
    "Las habilidades de liderazgo muestran gran potencial de desarrollo.",
    "Es importante trabajar en la tolerancia a la incertidumbre.",
    "Las competencias financieras requieren mayor atención y capacitación.",
    "El trabajo en equipo es una fortaleza destacada del emprendedor.",
    "Se sugiere desarrollar más el pensamiento estratégico.",
    "Las habilidades tecnológicas están por encima del promedio.",
    "La creatividad es un punto fuerte que debe ser aprovechado.",
    "Se recomienda participar en programas de mentoría empresarial.",
];

const SYSTEM_ADVISOR: &str = "Sistema";
const DEFAULT_ADVISOR: &str = "Asesor";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("comment text is empty")]
    EmptyComment,
    #[error("unknown predefined comment {index} (available: 0..{available})")]
    UnknownPreset { index: usize, available: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentKind {
    Predeterminado,
    Personalizado,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub texto: String,
    pub tipo: CommentKind,
    pub fecha: DateTime<Utc>,
    pub asesor: String,
}

/// Advisor comments per subject, stored as one JSON blob under
/// `comentarios_{subject}`.
#[derive(Debug, Clone)]
pub struct AdvisorNotes<S> {
    store: S,
}

impl<S: CommentStore> AdvisorNotes<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    pub fn key(subject: &str) -> String {
        format!("comentarios_{subject}")
    }

    /// A missing or unreadable blob loads as an empty list.
    pub fn load(&self, subject: &str) -> Result<Vec<Comment>, StoreError> {
        let Some(blob) = self.store.get(&Self::key(subject))? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&blob) {
            Ok(comments) => Ok(comments),
            Err(err) => {
                tracing::warn!("discarding unreadable comments for subject {subject}: {err}");
                Ok(Vec::new())
            }
        }
    }

    pub fn add_predefined(&mut self, subject: &str, index: usize) -> Result<Comment, StoreError> {
        self.add_predefined_at(subject, index, Utc::now())
    }

    pub fn add_predefined_at(
        &mut self,
        subject: &str,
        index: usize,
        now: DateTime<Utc>,
    ) -> Result<Comment, StoreError> {
        let text = PREDEFINED_COMMENTS
            .get(index)
            .ok_or(StoreError::UnknownPreset {
                index,
                available: PREDEFINED_COMMENTS.len(),
            })?;
        self.push(
            subject,
            text.to_string(),
            CommentKind::Predeterminado,
            SYSTEM_ADVISOR,
            now,
        )
    }

    pub fn add_custom(&mut self, subject: &str, text: &str) -> Result<Comment, StoreError> {
        self.add_custom_at(subject, text, Utc::now())
    }

    pub fn add_custom_at(
        &mut self,
        subject: &str,
        text: &str,
        now: DateTime<Utc>,
    ) -> Result<Comment, StoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(StoreError::EmptyComment);
        }
        self.push(
            subject,
            text.to_string(),
            CommentKind::Personalizado,
            DEFAULT_ADVISOR,
            now,
        )
    }

    /// Returns whether a comment with `comment_id` was present.
    pub fn remove(&mut self, subject: &str, comment_id: &str) -> Result<bool, StoreError> {
        let mut comments = self.load(subject)?;
        let before = comments.len();
        comments.retain(|c| c.id != comment_id);
        let removed = comments.len() != before;
        if removed {
            self.save(subject, &comments)?;
        }
        Ok(removed)
    }

    fn push(
        &mut self,
        subject: &str,
        texto: String,
        tipo: CommentKind,
        asesor: &str,
        now: DateTime<Utc>,
    ) -> Result<Comment, StoreError> {
        let mut comments = self.load(subject)?;
        let comment = Comment {
            id: unique_id(&comments, now.timestamp_millis()),
            texto,
            tipo,
            fecha: now,
            asesor: asesor.to_string(),
        };
        comments.push(comment.clone());
        self.save(subject, &comments)?;
        Ok(comment)
    }

    fn save(&mut self, subject: &str, comments: &[Comment]) -> Result<(), StoreError> {
        let blob = serde_json::to_string(comments)?;
        self.store.set(&Self::key(subject), blob)
    }
}

fn unique_id(existing: &[Comment], millis: i64) -> String {
    let mut candidate = millis;
    while existing.iter().any(|c| c.id == candidate.to_string()) {
        candidate += 1;
    }
    candidate.to_string()
}

#[cfg(test)]
#[path = "../../tests/src_inline/comments/tests.rs"]
mod tests;
