use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::aggregate::SupportContact;

// ============================================================================
// Draft (форма редактирования / создания)
// ============================================================================

/// Редактируемые поля обращения: категория (наименование и код)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportContactDraft {
    #[serde(rename = "categoryName", default)]
    pub name: String,
    #[serde(rename = "categoryCode", default)]
    pub code: String,
}

/// Ошибка проверки формы. Текст показывается пользователю как есть.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Enter the name.")]
    MissingName,
    #[error("Enter the code.")]
    MissingCode,
}

impl SupportContactDraft {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }

    /// Наименование проверяется раньше кода; возвращается только первая ошибка
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.name.is_empty() {
            return Err(DraftError::MissingName);
        }
        if self.code.is_empty() {
            return Err(DraftError::MissingCode);
        }
        Ok(())
    }
}

impl From<&SupportContact> for SupportContactDraft {
    fn from(record: &SupportContact) -> Self {
        Self {
            name: record.category_name.clone().unwrap_or_default(),
            code: record.category_code.clone().unwrap_or_default(),
        }
    }
}

// ============================================================================
// Mutation response
// ============================================================================

/// Ответ на create/update/delete.
///
/// `status=false` означает отказ бэкенда (не транспортную ошибку).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationResponse {
    #[serde(rename = "status", alias = "success")]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl MutationResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}
