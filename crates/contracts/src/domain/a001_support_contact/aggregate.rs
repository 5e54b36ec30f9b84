use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор обращения (autoincrement в БД)
pub type SupportContactId = i64;

// ============================================================================
// Aggregate Root
// ============================================================================

/// Обращение в поддержку / форма обратной связи
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportContact {
    pub id: SupportContactId,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub number: String,

    #[serde(default)]
    pub message: String,

    /// Бренд (true) или инфлюенсер (false)
    #[serde(
        rename = "isBrand",
        alias = "isbrand",
        default,
        deserialize_with = "crate::shared::flag::deserialize"
    )]
    pub is_brand: bool,

    #[serde(rename = "categoryName", default)]
    pub category_name: Option<String>,

    #[serde(rename = "categoryCode", default)]
    pub category_code: Option<String>,
}

impl SupportContact {
    /// Подпись бейджа в карточке списка
    pub fn kind_label(&self) -> &'static str {
        if self.is_brand {
            "Brand"
        } else {
            "Influencer"
        }
    }

    pub fn element_name() -> &'static str {
        "Contact"
    }

    pub fn collection_name() -> &'static str {
        "support_contact"
    }
}
