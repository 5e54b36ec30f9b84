use super::repository;
use contracts::domain::a001_support_contact::aggregate::{SupportContact, SupportContactId};
use contracts::domain::a001_support_contact::dto::{MutationResponse, SupportContactDraft};

const MSG_NOT_FOUND: &str = "not found";

/// Отказ валидации как ответ бэкенда (`status=false`)
fn rejected(draft: &SupportContactDraft) -> Option<MutationResponse> {
    draft
        .validate()
        .err()
        .map(|e| MutationResponse::failed(e.to_string()))
}

/// Новое обращение из формы создания: наименование категории служит и именем
fn contact_from_draft(draft: &SupportContactDraft) -> SupportContact {
    SupportContact {
        id: 0,
        name: draft.name.clone(),
        number: String::new(),
        message: String::new(),
        is_brand: false,
        category_name: Some(draft.name.clone()),
        category_code: Some(draft.code.clone()),
    }
}

pub async fn list_all() -> anyhow::Result<Vec<SupportContact>> {
    repository::list_all().await
}

pub async fn get_by_id(id: SupportContactId) -> anyhow::Result<Option<SupportContact>> {
    repository::get_by_id(id).await
}

/// Создание обращения
pub async fn create(draft: SupportContactDraft) -> anyhow::Result<MutationResponse> {
    if let Some(resp) = rejected(&draft) {
        return Ok(resp);
    }
    let id = repository::insert(&contact_from_draft(&draft)).await?;
    tracing::info!("Support contact {} created", id);
    Ok(MutationResponse::ok("Successfully added."))
}

/// Обновление категории обращения
pub async fn update(
    id: SupportContactId,
    draft: SupportContactDraft,
) -> anyhow::Result<MutationResponse> {
    if let Some(resp) = rejected(&draft) {
        return Ok(resp);
    }
    if !repository::update_category(id, &draft).await? {
        tracing::warn!("Support contact {} not found for update", id);
        return Ok(MutationResponse::failed(MSG_NOT_FOUND));
    }
    tracing::info!("Support contact {} updated", id);
    Ok(MutationResponse::ok("Successfully updated."))
}

/// Удаление обращения
pub async fn delete(id: SupportContactId) -> anyhow::Result<MutationResponse> {
    if !repository::delete(id).await? {
        tracing::warn!("Support contact {} not found for delete", id);
        return Ok(MutationResponse::failed(MSG_NOT_FOUND));
    }
    tracing::info!("Support contact {} deleted", id);
    Ok(MutationResponse::ok("Successfully Deleted."))
}

/// Вставка тестовых данных
pub async fn insert_test_data() -> anyhow::Result<usize> {
    let data = vec![
        ("Anna Petrova", "+7 900 111-22-33", "Want to list our cosmetics line", true, "Beauty", "BTY"),
        ("Max Travel", "+7 900 222-33-44", "Interested in a promo collaboration", false, "Travel", "TRV"),
        ("Green Foods LLC", "+7 900 333-44-55", "How do we become a partner brand?", true, "Food", "FOD"),
        ("Kate Fit", "+7 900 444-55-66", "Looking for sport brands", false, "Sport", "SPT"),
        ("TechNova", "+7 900 555-66-77", "Please send the media kit", true, "Electronics", "ELC"),
        ("Leo Gamer", "+7 900 666-77-88", "Stream sponsorship request", false, "Gaming", "GMG"),
    ];

    let count = data.len();
    for (name, number, message, is_brand, category_name, category_code) in data {
        repository::insert(&SupportContact {
            id: 0,
            name: name.into(),
            number: number.into(),
            message: message.into(),
            is_brand,
            category_name: Some(category_name.into()),
            category_code: Some(category_code.into()),
        })
        .await?;
    }
    tracing::info!("Inserted {} test support contacts", count);
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_draft_is_rejected_with_message() {
        let resp = rejected(&SupportContactDraft::new("", "X")).unwrap();
        assert_eq!(resp, MutationResponse::failed("Enter the name."));

        let resp = rejected(&SupportContactDraft::new("Food", "")).unwrap();
        assert_eq!(resp, MutationResponse::failed("Enter the code."));

        assert!(rejected(&SupportContactDraft::new(" ", " ")).is_none());

        assert!(rejected(&SupportContactDraft::new("Food", "F01")).is_none());
    }

    #[test]
    fn test_contact_from_draft_keeps_values_as_typed() {
        let contact = contact_from_draft(&SupportContactDraft::new(" Food", "F01 "));
        assert_eq!(contact.name, " Food");
        assert_eq!(contact.category_name.as_deref(), Some(" Food"));
        assert_eq!(contact.category_code.as_deref(), Some("F01 "));
        assert!(!contact.is_brand);
    }
}
