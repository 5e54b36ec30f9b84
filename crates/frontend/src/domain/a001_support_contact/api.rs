use contracts::domain::a001_support_contact::aggregate::{SupportContact, SupportContactId};
use contracts::domain::a001_support_contact::dto::{MutationResponse, SupportContactDraft};
use gloo_net::http::{Request, Response};

use crate::shared::api_utils::api_url;

const COLLECTION: &str = "/api/support_contact";

/// Подтверждённое изменение, готовое к отправке
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Update {
        id: SupportContactId,
        draft: SupportContactDraft,
    },
    Create(SupportContactDraft),
    Delete(SupportContactId),
}

fn item_url(id: SupportContactId) -> String {
    api_url(&format!("{}/{}", COLLECTION, id))
}

async fn read_mutation(response: Response) -> Result<MutationResponse, String> {
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response
        .json::<MutationResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch all contacts
pub async fn fetch_all() -> Result<Vec<SupportContact>, String> {
    let response = Request::get(&api_url(COLLECTION))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<Vec<SupportContact>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch a single contact
pub async fn fetch_by_id(id: SupportContactId) -> Result<SupportContact, String> {
    let response = Request::get(&item_url(id))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if response.status() == 404 {
        return Err("Not found".to_string());
    }
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<SupportContact>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Update category fields of an existing contact
pub async fn update(
    id: SupportContactId,
    draft: &SupportContactDraft,
) -> Result<MutationResponse, String> {
    let response = Request::put(&item_url(id))
        .json(draft)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_mutation(response).await
}

/// Create a new contact from a draft
pub async fn create(draft: &SupportContactDraft) -> Result<MutationResponse, String> {
    let response = Request::post(&api_url(COLLECTION))
        .json(draft)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_mutation(response).await
}

/// Delete contact
pub async fn delete(id: SupportContactId) -> Result<MutationResponse, String> {
    let response = Request::delete(&item_url(id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_mutation(response).await
}

/// Dispatch a confirmed mutation to the matching endpoint
pub async fn submit(mutation: &Mutation) -> Result<MutationResponse, String> {
    match mutation {
        Mutation::Update { id, draft } => update(*id, draft).await,
        Mutation::Create(draft) => create(draft).await,
        Mutation::Delete(id) => delete(*id).await,
    }
}
