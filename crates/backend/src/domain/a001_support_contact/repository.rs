use chrono::Utc;
use contracts::domain::a001_support_contact::aggregate::{SupportContact, SupportContactId};
use contracts::domain::a001_support_contact::dto::SupportContactDraft;

use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveValue::NotSet, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "a001_support_contact")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub number: String,
    pub message: String,
    pub is_brand: bool,
    pub category_name: Option<String>,
    pub category_code: Option<String>,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for SupportContact {
    fn from(m: Model) -> Self {
        SupportContact {
            id: m.id,
            name: m.name,
            number: m.number,
            message: m.message,
            is_brand: m.is_brand,
            category_name: m.category_name,
            category_code: m.category_code,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Все обращения в порядке поступления
pub async fn list_all() -> anyhow::Result<Vec<SupportContact>> {
    let items = Entity::find()
        .order_by_asc(Column::Id)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: SupportContactId) -> anyhow::Result<Option<SupportContact>> {
    let result = Entity::find_by_id(id).one(conn()).await?;
    Ok(result.map(Into::into))
}

/// Вставка; `contact.id` игнорируется, id выдаёт БД
pub async fn insert(contact: &SupportContact) -> anyhow::Result<SupportContactId> {
    let now = Utc::now();
    let active = ActiveModel {
        id: NotSet,
        name: Set(contact.name.clone()),
        number: Set(contact.number.clone()),
        message: Set(contact.message.clone()),
        is_brand: Set(contact.is_brand),
        category_name: Set(contact.category_name.clone()),
        category_code: Set(contact.category_code.clone()),
        created_at: Set(Some(now)),
        updated_at: Set(Some(now)),
    };
    let model = active.insert(conn()).await?;
    Ok(model.id)
}

/// Обновляет категорию; `false`, если записи нет
pub async fn update_category(
    id: SupportContactId,
    draft: &SupportContactDraft,
) -> anyhow::Result<bool> {
    let result = Entity::update_many()
        .col_expr(Column::CategoryName, Expr::value(draft.name.clone()))
        .col_expr(Column::CategoryCode, Expr::value(draft.code.clone()))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(id))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}

pub async fn delete(id: SupportContactId) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id).exec(conn()).await?;
    Ok(result.rows_affected > 0)
}
