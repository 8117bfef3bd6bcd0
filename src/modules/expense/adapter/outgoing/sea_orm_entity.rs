use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::expense::application::ports::outgoing::ExpenseResult;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub user_id: Uuid,

    pub description: String,

    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub amount: Decimal,

    pub date: DateTimeWithTimeZone,

    pub category: Option<String>,

    pub receipt_url: Option<String>,

    pub reimbursed: bool,

    pub insurance_claim: Option<String>,
}

impl Model {
    pub fn to_repository_result(&self) -> ExpenseResult {
        ExpenseResult {
            id: self.id,
            owner: UserId::from(self.user_id),
            description: self.description.clone(),
            amount: self.amount,
            date: self.date.into(),
            category: self.category.clone(),
            receipt_url: self.receipt_url.clone(),
            reimbursed: self.reimbursed,
            insurance_claim: self.insurance_claim.clone(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::UserId",
        to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::Column::Id"
    )]
    User,
}

impl ActiveModelBehavior for ActiveModel {}
