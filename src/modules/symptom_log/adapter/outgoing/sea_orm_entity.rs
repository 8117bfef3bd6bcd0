use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::symptom_log::application::ports::outgoing::{
    MedicationEntry, SymptomLogResult,
};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "symptom_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub user_id: Uuid,

    pub date: DateTimeWithTimeZone,

    pub pain_level: Option<i32>,

    pub fatigue_level: Option<i32>,

    pub energy_level: Option<i32>,

    pub mood: Option<String>,

    pub additional_symptoms: Option<Json>,

    pub medications: Option<Json>,

    pub notes: Option<String>,

    pub voice_note_url: Option<String>,
}

impl Model {
    pub fn to_repository_result(&self) -> SymptomLogResult {
        SymptomLogResult {
            id: self.id,
            owner: UserId::from(self.user_id),
            date: self.date.into(),
            pain_level: self.pain_level,
            fatigue_level: self.fatigue_level,
            energy_level: self.energy_level,
            mood: self.mood.clone(),
            additional_symptoms: self
                .additional_symptoms
                .clone()
                .and_then(|v| serde_json::from_value::<Vec<String>>(v).ok()),
            medications: self
                .medications
                .clone()
                .and_then(|v| serde_json::from_value::<Vec<MedicationEntry>>(v).ok()),
            notes: self.notes.clone(),
            voice_note_url: self.voice_note_url.clone(),
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
