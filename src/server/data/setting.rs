use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

pub struct SettingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_key(&self, key: &str) -> Result<Option<entity::setting::Model>, DbErr> {
        entity::prelude::Setting::find()
            .filter(entity::setting::Column::Key.eq(key))
            .one(self.db)
            .await
    }

    /// Creates or updates the entry for `key`. Settings have no deletion
    /// path; an upsert is the only write.
    pub async fn upsert(
        &self,
        key: &str,
        value: &str,
        description: Option<String>,
        now: NaiveDateTime,
    ) -> Result<entity::setting::Model, DbErr> {
        match self.find_by_key(key).await? {
            Some(existing) => {
                let mut setting = existing.into_active_model();
                setting.value = ActiveValue::Set(value.to_string());
                if description.is_some() {
                    setting.description = ActiveValue::Set(description);
                }
                setting.updated_at = ActiveValue::Set(now);

                setting.update(self.db).await
            }
            None => {
                let setting = entity::setting::ActiveModel {
                    key: ActiveValue::Set(key.to_string()),
                    value: ActiveValue::Set(value.to_string()),
                    description: ActiveValue::Set(description),
                    updated_at: ActiveValue::Set(now),
                    ..Default::default()
                };

                setting.insert(self.db).await
            }
        }
    }
}
