use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::server::util::time::day_bounds;

pub struct AppointmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AppointmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Attended appointments whose arrival falls on the given date.
    pub async fn find_attended_by_arrival_date(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<entity::appointment::Model>, DbErr> {
        let (start, end) = day_bounds(date);
        self.find_attended_in_range(start, end).await
    }

    /// Attended appointments whose arrival falls within `[from, to)`.
    pub async fn find_attended_in_range(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<Vec<entity::appointment::Model>, DbErr> {
        entity::prelude::Appointment::find()
            .filter(
                entity::appointment::Column::Estado
                    .eq(entity::appointment::AppointmentEstado::Atendida),
            )
            .filter(entity::appointment::Column::HoraLlegada.gte(from))
            .filter(entity::appointment::Column::HoraLlegada.lt(to))
            .all(self.db)
            .await
    }

    /// All appointments scheduled on the given date, regardless of arrival
    /// status; this is the punctuality denominator.
    pub async fn find_by_scheduled_date(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<entity::appointment::Model>, DbErr> {
        let (start, end) = day_bounds(date);
        self.find_scheduled_in_range(start, end).await
    }

    /// All appointments scheduled within `[from, to)`.
    pub async fn find_scheduled_in_range(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<Vec<entity::appointment::Model>, DbErr> {
        entity::prelude::Appointment::find()
            .filter(entity::appointment::Column::HoraProgramada.gte(from))
            .filter(entity::appointment::Column::HoraProgramada.lt(to))
            .all(self.db)
            .await
    }
}
