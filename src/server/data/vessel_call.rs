use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

use crate::server::util::time::day_bounds;

pub struct VesselCallRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VesselCallRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Vessel calls whose actual departure falls on the given calendar date.
    pub async fn find_by_atd_date(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<entity::vessel_call::Model>, DbErr> {
        let (start, end) = day_bounds(date);
        self.find_departed_in_range(start, end).await
    }

    /// Vessel calls whose actual departure falls within `[from, to)`.
    pub async fn find_departed_in_range(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<Vec<entity::vessel_call::Model>, DbErr> {
        entity::prelude::VesselCall::find()
            .filter(entity::vessel_call::Column::Atd.gte(from))
            .filter(entity::vessel_call::Column::Atd.lt(to))
            .all(self.db)
            .await
    }

    /// Calls alongside a berth at any point within `[from, to)`: actual
    /// berthing before the range end, and not departed before the range
    /// start (an open `atd` means the vessel is still alongside).
    pub async fn find_berthed_in_range(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<Vec<entity::vessel_call::Model>, DbErr> {
        entity::prelude::VesselCall::find()
            .filter(entity::vessel_call::Column::Atb.is_not_null())
            .filter(entity::vessel_call::Column::Atb.lt(to))
            .filter(
                Condition::any()
                    .add(entity::vessel_call::Column::Atd.is_null())
                    .add(entity::vessel_call::Column::Atd.gt(from)),
            )
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use muelle_test_utils::{factory, TestBuilder};

    use super::VesselCallRepository;

    #[tokio::test]
    async fn find_by_atd_date_filters_on_departure_day() {
        let test = TestBuilder::new()
            .with_operational_tables()
            .build()
            .await
            .unwrap();

        // Departed on the 1st, on the 2nd, and not yet departed.
        factory::insert_vessel_call(
            &test.db,
            None,
            Some(factory::dt(2024, 5, 30, 8, 0)),
            Some(factory::dt(2024, 5, 30, 10, 0)),
            Some(factory::dt(2024, 6, 1, 18, 0)),
        )
        .await
        .unwrap();
        factory::insert_vessel_call(
            &test.db,
            None,
            Some(factory::dt(2024, 5, 31, 8, 0)),
            Some(factory::dt(2024, 5, 31, 10, 0)),
            Some(factory::dt(2024, 6, 2, 0, 0)),
        )
        .await
        .unwrap();
        factory::insert_vessel_call(
            &test.db,
            None,
            Some(factory::dt(2024, 6, 1, 8, 0)),
            Some(factory::dt(2024, 6, 1, 10, 0)),
            None,
        )
        .await
        .unwrap();

        let repo = VesselCallRepository::new(&test.db);
        let departed = repo
            .find_by_atd_date(factory::d(2024, 6, 1))
            .await
            .unwrap();

        assert_eq!(departed.len(), 1);
        assert_eq!(departed[0].atd, Some(factory::dt(2024, 6, 1, 18, 0)));
    }

    #[tokio::test]
    async fn find_berthed_in_range_includes_open_calls() {
        let test = TestBuilder::new()
            .with_operational_tables()
            .build()
            .await
            .unwrap();

        let berth = factory::insert_berth(&test.db, "Amarre 1").await.unwrap();

        // Still alongside: atb set, atd null.
        factory::insert_vessel_call(
            &test.db,
            Some(berth.id),
            Some(factory::dt(2024, 6, 1, 0, 0)),
            Some(factory::dt(2024, 6, 1, 2, 0)),
            None,
        )
        .await
        .unwrap();
        // Departed before the range starts.
        factory::insert_vessel_call(
            &test.db,
            Some(berth.id),
            Some(factory::dt(2024, 5, 28, 0, 0)),
            Some(factory::dt(2024, 5, 28, 2, 0)),
            Some(factory::dt(2024, 5, 29, 0, 0)),
        )
        .await
        .unwrap();
        // Never berthed.
        factory::insert_vessel_call(
            &test.db,
            Some(berth.id),
            Some(factory::dt(2024, 6, 1, 4, 0)),
            None,
            None,
        )
        .await
        .unwrap();

        let repo = VesselCallRepository::new(&test.db);
        let berthed = repo
            .find_berthed_in_range(factory::dt(2024, 6, 1, 0, 0), factory::dt(2024, 6, 2, 0, 0))
            .await
            .unwrap();

        assert_eq!(berthed.len(), 1);
        assert!(berthed[0].atd.is_none());
    }
}
