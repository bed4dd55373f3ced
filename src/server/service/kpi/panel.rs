use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::{
    model::kpi::{KpiComparisonDto, PanelSnapshotDto},
    server::{
        error::Error,
        model::kpi::KpiCode,
        service::{kpi::compute_kpi_over_range, metric},
        util::time::{previous_range, range_bounds, validate_range, Clock},
    },
};

pub struct KpiPanelService<'a> {
    db: &'a DatabaseConnection,
    clock: &'a dyn Clock,
}

impl<'a> KpiPanelService<'a> {
    pub fn new(db: &'a DatabaseConnection, clock: &'a dyn Clock) -> Self {
        Self { db, clock }
    }

    /// Compares each KPI over `[desde, hasta)` against the immediately
    /// preceding period of equal length. Always computed fresh; nothing is
    /// persisted, which is what makes auto-refresh polling safe.
    pub async fn compare_panel_period(
        &self,
        desde: NaiveDate,
        hasta: NaiveDate,
    ) -> Result<PanelSnapshotDto, Error> {
        validate_range(desde, hasta)?;

        let (from, to) = range_bounds(desde, hasta);
        let (prev_desde, prev_hasta) = previous_range(desde, hasta);
        let (prev_from, prev_to) = range_bounds(prev_desde, prev_hasta);

        let mut kpis = Vec::with_capacity(KpiCode::ALL.len());

        for code in KpiCode::ALL {
            let actual = compute_kpi_over_range(self.db, code, from, to).await?;
            let previous = compute_kpi_over_range(self.db, code, prev_from, prev_to).await?;

            kpis.push(compare(
                code,
                actual.map(|c| c.valor),
                previous.map(|c| c.valor),
            ));
        }

        Ok(PanelSnapshotDto {
            desde,
            hasta,
            kpis,
            generado_en: self.clock.now(),
        })
    }
}

fn compare(code: KpiCode, actual: Option<f64>, previous: Option<f64>) -> KpiComparisonDto {
    let (diferencia, pct_cambio) = match (actual, previous) {
        (Some(actual), Some(previous)) => {
            let diferencia = metric::round4(actual - previous);
            // Divide-by-zero guard: a previous period at exactly zero
            // reports 0% change, never NaN or infinity.
            let pct_cambio = if previous == 0.0 {
                0.0
            } else {
                metric::round4(diferencia / previous * 100.0)
            };
            (diferencia, pct_cambio)
        }
        _ => (0.0, 0.0),
    };

    let tendencia = if diferencia > 0.0 {
        "↑"
    } else if diferencia < 0.0 {
        "↓"
    } else {
        "→"
    };

    // Favorable direction is KPI-specific: time KPIs improve downward,
    // percentage KPIs upward. A flat reading is not adverse.
    let tendencia_positiva = if diferencia == 0.0 {
        true
    } else if code.lower_is_better() {
        diferencia < 0.0
    } else {
        diferencia > 0.0
    };

    KpiComparisonDto {
        codigo: code.as_str().to_string(),
        nombre: code.nombre().to_string(),
        valor_actual: actual,
        valor_anterior: previous,
        diferencia,
        pct_cambio,
        tendencia: tendencia.to_string(),
        tendencia_positiva,
        meta: code.meta(),
        cumple_meta: actual.map(|v| code.cumple_meta(v)).unwrap_or(false),
    }
}
