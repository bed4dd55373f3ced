use chrono::{NaiveDate, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::kpi::{KpiOutcome, KpiOutcomeDto, RecomputeStatus, RecomputeSummaryDto},
    server::{
        data::kpi::{KpiDefinitionRepository, KpiValueRepository},
        error::Error,
        model::kpi::KpiCode,
        service::kpi::{compute_kpi_over_range, KpiComputation},
        util::time::day_bounds,
    },
};

pub struct KpiAggregatorService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> KpiAggregatorService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Computes and persists the four daily KPI snapshots for a period.
    ///
    /// Idempotent: with `force = false`, an already-computed period is a
    /// no-op reported as `AlreadyComputed`. With `force = true`, existing
    /// snapshots are deleted and reinserted; delete and inserts run inside
    /// one transaction, so a failure part-way leaves zero partial rows.
    ///
    /// A missing catalog definition skips that KPI with a warning and the
    /// rest proceed; this is a different failure domain from the write
    /// transaction, which is all-or-nothing.
    pub async fn recompute(
        &self,
        periodo: NaiveDate,
        force: bool,
    ) -> Result<RecomputeSummaryDto, Error> {
        let value_repo = KpiValueRepository::new(self.db);

        if value_repo.any_for_period(periodo).await? && !force {
            tracing::info!(
                "KPI values already exist for {}; skipping (use force to recompute)",
                periodo
            );

            return Ok(RecomputeSummaryDto {
                periodo,
                status: RecomputeStatus::AlreadyComputed,
                kpis: Vec::new(),
                warnings: vec![format!(
                    "KPI values already exist for period {}; use force to recompute",
                    periodo
                )],
            });
        }

        let def_repo = KpiDefinitionRepository::new(self.db);
        let (from, to) = day_bounds(periodo);

        let mut computed: Vec<(entity::kpi_definition::Model, KpiCode, KpiComputation)> =
            Vec::new();
        let mut kpis = Vec::new();
        let mut warnings = Vec::new();

        for code in KpiCode::ALL {
            let Some(def) = def_repo.find_by_code(code.as_str()).await? else {
                tracing::warn!(
                    "No KPI definition found for code {:?}; skipping",
                    code.as_str()
                );
                warnings.push(format!(
                    "No KPI definition found for code {:?}; skipped",
                    code.as_str()
                ));
                kpis.push(KpiOutcomeDto {
                    codigo: code.as_str().to_string(),
                    outcome: KpiOutcome::SkippedMissingDefinition,
                });
                continue;
            };

            match compute_kpi_over_range(self.db, code, from, to).await? {
                None => {
                    kpis.push(KpiOutcomeDto {
                        codigo: code.as_str().to_string(),
                        outcome: KpiOutcome::SkippedNoData,
                    });
                }
                Some(computation) => {
                    kpis.push(KpiOutcomeDto {
                        codigo: code.as_str().to_string(),
                        outcome: KpiOutcome::Computed {
                            valor: computation.valor,
                        },
                    });
                    computed.push((def, code, computation));
                }
            }
        }

        // Delete-then-insert as one atomic unit. Any insert failure rolls
        // the whole period back; partial KPI sets must never be observable.
        let txn = self.db.begin().await?;

        value_repo.delete_for_period(&txn, periodo).await?;

        let now = Utc::now().naive_utc();
        for (def, code, computation) in &computed {
            value_repo
                .insert(
                    &txn,
                    def.id,
                    periodo,
                    computation.valor,
                    code.meta(),
                    code.fuente(),
                    computation.extra.clone(),
                    now,
                )
                .await?;
        }

        txn.commit().await?;

        tracing::info!(
            "Recomputed KPIs for {}: {} computed, {} skipped",
            periodo,
            computed.len(),
            kpis.len() - computed.len()
        );

        Ok(RecomputeSummaryDto {
            periodo,
            status: RecomputeStatus::Computed,
            kpis,
            warnings,
        })
    }
}
