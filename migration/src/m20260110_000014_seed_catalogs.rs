use sea_orm_migration::prelude::*;

use crate::{
    m20260110_000008_create_kpi_definition_table::KpiDefinition,
    m20260110_000010_create_sla_definition_table::SlaDefinition,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let kpis: [(&str, &str, &str); 4] = [
            (
                "turnaround_h",
                "Turnaround de naves",
                "Horas promedio entre arribo (ATA) y zarpe (ATD)",
            ),
            (
                "espera_camion_h",
                "Espera de camiones",
                "Horas promedio entre cita programada y llegada",
            ),
            (
                "cumpl_citas_pct",
                "Cumplimiento de citas",
                "Porcentaje de citas atendidas a tiempo (±15 min)",
            ),
            (
                "tramites_ok_pct",
                "Tramites aprobados",
                "Porcentaje de tramites finalizados con estado APROBADO",
            ),
        ];

        for (code, name, description) in kpis {
            let insert = Query::insert()
                .into_table(KpiDefinition::Table)
                .columns([
                    KpiDefinition::Code,
                    KpiDefinition::Name,
                    KpiDefinition::Description,
                ])
                .values_panic([code.into(), name.into(), description.into()])
                .to_owned();

            manager.exec_stmt(insert).await?;
        }

        let slas: [(&str, &str, &str, f64, &str); 4] = [
            (
                "sla_espera_camion",
                "Espera media de camiones",
                "TRANSPORTISTA",
                3.0,
                "<=",
            ),
            (
                "sla_puntualidad_citas",
                "Puntualidad de citas",
                "TRANSPORTISTA",
                80.0,
                ">=",
            ),
            (
                "sla_ciclo_tramite",
                "Ciclo de tramite",
                "ENTIDAD_ADUANA",
                48.0,
                "<=",
            ),
            (
                "sla_despacho_aprobado",
                "Despachos aprobados",
                "ENTIDAD_ADUANA",
                85.0,
                ">=",
            ),
        ];

        for (code, name, tipo_actor, umbral, comparador) in slas {
            let insert = Query::insert()
                .into_table(SlaDefinition::Table)
                .columns([
                    SlaDefinition::Code,
                    SlaDefinition::Name,
                    SlaDefinition::TipoActor,
                    SlaDefinition::Umbral,
                    SlaDefinition::Comparador,
                ])
                .values_panic([
                    code.into(),
                    name.into(),
                    tipo_actor.into(),
                    umbral.into(),
                    comparador.into(),
                ])
                .to_owned();

            manager.exec_stmt(insert).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(Query::delete().from_table(SlaDefinition::Table).to_owned())
            .await?;

        manager
            .exec_stmt(Query::delete().from_table(KpiDefinition::Table).to_owned())
            .await?;

        Ok(())
    }
}
