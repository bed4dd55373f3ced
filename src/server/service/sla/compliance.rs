//! SLA compliance engine: per-actor evaluation against the SLA catalog,
//! tiered rollups, and an explicit measure-recording entry point.
//!
//! Evaluation is live and side-effect free; persisting `sla_measure` rows
//! (with lazy actor creation) happens only through [`SlaComplianceService::record_period`].

use std::collections::{BTreeMap, HashMap};

use chrono::{Duration, NaiveDate, Utc};
use entity::actor::ActorTipo;
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde_json::json;

use crate::{
    model::sla::{
        ActorComplianceReportDto, ComplianceResponseDto, ComplianceSummaryDto, ComplianceTier,
        SlaEvaluationDto,
    },
    server::{
        data::{
            appointment::AppointmentRepository, company::CompanyRepository,
            customs_entity::CustomsEntityRepository,
            customs_procedure::CustomsProcedureRepository,
            sla::{ActorRepository, SlaDefinitionRepository, SlaMeasureRepository},
        },
        error::Error,
        service::{metric, setting::SettingsService},
        util::time::{range_bounds, validate_range},
    },
};

/// Source table names recorded on actor proxies.
const REF_TABLE_COMPANY: &str = "company";
const REF_TABLE_CUSTOMS_ENTITY: &str = "customs_entity";

struct SlaEval {
    def: entity::sla_definition::Model,
    valor: f64,
    cumplio: bool,
    penalidad_pct: f64,
}

struct ActorEvaluation {
    ref_table: &'static str,
    ref_id: i32,
    tipo: ActorTipo,
    name: String,
    evals: Vec<SlaEval>,
}

pub struct SlaComplianceService<'a> {
    db: &'a DatabaseConnection,
    settings: &'a SettingsService<'a>,
}

impl<'a> SlaComplianceService<'a> {
    pub fn new(db: &'a DatabaseConnection, settings: &'a SettingsService<'a>) -> Self {
        Self { db, settings }
    }

    /// Evaluates every actor with activity in `[desde, hasta)` against the
    /// SLAs applicable to its type, and rolls the results up per actor and
    /// across the fleet. Live computation; nothing is persisted.
    pub async fn evaluate_actors(
        &self,
        desde: NaiveDate,
        hasta: NaiveDate,
    ) -> Result<ComplianceResponseDto, Error> {
        let evaluations = self.evaluate_range(desde, hasta).await?;

        let reports: Vec<ActorComplianceReportDto> =
            evaluations.iter().map(to_report).collect();

        let mut summary = ComplianceSummaryDto {
            total_actores: reports.len() as u32,
            excelente: 0,
            bueno: 0,
            regular: 0,
            critico: 0,
            promedio_cumplimiento: 0.0,
        };
        for report in &reports {
            match report.estado {
                ComplianceTier::Excelente => summary.excelente += 1,
                ComplianceTier::Bueno => summary.bueno += 1,
                ComplianceTier::Regular => summary.regular += 1,
                ComplianceTier::Critico => summary.critico += 1,
            }
        }
        let pcts: Vec<f64> = reports.iter().map(|r| r.pct_cumplimiento).collect();
        summary.promedio_cumplimiento = metric::round4(metric::mean(&pcts).unwrap_or(0.0));

        Ok(ComplianceResponseDto {
            desde,
            hasta,
            reports,
            summary,
        })
    }

    /// Persists one `sla_measure` row per (sla, actor) for the given day,
    /// lazily creating actor proxies on first use. Returns the number of
    /// measures inserted. Re-recording a period replaces its measures
    /// atomically, delete-then-insert on one transaction, so retries never
    /// accumulate duplicate rows. The penalty percent in effect is stamped
    /// into each measure's `extra`, so later rollups only sum what the
    /// measure carries.
    pub async fn record_period(&self, periodo: NaiveDate) -> Result<usize, Error> {
        let evaluations = self
            .evaluate_range(periodo, periodo + Duration::days(1))
            .await?;

        let actor_repo = ActorRepository::new(self.db);
        let measure_repo = SlaMeasureRepository::new(self.db);
        let now = Utc::now().naive_utc();

        let mut actor_ids = Vec::with_capacity(evaluations.len());
        for evaluation in &evaluations {
            let actor = actor_repo
                .get_or_create(
                    evaluation.ref_table,
                    evaluation.ref_id,
                    evaluation.tipo,
                    &evaluation.name,
                    now,
                )
                .await?;
            actor_ids.push(actor.id);
        }

        let txn = self.db.begin().await?;
        measure_repo.delete_for_period(&txn, periodo).await?;

        let mut inserted = 0usize;
        for (evaluation, actor_id) in evaluations.iter().zip(actor_ids) {
            for eval in &evaluation.evals {
                measure_repo
                    .insert(
                        &txn,
                        eval.def.id,
                        actor_id,
                        periodo,
                        eval.valor,
                        eval.cumplio,
                        json!({ "penalidad_pct": eval.penalidad_pct }),
                        now,
                    )
                    .await?;
                inserted += 1;
            }
        }

        txn.commit().await?;

        tracing::info!(
            "Recorded {} SLA measures for {} across {} actors",
            inserted,
            periodo,
            evaluations.len()
        );

        Ok(inserted)
    }

    async fn evaluate_range(
        &self,
        desde: NaiveDate,
        hasta: NaiveDate,
    ) -> Result<Vec<ActorEvaluation>, Error> {
        validate_range(desde, hasta)?;
        let (from, to) = range_bounds(desde, hasta);

        let def_repo = SlaDefinitionRepository::new(self.db);
        let transport_defs = def_repo.find_by_tipo(ActorTipo::Transportista).await?;
        let customs_defs = def_repo.find_by_tipo(ActorTipo::EntidadAduana).await?;

        let mut penalties: HashMap<i32, f64> = HashMap::new();
        for def in transport_defs.iter().chain(customs_defs.iter()) {
            let pct = self
                .settings
                .get_f64(&format!("penalidad_{}_pct", def.code), 0.0)
                .await?;
            penalties.insert(def.id, pct);
        }

        let mut evaluations = Vec::new();

        // Transport companies: discovered from appointment activity.
        let appointment_repo = AppointmentRepository::new(self.db);
        let scheduled = appointment_repo.find_scheduled_in_range(from, to).await?;
        let attended = appointment_repo.find_attended_in_range(from, to).await?;

        let mut scheduled_by_company: BTreeMap<i32, Vec<&entity::appointment::Model>> =
            BTreeMap::new();
        for cita in &scheduled {
            scheduled_by_company.entry(cita.company_id).or_default().push(cita);
        }
        let mut attended_by_company: BTreeMap<i32, Vec<&entity::appointment::Model>> =
            BTreeMap::new();
        for cita in &attended {
            attended_by_company.entry(cita.company_id).or_default().push(cita);
        }

        let company_ids: Vec<i32> = scheduled_by_company
            .keys()
            .chain(attended_by_company.keys())
            .copied()
            .collect::<std::collections::BTreeSet<i32>>()
            .into_iter()
            .collect();
        let company_names: HashMap<i32, String> = CompanyRepository::new(self.db)
            .find_by_ids(company_ids.clone())
            .await?
            .into_iter()
            .map(|c| (c.id, c.nombre))
            .collect();

        for company_id in company_ids {
            let espera = attended_by_company.get(&company_id).and_then(|citas| {
                let hours: Vec<f64> = citas
                    .iter()
                    .filter_map(|c| metric::waiting_time_hours(c))
                    .collect();
                metric::mean(&hours)
            });
            let puntualidad = scheduled_by_company.get(&company_id).map(|citas| {
                let a_tiempo = citas
                    .iter()
                    .filter(|c| {
                        matches!(
                            metric::classify_appointment(c),
                            Some((metric::PunctualityClass::ATiempo, _))
                        )
                    })
                    .count();
                metric::percentage(a_tiempo, citas.len())
            });

            let mut evals = Vec::new();
            for def in &transport_defs {
                let valor = match def.code.as_str() {
                    "sla_espera_camion" => espera,
                    "sla_puntualidad_citas" => puntualidad,
                    _ => None,
                };
                if let Some(valor) = valor {
                    evals.push(build_eval(def, valor, &penalties));
                }
            }

            if !evals.is_empty() {
                let name = company_names
                    .get(&company_id)
                    .cloned()
                    .unwrap_or_else(|| format!("company #{}", company_id));
                evaluations.push(ActorEvaluation {
                    ref_table: REF_TABLE_COMPANY,
                    ref_id: company_id,
                    tipo: ActorTipo::Transportista,
                    name,
                    evals,
                });
            }
        }

        // Customs entities: discovered from finished procedures.
        let tramites = CustomsProcedureRepository::new(self.db)
            .find_finished_in_range(from, to)
            .await?;
        let mut tramites_by_entidad: BTreeMap<i32, Vec<&entity::customs_procedure::Model>> =
            BTreeMap::new();
        for tramite in &tramites {
            tramites_by_entidad
                .entry(tramite.entidad_id)
                .or_default()
                .push(tramite);
        }

        let entidad_ids: Vec<i32> = tramites_by_entidad.keys().copied().collect();
        let entidad_names: HashMap<i32, String> = CustomsEntityRepository::new(self.db)
            .find_by_ids(entidad_ids.clone())
            .await?
            .into_iter()
            .map(|e| (e.id, e.nombre))
            .collect();

        for (entidad_id, tramites) in &tramites_by_entidad {
            let ciclo = {
                let hours: Vec<f64> = tramites
                    .iter()
                    .filter_map(|t| metric::customs_cycle_hours(t))
                    .collect();
                metric::mean(&hours)
            };
            let aprobados_pct = {
                let aprobados = tramites
                    .iter()
                    .filter(|t| t.estado == entity::customs_procedure::TramiteEstado::Aprobado)
                    .count();
                Some(metric::percentage(aprobados, tramites.len()))
            };

            let mut evals = Vec::new();
            for def in &customs_defs {
                let valor = match def.code.as_str() {
                    "sla_ciclo_tramite" => ciclo,
                    "sla_despacho_aprobado" => aprobados_pct,
                    _ => None,
                };
                if let Some(valor) = valor {
                    evals.push(build_eval(def, valor, &penalties));
                }
            }

            if !evals.is_empty() {
                let name = entidad_names
                    .get(entidad_id)
                    .cloned()
                    .unwrap_or_else(|| format!("customs_entity #{}", entidad_id));
                evaluations.push(ActorEvaluation {
                    ref_table: REF_TABLE_CUSTOMS_ENTITY,
                    ref_id: *entidad_id,
                    tipo: ActorTipo::EntidadAduana,
                    name,
                    evals,
                });
            }
        }

        Ok(evaluations)
    }
}

fn build_eval(
    def: &entity::sla_definition::Model,
    valor: f64,
    penalties: &HashMap<i32, f64>,
) -> SlaEval {
    let valor = metric::round4(valor);

    SlaEval {
        def: def.clone(),
        valor,
        cumplio: def.comparador.evaluate(valor, def.umbral),
        penalidad_pct: penalties.get(&def.id).copied().unwrap_or(0.0),
    }
}

fn to_report(evaluation: &ActorEvaluation) -> ActorComplianceReportDto {
    let total = evaluation.evals.len();
    let cumplidos = evaluation.evals.iter().filter(|e| e.cumplio).count();
    let pct = metric::round4(metric::percentage(cumplidos, total));

    // Only failed SLAs accrue penalties; the engine sums whatever each
    // evaluation carries, the schedule itself is external configuration.
    let penalidades_totales = metric::round4(
        evaluation
            .evals
            .iter()
            .filter(|e| !e.cumplio)
            .map(|e| e.penalidad_pct)
            .sum(),
    );

    ActorComplianceReportDto {
        ref_table: evaluation.ref_table.to_string(),
        ref_id: evaluation.ref_id,
        tipo: match evaluation.tipo {
            ActorTipo::Transportista => "TRANSPORTISTA".to_string(),
            ActorTipo::EntidadAduana => "ENTIDAD_ADUANA".to_string(),
        },
        nombre: evaluation.name.clone(),
        slas: evaluation
            .evals
            .iter()
            .map(|e| SlaEvaluationDto {
                codigo: e.def.code.clone(),
                nombre: e.def.name.clone(),
                valor: e.valor,
                umbral: e.def.umbral,
                comparador: comparador_str(e.def.comparador).to_string(),
                cumplio: e.cumplio,
                penalidad_pct: e.penalidad_pct,
            })
            .collect(),
        total_mediciones: total as u32,
        cumplidos: cumplidos as u32,
        pct_cumplimiento: pct,
        estado: ComplianceTier::from_pct(pct),
        penalidades_totales,
    }
}

fn comparador_str(comparador: entity::sla_definition::Comparador) -> &'static str {
    match comparador {
        entity::sla_definition::Comparador::Lt => "<",
        entity::sla_definition::Comparador::Le => "<=",
        entity::sla_definition::Comparador::Gt => ">",
        entity::sla_definition::Comparador::Ge => ">=",
    }
}
