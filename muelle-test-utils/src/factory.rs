//! Fixture insert helpers.
//!
//! Thin wrappers over the entity ActiveModels so tests state only the
//! fields they care about. Vessel call estado is derived from the
//! timestamps provided, matching how the operational data arrives.

use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use entity::{
    actor::ActorTipo,
    appointment::AppointmentEstado,
    customs_procedure::TramiteEstado,
    gate_event::GateAccion,
    sla_definition::Comparador,
    vessel_call::VesselCallEstado,
};

pub fn dt(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    d(year, month, day).and_hms_opt(hour, minute, 0).unwrap()
}

pub fn d(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub async fn insert_berth(
    db: &DatabaseConnection,
    nombre: &str,
) -> Result<entity::berth::Model, DbErr> {
    entity::berth::ActiveModel {
        nombre: ActiveValue::Set(nombre.to_string()),
        activo: ActiveValue::Set(true),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn insert_company(
    db: &DatabaseConnection,
    nombre: &str,
) -> Result<entity::company::Model, DbErr> {
    entity::company::ActiveModel {
        nombre: ActiveValue::Set(nombre.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn insert_customs_entity(
    db: &DatabaseConnection,
    nombre: &str,
) -> Result<entity::customs_entity::Model, DbErr> {
    entity::customs_entity::ActiveModel {
        nombre: ActiveValue::Set(nombre.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn insert_vessel_call(
    db: &DatabaseConnection,
    berth_id: Option<i32>,
    ata: Option<NaiveDateTime>,
    atb: Option<NaiveDateTime>,
    atd: Option<NaiveDateTime>,
) -> Result<entity::vessel_call::Model, DbErr> {
    let estado = if atd.is_some() {
        VesselCallEstado::Zarpada
    } else if atb.is_some() {
        VesselCallEstado::Atracada
    } else {
        VesselCallEstado::Anunciada
    };

    entity::vessel_call::ActiveModel {
        nombre_buque: ActiveValue::Set("MV Prueba".to_string()),
        berth_id: ActiveValue::Set(berth_id),
        eta: ActiveValue::Set(None),
        etb: ActiveValue::Set(None),
        ata: ActiveValue::Set(ata),
        atb: ActiveValue::Set(atb),
        atd: ActiveValue::Set(atd),
        estado: ActiveValue::Set(estado),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn insert_appointment(
    db: &DatabaseConnection,
    company_id: i32,
    hora_programada: NaiveDateTime,
    hora_llegada: Option<NaiveDateTime>,
    estado: AppointmentEstado,
) -> Result<entity::appointment::Model, DbErr> {
    entity::appointment::ActiveModel {
        company_id: ActiveValue::Set(company_id),
        hora_programada: ActiveValue::Set(hora_programada),
        hora_llegada: ActiveValue::Set(hora_llegada),
        estado: ActiveValue::Set(estado),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn insert_customs_procedure(
    db: &DatabaseConnection,
    entidad_id: i32,
    fecha_inicio: NaiveDateTime,
    fecha_fin: Option<NaiveDateTime>,
    estado: TramiteEstado,
) -> Result<entity::customs_procedure::Model, DbErr> {
    entity::customs_procedure::ActiveModel {
        entidad_id: ActiveValue::Set(entidad_id),
        fecha_inicio: ActiveValue::Set(fecha_inicio),
        fecha_fin: ActiveValue::Set(fecha_fin),
        estado: ActiveValue::Set(estado),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn insert_gate_event(
    db: &DatabaseConnection,
    truck_placa: &str,
    accion: GateAccion,
    event_ts: NaiveDateTime,
) -> Result<entity::gate_event::Model, DbErr> {
    entity::gate_event::ActiveModel {
        truck_placa: ActiveValue::Set(truck_placa.to_string()),
        accion: ActiveValue::Set(accion),
        event_ts: ActiveValue::Set(event_ts),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Seeds the KPI catalog with the same rows the production migration
/// inserts.
pub async fn seed_kpi_definitions(db: &DatabaseConnection) -> Result<(), DbErr> {
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
        entity::kpi_definition::ActiveModel {
            code: ActiveValue::Set(code.to_string()),
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(description.to_string()),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    Ok(())
}

/// Seeds the SLA catalog with the same rows the production migration
/// inserts.
pub async fn seed_sla_definitions(db: &DatabaseConnection) -> Result<(), DbErr> {
    let slas: [(&str, &str, ActorTipo, f64, Comparador); 4] = [
        (
            "sla_espera_camion",
            "Espera media de camiones",
            ActorTipo::Transportista,
            3.0,
            Comparador::Le,
        ),
        (
            "sla_puntualidad_citas",
            "Puntualidad de citas",
            ActorTipo::Transportista,
            80.0,
            Comparador::Ge,
        ),
        (
            "sla_ciclo_tramite",
            "Ciclo de tramite",
            ActorTipo::EntidadAduana,
            48.0,
            Comparador::Le,
        ),
        (
            "sla_despacho_aprobado",
            "Despachos aprobados",
            ActorTipo::EntidadAduana,
            85.0,
            Comparador::Ge,
        ),
    ];

    for (code, name, tipo_actor, umbral, comparador) in slas {
        entity::sla_definition::ActiveModel {
            code: ActiveValue::Set(code.to_string()),
            name: ActiveValue::Set(name.to_string()),
            tipo_actor: ActiveValue::Set(tipo_actor),
            umbral: ActiveValue::Set(umbral),
            comparador: ActiveValue::Set(comparador),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    Ok(())
}
