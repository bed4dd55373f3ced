//! The KPI catalog known to the aggregation core.
//!
//! Goals here are deliberately fixed constants, while the early-warning
//! detector reads its thresholds from the settings store; the two sources
//! are kept separate on purpose (they were configured independently in
//! operation and unifying them would silently change observed behavior).

/// A KPI tracked by the platform. Closed set so classification branches
/// are checked exhaustively at compile time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KpiCode {
    /// Mean vessel turnaround in hours (ATA to ATD).
    TurnaroundH,
    /// Mean truck waiting time in hours (scheduled slot to arrival),
    /// sign preserved.
    EsperaCamionH,
    /// Percentage of scheduled appointments attended within ±15 minutes.
    CumplCitasPct,
    /// Percentage of finished customs procedures approved.
    TramitesOkPct,
}

impl KpiCode {
    pub const ALL: [KpiCode; 4] = [
        KpiCode::TurnaroundH,
        KpiCode::EsperaCamionH,
        KpiCode::CumplCitasPct,
        KpiCode::TramitesOkPct,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            KpiCode::TurnaroundH => "turnaround_h",
            KpiCode::EsperaCamionH => "espera_camion_h",
            KpiCode::CumplCitasPct => "cumpl_citas_pct",
            KpiCode::TramitesOkPct => "tramites_ok_pct",
        }
    }

    pub fn nombre(self) -> &'static str {
        match self {
            KpiCode::TurnaroundH => "Turnaround de naves",
            KpiCode::EsperaCamionH => "Espera de camiones",
            KpiCode::CumplCitasPct => "Cumplimiento de citas",
            KpiCode::TramitesOkPct => "Tramites aprobados",
        }
    }

    /// Fixed goal the KPI is measured against (hours or percent).
    pub fn meta(self) -> f64 {
        match self {
            KpiCode::TurnaroundH => 48.0,
            KpiCode::EsperaCamionH => 2.0,
            KpiCode::CumplCitasPct => 85.0,
            KpiCode::TramitesOkPct => 90.0,
        }
    }

    /// Source table recorded on each persisted snapshot for auditing.
    pub fn fuente(self) -> &'static str {
        match self {
            KpiCode::TurnaroundH => "vessel_call",
            KpiCode::EsperaCamionH | KpiCode::CumplCitasPct => "appointment",
            KpiCode::TramitesOkPct => "customs_procedure",
        }
    }

    /// Favorable direction: time-based KPIs improve downward, percentage
    /// KPIs improve upward. Encoded per KPI, never globally.
    pub fn lower_is_better(self) -> bool {
        matches!(self, KpiCode::TurnaroundH | KpiCode::EsperaCamionH)
    }

    /// Goal compliance uses the KPI's natural comparison direction.
    pub fn cumple_meta(self, valor: f64) -> bool {
        if self.lower_is_better() {
            valor <= self.meta()
        } else {
            valor >= self.meta()
        }
    }
}
