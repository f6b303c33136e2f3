//! Pricing tiers shown on the landing page.

use crate::error::{Result, SiteError};
use crate::routes::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BillingCycle {
    #[default]
    Monthly,
    Yearly,
}

impl BillingCycle {
    pub fn from_yearly(yearly: bool) -> Self {
        if yearly {
            Self::Yearly
        } else {
            Self::Monthly
        }
    }

    /// Period suffix shown next to a price.
    pub fn period_label(&self) -> &'static str {
        match self {
            Self::Monthly => "mes",
            Self::Yearly => "año",
        }
    }
}

/// Feature rows compared across every plan, in display order.
pub const FEATURES: [&str; 15] = [
    "Módulo de cultivo",
    "Gestión de esquejes",
    "Stock",
    "Gestión de madres",
    "Dispositivos IoT",
    "Módulo médico",
    "Seguimiento de pacientes",
    "Módulo de dispensario",
    "Módulo de laboratorio",
    "Módulo de extracciones/resinas",
    "Módulo de aceites",
    "Insumos",
    "Gastos",
    "Gestión de socios",
    "Métricas",
];

#[derive(Clone, Copy, Debug)]
pub struct Plan {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// ARS per month when billed monthly.
    pub monthly_price: f64,
    /// ARS per year when billed yearly.
    pub yearly_price: f64,
    pub popular: bool,
    pub highlight: &'static str,
    pub cta: &'static str,
    /// Parallel to [`FEATURES`].
    pub included: [bool; 15],
}

pub const PLANS: [Plan; 3] = [
    Plan {
        id: "individual",
        name: "Individual",
        description: "Perfecto para gestión de cultivo personal",
        monthly_price: 6250.0,
        yearly_price: 45000.0,
        popular: false,
        highlight: "Ideal para comenzar",
        cta: "Iniciar Prueba Gratis",
        included: [
            true, true, true, true, false, false, false, false, false, false, false, false, false,
            false, false,
        ],
    },
    Plan {
        id: "team",
        name: "Equipo",
        description: "Para clubes y colectivos",
        monthly_price: 115000.0 / 12.0,
        yearly_price: 70000.0,
        popular: true,
        highlight: "Recomendado",
        cta: "Iniciar Prueba Gratis",
        included: [
            true, true, true, true, true, false, false, false, false, true, true, true, true,
            false, false,
        ],
    },
    Plan {
        id: "ngo",
        name: "ONG / Club",
        description: "Especializado para cumplimiento REPROCANN",
        monthly_price: 220000.0 / 12.0,
        yearly_price: 150000.0,
        popular: false,
        highlight: "Para organizaciones",
        cta: "Contactar Ventas",
        included: [true; 15],
    },
];

impl Plan {
    pub fn price(&self, cycle: BillingCycle) -> f64 {
        match cycle {
            BillingCycle::Monthly => self.monthly_price,
            BillingCycle::Yearly => self.yearly_price,
        }
    }

    /// What a year of monthly billing costs above the yearly price.
    pub fn yearly_savings(&self) -> f64 {
        self.monthly_price * 12.0 - self.yearly_price
    }

    pub fn features(&self) -> impl Iterator<Item = (&'static str, bool)> + '_ {
        FEATURES.iter().copied().zip(self.included.iter().copied())
    }

    /// Registration link that preselects this plan.
    pub fn register_href(&self) -> String {
        Route::Register {
            plan: Some(self.id.to_string()),
        }
        .href()
    }
}

pub fn find_plan(id: &str) -> Result<&'static Plan> {
    PLANS
        .iter()
        .find(|p| p.id.eq_ignore_ascii_case(id.trim()))
        .ok_or_else(|| SiteError::UnknownPlan(id.to_string()))
}

/// Format an ARS amount the way `es-AR` locales do: rounded to whole pesos
/// with `.` as the thousands separator (e.g. `45.000`).
pub fn format_ars(amount: f64) -> String {
    let rounded = amount.round();
    let negative = rounded < 0.0;
    let digits = format!("{}", rounded.abs() as u64);
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
