//! Scroll-synchronized traceability timeline.
//!
//! Each of the N stages owns a trigger point `(index + 0.5) / N` on the
//! section's scroll progress. A stage is highlighted with a triangular
//! falloff around its trigger, and at most one stage is expanded at a time.

use crate::constants::{HIGHLIGHT_HALF_WIDTH, HIGHLIGHT_SCALE_BOOST, PARALLAX_MAX_PERCENT};

#[derive(Clone, Copy, Debug)]
pub struct Stage {
    pub id: u8,
    pub title: &'static str,
    pub description: &'static str,
    /// `#RRGGBB`
    pub color: &'static str,
    pub details: &'static [&'static str],
}

pub const STAGES: [Stage; 5] = [
    Stage {
        id: 1,
        title: "Germinación/Clones",
        description: "Estandarización genética y seguimiento del crecimiento inicial.",
        color: "#22C55E",
        details: &[
            "Gestión de lotes",
            "Control de tasa de efectividad",
            "Asignación de ID único",
        ],
    },
    Stage {
        id: 2,
        title: "Vegetativo",
        description: "Reflejo digital de tu sala en tiempo real. Gestión centralizada de nutrición, sanidad y tareas preventivas con respaldo de datos IoT.",
        color: "#4ADE80",
        details: &[
            "Integración de sensores IoT",
            "Seguimiento de nutrientes",
            "Análisis de crecimiento",
        ],
    },
    Stage {
        id: 3,
        title: "Floración",
        description: "Registro para la planificación de cosecha y monitoreo de indicadores de madurez.",
        color: "#86EFAC",
        details: &[
            "Perfilado de cannabinoides",
            "Optimización de cosecha",
            "Métricas de calidad",
        ],
    },
    Stage {
        id: 4,
        title: "Análisis de rendimiento",
        description: "Historial completo del ciclo de vida, auditoría de rendimiento y control de calidad post-producción.",
        color: "#A7F3D0",
        details: &[
            "Documentación de procesos",
            "Seguimiento de lotes",
            "Análisis de rendimiento",
        ],
    },
    Stage {
        id: 5,
        title: "Resultados de laboratorio",
        description: "Control de calidad orientado al paciente con analíticas de terceros.",
        color: "#D1FAE5",
        details: &[
            "Carga de información cromatográfica",
            "Análisis de cannabinoides",
            "Control de efectividad terapéutica",
        ],
    },
];

/// Catalog position of the stage with `id`.
pub fn stage_position(id: u8) -> Option<usize> {
    STAGES.iter().position(|s| s.id == id)
}

pub fn find_stage(id: u8) -> Option<&'static Stage> {
    stage_position(id).map(|i| &STAGES[i])
}

/// Scroll progress at which stage `index` of `stage_count` is centered.
#[inline]
pub fn trigger_point(index: usize, stage_count: usize) -> f32 {
    (index as f32 + 0.5) / stage_count.max(1) as f32
}

/// Highlight in \[0, 1\]: 1 at the stage's trigger point, falling linearly to
/// 0 at `trigger ± 0.1` and staying 0 beyond.
pub fn highlight_intensity(progress: f32, index: usize, stage_count: usize) -> f32 {
    let distance = (progress - trigger_point(index, stage_count)).abs();
    if distance.is_nan() || distance >= HIGHLIGHT_HALF_WIDTH {
        return 0.0;
    }
    1.0 - distance / HIGHLIGHT_HALF_WIDTH
}

/// Card scale for a given highlight: 1.0 idle, 1.1 at full highlight.
#[inline]
pub fn highlight_scale(intensity: f32) -> f32 {
    1.0 + HIGHLIGHT_SCALE_BOOST * intensity.clamp(0.0, 1.0)
}

/// Progress of a section through the viewport: 0 when its top edge meets the
/// bottom of the viewport, 1 when its bottom edge leaves through the top.
pub fn scroll_progress(rect_top: f64, rect_height: f64, viewport_height: f64) -> f32 {
    let span = viewport_height + rect_height;
    if span.is_nan() || span <= 0.0 {
        return 0.0;
    }
    ((viewport_height - rect_top) / span).clamp(0.0, 1.0) as f32
}

/// Vertical offset of the background grid, in percent of its height.
#[inline]
pub fn parallax_offset_percent(progress: f32) -> f32 {
    PARALLAX_MAX_PERCENT * progress.clamp(0.0, 1.0)
}

/// Exclusive expand/collapse selection over the stages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StageSelection {
    active: Option<usize>,
}

impl Default for StageSelection {
    fn default() -> Self {
        Self { active: Some(0) }
    }
}

impl StageSelection {
    pub fn none() -> Self {
        Self { active: None }
    }

    /// Expand `index`, or collapse it if it is already the active stage.
    pub fn toggle(&mut self, index: usize) {
        self.active = match self.active {
            Some(current) if current == index => None,
            _ => Some(index),
        };
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }
}
