//! Display classification of a single grid cell.

use serde::{Deserialize, Serialize};

use super::DayInfo;

/// Holiday counts above this are drawn as a wheel instead of a pie.
const PIE_MAX_SLICES: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DayType {
    Workday,
    Weekend,
    Invalid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MarkerType {
    None,
    Solid,
    Pie,
    Wheel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MarkerSize {
    Workday,
    Weekend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRenderModel {
    pub day_type: DayType,
    pub holiday_count: usize,
    pub marker_type: MarkerType,
    pub marker_size: MarkerSize,
}

pub fn compute_cell_render_model(day: Option<&DayInfo>) -> CellRenderModel {
    let Some(day) = day.filter(|d| d.is_valid) else {
        return CellRenderModel {
            day_type: DayType::Invalid,
            holiday_count: 0,
            marker_type: MarkerType::None,
            marker_size: MarkerSize::Workday,
        };
    };

    let holiday_count = day.holiday_count();
    let marker_type = match holiday_count {
        0 => MarkerType::None,
        1 => MarkerType::Solid,
        n if n <= PIE_MAX_SLICES => MarkerType::Pie,
        _ => MarkerType::Wheel,
    };

    let (day_type, marker_size) = if day.is_global_weekend {
        (DayType::Weekend, MarkerSize::Weekend)
    } else {
        (DayType::Workday, MarkerSize::Workday)
    };

    CellRenderModel {
        day_type,
        holiday_count,
        marker_type,
        marker_size,
    }
}
