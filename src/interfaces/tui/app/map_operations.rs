//! Map viewport and zoom

use super::state::App;
use crate::interfaces::tui::constants::map::{MAX_ZOOM, MIN_ZOOM};

/// 地图可见范围（经度、纬度区间）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
}

impl Viewport {
    /// 以 (lat, lng) 为中心计算可见范围
    ///
    /// zoom 0 为整个世界；窗口超出地图边缘时整体平移回来，保持跨度不变
    pub fn centered(lat: f64, lng: f64, zoom: u8) -> Self {
        let scale = f64::from(1u32 << zoom.min(MAX_ZOOM));
        let lng_span = 360.0 / scale;
        let lat_span = 180.0 / scale;

        Self {
            x_bounds: clamp_window(lng, lng_span, -180.0, 180.0),
            y_bounds: clamp_window(lat, lat_span, -90.0, 90.0),
        }
    }
}

fn clamp_window(center: f64, span: f64, min: f64, max: f64) -> [f64; 2] {
    let half = span / 2.0;
    let mut low = center - half;
    let mut high = center + half;

    if low < min {
        high += min - low;
        low = min;
    }
    if high > max {
        low -= high - max;
        high = max;
    }

    [low.max(min), high.min(max)]
}

impl App {
    pub fn zoom_in(&mut self) {
        if self.map_zoom < MAX_ZOOM {
            self.map_zoom += 1;
        }
    }

    pub fn zoom_out(&mut self) {
        if self.map_zoom > MIN_ZOOM {
            self.map_zoom -= 1;
        }
    }

    /// 当前结果的地图范围，没有结果时为 None
    pub fn viewport(&self) -> Option<Viewport> {
        self.current_result().map(|r| {
            let (lat, lng) = r.coordinates();
            Viewport::centered(lat, lng, self.map_zoom)
        })
    }
}
