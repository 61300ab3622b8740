use glam::Vec2;

// ---------------- Pointer helpers ----------------

/// Maps client pixel coordinates to `[-1, 1]²` with +y pointing up.
#[inline]
pub fn normalize_pointer(client_x: f32, client_y: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 || !width.is_finite() || !height.is_finite() {
        return Vec2::ZERO;
    }
    let x = (client_x / width) * 2.0 - 1.0;
    let y = -(client_y / height) * 2.0 + 1.0;
    Vec2::new(x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0))
}

// ---------------- Frame timing ----------------

/// Frame delta in seconds, clamped so a long-hidden tab does not snap the mascot.
#[inline]
pub fn clamp_frame_dt(dt_sec: f32, max_dt_sec: f32) -> f32 {
    if dt_sec.is_finite() {
        dt_sec.clamp(0.0, max_dt_sec)
    } else {
        0.0
    }
}

/// Interprets the `data-minimal-fx` attribute value.
#[inline]
pub fn parse_flag(value: Option<&str>) -> bool {
    matches!(value.map(str::trim), Some("true") | Some("1"))
}
