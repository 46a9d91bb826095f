use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Copy, Clone)]
pub struct DisplayFormat {
    pub chinese: bool,
    pub color: bool,
}

static DEFAULT_CHINESE: AtomicBool = AtomicBool::new(true);
static DEFAULT_COLOR: AtomicBool = AtomicBool::new(true);

impl DisplayFormat {
    pub fn set_default_chinese(chinese: bool) {
        DEFAULT_CHINESE.store(chinese, Ordering::Relaxed);
    }

    pub fn set_default_color(color: bool) {
        DEFAULT_COLOR.store(color, Ordering::Relaxed);
    }
}

impl Default for DisplayFormat {
    fn default() -> Self {
        Self {
            chinese: DEFAULT_CHINESE.load(Ordering::Relaxed),
            color: DEFAULT_COLOR.load(Ordering::Relaxed),
        }
    }
}
