use serde::{Deserialize, Serialize};

fn default_duration_ms() -> u64 {
    2000
}

fn default_width() -> u32 {
    280
}

fn default_height() -> u32 {
    70
}

fn default_top() -> i32 {
    20
}

fn default_margin() -> i32 {
    20
}

fn default_slide_frames() -> u32 {
    20
}

fn default_frame_ms() -> u64 {
    20
}

fn default_screen_width() -> u32 {
    1920
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct NotifierConfig {
    /// How long a toast stays up
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_top")]
    pub top: i32,
    /// Gap between the toast and the right screen edge
    #[serde(default = "default_margin")]
    pub margin: i32,
    #[serde(default = "default_slide_frames")]
    pub slide_frames: u32,
    #[serde(default = "default_frame_ms")]
    pub frame_ms: u64,
    /// Used when the primary monitor cannot be queried
    #[serde(default = "default_screen_width")]
    pub screen_width: u32,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            width: default_width(),
            height: default_height(),
            top: default_top(),
            margin: default_margin(),
            slide_frames: default_slide_frames(),
            frame_ms: default_frame_ms(),
            screen_width: default_screen_width(),
        }
    }
}
