//! Application-level configuration constants.

// Countdown
pub const START_DURATION: u32 = 30;
pub const TICK_INTERVAL_MS: u32 = 1_000;

// Progress ring geometry (SVG user units)
pub const VIEWBOX_SIZE: u32 = 400;
pub const RING_RADIUS: f64 = 190.0;
pub const RING_STROKE_WIDTH: u32 = 8;

// Localized captions
pub const TITLE: &str = "Cronômetro Digital";
pub const CAPTION_WAITING: &str = "AGUARDANDO";
pub const CAPTION_COUNTING: &str = "CONTAGEM ATIVA";
pub const CAPTION_EXPIRED: &str = "TEMPO ESGOTADO";

// Control labels
pub const LABEL_START: &str = "INICIAR";
pub const LABEL_PAUSE: &str = "PAUSA";
pub const ARIA_START: &str = "Iniciar";
pub const ARIA_PAUSE: &str = "Pausar";
pub const ARIA_RESET: &str = "Resetar";

// Unlit LED segments drawn behind the digits
pub const GHOST_DIGITS: &str = "88:88";
