/// Length of a jump's tone and actuator hold. Crouch holds twice as long.
pub const JUMP_DURATION_MS: u32 = 250;
pub const CROUCH_DURATION_MS: u32 = JUMP_DURATION_MS * 2;

/// Samples per precomputed waveform period.
pub const WAVEFORM_SAMPLES: usize = 100;

/// Servo pulse widths inside a 20 ms frame.
pub const SERVO_FRAME_US: u16 = 20_000;
pub const SERVO_BASE_PULSE_US: u16 = 1_300;
pub const SERVO_PRESS_PULSE_US: u16 = 1_450;

/// Tone output is an 8-bit level centred on `TONE_MIDPOINT`.
pub const TONE_MIDPOINT: i32 = 128;
pub const TONE_SILENCE: u8 = 0;

pub const SCORE_INITIAL: u32 = 40;
pub const SCORE_STEP: u32 = 10;

/// Longest recognized command is `crouch`; one slot stays free for the cursor bound.
pub const COMMAND_BUF_LEN: usize = 8;
pub const COMMAND_TERMINATOR: u8 = b'\r';

pub const ACTION_QUEUE_DEPTH: usize = 4;

pub const KEY_JUMP: u8 = b'*';
pub const KEY_CROUCH: u8 = b'#';

// Defined for the photo-sensor path; nothing consults them yet.
pub const PHOTO_DOWN_THRESHOLD: u16 = 1_000;
pub const PHOTO_UP_THRESHOLD: u16 = 800;
