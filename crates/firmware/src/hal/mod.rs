//! Board-level HAL pieces for the SAMD21 target.
//!
//! Both implement `embedded-hal` 1.0 traits, so the library code above
//! them only sees `DelayNs` and `StatefulOutputPin`.

pub mod delay;
pub mod status_led;

pub use delay::SpinDelay;
pub use status_led::StatusLed;
