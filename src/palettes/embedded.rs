//! Embedded palettes
//!
//! Palettes compiled into the binary at build time.

// Include generated palettes from build script
include!(concat!(env!("OUT_DIR"), "/classic.rs"));
include!(concat!(env!("OUT_DIR"), "/extended.rs"));
