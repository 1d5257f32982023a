//! Text-entered observers
//!
//! Ready-made models that can be attached to a console with
//! [`Console::on_text_entered`](crate::console::Console::on_text_entered).

pub mod echo_back;
pub mod msdos_emulator;

pub use echo_back::EchoBack;
pub use msdos_emulator::MsDosEmulator;
