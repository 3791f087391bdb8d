//! Shared components. The sign-up screen and the app shell are built from
//! these Pico.css wrappers.
pub mod pico;
