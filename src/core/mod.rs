pub mod clock;
pub mod controller;
pub mod fps;
pub mod input_adapter;

pub use clock::Clock;
pub use controller::{Button, Controller, InputSnapshot};
pub use fps::FpsCounter;
pub use input_adapter::WinitController;
