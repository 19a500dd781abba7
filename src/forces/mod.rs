mod force;
mod gravity;
mod drag;
mod spring;

pub use self::force::{CustomForce, Force, ForceType};
pub use self::gravity::Gravity;
pub use self::drag::Drag;
pub use self::spring::Spring;
