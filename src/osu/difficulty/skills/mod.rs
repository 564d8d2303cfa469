pub use self::aim::{Aim, AimStrains};

mod aim;
