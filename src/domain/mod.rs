mod email;
mod item;
mod ledger;
mod money;
mod statistics;
mod student;

pub use email::*;
pub use item::*;
pub use ledger::*;
pub use money::*;
pub use statistics::*;
pub use student::*;
