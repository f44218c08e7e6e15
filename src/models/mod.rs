pub mod cart;
pub mod category;
pub mod deal;
pub mod food;
pub mod order;
pub mod payment;
pub mod review;
pub mod user;

pub use cart::*;
pub use category::*;
pub use deal::*;
pub use food::*;
pub use order::*;
pub use payment::*;
pub use review::*;
pub use user::*;
