pub mod americano;
pub mod playoffs;
pub mod round_robin;

pub use americano::generate_americano;
pub use playoffs::generate_playoffs;
pub use round_robin::generate_round_robin;
