mod film_buffer;
mod rng_state_buffer;
mod slot_table;
mod work_pools;

pub use self::film_buffer::*;
pub use self::rng_state_buffer::*;
pub use self::slot_table::*;
pub use self::work_pools::*;
