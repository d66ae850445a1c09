pub mod path_init;
