use log::debug;

use crate::{Engine, SplitBuffers};

macro_rules! passes {
    ([ $( $name:ident => $class:ident, )* ]) => {
        $( mod $name; )*
        $( pub use self::$name::*; )*

        #[derive(Debug)]
        pub struct SplitPasses {
            $( pub $name: $class, )*
        }

        impl SplitPasses {
            pub fn new(engine: &Engine, buffers: &SplitBuffers) -> Self {
                debug!("Initializing split passes");

                Self {
                    $( $name: $class::new(engine, buffers), )*
                }
            }
        }
    };
}

passes!([
    path_init => PathInitPass,
]);
