/// Bridges the application layer to the graphics layer: the context
/// descriptor `sg_setup` needs, derived from the running app.
#[macro_export]
macro_rules! sglue_functions {
    ($($generator:ident)::+ ! { $($prefix:tt)* }) => {
        $($generator)::+! {
            $($prefix)*
            group = $crate::Group::GLUE;
            fn sapp_sgcontext() -> sg_context_desc;
        }
    };
}
