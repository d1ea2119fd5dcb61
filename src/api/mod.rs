// Route groups. Each sub-module owns its routes and handlers.

pub mod hello;
