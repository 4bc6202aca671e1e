pub mod in_memory;
pub mod lock_registry;
