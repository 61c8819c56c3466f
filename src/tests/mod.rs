#[cfg(feature = "alloc")]
mod stack;
