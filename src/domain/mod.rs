// Domain layer: lookup models only. No I/O here.

pub mod model;
