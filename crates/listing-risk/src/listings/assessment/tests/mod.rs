mod common;
mod engine;
mod explanation;
